use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// `pop` on a list in the empty representation.
    #[error("can't pop from empty list")]
    EmptyCollection,
    /// `get`/`set` with a negative index or one past the tail.
    #[error("index out of range")]
    IndexOutOfRange,
    /// `try_next` after the cursor moved past the tail.
    #[error("iterator exhausted")]
    IteratorExhausted,
}
