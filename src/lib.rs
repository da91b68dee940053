pub mod config;
pub mod error;
pub mod iter;
pub mod node;
pub mod selftest;

pub use error::{ListError, Result};
pub use iter::{IntoIter, Iter, IterMut};
pub use node::{LinkedList, Node};
