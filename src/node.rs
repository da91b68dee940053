/*
A list is its own head node. The empty list is a single node whose `val` is
`None` and whose `next` is `None`; every other node in a chain carries a value.
`is_empty` is the only place that representation is inspected.

append / pop walk to the tail, so both are O(n). push is O(1): the old head
value moves into a fresh second node and the new value takes the head slot.
*/

use std::fmt;

use log::{debug, trace};

use crate::error::{ListError, Result};
use crate::iter::{IntoIter, Iter, IterMut};

pub type LinkedList<T> = Node<T>;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub struct Node<T> {
    pub(crate) val: Option<T>,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// An empty list.
    pub fn new() -> Self {
        Node {
            val: None,
            next: None,
        }
    }

    /// A one-element list.
    pub fn with_value(val: T) -> Self {
        Node {
            val: Some(val),
            next: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.val.is_none()
    }

    /// Value held by this node; `None` only for the empty list.
    pub fn value(&self) -> Option<&T> {
        self.val.as_ref()
    }

    pub fn next_node(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Adds `val` as the new tail. Walks the whole chain: O(n).
    pub fn append(&mut self, val: T) {
        if self.is_empty() {
            debug!("append: list leaves the empty state");
            self.val = Some(val);
            return;
        }

        let mut steps = 1usize;
        let mut cur = &mut self.next;
        while let Some(node) = cur {
            cur = &mut node.next;
            steps += 1;
        }
        trace!("append: walked {} nodes to the tail", steps);

        *cur = Some(Box::new(Node::with_value(val)));
    }

    /// Removes and returns the tail value. Walks the whole chain: O(n).
    pub fn pop(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::EmptyCollection);
        }

        if self.next.is_none() {
            debug!("pop: last element removed, list is empty again");
            return self.val.take().ok_or(ListError::EmptyCollection);
        }

        // stop on the link that owns the tail
        let mut steps = 1usize;
        let mut cur = &mut self.next;
        while cur.as_ref().is_some_and(|node| node.next.is_some()) {
            if let Some(node) = cur {
                cur = &mut node.next;
                steps += 1;
            }
        }
        trace!("pop: walked {} nodes to the second-to-last", steps);

        cur.take()
            .and_then(|mut tail| tail.val.take())
            .ok_or(ListError::EmptyCollection)
    }

    /// Inserts `val` at the head in O(1).
    pub fn push(&mut self, val: T) {
        let Some(old) = self.val.replace(val) else {
            debug!("push: list leaves the empty state");
            return;
        };

        self.next = Some(Box::new(Node {
            val: Some(old),
            next: self.next.take(),
        }));
    }

    /// Re-threads the links in place and returns the new head.
    pub fn reversed(mut self) -> Node<T> {
        if self.is_empty() || self.next.is_none() {
            return self;
        }

        let mut prev: Link<T> = None;
        let mut cur: Link<T> = Some(Box::new(Node {
            val: self.val.take(),
            next: self.next.take(),
        }));
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        debug!("reversed: chain re-threaded");

        match prev {
            Some(head) => *head,
            None => Node::new(),
        }
    }

    /// Reverses this handle in place.
    pub fn reverse(&mut self) {
        let list = std::mem::take(self);
        *self = list.reversed();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Counts the nodes by traversal: O(n).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn contains(&self, val: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == val)
    }

    pub fn get(&self, index: isize) -> Result<&T> {
        self.node_at(index)?
            .val
            .as_ref()
            .ok_or(ListError::IndexOutOfRange)
    }

    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        self.node_at_mut(index)?
            .val
            .as_mut()
            .ok_or(ListError::IndexOutOfRange)
    }

    /// Overwrites the value at `index`; the list's shape never changes.
    pub fn set(&mut self, index: isize, val: T) -> Result<()> {
        *self.get_mut(index)? = val;
        Ok(())
    }

    /// `[v1, v2, v3]`, or `[]` for the empty list.
    pub fn to_bracket_string(&self) -> String
    where
        T: fmt::Display,
    {
        format!("[{}]", self.join(", "))
    }

    /// `v1->v2->v3`, or an empty string for the empty list.
    pub fn to_arrow_string(&self) -> String
    where
        T: fmt::Display,
    {
        self.join("->")
    }

    /// Detaches the head value in O(1), pulling the second node forward.
    pub(crate) fn take_head(&mut self) -> Option<T> {
        let val = self.val.take()?;
        if let Some(mut second) = self.next.take() {
            self.val = second.val.take();
            self.next = second.next.take();
        }
        Some(val)
    }

    fn join(&self, sep: &str) -> String
    where
        T: fmt::Display,
    {
        self.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(sep)
    }

    fn node_at(&self, index: isize) -> Result<&Node<T>> {
        let steps = usize::try_from(index).map_err(|_| ListError::IndexOutOfRange)?;
        let mut cur = self;
        for _ in 0..steps {
            cur = cur.next.as_deref().ok_or(ListError::IndexOutOfRange)?;
        }
        Ok(cur)
    }

    fn node_at_mut(&mut self, index: isize) -> Result<&mut Node<T>> {
        let steps = usize::try_from(index).map_err(|_| ListError::IndexOutOfRange)?;
        let mut cur = self;
        for _ in 0..steps {
            cur = cur.next.as_deref_mut().ok_or(ListError::IndexOutOfRange)?;
        }
        Ok(cur)
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Node::new()
    }
}

impl<T> From<Option<T>> for Node<T> {
    fn from(val: Option<T>) -> Self {
        Node { val, next: None }
    }
}

// The default drop would recurse once per node.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut cur = self.next.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_bracket_string())
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Node<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut iter = iter.into_iter();
        if self.is_empty() {
            match iter.next() {
                Some(val) => self.val = Some(val),
                None => return,
            }
        }

        let mut cur = &mut self.next;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        for val in iter {
            let node = cur.insert(Box::new(Node::with_value(val)));
            cur = &mut node.next;
        }
    }
}

impl<T> FromIterator<T> for Node<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Node::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for Node<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Node<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Node<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
