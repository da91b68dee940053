use std::iter::FusedIterator;

use crate::error::{ListError, Result};
use crate::node::Node;

/// Forward iterator over a list. Each call to [`Node::iter`] hands out a fresh
/// cursor, so two iterations over the same list never see each other.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a Node<T>) -> Self {
        Iter {
            next: if list.is_empty() { None } else { Some(list) },
        }
    }

    /// Like `next`, but running past the tail is an error.
    pub fn try_next(&mut self) -> Result<&'a T> {
        self.next().ok_or(ListError::IteratorExhausted)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.and_then(|node| {
            self.next = node.next.as_deref();
            node.val.as_ref()
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { next: self.next }
    }
}

pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut Node<T>) -> Self {
        IterMut {
            next: if list.is_empty() { None } else { Some(list) },
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().and_then(|node| {
            self.next = node.next.as_deref_mut();
            node.val.as_mut()
        })
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Consuming iterator; takes values from the head in O(1) each.
pub struct IntoIter<T>(Node<T>);

impl<T> IntoIter<T> {
    pub(crate) fn new(list: Node<T>) -> Self {
        IntoIter(list)
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.take_head()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
