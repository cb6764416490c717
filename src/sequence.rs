//! # sequence
//!
//! eager container and the independent cursors created over it
//!

use std::iter::FusedIterator;

use crate::rt::Error;

/// fully materialized, ordered collection of values
///
/// every traversal starts from the first element, no matter how far other
/// cursors over the same sequence went
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    /// create a sequence owning the given values
    pub fn new(items: Vec<T>) -> Self {
        Sequence { items }
    }

    /// number of values
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// has no values
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// view the values
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// create a new cursor positioned at the first value
    #[inline]
    pub fn iter(&self) -> Cursor<'_, T> {
        Cursor {
            items: &self.items,
            pos: 0,
        }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Sequence::new(items)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Cursor<'a, T> {
        self.iter()
    }
}

/// cursor over a `Sequence`
///
/// owns its own position, advancing one cursor never moves another
#[derive(Debug, Clone)]
pub struct Cursor<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// index of the next value to hand out
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// values left before exhaustion
    #[inline]
    pub fn remaining(&self) -> usize {
        self.items.len() - self.pos
    }

    /// advance, `Err(Error::Done)` once every value was handed out
    #[inline]
    pub fn produce_next(&mut self) -> Result<&'a T, Error> {
        self.next().ok_or(Error::Done)
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let v = self.items.get(self.pos)?;
        self.pos += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<'a, T> ExactSizeIterator for Cursor<'a, T> {}

impl<'a, T> FusedIterator for Cursor<'a, T> {}
