//! Insertion-order iterators over a [`SuperSet`](super::SuperSet).

use std::fmt;
use std::iter::FusedIterator;

/// A borrowing iterator over the elements of a [`SuperSet`](super::SuperSet),
/// in insertion order.
///
/// Created by [`SuperSet::iter`](super::SuperSet::iter).
///
/// # Examples
///
/// ```rust
/// use superset::set::SuperSet;
///
/// let set = SuperSet::from(["a", "b", "c"]);
/// let mut iterator = set.iter();
///
/// assert_eq!(iterator.len(), 3);
/// assert_eq!(iterator.next(), Some(&"a"));
/// assert_eq!(iterator.next_back(), Some(&"c"));
/// assert_eq!(iterator.next(), Some(&"b"));
/// assert_eq!(iterator.next(), None);
/// ```
pub struct Iter<'a, T> {
    entries: std::slice::Iter<'a, Option<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(entries: &'a [Option<T>], remaining: usize) -> Self {
        Self {
            entries: entries.iter(),
            remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let element = self.entries.by_ref().find_map(Option::as_ref)?;
        self.remaining -= 1;
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    #[inline]
    fn count(self) -> usize {
        self.remaining
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let element = self.entries.by_ref().rev().find_map(Option::as_ref)?;
        self.remaining -= 1;
        Some(element)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.clone()).finish()
    }
}

/// An owning iterator over the elements of a [`SuperSet`](super::SuperSet),
/// in insertion order.
///
/// Created by the [`IntoIterator`] implementation of
/// [`SuperSet`](super::SuperSet).
pub struct IntoIter<T> {
    entries: std::vec::IntoIter<Option<T>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(entries: Vec<Option<T>>, remaining: usize) -> Self {
        Self {
            entries: entries.into_iter(),
            remaining,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let element = self.entries.by_ref().flatten().next()?;
        self.remaining -= 1;
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let element = self.entries.by_ref().rev().flatten().next()?;
        self.remaining -= 1;
        Some(element)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.entries.as_slice().iter().flatten())
            .finish()
    }
}
