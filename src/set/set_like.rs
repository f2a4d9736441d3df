//! The [`SetLike`] capability.
//!
//! Set algebra and relational operations on [`SuperSet`] accept any operand
//! that can be viewed as a finite set of `T`. Collections that already
//! guarantee uniqueness answer directly; plain sequences are viewed as the set
//! of their distinct elements, in first-occurrence order. Any other finite
//! iterable is collected into a [`Distinct`] first.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use super::{DefaultHashBuilder, SuperSet};

/// A finite collection viewed as a set of `T`.
///
/// # Contract
///
/// - `member_count` is the number of *distinct* members.
/// - `has_member(value)` is `true` exactly for the values `members` yields.
/// - `members` yields each distinct member exactly once.
///
/// # Examples
///
/// ```rust
/// use superset::set::{SetLike, SuperSet};
///
/// let sequence = vec![3, 1, 3, 2, 1];
/// assert_eq!(sequence.member_count(), 3);
/// assert!(sequence.has_member(&2));
/// assert_eq!(sequence.members().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
///
/// let set = SuperSet::from([1, 2, 3]);
/// assert!(set.equals(&sequence));
/// ```
pub trait SetLike<T> {
    /// Returns the number of distinct members.
    fn member_count(&self) -> usize;

    /// Returns `true` if `value` is a member.
    fn has_member(&self, value: &T) -> bool;

    /// Returns an iterator over the distinct members.
    fn members<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a;
}

impl<T, O> SetLike<T> for &O
where
    O: SetLike<T> + ?Sized,
{
    #[inline]
    fn member_count(&self) -> usize {
        (**self).member_count()
    }

    #[inline]
    fn has_member(&self, value: &T) -> bool {
        (**self).has_member(value)
    }

    fn members<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        (**self).members()
    }
}

/// Number of distinct values among `elements`.
fn distinct_count<'a, T>(elements: impl Iterator<Item = &'a T>) -> usize
where
    T: Hash + Eq + 'a,
{
    elements.collect::<HashSet<&T>>().len()
}

/// The first occurrence of each value among `elements`, in order.
fn first_occurrences<'a, T>(
    elements: impl Iterator<Item = &'a T> + 'a,
) -> impl Iterator<Item = &'a T> + 'a
where
    T: Hash + Eq + 'a,
{
    let mut seen = HashSet::new();
    elements.filter(move |element| seen.insert(*element))
}

impl<T, S> SetLike<T> for SuperSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn member_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn has_member(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn members<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T, S> SetLike<T> for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn member_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn has_member(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn members<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: Ord> SetLike<T> for BTreeSet<T> {
    #[inline]
    fn member_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn has_member(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn members<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: Hash + Eq> SetLike<T> for [T] {
    fn member_count(&self) -> usize {
        distinct_count(self.iter())
    }

    fn has_member(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn members<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        first_occurrences(self.iter())
    }
}

impl<T: Hash + Eq, const N: usize> SetLike<T> for [T; N] {
    fn member_count(&self) -> usize {
        self.as_slice().member_count()
    }

    fn has_member(&self, value: &T) -> bool {
        self.as_slice().has_member(value)
    }

    fn members<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        self.as_slice().members()
    }
}

impl<T: Hash + Eq> SetLike<T> for Vec<T> {
    fn member_count(&self) -> usize {
        self.as_slice().member_count()
    }

    fn has_member(&self, value: &T) -> bool {
        self.as_slice().has_member(value)
    }

    fn members<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        self.as_slice().members()
    }
}

impl<T: Hash + Eq> SetLike<T> for VecDeque<T> {
    fn member_count(&self) -> usize {
        distinct_count(self.iter())
    }

    fn has_member(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn members<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        first_occurrences(self.iter())
    }
}

// =============================================================================
// Distinct
// =============================================================================

/// Any finite iterable, viewed as the set of its distinct values in
/// first-occurrence order.
///
/// Algebra and relations borrow their operand, so values produced on the fly
/// (ranges, iterator adapters, drained collections) are gathered into a
/// `Distinct` first.
///
/// # Examples
///
/// ```rust
/// use superset::set::{Distinct, SuperSet};
///
/// let set = SuperSet::from([1, 2, 3]);
///
/// assert_eq!(set.union(&Distinct::new(2..=5)).to_vec(), vec![1, 2, 3, 4, 5]);
/// assert!(set.equals(&Distinct::new((1..=6).filter(|value| value % 2 == 0).map(|value| value / 2))));
///
/// let odd: Distinct<i32> = (0..10).filter(|value| value % 2 == 1).collect();
/// assert_eq!(set.intersect(&odd).to_vec(), vec![1, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct Distinct<T, S = DefaultHashBuilder> {
    members: SuperSet<T, S>,
}

impl<T: Hash + Eq> Distinct<T> {
    /// Collects `values`, keeping the first occurrence of each.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().collect()
    }
}

impl<T, S> Distinct<T, S> {
    /// Returns the collected values as a [`SuperSet`].
    pub fn into_inner(self) -> SuperSet<T, S> {
        self.members
    }
}

impl<T, S> FromIterator<T> for Distinct<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<T, S> SetLike<T> for Distinct<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn member_count(&self) -> usize {
        self.members.len()
    }

    #[inline]
    fn has_member(&self, value: &T) -> bool {
        self.members.contains(value)
    }

    fn members<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        self.members.iter()
    }
}
