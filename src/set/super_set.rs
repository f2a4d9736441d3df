//! The [`SuperSet`] container.
//!
//! A mutable, insertion-ordered set of unique elements with functional
//! operations and set algebra.
//!
//! # Time Complexity
//!
//! | Operation                          | Complexity          |
//! |------------------------------------|---------------------|
//! | `add` / `insert`                   | O(1) amortised      |
//! | `remove` / `take`                  | O(1) amortised      |
//! | `contains`                         | O(1) expected       |
//! | `len` / `is_empty`                 | O(1)                |
//! | `first` / `last`                   | O(1) amortised      |
//! | `map` / `filter` / `fold` / `join` | O(n)                |
//! | `union` / `xor`                    | O(n + m)            |
//! | `intersect` / `subtract`           | O(n)                |
//! | `is_subset_of` / `equals`          | O(n)                |
//!
//! Costs for `m` assume the operand answers `has_member` in O(1), as
//! `SuperSet` and `HashSet` do. Sequences answer in O(m).

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::DefaultHashBuilder;
use super::iter::{IntoIter, Iter};
use super::set_like::SetLike;
use super::store::OrderedStore;
use crate::error::EmptyReduceError;

/// Separator used by [`SuperSet::join_default`].
pub const DEFAULT_SEPARATOR: &str = ",";

/// An insertion-ordered set with functional operations and set algebra.
///
/// Elements are unique by `Eq`/`Hash`. Iteration yields them in the order in
/// which they were first added; adding a value already present is a no-op
/// and does not move it.
///
/// Mutators (`add`, `remove`, `clear`, `update`) work in place and return
/// `&mut Self` so calls can be chained. Every other operation leaves the
/// receiver and its operand untouched and returns a new value.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Hash` and `Eq` for most operations.
/// * `S` - The hash builder, [`DefaultHashBuilder`] unless given.
///
/// # Examples
///
/// ```rust
/// use superset::set::SuperSet;
///
/// let mut set = SuperSet::new();
/// set.add(3).add(1).add(2).add(3);
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.to_vec(), vec![3, 1, 2]);
/// assert_eq!(set.first(), Some(&3));
/// assert_eq!(set.join("-"), "3-1-2");
/// ```
#[derive(Clone)]
pub struct SuperSet<T, S = DefaultHashBuilder> {
    store: OrderedStore<T, S>,
}

static_assertions::assert_impl_all!(SuperSet<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(SuperSet<String>: Send, Sync, Clone, Default);

// =============================================================================
// Construction
// =============================================================================

impl<T> SuperSet<T> {
    /// Creates an empty set with the default hash builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set: SuperSet<i32> = SuperSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T, S> SuperSet<T, S> {
    /// Creates an empty set that hashes with `hash_builder`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::hash::RandomState;
    /// use superset::set::SuperSet;
    ///
    /// let mut set = SuperSet::with_hasher(RandomState::new());
    /// set.add("alpha");
    /// assert!(set.contains("alpha"));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(0, hash_builder)
    }

    /// Creates an empty set with room for `capacity` elements that hashes
    /// with `hash_builder`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            store: OrderedStore::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns the hash builder.
    #[inline]
    pub const fn hasher(&self) -> &S {
        self.store.hasher()
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns an iterator over the elements in insertion order.
    ///
    /// The iterator borrows the set, so a set can be traversed any number of
    /// times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set = SuperSet::from([2, 1, 2, 3]);
    /// let first_pass: Vec<&i32> = set.iter().collect();
    /// let second_pass: Vec<&i32> = set.iter().collect();
    ///
    /// assert_eq!(first_pass, vec![&2, &1, &3]);
    /// assert_eq!(first_pass, second_pass);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.store.entries(), self.store.len())
    }

    /// Returns the first element in insertion order, or `None` if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let mut set = SuperSet::new();
    /// assert_eq!(set.first(), None);
    ///
    /// set.add(std::f64::consts::PI.to_bits());
    /// assert_eq!(set.first(), Some(&std::f64::consts::PI.to_bits()));
    /// ```
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.store.first()
    }

    /// Returns the last element in insertion order, or `None` if the set is
    /// empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.store.last()
    }

    /// Returns the element at position `index` in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set = SuperSet::from(["x", "y", "z"]);
    /// assert_eq!(set.get_index(1), Some(&"y"));
    /// assert_eq!(set.get_index(3), None);
    /// ```
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.store.get_index(index)
    }

    /// Removes every element.
    ///
    /// Returns the set itself for chaining.
    #[inline]
    pub fn clear(&mut self) -> &mut Self {
        self.store.clear();
        self
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// The surviving elements keep their relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let mut set: SuperSet<i32> = (1..=6).collect();
    /// set.retain(|element| element % 2 == 0);
    /// assert_eq!(set.to_vec(), vec![2, 4, 6]);
    /// ```
    pub fn retain<F>(&mut self, predicate: F) -> &mut Self
    where
        F: FnMut(&T) -> bool,
    {
        self.store.retain(predicate);
        self
    }

    /// Reserves room for at least `additional` more elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.store.reserve(additional);
    }

    /// Shrinks the backing storage as much as possible.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.store.shrink_to_fit();
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// An empty set satisfies every predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set = SuperSet::from([1, 2, 3]);
    /// assert!(set.every(|element| *element >= 1));
    /// assert!(!set.every(|element| *element > 1));
    ///
    /// let empty: SuperSet<i32> = SuperSet::new();
    /// assert!(empty.every(|_| false));
    /// ```
    pub fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Returns `true` if at least one element satisfies `predicate`.
    ///
    /// An empty set satisfies no predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set = SuperSet::from([1, 2, 3]);
    /// assert!(set.some(|element| *element == 2));
    /// assert!(!set.some(|element| *element < 1));
    ///
    /// let empty: SuperSet<i32> = SuperSet::new();
    /// assert!(!empty.some(|_| true));
    /// ```
    pub fn some<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns the first element, in insertion order, that satisfies
    /// `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set = SuperSet::from([1, 2, 3]);
    /// assert_eq!(set.find(|element| *element > 1), Some(&2));
    /// assert_eq!(set.find(|element| *element > 3), None);
    /// ```
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|element| predicate(element))
    }

    /// Left-folds the elements in insertion order, starting from `initial`.
    ///
    /// This is `reduce` with an initial value, and never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set = SuperSet::from(["a", "b", "c"]);
    /// let concatenated = set.fold(String::new(), |mut accumulator, element| {
    ///     accumulator.push_str(element);
    ///     accumulator
    /// });
    /// assert_eq!(concatenated, "abc");
    ///
    /// let empty: SuperSet<i32> = SuperSet::new();
    /// assert_eq!(empty.fold(10, |accumulator, element| accumulator + element), 10);
    /// ```
    pub fn fold<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().fold(initial, combine)
    }

    /// Left-folds the elements in insertion order, seeded with the first
    /// element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyReduceError`] if the set is empty. Use
    /// [`fold`](Self::fold) to supply an initial value instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set = SuperSet::from([1, 2, 3]);
    /// assert_eq!(set.reduce(|accumulator, element| accumulator + element), Ok(6));
    /// ```
    pub fn reduce<F>(&self, combine: F) -> Result<T, EmptyReduceError>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let mut elements = self.iter();
        let seed = elements.next().ok_or(EmptyReduceError)?.clone();
        Ok(elements.fold(seed, combine))
    }

    /// Concatenates the elements' `Display` forms in insertion order,
    /// interleaved with `separator`.
    ///
    /// An empty set yields an empty string; a single element yields its own
    /// string form without any separator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set = SuperSet::from([1, 2, 3]);
    /// assert_eq!(set.join("//sep//"), "1//sep//2//sep//3");
    ///
    /// let single = SuperSet::from([1]);
    /// assert_eq!(single.join("//sep//"), "1");
    /// ```
    pub fn join(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        self.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// [`join`](Self::join) with [`DEFAULT_SEPARATOR`] (`","`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// assert_eq!(SuperSet::from([1, 2, 3]).join_default(), "1,2,3");
    /// ```
    pub fn join_default(&self) -> String
    where
        T: fmt::Display,
    {
        self.join(DEFAULT_SEPARATOR)
    }

    /// Collects the elements into a `Vec` in insertion order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Membership
// =============================================================================

impl<T, S> SuperSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Creates a set from `values` that hashes with `hash_builder`.
    ///
    /// Duplicates collapse to their first occurrence.
    pub fn from_iter_with_hasher<I>(values: I, hash_builder: S) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        let mut set = Self::with_capacity_and_hasher(values.size_hint().0, hash_builder);
        set.update(values);
        set
    }

    /// Returns `true` if the set contains `value`.
    ///
    /// Accepts any borrowed form of the element type, so a
    /// `SuperSet<String>` can be queried with a `&str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set = SuperSet::from(["hello".to_string()]);
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store.contains(value)
    }

    /// Adds `value` at the end of the iteration order, unless an equal value
    /// is already present.
    ///
    /// Returns `true` if the value was added.
    #[inline]
    pub fn insert(&mut self, value: T) -> bool {
        self.store.insert(value)
    }

    /// Adds `value` at the end of the iteration order, unless an equal value
    /// is already present.
    ///
    /// Returns the set itself for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let mut set = SuperSet::new();
    /// set.add(1).add(2).add(1);
    /// assert_eq!(set.to_vec(), vec![1, 2]);
    /// ```
    #[inline]
    pub fn add(&mut self, value: T) -> &mut Self {
        self.store.insert(value);
        self
    }

    /// Removes `value` if present. Removing an absent value does nothing.
    ///
    /// Returns the set itself for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let mut set = SuperSet::from([1, 2, 3]);
    /// set.remove(&2).remove(&42);
    /// assert_eq!(set.to_vec(), vec![1, 3]);
    /// ```
    #[inline]
    pub fn remove<Q>(&mut self, value: &Q) -> &mut Self
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store.take(value);
        self
    }

    /// Removes and returns the element equal to `value`, if present.
    #[inline]
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store.take(value)
    }

    /// Adds every value of `values`, in sequence order.
    ///
    /// Equivalent to calling [`add`](Self::add) for each value. Returns the
    /// set itself for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let mut set = SuperSet::from([1, 2, 3]);
    /// set.update([1, 2, 3]).update(vec![5, 4, 5]);
    /// assert_eq!(set.to_vec(), vec![1, 2, 3, 5, 4]);
    /// ```
    pub fn update<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        self.store.reserve(values.size_hint().0);

        let mut offered = 0_usize;
        let mut inserted = 0_usize;
        for value in values {
            offered += 1;
            if self.store.insert(value) {
                inserted += 1;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(offered, inserted, len = self.len(), "updated super set");
        debug_assert!(inserted <= offered);
        self
    }
}

// =============================================================================
// Functional Transforms
// =============================================================================

impl<T, S> SuperSet<T, S>
where
    S: BuildHasher + Clone,
{
    /// Applies `transform` to each element in insertion order and collects
    /// the results into a new set.
    ///
    /// Results that are equal collapse to their first occurrence, so the
    /// result is smaller than `self` whenever `transform` is not injective.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set = SuperSet::from([1, 2, 3]);
    /// assert_eq!(set.map(|element| element * element).to_vec(), vec![1, 4, 9]);
    /// assert_eq!(set.map(|_| 0).to_vec(), vec![0]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, mut transform: F) -> SuperSet<U, S>
    where
        U: Hash + Eq,
        F: FnMut(&T) -> U,
    {
        let mut mapped = SuperSet::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for element in self {
            mapped.insert(transform(element));
        }
        mapped
    }

    /// Applies `transform` to each element and collects every produced value
    /// into a new set, in production order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set = SuperSet::from([1, 2]);
    /// let expanded = set.flat_map(|element| [*element, element * 10]);
    /// assert_eq!(expanded.to_vec(), vec![1, 10, 2, 20]);
    /// ```
    #[must_use]
    pub fn flat_map<U, I, F>(&self, mut transform: F) -> SuperSet<U, S>
    where
        U: Hash + Eq,
        I: IntoIterator<Item = U>,
        F: FnMut(&T) -> I,
    {
        let mut mapped = SuperSet::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for element in self {
            mapped.update(transform(element));
        }
        mapped
    }
}

impl<T, S> SuperSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    /// Returns a new set of the elements that satisfy `predicate`, in
    /// insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set: SuperSet<i32> = (1..=5).collect();
    /// assert_eq!(set.filter(|element| element % 2 == 1).to_vec(), vec![1, 3, 5]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.collect_where(predicate)
    }

    /// Splits the set into the elements that satisfy `predicate` and those
    /// that do not. Both halves keep insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set: SuperSet<i32> = (1..=5).collect();
    /// let (even, odd) = set.partition(|element| element % 2 == 0);
    /// assert_eq!(even.to_vec(), vec![2, 4]);
    /// assert_eq!(odd.to_vec(), vec![1, 3, 5]);
    /// ```
    #[must_use]
    pub fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        let mut matching = Self::with_hasher(self.hasher().clone());
        let mut rest = Self::with_hasher(self.hasher().clone());
        for element in self {
            if predicate(element) {
                matching.insert(element.clone());
            } else {
                rest.insert(element.clone());
            }
        }
        (matching, rest)
    }

    fn collect_where<P>(&self, mut keep: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut collected = Self::with_hasher(self.hasher().clone());
        for element in self {
            if keep(element) {
                collected.insert(element.clone());
            }
        }
        collected
    }

    // =========================================================================
    // Set Algebra
    // =========================================================================

    /// Returns the elements of `self` or `other`.
    ///
    /// Order: all of `self` in its order, then the members of `other` not in
    /// `self`, in `other`'s order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set = SuperSet::from([1, 2, 3]);
    /// let other = SuperSet::from([2, 3, 4, 5]);
    /// assert_eq!(set.union(&other).to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn union<O>(&self, other: &O) -> Self
    where
        O: SetLike<T> + ?Sized,
    {
        let mut united = self.clone();
        united.update(other.members().cloned());
        united
    }

    /// Returns the elements present in both `self` and `other`, in `self`'s
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set = SuperSet::from([1, 2, 3]);
    /// assert_eq!(set.intersect(&[2, 3, 4, 5]).to_vec(), vec![2, 3]);
    /// ```
    #[must_use]
    pub fn intersect<O>(&self, other: &O) -> Self
    where
        O: SetLike<T> + ?Sized,
    {
        self.collect_where(|element| other.has_member(element))
    }

    /// Returns the elements of `self` that are not in `other`, in `self`'s
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set = SuperSet::from([1, 2, 3]);
    /// assert_eq!(set.subtract(&[2, 3, 4, 5]).to_vec(), vec![1]);
    /// ```
    #[must_use]
    pub fn subtract<O>(&self, other: &O) -> Self
    where
        O: SetLike<T> + ?Sized,
    {
        self.collect_where(|element| !other.has_member(element))
    }

    /// Returns the elements present in exactly one of `self` and `other`.
    ///
    /// Order: the surviving elements of `self` in its order, then the
    /// surviving members of `other` in `other`'s order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set = SuperSet::from([1, 2, 3]);
    /// assert_eq!(set.xor(&[2, 3, 4, 5]).to_vec(), vec![1, 4, 5]);
    /// ```
    #[must_use]
    pub fn xor<O>(&self, other: &O) -> Self
    where
        O: SetLike<T> + ?Sized,
    {
        let mut exclusive = self.subtract(other);
        exclusive.update(
            other
                .members()
                .filter(|element| !self.contains(*element))
                .cloned(),
        );
        exclusive
    }
}

// =============================================================================
// Relations
// =============================================================================

impl<T, S> SuperSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Returns `true` if every element of `self` is a member of `other`.
    ///
    /// The empty set is a subset of every set, and every set is a subset of
    /// itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let set = SuperSet::from([1, 2, 3]);
    /// assert!(!set.is_subset_of(&[2, 3, 4, 5]));
    /// assert!(set.is_subset_of(&[1, 2, 3, 4, 5]));
    /// assert!(set.is_subset_of(&set));
    /// assert!(SuperSet::<i32>::new().is_subset_of(&set));
    /// ```
    pub fn is_subset_of<O>(&self, other: &O) -> bool
    where
        O: SetLike<T> + ?Sized,
    {
        self.iter().all(|element| other.has_member(element))
    }

    /// Returns `true` if every member of `other` is an element of `self`.
    pub fn is_superset_of<O>(&self, other: &O) -> bool
    where
        O: SetLike<T> + ?Sized,
    {
        other.members().all(|element| self.contains(element))
    }

    /// Returns `true` if `self` and `other` have no element in common.
    pub fn is_disjoint_from<O>(&self, other: &O) -> bool
    where
        O: SetLike<T> + ?Sized,
    {
        !self.iter().any(|element| other.has_member(element))
    }

    /// Returns `true` if `self` and `other` hold exactly the same elements,
    /// regardless of order.
    ///
    /// `other` may be any [`SetLike`] collection: another `SuperSet`, a
    /// `HashSet`, a `BTreeSet`, a plain sequence viewed as a set, or any
    /// iterable gathered into a [`Distinct`](super::Distinct).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashSet;
    /// use superset::set::SuperSet;
    ///
    /// let set = SuperSet::from([1, 2, 3]);
    /// let plain: HashSet<i32> = [3, 2, 1].into_iter().collect();
    ///
    /// assert!(set.equals(&plain));
    /// assert!(set.equals(&SuperSet::from([3, 1, 2])));
    /// assert!(!set.equals(&[2, 3, 4, 5]));
    /// ```
    pub fn equals<O>(&self, other: &O) -> bool
    where
        O: SetLike<T> + ?Sized,
    {
        // With equal cardinalities, one-way inclusion makes the inclusion mutual.
        self.len() == other.member_count() && self.is_subset_of(other)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for SuperSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> FromIterator<T> for SuperSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with_hasher(iter, S::default())
    }
}

impl<T, const N: usize> From<[T; N]> for SuperSet<T>
where
    T: Hash + Eq,
{
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for SuperSet<T>
where
    T: Hash + Eq,
{
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, S> Extend<T> for SuperSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.update(iter);
    }
}

impl<'a, T, S> Extend<&'a T> for SuperSet<T, S>
where
    T: Hash + Eq + Copy + 'a,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.update(iter.into_iter().copied());
    }
}

impl<T, S> IntoIterator for SuperSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let remaining = self.store.len();
        IntoIter::new(self.store.into_entries(), remaining)
    }
}

impl<'a, T, S> IntoIterator for &'a SuperSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S1, S2> PartialEq<SuperSet<T, S2>> for SuperSet<T, S1>
where
    T: Hash + Eq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &SuperSet<T, S2>) -> bool {
        self.equals(other)
    }
}

impl<T, S> Eq for SuperSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T: fmt::Debug, S> fmt::Debug for SuperSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for SuperSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for SuperSet<T, S> {
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct SuperSetVisitor<T, S> {
    marker: std::marker::PhantomData<fn() -> SuperSet<T, S>>,
}

#[cfg(feature = "serde")]
impl<T, S> SuperSetVisitor<T, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for SuperSetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    type Value = SuperSet<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set =
            SuperSet::with_capacity_and_hasher(seq.size_hint().unwrap_or(0).min(4096), S::default());
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for SuperSet<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SuperSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display_empty() {
        let set: SuperSet<i32> = SuperSet::new();
        assert_eq!(format!("{set}"), "{}");
    }

    #[rstest]
    fn test_display_in_insertion_order() {
        let set = SuperSet::from([3, 1, 2]);
        assert_eq!(format!("{set}"), "{3, 1, 2}");
    }

    #[rstest]
    fn test_debug_uses_set_notation() {
        let set = SuperSet::from(["b", "a"]);
        assert_eq!(format!("{set:?}"), r#"{"b", "a"}"#);
    }

    #[rstest]
    fn test_equality_ignores_order() {
        assert_eq!(SuperSet::from([1, 2, 3]), SuperSet::from([3, 2, 1]));
        assert_ne!(SuperSet::from([1, 2, 3]), SuperSet::from([1, 2]));
    }

    #[rstest]
    fn test_equality_across_hashers() {
        let default_hashed = SuperSet::from([1, 2, 3]);
        let custom_hashed =
            SuperSet::from_iter_with_hasher([3, 1, 2], std::hash::RandomState::new());
        assert_eq!(default_hashed, custom_hashed);
    }

    #[rstest]
    fn test_map_keeps_hasher_type() {
        let set = SuperSet::with_hasher(std::hash::RandomState::new());
        let mapped: SuperSet<String, std::hash::RandomState> =
            set.map(|element: &i32| element.to_string());
        assert!(mapped.is_empty());
    }

    #[rstest]
    fn test_reduce_single_element_returns_it() {
        let set = SuperSet::from([7]);
        assert_eq!(set.reduce(|_, _| unreachable!()), Ok(7));
    }

    #[rstest]
    fn test_reduce_empty_fails() {
        let set: SuperSet<i32> = SuperSet::new();
        assert_eq!(
            set.reduce(|accumulator, element| accumulator + element),
            Err(EmptyReduceError)
        );
    }

    #[rstest]
    fn test_join_empty_is_empty_string() {
        let set: SuperSet<i32> = SuperSet::new();
        assert_eq!(set.join("//sep//"), "");
        assert_eq!(set.join_default(), "");
    }

    #[rstest]
    fn test_join_uses_display_form() {
        let set = SuperSet::from([10, -2, 300, -2]);
        assert_eq!(set.join(" | "), "10 | -2 | 300");
    }

    #[rstest]
    fn test_draining_through_first_keeps_order() {
        let mut set: SuperSet<i32> = (0..1000).collect();
        let mut drained = Vec::with_capacity(set.len());
        while let Some(head) = set.first().copied() {
            set.remove(&head);
            drained.push(head);
        }
        assert!(set.is_empty());
        assert_eq!(drained, (0..1000).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_extend_by_reference() {
        let mut set = SuperSet::from([1]);
        let more = [2, 1, 3];
        set.extend(more.iter());
        assert_eq!(set.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_into_iter_after_removals() {
        let mut set = SuperSet::from([1, 2, 3, 4]);
        set.remove(&2);
        let owned: Vec<i32> = set.into_iter().collect();
        assert_eq!(owned, vec![1, 3, 4]);
    }

    #[rstest]
    fn test_clone_is_independent() {
        let original = SuperSet::from([1, 2]);
        let mut copy = original.clone();
        copy.add(3);
        assert_eq!(original.len(), 2);
        assert_eq!(copy.len(), 3);
    }

    #[rstest]
    fn test_algebra_does_not_mutate_operands() {
        let left = SuperSet::from([1, 2, 3]);
        let right = SuperSet::from([2, 3, 4]);
        let _ = left.union(&right);
        let _ = left.intersect(&right);
        let _ = left.subtract(&right);
        let _ = left.xor(&right);
        assert_eq!(left.to_vec(), vec![1, 2, 3]);
        assert_eq!(right.to_vec(), vec![2, 3, 4]);
    }
}
