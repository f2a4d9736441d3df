//! Insertion-ordered membership store.
//!
//! Elements live in a dense `Vec<Option<T>>` in the order they were added.
//! A `HashTable` maps each live element to its position in that vector.
//! Removal leaves a tombstone (`None`) behind. Tombstones at either end are
//! skipped at once: trailing ones are popped and leading ones are stepped over
//! by a head offset. Once tombstones outnumber live elements the vector is
//! compacted in a single pass and the table's positions are re-indexed
//! without rehashing.

use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

use hashbrown::HashTable;
use hashbrown::hash_table::Entry;

/// Stores below this many slots are never compacted.
const COMPACTION_FLOOR: usize = 16;

/// A hash table record: the cached hash and the slot holding the element.
#[derive(Clone, Copy, Debug)]
struct Slot {
    hash: u64,
    position: usize,
}

#[derive(Clone)]
pub(crate) struct OrderedStore<T, S> {
    entries: Vec<Option<T>>,
    /// Every slot before `head` is a tombstone.
    head: usize,
    index: HashTable<Slot>,
    hash_builder: S,
}

/// Returns `true` if the slot at `position` holds an element equal to `value`.
#[inline]
fn holds<T, Q>(entries: &[Option<T>], position: usize, value: &Q) -> bool
where
    T: Borrow<Q>,
    Q: Eq + ?Sized,
{
    entries
        .get(position)
        .and_then(Option::as_ref)
        .is_some_and(|element| element.borrow() == value)
}

impl<T, S> OrderedStore<T, S> {
    pub(crate) fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            head: 0,
            index: HashTable::with_capacity(capacity),
            hash_builder,
        }
    }

    #[inline]
    pub(crate) const fn hasher(&self) -> &S {
        &self.hash_builder
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of slots, live or tombstoned.
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.entries.len()
    }

    /// Slots from the head onwards.
    #[inline]
    pub(crate) fn entries(&self) -> &[Option<T>] {
        self.entries.get(self.head..).unwrap_or(&[])
    }

    pub(crate) fn into_entries(self) -> Vec<Option<T>> {
        let Self {
            mut entries, head, ..
        } = self;
        entries.drain(..head.min(entries.len()));
        entries
    }

    pub(crate) fn first(&self) -> Option<&T> {
        self.entries().iter().find_map(Option::as_ref)
    }

    pub(crate) fn last(&self) -> Option<&T> {
        self.entries.iter().rev().find_map(Option::as_ref)
    }

    pub(crate) fn get_index(&self, index: usize) -> Option<&T> {
        if self.entries.len() == self.index.len() {
            self.entries.get(index).and_then(Option::as_ref)
        } else {
            self.entries().iter().flatten().nth(index)
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.head = 0;
        self.index.clear();
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
        self.index.reserve(additional, |slot| slot.hash);
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        if self.entries.len() != self.index.len() {
            self.compact();
        }
        self.entries.shrink_to_fit();
        self.index.shrink_to_fit(|slot| slot.hash);
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub(crate) fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        for entry in &mut self.entries {
            if entry.as_ref().is_some_and(|element| !predicate(element)) {
                *entry = None;
            }
        }
        let entries = &self.entries;
        self.index
            .retain(|slot| entries.get(slot.position).is_some_and(Option::is_some));
        self.compact();
    }

    fn skip_leading_tombstones(&mut self) {
        while matches!(self.entries.get(self.head), Some(None)) {
            self.head += 1;
        }
    }

    fn trim_trailing_tombstones(&mut self) {
        while matches!(self.entries.last(), Some(None)) {
            self.entries.pop();
        }
        self.head = self.head.min(self.entries.len());
    }

    fn compact_if_sparse(&mut self) {
        let tombstones = self.entries.len() - self.index.len();
        if self.entries.len() >= COMPACTION_FLOOR && tombstones > self.index.len() {
            self.compact();
        }
    }

    /// Drops every tombstone and points the hash table at the new positions.
    fn compact(&mut self) {
        let slots_before = self.entries.len();
        let mut live = 0;
        let relocation: Vec<usize> = self
            .entries
            .iter()
            .map(|entry| {
                let position = live;
                if entry.is_some() {
                    live += 1;
                }
                position
            })
            .collect();

        self.entries.retain(Option::is_some);
        self.head = 0;
        for slot in self.index.iter_mut() {
            slot.position = relocation[slot.position];
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            slots_before,
            live = self.entries.len(),
            "compacted ordered store"
        );
        debug_assert_eq!(self.entries.len(), live);
        debug_assert!(slots_before >= live);
    }
}

impl<T, S> OrderedStore<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Returns the slot position of `value`, if present.
    pub(crate) fn position_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.index.is_empty() {
            return None;
        }
        let hash = self.hash_builder.hash_one(value);
        let entries = &self.entries;
        self.index
            .find(hash, |slot| {
                slot.hash == hash && holds(entries, slot.position, value)
            })
            .map(|slot| slot.position)
    }

    #[inline]
    pub(crate) fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position_of(value).is_some()
    }

    /// Appends `value` unless an equal element is already stored.
    ///
    /// Returns `true` if the value was inserted.
    pub(crate) fn insert(&mut self, value: T) -> bool {
        let hash = self.hash_builder.hash_one(&value);
        let position = self.entries.len();
        let entries = &self.entries;
        match self.index.entry(
            hash,
            |slot| slot.hash == hash && holds(entries, slot.position, &value),
            |slot| slot.hash,
        ) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(Slot { hash, position });
                self.entries.push(Some(value));
                true
            }
        }
    }

    /// Removes and returns the element equal to `value`, if present.
    pub(crate) fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.index.is_empty() {
            return None;
        }
        let hash = self.hash_builder.hash_one(value);
        let entries = &self.entries;
        let occupied = self
            .index
            .find_entry(hash, |slot| {
                slot.hash == hash && holds(entries, slot.position, value)
            })
            .ok()?;
        let (slot, _) = occupied.remove();
        let removed = self.entries.get_mut(slot.position).and_then(Option::take);

        self.skip_leading_tombstones();
        self.trim_trailing_tombstones();
        self.compact_if_sparse();
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::hash::RandomState;

    fn store_of(values: impl IntoIterator<Item = i32>) -> OrderedStore<i32, RandomState> {
        let mut store = OrderedStore::with_capacity_and_hasher(0, RandomState::new());
        for value in values {
            store.insert(value);
        }
        store
    }

    fn live(store: &OrderedStore<i32, RandomState>) -> Vec<i32> {
        store.entries().iter().flatten().copied().collect()
    }

    #[rstest]
    fn test_insert_appends_in_order() {
        let store = store_of([3, 1, 2]);
        assert_eq!(live(&store), vec![3, 1, 2]);
        assert_eq!(store.len(), 3);
    }

    #[rstest]
    fn test_insert_duplicate_is_rejected() {
        let mut store = store_of([1, 2]);
        assert!(!store.insert(1));
        assert_eq!(live(&store), vec![1, 2]);
    }

    #[rstest]
    fn test_take_leaves_tombstone_in_the_middle() {
        let mut store = store_of([1, 2, 3]);
        assert_eq!(store.take(&2), Some(2));
        assert_eq!(store.slot_count(), 3);
        assert_eq!(store.len(), 2);
        assert_eq!(live(&store), vec![1, 3]);
    }

    #[rstest]
    fn test_take_trims_trailing_tombstones() {
        let mut store = store_of([1, 2, 3]);
        store.take(&2);
        store.take(&3);
        assert_eq!(store.slot_count(), 1);
        assert_eq!(live(&store), vec![1]);
    }

    #[rstest]
    fn test_take_absent_returns_none() {
        let mut store = store_of([1, 2, 3]);
        assert_eq!(store.take(&42), None);
        assert_eq!(store.len(), 3);
    }

    #[rstest]
    fn test_reinsert_moves_to_end() {
        let mut store = store_of([1, 2, 3]);
        store.take(&1);
        store.insert(1);
        assert_eq!(live(&store), vec![2, 3, 1]);
        assert_eq!(store.position_of(&1), Some(3));
    }

    #[rstest]
    fn test_compaction_keeps_lookups_valid() {
        let mut store = store_of(0..64);
        for value in (0..64).filter(|value| value % 4 != 0) {
            store.take(&value);
        }

        assert_eq!(store.len(), 16);
        assert!(store.slot_count() < 64);
        assert_eq!(live(&store), (0..64).step_by(4).collect::<Vec<_>>());
        for (position, value) in (0..64).step_by(4).enumerate() {
            assert!(store.contains(&value));
            assert_eq!(store.get_index(position), Some(&value));
        }
    }

    #[rstest]
    fn test_small_store_is_not_compacted() {
        let mut store = store_of(0..8);
        for value in 0..7 {
            store.take(&value);
        }
        assert_eq!(store.len(), 1);
        assert_eq!(store.slot_count(), 8);
        assert_eq!(store.first(), Some(&7));
    }

    #[rstest]
    fn test_take_from_front_moves_head() {
        let mut store = store_of(0..100);
        for value in 0..40 {
            assert_eq!(store.take(&value), Some(value));
            assert_eq!(store.entries().first(), Some(&Some(value + 1)));
        }

        assert_eq!(store.slot_count(), 100);
        assert_eq!(store.entries().len(), 60);
        assert_eq!(store.first(), Some(&40));
        assert_eq!(store.get_index(0), Some(&40));
        assert_eq!(store.position_of(&40), Some(40));
    }

    #[rstest]
    fn test_draining_from_front_empties_store() {
        let mut store = store_of(0..10);
        while let Some(head) = store.first().copied() {
            store.take(&head);
        }
        assert!(store.is_empty());
        assert_eq!(store.slot_count(), 0);
        assert!(store.entries().is_empty());
        assert!(store.insert(5));
        assert_eq!(store.first(), Some(&5));
    }

    #[rstest]
    fn test_head_restarts_after_compaction() {
        let mut store = store_of(0..32);
        for value in 0..20 {
            store.take(&value);
        }
        // Compacted at the seventeenth removal, then three more from the front.
        assert_eq!(store.slot_count(), 15);
        assert_eq!(store.entries().len(), 12);
        assert_eq!(store.first(), Some(&20));
        assert_eq!(store.position_of(&20), Some(3));
        let owned: Vec<i32> = store.into_entries().into_iter().flatten().collect();
        assert_eq!(owned, (20..32).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_get_index_skips_tombstones() {
        let mut store = store_of([10, 20, 30, 40]);
        store.take(&20);
        assert_eq!(store.get_index(0), Some(&10));
        assert_eq!(store.get_index(1), Some(&30));
        assert_eq!(store.get_index(2), Some(&40));
        assert_eq!(store.get_index(3), None);
    }

    #[rstest]
    fn test_retain_compacts_and_reindexes() {
        let mut store = store_of(1..=10);
        store.retain(|value| value % 2 == 0);
        assert_eq!(live(&store), vec![2, 4, 6, 8, 10]);
        assert_eq!(store.slot_count(), 5);
        assert_eq!(store.position_of(&8), Some(3));
        assert!(!store.contains(&3));
    }

    #[rstest]
    fn test_shrink_to_fit_drops_tombstones() {
        let mut store = store_of([1, 2, 3]);
        store.take(&1);
        store.shrink_to_fit();
        assert_eq!(store.slot_count(), 2);
        assert_eq!(store.position_of(&3), Some(1));
    }

    #[rstest]
    fn test_borrowed_lookup() {
        let mut store: OrderedStore<String, RandomState> =
            OrderedStore::with_capacity_and_hasher(4, RandomState::new());
        store.insert("hello".to_string());
        store.insert("world".to_string());

        assert!(store.contains("hello"));
        assert_eq!(store.take("world"), Some("world".to_string()));
        assert!(!store.contains("world"));
    }

    #[rstest]
    fn test_clear_resets_everything() {
        let mut store = store_of([1, 2, 3]);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.slot_count(), 0);
        assert_eq!(store.first(), None);
        assert_eq!(store.last(), None);
    }
}
