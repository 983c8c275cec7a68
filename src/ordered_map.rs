//! Insertion-ordered map implementation.
//!
//! This module provides the core [`OrderedMap`] type and related
//! functionality. The map pairs a hash table with a [`List`] of keys kept in
//! first-insertion order, providing O(1) lookups alongside predictable
//! iteration order.
//!
//! # Examples
//!
//! ```
//! use lanyard::ordered_map::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert("first", 1);
//! map.insert("second", 2);
//!
//! // Iteration preserves insertion order
//! let entries: Vec<_> = map.iter().collect();
//! assert_eq!(entries, [(&"first", &1), (&"second", &2)]);
//! ```

use alloc::format;
use core::fmt;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::ops::Index;
use core::ops::IndexMut;

use hashbrown::HashMap;
use hashbrown::hash_map;

use crate::Error;
use crate::RandomState;
use crate::list::List;

mod entry;
mod iter;

pub use entry::Entry;
pub use entry::OccupiedEntry;
pub use entry::VacantEntry;
pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::Values;

/// A hash map that iterates in the order keys were first inserted.
///
/// This data structure combines the O(1) lookup performance of a hash table
/// with a stable, observable iteration order. A [`List`] records each
/// distinct key once, in the order it first entered the map; the table
/// answers lookups. The two are kept synchronized across every operation:
/// after any mutation, the list and the table contain exactly the same key
/// set.
///
/// Overwriting an existing key's value does not move the key. Removing a key
/// and inserting it again places it at the end of the order.
///
/// The generic parameters are:
/// - `K`: Key type, must implement `Hash + Eq` (plus `Clone` for insertion,
///   since the key is stored in both the table and the order list)
/// - `V`: Value type
/// - `S`: Hash builder type, defaults to the standard hasher
///
/// # Examples
///
/// ```
/// use lanyard::ordered_map::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.insert("apple", 5);
/// map.insert("banana", 3);
/// map.insert("cherry", 8);
///
/// assert_eq!(map.keys(), ["apple", "banana", "cherry"]);
///
/// map.remove(&"banana");
/// map.insert("banana", 4);
/// assert_eq!(map.keys(), ["apple", "cherry", "banana"]);
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V, S = RandomState> {
    keys: List<K>,
    table: HashMap<K, V, S>,
}

impl<K: fmt::Debug + Hash + Eq, V: fmt::Debug, S: BuildHasher> fmt::Debug for OrderedMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S: BuildHasher + Default> Default for OrderedMap<K, V, S> {
    fn default() -> Self {
        OrderedMap::with_capacity_and_hasher(0, S::default())
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Creates a new ordered map with the specified capacity.
    ///
    /// The map will be able to hold at least `capacity` entries without
    /// reallocating. If `capacity` is 0, the map will not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::OrderedMap;
    ///
    /// let map: OrderedMap<&str, i32> = OrderedMap::with_capacity(10);
    /// assert_eq!(map.len(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedMap {
            keys: List::with_capacity(capacity),
            table: HashMap::with_capacity_and_hasher(capacity, RandomState::default()),
        }
    }

    /// Creates a new, empty ordered map.
    ///
    /// The map is initially created with a capacity of 0, so it will not
    /// allocate until the first entry is inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::OrderedMap;
    ///
    /// let mut map: OrderedMap<&str, i32> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// map.insert("key", 42);
    /// assert!(!map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
}

impl<K, V, S> OrderedMap<K, V, S> {
    /// Creates a new ordered map with the specified hasher.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates a new ordered map with the specified capacity and hasher.
    ///
    /// The map will use the given hasher to hash keys and will be able to
    /// hold at least `capacity` entries without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hashbrown::DefaultHashBuilder as RandomState;
    /// use lanyard::ordered_map::OrderedMap;
    ///
    /// let hasher = RandomState::default();
    /// let mut map: OrderedMap<&str, i32, _> = OrderedMap::with_capacity_and_hasher(10, hasher);
    /// map.insert("key", 42);
    /// ```
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        OrderedMap {
            keys: List::with_capacity(capacity),
            table: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Removes all entries from the map.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.table.clear();
    }

    /// Returns the keys as a slice, in first-insertion order.
    ///
    /// The slice aliases the map's internal order list; it reflects exactly
    /// the keys currently present.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    ///
    /// assert_eq!(map.keys(), ["a", "b"]);
    /// ```
    pub fn keys(&self) -> &[K] {
        self.keys.as_slice()
    }

    /// Returns an iterator over the entries in first-insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    ///
    /// for (key, value) in map.iter() {
    ///     println!("{key}: {value}");
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter {
            keys: self.keys.iter(),
            table: &self.table,
        }
    }

    /// Returns an iterator over the values in first-insertion order.
    pub fn values(&self) -> Values<'_, K, V, S> {
        Values { iter: self.iter() }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> OrderedMap<K, V, S> {
    /// Returns a reference to the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] carrying a rendering of the key if the
    /// map has no entry for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::Error;
    /// use lanyard::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "one");
    ///
    /// assert_eq!(map.get(&1), Ok(&"one"));
    /// assert_eq!(map.get(&2), Err(Error::KeyNotFound { key: "2".into() }));
    /// ```
    pub fn get(&self, key: &K) -> Result<&V, Error>
    where
        K: fmt::Debug,
    {
        match self.table.get(key) {
            Some(value) => Ok(value),
            None => Err(Error::KeyNotFound {
                key: format!("{key:?}"),
            }),
        }
    }

    /// Returns a mutable reference to the value for `key`, or `None` if the
    /// map has no entry for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("k", 1);
    ///
    /// *map.get_mut(&"k").unwrap() += 1;
    /// assert_eq!(map.get(&"k"), Ok(&2));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.table.get_mut(key)
    }

    /// Returns `true` if the map contains an entry for `key`.
    ///
    /// This is a table lookup; the order list is not scanned.
    pub fn contains_key(&self, key: &K) -> bool {
        self.table.contains_key(key)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, `None` is returned and the
    /// key is appended at the end of the insertion order.
    ///
    /// If the map did have this key present, the value is updated and the
    /// old value is returned. The key keeps its position in the order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.is_empty(), false);
    ///
    /// map.insert(37, "b");
    /// assert_eq!(map.insert(37, "c"), Some("b"));
    /// assert_eq!(map.get(&37), Ok(&"c"));
    /// assert_eq!(map.keys(), [37]);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Clone,
    {
        match self.entry(key) {
            Entry::Occupied(mut occupied_entry) => Some(occupied_entry.insert(value)),
            Entry::Vacant(vacant_entry) => {
                vacant_entry.insert(value);
                None
            }
        }
    }

    /// Inserts `value` only if the map has no entry for `key`, and returns a
    /// mutable reference to the entry's value either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("a", 1);
    ///
    /// assert_eq!(*map.insert_if_absent("a", 10), 1);
    /// assert_eq!(*map.insert_if_absent("b", 2), 2);
    /// assert_eq!(map.keys(), ["a", "b"]);
    /// ```
    pub fn insert_if_absent(&mut self, key: K, value: V) -> &mut V
    where
        K: Clone,
    {
        self.entry(key).or_insert(value)
    }

    /// Removes the entry for `key` and returns its value, or `None` if the
    /// map has no entry for it.
    ///
    /// On removal the key leaves both the table and the order list; a later
    /// reinsertion appends it at the end of the order. A missing key is not
    /// an error and leaves the map untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    ///
    /// assert_eq!(map.remove(&1), Some("one"));
    /// assert_eq!(map.remove(&1), None);
    /// assert_eq!(map.keys(), [2]);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        match self.table.remove(key) {
            Some(value) => {
                let removed = self.keys.remove_by_value(key);
                debug_assert!(removed.is_ok());
                Some(value)
            }
            None => None,
        }
    }

    /// Gets the entry for `key` for in-place manipulation.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("poneyland", 12);
    ///
    /// map.entry("poneyland").and_modify(|v| *v += 1).or_insert(42);
    /// assert_eq!(map.get(&"poneyland"), Ok(&13));
    ///
    /// map.entry("horseland").and_modify(|v| *v += 1).or_insert(42);
    /// assert_eq!(map.get(&"horseland"), Ok(&42));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, S> {
        match self.table.entry(key) {
            hash_map::Entry::Occupied(entry) => Entry::Occupied(OccupiedEntry {
                entry,
                keys: &mut self.keys,
            }),
            hash_map::Entry::Vacant(entry) => Entry::Vacant(VacantEntry {
                entry,
                keys: &mut self.keys,
            }),
        }
    }

    /// Calls `f` for every value, in first-insertion order of the keys.
    pub fn for_each_value(&self, mut f: impl FnMut(&V)) {
        for value in self.values() {
            f(value);
        }
    }

    /// Calls `f` for every key-value pair, in first-insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    ///
    /// let mut seen = Vec::new();
    /// map.for_each_entry(|key, value| seen.push((*key, *value)));
    /// assert_eq!(seen, [("a", 1), ("b", 2)]);
    /// ```
    pub fn for_each_entry(&self, mut f: impl FnMut(&K, &V)) {
        for (key, value) in self.iter() {
            f(key, value);
        }
    }

    /// Replaces every value with `f(value)`, visiting keys in
    /// first-insertion order.
    ///
    /// Each value is read before its slot is overwritten, so `f` always sees
    /// the original value. Keys and their order are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    ///
    /// map.map_values(|value| value * 10);
    /// assert_eq!(map.get(&"a"), Ok(&10));
    /// assert_eq!(map.get(&"b"), Ok(&20));
    /// ```
    pub fn map_values(&mut self, mut f: impl FnMut(&V) -> V) {
        for key in self.keys.iter() {
            if let Some(value) = self.table.get_mut(key) {
                *value = f(value);
            }
        }
    }

    /// Keeps only the entries for which `f` returns `true`.
    ///
    /// Entries are visited and surviving keys keep their relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    /// map.insert("c", 3);
    ///
    /// map.retain(|_key, value| *value % 2 == 1);
    /// assert_eq!(map.keys(), ["a", "c"]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let table = &mut self.table;
        self.keys.retain(|key| {
            let keep = table.get_mut(key).is_some_and(|value| f(key, value));
            if !keep {
                table.remove(key);
            }
            keep
        });
    }

    /// Returns a new map merging `self` and `other`, keeping `self`'s value
    /// wherever both maps contain the same key.
    ///
    /// The result's order is `self`'s keys in `self`'s order, followed by
    /// `other`'s novel keys in `other`'s order. Neither operand is mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::OrderedMap;
    ///
    /// let mut base = OrderedMap::new();
    /// base.insert(1, "a");
    /// let mut other = OrderedMap::new();
    /// other.insert(1, "b");
    /// other.insert(2, "c");
    ///
    /// let merged = base.concat_preferring_self(&other);
    /// assert_eq!(merged.get(&1), Ok(&"a"));
    /// assert_eq!(merged.get(&2), Ok(&"c"));
    /// assert_eq!(merged.keys(), [1, 2]);
    /// ```
    pub fn concat_preferring_self(&self, other: &Self) -> Self
    where
        K: Clone,
        V: Clone,
        S: Clone,
    {
        let mut merged = self.clone();
        for (key, value) in other.iter() {
            merged.entry(key.clone()).or_insert_with(|| value.clone());
        }
        merged
    }

    /// Returns a new map merging `self` and `other`, keeping `other`'s value
    /// wherever both maps contain the same key.
    ///
    /// The result's order is `self`'s keys in `self`'s order, followed by
    /// `other`'s novel keys in `other`'s order; an overwrite does not move
    /// the key. Neither operand is mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::OrderedMap;
    ///
    /// let mut base = OrderedMap::new();
    /// base.insert(1, "a");
    /// let mut other = OrderedMap::new();
    /// other.insert(1, "b");
    /// other.insert(2, "c");
    ///
    /// let merged = base.concat_preferring_other(&other);
    /// assert_eq!(merged.get(&1), Ok(&"b"));
    /// assert_eq!(merged.get(&2), Ok(&"c"));
    /// assert_eq!(merged.keys(), [1, 2]);
    /// ```
    pub fn concat_preferring_other(&self, other: &Self) -> Self
    where
        K: Clone,
        V: Clone,
        S: Clone,
    {
        let mut merged = self.clone();
        for (key, value) in other.iter() {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }
}

impl<K, V, S> PartialEq for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter()
            .all(|(key, value)| other.table.get(key).is_some_and(|v| *value == *v))
    }
}

impl<K, V, S> Eq for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

/// Builds an ordered map from an existing hash table, backfilling the
/// insertion order with the table's keys in the table's iteration order.
///
/// The resulting order is unspecified but internally consistent: `keys`,
/// `len`, and iteration all agree from the start.
impl<K, V, S> From<HashMap<K, V, S>> for OrderedMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn from(table: HashMap<K, V, S>) -> Self {
        let keys = table.keys().cloned().collect();
        OrderedMap { keys, table }
    }
}

impl<K, V, S> FromIterator<(K, V)> for OrderedMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for OrderedMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, S> Extend<(&'a K, &'a V)> for OrderedMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.clone(), value.clone());
        }
    }
}

impl<K, V, S> IntoIterator for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type IntoIter = IntoIter<K, V, S>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            keys: self.keys.into_iter(),
            table: self.table,
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type IntoIter = Iter<'a, K, V, S>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> Index<&K> for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Output = V;

    fn index(&self, key: &K) -> &Self::Output {
        self.table.get(key).expect("no entry found for key")
    }
}

impl<K, V, S> IndexMut<&K> for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn index_mut(&mut self, key: &K) -> &mut Self::Output {
        self.table.get_mut(key).expect("no entry found for key")
    }
}
