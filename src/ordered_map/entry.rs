//! Entry API for in-place manipulation of map entries.

use core::hash::BuildHasher;
use core::hash::Hash;

use hashbrown::hash_map;

use crate::list::List;

/// A view into a single entry in a map, which may either be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on
/// [`OrderedMap`].
///
/// [`entry`]: crate::ordered_map::OrderedMap::entry
/// [`OrderedMap`]: crate::ordered_map::OrderedMap
pub enum Entry<'a, K, V, S> {
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V, S>),
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V, S>),
}

impl<'a, K: Hash + Eq + Clone, V, S: BuildHasher> Entry<'a, K, V, S> {
    /// Ensures a value is in the entry by inserting the default if empty,
    /// and returns a mutable reference to the value in the entry.
    ///
    /// When inserting, the key is appended at the end of the map's
    /// insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    ///
    /// *map.entry("poneyland").or_insert(12) += 10;
    /// assert_eq!(map.get(&"poneyland"), Ok(&22));
    /// ```
    #[inline]
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Ensures a value is in the entry by inserting the result of the
    /// default function if empty, and returns a mutable reference to the
    /// value in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::OrderedMap;
    ///
    /// let mut map: OrderedMap<&str, Vec<i32>> = OrderedMap::new();
    ///
    /// map.entry("poneyland").or_insert_with(Vec::new).push(3);
    /// assert_eq!(map.get(&"poneyland"), Ok(&vec![3]));
    /// ```
    #[inline]
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts into the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    ///
    /// map.entry("poneyland").and_modify(|e| *e += 1).or_insert(42);
    /// assert_eq!(map.get(&"poneyland"), Ok(&42));
    ///
    /// map.entry("poneyland").and_modify(|e| *e += 1).or_insert(42);
    /// assert_eq!(map.get(&"poneyland"), Ok(&43));
    /// ```
    #[inline]
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        if let Entry::Occupied(mut entry) = self {
            f(entry.get_mut());
            Entry::Occupied(entry)
        } else {
            self
        }
    }
}

/// A view into an occupied entry in a map.
///
/// This struct is part of the [`Entry`] enum.
pub struct OccupiedEntry<'a, K, V, S> {
    pub(crate) entry: hash_map::OccupiedEntry<'a, K, V, S>,
    pub(crate) keys: &'a mut List<K>,
}

impl<'a, K, V, S> OccupiedEntry<'a, K, V, S> {
    /// Gets a reference to the key in the entry.
    #[inline]
    pub fn key(&self) -> &K {
        self.entry.key()
    }

    /// Gets a reference to the value in the entry.
    #[inline]
    pub fn get(&self) -> &V {
        self.entry.get()
    }

    /// Gets a mutable reference to the value in the entry.
    ///
    /// If you need a reference that may outlive the destruction of the
    /// entry, see [`into_mut`].
    ///
    /// [`into_mut`]: OccupiedEntry::into_mut
    #[inline]
    pub fn get_mut(&mut self) -> &mut V {
        self.entry.get_mut()
    }

    /// Converts the entry into a mutable reference to the value, with a
    /// lifetime bound to the map itself.
    #[inline]
    pub fn into_mut(self) -> &'a mut V {
        self.entry.into_mut()
    }

    /// Replaces the value in the entry, returning the old value.
    ///
    /// The key keeps its position in the map's insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::Entry;
    /// use lanyard::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("poneyland", 12);
    ///
    /// if let Entry::Occupied(mut entry) = map.entry("poneyland") {
    ///     assert_eq!(entry.insert(15), 12);
    /// }
    /// assert_eq!(map.get(&"poneyland"), Ok(&15));
    /// ```
    #[inline]
    pub fn insert(&mut self, value: V) -> V {
        self.entry.insert(value)
    }

    /// Removes the entry from the map, returning the key and value.
    ///
    /// The key leaves both the table and the order list.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::Entry;
    /// use lanyard::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("poneyland", 12);
    ///
    /// if let Entry::Occupied(entry) = map.entry("poneyland") {
    ///     assert_eq!(entry.remove_entry(), ("poneyland", 12));
    /// }
    /// assert!(!map.contains_key(&"poneyland"));
    /// ```
    pub fn remove_entry(self) -> (K, V)
    where
        K: PartialEq,
    {
        let (key, value) = self.entry.remove_entry();
        let removed = self.keys.remove_by_value(&key);
        debug_assert!(removed.is_ok());
        (key, value)
    }

    /// Removes the entry from the map, returning the value.
    pub fn remove(self) -> V
    where
        K: PartialEq,
    {
        self.remove_entry().1
    }
}

/// A view into a vacant entry in a map.
///
/// This struct is part of the [`Entry`] enum.
pub struct VacantEntry<'a, K, V, S> {
    pub(crate) entry: hash_map::VacantEntry<'a, K, V, S>,
    pub(crate) keys: &'a mut List<K>,
}

impl<'a, K, V, S> VacantEntry<'a, K, V, S> {
    /// Gets a reference to the key that would be used when inserting
    /// through the entry.
    #[inline]
    pub fn key(&self) -> &K {
        self.entry.key()
    }

    /// Takes ownership of the key, leaving the map unchanged.
    #[inline]
    pub fn into_key(self) -> K {
        self.entry.into_key()
    }
}

impl<'a, K: Hash + Eq + Clone, V, S: BuildHasher> VacantEntry<'a, K, V, S> {
    /// Sets the value of the entry and returns a mutable reference to it.
    ///
    /// The key is appended at the end of the map's insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::Entry;
    /// use lanyard::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("a", 1);
    ///
    /// if let Entry::Vacant(entry) = map.entry("b") {
    ///     entry.insert(2);
    /// }
    /// assert_eq!(map.keys(), ["a", "b"]);
    /// ```
    #[inline]
    pub fn insert(self, value: V) -> &'a mut V {
        self.keys.push(self.entry.key().clone());
        self.entry.insert(value)
    }
}
