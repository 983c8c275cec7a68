//! Iterator types for the ordered map.

use alloc::vec;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::slice;

use hashbrown::HashMap;

/// An iterator over the entries of an [`OrderedMap`] in first-insertion
/// order.
///
/// This struct is created by the [`iter`] method on [`OrderedMap`]. See its
/// documentation for more.
///
/// [`iter`]: crate::ordered_map::OrderedMap::iter
/// [`OrderedMap`]: crate::ordered_map::OrderedMap
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V, S> {
    pub(crate) keys: slice::Iter<'a, K>,
    pub(crate) table: &'a HashMap<K, V, S>,
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> Iterator for Iter<'a, K, V, S> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let key = self.keys.next()?;
            if let Some(value) = self.table.get(key) {
                return Some((key, value));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.keys.len(), Some(self.keys.len()))
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> DoubleEndedIterator for Iter<'a, K, V, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            let key = self.keys.next_back()?;
            if let Some(value) = self.table.get(key) {
                return Some((key, value));
            }
        }
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> ExactSizeIterator for Iter<'a, K, V, S> {}

/// An iterator over the values of an [`OrderedMap`] in first-insertion
/// order of their keys.
///
/// This struct is created by the [`values`] method on [`OrderedMap`]. See
/// its documentation for more.
///
/// [`values`]: crate::ordered_map::OrderedMap::values
/// [`OrderedMap`]: crate::ordered_map::OrderedMap
#[derive(Debug, Clone)]
pub struct Values<'a, K, V, S> {
    pub(crate) iter: Iter<'a, K, V, S>,
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> Iterator for Values<'a, K, V, S> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> DoubleEndedIterator for Values<'a, K, V, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(_, value)| value)
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> ExactSizeIterator for Values<'a, K, V, S> {}

/// An owning iterator over the entries of an [`OrderedMap`] in
/// first-insertion order.
///
/// This struct is created by the [`into_iter`] method on [`OrderedMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`OrderedMap`]: crate::ordered_map::OrderedMap
#[derive(Debug)]
pub struct IntoIter<K, V, S> {
    pub(crate) keys: vec::IntoIter<K>,
    pub(crate) table: HashMap<K, V, S>,
}

impl<K: Hash + Eq, V, S: BuildHasher> Iterator for IntoIter<K, V, S> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let key = self.keys.next()?;
            if let Some(value) = self.table.remove(&key) {
                return Some((key, value));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.keys.len(), Some(self.keys.len()))
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> DoubleEndedIterator for IntoIter<K, V, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            let key = self.keys.next_back()?;
            if let Some(value) = self.table.remove(&key) {
                return Some((key, value));
            }
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ExactSizeIterator for IntoIter<K, V, S> {}
