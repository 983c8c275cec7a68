//! Dynamic list implementation.
//!
//! This module provides [`List`], a growable ordered sequence with
//! index-based and value-based access, in-place transforms, and
//! derived-copy operations (filter, dedup, concat). It is the ordering
//! backbone for [`OrderedMap`](crate::OrderedMap), which stores its keys in
//! a `List` to track first-insertion order.
//!
//! # Examples
//!
//! ```
//! use lanyard::List;
//!
//! let mut list = List::new();
//! list.push("a");
//! list.push("b");
//! list.push("a");
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.as_slice(), ["a", "b", "a"]);
//! ```

use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice;

use crate::Error;

/// A growable ordered sequence of values.
///
/// Duplicates are allowed; order is insertion order, except that removing an
/// element shifts every later element down by one position. Fallible
/// operations report [`Error::IndexOutOfRange`] or [`Error::ValueNotFound`]
/// instead of panicking; the panicking [`Index`] operator is available
/// for callers that have already validated their indexes.
///
/// # Examples
///
/// ```
/// use lanyard::List;
///
/// let mut list = List::from(vec![10, 20, 30]);
/// assert_eq!(list.remove(1), Ok(20));
/// assert_eq!(list.as_slice(), [10, 30]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct List<T> {
    items: Vec<T>,
}

impl<T> List<T> {
    /// Creates a new, empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::List;
    ///
    /// let list: List<i32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        List { items: Vec::new() }
    }

    /// Creates a new, empty list with space for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        List {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list contains no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes all elements from the list.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Appends a value to the end of the list.
    ///
    /// Duplicates are not checked; see [`push_if_absent`] to append only
    /// novel values.
    ///
    /// [`push_if_absent`]: List::push_if_absent
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::List;
    ///
    /// let mut list = List::new();
    /// list.push(1);
    /// list.push(1);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not in `[0, len)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::Error;
    /// use lanyard::List;
    ///
    /// let list = List::from(vec!["a", "b"]);
    /// assert_eq!(list.get(1), Ok(&"b"));
    /// assert_eq!(
    ///     list.get(2),
    ///     Err(Error::IndexOutOfRange { index: 2, len: 2 })
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.items.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Overwrites the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not in `[0, len)`;
    /// the list is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::List;
    ///
    /// let mut list = List::from(vec![1, 2, 3]);
    /// assert_eq!(list.set(0, 10), Ok(1));
    /// assert_eq!(list.as_slice(), [10, 2, 3]);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => Ok(mem::replace(slot, value)),
            None => Err(Error::IndexOutOfRange { index, len }),
        }
    }

    /// Removes and returns the element at `index`, shifting every later
    /// element down by one position.
    ///
    /// Elements before `index` are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not in `[0, len)`;
    /// the list is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::List;
    ///
    /// let mut list = List::from(vec!["s0", "s1", "s2"]);
    /// assert_eq!(list.remove(1), Ok("s1"));
    /// assert_eq!(list.as_slice(), ["s0", "s2"]);
    /// assert!(list.remove(9).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        if index < self.items.len() {
            Ok(self.items.remove(index))
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    /// Returns the elements as a slice, in order.
    ///
    /// The slice aliases the list's internal storage; it is a read-only
    /// view, not a copy.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the elements, in order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns an iterator over mutable references to the elements, in
    /// order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Calls `f(index, value)` for every element, in order.
    ///
    /// The list cannot be mutated while the iteration is in progress; use
    /// [`map_in_place`] or [`iter_mut`] to modify elements.
    ///
    /// [`map_in_place`]: List::map_in_place
    /// [`iter_mut`]: List::iter_mut
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::List;
    ///
    /// let list = List::from(vec![5, 6]);
    /// let mut seen = Vec::new();
    /// list.for_each(|index, value| seen.push((index, *value)));
    /// assert_eq!(seen, [(0, 5), (1, 6)]);
    /// ```
    pub fn for_each(&self, mut f: impl FnMut(usize, &T)) {
        for (index, value) in self.items.iter().enumerate() {
            f(index, value);
        }
    }

    /// Replaces every element with `f(element)`, visiting indexes in order.
    ///
    /// Each element is read before its slot is overwritten, so `f` always
    /// sees the original value.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::List;
    ///
    /// let mut list = List::from(vec![1, 2, 3]);
    /// list.map_in_place(|value| value * 10);
    /// assert_eq!(list.as_slice(), [10, 20, 30]);
    /// ```
    pub fn map_in_place(&mut self, mut f: impl FnMut(&T) -> T) {
        for value in &mut self.items {
            *value = f(value);
        }
    }

    /// Keeps only the elements for which `f` returns `true`, in place,
    /// preserving their relative order.
    pub fn retain(&mut self, f: impl FnMut(&T) -> bool) {
        self.items.retain(f);
    }
}

impl<T: PartialEq> List<T> {
    /// Returns `true` if any element equals `value`.
    ///
    /// This is an O(n) scan.
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Appends `value` only if no existing element equals it.
    ///
    /// Returns `true` if the value was appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.push_if_absent(1));
    /// assert!(!list.push_if_absent(1));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn push_if_absent(&mut self, value: T) -> bool {
        if self.contains(&value) {
            false
        } else {
            self.items.push(value);
            true
        }
    }

    /// Removes and returns the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueNotFound`] if no element matches; the list is
    /// left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::Error;
    /// use lanyard::List;
    ///
    /// let mut list = List::from(vec!["a", "b", "a"]);
    /// assert_eq!(list.remove_by_value(&"a"), Ok("a"));
    /// assert_eq!(list.as_slice(), ["b", "a"]);
    /// assert_eq!(list.remove_by_value(&"c"), Err(Error::ValueNotFound));
    /// ```
    pub fn remove_by_value(&mut self, value: &T) -> Result<T, Error> {
        match self.items.iter().position(|item| item == value) {
            Some(index) => Ok(self.items.remove(index)),
            None => Err(Error::ValueNotFound),
        }
    }
}

impl<T: Clone> List<T> {
    /// Returns a new list containing, in original order, every element for
    /// which `pred` returns `true`.
    ///
    /// The source list is never mutated; an empty source (or a predicate
    /// that matches nothing) yields a new empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::List;
    ///
    /// let list = List::from(vec![1, 2, 3, 4]);
    /// let even = list.filter(|value| value % 2 == 0);
    /// assert_eq!(even.as_slice(), [2, 4]);
    /// assert_eq!(list.len(), 4);
    /// ```
    pub fn filter(&self, mut pred: impl FnMut(&T) -> bool) -> List<T> {
        let mut filtered = List::new();
        for value in &self.items {
            if pred(value) {
                filtered.push(value.clone());
            }
        }
        filtered
    }

    /// Returns a new list holding this list's elements followed by
    /// `other`'s elements.
    ///
    /// Duplicates are kept; see [`deduplicated`] to drop them afterwards.
    ///
    /// [`deduplicated`]: List::deduplicated
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::List;
    ///
    /// let left = List::from(vec![1, 2]);
    /// let right = List::from(vec![2, 3]);
    /// assert_eq!(left.concat(&right).as_slice(), [1, 2, 2, 3]);
    /// ```
    pub fn concat(&self, other: &List<T>) -> List<T> {
        List {
            items: self
                .items
                .iter()
                .chain(other.items.iter())
                .cloned()
                .collect(),
        }
    }
}

impl<T: Clone + PartialEq> List<T> {
    /// Returns a new list keeping the first occurrence of each distinct
    /// value and dropping later duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::List;
    ///
    /// let list = List::from(vec![1, 2, 1, 3, 2]);
    /// assert_eq!(list.deduplicated().as_slice(), [1, 2, 3]);
    /// ```
    pub fn deduplicated(&self) -> List<T> {
        let mut deduped = List::new();
        for value in &self.items {
            deduped.push_if_absent(value.clone());
        }
        deduped
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        List { items }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for List<T> {
    type IntoIter = alloc::vec::IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type IntoIter = slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type IntoIter = slice::IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.items[index]
    }
}
