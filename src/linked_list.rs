//! Singly-linked list implementation.
//!
//! Nodes live in a slot arena (a `Vec` of slots threaded with an internal
//! free list) instead of being individually heap-allocated. Links are
//! [`Ptr`] handles into the arena, so growth amortizes to one allocation
//! and slots freed by removals are reused by later insertions.
//!
//! # Examples
//!
//! ```
//! use lanyard::LinkedList;
//!
//! let mut chain = LinkedList::new();
//! chain.push_back(1);
//! chain.push_back(3);
//! chain.insert_before(&3, 2).unwrap();
//!
//! assert_eq!(chain.to_vec(), [1, 2, 3]);
//! ```

use alloc::vec::Vec;
use core::fmt;
use core::mem;

use crate::Error;
use crate::Ptr;

#[cold]
#[inline(never)]
fn assert_free() -> ! {
    panic!("Attempted to access data of free slot");
}

#[derive(Debug, Clone)]
enum ValueOrFree<T> {
    Free,
    Value(T),
}

#[derive(Debug, Clone)]
struct Slot<T> {
    next: Option<Ptr>,
    data: ValueOrFree<T>,
}

impl<T> Slot<T> {
    fn value(&self) -> &T {
        match &self.data {
            ValueOrFree::Value(value) => value,
            ValueOrFree::Free => assert_free(),
        }
    }
}

/// A singly-linked list whose nodes are stored in a slot arena.
///
/// Each insertion returns a [`Ptr`] handle that gives O(1) access to the
/// node afterwards. The splice operations ([`insert_before`],
/// [`insert_after`]) and the lookups ([`find`], [`remove_by_value`])
/// address nodes by value and match the first node that compares equal.
///
/// Handles are **non-generational**: removing a node frees its slot for
/// reuse, so a `Ptr` held across a removal may later resolve to a different
/// node. [`contains_ptr`] reports whether a handle currently resolves at
/// all.
///
/// Traversals over an empty list do not panic; operations that need a
/// starting node report [`Error::CollectionEmpty`] instead.
///
/// [`insert_before`]: LinkedList::insert_before
/// [`insert_after`]: LinkedList::insert_after
/// [`find`]: LinkedList::find
/// [`remove_by_value`]: LinkedList::remove_by_value
/// [`contains_ptr`]: LinkedList::contains_ptr
///
/// # Examples
///
/// ```
/// use lanyard::LinkedList;
///
/// let mut chain = LinkedList::new();
/// let ptr = chain.push_back("a");
/// chain.push_back("b");
///
/// assert_eq!(chain.get(ptr), Some(&"a"));
/// assert_eq!(chain.remove_by_value(&"a"), Some("a"));
/// assert_eq!(chain.head(), Ok(&"b"));
/// ```
#[derive(Clone)]
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<Ptr>,
    tail: Option<Ptr>,
    free_head: Option<Ptr>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty linked list.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::LinkedList;
    ///
    /// let chain: LinkedList<i32> = LinkedList::new();
    /// assert!(chain.is_empty());
    /// ```
    pub fn new() -> Self {
        LinkedList {
            slots: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Creates a new, empty linked list with arena space for at least
    /// `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        LinkedList {
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all nodes and releases the arena's slots.
    ///
    /// All previously returned [`Ptr`] handles are invalidated.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free_head = None;
        self.len = 0;
    }

    /// Appends a value at the end of the list, returning a handle to the
    /// new node.
    ///
    /// This is O(1): the list tracks its tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::LinkedList;
    ///
    /// let mut chain = LinkedList::new();
    /// let ptr = chain.push_back(7);
    /// assert_eq!(chain.get(ptr), Some(&7));
    /// assert_eq!(chain.tail(), Ok(&7));
    /// ```
    pub fn push_back(&mut self, value: T) -> Ptr {
        let ptr = self.alloc_slot(value, None);
        match self.tail {
            Some(tail_ptr) => self.slots[tail_ptr.unchecked_get()].next = Some(ptr),
            None => self.head = Some(ptr),
        }
        self.tail = Some(ptr);
        self.len += 1;
        ptr
    }

    /// Returns a reference to the first value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CollectionEmpty`] if the list has no nodes.
    pub fn head(&self) -> Result<&T, Error> {
        match self.head {
            Some(ptr) => Ok(self.slots[ptr.unchecked_get()].value()),
            None => Err(Error::CollectionEmpty),
        }
    }

    /// Returns a reference to the last value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CollectionEmpty`] if the list has no nodes.
    pub fn tail(&self) -> Result<&T, Error> {
        match self.tail {
            Some(ptr) => Ok(self.slots[ptr.unchecked_get()].value()),
            None => Err(Error::CollectionEmpty),
        }
    }

    /// Returns a handle to the first node, if any.
    pub fn head_ptr(&self) -> Option<Ptr> {
        self.head
    }

    /// Returns a handle to the last node, if any.
    pub fn tail_ptr(&self) -> Option<Ptr> {
        self.tail
    }

    /// Returns a reference to the value of the node `ptr` resolves to, or
    /// `None` if the handle does not currently name a live node.
    pub fn get(&self, ptr: Ptr) -> Option<&T> {
        match self.slots.get(ptr.unchecked_get()) {
            Some(Slot {
                data: ValueOrFree::Value(value),
                ..
            }) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value of the node `ptr` resolves
    /// to, or `None` if the handle does not currently name a live node.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::LinkedList;
    ///
    /// let mut chain = LinkedList::new();
    /// let ptr = chain.push_back(1);
    /// *chain.get_mut(ptr).unwrap() = 10;
    /// assert_eq!(chain.to_vec(), [10]);
    /// ```
    pub fn get_mut(&mut self, ptr: Ptr) -> Option<&mut T> {
        match self.slots.get_mut(ptr.unchecked_get()) {
            Some(Slot {
                data: ValueOrFree::Value(value),
                ..
            }) => Some(value),
            _ => None,
        }
    }

    /// Returns a handle to the node after `ptr`, or `None` if `ptr` is the
    /// tail or does not currently name a live node.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::LinkedList;
    ///
    /// let mut chain = LinkedList::new();
    /// let first = chain.push_back("a");
    /// let second = chain.push_back("b");
    ///
    /// assert_eq!(chain.next_ptr(first), Some(second));
    /// assert_eq!(chain.next_ptr(second), None);
    /// ```
    pub fn next_ptr(&self, ptr: Ptr) -> Option<Ptr> {
        match self.slots.get(ptr.unchecked_get()) {
            Some(Slot {
                next,
                data: ValueOrFree::Value(_),
            }) => *next,
            _ => None,
        }
    }

    /// Returns `true` if `ptr` currently resolves to a live node.
    pub fn contains_ptr(&self, ptr: Ptr) -> bool {
        matches!(
            self.slots.get(ptr.unchecked_get()),
            Some(Slot {
                data: ValueOrFree::Value(_),
                ..
            })
        )
    }

    /// Returns an iterator over the values, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    fn alloc_slot(&mut self, value: T, next: Option<Ptr>) -> Ptr {
        match self.free_head {
            Some(ptr) => {
                let old = mem::replace(
                    &mut self.slots[ptr.unchecked_get()],
                    Slot {
                        next,
                        data: ValueOrFree::Value(value),
                    },
                );
                self.free_head = old.next;
                ptr
            }
            None => {
                let ptr = Ptr::unchecked_from(self.slots.len());
                self.slots.push(Slot {
                    next,
                    data: ValueOrFree::Value(value),
                });
                ptr
            }
        }
    }

    // Freed slots keep their storage and chain into the free list through
    // `next`; the next alloc_slot reuses them before growing the Vec.
    fn free_slot(&mut self, ptr: Ptr) -> T {
        let old = mem::replace(
            &mut self.slots[ptr.unchecked_get()],
            Slot {
                next: self.free_head,
                data: ValueOrFree::Free,
            },
        );
        self.free_head = Some(ptr);
        match old.data {
            ValueOrFree::Value(value) => value,
            ValueOrFree::Free => assert_free(),
        }
    }

    fn pop_front(&mut self) -> Option<T> {
        let ptr = self.head?;
        let next = self.slots[ptr.unchecked_get()].next;
        self.head = next;
        if next.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(self.free_slot(ptr))
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns a handle to the first node whose value equals `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CollectionEmpty`] if the list has no nodes, and
    /// [`Error::ValueNotFound`] if no node matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::Error;
    /// use lanyard::LinkedList;
    ///
    /// let mut chain = LinkedList::new();
    /// assert_eq!(chain.find(&1), Err(Error::CollectionEmpty));
    ///
    /// let ptr = chain.push_back(1);
    /// assert_eq!(chain.find(&1), Ok(ptr));
    /// assert_eq!(chain.find(&2), Err(Error::ValueNotFound));
    /// ```
    pub fn find(&self, value: &T) -> Result<Ptr, Error> {
        if self.is_empty() {
            return Err(Error::CollectionEmpty);
        }

        let mut cursor = self.head;
        while let Some(ptr) = cursor {
            let slot = &self.slots[ptr.unchecked_get()];
            if slot.value() == value {
                return Ok(ptr);
            }
            cursor = slot.next;
        }
        Err(Error::ValueNotFound)
    }

    /// Inserts `value` as a new node immediately before the first node
    /// equal to `target`, returning a handle to the new node.
    ///
    /// When the target is the head, the new node becomes the head.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CollectionEmpty`] if the list has no nodes, and
    /// [`Error::ValueNotFound`] if no node matches `target`; the list is
    /// left unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::LinkedList;
    ///
    /// let mut chain = LinkedList::new();
    /// chain.push_back("b");
    /// chain.push_back("c");
    ///
    /// chain.insert_before(&"b", "a").unwrap();
    /// assert_eq!(chain.to_vec(), ["a", "b", "c"]);
    /// assert_eq!(chain.head(), Ok(&"a"));
    /// ```
    pub fn insert_before(&mut self, target: &T, value: T) -> Result<Ptr, Error> {
        if self.is_empty() {
            return Err(Error::CollectionEmpty);
        }

        let mut prev: Option<Ptr> = None;
        let mut cursor = self.head;
        while let Some(ptr) = cursor {
            if self.slots[ptr.unchecked_get()].value() == target {
                let new_ptr = self.alloc_slot(value, Some(ptr));
                match prev {
                    Some(prev_ptr) => self.slots[prev_ptr.unchecked_get()].next = Some(new_ptr),
                    None => self.head = Some(new_ptr),
                }
                self.len += 1;
                return Ok(new_ptr);
            }
            prev = cursor;
            cursor = self.slots[ptr.unchecked_get()].next;
        }
        Err(Error::ValueNotFound)
    }

    /// Inserts `value` as a new node immediately after the first node equal
    /// to `target`, returning a handle to the new node.
    ///
    /// When the target is the tail, the new node becomes the tail.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CollectionEmpty`] if the list has no nodes, and
    /// [`Error::ValueNotFound`] if no node matches `target`; the list is
    /// left unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::LinkedList;
    ///
    /// let mut chain = LinkedList::new();
    /// chain.push_back("a");
    /// chain.push_back("c");
    ///
    /// chain.insert_after(&"a", "b").unwrap();
    /// assert_eq!(chain.to_vec(), ["a", "b", "c"]);
    /// ```
    pub fn insert_after(&mut self, target: &T, value: T) -> Result<Ptr, Error> {
        if self.is_empty() {
            return Err(Error::CollectionEmpty);
        }

        let mut cursor = self.head;
        while let Some(ptr) = cursor {
            if self.slots[ptr.unchecked_get()].value() == target {
                let next = self.slots[ptr.unchecked_get()].next;
                let new_ptr = self.alloc_slot(value, next);
                self.slots[ptr.unchecked_get()].next = Some(new_ptr);
                if self.tail == Some(ptr) {
                    self.tail = Some(new_ptr);
                }
                self.len += 1;
                return Ok(new_ptr);
            }
            cursor = self.slots[ptr.unchecked_get()].next;
        }
        Err(Error::ValueNotFound)
    }

    /// Removes the first node whose value equals `value` and returns the
    /// value, or `None` if no node matches.
    ///
    /// Head, tail, and length are all maintained; the freed slot is reused
    /// by later insertions. A missing value is not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard::LinkedList;
    ///
    /// let mut chain = LinkedList::new();
    /// chain.push_back(1);
    /// chain.push_back(2);
    /// chain.push_back(1);
    ///
    /// assert_eq!(chain.remove_by_value(&1), Some(1));
    /// assert_eq!(chain.to_vec(), [2, 1]);
    /// assert_eq!(chain.remove_by_value(&9), None);
    /// ```
    pub fn remove_by_value(&mut self, value: &T) -> Option<T> {
        let mut prev: Option<Ptr> = None;
        let mut cursor = self.head;
        while let Some(ptr) = cursor {
            if self.slots[ptr.unchecked_get()].value() == value {
                let next = self.slots[ptr.unchecked_get()].next;
                match prev {
                    Some(prev_ptr) => self.slots[prev_ptr.unchecked_get()].next = next,
                    None => self.head = next,
                }
                if self.tail == Some(ptr) {
                    self.tail = prev;
                }
                self.len -= 1;
                return Some(self.free_slot(ptr));
            }
            prev = cursor;
            cursor = self.slots[ptr.unchecked_get()].next;
        }
        None
    }
}

impl<T: Clone> LinkedList<T> {
    /// Returns the values as a `Vec`, head to tail.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

/// An iterator over the values of a [`LinkedList`], head to tail.
///
/// Created by [`LinkedList::iter`].
#[derive(Clone)]
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<Ptr>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        let ptr = self.cursor?;
        let slot = &list.slots[ptr.unchecked_get()];
        self.cursor = slot.next;
        self.remaining -= 1;
        Some(slot.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// An owning iterator over the values of a [`LinkedList`], head to tail.
///
/// Created by the [`IntoIterator`] impl for `LinkedList`.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn test_new_and_default() {
        let chain: LinkedList<i32> = LinkedList::default();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert_eq!(chain.head(), Err(Error::CollectionEmpty));
        assert_eq!(chain.tail(), Err(Error::CollectionEmpty));
        assert_eq!(chain.head_ptr(), None);
        assert_eq!(chain.tail_ptr(), None);
    }

    #[test]
    fn test_push_back_links_in_order() {
        let mut chain = LinkedList::new();
        chain.push_back("a");
        chain.push_back("b");
        chain.push_back("c");

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.to_vec(), ["a", "b", "c"]);
        assert_eq!(chain.head(), Ok(&"a"));
        assert_eq!(chain.tail(), Ok(&"c"));
    }

    #[test]
    fn test_push_back_returns_usable_ptr() {
        let mut chain = LinkedList::new();
        let first = chain.push_back(10);
        let second = chain.push_back(20);

        assert_eq!(chain.get(first), Some(&10));
        assert_eq!(chain.get(second), Some(&20));

        *chain.get_mut(first).unwrap() = 11;
        assert_eq!(chain.to_vec(), [11, 20]);
    }

    #[test]
    fn test_next_ptr_walks_chain() {
        let mut chain = LinkedList::new();
        let first = chain.push_back(1);
        let second = chain.push_back(2);
        let third = chain.push_back(3);

        assert_eq!(chain.head_ptr(), Some(first));
        assert_eq!(chain.next_ptr(first), Some(second));
        assert_eq!(chain.next_ptr(second), Some(third));
        assert_eq!(chain.next_ptr(third), None);
        assert_eq!(chain.tail_ptr(), Some(third));
    }

    #[test]
    fn test_find() {
        let mut chain = LinkedList::new();
        assert_eq!(chain.find(&1), Err(Error::CollectionEmpty));

        chain.push_back(1);
        let second = chain.push_back(2);

        assert_eq!(chain.find(&2), Ok(second));
        assert_eq!(chain.find(&3), Err(Error::ValueNotFound));
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut chain = LinkedList::new();
        let first = chain.push_back("dup");
        chain.push_back("dup");

        assert_eq!(chain.find(&"dup"), Ok(first));
    }

    #[test]
    fn test_insert_before_head_becomes_new_head() {
        let mut chain = LinkedList::new();
        chain.push_back("b");
        chain.push_back("c");

        let ptr = chain.insert_before(&"b", "a").unwrap();

        assert_eq!(chain.head(), Ok(&"a"));
        assert_eq!(chain.head_ptr(), Some(ptr));
        assert_eq!(chain.to_vec(), ["a", "b", "c"]);
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_insert_before_middle() {
        let mut chain = LinkedList::new();
        chain.push_back(1);
        chain.push_back(3);

        chain.insert_before(&3, 2).unwrap();

        assert_eq!(chain.to_vec(), [1, 2, 3]);
        assert_eq!(chain.tail(), Ok(&3));
    }

    #[test]
    fn test_insert_before_errors() {
        let mut chain = LinkedList::new();
        assert_eq!(chain.insert_before(&1, 0), Err(Error::CollectionEmpty));

        chain.push_back(1);
        assert_eq!(chain.insert_before(&9, 0), Err(Error::ValueNotFound));
        assert_eq!(chain.to_vec(), [1]);
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_insert_after_middle() {
        let mut chain = LinkedList::new();
        chain.push_back("a");
        chain.push_back("c");

        chain.insert_after(&"a", "b").unwrap();

        assert_eq!(chain.to_vec(), ["a", "b", "c"]);
    }

    #[test]
    fn test_insert_after_tail_becomes_new_tail() {
        let mut chain = LinkedList::new();
        chain.push_back(1);
        chain.push_back(2);

        let ptr = chain.insert_after(&2, 3).unwrap();

        assert_eq!(chain.tail(), Ok(&3));
        assert_eq!(chain.tail_ptr(), Some(ptr));
        assert_eq!(chain.to_vec(), [1, 2, 3]);

        // The tracked tail must stay correct for later appends.
        chain.push_back(4);
        assert_eq!(chain.to_vec(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_after_errors() {
        let mut chain = LinkedList::new();
        assert_eq!(chain.insert_after(&1, 0), Err(Error::CollectionEmpty));

        chain.push_back(1);
        assert_eq!(chain.insert_after(&9, 0), Err(Error::ValueNotFound));
        assert_eq!(chain.to_vec(), [1]);
    }

    #[test]
    fn test_remove_by_value_head() {
        let mut chain = LinkedList::new();
        chain.push_back(1);
        chain.push_back(2);
        chain.push_back(3);

        assert_eq!(chain.remove_by_value(&1), Some(1));
        assert_eq!(chain.head(), Ok(&2));
        assert_eq!(chain.to_vec(), [2, 3]);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_remove_by_value_tail() {
        let mut chain = LinkedList::new();
        chain.push_back(1);
        chain.push_back(2);
        chain.push_back(3);

        assert_eq!(chain.remove_by_value(&3), Some(3));
        assert_eq!(chain.tail(), Ok(&2));
        assert_eq!(chain.to_vec(), [1, 2]);

        // Appending after a tail removal must splice at the new tail.
        chain.push_back(4);
        assert_eq!(chain.to_vec(), [1, 2, 4]);
    }

    #[test]
    fn test_remove_by_value_middle_and_missing() {
        let mut chain = LinkedList::new();
        chain.push_back(1);
        chain.push_back(2);
        chain.push_back(3);

        assert_eq!(chain.remove_by_value(&2), Some(2));
        assert_eq!(chain.to_vec(), [1, 3]);

        assert_eq!(chain.remove_by_value(&9), None);
        assert_eq!(chain.to_vec(), [1, 3]);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_remove_by_value_first_occurrence() {
        let mut chain = LinkedList::new();
        chain.push_back("dup");
        chain.push_back("other");
        chain.push_back("dup");

        assert_eq!(chain.remove_by_value(&"dup"), Some("dup"));
        assert_eq!(chain.to_vec(), ["other", "dup"]);
    }

    #[test]
    fn test_remove_last_node_empties_list() {
        let mut chain = LinkedList::new();
        chain.push_back(1);

        assert_eq!(chain.remove_by_value(&1), Some(1));
        assert!(chain.is_empty());
        assert_eq!(chain.head(), Err(Error::CollectionEmpty));
        assert_eq!(chain.tail(), Err(Error::CollectionEmpty));

        chain.push_back(2);
        assert_eq!(chain.to_vec(), [2]);
    }

    #[test]
    fn test_removed_slot_is_reused() {
        let mut chain = LinkedList::new();
        let first = chain.push_back(1);
        chain.push_back(2);

        chain.remove_by_value(&1);
        assert!(!chain.contains_ptr(first));

        let reused = chain.push_back(3);
        assert_eq!(reused, first);
        assert_eq!(chain.to_vec(), [2, 3]);
    }

    #[test]
    fn test_get_mut_on_freed_slot_returns_none() {
        let mut chain = LinkedList::new();
        let ptr = chain.push_back(1);
        chain.push_back(2);

        chain.remove_by_value(&1);

        assert_eq!(chain.get(ptr), None);
        assert_eq!(chain.get_mut(ptr), None);
        assert_eq!(chain.to_vec(), [2]);
    }

    #[test]
    fn test_stale_ptr_resolves_to_reused_node() {
        let mut chain = LinkedList::new();
        let stale = chain.push_back("old");
        chain.remove_by_value(&"old");

        chain.push_back("new");
        assert_eq!(chain.get(stale), Some(&"new"));
    }

    #[test]
    fn test_contains_ptr_across_clear() {
        let mut chain = LinkedList::new();
        let ptr = chain.push_back(1);
        assert!(chain.contains_ptr(ptr));

        chain.clear();
        assert!(!chain.contains_ptr(ptr));
        assert!(chain.is_empty());
        assert_eq!(chain.head_ptr(), None);
    }

    #[test]
    fn test_iter_order_and_len() {
        let chain: LinkedList<i32> = (1..=4).collect();
        let mut iter = chain.iter();

        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), [&2, &3, &4]);
    }

    #[test]
    fn test_into_iter_drains_in_order() {
        let chain: LinkedList<_> = ["a", "b", "c"].into_iter().map(ToString::to_string).collect();
        let values: Vec<_> = chain.into_iter().collect();
        assert_eq!(values, ["a", "b", "c"]);
    }

    #[test]
    fn test_extend_appends() {
        let mut chain: LinkedList<i32> = LinkedList::new();
        chain.extend(vec![1, 2]);
        chain.extend([3]);
        assert_eq!(chain.to_vec(), [1, 2, 3]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original: LinkedList<i32> = (1..=3).collect();
        let mut copy = original.clone();

        copy.push_back(4);
        original.remove_by_value(&1);

        assert_eq!(original.to_vec(), [2, 3]);
        assert_eq!(copy.to_vec(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_clone_preserves_ptr_resolution() {
        let mut original = LinkedList::new();
        let ptr = original.push_back("a");
        original.push_back("b");

        let copy = original.clone();
        assert_eq!(copy.get(ptr), Some(&"a"));
    }

    #[test]
    fn test_debug_renders_as_list() {
        let chain: LinkedList<i32> = (1..=2).collect();
        assert_eq!(format!("{chain:?}"), "[1, 2]");
    }

    #[test]
    fn test_interleaved_splices_keep_chain_consistent() {
        let mut chain = LinkedList::new();
        chain.push_back(2);
        chain.insert_before(&2, 1).unwrap();
        chain.insert_after(&2, 4).unwrap();
        chain.insert_before(&4, 3).unwrap();
        chain.remove_by_value(&2);
        chain.push_back(5);

        assert_eq!(chain.to_vec(), [1, 3, 4, 5]);
        assert_eq!(chain.len(), 4);
        assert_eq!(chain.head(), Ok(&1));
        assert_eq!(chain.tail(), Ok(&5));
    }
}
