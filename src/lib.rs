#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

mod error;
pub mod linked_list;
pub mod list;
pub mod ordered_map;

extern crate alloc;

#[cfg(feature = "std")]
type RandomState = std::hash::RandomState;
#[cfg(not(feature = "std"))]
type RandomState = hashbrown::DefaultHashBuilder;

/// A hash map that iterates in the order keys were first inserted,
/// implemented as a hash table synchronized with a key-order [`List`].
///
/// This is the main type alias using the default hasher. For custom hashers,
/// use [`ordered_map::OrderedMap`] directly.
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
/// // Maintains first-insertion order
/// let entries: Vec<_> = map.iter().collect();
/// assert_eq!(entries, [(&"a", &1), (&"b", &2)]);
/// ```
pub type OrderedMap<K, V> = crate::ordered_map::OrderedMap<K, V, RandomState>;
use core::num::NonZeroU32;

pub use error::Error;
pub use linked_list::LinkedList;
pub use list::List;
pub use ordered_map::Entry;
pub use ordered_map::IntoIter;
pub use ordered_map::Iter;
pub use ordered_map::OccupiedEntry;
pub use ordered_map::VacantEntry;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
/// A pointer type used to identify nodes in a [`LinkedList`].
///
/// This is an opaque handle that can be used to directly access nodes
/// without walking the chain. It provides O(1) access to nodes. It is
/// **non-generational**, meaning that once a node is removed, the pointer may
/// be re-used for a new node.
///
/// # Examples
///
/// ```
/// use lanyard::LinkedList;
/// use lanyard::Ptr;
///
/// let mut chain = LinkedList::new();
/// let ptr: Ptr = chain.push_back("first");
/// chain.push_back("second");
///
/// // Use the pointer for direct access
/// assert_eq!(chain.get(ptr), Some(&"first"));
/// ```
pub struct Ptr(NonZeroU32);

impl core::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ptr({})", self.0.get() - 1)
    }
}

impl Ptr {
    pub(crate) fn unchecked_from(index: usize) -> Self {
        debug_assert!(
            index < u32::MAX as usize,
            "Index too large to fit in Ptr: {index}"
        );
        Ptr(NonZeroU32::new((index as u32).saturating_add(1)).unwrap())
    }

    pub(crate) fn unchecked_get(self) -> usize {
        self.0.get() as usize - 1
    }
}
