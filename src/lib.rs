//! # ordlink
//!
//! Ordered doubly-linked sequence and index-aligned dictionary.
//!
//! ## Architecture
//!
//! The crate consists of:
//! - **List**: [`OrderedList`], a doubly-linked chain kept sorted under a
//!   per-instance [`Direction`], stored in a slab arena
//! - **Dict**: [`OrderedDict`], sorted keys plus a dense value array kept
//!   index-aligned through the list's position oracle
//!
//! ## Design Principles
//!
//! 1. **Incremental ordering**: the sort invariant is maintained on every
//!    insert, never by re-sorting
//! 2. **Stable handles**: nodes live in a `slab::Slab` and link by key;
//!    relinking is index reassignment, so no reference can dangle
//! 3. **Contract over representation**: the dictionary drives the list only
//!    through [`OrderedList::find_position`], [`OrderedList::add`],
//!    [`OrderedList::delete`] and [`OrderedList::len`], so the backing
//!    container can change complexity class without touching it
//! 4. **Synchronous execution**: every operation runs to completion, bounded
//!    by the element count
//!
//! ## Example
//!
//! ```
//! use ordlink::{Direction, OrderedDict, OrderedList};
//!
//! let mut list = OrderedList::new(Direction::Ascending);
//! for v in [8, 3, 10, 1, 6] {
//!     list.add(v);
//! }
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 6, 8, 10]);
//!
//! let mut dict = OrderedDict::new();
//! dict.put("a", 1);
//! dict.put("b", 2);
//! dict.put("a", 3);
//! assert_eq!(dict.get(&"a"), Some(&3));
//! assert_eq!(dict.len(), 2);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Ordered list: sorted doubly-linked chain over slab storage
pub mod list;

/// Ordered dictionary: sorted keys with an index-aligned value array
pub mod dict;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use list::{Direction, ListError, Node, OrderedList};
pub use dict::{DictError, OrderedDict};
