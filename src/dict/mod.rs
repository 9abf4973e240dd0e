//! Ordered dictionary module: sorted keys with an index-aligned value array.
//!
//! ## Architecture
//!
//! [`OrderedDict`] layers a dense value array over an
//! [`OrderedList`](crate::OrderedList) of keys. Every operation first asks
//! the list's position oracle where the key sits (or would sit), then moves
//! the matching value slot, so `values[i]` always belongs to the key at
//! ordinal position `i`.
//!
//! The dictionary depends only on the list's public contract -
//! `find_position`, `add`, `delete`, `len`, `iter` - never on its node
//! layout, so the backing ordered container can later change complexity
//! class without touching this layer.
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Put       | O(n)       |
//! | Get       | O(n)       |
//! | Delete    | O(n)       |
//! | Contains  | O(n)       |
//!
//! Put and Delete shift the value array; lookup cost is whatever the
//! position oracle provides (linear here).
//!
//! ## Example
//!
//! ```
//! use ordlink::OrderedDict;
//!
//! let mut dict = OrderedDict::new();
//! dict.put("b", 2);
//! dict.put("a", 1);
//!
//! // Keys iterate in ascending order
//! assert_eq!(dict.keys().copied().collect::<Vec<_>>(), vec!["a", "b"]);
//! ```

pub mod ordered;

pub use ordered::{DictError, OrderedDict};
