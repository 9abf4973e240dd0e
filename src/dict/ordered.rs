//! Ordered key/value dictionary over the list's position oracle.
//!
//! ## Design
//!
//! Keys live in an ascending [`OrderedList`]; values live in a dense `Vec`
//! addressed by key ordinal. [`OrderedList::find_position`] answers "where
//! does/would this key sit", and the value array is shifted to match before
//! or after the key list mutates. Keys are unique: putting an existing key
//! overwrites its value slot in place.
//!
//! ## Error asymmetry
//!
//! List-level delete is fail-silent; dictionary-level delete is fail-loud
//! and reports [`DictError::KeyNotFound`] on a miss. The asymmetry is part
//! of the contract, one convention per layer.

use thiserror::Error;

use crate::list::{Direction, Iter, OrderedList};

// ============================================================================
// Errors
// ============================================================================

/// Failure modes for dictionary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DictError {
    /// The key is absent; the dictionary was not modified.
    #[error("key not found")]
    KeyNotFound,
}

// ============================================================================
// OrderedDict
// ============================================================================

/// A key/value dictionary with keys kept in ascending order.
///
/// ## Example
///
/// ```
/// use ordlink::{DictError, OrderedDict};
///
/// let mut dict = OrderedDict::new();
/// dict.put("a", 1);
/// dict.put("b", 2);
/// dict.put("a", 3);
///
/// // Overwrite, not duplicate
/// assert_eq!(dict.len(), 2);
/// assert_eq!(dict.get(&"a"), Some(&3));
///
/// assert_eq!(dict.delete(&"a"), Ok(3));
/// assert_eq!(dict.delete(&"a"), Err(DictError::KeyNotFound));
/// ```
#[derive(Debug)]
pub struct OrderedDict<K, V> {
    /// Key order, always ascending
    keys: OrderedList<K>,

    /// Dense value storage, index-aligned with key ordinals
    values: Vec<V>,
}

impl<K: Ord, V> Default for OrderedDict<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> OrderedDict<K, V> {
    /// Create a new empty dictionary
    pub fn new() -> Self {
        Self {
            keys: OrderedList::new(Direction::Ascending),
            values: Vec::new(),
        }
    }

    /// Create a dictionary with pre-allocated capacity for keys and values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: OrderedList::with_capacity(Direction::Ascending, capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    // ========================================================================
    // Size
    // ========================================================================

    /// Get the number of key/value pairs
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the dictionary is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert a key/value pair, or overwrite the value of an existing key
    ///
    /// On a fresh key, the key is added to the list and the value is
    /// inserted at the oracle position, shifting later slots one place.
    /// On an existing key, only its value slot changes.
    ///
    /// # Returns
    ///
    /// The previous value when the key was already present
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.keys.find_position(&key) {
            Ok(position) => Some(std::mem::replace(&mut self.values[position], value)),
            Err(position) => {
                // add() lands the key at exactly `position`
                self.keys.add(key);
                self.values.insert(position, value);
                None
            }
        }
    }

    /// Remove a key and its value
    ///
    /// Both sequences shrink by one and later positions realign.
    ///
    /// # Returns
    ///
    /// The removed value
    ///
    /// # Errors
    ///
    /// [`DictError::KeyNotFound`] when the key is absent; the dictionary
    /// is left unchanged.
    pub fn delete(&mut self, key: &K) -> Result<V, DictError> {
        let position = match self.keys.find_position(key) {
            Ok(position) => position,
            Err(_) => return Err(DictError::KeyNotFound),
        };

        self.keys.delete(key);
        Ok(self.values.remove(position))
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Check if a key is present
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.keys.find_position(key).is_ok()
    }

    /// Get a reference to the value stored under a key
    pub fn get(&self, key: &K) -> Option<&V> {
        let position = self.keys.find_position(key).ok()?;
        Some(&self.values[position])
    }

    /// Get a mutable reference to the value stored under a key
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let position = self.keys.find_position(key).ok()?;
        Some(&mut self.values[position])
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Iterate over the keys in ascending order
    pub fn keys(&self) -> Iter<'_, K> {
        self.keys.iter()
    }

    /// Get the values in key order
    #[inline]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Iterate over key/value pairs in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.keys.iter().zip(self.values.iter())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
