//! Bounded key/value dictionary for app messages.
//!
//! Sizing follows the host's dictionary layout:
//! - HEADER (1 byte): tuple count
//! - per TUPLE: KEY (4) + TYPE (1) + LENGTH (2) + VALUE (LENGTH bytes)
//!
//! The host owns the actual serialization; this type only tracks how many
//! bytes a message would occupy so it can be checked against the inbox and
//! outbox budgets.

use heapless::Vec;

use crate::messages::{MessageKey, Tuple, TupleValue};
use crate::result::AppMessageResult;

/// Inbox buffer size negotiated with the host
pub const INBOX_SIZE: usize = 128;

/// Outbox buffer size negotiated with the host
pub const OUTBOX_SIZE: usize = 128;

/// Largest budget a dictionary may be given
pub const MAX_MESSAGE_SIZE: usize = 256;

/// Dictionary header size (tuple count)
pub const DICT_HEADER_SIZE: usize = 1;

/// Maximum tuples per message
pub const MAX_TUPLES: usize = 16;

/// A parsed or constructed message
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dictionary {
    tuples: Vec<Tuple, MAX_TUPLES>,
    limit: usize,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// Create an empty dictionary sized for the inbox
    pub fn new() -> Self {
        Self::with_limit(INBOX_SIZE)
    }

    /// Create an empty dictionary with a byte budget
    ///
    /// The budget is clamped to [`MAX_MESSAGE_SIZE`].
    pub fn with_limit(limit: usize) -> Self {
        Self {
            tuples: Vec::new(),
            limit: limit.min(MAX_MESSAGE_SIZE),
        }
    }

    /// Byte budget of this dictionary
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Add a tuple
    ///
    /// A tuple whose key is already present replaces the earlier value.
    pub fn push(&mut self, tuple: Tuple) -> Result<(), AppMessageResult> {
        let replaced = self
            .tuples
            .iter()
            .position(|t| t.key == tuple.key)
            .map(|i| self.tuples[i].encoded_len())
            .unwrap_or(0);

        let size = self.encoded_size() - replaced + tuple.encoded_len();
        if size > self.limit {
            return Err(AppMessageResult::BufferOverflow);
        }

        if let Some(existing) = self.tuples.iter_mut().find(|t| t.key == tuple.key) {
            *existing = tuple;
            return Ok(());
        }

        self.tuples
            .push(tuple)
            .map_err(|_| AppMessageResult::OutOfMemory)
    }

    /// Add a signed integer for a known key
    pub fn push_int(&mut self, key: MessageKey, value: i32) -> Result<(), AppMessageResult> {
        self.push(Tuple::int(key, value))
    }

    /// Find the tuple with the given key
    pub fn find(&self, key: MessageKey) -> Option<&Tuple> {
        let id = key.id();
        self.tuples.iter().find(|t| t.key == id)
    }

    /// Find an integer value for the given key
    pub fn find_i32(&self, key: MessageKey) -> Option<i32> {
        self.value(key).and_then(TupleValue::as_i32)
    }

    /// Find the raw value for the given key
    pub fn value(&self, key: MessageKey) -> Option<&TupleValue> {
        self.find(key).map(|t| &t.value)
    }

    /// Iterate over all tuples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Tuple> {
        self.tuples.iter()
    }

    /// Number of tuples
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// True if the dictionary holds no tuples
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Bytes this message occupies on the channel
    pub fn encoded_size(&self) -> usize {
        DICT_HEADER_SIZE + self.tuples.iter().map(Tuple::encoded_len).sum::<usize>()
    }

    /// Remove all tuples, keeping the budget
    pub fn clear(&mut self) {
        self.tuples.clear();
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Tuple;
    type IntoIter = core::slice::Iter<'a, Tuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.iter()
    }
}
