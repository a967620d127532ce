//! Message keys and tuple values exchanged with the companion app
//!
//! The companion assigns numeric keys in declaration order:
//! - Companion → Watch: `BALANCE`, `SPENT_TODAY`
//! - Watch → Companion: `REFRESH` (any message makes the companion refetch)

use heapless::{String, Vec};

// Numeric message keys
pub const KEY_BALANCE: u32 = 0;
pub const KEY_SPENT_TODAY: u32 = 1;
pub const KEY_REFRESH: u32 = 2;

/// Size of a tuple header on the wire (key + type + length)
pub const TUPLE_HEADER_SIZE: usize = 7;

/// Largest text or byte value a single tuple can carry
pub const MAX_VALUE_LEN: usize = 64;

/// Known message keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageKey {
    /// Current account balance, whole currency units
    Balance,
    /// Amount spent today, whole currency units
    SpentToday,
    /// Ask the companion to refetch and resend
    Refresh,
}

impl MessageKey {
    /// Look up a key by its numeric id
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            KEY_BALANCE => Some(MessageKey::Balance),
            KEY_SPENT_TODAY => Some(MessageKey::SpentToday),
            KEY_REFRESH => Some(MessageKey::Refresh),
            _ => None,
        }
    }

    /// Numeric id used on the channel
    pub fn id(self) -> u32 {
        match self {
            MessageKey::Balance => KEY_BALANCE,
            MessageKey::SpentToday => KEY_SPENT_TODAY,
            MessageKey::Refresh => KEY_REFRESH,
        }
    }
}

/// A single value in a message dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TupleValue {
    /// Signed integer (4 bytes)
    Int(i32),
    /// Unsigned integer (4 bytes)
    Uint(u32),
    /// UTF-8 text
    CString(String<MAX_VALUE_LEN>),
    /// Raw bytes
    Bytes(Vec<u8, MAX_VALUE_LEN>),
}

impl TupleValue {
    /// Integer view of this value
    ///
    /// `Uint` values above `i32::MAX` and non-integer values yield `None`.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            TupleValue::Int(v) => Some(*v),
            TupleValue::Uint(v) => i32::try_from(*v).ok(),
            TupleValue::CString(_) | TupleValue::Bytes(_) => None,
        }
    }

    /// Number of value bytes on the wire
    pub fn encoded_len(&self) -> usize {
        match self {
            TupleValue::Int(_) | TupleValue::Uint(_) => 4,
            // Text carries its terminator
            TupleValue::CString(s) => s.len() + 1,
            TupleValue::Bytes(b) => b.len(),
        }
    }
}

/// A key/value pair
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tuple {
    /// Numeric key
    pub key: u32,
    /// Value
    pub value: TupleValue,
}

impl Tuple {
    /// Create an integer tuple for a known key
    pub fn int(key: MessageKey, value: i32) -> Self {
        Self {
            key: key.id(),
            value: TupleValue::Int(value),
        }
    }

    /// Create a text tuple, truncating to [`MAX_VALUE_LEN`] - 1 bytes
    pub fn cstring(key: u32, text: &str) -> Self {
        let mut end = text.len().min(MAX_VALUE_LEN - 1);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        let mut s = String::new();
        let _ = s.push_str(&text[..end]);
        Self {
            key,
            value: TupleValue::CString(s),
        }
    }

    /// The known key for this tuple, if any
    pub fn message_key(&self) -> Option<MessageKey> {
        MessageKey::from_id(self.key)
    }

    /// Bytes this tuple occupies in a dictionary
    pub fn encoded_len(&self) -> usize {
        TUPLE_HEADER_SIZE + self.value.encoded_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ids() {
        assert_eq!(MessageKey::Balance.id(), 0);
        assert_eq!(MessageKey::SpentToday.id(), 1);
        assert_eq!(MessageKey::from_id(1), Some(MessageKey::SpentToday));
        assert_eq!(MessageKey::from_id(42), None);
    }

    #[test]
    fn test_as_i32() {
        assert_eq!(TupleValue::Int(-5).as_i32(), Some(-5));
        assert_eq!(TupleValue::Uint(120).as_i32(), Some(120));
        assert_eq!(TupleValue::Uint(u32::MAX).as_i32(), None);
        assert_eq!(Tuple::cstring(0, "120").value.as_i32(), None);
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(Tuple::int(MessageKey::Balance, 7).encoded_len(), 11);
        // "abc" + terminator
        assert_eq!(Tuple::cstring(5, "abc").encoded_len(), 11);
    }

    #[test]
    fn test_cstring_truncates_on_char_boundary() {
        let long = "é".repeat(MAX_VALUE_LEN);
        let tuple = Tuple::cstring(9, &long);
        match tuple.value {
            TupleValue::CString(s) => {
                assert!(s.len() < MAX_VALUE_LEN);
                assert!(s.chars().all(|c| c == 'é'));
            }
            other => panic!("unexpected value {:?}", other),
        }
    }
}
