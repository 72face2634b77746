use crate::factory::ArgCategory;

/// Errors reported by the runtime introspection and dynamic construction
/// APIs.
///
/// The statically typed API rejects the same conditions at compile time;
/// these values only appear where a pack is inspected or built from
/// dynamically typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackError {
    /// The number of supplied arguments differs from the number of slots.
    ArityMismatch {
        /// Number of slots in the pack.
        expected: usize,
        /// Number of arguments supplied.
        found: usize,
    },

    /// An argument is not compatible with the payload of its slot.
    PayloadMismatch {
        /// Position of the offending slot.
        position: usize,
        /// Name of the type the slot declares.
        expected: &'static str,
    },

    /// Two slots share the key that was looked up.
    KeyAmbiguity {
        /// Name of the shared key type.
        key: &'static str,
        /// Position of the first slot with that key.
        first: usize,
        /// Position of the second slot with that key.
        second: usize,
    },

    /// No slot has the key that was looked up.
    KeyNotFound {
        /// Name of the key type.
        key: &'static str,
    },

    /// A position at or past the end of the pack was requested.
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// Number of slots in the pack.
        size: usize,
    },

    /// A plain integer was converted into a position token for another
    /// position.
    IndexMismatch {
        /// The position carried by the token type.
        expected: usize,
        /// The integer that was supplied.
        found: usize,
    },

    /// Arguments of incompatible categories were supplied together.
    DeductionFailure {
        /// Category of the first argument.
        first: ArgCategory,
        /// First category that cannot be combined with `first`.
        conflicting: ArgCategory,
    },
}

impl core::fmt::Display for PackError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PackError::ArityMismatch { expected, found } => write!(
                f,
                "arity mismatch: pack has {expected} slots but {found} arguments were supplied"
            ),
            PackError::PayloadMismatch { position, expected } => write!(
                f,
                "payload mismatch: slot {position} expects a value of type {expected}"
            ),
            PackError::KeyAmbiguity { key, first, second } => write!(
                f,
                "key ambiguity: slots {first} and {second} are both keyed by {key}"
            ),
            PackError::KeyNotFound { key } => write!(f, "no slot is keyed by {key}"),
            PackError::IndexOutOfRange { index, size } => write!(
                f,
                "index out of range: position {index} in a pack of {size} slots"
            ),
            PackError::IndexMismatch { expected, found } => write!(
                f,
                "index mismatch: token stands for position {expected}, got {found}"
            ),
            PackError::DeductionFailure { first, conflicting } => write!(
                f,
                "deduction failure: {first} arguments cannot be combined with {conflicting} arguments"
            ),
        }
    }
}

impl core::error::Error for PackError {}
