#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]

#[cfg(feature = "alloc")]
extern crate alloc;

// Logging macros, no-ops unless the `tracing` feature is on
mod tracing_macros;

// Lifetime-erased type identity, usable in const fns
pub use typeid::ConstTypeId;

// Position tokens and sequences
mod index;
pub use index::*;

// Key tokens
mod key;
pub use key::*;

// Runtime errors reported by the introspection APIs
mod error;
pub use error::*;

// Payload descriptors: types, constants, templates, objects, references
mod payload;
pub use payload::*;

// One slot: payload + position + key
mod element;
pub use element::*;

// Slot lists, construction and the merged accessor
mod base;
pub use base::*;

// Runtime descriptions of slots
mod descriptor;
pub use descriptor::*;

// The `Pack` façade
mod pack;
pub use pack::*;

// Variant kinds and their tuple layouts
mod variants;
pub use variants::*;

/// Deduction of variant kinds from call-site arguments.
pub mod factory;

/// Template identities for standard-library generic types.
pub mod templates;
