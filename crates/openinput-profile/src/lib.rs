//! Device profile descriptors and the profile catalog
//!
//! A profile declares how a class of physical hardware maps to the logical
//! control layout: which raw sources feed which [`ControlKind`]s, the
//! shaping parameters per control, and how the hardware is recognized from
//! its reported name (exact names or regex patterns).
//!
//! Profiles are plain serde descriptors. The [`catalog::ProfileCatalog`]
//! compiles them (patterns become [`regex::Regex`]) and resolves reported
//! hardware names against them, synthesizing a permissive profile for
//! hardware that matches nothing so unknown devices still produce input.
//!
//! [`ControlKind`]: openinput_controls::ControlKind

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]

pub mod builtin;
pub mod catalog;
pub mod types;
pub mod validation;

pub use builtin::builtin_profiles;
pub use catalog::{CatalogEntry, ProfileCatalog};
pub use types::{ControlBinding, DeviceProfile, PointerAxis, RawSource};
pub use validation::validate_profile;

use thiserror::Error;

/// Errors raised while registering or validating profiles.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// A profile descriptor failed a structural check.
    #[error("Invalid profile: {0}")]
    Validation(String),

    /// A device pattern did not compile as a regular expression.
    #[error("Invalid device pattern '{pattern}': {message}")]
    Pattern {
        /// The offending pattern source.
        pattern: String,
        /// The regex compiler's message.
        message: String,
    },
}

/// Convenience alias for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
