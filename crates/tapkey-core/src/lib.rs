//! Shared foundations for the tapkey typing-correction engine.
//!
//! - [`character`] -- base-lowercase folding and apostrophe handling
//! - [`enums`] -- proximity classification and fixed limits
//! - [`intmath`] -- saturating integer arithmetic (part of the ranking
//!   contract: scores must be reproducible bit for bit)

pub mod character;
pub mod enums;
pub mod intmath;
