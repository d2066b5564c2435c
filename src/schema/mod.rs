//! # Member Schema Module
//!
//! The member field contract: presence checking and string coercion on the
//! way in, a fixed `{name, age, id}` projection on the way out. Validation
//! failures keep per-field granularity.

pub mod errors;
pub mod member;

pub use errors::FieldErrors;
pub use member::{MemberDraft, MemberRecord};
