//! Version resolution and component-ID derivation
//!
//! - [`types`]: major lines, bootstrapper tables, resolved versions
//! - [`resolver`]: completes "major.minor[.patch]" requests against a table
//! - [`component`]: derives the installer component ID for a resolved version
//! - [`error`]: resolution and source error types

pub mod component;
pub mod error;
pub mod resolver;
pub mod types;
