//! Bootstrapper table sources
//!
//! The resolver only sees the [`provider::BootstrapperSource`] capability;
//! [`release_history`] scrapes the live pages and [`fixed`] serves a
//! pre-built table.

pub mod fixed;
pub mod provider;
pub mod release_history;
