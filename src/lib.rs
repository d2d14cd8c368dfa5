//! Resolve Visual Studio Build Tools bootstrapper URLs and installer
//! component IDs from Microsoft's public release-history pages.

pub mod archive;
pub mod config;
pub mod source;
pub mod version;
