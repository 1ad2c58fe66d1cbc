//! Utility functions shared across versefind
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration file loading (platform config directory)
//! - [`case`] - Byte-aligned case folding for corpus and queries
//! - [`escape`] - Markup escaping for corpus text
//! - [`progress`] - Progress spinner, no-op without the `progress` feature

pub mod app_data;
pub mod case;
pub mod escape;
pub mod progress;

pub use app_data::*;
pub use escape::*;
