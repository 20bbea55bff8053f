//! Configuration types for packaging runs.
//!
//! A run is described by an immutable [`Settings`] record, constructed once
//! via [`SettingsBuilder`] from either CLI arguments or a programmatic call.

mod builder;
mod core;
mod platform;

// Re-export all public types
pub use builder::SettingsBuilder;
pub use core::Settings;
pub use platform::Platform;
