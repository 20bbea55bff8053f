//! Internal utilities for the packaging pipeline.

pub mod fs;
