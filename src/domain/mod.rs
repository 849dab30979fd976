//! Domain logic and core data structures
//!
//! This module contains pure geometry that is independent
//! of Win32 APIs and platform-specific implementations.
//! Coordinates are expected in one consistent pixel space; no DPI or
//! multi-monitor correction happens here.

pub mod bounds;
pub mod point;
pub mod rect;
