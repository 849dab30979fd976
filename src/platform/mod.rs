//! Adapters for platform and third-party geometry types
//!
//! Each submodule teaches the domain traits how to read a foreign point or
//! rectangle, so those values can be compared against native ones and fed
//! straight into the bounding constructors.

pub mod skia;
#[cfg(windows)]
pub mod windows;
