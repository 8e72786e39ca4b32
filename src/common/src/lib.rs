//! Shared data types for the TestOS console.
//!
//! Hardware-independent types used by both the kernel and its tests:
//! - `vga`: text-mode colors and the packed cell format
//! - `keyboard`: decoded key events
//! - `error`: configuration errors

#![no_std]
#![warn(missing_docs)]

pub mod error;
pub mod keyboard;
pub mod vga;

pub use error::ConfigError;
pub use keyboard::{KeyEvent, KeyFlags};
pub use vga::{Cell, Color, ColorCode};
