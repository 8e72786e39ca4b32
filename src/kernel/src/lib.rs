//! TestOS console kernel
//!
//! An interactive text console for bare-metal x86_64: a splash banner, a
//! keyboard-driven menu, and a small line-oriented shell.
//!
//! # Architecture
//!
//! - `surface`: character grid, colors and hardware cursor
//! - `keyboard`: polled PS/2 scancode decoding
//! - `menu`: vertical selection menus
//! - `terminal`: line editor and shell commands
//! - `app`: the state machine tying them together
//! - `arch`: platform code (VGA buffer, port I/O, serial)
//!
//! Hardware is reached only through the `testos_hal` traits, so everything
//! above `arch` runs unchanged against in-memory doubles in unit tests.
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel. All unsafe code is documented with safety
//! invariants explaining why the usage is correct.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod app;
pub mod arch;
pub mod config;
pub mod keyboard;
#[cfg(target_arch = "x86_64")]
pub mod logger;
pub mod menu;
pub mod splash;
pub mod surface;
pub mod terminal;
pub mod testutil;

pub use app::{AppState, Console};
pub use config::{ConsoleConfig, MenuAction, Palette};
pub use surface::TextSurface;
