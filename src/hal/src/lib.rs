//! TestOS Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines traits that abstract away platform-specific hardware details.
//! The console logic is written against these so it can run on the VGA/PS/2
//! hardware as well as on in-memory doubles.

#![no_std]

/// Number of columns in the text grid.
pub const TEXT_WIDTH: usize = 80;

/// Number of rows in the text grid.
pub const TEXT_HEIGHT: usize = 25;

/// Trait for byte-wide I/O port access.
pub trait PortIo {
    /// Writes `value` to `port`.
    fn write_port(&mut self, port: u16, value: u8);
    /// Reads one byte from `port`.
    fn read_port(&mut self, port: u16) -> u8;
}

/// Trait for a text-mode frame buffer of `TEXT_WIDTH * TEXT_HEIGHT` packed cells.
///
/// Cell encoding is `character | attribute << 8`. Indices are row-major.
pub trait FrameBuffer {
    /// Stores a packed cell. Out of range indices are ignored.
    fn write_cell(&mut self, index: usize, value: u16);
    /// Loads a packed cell. Out of range indices read as zero.
    fn read_cell(&self, index: usize) -> u16;
}
