//! x86_64 architecture support.
//!
//! Provides the VGA text buffer, raw port access and serial output for x86_64 platforms.

pub mod port;
pub mod serial;
pub mod vga;

pub use port::HardwarePorts;
pub use serial::SERIAL;
pub use vga::VgaBuffer;

/// Halts the CPU until the next interrupt.
///
/// Used in idle loops to reduce power consumption.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Used by the halted console state and after panics.
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}
