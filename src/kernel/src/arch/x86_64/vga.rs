//! VGA text mode frame buffer for x86_64.
//!
//! Exposes the memory-mapped text buffer at 0xB8000 as a [`FrameBuffer`].

use core::ptr;
use testos_hal::{FrameBuffer, TEXT_HEIGHT, TEXT_WIDTH};

/// VGA text buffer memory-mapped I/O address.
const VGA_BUFFER_ADDR: usize = 0xB8000;

/// Number of cells in the buffer.
const BUFFER_CELLS: usize = TEXT_WIDTH * TEXT_HEIGHT;

/// The VGA text buffer.
pub struct VgaBuffer {
    /// Pointer to the first cell.
    ///
    /// SAFETY: This pointer is valid for the lifetime of the kernel.
    /// The VGA buffer at 0xB8000 is identity-mapped by the bootloader.
    cells: *mut u16,
}

// SAFETY: VgaBuffer only accesses the VGA buffer through volatile operations.
// The buffer is memory-mapped hardware that exists for the kernel's lifetime.
unsafe impl Send for VgaBuffer {}

impl VgaBuffer {
    /// Creates a handle to the VGA text buffer.
    ///
    /// # Safety
    ///
    /// Only one handle may be live at a time, and 0xB8000 must be mapped.
    pub unsafe fn new() -> Self {
        VgaBuffer {
            cells: VGA_BUFFER_ADDR as *mut u16,
        }
    }
}

impl FrameBuffer for VgaBuffer {
    fn write_cell(&mut self, index: usize, value: u16) {
        if index >= BUFFER_CELLS {
            return;
        }
        // SAFETY: index < BUFFER_CELLS, so the write stays inside the text
        // buffer. Using volatile write because the VGA buffer is memory-mapped
        // I/O that may be read by hardware at any time.
        unsafe { ptr::write_volatile(self.cells.add(index), value) }
    }

    fn read_cell(&self, index: usize) -> u16 {
        if index >= BUFFER_CELLS {
            return 0;
        }
        // SAFETY: index < BUFFER_CELLS.
        unsafe { ptr::read_volatile(self.cells.add(index)) }
    }
}
