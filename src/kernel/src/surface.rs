//! Text surface over a VGA-style frame buffer.
//!
//! Tracks the cursor and the current color, and keeps the hardware cursor in
//! sync after every write. The grid never scrolls: writing past the last
//! cell wraps back to the top-left corner.

use core::fmt;
use testos_common::{Cell, Color, ColorCode};
use testos_hal::{FrameBuffer, PortIo, TEXT_HEIGHT, TEXT_WIDTH};

/// Number of columns on the surface.
pub const WIDTH: usize = TEXT_WIDTH;

/// Number of rows on the surface.
pub const HEIGHT: usize = TEXT_HEIGHT;

/// CRTC index register.
const CRTC_INDEX: u16 = 0x3D4;
/// CRTC data register.
const CRTC_DATA: u16 = 0x3D5;

const REG_CURSOR_START: u8 = 0x0A;
const REG_CURSOR_END: u8 = 0x0B;
const REG_CURSOR_HIGH: u8 = 0x0E;
const REG_CURSOR_LOW: u8 = 0x0F;

/// Bit 5 of the cursor start register hides the cursor.
const CURSOR_DISABLE: u8 = 0x20;
/// Underline cursor: scanlines 14 to 15.
const CURSOR_SCANLINE_START: u8 = 14;
const CURSOR_SCANLINE_END: u8 = 15;

/// Glyph written for bytes outside printable ASCII.
const PLACEHOLDER: u8 = 0xFE;

/// The console's character grid.
pub struct TextSurface<B, P> {
    buffer: B,
    ports: P,
    /// Current row. May sit at `HEIGHT` after [`TextSurface::next_line`].
    row: usize,
    /// Current column (0 to WIDTH-1).
    column: usize,
    color: ColorCode,
}

impl<B: FrameBuffer, P: PortIo> TextSurface<B, P> {
    /// Wraps a frame buffer. The grid is left untouched until
    /// [`TextSurface::initialize`] is called.
    pub fn new(buffer: B, ports: P) -> Self {
        Self {
            buffer,
            ports,
            row: 0,
            column: 0,
            color: ColorCode::DEFAULT,
        }
    }

    /// Blanks every cell, restores the default color and homes the cursor.
    pub fn initialize(&mut self) {
        self.color = ColorCode::DEFAULT;
        for index in 0..WIDTH * HEIGHT {
            self.buffer.write_cell(index, Cell::BLANK.pack());
        }
        self.row = 0;
        self.column = 0;
        self.update_cursor();
    }

    /// Sets the foreground and background colors for subsequent writes.
    pub fn set_color(&mut self, foreground: Color, background: Color) {
        self.color = ColorCode::new(foreground, background);
    }

    /// Sets the packed color for subsequent writes.
    pub fn set_color_code(&mut self, color: ColorCode) {
        self.color = color;
    }

    /// Color used by the next write.
    pub fn color(&self) -> ColorCode {
        self.color
    }

    /// Cursor row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Cursor column.
    pub fn column(&self) -> usize {
        self.column
    }

    /// True once [`TextSurface::next_line`] has moved the cursor below the grid.
    pub fn is_past_bottom(&self) -> bool {
        self.row >= HEIGHT
    }

    /// Reads back a cell.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        Cell::unpack(self.buffer.read_cell(row * WIDTH + column))
    }

    /// Writes one glyph at the cursor and advances it.
    ///
    /// Wraps to the next row at the right edge and to row 0 past the last row.
    pub fn write_char(&mut self, character: u8) {
        if self.row >= HEIGHT {
            self.row = 0;
        }
        self.put(self.row, self.column, Cell::new(character, self.color));

        self.column += 1;
        if self.column == WIDTH {
            self.column = 0;
            self.row += 1;
            if self.row == HEIGHT {
                self.row = 0;
            }
        }
        self.update_cursor();
    }

    /// Writes a string. `'\n'` starts a new line.
    pub fn write_str(&mut self, s: &str) {
        for byte in s.bytes() {
            match byte {
                b'\n' => self.next_line(),
                0x20..=0x7e => self.write_char(byte),
                _ => self.write_char(PLACEHOLDER),
            }
        }
    }

    /// Writes a string with foreground and background swapped.
    pub fn write_str_inverted(&mut self, s: &str) {
        let saved = self.color;
        self.color = saved.inverted();
        self.write_str(s);
        self.color = saved;
    }

    /// Moves to column 0 of the next row.
    ///
    /// The row is not wrapped here; callers check [`TextSurface::is_past_bottom`].
    pub fn next_line(&mut self) {
        self.row += 1;
        self.column = 0;
        self.update_cursor();
    }

    /// Moves the cursor, clamped to the grid.
    pub fn set_cursor(&mut self, row: usize, column: usize) {
        self.row = row.min(HEIGHT - 1);
        self.column = column.min(WIDTH - 1);
        self.update_cursor();
    }

    /// Steps back one column on the current row and blanks that cell.
    pub fn backspace(&mut self) {
        if self.column == 0 || self.row >= HEIGHT {
            return;
        }
        self.column -= 1;
        self.put(self.row, self.column, Cell::new(b' ', self.color));
        self.update_cursor();
    }

    /// Shows an underline hardware cursor.
    pub fn show_cursor(&mut self) {
        self.crtc_write(REG_CURSOR_START, CURSOR_SCANLINE_START);
        self.crtc_write(REG_CURSOR_END, CURSOR_SCANLINE_END);
    }

    /// Hides the hardware cursor.
    pub fn hide_cursor(&mut self) {
        self.crtc_write(REG_CURSOR_START, CURSOR_DISABLE);
    }

    fn put(&mut self, row: usize, column: usize, cell: Cell) {
        debug_assert!(row < HEIGHT && column < WIDTH, "cell out of bounds");
        self.buffer.write_cell(row * WIDTH + column, cell.pack());
    }

    fn update_cursor(&mut self) {
        let position = (self.row * WIDTH + self.column) as u16;
        self.crtc_write(REG_CURSOR_LOW, (position & 0xFF) as u8);
        self.crtc_write(REG_CURSOR_HIGH, (position >> 8) as u8);
    }

    fn crtc_write(&mut self, register: u8, value: u8) {
        self.ports.write_port(CRTC_INDEX, register);
        self.ports.write_port(CRTC_DATA, value);
    }
}

impl<B: FrameBuffer, P: PortIo> fmt::Write for TextSurface<B, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        TextSurface::write_str(self, s);
        Ok(())
    }
}
