//! In-memory hardware doubles for unit tests.
//!
//! Clones share state, so a test can hand one copy to the console and keep
//! another to inspect what was written.

use crate::keyboard::{KeyKind, KEYMAP};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use testos_common::{Cell, ColorCode};
use testos_hal::{FrameBuffer, PortIo, TEXT_HEIGHT, TEXT_WIDTH};

const LEFT_SHIFT: u8 = 0x2A;
const ENTER: u8 = 0x1C;
const BREAK: u8 = 0x80;

/// Frame buffer backed by a shared vector of packed cells.
#[derive(Clone)]
pub struct MockFrameBuffer {
    cells: Rc<RefCell<Vec<u16>>>,
}

impl MockFrameBuffer {
    pub fn new() -> Self {
        Self {
            cells: Rc::new(RefCell::new(vec![0; TEXT_WIDTH * TEXT_HEIGHT])),
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        Cell::unpack(self.cells.borrow()[row * TEXT_WIDTH + col])
    }

    /// Row contents with trailing blanks removed.
    pub fn row_text(&self, row: usize) -> String {
        let text: String = (0..TEXT_WIDTH)
            .map(|col| match self.cell(row, col).character {
                0 => ' ',
                c => c as char,
            })
            .collect();
        text.trim_end().to_string()
    }

    /// Index of the first row whose text equals `text`.
    pub fn find_row(&self, text: &str) -> Option<usize> {
        (0..TEXT_HEIGHT).find(|&row| self.row_text(row) == text)
    }

    /// True if every non-blank cell of the row uses the inverted default color.
    pub fn row_is_inverted(&self, row: usize) -> bool {
        let inverted = ColorCode::DEFAULT.inverted();
        let text_len = self.row_text(row).len();
        text_len > 0 && (0..text_len).all(|col| self.cell(row, col).color == inverted)
    }
}

impl FrameBuffer for MockFrameBuffer {
    fn write_cell(&mut self, index: usize, value: u16) {
        if let Some(cell) = self.cells.borrow_mut().get_mut(index) {
            *cell = value;
        }
    }

    fn read_cell(&self, index: usize) -> u16 {
        self.cells.borrow().get(index).copied().unwrap_or(0)
    }
}

#[derive(Default)]
struct PortState {
    writes: Vec<(u16, u8)>,
    scancodes: VecDeque<u8>,
    last_data: u8,
}

/// Port bus that records writes and serves scripted keyboard bytes.
///
/// The status port reports "output full" while scancodes are queued; each
/// data port read pops one.
#[derive(Clone, Default)]
pub struct MockPorts {
    state: Rc<RefCell<PortState>>,
}

impl MockPorts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, scancodes: &[u8]) {
        self.state.borrow_mut().scancodes.extend(scancodes);
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().scancodes.len()
    }

    pub fn writes(&self) -> Vec<(u16, u8)> {
        self.state.borrow().writes.clone()
    }

    pub fn clear_writes(&self) {
        self.state.borrow_mut().writes.clear();
    }

    /// Cursor offset programmed through the CRTC, if any.
    pub fn hardware_cursor(&self) -> Option<u16> {
        let (mut low, mut high) = (None, None);
        for (register, value) in self.crtc_writes() {
            match register {
                0x0F => low = Some(value),
                0x0E => high = Some(value),
                _ => {}
            }
        }
        Some(u16::from(high?) << 8 | u16::from(low?))
    }

    /// True if the last cursor-start write disabled the cursor.
    pub fn cursor_hidden(&self) -> bool {
        self.crtc_writes()
            .iter()
            .rev()
            .find(|(register, _)| *register == 0x0A)
            .map_or(false, |(_, value)| value & 0x20 != 0)
    }

    fn crtc_writes(&self) -> Vec<(u8, u8)> {
        let writes = self.writes();
        let mut pairs = Vec::new();
        let mut index = None;
        for (port, value) in writes {
            match port {
                0x3D4 => index = Some(value),
                0x3D5 => {
                    if let Some(register) = index {
                        pairs.push((register, value));
                    }
                }
                _ => {}
            }
        }
        pairs
    }
}

impl PortIo for MockPorts {
    fn write_port(&mut self, port: u16, value: u8) {
        self.state.borrow_mut().writes.push((port, value));
    }

    fn read_port(&mut self, port: u16) -> u8 {
        let mut state = self.state.borrow_mut();
        match port {
            0x64 => u8::from(!state.scancodes.is_empty()),
            0x60 => {
                if let Some(scancode) = state.scancodes.pop_front() {
                    state.last_data = scancode;
                }
                state.last_data
            }
            _ => 0xFF,
        }
    }
}

/// Make/break sequence typing `text` on a US keyboard. `'\n'` is Enter.
pub fn keystrokes(text: &str) -> Vec<u8> {
    let mut codes = Vec::new();
    for byte in text.bytes() {
        if byte == b'\n' {
            codes.extend([ENTER, ENTER | BREAK]);
            continue;
        }
        let lower = KEYMAP
            .iter()
            .position(|key| key.kind == KeyKind::Char && key.lower == byte);
        let upper = KEYMAP
            .iter()
            .position(|key| key.kind == KeyKind::Char && key.upper == byte);
        match (lower, upper) {
            (Some(code), _) => codes.extend([code as u8, code as u8 | BREAK]),
            (None, Some(code)) => codes.extend([
                LEFT_SHIFT,
                code as u8,
                code as u8 | BREAK,
                LEFT_SHIFT | BREAK,
            ]),
            (None, None) => panic!("no key types {:?}", byte as char),
        }
    }
    codes
}
