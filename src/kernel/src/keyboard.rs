//! Polled PS/2 keyboard decoding.
//!
//! Scancodes (Set 1) are read straight from the controller ports and looked up
//! in a static US-layout table. A byte is only decoded when it differs from
//! the byte seen on the previous poll, so a held key that keeps reading back
//! the same make code yields a single event.

use testos_common::{KeyEvent, KeyFlags};
use testos_hal::PortIo;

/// PS/2 controller data port.
const DATA_PORT: u16 = 0x60;
/// PS/2 controller status port.
const STATUS_PORT: u16 = 0x64;
/// Status bit: a byte is waiting in the output buffer.
const OUTPUT_FULL: u8 = 0x01;
/// Set on break (key release) codes.
const BREAK_BIT: u8 = 0x80;

/// What a table entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyKind {
    None,
    Char,
    Enter,
    Backspace,
    Shift,
    ArrowUp,
    ArrowDown,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct KeyEntry {
    pub(crate) lower: u8,
    pub(crate) upper: u8,
    pub(crate) kind: KeyKind,
}

impl KeyEntry {
    const NONE: KeyEntry = KeyEntry::control(KeyKind::None);

    const fn char(lower: u8, upper: u8) -> KeyEntry {
        KeyEntry {
            lower,
            upper,
            kind: KeyKind::Char,
        }
    }

    const fn control(kind: KeyKind) -> KeyEntry {
        KeyEntry {
            lower: 0,
            upper: 0,
            kind,
        }
    }
}

/// Make code -> (lowercase, uppercase, kind), indexed by scancode.
pub(crate) static KEYMAP: [KeyEntry; 0x80] = build_keymap();

const fn build_keymap() -> [KeyEntry; 0x80] {
    let mut map = [KeyEntry::NONE; 0x80];
    map = key_row(map, 0x02, b"1234567890-=", b"!@#$%^&*()_+");
    map[0x0E] = KeyEntry::control(KeyKind::Backspace);
    map = key_row(map, 0x10, b"qwertyuiop[]", b"QWERTYUIOP{}");
    map[0x1C] = KeyEntry::control(KeyKind::Enter);
    map = key_row(map, 0x1E, b"asdfghjkl;'`", b"ASDFGHJKL:\"~");
    map[0x2A] = KeyEntry::control(KeyKind::Shift);
    map = key_row(map, 0x2B, b"\\zxcvbnm,./", b"|ZXCVBNM<>?");
    map[0x36] = KeyEntry::control(KeyKind::Shift);
    map[0x39] = KeyEntry::char(b' ', b' ');
    map[0x48] = KeyEntry::control(KeyKind::ArrowUp);
    map[0x50] = KeyEntry::control(KeyKind::ArrowDown);
    map
}

const fn key_row(
    mut map: [KeyEntry; 0x80],
    first: usize,
    lower: &[u8],
    upper: &[u8],
) -> [KeyEntry; 0x80] {
    let mut i = 0;
    while i < lower.len() {
        map[first + i] = KeyEntry::char(lower[i], upper[i]);
        i += 1;
    }
    map
}

/// Scancode decoder with shift tracking.
pub struct ScancodeDecoder<P> {
    ports: P,
    shift_down: bool,
    last_scancode: u8,
}

impl<P: PortIo> ScancodeDecoder<P> {
    /// Create a decoder reading from `ports`.
    pub fn new(ports: P) -> Self {
        Self {
            ports,
            shift_down: false,
            last_scancode: 0,
        }
    }

    /// Whether a shift key is currently held.
    pub fn shift_down(&self) -> bool {
        self.shift_down
    }

    /// Reads the controller once.
    ///
    /// Returns `None` when no byte is waiting, when the byte repeats the
    /// previous poll, or when it decodes to nothing.
    pub fn poll(&mut self) -> Option<KeyEvent> {
        let status = self.ports.read_port(STATUS_PORT);
        let scancode = self.ports.read_port(DATA_PORT);

        if status & OUTPUT_FULL == 0 || scancode == self.last_scancode {
            return None;
        }
        self.last_scancode = scancode;
        self.decode(scancode)
    }

    /// Table lookup for one fresh scancode. Updates the shift state.
    pub fn decode(&mut self, scancode: u8) -> Option<KeyEvent> {
        let entry = KEYMAP[usize::from(scancode & !BREAK_BIT)];

        if scancode & BREAK_BIT != 0 {
            // Releases only matter for shift.
            return match entry.kind {
                KeyKind::Shift => {
                    self.shift_down = false;
                    Some(KeyEvent::control(scancode, KeyFlags::SHIFT_TOGGLE))
                }
                _ => None,
            };
        }

        match entry.kind {
            KeyKind::None => {
                log::trace!("ignoring scancode {:#04x}", scancode);
                None
            }
            KeyKind::Char => {
                let character = if self.shift_down {
                    entry.upper
                } else {
                    entry.lower
                };
                Some(KeyEvent::printable(scancode, character))
            }
            KeyKind::Shift => {
                self.shift_down = true;
                Some(KeyEvent::control(scancode, KeyFlags::SHIFT_TOGGLE))
            }
            KeyKind::Enter => Some(KeyEvent::control(scancode, KeyFlags::ENTER)),
            KeyKind::Backspace => Some(KeyEvent::control(scancode, KeyFlags::BACKSPACE)),
            KeyKind::ArrowUp => Some(KeyEvent::control(scancode, KeyFlags::ARROW_UP)),
            KeyKind::ArrowDown => Some(KeyEvent::control(scancode, KeyFlags::ARROW_DOWN)),
        }
    }
}
