//! Decoded keyboard events.

use bitflags::bitflags;

bitflags! {
    /// What kind of key a [`KeyEvent`] carries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct KeyFlags: u8 {
        const PRINTABLE    = 1 << 0;
        const SHIFT_TOGGLE = 1 << 1;
        const ENTER        = 1 << 2;
        const BACKSPACE    = 1 << 3;
        const ARROW_UP     = 1 << 4;
        const ARROW_DOWN   = 1 << 5;
    }
}

/// A single new key transition produced by one keyboard poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyEvent {
    /// Raw PS/2 Set 1 scancode that produced the event.
    pub scancode: u8,
    /// ASCII character for printable keys, already shifted.
    pub character: Option<u8>,
    /// Event category.
    pub flags: KeyFlags,
}

impl KeyEvent {
    /// A printable key producing `character`.
    pub const fn printable(scancode: u8, character: u8) -> Self {
        Self {
            scancode,
            character: Some(character),
            flags: KeyFlags::PRINTABLE,
        }
    }

    /// A non-printing key of the given kind.
    pub const fn control(scancode: u8, flags: KeyFlags) -> Self {
        Self {
            scancode,
            character: None,
            flags,
        }
    }

    /// True for keys that produce a character.
    pub fn is_printable(&self) -> bool {
        self.flags.contains(KeyFlags::PRINTABLE)
    }

    /// True for shift press or release.
    pub fn is_shift_toggle(&self) -> bool {
        self.flags.contains(KeyFlags::SHIFT_TOGGLE)
    }

    /// True for the Enter key.
    pub fn is_enter(&self) -> bool {
        self.flags.contains(KeyFlags::ENTER)
    }

    /// True for the Backspace key.
    pub fn is_backspace(&self) -> bool {
        self.flags.contains(KeyFlags::BACKSPACE)
    }
}
