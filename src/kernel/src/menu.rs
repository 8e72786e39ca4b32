//! Vertical selection menus.
//!
//! A menu is redrawn in place from the row where it was entered, with the
//! selected option in inverted colors. `w`/`s` and the arrow keys move the
//! selection; Enter returns the action bound to it.

use crate::surface::TextSurface;
use testos_common::{KeyEvent, KeyFlags};
use testos_hal::{FrameBuffer, PortIo};

/// One selectable line and the action it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption<A> {
    /// Text shown on screen.
    pub label: &'static str,
    /// Action returned when the option is chosen.
    pub action: A,
}

impl<A> MenuOption<A> {
    /// Binds `label` to `action`.
    pub const fn new(label: &'static str, action: A) -> Self {
        Self { label, action }
    }
}

/// Menu key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Previous option.
    Up,
    /// Next option.
    Down,
    /// Choose the highlighted option.
    Select,
}

impl Navigation {
    /// Maps a key event to a menu command.
    pub fn from_key(event: &KeyEvent) -> Option<Navigation> {
        if event.flags.contains(KeyFlags::ARROW_UP) {
            return Some(Navigation::Up);
        }
        if event.flags.contains(KeyFlags::ARROW_DOWN) {
            return Some(Navigation::Down);
        }
        if event.is_enter() {
            return Some(Navigation::Select);
        }
        match event.character {
            Some(b'w' | b'W') => Some(Navigation::Up),
            Some(b's' | b'S') => Some(Navigation::Down),
            _ => None,
        }
    }
}

/// Selection state over a fixed option table.
#[derive(Debug, Clone)]
pub struct Menu<A: 'static> {
    options: &'static [MenuOption<A>],
    /// Always `< options.len()`.
    selected: usize,
    /// First row of the option block.
    sel_row: usize,
}

impl<A: Copy + 'static> Menu<A> {
    /// Returns `None` for an empty option table.
    pub fn new(options: &'static [MenuOption<A>]) -> Option<Self> {
        if options.is_empty() {
            return None;
        }
        Some(Self {
            options,
            selected: 0,
            sel_row: 0,
        })
    }

    /// Index of the highlighted option.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Row where the option block starts.
    pub fn sel_row(&self) -> usize {
        self.sel_row
    }

    /// The option table.
    pub fn options(&self) -> &'static [MenuOption<A>] {
        self.options
    }

    /// Anchors the menu at the cursor row, selects the first option and draws it.
    ///
    /// Leaves the cursor on the row below the block.
    pub fn enter<B: FrameBuffer, P: PortIo>(&mut self, surface: &mut TextSurface<B, P>) {
        self.sel_row = surface.row();
        self.selected = 0;
        self.render(surface);
    }

    /// Applies one key. Returns the chosen action on Enter.
    pub fn handle<B: FrameBuffer, P: PortIo>(
        &mut self,
        event: &KeyEvent,
        surface: &mut TextSurface<B, P>,
    ) -> Option<A> {
        match Navigation::from_key(event)? {
            Navigation::Up => {
                self.selected = self.selected.saturating_sub(1);
                self.render(surface);
                None
            }
            Navigation::Down => {
                self.selected = (self.selected + 1).min(self.options.len() - 1);
                self.render(surface);
                None
            }
            Navigation::Select => Some(self.options[self.selected].action),
        }
    }

    /// Redraws every option starting at [`Menu::sel_row`].
    pub fn render<B: FrameBuffer, P: PortIo>(&self, surface: &mut TextSurface<B, P>) {
        surface.set_cursor(self.sel_row, 0);
        for (index, option) in self.options.iter().enumerate() {
            if index == self.selected {
                surface.write_str_inverted(option.label);
            } else {
                surface.write_str(option.label);
            }
            surface.next_line();
        }
    }
}
