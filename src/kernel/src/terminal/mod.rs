//! Terminal shell.
//!
//! - `editor`: line buffer with echo and a protected prompt
//! - `commands`: built-in commands

pub mod commands;
pub mod editor;

pub use commands::Command;
pub use editor::{CommittedLine, LineEditor, PROMPT};

use crate::config::Palette;
use crate::surface::TextSurface;
use testos_common::{ColorCode, KeyEvent};
use testos_hal::{FrameBuffer, PortIo};

const GREETING: &str = "Type 'help' for available commands.";

/// What the console does after a key reached the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellOutcome {
    /// Keep reading keys.
    Continue,
    /// `exit` was entered.
    Exit,
}

/// Starts a new line, clearing the screen once the cursor falls off the bottom.
pub(crate) fn line_break<B: FrameBuffer, P: PortIo>(surface: &mut TextSurface<B, P>) {
    surface.next_line();
    if surface.is_past_bottom() {
        surface.initialize();
    }
}

/// Terminal state.
#[derive(Default)]
pub struct Terminal {
    editor: LineEditor,
}

impl Terminal {
    /// Create a new terminal.
    pub fn new() -> Self {
        Self {
            editor: LineEditor::new(),
        }
    }

    /// The line being typed.
    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    /// Clears the screen, greets and shows the first prompt.
    pub fn open<B: FrameBuffer, P: PortIo>(
        &mut self,
        surface: &mut TextSurface<B, P>,
        palette: &Palette,
    ) {
        surface.initialize();
        surface.show_cursor();
        surface.set_color_code(palette.accent);
        surface.write_str(GREETING);
        surface.set_color_code(ColorCode::DEFAULT);
        line_break(surface);

        self.editor.clear();
        self.editor.prompt(surface);
    }

    /// Handle a key event.
    pub fn handle_key<B: FrameBuffer, P: PortIo>(
        &mut self,
        event: &KeyEvent,
        surface: &mut TextSurface<B, P>,
        palette: &Palette,
    ) -> ShellOutcome {
        let Some(line) = self.editor.feed(event, surface) else {
            return ShellOutcome::Continue;
        };
        line_break(surface);

        let outcome = match Command::parse(&line) {
            Some(command) => {
                log::debug!("running {:?}", command);
                command.execute(surface, palette)
            }
            None => {
                log::trace!("ignoring {:?}", line);
                ShellOutcome::Continue
            }
        };

        if outcome == ShellOutcome::Continue {
            self.editor.prompt(surface);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HEIGHT;
    use crate::testutil::mock::{MockFrameBuffer, MockPorts};
    use testos_common::KeyFlags;

    const ENTER: KeyEvent = KeyEvent::control(0x1C, KeyFlags::ENTER);

    fn open() -> (
        Terminal,
        TextSurface<MockFrameBuffer, MockPorts>,
        MockFrameBuffer,
        MockPorts,
    ) {
        let fb = MockFrameBuffer::new();
        let ports = MockPorts::new();
        let mut surface = TextSurface::new(fb.clone(), ports.clone());
        surface.initialize();
        let mut terminal = Terminal::new();
        terminal.open(&mut surface, &Palette::DEFAULT);
        (terminal, surface, fb, ports)
    }

    fn enter_line(
        terminal: &mut Terminal,
        surface: &mut TextSurface<MockFrameBuffer, MockPorts>,
        text: &str,
    ) -> ShellOutcome {
        for byte in text.bytes() {
            terminal.handle_key(&KeyEvent::printable(0, byte), surface, &Palette::DEFAULT);
        }
        terminal.handle_key(&ENTER, surface, &Palette::DEFAULT)
    }

    #[test]
    fn test_open_greets_and_prompts() {
        let (_, surface, fb, ports) = open();
        assert_eq!(fb.row_text(0), GREETING);
        assert_eq!(fb.row_text(1), ">");
        assert_eq!((surface.row(), surface.column()), (1, 2));
        assert!(!ports.cursor_hidden());
    }

    #[test]
    fn test_print_then_new_prompt() {
        let (mut terminal, mut surface, fb, _) = open();
        let outcome = enter_line(&mut terminal, &mut surface, "print hello");

        assert_eq!(outcome, ShellOutcome::Continue);
        assert_eq!(fb.row_text(1), "> print hello");
        assert_eq!(fb.row_text(2), "hello");
        assert_eq!(fb.row_text(3), ">");
        assert!(terminal.editor().contents().is_empty());
    }

    #[test]
    fn test_unknown_command_is_silent() {
        let (mut terminal, mut surface, fb, _) = open();
        enter_line(&mut terminal, &mut surface, "foo");

        assert_eq!(fb.row_text(1), "> foo");
        assert_eq!(fb.row_text(2), ">");
    }

    #[test]
    fn test_empty_line_reprompts() {
        let (mut terminal, mut surface, fb, _) = open();
        enter_line(&mut terminal, &mut surface, "");
        assert_eq!(fb.row_text(2), ">");
        assert_eq!(surface.row(), 2);
    }

    #[test]
    fn test_exit_leaves_no_prompt() {
        let (mut terminal, mut surface, fb, _) = open();
        assert_eq!(
            enter_line(&mut terminal, &mut surface, "exit"),
            ShellOutcome::Exit
        );
        assert_eq!(fb.row_text(2), "");
    }

    #[test]
    fn test_screen_clears_when_full() {
        let (mut terminal, mut surface, fb, _) = open();
        for _ in 0..HEIGHT {
            enter_line(&mut terminal, &mut surface, "");
            assert!(surface.row() < HEIGHT);
        }
        assert!(fb.find_row(GREETING).is_none());
        assert_eq!(surface.column(), 2);
    }

    #[test]
    fn test_puzzle_answer() {
        let (mut terminal, mut surface, fb, _) = open();
        enter_line(&mut terminal, &mut surface, "1358");
        assert_eq!(fb.row_text(2), "Correct");
    }
}
