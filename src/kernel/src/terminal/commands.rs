//! Built-in shell commands.
//!
//! A command matches when the line starts with its literal followed by a
//! blank. Lines that match nothing are dropped without a message.

use super::editor::CommittedLine;
use super::{line_break, ShellOutcome};
use crate::config::Palette;
use crate::splash;
use crate::surface::TextSurface;
use testos_common::ColorCode;
use testos_hal::{FrameBuffer, PortIo};

/// Number that solves the puzzle.
const PUZZLE_ANSWER: &str = "1358";

/// Where `print` starts copying the line.
const PRINT_TEXT_OFFSET: usize = "print ".len();

const HELP_LINES: [&str; 5] = [
    "Commands:",
    "  help          Show this help message",
    "  print <text>  Print text to the screen",
    "  splash        Redraw the splash banner",
    "  exit          Leave the terminal",
];

/// Shell command types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Display help information.
    Help,
    /// Echo text.
    Print {
        /// Everything after the command token, trailing padding removed.
        text: &'a str,
    },
    /// Leave the terminal.
    Exit,
    /// Clear the screen and redraw the banner.
    Splash,
    /// The puzzle number was entered.
    Puzzle,
}

impl<'a> Command<'a> {
    /// Parse a committed line.
    pub fn parse(line: &'a CommittedLine) -> Option<Command<'a>> {
        let bytes = line.as_bytes();
        if starts_with_token(bytes, "exit") {
            Some(Command::Exit)
        } else if starts_with_token(bytes, "print") {
            let text = line.text().get(PRINT_TEXT_OFFSET..).unwrap_or("");
            Some(Command::Print { text })
        } else if starts_with_token(bytes, "splash") {
            Some(Command::Splash)
        } else if starts_with_token(bytes, "help") {
            Some(Command::Help)
        } else if starts_with_token(bytes, PUZZLE_ANSWER) {
            Some(Command::Puzzle)
        } else {
            None
        }
    }

    /// Execute a command. Output starts at the cursor.
    pub fn execute<B: FrameBuffer, P: PortIo>(
        self,
        surface: &mut TextSurface<B, P>,
        palette: &Palette,
    ) -> ShellOutcome {
        match self {
            Command::Help => {
                for line in HELP_LINES {
                    surface.write_str(line);
                    line_break(surface);
                }
            }
            Command::Print { text } => {
                surface.write_str(text);
                line_break(surface);
            }
            Command::Exit => return ShellOutcome::Exit,
            Command::Splash => {
                surface.initialize();
                splash::render(surface, palette);
            }
            Command::Puzzle => {
                surface.set_color_code(palette.accent);
                surface.write_str("Correct");
                surface.set_color_code(ColorCode::DEFAULT);
                line_break(surface);
            }
        }
        ShellOutcome::Continue
    }
}

/// `literal` at the start of the line, followed by a blank or the end.
fn starts_with_token(bytes: &[u8], literal: &str) -> bool {
    let literal = literal.as_bytes();
    bytes.starts_with(literal) && bytes.get(literal.len()).map_or(true, |&b| b == b' ')
}
