//! Fixed-width line editing.
//!
//! Keys are echoed to the surface as they are typed. The buffer is as wide
//! as the screen and blank-padded, so a committed line can be compared
//! column by column against command literals.

use crate::surface::{TextSurface, WIDTH};
use testos_common::KeyEvent;
use testos_hal::{FrameBuffer, PortIo};

/// Shell prompt.
pub const PROMPT: &str = "> ";

/// Columns taken by the prompt; backspace never erases them.
pub const PROMPT_MARGIN: usize = PROMPT.len();

/// Maximum characters per line, keeping the cursor on the prompt row.
pub const LINE_CAPACITY: usize = WIDTH - PROMPT_MARGIN - 1;

const BLANK: u8 = b' ';

/// A line handed over by Enter.
#[derive(Clone, PartialEq, Eq)]
pub struct CommittedLine {
    bytes: [u8; WIDTH],
}

impl CommittedLine {
    /// Builds a blank-padded line from text, truncated to the screen width.
    pub fn new(text: &str) -> Self {
        let mut bytes = [BLANK; WIDTH];
        for (slot, byte) in bytes.iter_mut().zip(text.bytes()) {
            *slot = byte;
        }
        Self { bytes }
    }

    /// The full blank-padded buffer.
    pub fn as_bytes(&self) -> &[u8; WIDTH] {
        &self.bytes
    }

    /// The line without trailing padding.
    pub fn text(&self) -> &str {
        let end = self
            .bytes
            .iter()
            .rposition(|&byte| byte != BLANK)
            .map_or(0, |last| last + 1);
        core::str::from_utf8(&self.bytes[..end]).unwrap_or("")
    }
}

impl core::fmt::Debug for CommittedLine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("CommittedLine").field(&self.text()).finish()
    }
}

/// Line editor state.
pub struct LineEditor {
    buffer: [u8; WIDTH],
    len: usize,
    /// Column right after the prompt.
    origin: usize,
}

impl LineEditor {
    /// Create an empty editor.
    pub fn new() -> Self {
        Self {
            buffer: [BLANK; WIDTH],
            len: 0,
            origin: PROMPT_MARGIN,
        }
    }

    /// Typed characters.
    pub fn contents(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    /// The whole buffer, padding included.
    pub fn buffer(&self) -> &[u8; WIDTH] {
        &self.buffer
    }

    /// Blank-fills the buffer.
    pub fn clear(&mut self) {
        self.buffer = [BLANK; WIDTH];
        self.len = 0;
    }

    /// Prints the prompt at the cursor.
    pub fn prompt<B: FrameBuffer, P: PortIo>(&mut self, surface: &mut TextSurface<B, P>) {
        surface.write_str(PROMPT);
        self.origin = surface.column();
    }

    /// Applies one key. Returns the line when Enter commits it.
    pub fn feed<B: FrameBuffer, P: PortIo>(
        &mut self,
        event: &KeyEvent,
        surface: &mut TextSurface<B, P>,
    ) -> Option<CommittedLine> {
        if event.is_enter() {
            let line = CommittedLine {
                bytes: self.buffer,
            };
            self.clear();
            return Some(line);
        }
        if event.is_backspace() {
            self.erase(surface);
        } else if let (true, Some(character)) = (event.is_printable(), event.character) {
            self.insert(character, surface);
        }
        None
    }

    fn insert<B: FrameBuffer, P: PortIo>(&mut self, character: u8, surface: &mut TextSurface<B, P>) {
        if self.len >= LINE_CAPACITY {
            log::trace!("line full, dropping {:?}", character as char);
            return;
        }
        self.buffer[self.len] = character;
        self.len += 1;
        surface.write_char(character);
    }

    fn erase<B: FrameBuffer, P: PortIo>(&mut self, surface: &mut TextSurface<B, P>) {
        let column = surface.column();
        // The cursor must sit exactly `len` columns past the prompt.
        if self.len == 0 || column <= self.origin || column - self.origin != self.len {
            log::trace!("backspace ignored at column {}", column);
            return;
        }
        self.len -= 1;
        self.buffer[self.len] = BLANK;
        surface.backspace();
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::mock::{MockFrameBuffer, MockPorts};
    use testos_common::KeyFlags;

    const ENTER: KeyEvent = KeyEvent::control(0x1C, KeyFlags::ENTER);
    const BACKSPACE: KeyEvent = KeyEvent::control(0x0E, KeyFlags::BACKSPACE);

    fn setup() -> (LineEditor, TextSurface<MockFrameBuffer, MockPorts>, MockFrameBuffer) {
        let fb = MockFrameBuffer::new();
        let mut surface = TextSurface::new(fb.clone(), MockPorts::new());
        surface.initialize();
        let mut editor = LineEditor::new();
        editor.prompt(&mut surface);
        (editor, surface, fb)
    }

    fn type_text(
        editor: &mut LineEditor,
        surface: &mut TextSurface<MockFrameBuffer, MockPorts>,
        text: &str,
    ) {
        for byte in text.bytes() {
            assert!(editor.feed(&KeyEvent::printable(0, byte), surface).is_none());
        }
    }

    #[test]
    fn test_typing_echoes_and_buffers() {
        let (mut editor, mut surface, fb) = setup();
        type_text(&mut editor, &mut surface, "ls -a");

        assert_eq!(editor.contents(), b"ls -a");
        assert_eq!(fb.row_text(0), "> ls -a");
        assert_eq!(surface.column(), PROMPT_MARGIN + 5);
    }

    #[test]
    fn test_backspace_erases_last_char() {
        let (mut editor, mut surface, fb) = setup();
        type_text(&mut editor, &mut surface, "abc");
        editor.feed(&BACKSPACE, &mut surface);

        assert_eq!(editor.contents(), b"ab");
        assert_eq!(editor.buffer()[2], b' ');
        assert_eq!(fb.row_text(0), "> ab");
    }

    #[test]
    fn test_backspace_at_prompt_margin_is_noop() {
        let (mut editor, mut surface, fb) = setup();
        type_text(&mut editor, &mut surface, "x");
        editor.feed(&BACKSPACE, &mut surface);
        editor.feed(&BACKSPACE, &mut surface);
        editor.feed(&BACKSPACE, &mut surface);

        assert_eq!(surface.column(), PROMPT_MARGIN);
        assert_eq!(fb.row_text(0), ">");
        assert!(editor.contents().is_empty());
        assert_eq!(editor.buffer(), &[b' '; WIDTH]);
    }

    #[test]
    fn test_backspace_fails_closed_when_cursor_moved() {
        let (mut editor, mut surface, fb) = setup();
        type_text(&mut editor, &mut surface, "abc");
        surface.set_cursor(3, 10);
        editor.feed(&BACKSPACE, &mut surface);

        assert_eq!(editor.contents(), b"abc");
        assert_eq!(surface.column(), 10);
        assert_eq!(fb.row_text(0), "> abc");
    }

    #[test]
    fn test_full_line_ignores_keys() {
        let (mut editor, mut surface, _) = setup();
        for _ in 0..LINE_CAPACITY + 5 {
            editor.feed(&KeyEvent::printable(0x2D, b'x'), &mut surface);
        }
        assert_eq!(editor.contents().len(), LINE_CAPACITY);
        assert_eq!(surface.row(), 0);
        assert_eq!(surface.column(), WIDTH - 1);
    }

    #[test]
    fn test_commit_returns_line_and_blanks_buffer() {
        let (mut editor, mut surface, _) = setup();
        type_text(&mut editor, &mut surface, "exit");
        let line = editor.feed(&ENTER, &mut surface).expect("committed");

        assert_eq!(line.text(), "exit");
        assert_eq!(&line.as_bytes()[..5], b"exit ");
        assert_eq!(editor.buffer(), &[b' '; WIDTH]);

        type_text(&mut editor, &mut surface, "d");
        assert_eq!(editor.buffer()[0], b'd');
        assert!(editor.buffer()[1..].iter().all(|&b| b == b' '));
    }

    #[test]
    fn test_shift_and_arrows_are_ignored() {
        let (mut editor, mut surface, _) = setup();
        editor.feed(&KeyEvent::control(0x2A, KeyFlags::SHIFT_TOGGLE), &mut surface);
        editor.feed(&KeyEvent::control(0x48, KeyFlags::ARROW_UP), &mut surface);
        assert!(editor.contents().is_empty());
        assert_eq!(surface.column(), PROMPT_MARGIN);
    }

    #[test]
    fn test_committed_line_text() {
        assert_eq!(CommittedLine::new("print  hi  ").text(), "print  hi");
        assert_eq!(CommittedLine::new("").text(), "");
    }
}
