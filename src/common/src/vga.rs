//! VGA text mode colors and cell encoding.

/// VGA color codes.
///
/// Standard 16-color VGA palette for text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Color {
    /// Black color.
    Black = 0,
    /// Blue color.
    Blue = 1,
    /// Green color.
    Green = 2,
    /// Cyan color.
    Cyan = 3,
    /// Red color.
    Red = 4,
    /// Magenta color.
    Magenta = 5,
    /// Brown color.
    Brown = 6,
    /// Light gray color.
    LightGray = 7,
    /// Dark gray color.
    DarkGray = 8,
    /// Light blue color.
    LightBlue = 9,
    /// Light green color.
    LightGreen = 10,
    /// Light cyan color.
    LightCyan = 11,
    /// Light red color.
    LightRed = 12,
    /// Pink color.
    Pink = 13,
    /// Yellow color.
    Yellow = 14,
    /// White color.
    White = 15,
}

impl Color {
    /// Maps the low nibble of `value` to a palette entry.
    pub const fn from_nibble(value: u8) -> Color {
        match value & 0x0F {
            0 => Color::Black,
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Cyan,
            4 => Color::Red,
            5 => Color::Magenta,
            6 => Color::Brown,
            7 => Color::LightGray,
            8 => Color::DarkGray,
            9 => Color::LightBlue,
            10 => Color::LightGreen,
            11 => Color::LightCyan,
            12 => Color::LightRed,
            13 => Color::Pink,
            14 => Color::Yellow,
            _ => Color::White,
        }
    }
}

/// Combined foreground and background color, packed as `fg | bg << 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    /// Light gray on black, the console's resting color.
    pub const DEFAULT: ColorCode = ColorCode::new(Color::LightGray, Color::Black);

    /// Creates a new color code from foreground and background colors.
    pub const fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode((background as u8) << 4 | (foreground as u8))
    }

    /// Foreground color.
    pub const fn foreground(self) -> Color {
        Color::from_nibble(self.0)
    }

    /// Background color.
    pub const fn background(self) -> Color {
        Color::from_nibble(self.0 >> 4)
    }

    /// The same pair with foreground and background swapped.
    pub const fn inverted(self) -> ColorCode {
        ColorCode::new(self.background(), self.foreground())
    }

    /// Raw attribute byte.
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl Default for ColorCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A single character cell of the text grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Code page 437 glyph.
    pub character: u8,
    /// Attribute byte.
    pub color: ColorCode,
}

impl Cell {
    /// A space in the default color.
    pub const BLANK: Cell = Cell::new(b' ', ColorCode::DEFAULT);

    /// Creates a cell.
    pub const fn new(character: u8, color: ColorCode) -> Cell {
        Cell { character, color }
    }

    /// Frame buffer encoding: low byte glyph, high byte attribute.
    pub const fn pack(self) -> u16 {
        (self.color.as_u8() as u16) << 8 | self.character as u16
    }

    /// Inverse of [`Cell::pack`].
    pub const fn unpack(value: u16) -> Cell {
        Cell {
            character: (value & 0xFF) as u8,
            color: ColorCode((value >> 8) as u8),
        }
    }
}
