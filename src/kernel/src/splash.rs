//! Splash banner.

use crate::config::Palette;
use crate::surface::TextSurface;
use testos_common::ColorCode;
use testos_hal::{FrameBuffer, PortIo};

const BANNER: [&str; 5] = [
    " _____         _    ___  ____  ",
    "|_   _|__  ___| |_ / _ \\/ ___| ",
    "  | |/ _ \\/ __| __| | | \\___ \\ ",
    "  | |  __/\\__ \\ |_| |_| |___) |",
    "  |_|\\___||___/\\__|\\___/|____/",
];

const VERSION: &str = "Version 1.0";

/// Rows taken by the banner, including the blank lines around the version.
pub const BANNER_ROWS: usize = BANNER.len() + 3;

/// Draws the banner at the cursor and leaves the cursor [`BANNER_ROWS`] below.
pub fn render<B: FrameBuffer, P: PortIo>(surface: &mut TextSurface<B, P>, palette: &Palette) {
    surface.set_color_code(palette.banner);
    for line in BANNER {
        surface.write_str(line);
        surface.next_line();
    }
    surface.set_color_code(ColorCode::DEFAULT);
    surface.next_line();
    surface.write_str(VERSION);
    surface.next_line();
    surface.next_line();
}
