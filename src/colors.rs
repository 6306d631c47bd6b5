pub use owo_colors::OwoColorize;
use owo_colors::Rgb;

use crate::lamps::{Lamp, LampColor};

pub const BRIGHT_RED: Rgb = Rgb(0xFF, 0x3B, 0x30);
pub const DULL_RED: Rgb = Rgb(0x5C, 0x22, 0x20);
pub const BRIGHT_YELLOW: Rgb = Rgb(0xFF, 0xCC, 0x00);
pub const DULL_YELLOW: Rgb = Rgb(0x5C, 0x4E, 0x1A);

pub fn lamp_rgb(lamp: Lamp) -> Rgb {
    match (lamp.color, lamp.lit) {
        (LampColor::Red, true) => BRIGHT_RED,
        (LampColor::Red, false) => DULL_RED,
        (LampColor::Yellow, true) => BRIGHT_YELLOW,
        (LampColor::Yellow, false) => DULL_YELLOW,
    }
}

/// Write every expression to `$out` (a `&mut impl Write`), then flush it.
#[macro_export]
macro_rules! show {
    ($out:expr => $($expression:expr),+ $(,)?) => {
        $( ::std::io::Write::write_fmt(&mut *$out, ::std::format_args!("{}", $expression))?; )+
        ::std::io::Write::flush(&mut *$out)?;
    };
}

#[macro_export]
macro_rules! showln {
    ($expression:expr $(,)?) => {
        ::std::println!("{}", $expression);
    };
}
