//! A Berlin Clock (Mengenlehreuhr) drawn in the terminal.
//!
//! [`lamps::LampState::from_time`] turns a [`time::WallClockTime`] into lit lamp counts, and
//! [`render::draw`] turns those into a [`render::Frame`]. [`clock::BerlinClock`] ties both to a
//! one second ticker and to picker edits typed on STDIN.

pub mod clock;
pub mod colors;
pub mod error;
pub mod lamps;
pub mod render;
pub mod stdin;
pub mod ticker;
pub mod time;
