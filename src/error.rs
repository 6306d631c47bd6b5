use std::{fmt::Display, io};

use owo_colors::OwoColorize;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("terminal IO failed: {0}")]
    Io(#[from] io::Error),

    #[error("{hour:02}:{minute:02}:{second:02} is not a valid time of day")]
    TimeOutOfRange { hour: u32, minute: u32, second: u32 },

    #[error("expected a time like 13:47, got {0:?}")]
    InvalidPickerInput(String),
}

pub trait UnwrapOrExplode<T> {
    fn unwrap_or_explode(self, message: &str) -> T;
}

impl<T, E: Display> UnwrapOrExplode<T> for Result<T, E> {
    fn unwrap_or_explode(self, message: &str) -> T {
        match self {
            Ok(inner) => inner,
            Err(err) => explode_error(&format!("{message}: {err}")),
        }
    }
}

fn explode_error(message: &str) -> ! {
    // Leave the lamp frame alone, errors go below it
    eprintln!("{}: {message}", "Error".red());
    std::process::exit(1)
}
