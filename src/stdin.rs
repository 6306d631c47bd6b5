use std::{
    io::{self, BufRead},
    mem,
    str::FromStr,
    sync::mpsc::{self, Receiver, SyncSender},
    thread,
};

use crate::{error::Error, time::PickerTime};

/// A line typed while the clock is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pick(PickerTime),
    Now,
    Quit,
    Nothing,
    Invalid(String),
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let command = match line.trim() {
            "" => Command::Nothing,
            "now" => Command::Now,
            "q" | "quit" => Command::Quit,
            other => Command::Pick(other.parse()?),
        };
        Ok(command)
    }
}

impl Command {
    pub fn parse_line(line: &str) -> Self {
        line.parse().unwrap_or_else(|_| Command::Invalid(line.trim().to_owned()))
    }
}

pub fn spawn_command_channel() -> Receiver<Command> {
    // Create a Rendezvous Channel (backpressure with N = 0)
    let (command_tx, command_rx) = mpsc::sync_channel::<Command>(0);

    // The clock keeps ticking after STDIN closes, so never let the channel disconnect.
    mem::forget(command_tx.clone());

    thread::spawn(|| run_stdin_reader(command_tx));

    command_rx
}

fn run_stdin_reader(sender: SyncSender<Command>) {
    let mut stdin = io::stdin().lock();

    loop {
        let mut line = String::new();

        match stdin.read_line(&mut line) {
            Ok(0) => {
                tracing::debug!("stdin closed, no more picker edits");
                return;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to read stdin");
                return;
            }
            _ => {}
        }

        if sender.send(Command::parse_line(&line)).is_err() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse_line("13:47\n"), Command::Pick(PickerTime { hour: 13, minute: 47 }));
        assert_eq!(Command::parse_line(" now "), Command::Now);
        assert_eq!(Command::parse_line("q\n"), Command::Quit);
        assert_eq!(Command::parse_line("quit"), Command::Quit);
        assert_eq!(Command::parse_line("\n"), Command::Nothing);
    }

    #[test]
    fn unknown_lines_are_kept_for_reporting() {
        assert_eq!(Command::parse_line("25:00\n"), Command::Invalid("25:00".into()));
        assert_eq!(Command::parse_line("skip"), Command::Invalid("skip".into()));
    }
}
