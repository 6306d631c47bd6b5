use std::fmt;

use crate::{
    colors::{lamp_rgb, OwoColorize},
    lamps::{Lamp, LampColor, LampRow, LampState, RowKind},
};

const WIDE_LAMP: usize = 10;
const NARROW_LAMP: usize = 3;
const SECONDS_LAMP: usize = 5;
const ROW_WIDTH: usize = 43;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Truecolor blocks.
    Colored,
    /// One letter per lamp, no escape codes.
    Plain,
    /// Every row on a single line.
    Compact,
}

/// Lines of text ready to be printed, without trailing newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

pub fn draw(style: Style, state: &LampState, label: &str) -> Frame {
    let rows = state.rows();

    let lines = match style {
        Style::Compact => {
            let groups: Vec<String> = rows.iter().map(letters).collect();
            vec![groups.join(" ")]
        }
        Style::Plain => {
            let mut lines = vec![format!("Time is {label}"), String::new()];
            lines.extend(rows.iter().map(letters));
            lines
        }
        Style::Colored => {
            let mut lines = vec![format!("Time is {label}").bold().to_string(), String::new()];
            lines.extend(rows.iter().map(blocks));
            lines
        }
    };

    Frame { lines }
}

fn letter(lamp: Lamp) -> char {
    match (lamp.lit, lamp.color) {
        (false, _) => 'O',
        (true, LampColor::Red) => 'R',
        (true, LampColor::Yellow) => 'Y',
    }
}

fn letters(row: &LampRow) -> String {
    row.lamps().map(letter).collect()
}

fn blocks(row: &LampRow) -> String {
    let width = match row.kind {
        RowKind::Seconds => SECONDS_LAMP,
        RowKind::FiveMinutes => NARROW_LAMP,
        RowKind::FiveHours | RowKind::SingleHours | RowKind::SingleMinutes => WIDE_LAMP,
    };

    let lamps: Vec<String> = row
        .lamps()
        .map(|lamp| "█".repeat(width).color(lamp_rgb(lamp)).to_string())
        .collect();

    let used = width * lamps.len() + lamps.len().saturating_sub(1);
    let indent = " ".repeat(ROW_WIDTH.saturating_sub(used) / 2);

    format!("{indent}{}", lamps.join(" "))
}
