use std::{
    io::{self, IsTerminal, Write},
    sync::mpsc::Receiver,
    time::Instant,
};

use chrono::{Duration, Local, Locale, NaiveTime, Utc};

use crate::{
    error::Result,
    lamps::LampState,
    render::{draw, Frame, Style},
    show, showln,
    stdin::Command,
    ticker::{Ticker, Wake},
    time::{PickerTime, WallClockTime},
};

/// The locale's own time representation.
pub const DEFAULT_LABEL_FORMAT: &str = "%X";

const CLEAR_LINE: &str = "\x1B[K";
const CLEAR_BELOW: &str = "\x1B[J";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource {
    Live,
    /// Picked time, kept as a distance from the live clock so it keeps running.
    Override { offset: Duration },
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct BerlinClock {
    style: Style,
    label_format: String,
    locale: Locale,
    source: TimeSource,
    status: Option<String>,
    /// Repaint over the previous frame instead of appending.
    in_place: bool,
    drawn_lines: usize,
}

impl Default for BerlinClock {
    fn default() -> Self {
        Self {
            style: Style::Colored,
            label_format: DEFAULT_LABEL_FORMAT.to_owned(),
            locale: Locale::POSIX,
            source: TimeSource::Live,
            status: None,
            in_place: false,
            drawn_lines: 0,
        }
    }
}

impl BerlinClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(self, style: Style) -> Self {
        Self { style, ..self }
    }

    pub fn label_format(self, label_format: impl Into<String>) -> Self {
        Self {
            label_format: label_format.into(),
            ..self
        }
    }

    pub fn locale(self, locale: Locale) -> Self {
        Self { locale, ..self }
    }

    pub fn picked(mut self, picker: Option<PickerTime>, now: NaiveTime) -> Self {
        if let Some(picker) = picker {
            self.pick(picker, now);
        }
        self
    }

    pub fn source(&self) -> TimeSource {
        self.source
    }

    pub fn displayed_time(&self, now: NaiveTime) -> NaiveTime {
        match self.source {
            TimeSource::Live => now,
            TimeSource::Override { offset } => now.overflowing_add_signed(offset).0,
        }
    }

    pub fn frame(&self, now: NaiveTime) -> Frame {
        let displayed = self.displayed_time(now);
        // Only the time of day is formatted, the date is a placeholder
        let stamp = Utc::now().date_naive().and_time(displayed).and_utc();
        let label = stamp.format_localized(&self.label_format, self.locale).to_string();
        let lamps = LampState::from_time(WallClockTime::from(displayed));

        let mut frame = draw(self.style, &lamps, &label);
        if let Some(status) = &self.status {
            frame.push_line(status.as_str());
        }
        frame
    }

    /// Draw a single frame and leave.
    pub fn print_once(self) {
        for line in self.frame(Local::now().time()).lines() {
            showln!(line);
        }
    }

    pub fn run(mut self, commands: Receiver<Command>) -> Result<()> {
        let mut ticker = Ticker::new(Instant::now());
        let mut stdout = io::stdout();
        self.in_place = stdout.is_terminal();
        let echoes_input = self.in_place && io::stdin().is_terminal();

        tracing::info!(style = ?self.style, source = ?self.source, in_place = self.in_place, "clock started");

        loop {
            self.redraw(&mut stdout, Local::now().time())?;

            match ticker.wait(&commands) {
                Wake::Tick => {}
                Wake::Input(command) => {
                    // The typed line was echoed below the frame
                    if echoes_input {
                        self.drawn_lines += 1;
                    }
                    if self.apply(command, Local::now().time()) == Flow::Quit {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn redraw(&mut self, out: &mut impl Write, now: NaiveTime) -> Result<()> {
        let frame = self.frame(now);

        if !self.in_place {
            show!(out => frame);
            return Ok(());
        }

        let back = match self.drawn_lines {
            0 => String::new(),
            lines => go_back_lines(lines),
        };
        let body: String = frame.lines().map(|line| format!("{line}{CLEAR_LINE}\n")).collect();
        // A shorter frame leaves the old status and echoed input below it
        show!(out => back, body, CLEAR_BELOW);

        self.drawn_lines = frame.line_count();
        Ok(())
    }

    fn apply(&mut self, command: Command, now: NaiveTime) -> Flow {
        match command {
            Command::Pick(picker) => {
                self.pick(picker, now);
                self.status = Some(format!("Showing {picker}, type `now` for the live time"));
            }
            Command::Now => {
                tracing::debug!("back to live time");
                self.source = TimeSource::Live;
                self.status = None;
            }
            Command::Quit => return Flow::Quit,
            Command::Nothing => {}
            Command::Invalid(input) => {
                tracing::debug!(%input, "rejected picker input");
                self.status = Some(format!("Can't read {input:?}, type HH:MM, `now` or `q`"));
            }
        }
        Flow::Continue
    }

    fn pick(&mut self, picker: PickerTime, now: NaiveTime) {
        let offset = picker.offset_from(WallClockTime::from(now));
        tracing::debug!(%picker, offset_minutes = offset.num_minutes(), "picked time");
        self.source = TimeSource::Override { offset };
    }
}

fn go_back_lines(lines: usize) -> String {
    format!("\x1B[{lines}A\x1B[{}D", u16::MAX)
}
