//! Mapping from a time of day to the lamps of a Berlin Clock.
//!
//! From top to bottom the clock has five rows:
//!
//! - one blinker, lit on odd seconds
//! - four lamps worth five hours each
//! - four lamps worth one hour each
//! - eleven lamps worth five minutes each, every third one red to mark quarters
//! - four lamps worth one minute each

use crate::time::WallClockTime;

pub const FIVE_MINUTE_LAMPS: usize = 11;
pub const FOUR_LAMP_ROW: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LampState {
    pub seconds_blinker_on: bool,
    pub five_hour_lamps_lit: u32,
    pub single_hour_lamps_lit: u32,
    pub five_minute_lamps_lit: u32,
    pub single_minute_lamps_lit: u32,
}

impl LampState {
    pub fn from_time(time: WallClockTime) -> Self {
        let (hour, minute, second) = (time.hour(), time.minute(), time.second());

        Self {
            seconds_blinker_on: second % 2 != 0,
            five_hour_lamps_lit: hour / 5,
            single_hour_lamps_lit: hour % 5,
            five_minute_lamps_lit: minute / 5,
            single_minute_lamps_lit: minute % 5,
        }
    }

    /// The five rows, top to bottom.
    pub fn rows(&self) -> [LampRow; 5] {
        [
            LampRow::new(RowKind::Seconds, u32::from(self.seconds_blinker_on)),
            LampRow::new(RowKind::FiveHours, self.five_hour_lamps_lit),
            LampRow::new(RowKind::SingleHours, self.single_hour_lamps_lit),
            LampRow::new(RowKind::FiveMinutes, self.five_minute_lamps_lit),
            LampRow::new(RowKind::SingleMinutes, self.single_minute_lamps_lit),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LampColor {
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lamp {
    pub lit: bool,
    pub color: LampColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Seconds,
    FiveHours,
    SingleHours,
    FiveMinutes,
    SingleMinutes,
}

impl RowKind {
    pub fn lamp_count(self) -> usize {
        match self {
            RowKind::Seconds => 1,
            RowKind::FiveMinutes => FIVE_MINUTE_LAMPS,
            RowKind::FiveHours | RowKind::SingleHours | RowKind::SingleMinutes => FOUR_LAMP_ROW,
        }
    }

    /// Color of an unlit lamp and of any lit lamp without an accent.
    pub fn standard_color(self) -> LampColor {
        match self {
            RowKind::FiveHours | RowKind::SingleHours => LampColor::Red,
            RowKind::Seconds | RowKind::FiveMinutes | RowKind::SingleMinutes => LampColor::Yellow,
        }
    }

    /// Color of the lamp at `position`, given whether it is lit.
    pub fn color_at(self, position: usize, lit: bool) -> LampColor {
        if lit && self == RowKind::FiveMinutes && is_quarter_marker(position) {
            LampColor::Red
        } else {
            self.standard_color()
        }
    }
}

/// Positions 2, 5 and 8 of the five-minute row close a quarter hour.
pub fn is_quarter_marker(position: usize) -> bool {
    (position + 1) % 3 == 0
}

/// A row of lamps where the first `lit` ones are on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LampRow {
    pub kind: RowKind,
    pub lit: u32,
}

impl LampRow {
    pub fn new(kind: RowKind, lit: u32) -> Self {
        debug_assert!(lit as usize <= kind.lamp_count());
        Self { kind, lit }
    }

    pub fn lamps(&self) -> impl Iterator<Item = Lamp> + '_ {
        (0..self.kind.lamp_count()).map(move |position| {
            let lit = position < self.lit as usize;
            Lamp {
                lit,
                color: self.kind.color_at(position, lit),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamps_at(hour: u32, minute: u32, second: u32) -> LampState {
        LampState::from_time(WallClockTime::new(hour, minute, second).unwrap())
    }

    fn counts(state: LampState) -> (u32, u32, u32, u32) {
        (
            state.five_hour_lamps_lit,
            state.single_hour_lamps_lit,
            state.five_minute_lamps_lit,
            state.single_minute_lamps_lit,
        )
    }

    #[test]
    fn hour_lamps_add_up_to_the_hour() {
        for hour in 0..24 {
            let state = lamps_at(hour, 0, 0);
            assert!(state.five_hour_lamps_lit <= 4);
            assert!(state.single_hour_lamps_lit <= 4);
            assert_eq!(state.five_hour_lamps_lit * 5 + state.single_hour_lamps_lit, hour);
        }
    }

    #[test]
    fn minute_lamps_add_up_to_the_minute() {
        for minute in 0..60 {
            let state = lamps_at(0, minute, 0);
            assert!(state.five_minute_lamps_lit <= 11);
            assert!(state.single_minute_lamps_lit <= 4);
            assert_eq!(state.five_minute_lamps_lit * 5 + state.single_minute_lamps_lit, minute);
        }
    }

    #[test]
    fn blinker_is_on_for_odd_seconds() {
        for second in 0..60 {
            assert_eq!(lamps_at(12, 0, second).seconds_blinker_on, second % 2 == 1);
        }
    }

    #[test]
    fn mapping_has_no_hidden_state() {
        let time = WallClockTime::new(17, 23, 41).unwrap();
        assert_eq!(LampState::from_time(time), LampState::from_time(time));
    }

    #[test]
    fn midnight_is_dark() {
        let state = lamps_at(0, 0, 0);
        assert!(!state.seconds_blinker_on);
        assert_eq!(counts(state), (0, 0, 0, 0));
    }

    #[test]
    fn afternoon_time() {
        let state = lamps_at(13, 47, 29);
        assert!(state.seconds_blinker_on);
        assert_eq!(counts(state), (2, 3, 9, 2));
    }

    #[test]
    fn last_minute_of_the_day() {
        let state = lamps_at(23, 59, 58);
        assert!(!state.seconds_blinker_on);
        assert_eq!(counts(state), (4, 3, 11, 4));
    }

    #[test]
    fn quarter_past_five_lights_the_first_marker() {
        let state = lamps_at(5, 15, 1);
        assert!(state.seconds_blinker_on);
        assert_eq!(counts(state), (1, 0, 3, 0));

        let five_minutes = state.rows()[3];
        let colors: Vec<_> = five_minutes.lamps().take(3).map(|lamp| (lamp.lit, lamp.color)).collect();
        assert_eq!(
            colors,
            [(true, LampColor::Yellow), (true, LampColor::Yellow), (true, LampColor::Red)]
        );
    }

    #[test]
    fn quarter_markers_are_every_third_lamp() {
        let markers: Vec<_> = (0..FIVE_MINUTE_LAMPS).filter(|&i| is_quarter_marker(i)).collect();
        assert_eq!(markers, [2, 5, 8]);
    }

    #[test]
    fn unlit_five_minute_lamps_are_never_red() {
        let row = LampRow::new(RowKind::FiveMinutes, 0);
        assert!(row.lamps().all(|lamp| !lamp.lit && lamp.color == LampColor::Yellow));
    }

    #[test]
    fn rows_follow_the_state() {
        let state = lamps_at(13, 47, 29);
        let lit: Vec<_> = state
            .rows()
            .iter()
            .map(|row| row.lamps().filter(|lamp| lamp.lit).count())
            .collect();
        let sizes: Vec<_> = state.rows().iter().map(|row| row.lamps().count()).collect();

        assert_eq!(lit, [1, 2, 3, 9, 2]);
        assert_eq!(sizes, [1, 4, 4, 11, 4]);
    }

    #[test]
    fn hour_rows_are_red_and_minute_rows_yellow() {
        let state = lamps_at(23, 59, 59);
        let [seconds, five_hours, single_hours, _, single_minutes] = state.rows();

        assert!(seconds.lamps().all(|lamp| lamp.color == LampColor::Yellow));
        assert!(five_hours.lamps().all(|lamp| lamp.color == LampColor::Red));
        assert!(single_hours.lamps().all(|lamp| lamp.color == LampColor::Red));
        assert!(single_minutes.lamps().all(|lamp| lamp.color == LampColor::Yellow));
    }
}
