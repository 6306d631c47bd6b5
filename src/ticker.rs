use std::{
    sync::mpsc::{Receiver, RecvTimeoutError},
    thread,
    time::{Duration, Instant},
};

pub const PERIOD: Duration = Duration::from_secs(1);

pub enum Wake<T> {
    Tick,
    Input(T),
}

/// The one timer of the clock, firing on whole periods since `start`.
pub struct Ticker {
    start: Instant,
    ticks: u32,
}

impl Ticker {
    pub fn new(start: Instant) -> Self {
        Self { start, ticks: 0 }
    }

    pub fn next_deadline(&self) -> Instant {
        self.start + PERIOD * (self.ticks + 1)
    }

    /// Block until the next tick, or return early with input from `receiver`.
    pub fn wait<T>(&mut self, receiver: &Receiver<T>) -> Wake<T> {
        match recv_deadline(receiver, self.next_deadline()) {
            Ok(input) => return Wake::Input(input),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                thread::sleep(self.next_deadline().saturating_duration_since(Instant::now()));
            }
        }

        self.advance(Instant::now());
        Wake::Tick
    }

    fn advance(&mut self, now: Instant) {
        self.ticks += 1;

        // After a suspend, skip the missed ticks instead of firing them all at once
        let elapsed = now.saturating_duration_since(self.start);
        let due = (elapsed.as_millis() / PERIOD.as_millis()) as u32;
        if due > self.ticks {
            tracing::debug!(missed = due - self.ticks, "ticker fell behind");
            self.ticks = due;
        }
    }
}

/// Reimplement std::sync::mpsc::Receiver::recv_deadline in stable Rust.
fn recv_deadline<T>(receiver: &Receiver<T>, instant: Instant) -> Result<T, RecvTimeoutError> {
    let duration_to_sleep = instant.saturating_duration_since(Instant::now());
    receiver.recv_timeout(duration_to_sleep)
}
