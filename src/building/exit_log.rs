/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::time::{Duration, Instant};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Passenger;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitRecord {
    pub at: Instant,
    pub passenger: Passenger,
}

/**
 * Riders that recently left the car, kept per floor for a short display window.
 *
 * Records are only evicted by `sweep`, which observers call when they read
 * the log.
 */
#[derive(Debug, Clone)]
pub struct ExitLog {
    display_time: Duration,
    floors: Vec<Vec<ExitRecord>>,
}

impl ExitLog {
    pub fn new(n_floors: u8, display_time: Duration) -> ExitLog {
        ExitLog {
            display_time,
            floors: vec![Vec::new(); n_floors as usize],
        }
    }

    pub fn record(&mut self, floor: u8, passenger: Passenger, at: Instant) {
        if let Some(records) = self.floors.get_mut(floor as usize) {
            records.push(ExitRecord { at, passenger });
        }
    }

    pub fn entries(&self, floor: u8) -> &[ExitRecord] {
        self.floors
            .get(floor as usize)
            .map(|records| records.as_slice())
            .unwrap_or(&[])
    }

    /// Drops records older than the display window and returns who is still
    /// visible on each floor.
    pub fn sweep(&mut self, now: Instant) -> Vec<Vec<Passenger>> {
        let display_time = self.display_time;
        self.floors
            .iter_mut()
            .map(|records| {
                records.retain(|record| now.saturating_duration_since(record.at) <= display_time);
                records.iter().map(|record| record.passenger).collect()
            })
            .collect()
    }
}
