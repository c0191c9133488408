/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::error::check_floor;
use crate::shared::{Passenger, SimError};

/**
 * Riders waiting for the car, per floor.
 *
 * Each floor keeps its riders in arrival order. There is no limit on how
 * many may wait at a floor.
 */
#[derive(Debug, Clone)]
pub struct FloorRegistry {
    floors: Vec<Vec<Passenger>>,
}

impl FloorRegistry {
    pub fn new(n_floors: u8) -> FloorRegistry {
        FloorRegistry {
            floors: vec![Vec::new(); n_floors as usize],
        }
    }

    pub fn n_floors(&self) -> u8 {
        self.floors.len() as u8
    }

    pub fn push(&mut self, floor: u8, passenger: Passenger) -> Result<(), SimError> {
        check_floor(floor, self.n_floors())?;
        self.floors[floor as usize].push(passenger);
        Ok(())
    }

    pub fn waiting(&self, floor: u8) -> &[Passenger] {
        self.floors
            .get(floor as usize)
            .map(|waiting| waiting.as_slice())
            .unwrap_or(&[])
    }

    /// Removes the riders at the given positions (ascending) and returns them
    /// in the same order. Everyone else keeps their place in line.
    pub fn take(&mut self, floor: u8, indices: &[usize]) -> Vec<Passenger> {
        let Some(waiting) = self.floors.get_mut(floor as usize) else {
            return Vec::new();
        };

        let mut taken = Vec::with_capacity(indices.len());
        let mut remaining = Vec::with_capacity(waiting.len().saturating_sub(indices.len()));
        for (i, passenger) in waiting.drain(..).enumerate() {
            if indices.contains(&i) {
                taken.push(passenger);
            } else {
                remaining.push(passenger);
            }
        }
        *waiting = remaining;
        taken
    }

    pub fn waiting_counts(&self) -> Vec<usize> {
        self.floors.iter().map(|waiting| waiting.len()).collect()
    }

    pub fn has_waiting(&self) -> bool {
        self.floors.iter().any(|waiting| !waiting.is_empty())
    }

    /// Closest floor with someone waiting. Ties go to the lower floor.
    pub fn nearest_waiting(&self, from: u8) -> Option<u8> {
        let mut nearest: Option<(u8, u8)> = None;
        for (floor, waiting) in self.floors.iter().enumerate() {
            if waiting.is_empty() {
                continue;
            }
            let floor = floor as u8;
            let distance = floor.abs_diff(from);
            match nearest {
                Some((_, best)) if best <= distance => {}
                _ => nearest = Some((floor, distance)),
            }
        }
        nearest.map(|(floor, _)| floor)
    }
}
