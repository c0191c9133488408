/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, warn};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::{ExitLog, FloorRegistry};
use crate::config::SimulationConfig;
use crate::elevator::boarding::plan_boarding;
use crate::shared::error::check_floor;
use crate::shared::{Direction, Passenger, SimError};

/**
 * The single elevator car and its scheduling logic.
 *
 * The car keeps a queue of target floors and moves one floor toward the
 * front of the queue on every `advance`. On each floor it stops at it first
 * lets riders off, then takes on riders that fit and are going its way.
 * With nothing to do it looks for waiting riders, and after `idle_timeout`
 * without any it parks at floor 0.
 *
 * # Fields
 * - `n_floors`:        Number of floors served.
 * - `max_weight`:      Total onboard weight the car may carry.
 * - `idle_timeout`:    How long to idle before parking at floor 0.
 * - `current_floor`:   Floor the car is at.
 * - `passengers`:      Riders onboard, in boarding order.
 * - `queue`:           Target floors without duplicates, front is the next stop.
 * - `direction`:       Direction toward the front of the queue.
 * - `idle_since`:      When the car last became idle, `None` while busy.
 */
#[derive(Debug, Clone)]
pub struct Elevator {
    n_floors: u8,
    max_weight: u32,
    idle_timeout: Duration,
    current_floor: u8,
    passengers: Vec<Passenger>,
    queue: VecDeque<u8>,
    direction: Direction,
    idle_since: Option<Instant>,
}

impl Elevator {
    pub fn new(config: &SimulationConfig) -> Elevator {
        Elevator {
            n_floors: config.n_floors,
            max_weight: config.max_weight,
            idle_timeout: config.idle_timeout(),
            current_floor: 0,
            passengers: Vec::new(),
            queue: VecDeque::new(),
            direction: Direction::Idle,
            idle_since: None,
        }
    }

    /// Adds `floor` to the back of the queue unless it is already there.
    pub fn add_destination(&mut self, floor: u8) -> Result<(), SimError> {
        check_floor(floor, self.n_floors)?;
        self.enqueue(floor);
        self.refresh_direction();
        Ok(())
    }

    /// Runs one tick: move, unload, load, then update the queue.
    pub fn advance(&mut self, floors: &mut FloorRegistry, exits: &mut ExitLog, now: Instant) {
        let Some(&target) = self.queue.front() else {
            self.settle(floors, now);
            return;
        };

        self.idle_since = None;
        self.step_towards(target);
        self.unload(exits, now);
        let left_behind = self.load(floors);

        if self.current_floor == target {
            self.queue.pop_front();
            if left_behind && !self.queue.contains(&self.current_floor) {
                info!(
                    "Car full at floor {}, coming back for the rest",
                    self.current_floor
                );
                self.queue.push_back(self.current_floor);
            }
        }

        self.refresh_direction();
    }

    pub fn current_floor(&self) -> u8 {
        self.current_floor
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn queue(&self) -> Vec<u8> {
        self.queue.iter().copied().collect()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_idle(&self) -> bool {
        self.idle_since.is_some()
    }

    pub fn idle_since(&self) -> Option<Instant> {
        self.idle_since
    }

    pub fn max_weight(&self) -> u32 {
        self.max_weight
    }

    pub fn total_weight(&self) -> u32 {
        self.passengers.iter().map(|p| p.weight).sum()
    }

    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    fn enqueue(&mut self, floor: u8) {
        if !self.queue.contains(&floor) {
            self.queue.push_back(floor);
        }
    }

    // The only place direction is derived from position and queue.
    fn refresh_direction(&mut self) {
        self.direction = match self.queue.front() {
            Some(&next) => Direction::towards(self.current_floor, next),
            None => Direction::Idle,
        };
    }

    fn step_towards(&mut self, target: u8) {
        match Direction::towards(self.current_floor, target) {
            Direction::Up => self.current_floor += 1,
            Direction::Down => self.current_floor -= 1,
            Direction::Idle => (),
        }
        self.refresh_direction();
        debug!(
            "Car at floor {} heading {:?} (target {})",
            self.current_floor, self.direction, target
        );
    }

    fn unload(&mut self, exits: &mut ExitLog, now: Instant) {
        let floor = self.current_floor;
        let (leaving, staying): (Vec<Passenger>, Vec<Passenger>) = self
            .passengers
            .drain(..)
            .partition(|p| p.destination_floor == floor);
        self.passengers = staying;

        if !leaving.is_empty() {
            info!("{} passenger(s) got off at floor {}", leaving.len(), floor);
        }
        for passenger in leaving {
            exits.record(floor, passenger, now);
        }
    }

    // Returns true if someone was left behind because the car was full.
    fn load(&mut self, floors: &mut FloorRegistry) -> bool {
        let floor = self.current_floor;
        let plan = plan_boarding(
            floors.waiting(floor),
            floor,
            self.direction,
            self.total_weight(),
            self.max_weight,
        );

        if !plan.admitted.is_empty() {
            let boarding = floors.take(floor, &plan.admitted);
            info!("{} passenger(s) boarded at floor {}", boarding.len(), floor);
            for passenger in boarding {
                self.enqueue(passenger.destination_floor);
                self.passengers.push(passenger);
            }
        }

        plan.left_behind
    }

    // Called when there is nothing queued.
    fn settle(&mut self, floors: &FloorRegistry, now: Instant) {
        if let Some(first) = self.passengers.first() {
            // Boarding always queues the destination, so this means the queue was lost.
            let destination = first.destination_floor;
            warn!(
                "Empty queue with {} passenger(s) onboard, heading to floor {}",
                self.passengers.len(),
                destination
            );
            self.idle_since = None;
            self.enqueue(destination);
            self.refresh_direction();
            return;
        }

        if let Some(nearest) = floors.nearest_waiting(self.current_floor) {
            info!("Picking up waiting passengers at floor {}", nearest);
            self.idle_since = None;
            self.enqueue(nearest);
            self.refresh_direction();
            return;
        }

        match self.idle_since {
            None => {
                debug!("Car idle at floor {}", self.current_floor);
                self.idle_since = Some(now);
            }
            Some(since) => {
                if now.saturating_duration_since(since) >= self.idle_timeout
                    && self.current_floor != 0
                {
                    info!("Idle timeout at floor {}, parking at floor 0", self.current_floor);
                    self.enqueue(0);
                    self.refresh_direction();
                }
            }
        }
    }
}

/***************************************/
/*           Test helpers              */
/***************************************/
#[cfg(test)]
impl Elevator {
    pub fn test_set_state(&mut self, floor: u8, passengers: Vec<Passenger>, queue: Vec<u8>) {
        self.current_floor = floor;
        self.passengers = passengers;
        self.queue = queue.into_iter().collect();
        self.refresh_direction();
    }
}
