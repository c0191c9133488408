/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::{ExitLog, FloorRegistry};
use crate::clock::{Clock, SystemClock};
use crate::config::SimulationConfig;
use crate::elevator::Elevator;
use crate::shared::error::check_floor;
use crate::shared::{Call, Passenger, SimError, Snapshot};

/**
 * One building with one car.
 *
 * Owns the car, the waiting riders, the exit log and the clock. Floor calls
 * come in through `place_call`, time moves on through `tick`, and observers
 * read through `observe`. Nothing here is shared, so any number of
 * simulations can run side by side.
 */
pub struct Simulation<C: Clock = SystemClock> {
    config: SimulationConfig,
    elevator: Elevator,
    floors: FloorRegistry,
    exit_log: ExitLog,
    clock: C,
}

impl Simulation<SystemClock> {
    pub fn new(config: SimulationConfig) -> Simulation<SystemClock> {
        Simulation::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Simulation<C> {
    pub fn with_clock(config: SimulationConfig, clock: C) -> Simulation<C> {
        Simulation {
            elevator: Elevator::new(&config),
            floors: FloorRegistry::new(config.n_floors),
            exit_log: ExitLog::new(config.n_floors, config.exit_display_time()),
            config,
            clock,
        }
    }

    /// Someone at `from` wants to go to `to`.
    pub fn place_call(&mut self, from: u8, to: u8) -> Result<(), SimError> {
        let weight = self.config.default_passenger_weight;
        self.place_call_with_weight(from, to, weight)
    }

    pub fn place_call_with_weight(&mut self, from: u8, to: u8, weight: u32) -> Result<(), SimError> {
        check_floor(from, self.config.n_floors)?;
        check_floor(to, self.config.n_floors)?;
        if from == to {
            return Err(SimError::SameFloorCall { floor: from });
        }
        // A rider heavier than the car could never board.
        if weight == 0 || weight > self.config.max_weight {
            return Err(SimError::InvalidWeight {
                weight,
                max_weight: self.config.max_weight,
            });
        }

        self.floors.push(from, Passenger::with_weight(to, weight))?;
        self.elevator.add_destination(from)?;
        debug!("Call from floor {} to floor {} ({} kg)", from, to, weight);
        Ok(())
    }

    pub fn place(&mut self, call: Call) -> Result<(), SimError> {
        match call.weight {
            Some(weight) => self.place_call_with_weight(call.from, call.to, weight),
            None => self.place_call(call.from, call.to),
        }
    }

    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.elevator
            .advance(&mut self.floors, &mut self.exit_log, now);
    }

    /// Takes a snapshot for rendering. Expired exit records are dropped on the way.
    pub fn observe(&mut self) -> Snapshot {
        let exits = self.exit_log.sweep(self.clock.now());
        Snapshot {
            current_floor: self.elevator.current_floor(),
            passengers: self.elevator.passengers().to_vec(),
            queue: self.elevator.queue(),
            direction: self.elevator.direction(),
            total_weight: self.elevator.total_weight(),
            passenger_count: self.elevator.passenger_count(),
            waiting_counts: self.floors.waiting_counts(),
            exits,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn elevator(&self) -> &Elevator {
        &self.elevator
    }

    pub fn floors(&self) -> &FloorRegistry {
        &self.floors
    }

    pub fn exit_log(&self) -> &ExitLog {
        &self.exit_log
    }
}
