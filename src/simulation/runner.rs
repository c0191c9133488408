/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{info, warn};
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::clock::Clock;
use crate::shared::{Call, Snapshot};
use crate::simulation::Simulation;

/**
 * Drives a `Simulation` from its own thread.
 *
 * Ticks and floor calls are handled one at a time in a single `select!`
 * loop, so the car, the floors and the exit log are only ever touched from
 * this thread. A snapshot is published after every tick and every call.
 *
 * # Fields
 * - `simulation`:      The simulation being driven.
 * - `tick_period`:     Time between two `tick`s.
 * - `call_rx`:         Receives floor calls from the call source.
 * - `snapshot_tx`:     Sends snapshots to the observer.
 * - `terminate_rx`:    Stops the loop.
 */
pub struct SimulationRunner<C: Clock> {
    simulation: Simulation<C>,
    tick_period: Duration,
    call_rx: cbc::Receiver<Call>,
    snapshot_tx: cbc::Sender<Snapshot>,
    terminate_rx: cbc::Receiver<()>,
}

impl<C: Clock> SimulationRunner<C> {
    pub fn new(
        simulation: Simulation<C>,
        call_rx: cbc::Receiver<Call>,
        snapshot_tx: cbc::Sender<Snapshot>,
        terminate_rx: cbc::Receiver<()>,
    ) -> SimulationRunner<C> {
        SimulationRunner {
            tick_period: simulation.config().tick_period(),
            simulation,
            call_rx,
            snapshot_tx,
            terminate_rx,
        }
    }

    /// Runs until told to stop or the call source hangs up, and hands the
    /// simulation back.
    pub fn run(mut self) -> Simulation<C> {
        let ticker = cbc::tick(self.tick_period);
        info!("Simulation running, tick every {:?}", self.tick_period);

        loop {
            cbc::select! {
                recv(ticker) -> _ => {
                    self.simulation.tick();
                    self.publish();
                }
                recv(self.call_rx) -> call => {
                    match call {
                        Ok(call) => {
                            if let Err(e) = self.simulation.place(call) {
                                warn!("Rejected call {:?}: {}", call, e);
                            }
                            self.publish();
                        }
                        Err(_) => {
                            info!("Call source closed, stopping simulation");
                            break;
                        }
                    }
                }
                recv(self.terminate_rx) -> _ => {
                    info!("Simulation terminated");
                    break;
                }
            }
        }

        self.simulation
    }

    fn publish(&mut self) {
        let snapshot = self.simulation.observe();
        // Nobody listening is fine, the simulation keeps going.
        let _ = self.snapshot_tx.send(snapshot);
    }
}
