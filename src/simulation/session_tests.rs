/*
 * Unit tests for the simulation session
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_place_call_queues_pickup
 * - test_place_call_rejects_same_floor
 * - test_place_call_rejects_out_of_range
 * - test_place_call_rejects_bad_weight
 * - test_observe_reports_state
 * - test_observe_hides_expired_exits
 * - test_simulations_are_independent
 * - test_heavy_riders_at_weight_limit
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod session_tests {
    use crate::clock::ManualClock;
    use crate::config::SimulationConfig;
    use crate::shared::Direction::{Down, Up};
    use crate::shared::{Call, Passenger, SimError};
    use crate::simulation::Simulation;
    use std::time::Duration;

    fn setup_simulation() -> (Simulation<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (
            Simulation::with_clock(SimulationConfig::default(), clock.clone()),
            clock,
        )
    }

    fn run_ticks(simulation: &mut Simulation<ManualClock>, clock: &ManualClock, n: usize) {
        for _ in 0..n {
            clock.advance(Duration::from_millis(1000));
            simulation.tick();
        }
    }

    #[test]
    fn test_place_call_queues_pickup() {
        // Arrange
        let (mut simulation, _clock) = setup_simulation();

        // Act
        simulation.place_call(3, 0).unwrap();

        // Assert
        assert_eq!(simulation.floors().waiting(3), &[Passenger::new(0)]);
        assert_eq!(simulation.elevator().queue(), vec![3]);
        assert_eq!(simulation.elevator().direction(), Up);
    }

    #[test]
    fn test_place_call_rejects_same_floor() {
        // Arrange
        let (mut simulation, _clock) = setup_simulation();

        // Act
        let result = simulation.place_call(2, 2);

        // Assert
        assert!(matches!(result, Err(SimError::SameFloorCall { floor: 2 })));
        assert!(!simulation.floors().has_waiting());
        assert!(simulation.elevator().queue().is_empty());
    }

    #[test]
    fn test_place_call_rejects_out_of_range() {
        // Arrange
        let (mut simulation, _clock) = setup_simulation();

        // Act
        let from = simulation.place_call(9, 0);
        let to = simulation.place_call(0, 5);

        // Assert
        assert!(matches!(from, Err(SimError::FloorOutOfRange { floor: 9, .. })));
        assert!(matches!(to, Err(SimError::FloorOutOfRange { floor: 5, .. })));
        assert!(!simulation.floors().has_waiting());
    }

    #[test]
    fn test_place_call_rejects_bad_weight() {
        // Arrange
        let (mut simulation, _clock) = setup_simulation();

        // Act
        let zero = simulation.place_call_with_weight(1, 2, 0);
        let too_heavy = simulation.place(Call {
            from: 1,
            to: 2,
            weight: Some(601),
        });
        let heaviest = simulation.place_call_with_weight(1, 2, 600);

        // Assert
        assert!(matches!(zero, Err(SimError::InvalidWeight { weight: 0, .. })));
        assert!(matches!(
            too_heavy,
            Err(SimError::InvalidWeight { weight: 601, max_weight: 600 })
        ));
        assert!(heaviest.is_ok());
        assert_eq!(simulation.floors().waiting(1), &[Passenger::with_weight(2, 600)]);
    }

    #[test]
    fn test_observe_reports_state() {
        // Arrange
        let (mut simulation, clock) = setup_simulation();
        simulation.place_call(3, 0).unwrap();
        simulation.place_call(4, 1).unwrap();

        // Act
        run_ticks(&mut simulation, &clock, 3);
        let snapshot = simulation.observe();

        // Assert
        assert_eq!(snapshot.current_floor, 3);
        assert_eq!(snapshot.passengers, vec![Passenger::new(0)]);
        assert_eq!(snapshot.passenger_count, 1);
        assert_eq!(snapshot.total_weight, 70);
        assert_eq!(snapshot.queue, vec![4, 0]);
        assert_eq!(snapshot.direction, Up);
        assert_eq!(snapshot.waiting_counts, vec![0, 0, 0, 0, 1]);
        assert_eq!(snapshot.exits.len(), 5);
    }

    #[test]
    fn test_observe_hides_expired_exits() {
        // Arrange
        let (mut simulation, clock) = setup_simulation();
        simulation.place_call(0, 2).unwrap();
        run_ticks(&mut simulation, &clock, 3);
        assert_eq!(simulation.elevator().current_floor(), 2);

        // Act
        let fresh = simulation.observe();
        clock.advance(Duration::from_millis(3001));
        let stale = simulation.observe();

        // Assert
        assert_eq!(fresh.exits[2], vec![Passenger::new(2)]);
        assert!(stale.exits[2].is_empty());
        assert!(simulation.exit_log().entries(2).is_empty());
    }

    #[test]
    fn test_simulations_are_independent() {
        // Arrange
        let (mut first, first_clock) = setup_simulation();
        let (mut second, _second_clock) = setup_simulation();

        // Act
        first.place_call(4, 0).unwrap();
        run_ticks(&mut first, &first_clock, 4);

        // Assert
        assert_eq!(first.elevator().current_floor(), 4);
        assert_eq!(first.elevator().direction(), Down);
        assert_eq!(second.elevator().current_floor(), 0);
        assert!(second.elevator().queue().is_empty());
        assert!(!second.floors().has_waiting());
        assert_eq!(second.observe().waiting_counts, vec![0; 5]);
    }

    #[test]
    fn test_heavy_riders_at_weight_limit() {
        // Purpose: Two riders accepted by the call interface whose combined weight exceeds u32 do not break a tick

        // Arrange
        let clock = ManualClock::new();
        let config = SimulationConfig {
            max_weight: u32::MAX,
            ..SimulationConfig::default()
        };
        let mut simulation = Simulation::with_clock(config, clock.clone());
        let heavy = u32::MAX / 2 + 1;
        simulation.place_call_with_weight(0, 3, heavy).unwrap();
        simulation.place_call_with_weight(0, 4, heavy).unwrap();

        // Act
        run_ticks(&mut simulation, &clock, 1);

        // Assert
        assert_eq!(simulation.elevator().passengers(), &[Passenger::with_weight(3, heavy)]);
        assert_eq!(simulation.floors().waiting(0), &[Passenger::with_weight(4, heavy)]);
        assert_eq!(simulation.elevator().queue(), vec![3, 0]);
    }
}
