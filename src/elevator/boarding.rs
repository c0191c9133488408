/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, Passenger};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardingPlan {
    /// Positions in the waiting list, ascending.
    pub admitted: Vec<usize>,
    /// Someone did not fit.
    pub left_behind: bool,
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Decides who boards at `floor` without touching any state.
 *
 * Riders are considered in arrival order and every one of them is looked at,
 * a rejection never ends the scan. Weight is checked first: a rider who would
 * push the load past `max_weight` stays behind and sets `left_behind`. A rider
 * who fits boards only if `direction` accepts their destination.
 */
pub fn plan_boarding(
    waiting: &[Passenger],
    floor: u8,
    direction: Direction,
    onboard_weight: u32,
    max_weight: u32,
) -> BoardingPlan {
    let mut plan = BoardingPlan::default();
    let mut load = onboard_weight;

    for (i, passenger) in waiting.iter().enumerate() {
        let too_heavy = load
            .checked_add(passenger.weight)
            .map_or(true, |weight| weight > max_weight);
        if too_heavy {
            plan.left_behind = true;
            continue;
        }
        if direction.accepts(floor, passenger.destination_floor) {
            load += passenger.weight;
            plan.admitted.push(i);
        }
    }

    plan
}
