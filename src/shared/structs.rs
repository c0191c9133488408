/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*             Constants               */
/***************************************/
pub const DEFAULT_PASSENGER_WEIGHT: u32 = 70;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Idle,
    Up,
    Down,
}

impl Direction {
    /// Direction of travel needed to get from `from` to `to`.
    pub fn towards(from: u8, to: u8) -> Direction {
        if to > from {
            Direction::Up
        } else if to < from {
            Direction::Down
        } else {
            Direction::Idle
        }
    }

    /// A rider bound for `destination` may board at `floor` only if the car
    /// does not have to reverse to take them there.
    pub fn accepts(&self, floor: u8, destination: u8) -> bool {
        match *self {
            Direction::Idle => true,
            Direction::Up => destination > floor,
            Direction::Down => destination < floor,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match *self {
            Direction::Idle => "-",
            Direction::Up => "^",
            Direction::Down => "v",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passenger {
    #[serde(rename = "destinationFloor")]
    pub destination_floor: u8,
    pub weight: u32,
}

impl Passenger {
    pub fn new(destination_floor: u8) -> Passenger {
        Passenger::with_weight(destination_floor, DEFAULT_PASSENGER_WEIGHT)
    }

    pub fn with_weight(destination_floor: u8, weight: u32) -> Passenger {
        Passenger {
            destination_floor,
            weight,
        }
    }
}

/// A floor call as produced by the call source: someone at `from` wants to
/// go to `to`. `weight` falls back to the configured default.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Call {
    pub from: u8,
    pub to: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl Call {
    pub fn new(from: u8, to: u8) -> Call {
        Call {
            from,
            to,
            weight: None,
        }
    }
}

/**
 * Read-only view of the simulation handed to observers after every tick or call.
 *
 * # Fields
 * - `current_floor`:   Floor the car is at.
 * - `passengers`:      Riders currently onboard, in boarding order.
 * - `queue`:           Target floors, front is the next stop.
 * - `direction`:       Current direction of travel.
 * - `total_weight`:    Sum of onboard weights.
 * - `passenger_count`: Number of riders onboard.
 * - `waiting_counts`:  Number of waiting riders per floor.
 * - `exits`:           Riders that recently got off, per floor.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Snapshot {
    #[serde(rename = "currentFloor")]
    pub current_floor: u8,
    pub passengers: Vec<Passenger>,
    pub queue: Vec<u8>,
    pub direction: Direction,
    #[serde(rename = "totalWeight")]
    pub total_weight: u32,
    #[serde(rename = "passengerCount")]
    pub passenger_count: usize,
    #[serde(rename = "waitingCounts")]
    pub waiting_counts: Vec<usize>,
    pub exits: Vec<Vec<Passenger>>,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "floor {} {} | {} riders, {} kg | queue {:?} | waiting {:?}",
            self.current_floor,
            self.direction,
            self.passenger_count,
            self.total_weight,
            self.queue,
            self.waiting_counts,
        )?;

        let exited: Vec<String> = self
            .exits
            .iter()
            .enumerate()
            .filter(|(_, riders)| !riders.is_empty())
            .map(|(floor, riders)| format!("{}:{}", floor, riders.len()))
            .collect();
        if !exited.is_empty() {
            write!(f, " | exited {}", exited.join(" "))?;
        }
        Ok(())
    }
}
