use serde::{Deserialize, Serialize};

use crate::log_data::LogRepresentable;
use crate::vehicle_state::{Resource, VehicleControl};

use super::cardinal_direction::CardinalDirection;

pub const MAX_GAS: usize = 20;
pub const DEFAULT_ENERGY: usize = 20;

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementAction {
    #[default]
    None,
    Left,
    Right,
    Forward,
    Backward,
}

impl LogRepresentable for MovementAction {
    fn log_repr(&self) -> String {
        match self {
            MovementAction::None => "none",
            MovementAction::Left => "left",
            MovementAction::Right => "right",
            MovementAction::Forward => "forward",
            MovementAction::Backward => "backward",
        }
        .to_owned()
    }
}

/// Snapshot of a vehicle between two turns.
///
/// Passed by value into every step and returned updated; nothing keeps a
/// reference to it across calls.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub cardinal_direction: CardinalDirection,
    #[serde(default)]
    pub movement_action: MovementAction,
    pub gas: usize,
    pub energy: usize,
}

impl Status {
    pub fn new(cardinal_direction: CardinalDirection, gas: usize, energy: usize) -> Status {
        Status {
            cardinal_direction,
            movement_action: MovementAction::None,
            gas,
            energy,
        }
    }

    pub fn with_movement(mut self, movement_action: MovementAction) -> Status {
        self.movement_action = movement_action;
        self
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::new(CardinalDirection::North, MAX_GAS, DEFAULT_ENERGY)
    }
}

impl VehicleControl for Status {
    fn direction(&self) -> CardinalDirection {
        self.cardinal_direction
    }

    fn steer(&mut self, direction: CardinalDirection, movement: MovementAction) {
        self.cardinal_direction = direction;
        self.movement_action = movement;
    }

    fn expend_resource(&mut self, res: Resource, amount: usize) {
        let res = match res {
            Resource::Gas => &mut self.gas,
            Resource::Energy => &mut self.energy,
        };

        *res = res.saturating_sub(amount);
    }

    fn set_resource(&mut self, res: Resource, amount: usize) {
        match res {
            Resource::Gas => self.gas = amount,
            Resource::Energy => self.energy = amount,
        }
    }

    fn resource_value(&self, res: Resource) -> usize {
        match res {
            Resource::Gas => self.gas,
            Resource::Energy => self.energy,
        }
    }
}

impl LogRepresentable for Status {
    fn log_repr(&self) -> String {
        format!(
            "{},{},gas={},energy={}",
            self.cardinal_direction.log_repr(),
            self.movement_action.log_repr(),
            self.gas,
            self.energy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expend_floors_at_zero() {
        let mut status = Status::new(CardinalDirection::East, 3, 2);
        status.expend_resource(Resource::Gas, 5);
        status.expend_resource(Resource::Energy, 1);
        assert_eq!(0, status.gas);
        assert_eq!(1, status.energy);
        assert!(!status.is_stranded());
        status.expend_resource(Resource::Energy, 1);
        assert!(status.is_stranded());
    }

    #[test]
    fn log_repr_lists_every_field() {
        let status = Status::new(CardinalDirection::South, 7, 4).with_movement(MovementAction::Backward);
        assert_eq!("south,backward,gas=7,energy=4", status.log_repr());
    }
}
