use crate::log_data::LogRepresentable;
use crate::orientation::SimpleOrientation;
use crate::vehicle_state::VehicleControl;

use super::vehicle_status::MovementAction;

/// The ways a single command can steer a vehicle.
///
/// Each variant only touches heading and last movement, resources are left to
/// the logic service.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DirectionStrategy {
    TurnLeft,
    TurnRight,
    DriveForward,
    Reverse,
    /// fallback for anything unrecognized
    Dummy,
}

impl DirectionStrategy {
    pub fn execute<V>(&self, mut vehicle: V) -> V
    where
        V: VehicleControl,
    {
        let direction = vehicle.direction();
        match self {
            DirectionStrategy::TurnLeft => vehicle.steer(direction.turn_ccw(), MovementAction::Left),
            DirectionStrategy::TurnRight => vehicle.steer(direction.turn_cw(), MovementAction::Right),
            DirectionStrategy::DriveForward => vehicle.steer(direction, MovementAction::Forward),
            DirectionStrategy::Reverse => vehicle.steer(direction.opposite(), MovementAction::Backward),
            DirectionStrategy::Dummy => (),
        }
        vehicle
    }
}

impl LogRepresentable for DirectionStrategy {
    fn log_repr(&self) -> String {
        match self {
            DirectionStrategy::TurnLeft => "turn-left",
            DirectionStrategy::TurnRight => "turn-right",
            DirectionStrategy::DriveForward => "drive-forward",
            DirectionStrategy::Reverse => "reverse",
            DirectionStrategy::Dummy => "dummy",
        }
        .to_owned()
    }
}
