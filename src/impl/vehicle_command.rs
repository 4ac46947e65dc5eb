use crate::log_data::LogRepresentable;

use super::vehicle_status::MovementAction;

pub const TURN_LEFT_CODE: i64 = 1;
pub const TURN_RIGHT_CODE: i64 = 2;
pub const DRIVE_FORWARD_CODE: i64 = 3;
pub const REVERSE_CODE: i64 = 4;
pub const REST_CODE: i64 = 5;
pub const REFUEL_CODE: i64 = 6;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum VehicleCommand {
    TurnLeft,
    TurnRight,
    DriveForward,
    Reverse,
    Rest,
    Refuel,
    Unrecognized(i64),
}

impl VehicleCommand {
    pub fn from_code(code: i64) -> VehicleCommand {
        match code {
            TURN_LEFT_CODE => VehicleCommand::TurnLeft,
            TURN_RIGHT_CODE => VehicleCommand::TurnRight,
            DRIVE_FORWARD_CODE => VehicleCommand::DriveForward,
            REVERSE_CODE => VehicleCommand::Reverse,
            REST_CODE => VehicleCommand::Rest,
            REFUEL_CODE => VehicleCommand::Refuel,
            other => VehicleCommand::Unrecognized(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            VehicleCommand::TurnLeft => TURN_LEFT_CODE,
            VehicleCommand::TurnRight => TURN_RIGHT_CODE,
            VehicleCommand::DriveForward => DRIVE_FORWARD_CODE,
            VehicleCommand::Reverse => REVERSE_CODE,
            VehicleCommand::Rest => REST_CODE,
            VehicleCommand::Refuel => REFUEL_CODE,
            VehicleCommand::Unrecognized(code) => *code,
        }
    }

    /// classification handed to the strategy resolver,
    /// commands that do not steer map to None
    pub fn movement(&self) -> MovementAction {
        match self {
            VehicleCommand::TurnLeft => MovementAction::Left,
            VehicleCommand::TurnRight => MovementAction::Right,
            VehicleCommand::DriveForward => MovementAction::Forward,
            VehicleCommand::Reverse => MovementAction::Backward,
            VehicleCommand::Rest | VehicleCommand::Refuel | VehicleCommand::Unrecognized(_) => {
                MovementAction::None
            }
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, VehicleCommand::Rest)
    }

    pub fn is_refuel(&self) -> bool {
        matches!(self, VehicleCommand::Refuel)
    }
}

impl LogRepresentable for VehicleCommand {
    fn log_repr(&self) -> String {
        match self {
            VehicleCommand::TurnLeft => "turn-left".to_owned(),
            VehicleCommand::TurnRight => "turn-right".to_owned(),
            VehicleCommand::DriveForward => "forward".to_owned(),
            VehicleCommand::Reverse => "reverse".to_owned(),
            VehicleCommand::Rest => "rest".to_owned(),
            VehicleCommand::Refuel => "refuel".to_owned(),
            VehicleCommand::Unrecognized(code) => format!("unknown[{}]", code),
        }
    }
}
