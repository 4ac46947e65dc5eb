pub mod decay;
pub mod direction_strategy;
pub mod drive;
pub mod error;
pub mod gametime;
pub mod log_data;
pub mod logic_service;
pub mod orientation;
pub mod serialization;
pub mod vehicle_state;

pub mod r#impl {
    pub mod buf_drive_logger;
    pub mod cardinal_direction;
    pub mod decay_rollers;
    pub mod direction_strategies;
    pub mod simple_direction_context;
    pub mod simple_strategy_resolver;
    pub mod simulation_logic_service;
    pub mod status_json_file;
    pub mod vehicle_command;
    pub mod vehicle_status;
}
