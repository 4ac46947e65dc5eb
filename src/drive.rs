use super::gametime::GameTime;
use super::log_data::{LogRepresentable, LogWriter};
use super::logic_service::SimulationLogic;
use super::r#impl::vehicle_command::VehicleCommand;
use super::vehicle_state::VehicleControl;

/// Turn loop for a single vehicle.
///
/// Feeds action codes through the logic one per turn and writes a log record
/// for each of them.
pub struct Drive<V, DLogic, LW>
where
    V: VehicleControl + LogRepresentable + Copy,
    DLogic: SimulationLogic<V>,
    LW: LogWriter<String, String, String>,
{
    name: String,
    status: V,
    drive_logic: DLogic,
    turn: GameTime,
    log_writer: LW,
    stranded_logged: bool,
}

impl<V, DLogic, LW> Drive<V, DLogic, LW>
where
    V: VehicleControl + LogRepresentable + Copy,
    DLogic: SimulationLogic<V>,
    LW: LogWriter<String, String, String>,
{
    pub fn new(name: &str, drive_logic: DLogic, initial_status: V, log_writer: LW) -> Drive<V, DLogic, LW> {
        Drive {
            name: name.to_owned(),
            status: initial_status,
            drive_logic,
            turn: 0,
            log_writer,
            stranded_logged: false,
        }
    }

    pub fn turn(&self) -> GameTime {
        self.turn
    }

    pub fn status(&self) -> V {
        self.status
    }

    pub fn log_writer(&self) -> &LW {
        &self.log_writer
    }

    pub fn into_parts(self) -> (V, DLogic, LW) {
        (self.status, self.drive_logic, self.log_writer)
    }

    /// one action, one turn
    pub fn step(&mut self, action_code: i64) -> V {
        let command = VehicleCommand::from_code(action_code);
        self.status = self.drive_logic.perform_action(action_code, self.status);
        self.log_writer.add_log_data(
            self.name.clone(),
            command.log_repr(),
            self.turn,
            self.status.log_repr(),
        );
        self.turn += 1;
        self.status
    }

    /// Runs codes in order until they run out or the vehicle gets stranded.
    ///
    /// A stranded vehicle (no gas, no energy) can still rest or refuel,
    /// anything else ends the drive.
    /// Returns the number of turns taken.
    pub fn run_commands<I>(&mut self, action_codes: I) -> GameTime
    where
        I: IntoIterator<Item = i64>,
    {
        let start_turn = self.turn;
        tracing::info!(vehicle = %self.name, status = %self.status.log_repr(), "drive started");

        for action_code in action_codes {
            let command = VehicleCommand::from_code(action_code);
            if self.status.is_stranded() && !(command.is_refuel() || command.is_rest()) {
                if !self.stranded_logged {
                    tracing::warn!(vehicle = %self.name, turn = self.turn, "vehicle stranded, stopping");
                    self.log_writer.add_log_data(
                        self.name.clone(),
                        "stranded".to_owned(),
                        self.turn,
                        self.status.log_repr(),
                    );
                    self.stranded_logged = true;
                }
                break;
            }
            self.step(action_code);
        }

        tracing::info!(
            vehicle = %self.name,
            turns = self.turn - start_turn,
            status = %self.status.log_repr(),
            "drive finished"
        );
        self.turn - start_turn
    }
}
