use crate::vehicle_state::VehicleControl;

/// One turn of vehicle simulation: action code in, updated vehicle out.
///
/// Both operations are total, any code and any vehicle value is accepted.
pub trait SimulationLogic<V>
where
    V: VehicleControl,
{
    /// full turn: steering, then refuel or decay
    fn perform_action(&mut self, action_code: i64, vehicle: V) -> V;

    /// resource decay only, steering untouched
    fn decrease_status_values(&mut self, action_code: i64, vehicle: V) -> V;
}
