use crate::r#impl::direction_strategies::DirectionStrategy;
use crate::r#impl::vehicle_status::MovementAction;
use crate::vehicle_state::VehicleControl;

/// Holds at most one strategy and runs whatever is installed.
pub trait DirectionContext {
    /// replaces any previously installed strategy
    fn set_strategy(&mut self, strategy: DirectionStrategy);

    /// with nothing installed the vehicle comes back unchanged
    fn execute_strategy<V>(&self, vehicle: V) -> V
    where
        V: VehicleControl;
}

/// Total mapping from a movement classification to the strategy that performs it.
pub trait StrategyResolver {
    fn resolve(&self, movement: MovementAction) -> DirectionStrategy;
}

impl<F> StrategyResolver for F
where
    F: Fn(MovementAction) -> DirectionStrategy,
{
    fn resolve(&self, movement: MovementAction) -> DirectionStrategy {
        self(movement)
    }
}
