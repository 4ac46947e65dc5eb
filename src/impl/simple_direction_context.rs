use crate::direction_strategy::DirectionContext;
use crate::vehicle_state::VehicleControl;

use super::direction_strategies::DirectionStrategy;

#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleDirectionContext {
    strategy: Option<DirectionStrategy>,
}

impl SimpleDirectionContext {
    pub fn new() -> SimpleDirectionContext {
        SimpleDirectionContext { strategy: None }
    }

    pub fn strategy(&self) -> Option<DirectionStrategy> {
        self.strategy
    }
}

impl DirectionContext for SimpleDirectionContext {
    fn set_strategy(&mut self, strategy: DirectionStrategy) {
        self.strategy = Some(strategy);
    }

    fn execute_strategy<V>(&self, vehicle: V) -> V
    where
        V: VehicleControl,
    {
        match self.strategy {
            Some(strategy) => strategy.execute(vehicle),
            None => vehicle,
        }
    }
}
