use crate::direction_strategy::StrategyResolver;

use super::direction_strategies::DirectionStrategy;
use super::vehicle_status::MovementAction;

pub struct SimpleStrategyResolver {}

impl SimpleStrategyResolver {
    pub fn new() -> SimpleStrategyResolver {
        SimpleStrategyResolver {}
    }
}

impl Default for SimpleStrategyResolver {
    fn default() -> Self {
        SimpleStrategyResolver::new()
    }
}

impl StrategyResolver for SimpleStrategyResolver {
    fn resolve(&self, movement: MovementAction) -> DirectionStrategy {
        match movement {
            MovementAction::Left => DirectionStrategy::TurnLeft,
            MovementAction::Right => DirectionStrategy::TurnRight,
            MovementAction::Forward => DirectionStrategy::DriveForward,
            MovementAction::Backward => DirectionStrategy::Reverse,
            MovementAction::None => DirectionStrategy::Dummy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_movement_resolves() {
        let resolver = SimpleStrategyResolver::new();
        assert_eq!(DirectionStrategy::TurnLeft, resolver.resolve(MovementAction::Left));
        assert_eq!(DirectionStrategy::TurnRight, resolver.resolve(MovementAction::Right));
        assert_eq!(DirectionStrategy::DriveForward, resolver.resolve(MovementAction::Forward));
        assert_eq!(DirectionStrategy::Reverse, resolver.resolve(MovementAction::Backward));
        assert_eq!(DirectionStrategy::Dummy, resolver.resolve(MovementAction::None));
    }

    #[test]
    fn closures_are_resolvers() {
        let always_reverse = |_: MovementAction| DirectionStrategy::Reverse;
        assert_eq!(DirectionStrategy::Reverse, always_reverse.resolve(MovementAction::Left));
    }
}
