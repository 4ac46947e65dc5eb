use car_sim::logic_service::SimulationLogic;
use car_sim::r#impl::cardinal_direction::CardinalDirection;
use car_sim::r#impl::decay_rollers::RngDecayRoller;
use car_sim::r#impl::direction_strategies::DirectionStrategy;
use car_sim::r#impl::simulation_logic_service::SimulationLogicService;
use car_sim::r#impl::vehicle_status::{MovementAction, Status};

use rand::rngs::StdRng;

mod common;
use common::{real_resolver, DummyDirectionContext};

fn test_service(
    seed: u64,
) -> SimulationLogicService<
    impl Fn(MovementAction) -> DirectionStrategy,
    RngDecayRoller<StdRng>,
    DummyDirectionContext,
> {
    SimulationLogicService::with_context(real_resolver(), RngDecayRoller::from_seed(seed))
}

#[test]
fn test_refuel_sets_gas_to_20() {
    let mut service = test_service(1);
    let status = Status::new(CardinalDirection::North, 0, 10);

    let result = service.perform_action(6, status);

    assert_eq!(20, result.gas);
    assert_eq!(10, result.energy);
    assert_eq!(CardinalDirection::North, result.cardinal_direction);
    assert_eq!(MovementAction::None, result.movement_action);
}

#[test]
fn test_energy_always_decreases() {
    for seed in 0..50 {
        let mut service = test_service(seed);
        let result = service.decrease_status_values(3, Status::new(CardinalDirection::North, 10, 10));
        assert!((5..=9).contains(&result.energy));
    }
}

#[test]
fn test_gas_decreases_when_not_resting() {
    for seed in 0..50 {
        let mut service = test_service(seed);
        let result = service.decrease_status_values(3, Status::new(CardinalDirection::North, 10, 10));
        assert!((5..=9).contains(&result.gas));
    }
}

#[test]
fn test_rest_keeps_gas() {
    for seed in 0..50 {
        let mut service = test_service(seed);
        let result = service.perform_action(5, Status::new(CardinalDirection::North, 10, 10));
        assert_eq!(10, result.gas);
        assert!(result.energy < 10);
        assert_eq!(CardinalDirection::North, result.cardinal_direction);
    }
}

#[test]
fn test_turn_left_from_north() {
    let mut service = test_service(3);
    let status = Status::new(CardinalDirection::North, 10, 10);

    let result = service.perform_action(1, status);

    assert_eq!(CardinalDirection::West, result.cardinal_direction);
    assert_eq!(MovementAction::Left, result.movement_action);
    assert!((5..=9).contains(&result.gas));
    assert!(result.energy <= 9);
}

#[test]
fn test_turn_right_from_north() {
    let mut service = test_service(4);
    let result = service.perform_action(2, Status::new(CardinalDirection::North, 10, 10));
    assert_eq!(CardinalDirection::East, result.cardinal_direction);
    assert_eq!(MovementAction::Right, result.movement_action);
}

#[test]
fn test_turn_left_from_east() {
    let mut service = test_service(5);
    let result = service.perform_action(1, Status::new(CardinalDirection::East, 10, 10));
    assert_eq!(CardinalDirection::North, result.cardinal_direction);
    assert_eq!(MovementAction::Left, result.movement_action);
}

#[test]
fn test_reverse_from_north() {
    let mut service = test_service(6);
    let result = service.perform_action(4, Status::new(CardinalDirection::North, 10, 10));
    assert_eq!(CardinalDirection::South, result.cardinal_direction);
    assert_eq!(MovementAction::Backward, result.movement_action);
}

#[test]
fn test_drive_forward_keeps_direction() {
    let mut service = test_service(7);
    let status = Status::new(CardinalDirection::East, 10, 10).with_movement(MovementAction::Left);

    let result = service.perform_action(3, status);

    assert_eq!(CardinalDirection::East, result.cardinal_direction);
    assert_eq!(MovementAction::Forward, result.movement_action);
}

#[test]
fn test_seeded_runs_repeat() {
    let mut a = test_service(99);
    let mut b = test_service(99);
    let mut status_a = Status::default();
    let mut status_b = Status::default();
    for code in [1, 3, 3, 2, 5, 4, 7] {
        status_a = a.perform_action(code, status_a);
        status_b = b.perform_action(code, status_b);
        assert_eq!(status_a, status_b);
    }
    // six steering/unknown turns roll twice, one rest rolls once
    assert_eq!(13, a.decay().draws());
    assert_eq!(a.decay().draws(), b.decay().draws());
}
