#![allow(dead_code)]

use car_sim::direction_strategy::DirectionContext;
use car_sim::gametime::GameTime;
use car_sim::log_data::{LogRepresentable, LogWriter};
use car_sim::r#impl::direction_strategies::DirectionStrategy;
use car_sim::r#impl::vehicle_status::MovementAction;
use car_sim::vehicle_state::VehicleControl;

pub struct VecLogWriter<LO, LA, LS>
where
    LO: LogRepresentable,
    LA: LogRepresentable,
    LS: LogRepresentable,
{
    pub log_datas: Vec<(LO, LA, GameTime, LS)>,
}

impl<LO, LA, LS> LogWriter<LO, LA, LS> for VecLogWriter<LO, LA, LS>
where
    LO: LogRepresentable,
    LA: LogRepresentable,
    LS: LogRepresentable,
{
    fn add_log_data(&mut self, object: LO, action: LA, turn: GameTime, status: LS) {
        self.log_datas.push((object, action, turn, status));
    }
}

impl<LO, LA, LS> VecLogWriter<LO, LA, LS>
where
    LO: LogRepresentable,
    LA: LogRepresentable,
    LS: LogRepresentable,
{
    pub fn new() -> VecLogWriter<LO, LA, LS> {
        VecLogWriter {
            log_datas: Vec::new(),
        }
    }
}

impl VecLogWriter<String, String, String> {
    pub fn actions(&self) -> Vec<&str> {
        self.log_datas.iter().map(|(_, a, _, _)| a.as_str()).collect()
    }

    pub fn print(&self) {
        for (o, a, t, s) in self.log_datas.iter() {
            println!("{}\t{}\t{}\t{}", o, a, t, s);
        }
    }
}

/// context that remembers what it was given, same pass-through rules as the real one
#[derive(Default)]
pub struct DummyDirectionContext {
    strategy: Option<DirectionStrategy>,
}

impl DirectionContext for DummyDirectionContext {
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

pub fn real_resolver() -> impl Fn(MovementAction) -> DirectionStrategy {
    |movement_action: MovementAction| match movement_action {
        MovementAction::Left => DirectionStrategy::TurnLeft,
        MovementAction::Right => DirectionStrategy::TurnRight,
        MovementAction::Forward => DirectionStrategy::DriveForward,
        MovementAction::Backward => DirectionStrategy::Reverse,
        _ => DirectionStrategy::Dummy,
    }
}
