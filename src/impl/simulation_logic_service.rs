use std::marker::PhantomData;

use crate::decay::DecayRoller;
use crate::direction_strategy::{DirectionContext, StrategyResolver};
use crate::log_data::LogRepresentable;
use crate::logic_service::SimulationLogic;
use crate::vehicle_state::{Resource, VehicleControl};

use super::simple_direction_context::SimpleDirectionContext;
use super::vehicle_command::VehicleCommand;
use super::vehicle_status::MAX_GAS;

pub struct SimulationLogicService<Res, Dec, Ctx = SimpleDirectionContext>
where
    Res: StrategyResolver,
    Dec: DecayRoller,
    Ctx: DirectionContext + Default,
{
    resolver: Res,
    decay: Dec,
    _marker: PhantomData<Ctx>,
}

impl<Res, Dec> SimulationLogicService<Res, Dec, SimpleDirectionContext>
where
    Res: StrategyResolver,
    Dec: DecayRoller,
{
    pub fn new(resolver: Res, decay: Dec) -> SimulationLogicService<Res, Dec, SimpleDirectionContext> {
        SimulationLogicService::with_context(resolver, decay)
    }
}

impl<Res, Dec, Ctx> SimulationLogicService<Res, Dec, Ctx>
where
    Res: StrategyResolver,
    Dec: DecayRoller,
    Ctx: DirectionContext + Default,
{
    /// same as `new`, but every turn steers through a fresh `Ctx`
    pub fn with_context(resolver: Res, decay: Dec) -> SimulationLogicService<Res, Dec, Ctx> {
        SimulationLogicService {
            resolver,
            decay,
            _marker: PhantomData,
        }
    }

    pub fn decay(&self) -> &Dec {
        &self.decay
    }

    fn steer<V>(&self, command: &VehicleCommand, vehicle: V) -> V
    where
        V: VehicleControl,
    {
        let strategy = self.resolver.resolve(command.movement());
        tracing::debug!(
            command = %command.log_repr(),
            strategy = %strategy.log_repr(),
            "dispatching command"
        );
        // context lives for this turn only
        let mut ctx = Ctx::default();
        ctx.set_strategy(strategy);
        ctx.execute_strategy(vehicle)
    }
}

impl<V, Res, Dec, Ctx> SimulationLogic<V> for SimulationLogicService<Res, Dec, Ctx>
where
    V: VehicleControl,
    Res: StrategyResolver,
    Dec: DecayRoller,
    Ctx: DirectionContext + Default,
{
    fn perform_action(&mut self, action_code: i64, mut vehicle: V) -> V {
        let command = VehicleCommand::from_code(action_code);
        if command.is_refuel() {
            vehicle.set_resource(Resource::Gas, MAX_GAS);
            return vehicle;
        }

        let vehicle = self.steer(&command, vehicle);
        self.decrease_status_values(action_code, vehicle)
    }

    fn decrease_status_values(&mut self, action_code: i64, mut vehicle: V) -> V {
        let energy_loss = self.decay.roll_decay(Resource::Energy);
        vehicle.expend_resource(Resource::Energy, energy_loss);

        if !VehicleCommand::from_code(action_code).is_rest() {
            let gas_loss = self.decay.roll_decay(Resource::Gas);
            vehicle.expend_resource(Resource::Gas, gas_loss);
        }
        vehicle
    }
}
