use crate::r#impl::cardinal_direction::CardinalDirection;
use crate::r#impl::vehicle_status::MovementAction;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Resource {
    Gas,
    Energy,
}

pub trait VehicleControl {
    fn direction(&self) -> CardinalDirection;

    /// heading and last movement always change together
    fn steer(&mut self, direction: CardinalDirection, movement: MovementAction);

    /// never takes a resource below zero
    fn expend_resource(&mut self, res: Resource, amount: usize);
    fn set_resource(&mut self, res: Resource, amount: usize);

    fn resource_value(&self, res: Resource) -> usize;

    fn is_stranded(&self) -> bool {
        self.resource_value(Resource::Gas) == 0 && self.resource_value(Resource::Energy) == 0
    }
}
