use std::ops::RangeInclusive;

use crate::vehicle_state::Resource;

/// every decay draw falls in this range
pub const DECAY_RANGE: RangeInclusive<usize> = 1..=5;

/// Source of per-turn decay amounts.
pub trait DecayRoller {
    /// amount to take away from `res` this turn, expected within DECAY_RANGE
    fn roll_decay(&mut self, res: Resource) -> usize;
}
