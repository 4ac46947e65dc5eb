use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::decay::{DecayRoller, DECAY_RANGE};
use crate::vehicle_state::Resource;

/// Uniform draws from DECAY_RANGE using any rand generator.
pub struct RngDecayRoller<R> {
    rng: R,
    draws: u64,
}

impl<R> RngDecayRoller<R>
where
    R: Rng,
{
    pub fn new(rng: R) -> RngDecayRoller<R> {
        RngDecayRoller { rng, draws: 0 }
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl RngDecayRoller<StdRng> {
    pub fn from_seed(seed: u64) -> RngDecayRoller<StdRng> {
        RngDecayRoller::new(StdRng::seed_from_u64(seed))
    }
}

impl<R> DecayRoller for RngDecayRoller<R>
where
    R: Rng,
{
    fn roll_decay(&mut self, res: Resource) -> usize {
        self.draws = self.draws.saturating_add(1);
        let amount = self.rng.gen_range(DECAY_RANGE);
        tracing::trace!(?res, amount, draw = self.draws, "decay roll");
        amount
    }
}

/// Replays preset amounts in order, then repeats the fallback forever.
pub struct FixedDecayRoller {
    queued: VecDeque<usize>,
    fallback: usize,
}

impl FixedDecayRoller {
    pub fn new(fallback: usize) -> FixedDecayRoller {
        FixedDecayRoller {
            queued: VecDeque::new(),
            fallback,
        }
    }

    pub fn with_sequence<I>(amounts: I, fallback: usize) -> FixedDecayRoller
    where
        I: IntoIterator<Item = usize>,
    {
        FixedDecayRoller {
            queued: amounts.into_iter().collect(),
            fallback,
        }
    }
}

impl DecayRoller for FixedDecayRoller {
    fn roll_decay(&mut self, _res: Resource) -> usize {
        self.queued.pop_front().unwrap_or(self.fallback)
    }
}
