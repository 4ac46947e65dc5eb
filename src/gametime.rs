/// simulation time is counted in turns, one action per turn
pub type GameTime = usize;
