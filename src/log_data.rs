use super::gametime::GameTime;

pub trait LogRepresentable
where Self: Sized {
    fn to_log_repr(self) -> String {
        self.log_repr()
    }
    fn log_repr(&self) -> String;
}

impl LogRepresentable for String {
    fn to_log_repr(self) -> String {
        self
    }

    fn log_repr(&self) -> String {
        self.to_owned()
    }
}

/// one record per turn: who, what was done, at which turn, and what came out of it
pub trait LogWriter<LRO, LRA, LRS>
where
    LRO: LogRepresentable,
    LRA: LogRepresentable,
    LRS: LogRepresentable,
{
    fn add_log_data(&mut self, object: LRO, action: LRA, turn: GameTime, status: LRS);
}
