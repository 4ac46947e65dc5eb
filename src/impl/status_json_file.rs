use std::io;

use super::vehicle_status::{Status, MAX_GAS};
use crate::error::{Result, SimError};
use crate::serialization::{FromFile, ToFile};

impl FromFile for Status {
    fn load_from_reader<R>(r: R) -> Result<Self>
    where
        R: io::Read,
    {
        let status: Status = serde_json::from_reader(r)?;
        if status.gas > MAX_GAS {
            return Err(SimError::GasOverCapacity {
                gas: status.gas,
                capacity: MAX_GAS,
            });
        }
        Ok(status)
    }
}

impl ToFile for Status {
    fn save_to_writer<W>(&self, mut w: W) -> Result<()>
    where
        W: io::Write,
    {
        serde_json::to_writer_pretty(&mut w, self)?;
        writeln!(w)?;
        w.flush()?;
        Ok(())
    }
}
