use crate::gametime::GameTime;
use crate::log_data::{LogRepresentable, LogWriter};

use std::io::Write;

/// Streams drive records as `object\taction\tturn\tstatus` lines.
pub struct BufferLogWriter<W> {
    buf: W,
    lines_written: usize,
}

impl<W, LRO, LRA, LRS> LogWriter<LRO, LRA, LRS> for BufferLogWriter<W>
where
    W: Write,
    LRO: LogRepresentable,
    LRA: LogRepresentable,
    LRS: LogRepresentable,
{
    fn add_log_data(&mut self, object: LRO, action: LRA, turn: GameTime, status: LRS) {
        // a broken log must not stop the drive
        if let Err(e) = writeln!(
            self.buf,
            "{}\t{}\t{}\t{}",
            object.to_log_repr(),
            action.to_log_repr(),
            turn,
            status.to_log_repr()
        ) {
            tracing::error!("error writing drive log: {}", e);
            return;
        };
        self.lines_written += 1;
        if let Err(e) = self.buf.flush() { // flush every line!
            tracing::error!("error flushing drive log: {}", e);
        };
    }
}

impl<W> BufferLogWriter<W>
where
    W: Write,
{
    pub fn new(buffer: W) -> BufferLogWriter<W> {
        BufferLogWriter {
            buf: buffer,
            lines_written: 0,
        }
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn into_inner(self) -> W {
        self.buf
    }
}
