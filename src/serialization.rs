use std::path::Path;
use std::io::{Read, Write, BufReader, BufWriter};
use std::fs;

use crate::error::Result;

pub trait FromFile
where
    Self: Sized,
{
    fn load_from_file(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        Self::load_from_reader(BufReader::new(file))
    }

    fn load_from_reader<R>(r: R) -> Result<Self> where R: Read;
}

pub trait ToFile {
    fn save_to_file(&self, path: &Path) -> Result<()> {
        let file = fs::File::create(path)?;
        self.save_to_writer(BufWriter::new(file))
    }

    fn save_to_writer<W>(&self, w: W) -> Result<()> where W: Write;
}
