use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::GenerationError;
use crate::model::MovementRecord;

/// Write movements as CSV with a header row, returning bytes written.
pub fn write_movements_csv(
    path: &Path,
    movements: &[MovementRecord],
) -> Result<u64, GenerationError> {
    let counting = CountingWriter::new(BufWriter::new(File::create(path)?));
    let mut writer = csv::Writer::from_writer(counting);

    for movement in movements {
        writer.serialize(movement)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    written: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.written
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.written = self.written.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
