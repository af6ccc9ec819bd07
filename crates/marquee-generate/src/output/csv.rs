use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use marquee_core::Category;

/// Streaming CSV sink: header of category names, then one record per row.
pub struct CsvRowWriter {
    writer: csv::Writer<ByteCounter<BufWriter<File>>>,
    rows: u64,
}

impl CsvRowWriter {
    pub fn create(path: &Path, categories: &[Category]) -> Result<Self, csv::Error> {
        let file = File::create(path).map_err(csv::Error::from)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(ByteCounter::new(BufWriter::new(file)));
        writer.write_record(categories.iter().map(|category| category.as_str()))?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn write_row(&mut self, row: &[&str]) -> Result<(), csv::Error> {
        self.writer.write_record(row)?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Flush everything and return the total bytes written, header included.
    pub fn finish(mut self) -> Result<u64, csv::Error> {
        self.writer.flush()?;
        let counter = self.writer.into_inner().map_err(|err| err.into_error())?;
        Ok(counter.total)
    }
}

struct ByteCounter<W> {
    inner: W,
    total: u64,
}

impl<W> ByteCounter<W> {
    fn new(inner: W) -> Self {
        Self { inner, total: 0 }
    }
}

impl<W: Write> Write for ByteCounter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.total += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
