/*! JSON lines output

Writes records as one JSON object per line, keyed by field name:

```text
{"src":"A man in an orange hat.","trg":"Ein Mann mit einem orangefarbenen Hut."}
```

Files whose name ends with `.gz` are gzip compressed.
!*/
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use flate2::{write::GzEncoder, Compression};
use log::info;
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{dataset::TranslationDataset, error::Error, fields::Fields, record::Record};

/// A record along with the names of its sides.
struct Tagged<'a, F> {
    fields: &'a Fields<F>,
    record: &'a Record,
}

impl<'a, F> Serialize for Tagged<'a, F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        let sides = [self.record.source(), self.record.target()];
        for ((name, _), text) in self.fields.iter().zip(sides) {
            map.serialize_entry(name, text)?;
        }
        map.end()
    }
}

pub struct JsonlWriter<W: Write> {
    out: W,
    nb_records: usize,
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, nb_records: 0 }
    }

    pub fn write_record<F>(&mut self, fields: &Fields<F>, record: &Record) -> Result<(), Error> {
        serde_json::to_writer(&mut self.out, &Tagged { fields, record })?;
        self.out.write_all(b"\n")?;
        self.nb_records += 1;
        Ok(())
    }

    /// Write every record of `dataset`, in dataset order.
    pub fn write_dataset<F>(&mut self, dataset: &TranslationDataset<F>) -> Result<(), Error> {
        for record in dataset {
            self.write_record(dataset.fields(), record)?;
        }
        Ok(())
    }

    /// Get the number of records written so far.
    pub fn nb_records(&self) -> usize {
        self.nb_records
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// File destination, possibly compressed.
pub enum FileSink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl FileSink {
    pub fn create(path: &Path) -> Result<Self, Error> {
        let out = BufWriter::new(File::create(path)?);
        let gzipped = path.extension().map_or(false, |ext| ext == "gz");
        Ok(if gzipped {
            FileSink::Gzip(GzEncoder::new(out, Compression::default()))
        } else {
            FileSink::Plain(out)
        })
    }

    /// Flush, writing the gzip trailer if needed.
    pub fn finish(self) -> io::Result<()> {
        match self {
            FileSink::Plain(mut w) => w.flush(),
            FileSink::Gzip(enc) => enc.finish()?.flush(),
        }
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileSink::Plain(w) => w.write(buf),
            FileSink::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileSink::Plain(w) => w.flush(),
            FileSink::Gzip(w) => w.flush(),
        }
    }
}

/// Write `dataset` into `dst` as json lines.
pub fn write_jsonl<F>(dataset: &TranslationDataset<F>, dst: &Path) -> Result<(), Error> {
    let mut writer = JsonlWriter::new(FileSink::create(dst)?);
    writer.write_dataset(dataset)?;
    info!("wrote {} records to {:?}", writer.nb_records(), dst);
    writer.into_inner().finish()?;
    Ok(())
}
