/*! Corpus references

A [CorpusRef] names where the three split archives of a corpus live, and the
directory they are unpacked into. It is never mutated once built.
!*/
use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CorpusRef {
    train_url: String,
    validation_url: String,
    test_url: String,
    dirname: String,
}

impl CorpusRef {
    pub fn new(train_url: &str, validation_url: &str, test_url: &str, dirname: &str) -> Self {
        Self {
            train_url: train_url.to_string(),
            validation_url: validation_url.to_string(),
            test_url: test_url.to_string(),
            dirname: dirname.to_string(),
        }
    }

    /// Multi30k, the multimodal WMT 2016/2017 task.
    pub fn multi30k() -> Self {
        Self::new(
            "http://www.quest.dcs.shef.ac.uk/wmt16_files_mmt/training.tar.gz",
            "http://www.quest.dcs.shef.ac.uk/wmt16_files_mmt/validation.tar.gz",
            "https://staff.fnwi.uva.nl/d.elliott/wmt16/mmt16_task1_test.tgz",
            "multi30k",
        )
    }

    /// Load a corpus reference from a json file.
    ///
    /// ```json
    /// {
    ///     "train_url": "https://example.com/train.tar.gz",
    ///     "validation_url": "https://example.com/val.tar.gz",
    ///     "test_url": "https://example.com/test.tgz",
    ///     "dirname": "mycorpus"
    /// }
    /// ```
    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let f = File::open(path).map_err(|e| Error::FileAccess(path.to_path_buf(), e))?;
        Ok(serde_json::from_reader(BufReader::new(f))?)
    }

    /// Archive urls, in (train, validation, test) order.
    pub fn urls(&self) -> Result<[Url; 3], Error> {
        Ok([
            Url::parse(&self.train_url)?,
            Url::parse(&self.validation_url)?,
            Url::parse(&self.test_url)?,
        ])
    }

    /// Get a reference to the corpus' directory name.
    pub fn dirname(&self) -> &str {
        &self.dirname
    }
}

/// Local file name of an archive: the last segment of its url path.
///
/// Query and fragment are not part of the name: `https://host/get/data.tgz?token=x`
/// is stored as `data.tgz`. Two urls of a corpus differing only by their query
/// therefore share the same local archive.
pub fn archive_name(url: &Url) -> Result<&str, Error> {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| Error::Custom(format!("no archive name in url {}", url)))
}
