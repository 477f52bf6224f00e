/*! Translation datasets

A [TranslationDataset] holds the aligned [Record]s of one file pair, along with
the resolved [Fields] that name (and later process) each side.
!*/
use std::path::Path;

use log::debug;

use crate::{
    aligner,
    error::Error,
    fields::{FieldSpec, Fields},
    filtering::Filter,
    record::Record,
};

#[derive(Debug, Clone)]
pub struct TranslationDataset<F> {
    examples: Vec<Record>,
    fields: Fields<F>,
}

impl<F> TranslationDataset<F> {
    /// Build a dataset from `prefix + exts.0` (source) and `prefix + exts.1` (target).
    ///
    /// `~` is expanded in the prefix.
    /// Line pairs with a blank side are dropped (see [crate::aligner]).
    pub fn new(prefix: &Path, exts: (&str, &str), fields: FieldSpec<F>) -> Result<Self, Error> {
        let fields = fields.resolve()?;
        let examples = aligner::align(prefix, exts)?;
        Ok(Self { examples, fields })
    }

    /// Same as [TranslationDataset::new], only keeping records that pass `filter`.
    pub fn with_filter<P>(
        prefix: &Path,
        exts: (&str, &str),
        fields: FieldSpec<F>,
        filter: &P,
    ) -> Result<Self, Error>
    where
        P: for<'r> Filter<&'r Record>,
    {
        let mut dataset = Self::new(prefix, exts, fields)?;
        let before = dataset.examples.len();
        dataset.examples.retain(|record| filter.detect(record));
        debug!(
            "{:?}: filter kept {}/{} records",
            prefix,
            dataset.examples.len(),
            before
        );
        Ok(dataset)
    }

    pub fn from_records(examples: Vec<Record>, fields: Fields<F>) -> Self {
        Self { examples, fields }
    }

    /// Batching key of a record. See [crate::record::interleave_keys].
    pub fn sort_key(record: &Record) -> u64 {
        record.sort_key()
    }

    /// Records ordered by [TranslationDataset::sort_key].
    ///
    /// Records with equal keys keep their file order.
    pub fn sorted(&self) -> Vec<&Record> {
        let mut sorted: Vec<&Record> = self.examples.iter().collect();
        sorted.sort_by_key(|record| Self::sort_key(record));
        sorted
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.examples.iter()
    }

    /// Get a reference to the dataset's examples.
    pub fn examples(&self) -> &[Record] {
        &self.examples
    }

    /// Get a reference to the dataset's fields.
    pub fn fields(&self) -> &Fields<F> {
        &self.fields
    }
}

impl<F> IntoIterator for TranslationDataset<F> {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.into_iter()
    }
}

impl<'a, F> IntoIterator for &'a TranslationDataset<F> {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}
