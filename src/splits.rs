/*! Dataset splits

Resolves train/validation/test prefixes against a corpus directory and builds a
[TranslationDataset] for each requested split.

Splits whose prefix is `None` are skipped. Results keep the (train, validation, test) order.
If any requested split fails, no dataset is returned.
!*/
use std::{fmt, path::Path};

use log::info;

use crate::{
    dataset::TranslationDataset,
    error::Error,
    fetch::{CorpusFetcher, Transport},
    fields::FieldSpec,
    filtering::Filter,
    record::Record,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Validation,
    Test,
}

impl Split {
    pub const ALL: [Split; 3] = [Split::Train, Split::Validation, Split::Test];

    pub fn name(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Validation => "validation",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// File prefixes of each split, relative to the corpus directory.
///
/// Defaults to `train`, `val` and `test`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPrefixes {
    pub train: Option<String>,
    pub validation: Option<String>,
    pub test: Option<String>,
}

impl Default for SplitPrefixes {
    fn default() -> Self {
        Self {
            train: Some("train".to_string()),
            validation: Some("val".to_string()),
            test: Some("test".to_string()),
        }
    }
}

impl SplitPrefixes {
    pub fn get(&self, split: Split) -> Option<&str> {
        match split {
            Split::Train => self.train.as_deref(),
            Split::Validation => self.validation.as_deref(),
            Split::Test => self.test.as_deref(),
        }
    }

    /// requested splits and their prefixes, in (train, validation, test) order.
    pub fn requested(&self) -> impl Iterator<Item = (Split, &str)> + '_ {
        Split::ALL
            .into_iter()
            .filter_map(move |split| self.get(split).map(|prefix| (split, prefix)))
    }
}

/// Build datasets for requested splits located under `base`.
pub fn resolve_splits<F: Clone>(
    base: &Path,
    prefixes: &SplitPrefixes,
    exts: (&str, &str),
    fields: FieldSpec<F>,
) -> Result<Vec<(Split, TranslationDataset<F>)>, Error> {
    resolve_splits_filtered(base, prefixes, exts, fields, &|_: &Record| true)
}

/// Same as [resolve_splits], only keeping records that pass `filter` in each split.
pub fn resolve_splits_filtered<F, P>(
    base: &Path,
    prefixes: &SplitPrefixes,
    exts: (&str, &str),
    fields: FieldSpec<F>,
    filter: &P,
) -> Result<Vec<(Split, TranslationDataset<F>)>, Error>
where
    F: Clone,
    P: for<'r> Filter<&'r Record>,
{
    prefixes
        .requested()
        .map(|(split, prefix)| {
            let dataset =
                TranslationDataset::with_filter(&base.join(prefix), exts, fields.clone(), filter)?;
            info!("[{}] {} records", split, dataset.len());
            Ok((split, dataset))
        })
        .collect()
}

/// Ensure the corpus is present under `root`, then build its requested splits.
pub fn splits<T, F>(
    fetcher: &CorpusFetcher<T>,
    root: &Path,
    prefixes: &SplitPrefixes,
    exts: (&str, &str),
    fields: FieldSpec<F>,
) -> Result<Vec<(Split, TranslationDataset<F>)>, Error>
where
    T: Transport,
    F: Clone,
{
    let base = fetcher.ensure(root)?;
    resolve_splits(&base, prefixes, exts, fields)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn toy_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (prefix, src, trg) in [
            ("train", "a\nb\n", "x\ny\n"),
            ("val", "c\n", "z\n"),
            ("test", "d\n\ne\n", "w\nv\nu\n"),
        ] {
            fs::write(dir.path().join(format!("{}.en", prefix)), src).unwrap();
            fs::write(dir.path().join(format!("{}.de", prefix)), trg).unwrap();
        }
        dir
    }

    #[test]
    fn default_prefixes() {
        let dir = toy_dir();
        let res = resolve_splits(
            dir.path(),
            &SplitPrefixes::default(),
            (".en", ".de"),
            FieldSpec::names_only(),
        )
        .unwrap();

        let summary: Vec<(Split, usize)> = res.iter().map(|(s, d)| (*s, d.len())).collect();
        assert_eq!(
            summary,
            vec![(Split::Train, 2), (Split::Validation, 1), (Split::Test, 2)]
        );
    }

    #[test]
    fn only_validation() {
        let dir = toy_dir();
        let prefixes = SplitPrefixes {
            train: None,
            validation: Some("val".to_string()),
            test: None,
        };
        let res =
            resolve_splits(dir.path(), &prefixes, (".en", ".de"), FieldSpec::names_only()).unwrap();

        assert_eq!(res.len(), 1);
        let (split, dataset) = &res[0];
        assert_eq!(*split, Split::Validation);
        assert_eq!(dataset.examples()[0].source(), "c");
    }

    #[test]
    fn nothing_requested() {
        let dir = toy_dir();
        let prefixes = SplitPrefixes {
            train: None,
            validation: None,
            test: None,
        };
        let res =
            resolve_splits(dir.path(), &prefixes, (".en", ".de"), FieldSpec::names_only()).unwrap();
        assert!(res.is_empty());
    }

    #[test]
    fn one_missing_split_fails_all() {
        let dir = toy_dir();
        fs::remove_file(dir.path().join("test.de")).unwrap();
        let res = resolve_splits(
            dir.path(),
            &SplitPrefixes::default(),
            (".en", ".de"),
            FieldSpec::names_only(),
        );
        assert!(matches!(res, Err(Error::FileAccess(_, _))));
    }

    #[test]
    fn requested_order() {
        let prefixes = SplitPrefixes {
            train: Some("tr".to_string()),
            validation: None,
            test: Some("te".to_string()),
        };
        let req: Vec<_> = prefixes.requested().collect();
        assert_eq!(req, vec![(Split::Train, "tr"), (Split::Test, "te")]);
    }
}
