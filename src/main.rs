//! # Parcorpus
//!
//! Builds aligned (source, target) examples out of parallel text files,
//! fetching benchmark corpora (Multi30k by default) when needed.
//!
//! ## Getting started
//!
//! ```sh
//! parcorpus 0.1.0
//! parallel corpus construction tool.
//!
//! USAGE:
//!     parcorpus <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     align     Align a pair of files
//!     fetch     Download and unpack a corpus
//!     help      Prints this message or the help of the given subcommand(s)
//!     splits    Fetch a corpus and align its splits
//! ```
//!
use std::io::{stdout, Write};
use std::path::{Path, PathBuf};

use parcorpus::{
    corpus::CorpusRef,
    dataset::TranslationDataset,
    error::Error,
    fetch::CorpusFetcher,
    fields::FieldSpec,
    filtering::Length,
    splits::{splits, SplitPrefixes},
    writer::{write_jsonl, JsonlWriter},
};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

/// corpus from a json file, or Multi30k.
fn corpus_ref(path: Option<&Path>) -> Result<CorpusRef, Error> {
    match path {
        Some(path) => CorpusRef::from_json_file(path),
        None => Ok(CorpusRef::multi30k()),
    }
}

fn field_spec(names: Option<Vec<String>>) -> FieldSpec<()> {
    match names {
        Some(names) => FieldSpec::Named(names.into_iter().map(|name| (name, ())).collect()),
        None => FieldSpec::names_only(),
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Parcorpus::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Parcorpus::Fetch(f) => {
            let fetcher = CorpusFetcher::http(corpus_ref(f.corpus.as_deref())?)?;
            let base = fetcher.ensure(&f.root)?;
            println!("{}", base.display());
        }

        cli::Parcorpus::Align(a) => {
            let exts = (a.src_ext.as_str(), a.trg_ext.as_str());
            let spec = field_spec(a.names);
            let dataset = match a.max_len {
                Some(max_len) => TranslationDataset::with_filter(
                    &a.prefix,
                    exts,
                    spec,
                    &Length::with_max_size(max_len),
                )?,
                None => TranslationDataset::new(&a.prefix, exts, spec)?,
            };

            match a.output {
                Some(dst) => write_jsonl(&dataset, &dst)?,
                None => {
                    let mut w = JsonlWriter::new(stdout().lock());
                    w.write_dataset(&dataset)?;
                    w.into_inner().flush()?;
                }
            }
        }

        cli::Parcorpus::Splits(s) => {
            let fetcher = CorpusFetcher::http(corpus_ref(s.corpus.as_deref())?)?;
            let prefixes = SplitPrefixes {
                train: (!s.skip_train).then_some(s.train),
                validation: (!s.skip_val).then_some(s.val),
                test: (!s.skip_test).then_some(s.test),
            };
            let exts = (s.src_ext.as_str(), s.trg_ext.as_str());

            let datasets = splits(&fetcher, &s.root, &prefixes, exts, field_spec(s.names))?;

            std::fs::create_dir_all(&s.dst)?;
            let suffix = if s.gzip { "jsonl.gz" } else { "jsonl" };
            for (split, dataset) in datasets {
                let dst: PathBuf = s.dst.join(format!("{}.{}", split, suffix));
                write_jsonl(&dataset, &dst)?;
            }
        }
    };
    Ok(())
}
