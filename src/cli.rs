//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "parcorpus", about = "parallel corpus construction tool.")]
/// Holds every command that is callable by the `parcorpus` command.
pub enum Parcorpus {
    #[structopt(about = "Download and unpack a corpus")]
    Fetch(Fetch),
    #[structopt(about = "Align a pair of files")]
    Align(Align),
    #[structopt(about = "Fetch a corpus and align its splits")]
    Splits(Splits),
}

#[derive(Debug, StructOpt)]
/// Fetch command and parameters.
/// ```sh
/// parcorpus-fetch 0.1.0
/// Download and unpack a corpus
///
/// USAGE:
///     parcorpus fetch [OPTIONS] <root>
///
/// OPTIONS:
///     -c, --corpus <corpus>    json corpus reference. Default is Multi30k.
///
/// ARGS:
///     <root>    directory under which the corpus directory is created
/// ```
pub struct Fetch {
    #[structopt(
        parse(from_os_str),
        help = "directory under which the corpus directory is created"
    )]
    pub root: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "c",
        long = "corpus",
        help = "json corpus reference. Default is Multi30k."
    )]
    pub corpus: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Align command and parameters.
///
/// ```sh
/// parcorpus align data/train .en .de -o train.jsonl.gz
/// ```
pub struct Align {
    #[structopt(parse(from_os_str), help = "common prefix of both files")]
    pub prefix: PathBuf,
    #[structopt(help = "source extension (e.g. .en)")]
    pub src_ext: String,
    #[structopt(help = "target extension (e.g. .de)")]
    pub trg_ext: String,
    #[structopt(
        parse(from_os_str),
        short = "o",
        long = "output",
        help = "output file (.jsonl or .jsonl.gz). Default is stdout."
    )]
    pub output: Option<PathBuf>,
    #[structopt(
        long = "names",
        number_of_values = 2,
        help = "field names of source and target. Default is src trg."
    )]
    pub names: Option<Vec<String>>,
    #[structopt(long = "max-len", help = "drop pairs with more tokens on either side")]
    pub max_len: Option<usize>,
}

#[derive(Debug, StructOpt)]
/// Splits command and parameters.
///
/// Writes `<dst>/train.jsonl`, `<dst>/validation.jsonl` and `<dst>/test.jsonl`
/// for each split that is not skipped.
pub struct Splits {
    #[structopt(
        parse(from_os_str),
        help = "directory under which the corpus directory is created"
    )]
    pub root: PathBuf,
    #[structopt(help = "source extension (e.g. .en)")]
    pub src_ext: String,
    #[structopt(help = "target extension (e.g. .de)")]
    pub trg_ext: String,
    #[structopt(parse(from_os_str), help = "destination of split files")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "c",
        long = "corpus",
        help = "json corpus reference. Default is Multi30k."
    )]
    pub corpus: Option<PathBuf>,
    #[structopt(long = "train", default_value = "train", help = "train prefix")]
    pub train: String,
    #[structopt(long = "val", default_value = "val", help = "validation prefix")]
    pub val: String,
    #[structopt(long = "test", default_value = "test", help = "test prefix")]
    pub test: String,
    #[structopt(long = "skip-train")]
    pub skip_train: bool,
    #[structopt(long = "skip-val")]
    pub skip_val: bool,
    #[structopt(long = "skip-test")]
    pub skip_test: bool,
    #[structopt(
        long = "names",
        number_of_values = 2,
        help = "field names of source and target. Default is src trg."
    )]
    pub names: Option<Vec<String>>,
    #[structopt(short = "z", long = "gzip", help = "gzip output files")]
    pub gzip: bool,
}
