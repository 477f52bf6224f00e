/*! Line alignment

Reads a source and a target file in lockstep, line by line, and yields
[Record]s for line pairs where both sides are non-empty once trimmed.

- The i-th source line is paired with the i-th target line.
- Iteration stops at the end of the shorter file.
- Pairs where one side is blank are silently skipped, they are not errors.
- `\n`, `\r\n` and a lone `\r` all end a line.
!*/
use std::{
    ffi::OsString,
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::{Component, Path, PathBuf},
};

use log::{debug, info};

use crate::{error::Error, record::Record};

/// Line iterator accepting `\n`, `\r\n` and `\r` as line endings.
///
/// Like [BufRead::lines], line endings are stripped and a final line without ending is yielded.
#[derive(Debug)]
pub struct UniversalLines<R> {
    inner: R,
    // last line ended on `\r`, a `\n` right after it belongs to that ending.
    skip_lf: bool,
}

impl<R: BufRead> UniversalLines<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            skip_lf: false,
        }
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.skip_lf {
            self.skip_lf = false;
            if self.inner.fill_buf()?.first() == Some(&b'\n') {
                self.inner.consume(1);
            }
        }

        let mut line = Vec::new();
        loop {
            let (used, ending) = {
                let buf = match self.inner.fill_buf() {
                    Ok(buf) => buf,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if buf.is_empty() {
                    if line.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
                match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
                    Some(idx) => {
                        line.extend_from_slice(&buf[..idx]);
                        (idx + 1, Some(buf[idx]))
                    }
                    None => {
                        line.extend_from_slice(buf);
                        (buf.len(), None)
                    }
                }
            };
            self.inner.consume(used);
            if let Some(ending) = ending {
                self.skip_lf = ending == b'\r';
                break;
            }
        }

        String::from_utf8(line)
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl<R: BufRead> Iterator for UniversalLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

/// Lockstep reader over two line streams.
#[derive(Debug)]
pub struct PairReader<S, T> {
    src_path: PathBuf,
    trg_path: PathBuf,
    src: UniversalLines<BufReader<S>>,
    trg: UniversalLines<BufReader<T>>,
    dropped: usize,
}

impl PairReader<File, File> {
    /// Open both files. Fails with [Error::FileAccess] if one of them can't be opened.
    pub fn open(src_path: &Path, trg_path: &Path) -> Result<Self, Error> {
        let src = File::open(src_path).map_err(|e| Error::FileAccess(src_path.to_path_buf(), e))?;
        let trg = File::open(trg_path).map_err(|e| Error::FileAccess(trg_path.to_path_buf(), e))?;
        Ok(Self::with_paths(src, trg, src_path, trg_path))
    }
}

impl<S, T> PairReader<S, T>
where
    S: Read,
    T: Read,
{
    pub fn new(src: S, trg: T) -> Self {
        Self::with_paths(src, trg, Path::new(""), Path::new(""))
    }

    fn with_paths(src: S, trg: T, src_path: &Path, trg_path: &Path) -> Self {
        Self {
            src_path: src_path.to_path_buf(),
            trg_path: trg_path.to_path_buf(),
            src: UniversalLines::new(BufReader::new(src)),
            trg: UniversalLines::new(BufReader::new(trg)),
            dropped: 0,
        }
    }

    /// Number of line pairs skipped so far because one side was blank.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl<S, T> Iterator for PairReader<S, T>
where
    S: Read,
    T: Read,
{
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // source is always pulled first, so that a read error on it
            // surfaces even when target is exhausted.
            let src = match self.src.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::FileAccess(self.src_path.clone(), e))),
            };
            let trg = match self.trg.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::FileAccess(self.trg_path.clone(), e))),
            };

            let (src, trg) = (src.trim(), trg.trim());
            if src.is_empty() || trg.is_empty() {
                self.dropped += 1;
                continue;
            }

            return Some(Ok(Record::new(src.to_string(), trg.to_string())));
        }
    }
}

/// Expand a leading `~` into the user's home directory.
///
/// `~user` forms are returned untouched, as are paths when no home directory is known.
pub fn expand_home(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => {
                let rest = components.as_path();
                if rest.as_os_str().is_empty() {
                    home
                } else {
                    home.join(rest)
                }
            }
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// Build `prefix + ext` for both extensions, expanding `~`.
///
/// Extensions are appended verbatim (`train` + `.en` -> `train.en`).
pub fn pair_paths(prefix: &Path, exts: (&str, &str)) -> (PathBuf, PathBuf) {
    let with_ext = |ext: &str| {
        let mut path = OsString::from(prefix.as_os_str());
        path.push(ext);
        expand_home(Path::new(&path))
    };
    (with_ext(exts.0), with_ext(exts.1))
}

/// Align `prefix + exts.0` with `prefix + exts.1`.
///
/// Files are closed before returning, whether alignment succeeded or not.
pub fn align(prefix: &Path, exts: (&str, &str)) -> Result<Vec<Record>, Error> {
    let (src_path, trg_path) = pair_paths(prefix, exts);
    debug!("aligning {:?} with {:?}", src_path, trg_path);

    let mut reader = PairReader::open(&src_path, &trg_path)?;
    let records = reader.by_ref().collect::<Result<Vec<_>, _>>()?;

    debug!(
        "{:?}: dropped {} pairs with a blank side",
        prefix,
        reader.dropped()
    );
    info!("{:?}: {} aligned pairs", prefix, records.len());
    Ok(records)
}
