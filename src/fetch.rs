/*! Corpus retrieval

Makes sure the archives of a [CorpusRef] are present under a local root, then unpacks them.

Layout produced under `root`:

```text
root/<dirname>/<archive name>   (one per split url)
root/<dirname>/<archive members>
```

- Archives already present (by name) are never downloaded again. Their content is not checked.
- Archives are always unpacked, even when the download was skipped.
- Nothing is locked: concurrent [CorpusFetcher::ensure] calls on the same root are not safe.
!*/
use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use flate2::read::MultiGzDecoder;
use log::{debug, info, warn};
use url::Url;

use crate::{
    corpus::{archive_name, CorpusRef},
    error::Error,
};

const CHUNK_SIZE: usize = 64 * 1024;

/// Source of remote archives.
pub trait Transport {
    /// Open `url` for reading.
    ///
    /// Failures to reach the remote must happen here, before anything is written locally.
    fn open(&self, url: &Url) -> Result<Box<dyn Read>, Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn open(&self, url: &Url) -> Result<Box<dyn Read>, Error> {
        (**self).open(url)
    }
}

/// Blocking HTTP(S) transport.
///
/// No timeout is set: a stalled server blocks the caller.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder().timeout(None).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn open(&self, url: &Url) -> Result<Box<dyn Read>, Error> {
        debug!("requesting {}", url);
        let response = self.client.get(url.clone()).send()?.error_for_status()?;
        Ok(Box::new(response))
    }
}

/// Holds a corpus reference and the transport that will retrieve its archives.
pub struct CorpusFetcher<T> {
    corpus: CorpusRef,
    transport: T,
}

impl CorpusFetcher<HttpTransport> {
    pub fn http(corpus: CorpusRef) -> Result<Self, Error> {
        Ok(Self::new(corpus, HttpTransport::new()?))
    }
}

impl<T: Transport> CorpusFetcher<T> {
    pub fn new(corpus: CorpusRef, transport: T) -> Self {
        Self { corpus, transport }
    }

    /// Ensure that the corpus is present under `root`, returning `root/<dirname>/`
    /// (with a trailing separator).
    ///
    /// Errors are not caught: a failed download or a broken archive aborts the call,
    /// possibly leaving a partial archive behind.
    pub fn ensure(&self, root: &Path) -> Result<PathBuf, Error> {
        let path = root.join(self.corpus.dirname());
        if !path.is_dir() {
            info!("creating corpus directory {:?}", path);
        }
        fs::create_dir_all(&path)?;

        for url in self.corpus.urls()?.iter() {
            let archive = path.join(archive_name(url)?);
            if archive.is_file() {
                debug!("{:?} already present, skipping download", archive);
            } else {
                self.download(url, &archive)?;
            }
            extract(&archive, &path)?;
        }

        Ok(path.join(""))
    }

    /// download `url` into `dst`.
    ///
    /// Read failures on the body are [Error::TransportIo], write failures are [Error::Io].
    /// Bytes received before a read failure stay in `dst`.
    fn download(&self, url: &Url, dst: &Path) -> Result<u64, Error> {
        info!("downloading {}", url);
        let mut body = self.transport.open(url)?;

        let mut out = BufWriter::new(File::create(dst)?);
        let mut buf = vec![0; CHUNK_SIZE];
        let mut written = 0u64;
        loop {
            let nb_read = match body.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    out.flush()?;
                    warn!("download of {} interrupted after {} bytes", url, written);
                    return Err(Error::TransportIo(url.clone(), e));
                }
            };
            out.write_all(&buf[..nb_read])?;
            written += nb_read as u64;
        }
        out.flush()?;

        info!("downloaded {} bytes into {:?}", written, dst);
        Ok(written)
    }
}

/// Unpack every member of the gzipped tar `archive` into `dst`.
///
/// Members with paths escaping `dst` are refused.
pub fn extract(archive: &Path, dst: &Path) -> Result<(), Error> {
    debug!("extracting {:?} into {:?}", archive, dst);
    let f = File::open(archive).map_err(|e| Error::Archive(archive.to_path_buf(), e))?;
    let mut tar = tar::Archive::new(MultiGzDecoder::new(BufReader::new(f)));
    tar.unpack(dst)
        .map_err(|e| Error::Archive(archive.to_path_buf(), e))
}
