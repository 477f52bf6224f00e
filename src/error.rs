//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// Generic io error (directory creation, writing output).
    Io(std::io::Error),
    /// A local text file could not be opened or read.
    FileAccess(PathBuf, std::io::Error),
    /// Remote archive retrieval failed.
    Transport(reqwest::Error),
    /// Connection broke while reading the body of the given url.
    TransportIo(url::Url, std::io::Error),
    /// Archive at the given path could not be read or unpacked.
    Archive(PathBuf, std::io::Error),
    Url(url::ParseError),
    Serde(serde_json::Error),
    FieldSpec(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::FileAccess(path, e) => write!(f, "could not read {:?}: {}", path, e),
            Error::Transport(e) => write!(f, "download failed: {}", e),
            Error::TransportIo(url, e) => write!(f, "download of {} interrupted: {}", url, e),
            Error::Archive(path, e) => write!(f, "could not unpack archive {:?}: {}", path, e),
            Error::Url(e) => write!(f, "invalid url: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::FieldSpec(s) => write!(f, "invalid field specification: {}", s),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e)
            | Error::FileAccess(_, e)
            | Error::Archive(_, e)
            | Error::TransportIo(_, e) => Some(e),
            Error::Transport(e) => Some(e),
            Error::Url(e) => Some(e),
            Error::Serde(e) => Some(e),
            Error::FieldSpec(_) | Error::Custom(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Transport(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Url(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
