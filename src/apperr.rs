use std::num::ParseIntError;
use std::path::PathBuf;
use std::{error, fmt, io, result};

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Reading the input or writing the table failed.
    Io { path: Option<PathBuf>, err: io::Error },
    /// A code point field wasn't valid hexadecimal.
    Parse { line: usize, field: String, err: ParseIntError },
}

impl Error {
    /// Attaches the path of the file that was being read, unless one is already known.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Error::Io { path: None, err } => Error::Io { path: Some(path.into()), err },
            e => e,
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    pub fn message(&self) -> String {
        match self {
            Error::Io { err, .. } if err.kind() == io::ErrorKind::NotFound => {
                "File not found".to_string()
            }
            Error::Io { err, .. } => err.to_string(),
            Error::Parse { field, err, .. } => format!("invalid code point {field:?}: {err}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io { path: Some(path), .. } => {
                write!(f, "{}: {}", path.display(), self.message())
            }
            Error::Io { path: None, .. } => f.write_str(&self.message()),
            Error::Parse { line, .. } => write!(f, "line {}: {}", line, self.message()),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io { err, .. } => Some(err),
            Error::Parse { err, .. } => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io { path: None, err }
    }
}
