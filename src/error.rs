use std::error::Error;
use std::fmt;

/// Crate error type for geography WKT generation.
#[derive(Debug)]
pub enum WktError {
    /// The `fmt::Write` sink refused a write.
    Fmt(fmt::Error),
    /// The `io::Write` sink failed.
    Io(std::io::Error),
    /// Wraps errors returned by `rusqlite`.
    Sql(rusqlite::Error),
    /// Wraps errors returned by the `wkb` crate.
    Wkb(wkb::error::WkbError),
    /// Output dimension must be 2, 3 or 4.
    InvalidDimension(u8),
    /// Indent width must be positive.
    InvalidIndentWidth(usize),
    /// Invalid GeoPackage geometry flags byte.
    InvalidGpkgGeometryFlags(u8),
    /// GeoPackage geometry blob is too short for its header and envelope.
    InvalidGpkgGeometryLength { len: usize, minimum: usize },
}

impl fmt::Display for WktError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fmt(err) => write!(f, "failed to write wkt: {err}"),
            Self::Io(err) => write!(f, "failed to write wkt: {err}"),
            Self::Sql(err) => write!(f, "{err}"),
            Self::Wkb(err) => write!(f, "{err}"),
            Self::InvalidDimension(dimension) => {
                write!(f, "invalid output dimension {dimension}: expected 2, 3 or 4")
            }
            Self::InvalidIndentWidth(width) => {
                write!(f, "invalid indent width {width}: must be positive")
            }
            Self::InvalidGpkgGeometryFlags(flags) => {
                write!(f, "invalid gpkg geometry flags: {flags:#04x}")
            }
            Self::InvalidGpkgGeometryLength { len, minimum } => {
                write!(
                    f,
                    "invalid gpkg geometry length: got {len} bytes, expected at least {minimum}"
                )
            }
        }
    }
}

impl Error for WktError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fmt(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Sql(err) => Some(err),
            Self::Wkb(err) => Some(err),
            _ => None,
        }
    }
}

impl From<fmt::Error> for WktError {
    fn from(err: fmt::Error) -> Self {
        Self::Fmt(err)
    }
}

impl From<std::io::Error> for WktError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<rusqlite::Error> for WktError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Sql(err)
    }
}

impl From<wkb::error::WkbError> for WktError {
    fn from(err: wkb::error::WkbError) -> Self {
        Self::Wkb(err)
    }
}

pub type Result<T> = std::result::Result<T, WktError>;
