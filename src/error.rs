#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    UnknownCode(u16),
    OutOfRange(u16),
    UnknownName(String),
    InvalidClass(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCode(code) => write!(f, "unknown status code: {code}"),
            Self::OutOfRange(code) => write!(f, "status code out of range: {code}"),
            Self::UnknownName(name) => write!(f, "unknown status name: {name:?}"),
            Self::InvalidClass(class) => write!(f, "invalid status class: {class:?}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
