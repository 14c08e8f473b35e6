use core::ops::Range;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Every valid three-digit status code, registered or not.
pub const CODE_RANGE: Range<u16> = 100..600;

/// Response class, given by the first digit of a status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    Informational,
    Successful,
    Redirection,
    ClientError,
    ServerError,
}

impl StatusClass {
    pub const ALL: [StatusClass; 5] = [
        Self::Informational,
        Self::Successful,
        Self::Redirection,
        Self::ClientError,
        Self::ServerError,
    ];

    /// Classifies any code in 100..=599, including ones absent from the
    /// registered table.
    pub fn from_u16(code: u16) -> Option<Self> {
        Some(match code {
            100..200 => Self::Informational,
            200..300 => Self::Successful,
            300..400 => Self::Redirection,
            400..500 => Self::ClientError,
            500..600 => Self::ServerError,
            _ => return None,
        })
    }

    pub fn range(self) -> Range<u16> {
        let start = 100 * (self as u16 + 1);
        start..start + 100
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Informational => "informational",
            Self::Successful => "successful",
            Self::Redirection => "redirection",
            Self::ClientError => "client_error",
            Self::ServerError => "server_error",
        }
    }

    /// Spellings accepted by `from_str`, compared ASCII case-insensitively.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Informational => &["1xx", "informational"],
            Self::Successful => &["2xx", "successful"],
            Self::Redirection => &["3xx", "redirection"],
            Self::ClientError => &["4xx", "client_error", "client-error"],
            Self::ServerError => &["5xx", "server_error", "server-error"],
        }
    }

    pub fn contains(self, code: u16) -> bool {
        self.range().contains(&code)
    }
}

impl TryFrom<u16> for StatusClass {
    type Error = Error;
    fn try_from(code: u16) -> Result<Self> {
        Self::from_u16(code).ok_or(Error::OutOfRange(code))
    }
}

impl FromStr for StatusClass {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|class| class.aliases().iter().any(|a| a.eq_ignore_ascii_case(s)))
            .ok_or_else(|| Error::InvalidClass(s.into()))
    }
}

impl std::fmt::Display for StatusClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start = self.range().start;
        write!(f, "{}xx {}", start / 100, self.name())
    }
}
