//! Named constants for the registered HTTP status codes.
//!
//! ```
//! use httpstatus::{StatusCode, codes};
//!
//! assert_eq!(StatusCode::NotFound as u16, codes::NOT_FOUND);
//! assert_eq!("404".parse::<StatusCode>(), Ok(StatusCode::NotFound));
//! ```

use log::debug;

pub mod error;
pub mod status;

#[cfg(test)]
mod test;

pub use error::{Error, Result};
pub use status::{StatusClass, StatusCode, codes};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Entry {
    pub code: u16,
    pub name: &'static str,
    pub reason: &'static str,
    pub class: StatusClass,
}

impl From<StatusCode> for Entry {
    fn from(status: StatusCode) -> Self {
        Self {
            code: status.as_u16(),
            name: status.name(),
            reason: status.reason(),
            class: status.class(),
        }
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:<30} {}", self.code, self.name, self.reason)
    }
}

/// The table as entries, restricted to one class when given.
pub fn list(class: Option<StatusClass>) -> Vec<Entry> {
    StatusCode::ALL
        .iter()
        .filter(|status| class.is_none_or(|class| status.class() == class))
        .map(|&status| Entry::from(status))
        .collect()
}

/// Resolves every query (code or symbolic name), in order.
/// Fails with every query that did not resolve.
pub fn lookup<S: AsRef<str>>(queries: &[S]) -> std::result::Result<Vec<Entry>, Vec<Error>> {
    let mut found = Vec::with_capacity(queries.len());
    let mut failed = Vec::new();

    for q in queries {
        let q = q.as_ref();
        match q.parse::<StatusCode>() {
            Ok(status) => {
                debug!("{q:?} resolved to {status}");
                found.push(Entry::from(status));
            }
            Err(e) => failed.push(e),
        }
    }

    if failed.is_empty() {
        Ok(found)
    } else {
        Err(failed)
    }
}
