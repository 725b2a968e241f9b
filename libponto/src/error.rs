use crate::command::Keyword;

use thiserror::Error;

/// Malformed time or date token.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("unable to parse time `{0}' (HH:MM, may be negative)")]
    Time(String),
    #[error("unable to parse date `{0}' (YYYY-MM-DD)")]
    Date(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PontoError {
    /// A known command got the wrong number of arguments, or an argument
    /// that does not parse.
    #[error("{keyword}: {reason}")]
    Validation {
        keyword: Keyword,
        reason: String,
        #[source]
        source: Option<FormatError>,
    },

    /// Carries the token as written, before normalization.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0} requires an operating day (use DATA)")]
    State(Keyword),
}

impl PontoError {
    pub(crate) fn arity(keyword: Keyword, found: usize) -> Self {
        let expected = keyword.arity();
        PontoError::Validation {
            keyword,
            reason: format!(
                "expected {} argument{}, got {}",
                expected,
                if expected == 1 { "" } else { "s" },
                found
            ),
            source: None,
        }
    }

    pub(crate) fn format(keyword: Keyword, err: FormatError) -> Self {
        PontoError::Validation {
            keyword,
            reason: err.to_string(),
            source: Some(err),
        }
    }
}
