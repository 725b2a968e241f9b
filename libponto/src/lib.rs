//! Ponto - interpreter for Pontofile time-tracking ledgers
//! ---
//!
//! A Pontofile is a plain text list of dated clock-in/clock-out commands:
//!
//! ```text
//! BANCO -00:45
//! DATA 2024-01-02
//! PONTO 08:58 12:01
//! PONTO 13:02 18:10
//! ```
//!
//! Each day is compared against an expected full day (8h of work plus 1h of
//! lunch). Whatever is over or under, beyond a 10 minute tolerance, goes to
//! the hour bank.

extern crate pest;
#[macro_use]
extern crate pest_derive;

/// Command keywords and line parsing.
pub mod command;

pub mod day;
pub mod error;

/// Driver feeding lines into a [`Ledger`][ledger::Ledger].
pub mod interpreter;

/// The accumulation state machine.
pub mod ledger;

/// Token grammar for times and dates.
pub mod parser;

pub mod report;
pub mod time;

pub use command::{Command, Keyword};
pub use day::Day;
pub use error::{FormatError, PontoError};
pub use interpreter::{run, run_file};
pub use ledger::{Ledger, Schedule, Summary};
pub use report::{Entry, Printer};
pub use time::Minutes;
