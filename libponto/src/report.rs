use crate::{day::Day, ledger::Summary, time::Minutes};

use colored::Colorize;

use std::fmt;
use std::io::{self, Write};

const NO_SPAN: &str = "------------------------";

/// One line of the running report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    DayOpened(Day),
    Punch {
        clock_in: Minutes,
        clock_out: Minutes,
        worked: Minutes,
    },
    Estimate {
        clock_in: Minutes,
        expected_clock_out: Minutes,
        remaining: Minutes,
    },
    DayOff,
    BankCheckpoint {
        day: Day,
        bank: Minutes,
    },
    DayClosed {
        /// First clock-in and the clock-out it would take to work `worked`
        /// in one go. `None` when the day had no clock-in.
        span: Option<(Minutes, Minutes)>,
        worked: Minutes,
        bank_delta: Minutes,
        bank: Minutes,
    },
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::DayOpened(day) => write!(f, "Dia {}  |  {}  |  ", day, NO_SPAN),
            Entry::Punch {
                clock_in,
                clock_out,
                worked,
            } => write!(
                f,
                "         Ponto  |  {} -> {} (T {})  |  ",
                clock_in.unsigned(),
                clock_out.unsigned(),
                worked.unsigned()
            ),
            Entry::Estimate {
                clock_in,
                expected_clock_out,
                remaining,
            } => {
                let projection = format!(
                    "{} (T {})",
                    expected_clock_out.unsigned(),
                    remaining.unsigned()
                );
                write!(
                    f,
                    "    Estimativa  |  {} -> {}  |  ",
                    clock_in.unsigned(),
                    projection.italic().bright_black()
                )
            }
            Entry::DayOff => write!(f, "                |  Dia off                   |  "),
            Entry::BankCheckpoint { day, bank } => {
                let total = bank.to_string();
                let total = if bank.is_zero() {
                    total.green()
                } else {
                    total.red()
                };
                write!(f, "Dia {}  |  ----- Zerar Banco! -----  |  Bh Tot. {}", day, total)
            }
            Entry::DayClosed {
                span: Some((clock_in, clock_out)),
                worked,
                bank_delta,
                bank,
            } => {
                let delta = if bank_delta.is_zero() {
                    " ".repeat(12)
                } else {
                    format!("BhΔ {}  ", bank_delta)
                };
                write!(
                    f,
                    "   {}  |  {} -> {} (T {})  |  {}Bh Tot. {}",
                    "Ponto Final".underline(),
                    clock_in.unsigned(),
                    clock_out.unsigned(),
                    worked.unsigned(),
                    delta,
                    bank
                )
            }
            Entry::DayClosed {
                span: None,
                bank_delta,
                bank,
                ..
            } => {
                let delta = if bank_delta.is_zero() {
                    String::new()
                } else {
                    format!("BhΔ {}", bank_delta)
                };
                write!(
                    f,
                    "   {}  |  {}  |  {}  Bh Tot. {}",
                    "Ponto Final".underline(),
                    NO_SPAN,
                    delta,
                    bank
                )
            }
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Tempo total no escritório :  {}",
            self.time_in_office.unsigned()
        )?;
        writeln!(f, "Banco de Horas .......... : {}", self.bank)?;
        write!(f, "Dias off ................ :  {:>5}", self.days_off)
    }
}

/// Writes the report to any sink, stdout for the binary and a buffer in tests.
pub struct Printer<W: Write> {
    out: W,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Printer { out }
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Pontofile")?;
        writeln!(self.out, "ponto {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.out)
    }

    pub fn entry(&mut self, entry: &Entry) -> io::Result<()> {
        writeln!(self.out, "{}", entry)?;
        if let Entry::DayClosed { .. } = entry {
            writeln!(self.out)?;
        }
        Ok(())
    }

    pub fn summary(&mut self, summary: &Summary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", summary)?;
        writeln!(self.out)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
