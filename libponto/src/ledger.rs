use crate::{
    command::{Command, Keyword},
    day::Day,
    error::PontoError,
    report::Entry,
    time::Minutes,
};

use log::{debug, warn};

/// Expected hours of work per day.
pub const WORKDAY: Minutes = Minutes::from_hm(8, 0);
pub const LUNCH: Minutes = Minutes::from_hm(1, 0);
/// Days whose time in office is within this distance of a full day leave the
/// bank untouched.
pub const TOLERANCE: Minutes = Minutes::from_hm(0, 10);

/// Shape of an expected working day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub workday: Minutes,
    pub lunch: Minutes,
    pub tolerance: Minutes,
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule {
            workday: WORKDAY,
            lunch: LUNCH,
            tolerance: TOLERANCE,
        }
    }
}

impl Schedule {
    /// Time expected in the office, lunch included.
    pub fn full_day(&self) -> Minutes {
        self.workday + self.lunch
    }

    /// Bank movement for a day with `time_in_office` minutes.
    pub fn bank_delta(&self, time_in_office: Minutes) -> Minutes {
        let full_day = self.full_day();
        if (full_day - time_in_office).abs() > self.tolerance {
            time_in_office - full_day
        } else {
            Minutes::ZERO
        }
    }
}

/// Totals printed at the end of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub time_in_office: Minutes,
    pub bank: Minutes,
    pub days_off: u32,
}

/// Running state of a Pontofile. Every command yields a new `Ledger`, the
/// previous value is left untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    schedule: Schedule,

    operating_day: Option<Day>,
    first_clock_in: Option<Minutes>,
    day_time_in_office: Minutes,
    bank: Minutes,

    total_time_in_office: Minutes,
    days_off: u32,
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger::default()
    }

    pub fn with_schedule(schedule: Schedule) -> Ledger {
        Ledger {
            schedule,
            ..Ledger::default()
        }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn operating_day(&self) -> Option<Day> {
        self.operating_day
    }

    pub fn first_clock_in(&self) -> Option<Minutes> {
        self.first_clock_in
    }

    pub fn day_time_in_office(&self) -> Minutes {
        self.day_time_in_office
    }

    pub fn bank(&self) -> Minutes {
        self.bank
    }

    pub fn total_time_in_office(&self) -> Minutes {
        self.total_time_in_office
    }

    pub fn days_off(&self) -> u32 {
        self.days_off
    }

    pub fn summary(&self) -> Summary {
        Summary {
            time_in_office: self.total_time_in_office,
            bank: self.bank,
            days_off: self.days_off,
        }
    }

    /// Apply a command, returning the next ledger and the lines it reports.
    pub fn step(&self, command: Command) -> Result<(Ledger, Vec<Entry>), PontoError> {
        debug!("applying {:?}", command);

        match command {
            Command::Banco(bank) => Ok((Ledger { bank, ..*self }, vec![])),
            Command::Data(day) => Ok(self.open_day(day)),
            Command::Ponto(clock_in, clock_out) => self.punch(clock_in, clock_out),
            Command::Estimate(clock_in) => self.estimate(clock_in),
            Command::DayOff => self.day_off(),
            Command::BancoZero => self.bank_checkpoint(),
        }
    }

    /// In-place variant of [`Ledger::step`].
    pub fn apply(&mut self, command: Command) -> Result<Vec<Entry>, PontoError> {
        let (next, entries) = self.step(command)?;
        *self = next;
        Ok(entries)
    }

    /// Fold the operating day into the bank. Without an operating day this
    /// is a no-op and reports nothing.
    pub fn close_day(&self) -> (Ledger, Option<Entry>) {
        if self.operating_day.is_none() {
            return (*self, None);
        }

        let worked = self.day_time_in_office;
        let bank_delta = self.schedule.bank_delta(worked);
        let next = Ledger {
            bank: self.bank + bank_delta,
            total_time_in_office: self.total_time_in_office + worked,
            ..*self
        };

        let entry = Entry::DayClosed {
            span: self.first_clock_in.map(|clock_in| (clock_in, clock_in + worked)),
            worked,
            bank_delta,
            bank: next.bank,
        };

        (next, Some(entry))
    }

    fn require_day(&self, keyword: Keyword) -> Result<Day, PontoError> {
        self.operating_day.ok_or(PontoError::State(keyword))
    }

    fn open_day(&self, day: Day) -> (Ledger, Vec<Entry>) {
        if day.calendar_date().is_none() {
            warn!("{} is not a valid calendar date", day);
        }
        if let Some(previous) = self.operating_day {
            if day <= previous {
                warn!("{} does not come after {}", day, previous);
            }
        }

        let (closed, close_entry) = self.close_day();
        let next = Ledger {
            operating_day: Some(day),
            first_clock_in: None,
            day_time_in_office: Minutes::ZERO,
            ..closed
        };

        let mut entries: Vec<Entry> = close_entry.into_iter().collect();
        entries.push(Entry::DayOpened(day));
        (next, entries)
    }

    fn punch(
        &self,
        clock_in: Minutes,
        clock_out: Minutes,
    ) -> Result<(Ledger, Vec<Entry>), PontoError> {
        self.require_day(Keyword::Ponto)?;

        // clock_out before clock_in gives a negative segment, kept as is
        let worked = clock_out - clock_in;
        let next = Ledger {
            day_time_in_office: self.day_time_in_office + worked,
            first_clock_in: self.first_clock_in.or(Some(clock_in)),
            ..*self
        };

        Ok((
            next,
            vec![Entry::Punch {
                clock_in,
                clock_out,
                worked,
            }],
        ))
    }

    /// Project the clock-out for a day started at `clock_in`. A full day is
    /// booked right away, both on the day and on the lifetime total, and the
    /// day is booked on the total again when it closes.
    fn estimate(&self, clock_in: Minutes) -> Result<(Ledger, Vec<Entry>), PontoError> {
        self.require_day(Keyword::Estimate)?;

        let full_day = self.schedule.full_day();
        let remaining = (full_day - self.day_time_in_office).max(Minutes::ZERO);
        let next = Ledger {
            first_clock_in: Some(clock_in),
            day_time_in_office: self.day_time_in_office + full_day,
            total_time_in_office: self.total_time_in_office + full_day,
            ..*self
        };

        Ok((
            next,
            vec![Entry::Estimate {
                clock_in,
                expected_clock_out: clock_in + remaining,
                remaining,
            }],
        ))
    }

    fn day_off(&self) -> Result<(Ledger, Vec<Entry>), PontoError> {
        self.require_day(Keyword::DayOff)?;

        let next = Ledger {
            days_off: self.days_off + 1,
            ..*self
        };
        Ok((next, vec![Entry::DayOff]))
    }

    /// Report the bank so it can be checked against the official one. The
    /// bank itself is left as is.
    fn bank_checkpoint(&self) -> Result<(Ledger, Vec<Entry>), PontoError> {
        let day = self.require_day(Keyword::BancoZero)?;

        Ok((
            *self,
            vec![Entry::BankCheckpoint {
                day,
                bank: self.bank,
            }],
        ))
    }
}
