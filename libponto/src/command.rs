use crate::day::Day;
use crate::error::PontoError;
use crate::time::Minutes;

use unicode_normalization::UnicodeNormalization;

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// Command keywords understood in a Pontofile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Banco,
    Data,
    Ponto,
    Estimate,
    DayOff,
    BancoZero,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Banco => "BANCO",
            Keyword::Data => "DATA",
            Keyword::Ponto => "PONTO",
            Keyword::Estimate => "ESTIMATE",
            Keyword::DayOff => "DAYOFF",
            Keyword::BancoZero => "BANCOZERO",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Keyword::Banco | Keyword::Data | Keyword::Estimate => 1,
            Keyword::Ponto => 2,
            Keyword::DayOff | Keyword::BancoZero => 0,
        }
    }

    /// Upper-case and strip accents, so `Ponto`, `pontó` and `PONTO` all match.
    pub fn normalize(token: &str) -> String {
        token
            .to_uppercase()
            .nfd()
            .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
            .collect()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Keyword {
    type Err = PontoError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match Keyword::normalize(token).as_str() {
            "BANCO" => Ok(Keyword::Banco),
            "DATA" => Ok(Keyword::Data),
            "PONTO" => Ok(Keyword::Ponto),
            "ESTIMATE" => Ok(Keyword::Estimate),
            "DAYOFF" => Ok(Keyword::DayOff),
            "BANCOZERO" => Ok(Keyword::BancoZero),
            _ => Err(PontoError::UnknownCommand(token.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Overwrite the hour bank.
    Banco(Minutes),
    /// Close the operating day, if any, and open a new one.
    Data(Day),
    /// Clock-in and clock-out pair.
    Ponto(Minutes, Minutes),
    /// Clock-in with a projected clock-out.
    Estimate(Minutes),
    DayOff,
    BancoZero,
}

impl Command {
    pub fn keyword(&self) -> Keyword {
        match self {
            Command::Banco(_) => Keyword::Banco,
            Command::Data(_) => Keyword::Data,
            Command::Ponto(_, _) => Keyword::Ponto,
            Command::Estimate(_) => Keyword::Estimate,
            Command::DayOff => Keyword::DayOff,
            Command::BancoZero => Keyword::BancoZero,
        }
    }

    /// Parse one ledger line. Blank lines and `#` comments give `Ok(None)`.
    pub fn parse_line(line: &str) -> Result<Option<Command>, PontoError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        line.try_into().map(Some)
    }

    fn from_args(keyword: Keyword, args: &[&str]) -> Result<Self, PontoError> {
        if args.len() != keyword.arity() {
            return Err(PontoError::arity(keyword, args.len()));
        }

        let time = |token: &str| {
            token
                .parse::<Minutes>()
                .map_err(|e| PontoError::format(keyword, e))
        };

        let command = match keyword {
            Keyword::Banco => Command::Banco(time(args[0])?),
            Keyword::Data => Command::Data(
                args[0]
                    .parse::<Day>()
                    .map_err(|e| PontoError::format(keyword, e))?,
            ),
            Keyword::Ponto => Command::Ponto(time(args[0])?, time(args[1])?),
            Keyword::Estimate => Command::Estimate(time(args[0])?),
            Keyword::DayOff => Command::DayOff,
            Keyword::BancoZero => Command::BancoZero,
        };

        Ok(command)
    }
}

impl<'s> TryFrom<&'s str> for Command {
    type Error = PontoError;

    fn try_from(line: &'s str) -> Result<Self, Self::Error> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens
            .next()
            .ok_or_else(|| PontoError::UnknownCommand(line.to_string()))?
            .parse::<Keyword>()?;
        let args: Vec<&str> = tokens.collect();

        Command::from_args(keyword, &args)
    }
}
