use crate::day::Day;
use crate::error::FormatError;
use crate::time::Minutes;

use pest::iterators::Pair;
use pest::Parser;

#[derive(Parser)]
#[grammar = "ponto.pest"]
pub struct PontoParser;

/// Parse a signed `HH:MM` token into minutes.
pub fn parse_time(input: &str) -> Result<Minutes, FormatError> {
    let err = || FormatError::Time(input.to_string());

    let time = PontoParser::parse(Rule::time_token, input)
        .map_err(|_| err())?
        .next()
        .ok_or_else(err)?;

    let (mut negative, mut hours, mut minutes) = (false, None, None);
    for pair in time.into_inner() {
        match pair.as_rule() {
            Rule::sign => negative = pair.as_str() == "-",
            Rule::hours => hours = digits(&pair),
            Rule::minutes => minutes = digits(&pair),
            _ => return Err(err()),
        }
    }

    let total = hours
        .zip(minutes)
        .and_then(|(h, m)| h.checked_mul(60)?.checked_add(m))
        .ok_or_else(err)?;

    Ok(Minutes::new(if negative { -total } else { total }))
}

/// Parse a `YYYY-MM-DD` token. Only the shape is checked, `2024-13-45` is accepted.
pub fn parse_date(input: &str) -> Result<Day, FormatError> {
    let err = || FormatError::Date(input.to_string());

    let date = PontoParser::parse(Rule::date_token, input)
        .map_err(|_| err())?
        .next()
        .ok_or_else(err)?;

    let mut pairs = date.into_inner();
    let mut next = || pairs.next().and_then(|p| digits(&p)).ok_or_else(err);
    let (year, month, day) = (next()?, next()?, next()?);

    // at most 4 and 2 digits, the casts cannot truncate
    Ok(Day::new(year as u16, month as u8, day as u8))
}

fn digits(pair: &Pair<Rule>) -> Option<i64> {
    pair.as_str().parse::<i64>().ok()
}
