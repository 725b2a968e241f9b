use crate::command::Command;
use crate::ledger::Ledger;
use crate::report::Printer;

use anyhow::{Context, Result};
use log::trace;

use std::fs;
use std::io::Write;
use std::path::Path;

pub fn run_file<W: Write>(
    path: &Path,
    carried_ledger: Option<Ledger>,
    printer: &mut Printer<W>,
) -> Result<Ledger> {
    let fcontent = fs::read_to_string(path)
        .with_context(|| format!("unable to read {}", path.display()))?;
    run(&fcontent, carried_ledger, printer)
}

/// Run every line of `input` through the ledger, printing as it goes, and
/// close the last operating day. Any error stops the run at the offending
/// line.
pub fn run<W: Write>(
    input: &str,
    carried_ledger: Option<Ledger>,
    printer: &mut Printer<W>,
) -> Result<Ledger> {
    let mut ledger = carried_ledger.unwrap_or_default();

    for (idx, line) in lines(input).enumerate() {
        let lineno = idx + 1;
        let command = match Command::parse_line(line).with_context(|| at(lineno, line))? {
            Some(command) => command,
            None => {
                trace!("line {}: skipped", lineno);
                continue;
            }
        };

        let (next, entries) = ledger.step(command).with_context(|| at(lineno, line))?;
        for entry in &entries {
            printer.entry(entry)?;
        }
        ledger = next;
    }

    let (closed, entry) = ledger.close_day();
    if let Some(entry) = entry {
        printer.entry(&entry)?;
    }

    Ok(closed)
}

/// Split on `\r\n`, `\r` or `\n`.
fn lines(input: &str) -> impl Iterator<Item = &str> {
    input.split("\r\n").flat_map(|l| l.split(['\r', '\n']))
}

fn at(lineno: usize, line: &str) -> String {
    format!("line {}: {}", lineno, line.trim())
}

#[cfg(test)]
mod tests {
    use crate::interpreter::{lines, run};
    use crate::report::Printer;
    use crate::time::Minutes;

    use anyhow::Result;

    #[test]
    fn split_any_line_ending() {
        let collected: Vec<&str> = lines("a\r\nb\rc\nd").collect();
        assert_eq!(collected, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn carry_ledger_between_runs() -> Result<()> {
        let mut printer = Printer::new(Vec::new());
        let ledger = run("BANCO 01:00", None, &mut printer)?;
        let ledger = run(
            "DATA 2024-01-01\nPONTO 09:00 18:30",
            Some(ledger),
            &mut printer,
        )?;

        assert_eq!(ledger.bank(), Minutes::new(90));
        Ok(())
    }

    #[test]
    fn error_names_line() {
        let mut printer = Printer::new(Vec::new());
        let err = run("\n# header\nDATA 2024-01-01\nPONTO 09:00", None, &mut printer)
            .unwrap_err();
        assert_eq!(err.to_string(), "line 4: PONTO 09:00");
        assert_eq!(
            err.root_cause().to_string(),
            "PONTO: expected 2 arguments, got 1"
        );
    }
}
