use libponto::{run, run_file, Keyword, Ledger, Minutes, PontoError, Printer};

use anyhow::Result;

use std::fs;

const WEEK: &str = "\
# Pontofile
BANCO -00:45

DATA 2024-01-02
PONTO 08:58 12:01
Ponto 13:02 18:10

DATA 2024-01-03
DAYOFF

data 2024-01-04
PONTO 09:00 12:00
ESTIMATE 13:00
BANCOZERO
";

fn interpret(input: &str) -> Result<(Ledger, String)> {
    colored::control::set_override(false);
    let mut printer = Printer::new(Vec::new());
    let ledger = run(input, None, &mut printer)?;
    Ok((ledger, String::from_utf8(printer.into_inner())?))
}

fn failure(input: &str) -> (anyhow::Error, String) {
    colored::control::set_override(false);
    let mut printer = Printer::new(Vec::new());
    let err = run(input, None, &mut printer).unwrap_err();
    (err, String::from_utf8(printer.into_inner()).unwrap())
}

#[test]
fn full_week_report() -> Result<()> {
    let (ledger, out) = interpret(WEEK)?;

    let expected = [
        "Dia 2024-01-02  |  ------------------------  |  ",
        "         Ponto  |  08:58 -> 12:01 (T 03:03)  |  ",
        "         Ponto  |  13:02 -> 18:10 (T 05:08)  |  ",
        "   Ponto Final  |  08:58 -> 17:09 (T 08:11)  |  BhΔ -00:49  Bh Tot. -01:34",
        "",
        "Dia 2024-01-03  |  ------------------------  |  ",
        "                |  Dia off                   |  ",
        "   Ponto Final  |  ------------------------  |  BhΔ -09:00  Bh Tot. -10:34",
        "",
        "Dia 2024-01-04  |  ------------------------  |  ",
        "         Ponto  |  09:00 -> 12:00 (T 03:00)  |  ",
        "    Estimativa  |  13:00 -> 19:00 (T 06:00)  |  ",
        "Dia 2024-01-04  |  ----- Zerar Banco! -----  |  Bh Tot. -10:34",
        "   Ponto Final  |  13:00 -> 25:00 (T 12:00)  |  BhΔ +03:00  Bh Tot. -07:34",
        "",
    ];
    assert_eq!(out.lines().collect::<Vec<_>>(), expected);

    let mut printer = Printer::new(Vec::new());
    printer.summary(&ledger.summary())?;
    assert_eq!(
        String::from_utf8(printer.into_inner())?,
        "\n\
         Tempo total no escritório :  29:11\n\
         Banco de Horas .......... : -07:34\n\
         Dias off ................ :      1\n\
         \n"
    );
    Ok(())
}

#[test]
fn single_short_day() -> Result<()> {
    let (ledger, out) = interpret("DATA 2024-01-01\nPONTO 09:00 17:30\n")?;

    assert_eq!(ledger.bank(), Minutes::new(-30));
    assert_eq!(ledger.total_time_in_office(), Minutes::new(510));
    assert!(out.contains("BhΔ -00:30  Bh Tot. -00:30"));
    Ok(())
}

#[test]
fn empty_input_closes_nothing() -> Result<()> {
    let (ledger, out) = interpret("\n   \n# nada\n")?;
    assert_eq!(ledger, Ledger::new());
    assert_eq!(out, "");
    Ok(())
}

#[test]
fn banco_alone_sets_bank() -> Result<()> {
    let (ledger, out) = interpret("BANCO 12:34")?;
    assert_eq!(ledger.bank(), Minutes::new(754));
    assert_eq!(ledger.operating_day(), None);
    assert_eq!(out, "");
    Ok(())
}

#[test]
fn windows_line_endings() -> Result<()> {
    let (ledger, _) = interpret("DATA 2024-01-01\r\nPONTO 09:00 18:00\r\n")?;
    assert_eq!(ledger.total_time_in_office(), Minutes::new(540));
    assert_eq!(ledger.bank(), Minutes::ZERO);
    Ok(())
}

#[test]
fn unknown_command_stops_run() {
    let (err, out) = failure("DATA 2024-01-01\nFOO 09:00\nPONTO 09:00 18:00\n");

    assert_eq!(
        err.downcast_ref::<PontoError>(),
        Some(&PontoError::UnknownCommand("FOO".to_string()))
    );
    assert_eq!(err.to_string(), "line 2: FOO 09:00");
    assert!(!out.contains("Ponto"));
}

#[test]
fn day_commands_before_data_fail() {
    let cases = [
        ("PONTO 09:00 18:00", Keyword::Ponto),
        ("ESTIMATE 09:00", Keyword::Estimate),
        ("DAYOFF", Keyword::DayOff),
        ("BANCOZERO", Keyword::BancoZero),
    ];

    for (line, keyword) in cases {
        let (err, out) = failure(line);
        assert_eq!(
            err.downcast_ref::<PontoError>(),
            Some(&PontoError::State(keyword))
        );
        assert_eq!(
            format!("{:#}", err),
            format!("line 1: {}: {} requires an operating day (use DATA)", line, keyword)
        );
        assert_eq!(out, "");
    }
}

#[test]
fn malformed_time_is_validation_error() {
    let (err, _) = failure("DATA 2024-01-01\nPONTO 9h 18:00");
    match err.downcast_ref::<PontoError>() {
        Some(PontoError::Validation { keyword, .. }) => assert_eq!(*keyword, Keyword::Ponto),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn bancozero_never_zeroes() -> Result<()> {
    let (ledger, out) = interpret("BANCO 02:00\nDATA 2024-01-01\nBANCOZERO\nPONTO 09:00 18:00")?;
    assert_eq!(ledger.bank(), Minutes::new(120));
    assert!(out.contains("Zerar Banco! -----  |  Bh Tot. +02:00"));
    Ok(())
}

#[test]
fn estimated_day_counted_twice() -> Result<()> {
    let (ledger, _) = interpret("DATA 2024-01-01\nESTIMATE 09:00")?;
    assert_eq!(ledger.total_time_in_office(), Minutes::new(1080));
    assert_eq!(ledger.bank(), Minutes::ZERO);
    Ok(())
}

#[test]
fn read_from_file() -> Result<()> {
    colored::control::set_override(false);
    let path = std::env::temp_dir().join(format!("Pontofile-{}", std::process::id()));
    fs::write(&path, "DATA 2024-01-01\nPONTO 08:00 18:00\n")?;

    let mut printer = Printer::new(Vec::new());
    let ledger = run_file(&path, None, &mut printer);
    fs::remove_file(&path)?;

    assert_eq!(ledger?.bank(), Minutes::new(60));
    Ok(())
}

#[test]
fn missing_file() {
    let mut printer = Printer::new(Vec::new());
    let path = std::env::temp_dir().join("no-such-dir").join("Pontofile");
    assert!(run_file(&path, None, &mut printer).is_err());
}
