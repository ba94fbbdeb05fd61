use simple_logger::SimpleLogger;
use statement_payees::feed::{self, ReportRow};
use std::path::PathBuf;
use std::{env, error::Error, ffi::OsString};

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new().env().init()?;

    log::debug!("Application started");

    log::debug!("Statement processing: Starting");
    let report = process_statement()?;
    log::debug!("Statement processing: Done");

    log::debug!("Exporting payee report to stdout: Started");
    write_to_std_out(&report)?;
    log::debug!("Exporting payee report to stdout: Done");

    log::debug!("Application finished");

    Ok(())
}

fn get_first_arg() -> Result<OsString, Box<dyn Error>> {
    match env::args_os().nth(1) {
        None => Err(From::from("expected 1 argument, but got none")),
        Some(file_path) => Ok(file_path),
    }
}

fn process_statement() -> Result<Vec<ReportRow>, Box<dyn Error>> {
    let file_path = get_first_arg()?;
    let path = PathBuf::from(file_path);
    log::debug!("Extracted filepath from args: {path:?}");

    Ok(feed::read_report(&path)?)
}

fn write_to_std_out(report: &[ReportRow]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());

    log::debug!("Starting report row serialisation");
    for row in report {
        log::debug!("Serialising report row: {row:?}");
        wtr.serialize(row)?;
    }

    log::debug!("Report row serialisation done -> Flushing to stdout");
    wtr.flush()?;

    Ok(())
}
