pub mod migrate;
pub mod plan;
pub mod recipe;
pub mod shopping;

use anyhow::Result;
use serde::Serialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, DATE_FORMAT)
}

pub fn format_date(date: Date) -> Result<String> {
    Ok(date.format(DATE_FORMAT)?)
}

/// Command results are written to stdout as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-05-01").unwrap(), date!(2024 - 05 - 01));
        assert!(parse_date("2024-5-1").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert_eq!(format_date(date!(2024 - 05 - 01)).unwrap(), "2024-05-01");
    }
}
