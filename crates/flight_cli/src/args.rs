//! Argument parsers for lookup subcommands.
//!
//! Each parser rejects bad input before a database connection is opened.

use chrono::NaiveDate;

/// Parse a `DD/MM/YYYY` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), "%d/%m/%Y")
        .map_err(|e| format!("expected a date as DD/MM/YYYY ({e})"))
}

/// Parse a three-letter IATA airport code.
pub fn parse_airport(input: &str) -> Result<String, String> {
    let code = input.trim();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(format!("`{code}` is not a three-letter IATA airport code"))
    }
}

/// Parse an airline name.
pub fn parse_airline(input: &str) -> Result<String, String> {
    let name = input.trim();
    if name.is_empty() {
        Err("airline name must not be empty".to_string())
    } else {
        Ok(name.to_string())
    }
}
