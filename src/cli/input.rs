//! User input utilities for the interactive console
//!
//! Line-oriented prompt helpers used by the console menu loop. Parsing is
//! split from reading so the parse rules stay testable without a terminal.

use crate::{Error, Result};
use std::io::{self, Write};

/// Print a prompt and read one trimmed line from stdin
pub fn prompt_line(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

    Ok(input.trim().to_string())
}

/// Prompt for a menu selection between 1 and `max`, re-asking on bad input
pub fn prompt_menu_selection(message: &str, max: usize) -> Result<usize> {
    loop {
        let input = prompt_line(message)?;
        match parse_menu_selection(&input, max) {
            Ok(choice) => return Ok(choice),
            Err(e) => println!("{}", e),
        }
    }
}

/// Prompt for a positive integer id, re-asking on bad input
pub fn prompt_id(message: &str) -> Result<i64> {
    loop {
        let input = prompt_line(message)?;
        match parse_positive_integer(&input) {
            Ok(value) => return Ok(value),
            Err(e) => println!("{}", e),
        }
    }
}

/// Get user confirmation for an action
pub fn prompt_confirmation(message: &str, default_yes: bool) -> Result<bool> {
    let default_text = if default_yes { "Y/n" } else { "y/N" };

    loop {
        let input = prompt_line(&format!("{} [{}]: ", message, default_text))?;

        if input.is_empty() {
            return Ok(default_yes);
        }

        match input.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please enter 'y' for yes or 'n' for no."),
        }
    }
}

/// Parse a menu selection in the range 1..=max
pub fn parse_menu_selection(input: &str, max: usize) -> Result<usize> {
    let choice: usize = input
        .trim()
        .parse()
        .map_err(|_| Error::invalid_argument(format!("Please enter a number 1-{}", max)))?;

    if choice < 1 || choice > max {
        return Err(Error::invalid_argument(format!(
            "'{}' is not an option. Please choose 1-{}",
            choice, max
        )));
    }

    Ok(choice)
}

/// Parse a positive integer, as used for ids and quantities
pub fn parse_positive_integer(input: &str) -> Result<i64> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| Error::invalid_argument(format!("'{}' is not a number", input.trim())))?;

    if value < 1 {
        return Err(Error::invalid_argument(format!(
            "{} must be at least 1",
            value
        )));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_selection() {
        assert_eq!(parse_menu_selection("3", 5).unwrap(), 3);
        assert_eq!(parse_menu_selection(" 1 ", 5).unwrap(), 1);
        assert_eq!(parse_menu_selection("5", 5).unwrap(), 5);

        assert!(parse_menu_selection("0", 5).is_err());
        assert!(parse_menu_selection("6", 5).is_err());
        assert!(parse_menu_selection("repair", 5).is_err());
        assert!(parse_menu_selection("", 5).is_err());
    }

    #[test]
    fn test_parse_positive_integer() {
        assert_eq!(parse_positive_integer("12").unwrap(), 12);
        assert_eq!(parse_positive_integer(" 1 ").unwrap(), 1);

        assert!(parse_positive_integer("0").is_err());
        assert!(parse_positive_integer("-3").is_err());
        assert!(parse_positive_integer("two").is_err());
    }
}
