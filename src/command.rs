/// A single line of user input, already classified.
///
/// The number check takes precedence: a line whose first token parses as a
/// float is always a conversion request, never a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Amount(f64),
    Command { name: String, args: Vec<String> },
}

/// Result of dispatching a command, consumed by the shell loop to pick the
/// message to print. Failed commands never mutate session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    SyntaxError,
    InvalidCurrency,
    UnknownCommand,
}

/// Tokenize a line on whitespace and classify it. Returns `None` for an
/// empty line.
pub fn parse_line(line: &str) -> Option<Input> {
    let mut tokens = line.split_whitespace();
    let first = tokens.next()?;

    if let Ok(amount) = first.parse::<f64>() {
        return Some(Input::Amount(amount));
    }

    Some(Input::Command {
        name: first.to_string(),
        args: tokens.map(str::to_string).collect(),
    })
}

/// Length-only check; codes are never validated against a currency list.
/// Unknown codes surface later as an HTTP error from the rate service.
pub fn is_valid_pair(first: &str, second: &str) -> bool {
    first.len() == 3 && second.len() == 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_first_token_is_an_amount() {
        assert_eq!(parse_line("100"), Some(Input::Amount(100.0)));
        assert_eq!(parse_line("-3.5"), Some(Input::Amount(-3.5)));
        // trailing tokens after a number are ignored, as is leading whitespace
        assert_eq!(parse_line("  42 extra  "), Some(Input::Amount(42.0)));
    }

    #[test]
    fn test_non_numeric_first_token_is_a_command() {
        assert_eq!(
            parse_line("cc usd eur"),
            Some(Input::Command {
                name: "cc".to_string(),
                args: vec!["usd".to_string(), "eur".to_string()],
            })
        );
        assert_eq!(
            parse_line("swap"),
            Some(Input::Command {
                name: "swap".to_string(),
                args: vec![],
            })
        );
    }

    #[test]
    fn test_empty_line_parses_to_nothing() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
    }

    #[test]
    fn test_pair_validation_is_length_only() {
        assert!(is_valid_pair("usd", "eur"));
        assert!(is_valid_pair("xxx", "zzz"));
        assert!(!is_valid_pair("us", "eur"));
        assert!(!is_valid_pair("usd", "euro"));
    }
}
