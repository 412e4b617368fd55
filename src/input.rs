use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use crate::error::AocError;

pub fn read_input(path: &Path) -> Result<String, AocError> {
    std::fs::read_to_string(path).map_err(|source| AocError::Io {
        path: path.to_owned(),
        source,
    })
}

/// Non-empty lines with surrounding whitespace (including `\r`) removed,
/// paired with their 1-based line number in the raw input.
pub fn lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

pub fn parse_int<T>(token: &str, line: usize) -> Result<T, AocError>
where
    T: FromStr,
    T::Err: Display,
{
    token
        .trim()
        .parse()
        .map_err(|e| AocError::malformed(line, format!("cannot parse {:?} as an integer: {}", token, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_skips_blanks_and_strips_carriage_returns() {
        let input = "\n  12 3\r\n\r\n4\n";
        let got = lines(input).collect::<Vec<_>>();
        assert_eq!(got, vec![(2, "12 3"), (4, "4")]);
    }

    #[test]
    fn test_parse_int_reports_line() {
        match parse_int::<i64>("x7", 9) {
            Err(AocError::MalformedInput { line, .. }) => assert_eq!(line, 9),
            other => panic!("expected malformed input, got {:?}", other),
        }
        assert_eq!(parse_int::<i64>("-42", 1).unwrap(), -42);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = read_input(Path::new("definitely/not/here.in")).unwrap_err();
        assert!(matches!(err, AocError::Io { .. }), "{:?}", err);
    }
}
