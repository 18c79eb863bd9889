use thiserror::Error;

/// A fatal error raised while tokenizing or parsing
///
/// The rendered message points at the offending input:
/// ```txt
/// Parser error
/// {23}}
///      ^
/// Error at line: 1 col: 6
/// Expected end of input found closing bracket "}"
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Parser error\n{source_line}\n{}^\nError at line: {line} col: {col}\n{message}", indent(.col))]
pub struct SyntaxError {
    /// The 1-based line of the failure
    pub line: usize,
    /// The 1-based column of the failure
    pub col: usize,
    /// The full text of the offending line
    pub source_line: String,
    /// What went wrong
    pub message: String,
}

fn indent(col: &usize) -> String {
    " ".repeat(col.saturating_sub(1))
}

impl SyntaxError {
    /// Create an error for a 0-based `line` and `col` of `text`
    pub fn new<M: Into<String>>(text: &str, line: usize, col: usize, message: M) -> Self {
        SyntaxError {
            line: line + 1,
            col: col + 1,
            source_line: text.split('\n').nth(line).unwrap_or_default().to_owned(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SyntaxError;

    #[test]
    fn renders_caret_under_column() {
        let err = SyntaxError::new("{23}}", 0, 5, "Expected end of input");
        assert_eq!(
            err.to_string(),
            "Parser error\n{23}}\n     ^\nError at line: 1 col: 6\nExpected end of input"
        );
    }

    #[test]
    fn picks_offending_line() {
        let err = SyntaxError::new("a+\nb*$", 1, 2, "Unknown symbol");
        assert_eq!(err.line, 2);
        assert_eq!(err.col, 3);
        assert_eq!(err.source_line, "b*$");
    }
}
