//! Splitting of `Exec` command lines into argv-style words.
//!
//! Words are separated by unquoted whitespace. Single quotes keep their content
//! verbatim. Inside double quotes a backslash only escapes `"` and `\`; any other
//! escaped character keeps its backslash. Outside of quotes a backslash escapes the
//! next character. `#` has no special meaning.

/// Errors that may occur when splitting a command line.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    #[error("no closing quotation")]
    NoClosingQuotation,
    #[error("no escaped character")]
    NoEscapedCharacter,
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Splits `line` into words.
///
/// An empty quoted string (`''` or `""`) yields an empty word.
///
/// # Errors
///
/// - [`SplitError::NoClosingQuotation`] if a quote is never closed.
/// - [`SplitError::NoEscapedCharacter`] if the line ends in a backslash.
pub fn split_words(line: &str) -> Result<Vec<String>, SplitError> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            c if is_separator(c) => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            '\\' => {
                word.push(chars.next().ok_or(SplitError::NoEscapedCharacter)?);
                in_word = true;
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next().ok_or(SplitError::NoClosingQuotation)? {
                        '\'' => break,
                        c => word.push(c),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next().ok_or(SplitError::NoClosingQuotation)? {
                        '"' => break,
                        '\\' => {
                            let escaped = chars.next().ok_or(SplitError::NoEscapedCharacter)?;
                            if escaped != '"' && escaped != '\\' {
                                word.push('\\');
                            }
                            word.push(escaped);
                        }
                        c => word.push(c),
                    }
                }
            }
            c => {
                word.push(c);
                in_word = true;
            }
        }
    }

    if in_word {
        words.push(word);
    }
    Ok(words)
}
