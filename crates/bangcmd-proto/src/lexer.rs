//! Quote-aware tokenizer.
//!
//! Splits command text on unquoted whitespace. A `"` or `'` opens a quoted
//! run unless a run of the other quote type is already open; the matching
//! character closes it. Quote characters that open or close a run are not
//! part of the token, while a quote character of the other type inside a run
//! is kept literally.
//!
//! Adjacent runs are concatenated into the same token, so `'it''s ok'` reads
//! as the single token `its ok`: the second `'` closes the first run and the
//! third opens a new one. There is no escaping.
//!
//! An unterminated quote extends to the end of the input. Empty tokens are
//! never produced, including for an empty quoted run such as `''`.

use std::mem;

/// Returns true if `ch` can open or close a quoted run.
#[inline]
pub fn is_quote(ch: char) -> bool {
    matches!(ch, '"' | '\'')
}

/// Split `input` into tokens.
///
/// # Examples
///
/// ```
/// use bangcmd_proto::lexer::tokenize;
///
/// assert_eq!(tokenize(r#"foo "bar baz" qux"#), vec!["foo", "bar baz", "qux"]);
/// assert_eq!(tokenize("  a   b  "), vec!["a", "b"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut open: Option<char> = None;

    for ch in input.chars() {
        match open {
            Some(quote) if ch == quote => open = None,
            Some(_) => current.push(ch),
            None if is_quote(ch) => open = Some(ch),
            None if ch.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(mem::take(&mut current));
                }
            }
            None => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words() {
        assert_eq!(tokenize("ping"), vec!["ping"]);
        assert_eq!(tokenize("echo hello world"), vec!["echo", "hello", "world"]);
    }

    #[test]
    fn test_double_quoted_phrase() {
        assert_eq!(
            tokenize(r#"foo "bar baz" qux"#),
            vec!["foo", "bar baz", "qux"]
        );
    }

    #[test]
    fn test_single_quoted_phrase() {
        assert_eq!(tokenize("say 'hi  there'"), vec!["say", "hi  there"]);
    }

    #[test]
    fn test_adjacent_single_quotes_concatenate() {
        assert_eq!(tokenize("foo 'it''s ok'"), vec!["foo", "its ok"]);
    }

    #[test]
    fn test_other_quote_kept_inside_run() {
        assert_eq!(tokenize(r#"say "it's fine""#), vec!["say", "it's fine"]);
        assert_eq!(tokenize(r#"say 'a "b" c'"#), vec!["say", r#"a "b" c"#]);
    }

    #[test]
    fn test_quote_inside_word() {
        assert_eq!(
            tokenize(r#"set title="hello world" now"#),
            vec!["set", "title=hello world", "now"]
        );
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(tokenize(r#"say "never closed  here"#), vec!["say", "never closed  here"]);
    }

    #[test]
    fn test_whitespace_runs_do_not_produce_empty_tokens() {
        assert_eq!(tokenize("a \t  b\n c"), vec!["a", "b", "c"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_empty_quoted_run_is_dropped() {
        assert_eq!(tokenize("foo '' bar"), vec!["foo", "bar"]);
        assert_eq!(tokenize(r#""""#), Vec::<String>::new());
    }

    #[test]
    fn test_unicode_content() {
        assert_eq!(tokenize("échos «ça va» '日本 語'"), vec!["échos", "«ça", "va»", "日本 語"]);
    }
}
