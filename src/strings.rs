//! String splitting used to tokenize path strings.
//!
//! The tokenizer deliberately mirrors delimiter-based `getline`
//! iteration rather than [`str::split`]: an empty input produces no
//! tokens, and a trailing delimiter does not produce a trailing empty
//! token. Leading and interior empty tokens are preserved, which is
//! what lets [`Path`](crate::Path) detect absolute paths through a
//! leading empty segment.

/// Split `input` into tokens on `delim`.
///
/// Token semantics:
/// - an empty `input` yields an empty vector;
/// - a delimiter at the end of `input` does not contribute a trailing
///   empty token;
/// - a leading delimiter or a run of delimiters contributes empty
///   tokens, unless `skip_empty` is set.
///
/// # Examples
///
/// ```
/// use fspath::strings::split;
///
/// assert_eq!(split("/a/b", '/', false), vec!["", "a", "b"]);
/// assert_eq!(split("a/b/", '/', false), vec!["a", "b"]);
/// assert_eq!(split("a//b", '/', true), vec!["a", "b"]);
/// assert!(split("", '/', false).is_empty());
/// ```
#[must_use]
pub fn split(input: &str, delim: char, skip_empty: bool) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut tokens: Vec<&str> = input.split(delim).collect();
    if input.ends_with(delim) {
        tokens.pop();
    }
    tokens
        .into_iter()
        .filter(|token| !(skip_empty && token.is_empty()))
        .map(str::to_owned)
        .collect()
}
