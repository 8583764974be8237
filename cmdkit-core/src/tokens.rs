// cmdkit-core/src/tokens.rs

//! Whitespace tokenizing and quote stripping for command strings.
//!
//! This is deliberately not a shell tokenizer. A command string is split on
//! raw whitespace first, and only then is one layer of quotes removed from
//! each token that [`is_quoted`] accepts. A quoted phrase containing spaces is
//! therefore never reassembled into a single argument.

const QUOTES: [char; 2] = ['"', '\''];

/// Splits `input` on runs of whitespace. Never yields empty tokens.
pub fn split(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// Reports whether `token` counts as quoted.
///
/// A token is quoted when it is non-empty and contains exactly two `"` or
/// exactly two `'`. Only the count matters: the quotes do not have to sit at
/// the ends, so `I am the "blue" spectrum` and `a"b"c` are both quoted.
pub fn is_quoted(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    QUOTES
        .iter()
        .any(|quote| token.chars().filter(|c| c == quote).count() == 2)
}

/// Returns a new token list where every token accepted by `predicate` has its
/// first and last characters dropped.
///
/// The dropped characters are not checked. A matching token of one character
/// (or none) becomes the empty string.
pub fn mutate<S, P>(tokens: &[S], predicate: P) -> Vec<String>
where
    S: AsRef<str>,
    P: Fn(&str) -> bool,
{
    if tokens.is_empty() {
        return Vec::new();
    }
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            if predicate(token) {
                strip_ends(token)
            } else {
                token.to_string()
            }
        })
        .collect()
}

fn strip_ends(token: &str) -> String {
    let mut chars = token.chars();
    chars.next();
    chars.next_back();
    chars.as_str().to_string()
}

/// Splits a command string and strips quotes from its quoted tokens.
pub fn normalize(command: &str) -> Vec<String> {
    mutate(&split(command), is_quoted)
}
