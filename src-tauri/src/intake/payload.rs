//! Drop payload parsing.
//!
//! Drag payloads arrive as whitespace separated tokens. Paths containing
//! spaces are wrapped in braces (Tk list quoting, e.g. `{C:/My Pictures/a.png}`)
//! or come as `file:` URIs with `%20` escapes. Both forms are kept intact;
//! a bare path with an unquoted space still splits, as there is no way to
//! tell it apart from two paths.
//!
//! Pasted `text/uri-list` data may carry `#` comment lines (RFC 2483); those
//! are dropped before tokenizing whenever the payload holds a `file:` URI.

use std::path::PathBuf;
use percent_encoding::percent_decode_str;

const FILE_SCHEME: &str = "file:";

/// Splits `payload` into candidate paths, in payload order.
pub fn parse_drop_payload(payload: &str) -> Vec<PathBuf> {
    let payload = if is_uri_list(payload) {
        strip_uri_list_comments(payload)
    } else {
        payload.to_string()
    };

    split_tokens(&payload)
        .iter()
        .filter_map(|token| normalize_candidate(token))
        .collect()
}

fn is_uri_list(payload: &str) -> bool {
    payload
        .lines()
        .any(|line| line.trim_start().trim_start_matches('{').starts_with(FILE_SCHEME))
}

fn strip_uri_list_comments(payload: &str) -> String {
    payload
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strips grouping braces and the `file:` scheme from one token.
///
/// Returns `None` when nothing is left.
fn normalize_candidate(token: &str) -> Option<PathBuf> {
    let token = token.trim().trim_matches(|c| c == '{' || c == '}');
    let path = match token.strip_prefix(FILE_SCHEME) {
        Some(rest) => decode_file_uri(rest),
        None => token.to_string(),
    };
    if path.is_empty() { None } else { Some(PathBuf::from(path)) }
}

/// Turns the part after `file:` into a local path.
///
/// `//localhost/x` and `///x` map to `/x`, `//server/share/x` keeps its host
/// as a UNC path `//server/share/x`, and the short `/x` form is taken as is.
fn decode_file_uri(rest: &str) -> String {
    let path = match rest.strip_prefix("//") {
        Some(after) => {
            let (authority, tail) = after.split_at(after.find('/').unwrap_or(after.len()));
            if authority.is_empty() || authority.eq_ignore_ascii_case("localhost") {
                tail.to_string()
            } else {
                format!("//{authority}{tail}")
            }
        }
        None => rest.to_string(),
    };
    let decoded = percent_decode_str(&path).decode_utf8_lossy().into_owned();

    // file:///C:/x arrives as /C:/x
    let bytes = decoded.as_bytes();
    if bytes.len() >= 3 && bytes[0] == b'/' && bytes[1].is_ascii_alphabetic() && bytes[2] == b':' {
        decoded[1..].to_string()
    } else {
        decoded
    }
}

/// Whitespace tokenizer that keeps `{...}` groups (nesting allowed) whole.
fn split_tokens(payload: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = payload.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let mut token = String::new();
        if c == '{' {
            chars.next();
            let mut depth = 1;
            for c in chars.by_ref() {
                if c == '{' {
                    depth += 1;
                } else if c == '}' {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                token.push(c);
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                token.push(c);
                chars.next();
            }
        }
        tokens.push(token);
    }

    tokens
}
