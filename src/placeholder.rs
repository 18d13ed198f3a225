//! Placeholder substitution in message texts.
//!
//! - `%n` / `%Ln`: the magnitude of a numerus message.
//! - `%1` … `%99` (optionally `%L1`): positional arguments. The lowest-numbered marker
//!   present receives the first argument, the next one the second, and so on.
//!
//! `%%` has no special meaning; a `%` that does not start a marker is copied as is.

use std::collections::BTreeSet;

/// A marker found after a `%` sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    /// `%n` or `%Ln`
    Count,
    /// `%1`…`%99` or `%L1`…`%L99`
    Positional(u8),
}

/// Parses the marker at the start of `rest` (the text right after `%`).
///
/// Returns the marker and its byte length.
fn parse_marker(rest: &str) -> Option<(Marker, usize)> {
    let (localized, body) = rest.strip_prefix('L').map_or((0, rest), |body| (1, body));

    if body.starts_with('n') {
        return Some((Marker::Count, localized + 1));
    }

    let mut digits = body.chars().take(2).map_while(|c| c.to_digit(10));
    let first = digits.next()?;
    let (number, len) = match digits.next() {
        Some(second) => (first * 10 + second, 2),
        None => (first, 1),
    };
    if number == 0 {
        return None;
    }
    let number = u8::try_from(number).ok()?;
    Some((Marker::Positional(number), localized + len))
}

/// Splits `text` into literal runs and markers, calling `visit` for each piece.
fn scan(text: &str, mut visit: impl FnMut(Result<Marker, &str>)) {
    let mut rest = text;
    while let Some(pos) = rest.find('%') {
        let (literal, tail) = rest.split_at(pos);
        if !literal.is_empty() {
            visit(Err(literal));
        }
        let after = tail.get(1..).unwrap_or_default();
        match parse_marker(after) {
            Some((marker, len)) => {
                visit(Ok(marker));
                rest = after.get(len..).unwrap_or_default();
            }
            None => {
                visit(Err("%"));
                rest = after;
            }
        }
    }
    if !rest.is_empty() {
        visit(Err(rest));
    }
}

/// Writes `text` back, replacing markers through `replace`. A `None` keeps the marker.
fn rewrite(text: &str, mut replace: impl FnMut(Marker) -> Option<String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('%') {
        let (literal, tail) = rest.split_at(pos);
        out.push_str(literal);
        let after = tail.get(1..).unwrap_or_default();
        match parse_marker(after) {
            Some((marker, len)) => {
                let (original, remaining) = after.split_at(len);
                match replace(marker) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push('%');
                        out.push_str(original);
                    }
                }
                rest = remaining;
            }
            None => {
                out.push('%');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Replaces every `%n` and `%Ln` with the decimal magnitude.
///
/// # Examples
/// ```
/// use ts_catalog::placeholder::substitute_count;
///
/// assert_eq!(substitute_count("Added %n item", 1), "Added 1 item");
/// assert_eq!(substitute_count("%n%", 50), "50%");
/// ```
#[must_use]
pub fn substitute_count(text: &str, n: i64) -> String {
    let value = n.to_string();
    rewrite(text, |marker| match marker {
        Marker::Count => Some(value.clone()),
        Marker::Positional(_) => None,
    })
}

/// Replaces positional markers with `args`, in a single pass.
///
/// # Examples
/// ```
/// use ts_catalog::placeholder::substitute_args;
///
/// assert_eq!(substitute_args("Add Items to %1", &["Untitled"]), "Add Items to Untitled");
/// assert_eq!(substitute_args("%2 of %5", &["3", "7"]), "3 of 7");
/// ```
#[must_use]
pub fn substitute_args<S: AsRef<str>>(text: &str, args: &[S]) -> String {
    let order: Vec<u8> = placeholders(text).into_iter().collect();
    rewrite(text, |marker| match marker {
        Marker::Positional(number) => {
            let index = order.iter().position(|&candidate| candidate == number)?;
            args.get(index).map(|arg| arg.as_ref().to_string())
        }
        Marker::Count => None,
    })
}

/// Distinct positional marker numbers used in `text`, ascending.
#[must_use]
pub fn placeholders(text: &str) -> BTreeSet<u8> {
    let mut found = BTreeSet::new();
    scan(text, |piece| {
        if let Ok(Marker::Positional(number)) = piece {
            found.insert(number);
        }
    });
    found
}

/// True if `text` contains `%n` or `%Ln`.
#[must_use]
pub fn has_count_placeholder(text: &str) -> bool {
    let mut found = false;
    scan(text, |piece| found |= piece == Ok(Marker::Count));
    found
}
