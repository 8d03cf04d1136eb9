// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Strict DNS hostname validation.

/// Validate `hostname` against the DNS label grammar.
///
/// Accepts at most one trailing dot, caps the whole name at 253 bytes and
/// each label at 63, requires labels to be alphanumeric-and-hyphen without
/// a leading or trailing hyphen, and rejects all-numeric names (those are
/// IP literals, not hostnames). Purely structural: no case folding, no
/// punycode, no hidden state.
pub fn is_valid_hostname(hostname: &str) -> bool {
    let name = hostname.strip_suffix('.').unwrap_or(hostname);
    // A second trailing dot means an empty final label.
    if name.ends_with('.') {
        return false;
    }
    if name.len() > 253 {
        return false;
    }
    if !name.split('.').all(is_valid_label) {
        return false;
    }
    // An all-numeric dotted string would satisfy the label grammar but is
    // an IP literal.
    !name.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

/// One dot-delimited segment: `[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?`,
/// at most 63 bytes.
fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    if bytes.is_empty() || bytes.len() > 63 {
        return false;
    }
    if bytes[0] == b'-' || bytes[bytes.len() - 1] == b'-' {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}

#[cfg(test)]
#[path = "hostname_tests.rs"]
mod tests;
