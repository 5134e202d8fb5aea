//! Error types for CephCluster admission validation.
//!
//! Each variant renders as the message surfaced verbatim to the client that
//! issued the write request.

use std::fmt;
use thiserror::Error;

/// Fields that cannot change once the cluster has been created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImmutableField {
    DataDirHostPath,
    HostNetwork,
    Provider,
}

impl fmt::Display for ImmutableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImmutableField::DataDirHostPath => "DataDirHostPath",
            ImmutableField::HostNetwork => "HostNetwork",
            ImmutableField::Provider => "Provider",
        };
        f.write_str(name)
    }
}

/// Error type for admission validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// External mode enabled together with a locally managed section
    #[error(
        "invalid create: external mode enabled cannot have mon, dashboard, monitoring, network, disruptionManagement, storage fields set"
    )]
    CreateInvariantViolation,

    /// A protected field differs between the prior and the new spec
    #[error(
        "invalid update: {field} change from {} to {} is not allowed",
        go_quote(.from),
        go_quote(.to)
    )]
    ImmutableFieldChanged {
        field: ImmutableField,
        from: String,
        to: String,
    },
}

impl ValidationError {
    pub fn immutable(field: ImmutableField, from: impl Into<String>, to: impl Into<String>) -> Self {
        ValidationError::ImmutableFieldChanged {
            field,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Short machine-readable reason, used for structured logging
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::CreateInvariantViolation => "ExternalModeConflict",
            ValidationError::ImmutableFieldChanged { .. } => "ImmutableFieldChanged",
        }
    }
}

/// Double-quote `value` with the escapes of Go's `%q` verb.
///
/// Printable characters pass through. Non-printable characters below 0x80
/// become `\xNN`, the rest `\uNNNN` or `\UNNNNNNNN`.
pub fn go_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str(r#"\""#),
            '\\' => quoted.push_str(r"\\"),
            '\u{7}' => quoted.push_str(r"\a"),
            '\u{8}' => quoted.push_str(r"\b"),
            '\u{c}' => quoted.push_str(r"\f"),
            '\n' => quoted.push_str(r"\n"),
            '\r' => quoted.push_str(r"\r"),
            '\t' => quoted.push_str(r"\t"),
            '\u{b}' => quoted.push_str(r"\v"),
            c if is_printable(c) => quoted.push(c),
            c if u32::from(c) < 0x80 => quoted.push_str(&format!(r"\x{:02x}", u32::from(c))),
            c if u32::from(c) < 0x10000 => quoted.push_str(&format!(r"\u{:04x}", u32::from(c))),
            c => quoted.push_str(&format!(r"\U{:08x}", u32::from(c))),
        }
    }
    quoted.push('"');
    quoted
}

/// Space is the only printable whitespace. Format and private use characters
/// are not printable.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    let format_or_private = matches!(
        c,
        '\u{ad}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{feff}'
            | '\u{e000}'..='\u{f8ff}'
            | '\u{f0000}'..='\u{10ffff}'
    );
    !(c.is_control() || c.is_whitespace() || format_or_private)
}

/// Result type alias for validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;
