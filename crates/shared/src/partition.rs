//! Partition key rules shared with the orchestration service.
//!
//! The service rejects keys containing any of these substrings with its own
//! copy of this table. The two must list the same patterns; when the service
//! adds or drops an entry, update [`PARTITION_KEY_FORBIDDEN_SUBSTRINGS`] in the
//! same release.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForbiddenSubstring {
    /// Literal text matched against candidate keys.
    pub pattern: &'static str,
    /// Rendering shown to users; control characters use escape mnemonics.
    pub readable: &'static str,
}

const fn forbidden(pattern: &'static str, readable: &'static str) -> ForbiddenSubstring {
    ForbiddenSubstring { pattern, readable }
}

pub const PARTITION_KEY_FORBIDDEN_SUBSTRINGS: &[ForbiddenSubstring] = &[
    forbidden("...", "..."),
    forbidden("\u{07}", "\\a"),
    forbidden("\u{08}", "\\b"),
    forbidden("\u{0C}", "\\f"),
    forbidden("\n", "\\n"),
    forbidden("\r", "\\r"),
    forbidden("\t", "\\t"),
    forbidden("\u{0B}", "\\v"),
    forbidden("\0", "\\0"),
    forbidden("|", "|"),
    forbidden(",", ","),
    forbidden("[", "["),
    forbidden("]", "]"),
    forbidden(" ", "' '"),
];
