//! Parsing of the free-text status column of uploaded consent rows.

use entity::sea_orm_active_enums::ConsentStatus;

/// How an uploaded status token was understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedStatus {
    /// "동의" or "AGREED"
    Agreed,
    /// "비동의" or "DISAGREED"
    Disagreed,
    /// Anything else, recorded as disagreement
    Defaulted,
}

impl ParsedStatus {
    /// Status stored for the parsed token
    pub fn consent_status(self) -> ConsentStatus {
        match self {
            Self::Agreed => ConsentStatus::Agreed,
            Self::Disagreed | Self::Defaulted => ConsentStatus::Disagreed,
        }
    }
}

/// Parses a status token, trimmed and case-insensitively.
pub fn parse_status_token(token: &str) -> ParsedStatus {
    let token = token.trim();

    if token == "동의" || token.eq_ignore_ascii_case("AGREED") {
        ParsedStatus::Agreed
    } else if token == "비동의" || token.eq_ignore_ascii_case("DISAGREED") {
        ParsedStatus::Disagreed
    } else {
        ParsedStatus::Defaulted
    }
}

/// Shorthand for `parse_status_token(token).consent_status()`.
pub fn parse_consent_status(token: &str) -> ConsentStatus {
    parse_status_token(token).consent_status()
}
