//! State sales-tax table.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// States with a known sales-tax rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsState {
    Utah,
    Nevada,
    Texas,
    Alabama,
    California,
}

impl UsState {
    pub const ALL: [UsState; 5] = [
        UsState::Utah,
        UsState::Nevada,
        UsState::Texas,
        UsState::Alabama,
        UsState::California,
    ];

    /// Two-letter postal code.
    pub fn code(self) -> &'static str {
        match self {
            UsState::Utah => "UT",
            UsState::Nevada => "NV",
            UsState::Texas => "TX",
            UsState::Alabama => "AL",
            UsState::California => "CA",
        }
    }

    pub fn tax_rate(self) -> f64 {
        match self {
            UsState::Utah => 0.0685,
            UsState::Nevada => 0.08,
            UsState::Texas => 0.0625,
            UsState::Alabama => 0.04,
            UsState::California => 0.0825,
        }
    }

    /// Case-insensitive lookup by postal code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|state| state.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for UsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for UsState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| DomainError::UnknownState(s.to_string()))
    }
}

/// Warning emitted when a state code has no tax rate.
pub fn unknown_state_warning(state_code: &str) -> String {
    format!("({}) n'existe pas, aucun taxe appliqué.", state_code)
}
