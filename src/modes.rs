//! Mode registry
//!
//! Static lookup of the four dashboard modes: their stable identifiers,
//! display labels, descriptive text and accepted filter parameters.
//!
//! Lookups by string identifier never fail. An identifier outside the four
//! known modes resolves to [`UNKNOWN_MODE`] (or an empty parameter list) so a
//! stale selection cannot take the UI down.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text returned for an unrecognised mode identifier
pub const UNKNOWN_MODE: &str = "Unknown mode";

/// A named dashboard view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Every country over a chosen year range
    #[default]
    Worldview,
    /// One country over a chosen year range
    SingleCountry,
    /// Several countries side by side
    MultipleCountry,
    /// Every country in one year
    YearView,
}

/// Name of a filter parameter a mode accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamName {
    YearRange,
    Country,
    Countries,
    Year,
}

impl ParamName {
    pub fn name(&self) -> &'static str {
        match self {
            ParamName::YearRange => "year_range",
            ParamName::Country => "country",
            ParamName::Countries => "countries",
            ParamName::Year => "year",
        }
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Mode {
    /// All modes in selector order
    pub const ALL: [Mode; 4] = [
        Mode::Worldview,
        Mode::SingleCountry,
        Mode::MultipleCountry,
        Mode::YearView,
    ];

    /// Stable identifier used in persisted state
    pub fn id(&self) -> &'static str {
        match self {
            Mode::Worldview => "worldview",
            Mode::SingleCountry => "single_country",
            Mode::MultipleCountry => "multiple_country",
            Mode::YearView => "year_view",
        }
    }

    /// Parse a mode from its identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }

    /// Label shown on the mode selector
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Worldview => "Worldview",
            Mode::SingleCountry => "Single Country View",
            Mode::MultipleCountry => "Multiple Country View",
            Mode::YearView => "Year View",
        }
    }

    /// Fixed descriptive text for this mode
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Worldview => {
                "In the Worldview mode, you can explore CO2 emissions per capita across all \
                 countries over a chosen time range. These graphs show trends over time and \
                 the distribution of emissions across the globe."
            }
            Mode::SingleCountry => {
                "In the Single Country View mode, you can analyze CO2 emissions for a specific \
                 country over a selected period. This mode allows you to understand how \
                 emissions have changed within a particular country over time"
            }
            Mode::MultipleCountry => {
                "In the Multiple Country View mode, you can compare CO2 emissions per capita \
                 across multiple countries. This mode provides insights into how emissions \
                 differ between countries during a specific period."
            }
            Mode::YearView => {
                "In the Year View mode, you can analyze CO2 emissions per capita for a specific \
                 year across various countries. This mode helps you visually identify the \
                 trend in a year."
            }
        }
    }

    /// Filter parameters this mode reads
    pub fn accepted_params(&self) -> &'static [ParamName] {
        match self {
            Mode::Worldview => &[ParamName::YearRange],
            Mode::SingleCountry => &[ParamName::Country, ParamName::YearRange],
            Mode::MultipleCountry => &[ParamName::Countries, ParamName::YearRange],
            Mode::YearView => &[ParamName::Year],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Descriptive text for a mode identifier, or [`UNKNOWN_MODE`]
pub fn describe(id: &str) -> &'static str {
    Mode::from_id(id)
        .map(|m| m.description())
        .unwrap_or(UNKNOWN_MODE)
}

/// Accepted parameter names for a mode identifier, empty when unknown
pub fn accepted_params(id: &str) -> &'static [ParamName] {
    Mode::from_id(id)
        .map(|m| m.accepted_params())
        .unwrap_or(&[])
}

/// Header line announcing the active mode
pub fn current_mode_banner(id: &str) -> String {
    let label = Mode::from_id(id).map(|m| m.label()).unwrap_or(UNKNOWN_MODE);
    format!("Your current mode is: {}", label)
}
