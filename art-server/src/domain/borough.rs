//! Borough vocabulary.

use std::fmt;

use serde::Serialize;

/// Error returned when a string names no known borough.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown borough: {0:?}")]
pub struct InvalidBorough(pub String);

/// One of the five boroughs of New York City.
///
/// The station catalog uses short codes (`M`, `Bk`, `Bx`, `Q`, `SI`) while
/// callers tend to use full names, so parsing accepts either form,
/// case-insensitively.
///
/// # Examples
///
/// ```
/// use art_server::domain::Borough;
///
/// assert_eq!(Borough::parse("Bk").unwrap(), Borough::Brooklyn);
/// assert_eq!(Borough::parse("queens").unwrap(), Borough::Queens);
/// assert!(Borough::parse("Jersey").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Borough {
    Manhattan,
    Brooklyn,
    Bronx,
    Queens,
    #[serde(rename = "Staten Island")]
    StatenIsland,
}

impl Borough {
    /// Parse a borough from its short code or full name.
    pub fn parse(s: &str) -> Result<Self, InvalidBorough> {
        let normalized = s.trim().to_ascii_lowercase();
        let borough = match normalized.as_str() {
            "m" | "manhattan" => Borough::Manhattan,
            "bk" | "brooklyn" => Borough::Brooklyn,
            "bx" | "bronx" | "the bronx" => Borough::Bronx,
            "q" | "queens" => Borough::Queens,
            "si" | "staten island" => Borough::StatenIsland,
            _ => return Err(InvalidBorough(s.to_string())),
        };
        Ok(borough)
    }

    /// Full display name.
    pub fn name(&self) -> &'static str {
        match self {
            Borough::Manhattan => "Manhattan",
            Borough::Brooklyn => "Brooklyn",
            Borough::Bronx => "Bronx",
            Borough::Queens => "Queens",
            Borough::StatenIsland => "Staten Island",
        }
    }
}

impl fmt::Display for Borough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
