use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown country '{0}'")]
pub struct UnknownCountry(pub String);

/// Country selected alongside a coordinate conversion
///
/// The selection is carried into the result for display only. It does not restrict
/// or choose the reference systems used by the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    #[default]
    Uganda,
    Kenya,
    Tanzania,
    Rwanda,
    Burundi,
    SouthSudan,
}

impl Country {
    pub const ALL: [Country; 6] = [
        Country::Uganda,
        Country::Kenya,
        Country::Tanzania,
        Country::Rwanda,
        Country::Burundi,
        Country::SouthSudan,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Country::Uganda => "uganda",
            Country::Kenya => "kenya",
            Country::Tanzania => "tanzania",
            Country::Rwanda => "rwanda",
            Country::Burundi => "burundi",
            Country::SouthSudan => "south_sudan",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Country::Uganda => "Uganda",
            Country::Kenya => "Kenya",
            Country::Tanzania => "Tanzania",
            Country::Rwanda => "Rwanda",
            Country::Burundi => "Burundi",
            Country::SouthSudan => "South Sudan",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Country {
    type Err = UnknownCountry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace([' ', '-'], "_");
        Country::ALL
            .into_iter()
            .find(|country| country.key() == key)
            .ok_or_else(|| UnknownCountry(s.to_string()))
    }
}
