//! Gender value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for gender parsing.
#[derive(Debug, Error)]
#[error("Unknown gender value: {0}")]
pub struct GenderError(String);

/// Customer gender.
///
/// Serialized and persisted as the uppercase wire values `MALE` / `FEMALE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All possible genders.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Male, Self::Female]
    }

    /// Returns the persisted string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = GenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MALE" => Ok(Self::Male),
            "FEMALE" => Ok(Self::Female),
            other => Err(GenderError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_display() {
        assert_eq!(Gender::Male.to_string(), "MALE");
        assert_eq!(Gender::Female.to_string(), "FEMALE");
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!("MALE".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
        assert!("male".parse::<Gender>().is_err());
        assert!("OTHER".parse::<Gender>().is_err());
    }

    #[test]
    fn test_gender_round_trips_through_persisted_form() {
        for gender in Gender::all() {
            assert_eq!(gender.as_str().parse::<Gender>().unwrap(), gender);
        }
    }

    #[test]
    fn test_gender_serialization() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"FEMALE\"");
        let parsed: Gender = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Gender::Female);
    }

    #[test]
    fn test_gender_deserialization_rejects_lowercase() {
        assert!(serde_json::from_str::<Gender>("\"male\"").is_err());
    }
}
