// core/env-profile/src/variant.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ProfileError;

/// A named deployment context selecting which profile is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentVariant {
    Development,
    Test,
    Production,
}

impl EnvironmentVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvironmentVariant::Development => "development",
            EnvironmentVariant::Test => "test",
            EnvironmentVariant::Production => "production",
        }
    }
}

impl fmt::Display for EnvironmentVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvironmentVariant {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(EnvironmentVariant::Development),
            "test" => Ok(EnvironmentVariant::Test),
            "production" | "prod" => Ok(EnvironmentVariant::Production),
            _ => Err(ProfileError::UnknownVariant(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("test".parse::<EnvironmentVariant>().unwrap(), EnvironmentVariant::Test);
        assert_eq!("PROD".parse::<EnvironmentVariant>().unwrap(), EnvironmentVariant::Production);
        assert_eq!(" dev ".parse::<EnvironmentVariant>().unwrap(), EnvironmentVariant::Development);
        assert!("staging".parse::<EnvironmentVariant>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for variant in [
            EnvironmentVariant::Development,
            EnvironmentVariant::Test,
            EnvironmentVariant::Production,
        ] {
            assert_eq!(variant.to_string().parse::<EnvironmentVariant>().unwrap(), variant);
        }
    }
}
