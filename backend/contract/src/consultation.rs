use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsultationType {
    #[serde(rename = "дом")]
    House,
    #[serde(rename = "квартира")]
    Apartment,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown consultation type: {0}")]
pub struct UnknownConsultation(pub String);

impl ConsultationType {
    pub const ALL: [ConsultationType; 2] = [ConsultationType::House, ConsultationType::Apartment];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationType::House => "дом",
            ConsultationType::Apartment => "квартира",
        }
    }
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsultationType {
    type Err = UnknownConsultation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == trimmed.to_lowercase())
            .ok_or_else(|| UnknownConsultation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::ConsultationType;

    #[test]
    fn test_parse() {
        assert_eq!("дом".parse(), Ok(ConsultationType::House));
        assert_eq!(" Квартира ".parse(), Ok(ConsultationType::Apartment));
        assert!("office".parse::<ConsultationType>().is_err());
        assert!("".parse::<ConsultationType>().is_err());
    }

    #[test]
    fn test_serde_uses_russian_values() {
        let json = serde_json::to_string(&ConsultationType::Apartment).unwrap();
        assert_eq!(json, "\"квартира\"");

        let kind: ConsultationType = serde_json::from_str("\"дом\"").unwrap();
        assert_eq!(kind, ConsultationType::House);
    }
}
