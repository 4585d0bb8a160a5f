use std::{collections::BTreeMap, sync::LazyLock};

use contract::{
    ConsultationType, SubmitPayload,
    messages::{CONSULTATION_REQUIRED, NAME_REQUIRED, NAME_TOO_SHORT, PHONE_INVALID, PHONE_REQUIRED},
};
use regex::Regex;

pub const MIN_NAME_CHARS: usize = 2;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[0-9\s\-()]{10,}$").expect("phone pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Consultation,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Phone, Field::Consultation];

    /// Key used on the wire and in the form.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Consultation => "consultation",
        }
    }
}

pub type FieldErrors = BTreeMap<Field, &'static str>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub phone: String,
    pub consultation: String,
}

impl FormData {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Consultation => self.consultation = value,
        }
    }

    /// Wire payload. Only meaningful once [`validate`] passes.
    pub fn payload(&self, timestamp: String) -> SubmitPayload {
        let consultation = self
            .consultation
            .parse::<ConsultationType>()
            .map(|kind| kind.to_string())
            .unwrap_or_else(|_| self.consultation.clone());

        SubmitPayload {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            consultation,
            timestamp,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub errors: FieldErrors,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks every field independently so all errors surface together.
pub fn validate(data: &FormData) -> Validation {
    let mut errors = FieldErrors::new();

    let name = data.name.trim();
    if name.is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    } else if name.chars().count() < MIN_NAME_CHARS {
        errors.insert(Field::Name, NAME_TOO_SHORT);
    }

    let phone = data.phone.trim();
    if phone.is_empty() {
        errors.insert(Field::Phone, PHONE_REQUIRED);
    } else if !PHONE_PATTERN.is_match(phone) {
        errors.insert(Field::Phone, PHONE_INVALID);
    }

    // a value outside the two options counts as nothing selected
    if data.consultation.parse::<ConsultationType>().is_err() {
        errors.insert(Field::Consultation, CONSULTATION_REQUIRED);
    }

    Validation { errors }
}

#[cfg(test)]
mod tests {
    use contract::messages::{
        CONSULTATION_REQUIRED, NAME_REQUIRED, NAME_TOO_SHORT, PHONE_INVALID, PHONE_REQUIRED,
    };
    use serde_json::Value;

    use super::{Field, FormData, validate};

    fn data(name: &str, phone: &str, consultation: &str) -> FormData {
        FormData {
            name: name.to_string(),
            phone: phone.to_string(),
            consultation: consultation.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let validation = validate(&data("Иван", "+7 (999) 123-45-67", "дом"));

        assert!(validation.is_valid());
    }

    #[test]
    fn test_short_names() {
        for name in ["", "   ", "И", " a "] {
            let errors = validate(&data(name, "+79991234567", "дом")).errors;

            assert_eq!(errors.len(), 1, "{name:?}");
            assert!(errors.contains_key(&Field::Name));
        }

        assert_eq!(
            validate(&data("  ", "+79991234567", "дом")).errors[&Field::Name],
            NAME_REQUIRED
        );
        assert_eq!(
            validate(&data("Я", "+79991234567", "дом")).errors[&Field::Name],
            NAME_TOO_SHORT
        );
    }

    #[test]
    fn test_cyrillic_name_counts_characters() {
        // "Ян" is 4 bytes but 2 characters
        assert!(validate(&data("Ян", "+79991234567", "квартира")).is_valid());
    }

    #[test]
    fn test_bad_phones() {
        for phone in [
            "12345",
            "+7 999 abc 45 67",
            "++79991234567",
            "8-900-000-00-0#",
            "79991234567+",
        ] {
            let errors = validate(&data("Иван", phone, "дом")).errors;

            assert_eq!(errors.get(&Field::Phone), Some(&PHONE_INVALID), "{phone:?}");
        }

        assert_eq!(
            validate(&data("Иван", "  ", "дом")).errors[&Field::Phone],
            PHONE_REQUIRED
        );
    }

    #[test]
    fn test_good_phones() {
        for phone in [
            "+7 999 123 45 67",
            "89991234567",
            "(495) 123-45-67",
            "  +7-999-123-45-67  ",
            "0123456789",
        ] {
            assert!(validate(&data("Иван", phone, "дом")).is_valid(), "{phone:?}");
        }
    }

    #[test]
    fn test_consultation_required() {
        let errors = validate(&data("Иван", "+79991234567", "")).errors;
        assert_eq!(errors[&Field::Consultation], CONSULTATION_REQUIRED);

        let errors = validate(&data("Иван", "+79991234567", "офис")).errors;
        assert_eq!(errors[&Field::Consultation], CONSULTATION_REQUIRED);
    }

    #[test]
    fn test_errors_are_not_short_circuited() {
        let errors = validate(&FormData::default()).errors;

        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            Field::ALL.to_vec()
        );
    }

    #[test]
    fn test_payload_is_trimmed_with_four_keys() {
        let form = data("  Иван ", " +7 999 123 45 67 ", "дом");

        let payload = form.payload("01.02.2025, 10:00:00".to_string());
        let json = serde_json::to_value(&payload).unwrap();

        let Value::Object(map) = json else {
            panic!("payload is not an object");
        };
        let mut keys: Vec<_> = map.keys().cloned().collect();
        keys.sort();

        assert_eq!(keys, ["consultation", "name", "phone", "timestamp"]);
        assert_eq!(map["name"], "Иван");
        assert_eq!(map["phone"], "+7 999 123 45 67");
        assert_eq!(map["consultation"], "дом");
    }
}
