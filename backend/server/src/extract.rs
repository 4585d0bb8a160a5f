//! # Payload Extraction
//!
//! A submission arrives either as parameters (query string or a form-encoded
//! body) or as a JSON body. Both are normalized into one [`SubmitPayload`].
//!
//! Extractors run in order and the first one that finds data wins. Parameters
//! go first: they only count when at least one form field is present, so a
//! stray query string such as `?v=2` still falls through to the JSON body.
use std::collections::HashMap;

use contract::SubmitPayload;
use url::form_urlencoded;

use crate::error::AppError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const FORM_FIELDS: [&str; 3] = ["name", "phone", "consultation"];

/// Request parts the extractors look at.
pub struct RawSubmission<'a> {
    pub query: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub body: &'a [u8],
}

pub trait Extractor {
    /// `Ok(None)` means this encoding carried no submission.
    fn extract(&self, raw: &RawSubmission) -> Result<Option<SubmitPayload>, AppError>;
}

pub struct FormParams;

/// JSON body with string fields only.
///
/// A non-string value such as `"phone": 79991234567` is a
/// `MalformedPayload`, not coerced into text.
pub struct JsonBody;

pub const EXTRACTORS: [&(dyn Extractor + Sync); 2] = [&FormParams, &JsonBody];

pub fn extract_payload(raw: &RawSubmission) -> Result<SubmitPayload, AppError> {
    for extractor in EXTRACTORS {
        if let Some(payload) = extractor.extract(raw)? {
            return Ok(payload);
        }
    }

    Err(AppError::NoData)
}

impl FormParams {
    fn collect(raw: &RawSubmission) -> HashMap<String, String> {
        let mut params = HashMap::new();

        let mut insert = |input: &[u8]| {
            for (key, value) in form_urlencoded::parse(input) {
                // first occurrence wins
                params
                    .entry(key.into_owned())
                    .or_insert_with(|| value.into_owned());
            }
        };

        if let Some(query) = raw.query {
            insert(query.as_bytes());
        }

        if raw.content_type.is_some_and(is_form_encoded) {
            insert(raw.body);
        }

        params
    }
}

/// Media types compare case-insensitively and may carry parameters.
fn is_form_encoded(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

impl Extractor for FormParams {
    fn extract(&self, raw: &RawSubmission) -> Result<Option<SubmitPayload>, AppError> {
        let mut params = Self::collect(raw);

        if !FORM_FIELDS.iter().any(|field| params.contains_key(*field)) {
            return Ok(None);
        }

        let mut take = |key: &str| params.remove(key).unwrap_or_default();

        Ok(Some(SubmitPayload {
            name: take("name"),
            phone: take("phone"),
            consultation: take("consultation"),
            timestamp: take("timestamp"),
        }))
    }
}

impl Extractor for JsonBody {
    fn extract(&self, raw: &RawSubmission) -> Result<Option<SubmitPayload>, AppError> {
        if raw.body.trim_ascii().is_empty() {
            return Ok(None);
        }

        serde_json::from_slice(raw.body)
            .map(Some)
            .map_err(|e| AppError::MalformedPayload(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{AppError, RawSubmission, extract_payload};

    fn raw<'a>(
        query: Option<&'a str>,
        content_type: Option<&'a str>,
        body: &'a str,
    ) -> RawSubmission<'a> {
        RawSubmission {
            query,
            content_type,
            body: body.as_bytes(),
        }
    }

    #[test]
    fn test_json_body() {
        let body = r#"{"name":"Иван","phone":"+7 999 123 45 67","consultation":"дом","timestamp":"01.02.2025, 10:00:00"}"#;

        let payload = extract_payload(&raw(None, Some("application/json"), body)).unwrap();

        assert_eq!(payload.name, "Иван");
        assert_eq!(payload.phone, "+7 999 123 45 67");
        assert_eq!(payload.consultation, "дом");
        assert_eq!(payload.timestamp, "01.02.2025, 10:00:00");
    }

    #[test]
    fn test_query_params_win_over_json() {
        let body = r#"{"name":"from json","phone":"1","consultation":"дом"}"#;
        let query = "name=%D0%98%D0%B2%D0%B0%D0%BD&phone=%2B79991234567";

        let payload = extract_payload(&raw(Some(query), Some("application/json"), body)).unwrap();

        assert_eq!(payload.name, "Иван");
        assert_eq!(payload.phone, "+79991234567");
        assert_eq!(payload.consultation, "");
    }

    #[test]
    fn test_form_encoded_body() {
        let body = "name=Anna&phone=8+900+000+00+00&consultation=%D0%B4%D0%BE%D0%BC";

        let payload =
            extract_payload(&raw(None, Some("application/x-www-form-urlencoded"), body)).unwrap();

        assert_eq!(payload.name, "Anna");
        assert_eq!(payload.phone, "8 900 000 00 00");
        assert_eq!(payload.consultation, "дом");
        assert!(payload.timestamp.is_empty());
    }

    #[test]
    fn test_form_content_type_ignores_case_and_charset() {
        let body = "name=Anna&phone=%2B79990000000&consultation=%D0%B4%D0%BE%D0%BC";

        let payload = extract_payload(&raw(
            None,
            Some("Application/X-WWW-Form-Urlencoded; charset=UTF-8"),
            body,
        ))
        .unwrap();

        assert_eq!(payload.name, "Anna");
        assert_eq!(payload.phone, "+79990000000");
        assert_eq!(payload.consultation, "дом");
    }

    #[test]
    fn test_non_string_json_value_is_malformed() {
        let body = r#"{"name":"Иван","phone":79991234567,"consultation":"дом"}"#;

        let result = extract_payload(&raw(None, Some("application/json"), body));

        assert!(matches!(result, Err(AppError::MalformedPayload(_))));
    }

    #[test]
    fn test_unrelated_query_falls_through_to_json() {
        let body = r#"{"name":"Иван","phone":"+79991234567","consultation":"квартира"}"#;

        let payload = extract_payload(&raw(Some("v=2"), None, body)).unwrap();

        assert_eq!(payload.consultation, "квартира");
    }

    #[test]
    fn test_malformed_json() {
        let result = extract_payload(&raw(None, Some("application/json"), "{name: oops"));

        assert!(matches!(result, Err(AppError::MalformedPayload(_))));
    }

    #[test]
    fn test_no_data() {
        assert!(matches!(
            extract_payload(&raw(None, None, "")),
            Err(AppError::NoData)
        ));
        assert!(matches!(
            extract_payload(&raw(Some("v=2"), None, "  \n")),
            Err(AppError::NoData)
        ));
    }
}
