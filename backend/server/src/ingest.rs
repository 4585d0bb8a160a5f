use contract::{HEADERS, SubmitPayload, timestamp_now};
use tracing::info;

use crate::{
    error::AppError,
    store::{Appended, Row, SheetStore},
};

/// Validates `payload` and appends it as one row.
///
/// Values are stored as received; only empty strings count as missing.
pub async fn ingest<S: SheetStore>(store: &S, payload: SubmitPayload) -> Result<Appended, AppError> {
    let SubmitPayload {
        name,
        phone,
        consultation,
        timestamp,
    } = payload;

    if name.is_empty() || phone.is_empty() || consultation.is_empty() {
        return Err(AppError::MissingFields);
    }

    let timestamp = if timestamp.is_empty() {
        timestamp_now()
    } else {
        timestamp
    };

    let appended = store
        .append(
            Row::header(&HEADERS),
            Row::plain(vec![name, phone, consultation, timestamp]),
        )
        .await?;

    if appended.header_written {
        info!("Sheet was empty, wrote header row");
    }
    info!("Saved submission as row {}", appended.row_number);

    Ok(appended)
}

#[cfg(test)]
mod tests {
    use contract::{HEADERS, SubmitPayload};

    use super::ingest;
    use crate::{
        error::AppError,
        store::{MemoryStore, SheetStore},
    };

    fn payload(name: &str, phone: &str, consultation: &str) -> SubmitPayload {
        SubmitPayload {
            name: name.to_string(),
            phone: phone.to_string(),
            consultation: consultation.to_string(),
            timestamp: String::new(),
        }
    }

    #[tokio::test]
    async fn test_row_layout() {
        let store = MemoryStore::new();

        ingest(&store, payload("Иван", "+7 999 123 45 67", "дом"))
            .await
            .unwrap();

        let rows = store.rows().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells, HEADERS);
        assert!(rows[0].bold);
        assert_eq!(rows[1].cells[..3], ["Иван", "+7 999 123 45 67", "дом"]);
        assert!(!rows[1].cells[3].is_empty());
    }

    #[tokio::test]
    async fn test_client_timestamp_is_kept() {
        let store = MemoryStore::new();
        let mut submission = payload("Иван", "+79991234567", "квартира");
        submission.timestamp = "01.02.2025, 10:00:00".to_string();

        ingest(&store, submission).await.unwrap();

        let rows = store.rows().await.unwrap();
        assert_eq!(rows[1].cells[3], "01.02.2025, 10:00:00");
    }

    #[tokio::test]
    async fn test_non_empty_sheet_grows_by_one() {
        let store = MemoryStore::new();
        ingest(&store, payload("Иван", "+79991234567", "дом"))
            .await
            .unwrap();

        let appended = ingest(&store, payload("Анна", "+79990000000", "квартира"))
            .await
            .unwrap();

        assert!(!appended.header_written);
        assert_eq!(store.rows().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_missing_field_appends_nothing() {
        let store = MemoryStore::new();

        for bad in [
            payload("", "+79991234567", "дом"),
            payload("Иван", "", "дом"),
            payload("Иван", "+79991234567", ""),
        ] {
            assert!(matches!(
                ingest(&store, bad).await,
                Err(AppError::MissingFields)
            ));
        }

        assert!(store.rows().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_untrimmed_values_are_stored_as_is() {
        let store = MemoryStore::new();

        ingest(&store, payload("  Иван ", " +79991234567", "дом"))
            .await
            .unwrap();

        let rows = store.rows().await.unwrap();
        assert_eq!(rows[1].cells[0], "  Иван ");
        assert_eq!(rows[1].cells[1], " +79991234567");
    }
}
