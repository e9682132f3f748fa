//! Benchmark Fixtures
//!
//! The canonical payload every compared serializer round-trips: one person
//! with a thousand attached documents. `documents` stays the last field so
//! formats with value-before-table layout rules (TOML) accept the output.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Number of documents attached to the canonical person.
pub const DOCUMENT_COUNT: usize = 1000;

/// Mixed-script content exercising non-ASCII string paths in every encoder.
const DOCUMENT_CONTENT: &str = "abcdefghijklmnopqrstuvwxyzüäçéèß";

/// One attached document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document id, unique within the person.
    pub id: u32,
    /// Document name.
    pub name: String,
    /// Payload text.
    pub content: String,
    /// When the document expires.
    pub expiration_date: DateTime<Utc>,
}

/// The benchmarked payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Full name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Date of birth.
    pub birthday: DateTime<Utc>,
    /// Attached documents.
    pub documents: Vec<Document>,
}

/// Build the canonical person.
pub fn create_person() -> Person {
    let now = Utc::now();

    let documents = (0..DOCUMENT_COUNT as u32)
        .map(|i| Document {
            id: i,
            name: format!("License{i}"),
            content: DOCUMENT_CONTENT.to_string(),
            expiration_date: now + Duration::days(i64::from(i)),
        })
        .collect();

    Person {
        name: "John Doe".to_string(),
        age: 123,
        birthday: now,
        documents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_person_shape() {
        let person = create_person();
        assert_eq!(person.name, "John Doe");
        assert_eq!(person.age, 123);
        assert_eq!(person.documents.len(), DOCUMENT_COUNT);
        assert_eq!(person.documents[0].name, "License0");
        assert_eq!(person.documents[999].name, "License999");
    }

    #[test]
    fn test_expiration_dates_spread_forward() {
        let person = create_person();
        assert!(person.documents[1].expiration_date > person.documents[0].expiration_date);
        assert_eq!(
            person.documents[1].expiration_date - person.documents[0].expiration_date,
            Duration::days(1)
        );
    }
}
