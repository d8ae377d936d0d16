use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub value: f64,
}

/// Decode target for the lookup; only the numeric value is read back.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordValue {
    pub value: f64,
}

impl Record {
    pub fn new(name: String, value: f64) -> Self {
        Self {
            id: None,
            name,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, to_document};

    #[test]
    fn test_record_serializes_without_unset_id() {
        let record = Record::new("pi".to_string(), 3.14159);
        let document = to_document(&record).unwrap();
        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("name").unwrap(), "pi");
        assert_eq!(document.get_f64("value").unwrap(), 3.14159);
    }

    #[test]
    fn test_record_value_decodes_stored_shape() {
        let document = doc! { "name": "pi", "value": 3.14159 };
        let found: RecordValue = from_document(document).unwrap();
        assert_eq!(found.value, 3.14159);
    }

    #[test]
    fn test_record_value_defaults_to_zero() {
        assert_eq!(RecordValue::default().value, 0.0);
    }
}
