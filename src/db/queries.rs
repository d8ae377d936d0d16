use mongodb::{
    Database,
    bson::{Bson, doc},
};
use tokio::time::timeout;

use super::models::{Record, RecordValue};
use crate::config::OP_TIMEOUT;
use crate::error::OpError;

pub const COLLECTION_NAME: &str = "numbers";

pub const RECORD_NAME: &str = "pi";
pub const RECORD_VALUE: f64 = 3.14159;

/// Insert the fixed record and return the generated identifier.
pub async fn insert_record(db: &Database) -> Result<Bson, OpError> {
    let collection = db.collection::<Record>(COLLECTION_NAME);
    let record = Record::new(RECORD_NAME.to_string(), RECORD_VALUE);

    let result = timeout(OP_TIMEOUT, collection.insert_one(&record))
        .await
        .map_err(|_| OpError::InsertTimeout(OP_TIMEOUT))?
        .map_err(OpError::Insert)?;

    Ok(result.inserted_id)
}

/// Look up the fixed record by name. `None` means no matching document,
/// which is an expected outcome rather than a failure.
pub async fn find_record(db: &Database) -> Result<Option<RecordValue>, OpError> {
    let collection = db.collection::<RecordValue>(COLLECTION_NAME);

    let found = timeout(OP_TIMEOUT, collection.find_one(doc! { "name": RECORD_NAME }))
        .await
        .map_err(|_| OpError::FindTimeout(OP_TIMEOUT))?
        .map_err(OpError::Find)?;

    Ok(found)
}
