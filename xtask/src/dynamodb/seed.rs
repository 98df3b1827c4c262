//! Seed command implementation.

use super::error::Result;
use chrono::{DateTime, Duration, Utc};
use itemstore::storage::DynamoDbRepository;
use itemstore_core::item::Record;
use itemstore_core::storage::ItemRepository;
use uuid::Uuid;

const NAMES: [&str; 8] = [
    "Notebook",
    "Desk Lamp",
    "Coffee Mug",
    "Headphones",
    "Backpack",
    "Water Bottle",
    "Keyboard",
    "Plant",
];

const DESCRIPTIONS: [&str; 3] = [
    "Sample item for local testing",
    "Created by the seed task",
    "Placeholder inventory entry",
];

/// Generate `count` sample records, one minute apart, the newest at `now`.
///
/// Every fourth record has no description so reads exercise null fields.
pub fn generate_seed_records(count: u32, now: DateTime<Utc>) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let idx = i as usize;
            let name = format!("{} #{}", NAMES[idx % NAMES.len()], i + 1);
            let description =
                (idx % 4 != 3).then(|| DESCRIPTIONS[idx % DESCRIPTIONS.len()].to_string());
            let created_at = now - Duration::minutes(i64::from(count - i - 1));

            Record::with_id(
                Uuid::new_v4().to_string(),
                Some(name),
                description,
                created_at,
            )
        })
        .collect()
}

/// Insert records one by one through the handlers' repository.
pub async fn seed_records(repo: &DynamoDbRepository, records: &[Record]) -> Result<u32> {
    let mut inserted = 0;

    for record in records {
        repo.put_item(record).await?;
        inserted += 1;
    }

    Ok(inserted)
}
