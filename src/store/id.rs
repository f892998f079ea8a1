//! Record identifier generation.

use chrono::Utc;
use rand::Rng;

/// Generate a new record identifier.
///
/// Format: `{timestamp_ms}-{random_hex}`. The timestamp prefix keeps ids
/// roughly creation-ordered; the suffix keeps ids created in the same
/// millisecond distinct.
pub fn new_id() -> String {
    let now = Utc::now();
    let random: [u8; 4] = rand::thread_rng().gen();
    format!("{}-{}", now.timestamp_millis(), hex::encode(random))
}
