use serde::{Deserialize, Serialize};

// The registry record behind an activity name. `max_participants` is carried
// and serialized but never checked against the roster length; the seed table
// ships it and the API exposes it as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}
