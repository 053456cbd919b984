use serde::{Deserialize, Serialize};

/// Body of a successful brew response
///
/// The field names are part of the wire contract and must not change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoffeeReady {
    /// The fixed success message, [`crate::HOT_COFFEE_MESSAGE`]
    pub message: String,
    /// Preparation timestamp, `YYYY-MM-DDTHH:MM:SS±HHMM`
    pub prepared: String,
}
