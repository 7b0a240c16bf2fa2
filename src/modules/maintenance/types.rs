/// A 2xx maintenance response with a `null` or `{}` body still counts as a
/// failure; a well-formed payload reporting zero deletions does not.
pub(crate) enum PurgeOutcome {
    Purged(serde_json::Value),
    Empty,
}

impl PurgeOutcome {
    pub(crate) fn classify(payload: serde_json::Value) -> Self {
        match &payload {
            serde_json::Value::Null => Self::Empty,
            serde_json::Value::Object(map) if map.is_empty() => Self::Empty,
            _ => Self::Purged(payload),
        }
    }
}
