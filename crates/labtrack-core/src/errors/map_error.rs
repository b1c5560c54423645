/// Per-row mapping errors. The batch mapper logs these and skips the row;
/// they never abort a batch load.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MapError {
    #[error("no constructor registered for equipment kind {kind:?}")]
    UnknownKind { kind: String },

    #[error("record {asset_id:?} is missing required field {field:?}")]
    MissingField {
        asset_id: String,
        field: &'static str,
    },
}
