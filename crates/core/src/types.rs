use uuid::Uuid;

/// Note identifiers are opaque strings assigned by the store.
pub type NoteId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh note identifier.
///
/// UUIDv7 keeps identifiers sortable by creation time, which matches the
/// listing order.
pub fn new_note_id() -> NoteId {
    Uuid::now_v7().to_string()
}
