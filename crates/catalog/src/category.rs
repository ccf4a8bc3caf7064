/// A product category: unique code plus a human-readable name.
///
/// Categories are immutable once created; the API only reads and creates
/// them, never updates or deletes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub code: String,
    pub name: String,
}
