pub type Id = u64;

/// Next id for a collection: one past the largest id present, or 1 when empty.
///
/// Records without an id in the file are read as `0` and still take part.
/// Returns `None` once the largest id is `Id::MAX`.
pub fn next_id<I>(ids: I) -> Option<Id>
where
    I: IntoIterator<Item = Id>,
{
    ids.into_iter().max().unwrap_or(0).checked_add(1)
}

/// Truthiness check used for required text fields: missing, empty and
/// whitespace-only values are all rejected.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
