use roster_store::StudentRecord;

/// Case-insensitive substring match of `query` against the record's name or
/// student id. Absent fields compare as the empty string, so an empty query
/// matches every record.
pub fn matches_query(record: &StudentRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    contains_folded(record.full_name_or_empty(), &needle)
        || contains_folded(record.student_id_or_empty(), &needle)
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
