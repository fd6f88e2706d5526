/// Characters that end a parameter name.
pub(super) fn is_terminator(c: char) -> bool {
    matches!(c, ',' | ' ' | ')')
}

/// One `prefix` + name occurrence in the query text.
pub(super) struct Occurrence<'a> {
    /// Byte offset of the prefix character.
    pub(super) start: usize,
    /// Byte offset just past the name; trailing whitespace stays in the text.
    pub(super) end: usize,
    /// Name as written, possibly with leading whitespace.
    pub(super) raw: &'a str,
}

/// Every parameter occurrence in `query`, left to right.
pub(super) fn occurrences(query: &str, prefix: char) -> Vec<Occurrence<'_>> {
    let mut found = Vec::new();
    let mut offset = 0;
    while let Some(pos) = query[offset..].find(prefix) {
        let start = offset + pos;
        let name_start = start + prefix.len_utf8();
        let after = &query[name_start..];
        let len = after.find(is_terminator).unwrap_or(after.len());
        let end = name_start + after[..len].trim_end().len();
        found.push(Occurrence {
            start,
            end,
            raw: &query[name_start..end],
        });
        offset = end;
    }
    found
}
