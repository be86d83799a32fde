/// Advances a 1-based (line, column) pair over a consumed slice of
/// source text.
///
/// A slice without line breaks only moves the column. A slice with `k`
/// breaks moves the line down by `k` and resets the column to just past
/// whatever followed the last break. Multi-line tokens (block comments,
/// triple-quoted strings) go through this same path as everything else.
pub fn advance(line: u32, column: u32, consumed: &str) -> (u32, u32) {
    let breaks = consumed.matches('\n').count() as u32;

    if breaks == 0 {
        (line, column + consumed.chars().count() as u32)
    } else {
        let tail = consumed.rsplit('\n').next().unwrap_or("");
        (line + breaks, tail.chars().count() as u32 + 1)
    }
}
