/// Slice a line into trimmed cells using fixed column widths.
///
/// Widths count characters. Each width consumes that many characters from the
/// front of what is left of `line`; a line that runs out early yields partial
/// or empty cells instead of failing. The result always has `widths.len()`
/// cells.
///
/// # Example
/// ```rust
/// use scaffold_util::table::tokenize_row;
///
/// let cells = tokenize_row("no-group  v1", &[10, 9, 6]);
/// assert_eq!(cells, vec!["no-group", "v1", ""]);
/// ```
pub fn tokenize_row(line: &str, widths: &[usize]) -> Vec<String> {
    let mut remaining = line.chars();

    widths
        .iter()
        .map(|&width| {
            let cell: String = remaining.by_ref().take(width).collect();
            cell.trim().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_padded_line() {
        let cells = tokenize_row("foo       v1       foo   ", &[10, 9, 6]);
        assert_eq!(cells, vec!["foo", "v1", "foo"]);
    }

    #[test]
    fn short_line_yields_empty_trailing_cells() {
        let cells = tokenize_row("abc", &[2, 4, 4]);
        assert_eq!(cells, vec!["ab", "c", ""]);
    }

    #[test]
    fn empty_line_yields_one_empty_cell_per_width() {
        assert_eq!(tokenize_row("", &[3, 3]), vec!["", ""]);
    }

    #[test]
    fn no_widths_no_cells() {
        assert!(tokenize_row("anything", &[]).is_empty());
    }

    #[test]
    fn widths_count_characters_not_bytes() {
        let cells = tokenize_row("café  ok", &[6, 2]);
        assert_eq!(cells, vec!["café", "ok"]);
    }

    #[test]
    fn trailing_content_beyond_widths_is_ignored() {
        assert_eq!(tokenize_row("ab cd ef", &[3, 3]), vec!["ab", "cd"]);
    }
}
