/// Next primary key after the current maximum: `max + 1`, or `1` for an
/// empty table.
pub fn next_id_after(max: Option<i64>) -> i64 {
    match max {
        Some(max) if max > 0 => max + 1,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_starts_at_one() {
        assert_eq!(next_id_after(None), 1);
        assert_eq!(next_id_after(Some(0)), 1);
    }

    #[test]
    fn follows_current_maximum() {
        assert_eq!(next_id_after(Some(7)), 8);
    }
}
