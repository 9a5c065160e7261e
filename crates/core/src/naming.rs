//! Display names for floors and generated room names.

/// Prefix stripped from block names when generating room names.
const BLOCK_NAME_PREFIX: &str = "Block ";

/// Generated room numbers are two digits, so a floor holds at most 99 rooms.
pub const MAX_ROOMS_PER_FLOOR: usize = 99;

/// Ordinal floor label, e.g. `1st Floor`, `12th Floor`, `23rd Floor`.
pub fn floor_label(floor_number: i32) -> String {
    let suffix = match (floor_number.rem_euclid(100), floor_number.rem_euclid(10)) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{floor_number}{suffix} Floor")
}

/// Short block code used in room names: `"Block A"` becomes `"A"`.
pub fn block_prefix(block_name: &str) -> &str {
    block_name
        .strip_prefix(BLOCK_NAME_PREFIX)
        .unwrap_or(block_name)
}

/// Name for the `sequence`-th (1-based) room on a floor, e.g. `A-203`.
pub fn room_name(block_name: &str, floor_number: i32, sequence: usize) -> String {
    format!("{}-{floor_number}{sequence:02}", block_prefix(block_name))
}

/// Names for rooms `existing + 1 ..= target` on a floor. Empty when the
/// floor already has `target` rooms or more.
pub fn rooms_to_add(
    block_name: &str,
    floor_number: i32,
    existing: usize,
    target: usize,
) -> Vec<String> {
    (existing + 1..=target)
        .map(|seq| room_name(block_name, floor_number, seq))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_labels_use_english_ordinals() {
        assert_eq!(floor_label(1), "1st Floor");
        assert_eq!(floor_label(2), "2nd Floor");
        assert_eq!(floor_label(3), "3rd Floor");
        assert_eq!(floor_label(4), "4th Floor");
        assert_eq!(floor_label(0), "0th Floor");
    }

    #[test]
    fn teens_take_th() {
        assert_eq!(floor_label(11), "11th Floor");
        assert_eq!(floor_label(12), "12th Floor");
        assert_eq!(floor_label(13), "13th Floor");
        assert_eq!(floor_label(21), "21st Floor");
        assert_eq!(floor_label(112), "112th Floor");
    }

    #[test]
    fn block_prefix_strips_leading_word() {
        assert_eq!(block_prefix("Block A"), "A");
        assert_eq!(block_prefix("North"), "North");
    }

    #[test]
    fn room_names_are_zero_padded() {
        assert_eq!(room_name("Block A", 2, 3), "A-203");
        assert_eq!(room_name("Block B", 1, 12), "B-112");
    }

    #[test]
    fn rooms_to_add_continues_after_existing() {
        assert_eq!(
            rooms_to_add("Block C", 4, 2, 4),
            vec!["C-403".to_string(), "C-404".to_string()]
        );
        assert!(rooms_to_add("Block C", 4, 5, 3).is_empty());
    }
}
