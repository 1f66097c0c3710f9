/// Horizontal bar like `████████░░░░` for `ratio` in `0.0..=1.0`.
///
/// Any positive ratio fills at least one cell so tiny slices stay visible.
#[must_use]
pub fn ratio_bar(ratio: f64, width: usize) -> String {
    let ratio = if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let mut filled = ((ratio * width as f64).round() as usize).min(width);
    if ratio > 0.0 && filled == 0 && width > 0 {
        filled = 1;
    }
    let empty = width.saturating_sub(filled);

    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Bar for a percentage in `0..=100`, as carried by budget progress and
/// breakdown shares.
#[must_use]
pub fn percent_bar(percent: f64, width: usize) -> String {
    ratio_bar(percent / 100.0, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_fill_proportionally() {
        assert_eq!(ratio_bar(0.5, 10), "█████░░░░░");
        assert_eq!(percent_bar(100.0, 4), "████");
        assert_eq!(percent_bar(0.0, 4), "░░░░");
    }

    #[test]
    fn out_of_range_ratios_are_clamped() {
        assert_eq!(ratio_bar(3.0, 3), "███");
        assert_eq!(ratio_bar(-1.0, 3), "░░░");
        assert_eq!(ratio_bar(f64::NAN, 3), "░░░");
    }

    #[test]
    fn small_positive_share_shows_one_cell() {
        assert_eq!(percent_bar(0.4, 10), "█░░░░░░░░░");
    }
}
