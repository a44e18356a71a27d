//! Nearest-page selection on gesture release.

use super::padding::PagePadding;

/// Padded slot whose center is nearest to `position`.
///
/// Returns `None` while the layout has not produced a page width.
///
/// # Panics
///
/// Panics if the computed slot lies outside the padded sequence. Scroll bounds
/// never extend past the padded strip, so this indicates a broken invariant.
pub(crate) fn nearest_page(
    position: f32,
    container_width: f32,
    page_width: f32,
    padding: &PagePadding,
) -> Option<usize> {
    if page_width <= 0.0 || !page_width.is_finite() {
        return None;
    }
    let page_center = (container_width / 2.0).round();
    let relative = (position + page_center) / page_width;
    let page = (relative.floor() - 1.0).abs() as usize;
    assert!(
        page < padding.padded_len(),
        "nearest page {page} outside {} padded slots (position {position}, page width {page_width})",
        padding.padded_len()
    );
    Some(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infinite_carousel::padding::page_center_offset;

    fn four() -> PagePadding {
        PagePadding::new(4).expect("valid page count")
    }

    #[test]
    fn resting_positions_round_to_themselves() {
        let padding = four();
        for page in 1..=6 {
            let position = page_center_offset(page, 150.0);
            assert_eq!(nearest_page(position, 300.0, 150.0, &padding), Some(page));
        }
    }

    #[test]
    fn crossing_half_a_page_advances() {
        let padding = four();
        let rest = page_center_offset(2, 150.0);
        assert_eq!(nearest_page(rest - 74.0, 300.0, 150.0, &padding), Some(2));
        assert_eq!(nearest_page(rest - 76.0, 300.0, 150.0, &padding), Some(3));
        assert_eq!(nearest_page(rest + 74.0, 300.0, 150.0, &padding), Some(2));
        assert_eq!(nearest_page(rest + 76.0, 300.0, 150.0, &padding), Some(1));
    }

    #[test]
    fn left_edge_rounds_to_first_duplicate() {
        assert_eq!(nearest_page(0.0, 300.0, 150.0, &four()), Some(0));
    }

    #[test]
    fn zero_page_width_is_inert() {
        assert_eq!(nearest_page(-100.0, 0.0, 0.0, &four()), None);
    }

    #[test]
    #[should_panic(expected = "outside 8 padded slots")]
    fn runaway_position_is_an_invariant_violation() {
        nearest_page(-5000.0, 300.0, 150.0, &four());
    }
}
