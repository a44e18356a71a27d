//! The four animal cards shown by the demo.

use carousel_components::infinite_carousel::{Page, PageFrame, page};
use carousel_ui::interpolate;

/// One card of the demo carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animal {
    /// Label drawn on the card.
    pub name: &'static str,
    /// Card background as `0xRRGGBB`.
    pub color: u32,
}

/// Cards in display order.
pub const ANIMALS: [Animal; 4] = [
    Animal {
        name: "Leon",
        color: 0x2969B0,
    },
    Animal {
        name: "Cat",
        color: 0xFBA026,
    },
    Animal {
        name: "Elephant",
        color: 0xE14938,
    },
    Animal {
        name: "Unicorn",
        color: 0x9365B8,
    },
];

/// Scale of a card that sits a full page away from the center.
pub const MIN_SCALE: f32 = 0.7;

/// What a card renders to in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimalCard {
    /// The animal on the card.
    pub animal: Animal,
    /// Uniform scale, 1.0 when centered.
    pub scale: f32,
}

/// Scale for a page given where the strip currently is.
///
/// Cards grow to full size as they reach the center and shrink to
/// [`MIN_SCALE`] one page width to either side.
pub fn card_scale(frame: &PageFrame) -> f32 {
    let center = frame.page_offset;
    interpolate(
        frame.animated_position,
        [center - frame.page_width, center, center + frame.page_width],
        [MIN_SCALE, 1.0, MIN_SCALE],
    )
}

/// Page render functions for [`ANIMALS`].
pub fn animal_pages() -> Vec<Page<AnimalCard>> {
    ANIMALS
        .iter()
        .map(|&animal| {
            page(move |frame| AnimalCard {
                animal,
                scale: card_scale(frame),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(animated_position: f32, page_offset: f32) -> PageFrame {
        PageFrame {
            animated_position,
            page_width: 150.0,
            page_offset,
            padded_index: 2,
            canonical_index: 0,
            duplicate: false,
        }
    }

    #[test]
    fn centered_card_is_full_size() {
        assert_eq!(card_scale(&frame(-225.0, -225.0)), 1.0);
    }

    #[test]
    fn neighbours_shrink_and_far_cards_stay_small() {
        assert_eq!(card_scale(&frame(-375.0, -225.0)), MIN_SCALE);
        assert_eq!(card_scale(&frame(-900.0, -225.0)), MIN_SCALE);
        let halfway = card_scale(&frame(-300.0, -225.0));
        assert!((halfway - 0.85).abs() < 1e-6, "halfway = {halfway}");
    }

    #[test]
    fn one_page_per_animal() {
        let pages = animal_pages();
        assert_eq!(pages.len(), ANIMALS.len());
        let card = (pages[2])(&frame(-225.0, -225.0));
        assert_eq!(card.animal.name, "Elephant");
        assert_eq!(card.scale, 1.0);
    }
}
