use bevy_reflect::Reflect;
use serde::Serialize;

use crate::constants::{CARD_HEIGHT, CARD_WIDTH};
use crate::positions::CardPosition;

/// Pixel placement of a card's top left corner inside a container, ready for
/// an absolutely positioned renderer.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Reflect)]
pub struct PixelPosition {
    pub left: f32,
    pub top: f32,
    /// clockwise rotation in degrees, unchanged from the normalized position
    pub rotation: f32,
    pub z_order: i32,
}

/// Converts a normalized position into pixel geometry for the given
/// container size, keeping the whole card footprint inside the container.
///
/// The valid range for the card center is `[footprint / 2, 1 - footprint / 2]`
/// per axis.  When the card is larger than the container that range inverts
/// and the center pins to the lower bound; the result is degenerate but
/// defined, there are no failure cases.  Nothing is cached, call again
/// whenever the container size changes.
pub fn to_pixels(
    position: &CardPosition,
    container_width: f32,
    container_height: f32,
) -> PixelPosition {
    let width_percent = CARD_WIDTH / container_width;
    let height_percent = CARD_HEIGHT / container_height;

    let min_x = width_percent / 2.;
    let max_x = 1. - width_percent / 2.;
    let min_y = height_percent / 2.;
    let max_y = 1. - height_percent / 2.;

    // min/max chain instead of clamp, the bounds may invert for oversized cards
    let clamped_x = position.x.value().min(max_x).max(min_x);
    let clamped_y = position.y.value().min(max_y).max(min_y);

    PixelPosition {
        left: clamped_x * container_width - CARD_WIDTH / 2.,
        top: clamped_y * container_height - CARD_HEIGHT / 2.,
        rotation: position.rotation,
        z_order: position.z_order,
    }
}

#[cfg(test)]
mod tests {
    use super::to_pixels;
    use crate::positions::CardPosition;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_center_projection() {
        let position = CardPosition::new(0.5, 0.5, 0., 7, false);
        let pixels = to_pixels(&position, 800., 600.);
        assert!((pixels.left - 360.).abs() < EPS);
        assert!((pixels.top - 236.).abs() < EPS);
        assert_eq!(pixels.rotation, 0.);
        assert_eq!(pixels.z_order, 7);
    }

    #[test]
    fn test_corners_stay_inside_container() {
        let top_left = to_pixels(&CardPosition::new(0., 0., 0., 0, false), 800., 600.);
        assert!(top_left.left.abs() < EPS);
        assert!(top_left.top.abs() < EPS);

        let bottom_right = to_pixels(&CardPosition::new(1., 1., 0., 0, false), 800., 600.);
        assert!((bottom_right.left - 720.).abs() < EPS);
        assert!((bottom_right.top - 472.).abs() < EPS);
    }

    #[test]
    fn test_rotation_passes_through_unclamped() {
        let position = CardPosition::new(0.5, 0.5, 450., -3, true);
        let pixels = to_pixels(&position, 800., 600.);
        assert_eq!(pixels.rotation, 450.);
        assert_eq!(pixels.z_order, -3);
    }

    #[test]
    fn test_oversized_card_pins_to_lower_bound() {
        // a 40x64 container is smaller than the card footprint, the center
        // range inverts and every coordinate resolves to footprint / 2
        let position = CardPosition::new(1., 1., 0., 0, false);
        let pixels = to_pixels(&position, 40., 64.);
        assert!(pixels.left.abs() < EPS);
        assert!(pixels.top.abs() < EPS);
    }
}
