use std::f32::consts::TAU;

use tracing::debug;

use crate::cards::Card;
use crate::constants::{
    CARDS_PER_PLAYER, CARD_GAP, CARD_HEIGHT, CARD_WIDTH, DRAW_PILE_Z_BASE, GROUP_SIZE,
    OVERLAP_SPACING, SEAT_RADIUS, SHOWN_INWARD_OFFSET, SHOWN_SIDE_OFFSET, SHOWN_Z_BASE,
};
use crate::positions::{CardPosition, PositionMap};

/// Start phase: the whole deck stacked face down at the table center, with
/// the deck order as stacking order (later cards on top).
pub fn start_layout(deck: &[Card]) -> PositionMap {
    debug!("stacking {} cards at the table center", deck.len());

    deck.iter()
        .enumerate()
        .map(|(index, card)| (card.id(), CardPosition::new(0.5, 0.5, 0., index as i32, false)))
        .collect()
}

/// Deal phase: every seat receives [CARDS_PER_PLAYER] consecutive cards from
/// deck order, the first [GROUP_SIZE] of them face down (the stock), the rest
/// face up (the shown group).  Cards left over after serving all seats stay
/// stacked at the center as the face down draw pile, above everything else.
///
/// Seats sit on a circle around the table center, seat 0 at the top, and
/// their cards are rotated to face the center.  Container dimensions scale
/// the card footprint and must be positive for meaningful output; degenerate
/// sizes degenerate the result without failing.
pub fn deal_layout(
    deck: &[Card],
    num_players: usize,
    container_width: f32,
    container_height: f32,
    overlap: bool,
) -> PositionMap {
    debug!(
        "dealing {} cards to {} seats (overlap: {})",
        deck.len(),
        num_players,
        overlap
    );

    let width_percent = CARD_WIDTH / container_width;
    let height_percent = CARD_HEIGHT / container_height;

    let mut positions = PositionMap::with_capacity(deck.len());
    for (index, card) in deck.iter().enumerate() {
        let seat = index / CARDS_PER_PLAYER;
        let position = if seat < num_players {
            seat_card_position(index, seat, num_players, width_percent, height_percent, overlap)
        } else {
            // draw pile
            let pile_index = (index - num_players * CARDS_PER_PLAYER) as i32;
            CardPosition::new(0.5, 0.5, 0., DRAW_PILE_Z_BASE + pile_index, false)
        };
        positions.insert(card.id(), position);
    }
    positions
}

/// A rotation strictly within (45°, 135°) or (225°, 315°) swaps the card's
/// on-screen width and height.  Spacing and the shown group offsets pick the
/// footprint axis accordingly.
fn is_sideways(rotation: f32) -> bool {
    let normalized = rotation.rem_euclid(360.);
    (normalized > 45. && normalized < 135.) || (normalized > 225. && normalized < 315.)
}

/// Distance between neighboring card centers of a hand group.
fn group_spacing(sideways: bool, overlap: bool, width_percent: f32, height_percent: f32) -> f32 {
    let footprint = if sideways { height_percent } else { width_percent };
    if overlap {
        footprint * OVERLAP_SPACING
    } else {
        footprint + CARD_GAP
    }
}

fn seat_card_position(
    index: usize,
    seat: usize,
    num_players: usize,
    width_percent: f32,
    height_percent: f32,
    overlap: bool,
) -> CardPosition {
    let card_in_hand = index % CARDS_PER_PLAYER;
    let shown = card_in_hand >= GROUP_SIZE;
    let index_in_group = card_in_hand % GROUP_SIZE;

    // seat 0 sits at the top of the circle, the rest follow clockwise
    let angle = TAU * seat as f32 / num_players as f32 - TAU / 4.;
    let seat_x = 0.5 + angle.cos() * SEAT_RADIUS;
    let seat_y = 0.5 + angle.sin() * SEAT_RADIUS;

    // cards face the table center
    let rotation = angle.to_degrees() + 90.;
    let sideways = is_sideways(rotation);
    let spacing = group_spacing(sideways, overlap, width_percent, height_percent);

    // groups spread perpendicularly to the seat's radius, middle card centered
    let group_offset = (index_in_group as f32 - 1.) * spacing;
    let mut offset_x = -angle.sin() * group_offset;
    let mut offset_y = angle.cos() * group_offset;

    if shown {
        // shown cards shift sideways and towards the center, so the stock
        // underneath stays visible
        let (screen_width, screen_height) = if sideways {
            (height_percent, width_percent)
        } else {
            (width_percent, height_percent)
        };
        let side = SHOWN_SIDE_OFFSET * screen_width;
        let inward = SHOWN_INWARD_OFFSET * screen_height;
        offset_x += -angle.sin() * side - angle.cos() * inward;
        offset_y += angle.cos() * side - angle.sin() * inward;
    }

    let z_order = if shown {
        SHOWN_Z_BASE + index as i32
    } else {
        index as i32
    };

    CardPosition::new(seat_x + offset_x, seat_y + offset_y, rotation, z_order, shown)
}
