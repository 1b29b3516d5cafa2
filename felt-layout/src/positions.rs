use std::collections::HashMap;

use bevy_reflect::Reflect;
use serde::{Deserialize, Serialize};

/// Coordinate relative to the container size, saturated into [0, 1].
///
/// The only ways to obtain one are [Percentage::new] and the [From]
/// conversion, both of which clamp, so every value read back through
/// [Percentage::value] is already in range.  Deserialization goes through
/// the same conversion.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(from = "f32")]
pub struct Percentage(f32);

impl Percentage {
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0., 1.))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl From<f32> for Percentage {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

/// Renderable state of a single card: normalized center coordinates,
/// rotation, stacking order and face visibility.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Reflect)]
pub struct CardPosition {
    pub x: Percentage,
    pub y: Percentage,
    /// clockwise rotation in degrees; not normalized, consumers interpret it
    /// modulo 360
    pub rotation: f32,
    /// stacking priority relative to the other cards on the table
    pub z_order: i32,
    pub face_up: bool,
}

impl CardPosition {
    /// Builds a position, saturating `x` and `y` into the unit interval;
    /// rotation, z-order and face state are passed through unchanged.
    pub fn new(x: f32, y: f32, rotation: f32, z_order: i32, face_up: bool) -> Self {
        Self {
            x: Percentage::new(x),
            y: Percentage::new(y),
            rotation,
            z_order,
            face_up,
        }
    }
}

/// Lookup from stable card id (see [Card::id](crate::cards::Card::id)) to the
/// card's current position.  Layouts recompute the whole map at once; there
/// is one entry per card of the deck.
pub type PositionMap = HashMap<String, CardPosition>;
