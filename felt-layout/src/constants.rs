/// base card footprint in pixels, horizontal
pub const CARD_WIDTH: f32 = 80.;
/// base card footprint in pixels, vertical
pub const CARD_HEIGHT: f32 = 128.;

/// size of the face down stock group and of the face up shown group
pub const GROUP_SIZE: usize = 3;
/// cards dealt to each seat (stock group plus shown group)
pub const CARDS_PER_PLAYER: usize = 2 * GROUP_SIZE;

/// distance of the seat centers from the table center (relative to container size)
pub const SEAT_RADIUS: f32 = 0.4;
/// gap between side by side cards of a hand (relative to container size)
pub const CARD_GAP: f32 = 0.01;
/// fraction of the card footprint kept between card centers in overlap mode
pub const OVERLAP_SPACING: f32 = 0.3;
/// sideways offset of the shown group, as a fraction of the card footprint
pub const SHOWN_SIDE_OFFSET: f32 = 0.2;
/// offset of the shown group towards the table center, as a fraction of the card footprint
pub const SHOWN_INWARD_OFFSET: f32 = 0.15;

/// z-order band of shown cards, above the stock cards of every seat
pub const SHOWN_Z_BASE: i32 = 1000;
/// z-order band of the undealt draw pile, above all dealt cards
pub const DRAW_PILE_Z_BASE: i32 = 2000;

/// container estimate used until the first resize
pub const DEFAULT_CONTAINER_WIDTH: f32 = 800.;
pub const DEFAULT_CONTAINER_HEIGHT: f32 = 600.;
/// seats around the table unless configured otherwise
pub const DEFAULT_PLAYERS: usize = 4;
