use clap::{Parser, ValueEnum};
use felt_layout::cards::unicode_row;
use felt_layout::constants::CARDS_PER_PLAYER;
use felt_layout::{CardTable, GamePhase};

#[derive(Copy, Clone, ValueEnum)]
enum Phase {
    /// all cards stacked face down at the table center
    Start,
    /// hands dealt out to the seats, leftover cards on the draw pile
    Deal,
}

impl From<Phase> for GamePhase {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Start => GamePhase::Start,
            Phase::Deal => GamePhase::Deal,
        }
    }
}

/// Lays out a full deck on a virtual table and prints where every card goes.
#[derive(Parser)]
struct Cli {
    /// phase of the table to lay out
    #[arg(value_enum, default_value = "deal")]
    phase: Phase,
    /// number of seats around the table
    #[arg(short, long, default_value_t = 4)]
    players: usize,
    /// container width in pixels
    #[arg(long, default_value_t = 800.)]
    width: f32,
    /// container height in pixels
    #[arg(long, default_value_t = 600.)]
    height: f32,
    /// overlap the cards of a hand instead of spreading them out
    #[arg(short, long)]
    overlap: bool,
    /// print the full position map as JSON instead of the table summary
    #[arg(long)]
    json: bool,
}

fn show_table(table: &CardTable) {
    let positions = table.positions();

    match table.phase() {
        GamePhase::Start => {
            println!("table: {} cards stacked at the center", table.deck().len());
        }
        GamePhase::Deal => {
            for seat in 0..table.num_players() {
                let begin = seat * CARDS_PER_PLAYER;
                if begin >= table.deck().len() {
                    println!("seat {}: no cards left", seat);
                    continue;
                }
                let end = table.deck().len().min(begin + CARDS_PER_PLAYER);
                let hand = &table.deck()[begin..end];
                println!(
                    "seat {}: {}  (rotated {:.0}°)",
                    seat,
                    unicode_row(hand.iter().map(|card| (card, positions[&card.id()].face_up))),
                    positions[&hand[0].id()].rotation.rem_euclid(360.),
                );
            }
            let undealt = table
                .deck()
                .len()
                .saturating_sub(table.num_players() * CARDS_PER_PLAYER);
            if undealt > 0 {
                println!("draw pile: {} cards", undealt);
            }
        }
    }

    let (width, height) = table.container();
    println!();
    println!("projection into {}x{} pixels:", width, height);
    for card in table.deck().iter().take(3) {
        let pixels = table.pixel_position(&card.id()).unwrap();
        println!(
            "{:>4}: left {:6.1}, top {:6.1}, rotation {:5.1}, z {}",
            card.short_str(),
            pixels.left,
            pixels.top,
            pixels.rotation,
            pixels.z_order,
        );
    }
}

fn position_map_json(table: &CardTable) -> String {
    let cards: serde_json::Map<String, serde_json::Value> = table
        .deck()
        .iter()
        .map(|card| {
            let id = card.id();
            let value = serde_json::json!({
                "position": &table.positions()[&id],
                "pixels": table.pixel_position(&id),
            });
            (id, value)
        })
        .collect();
    serde_json::to_string_pretty(&cards).unwrap()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Cli::parse();

    let mut table = CardTable::new();
    table.set_phase(args.phase.into());
    table.set_num_players(args.players);
    table.set_overlap(args.overlap);
    table.resize(args.width, args.height);

    if args.json {
        println!("{}", position_map_json(&table));
    } else {
        show_table(&table);
    }
}
