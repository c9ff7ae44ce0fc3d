//! Command-line demo: play a few shots, then save the game.

use std::path::PathBuf;

use clap::Parser;
use grid_golf::{ClubKind, CourseSize, Direction, GameMode, SaveRecord, SaveStore, SessionBuilder};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Play a few shots of grid golf and save the result",
    long_about = None
)]
struct Args {
    /// Game mode: dice or speed
    #[arg(short, long, default_value = "dice")]
    mode: GameMode,

    /// Course size: short, medium or long
    #[arg(short, long, default_value = "short")]
    size: CourseSize,

    /// Seed for the course and dice. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// SQLite file to save into
    #[arg(long, value_name = "PATH", default_value = "gridgolf.db")]
    db: PathBuf,

    /// Golfer's name
    #[arg(short, long, default_value = "Golfer1")]
    player: String,

    /// Shots to play before saving
    #[arg(long, default_value_t = 2)]
    shots: u32,

    /// Print the save record as JSON
    #[arg(long)]
    json: bool,
}

/// Clubs used by the demo, in order.
const CLUB_ROTATION: [ClubKind; 3] = [ClubKind::Driver, ClubKind::Iron, ClubKind::Putter];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed {}", seed);

    let mut store = SaveStore::open(&args.db)?;
    let player_id = store.create_player(&args.player)?;

    let mut session = SessionBuilder::new()
        .mode(args.mode)
        .size(args.size)
        .seed(seed)
        .player_name(args.player.as_str())
        .build();
    let course_id = store.save_course(session.course())?;

    println!("{session}");

    for (club, _) in CLUB_ROTATION.iter().cycle().zip(0..args.shots) {
        let shot = session.take_shot(*club, Direction::NORTH);
        println!(
            "{}: distance {}, ball at {}, strokes {}",
            shot.club, shot.distance, shot.position, shot.strokes
        );
        if !shot.in_bounds() {
            println!("  out of bounds, ball stays at {}", shot.from);
        }
        if let Some(hazard) = shot.hazard {
            println!("  {} at {}, +{} penalty", hazard.terrain, hazard.from, hazard.penalty);
        }
        println!("{session}");

        if session.end_turn() {
            println!("Ball in the hole! Total strokes: {}", session.calculate_score());
            break;
        }
    }

    let record = SaveRecord::capture(player_id, &session);
    let save_id = store.save_game(&record)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("Game state saved as save {save_id} (course {course_id}). Exiting demo.");
    }

    Ok(())
}
