//! A short shift at the front desk: check guests in and out, send up
//! room service, then snapshot the hotel and restore it.
//!
//! ```text
//! cargo run -p front-desk                 # built-in rooms, ./hotel_data.txt
//! cargo run -p front-desk -- hotel.json   # rooms and snapshot path from a config file
//! RUST_LOG=innkeeper=debug cargo run -p front-desk
//! ```

use innkeeper::prelude::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("innkeeper=info,front_desk=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

fn load_config(arg: Option<String>) -> Result<HotelConfig, HotelError> {
    match arg {
        Some(path) => HotelConfig::from_json_file(path),
        None => Ok(HotelConfig {
            rooms: vec![
                RoomSeed { number: RoomNumber(101), room_type: RoomType::Standard },
                RoomSeed { number: RoomNumber(201), room_type: RoomType::Suite },
            ],
            ..HotelConfig::default()
        }),
    }
}

// ---------------------------------------------------------------------------
// The shift
// ---------------------------------------------------------------------------

fn run_shift(hotel: &mut Hotel) -> Result<Vec<String>, HotelError> {
    let mut log = Vec::new();

    let room = hotel.check_in_guest(Guest::new("John"), RoomType::Standard)?;
    log.push(format!("John checked into {room}"));
    let standard = room.number();

    match hotel.check_in_guest(Guest::new("Jane"), RoomType::Standard) {
        Ok(room) => log.push(format!("Jane checked into {room}")),
        Err(e) => log.push(format!("Jane turned away: {e}")),
    }

    hotel.check_out_guest(standard)?;
    log.push(format!("Room {standard} checked out"));

    let suite = hotel.check_in_guest(Guest::new("John"), RoomType::Suite)?.number();
    log.push(hotel.provide_room_service(suite)?);
    log.push(hotel.provide_food(suite, "pizza")?);

    let saved = hotel.save()?;
    log.push(format!("Saved {saved} rooms to {}", hotel.snapshot_path().display()));

    let restored = hotel.load()?;
    log.push(format!("Restored {restored} rooms"));
    log.extend(hotel.list_rooms());

    Ok(log)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = load_config(std::env::args().nth(1))?;
    let mut hotel = Hotel::from_config(config)?;

    match run_shift(&mut hotel) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "shift aborted");
            Err(e.into())
        }
    }
}
