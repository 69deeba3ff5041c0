//! # Room Configurator Demo
//!
//! Loads a room and a model, centers the model on the floor and lets you drag
//! it around. Moves that leave the room or run into furniture snap back.
//!
//! ## Usage:
//! ```bash
//! cargo run --example room_configurator -- --model chair --room assets/room.obj
//! ```
//!
//! ## Controls:
//! - Left drag: move (translate mode) or turn (rotate mode) the object
//! - `T` / `R`: translate / rotate gizmo
//! - `1`-`3`: wall texture, `4`-`6`: floor texture
//! - `Esc`: quit
//!
//! Set `RUST_LOG=debug` to watch accepted and reverted moves.

use clap::Parser;
use stagehand::cli::{StartupArgs, Variant};
use stagehand::PlacementApp;

fn main() -> anyhow::Result<()> {
    stagehand::init_logging();

    let mut args = StartupArgs::parse();
    args.variant = Variant::Room;

    PlacementApp::new(&args)?.run()
}
