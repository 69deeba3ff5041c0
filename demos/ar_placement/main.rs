//! # AR Placement Demo
//!
//! Simulates an AR session on the desktop: the floor plane stands in for a
//! detected surface and the cursor for the device's aim.
//!
//! ## Usage:
//! ```bash
//! cargo run --example ar_placement -- --model chair
//! ```
//!
//! ## Controls:
//! - Move the cursor: aim the reticle
//! - Click: place the object, or re-anchor it to the reticle
//! - Horizontal drag / two-finger touch: rotate, pinch to scale
//! - `Space`: end or restart the session
//! - `Esc`: quit

use clap::Parser;
use stagehand::cli::{StartupArgs, Variant};
use stagehand::PlacementApp;

fn main() -> anyhow::Result<()> {
    stagehand::init_logging();

    let mut args = StartupArgs::parse();
    args.variant = Variant::Ar;

    PlacementApp::new(&args)?.run()
}
