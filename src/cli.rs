use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::constants::{DEFAULT_ASSET_DIR, DEFAULT_MODEL, DEFAULT_ROOM_PATH, MODEL_EXTENSION};

/// Which deployment to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Hit-test reticle, tap to place, multi-touch manipulation
    Ar,
    /// Fixed room with a drag gizmo and constraint snap-back
    Room,
}

/// Startup parameters shared by both demos
#[derive(Debug, Clone, Parser)]
#[command(version, about = "Place and manipulate a 3D object in AR or in a virtual room")]
pub struct StartupArgs {
    /// Model identifier, resolved to <assets>/<model>.obj
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Directory holding the model files
    #[arg(long, default_value = DEFAULT_ASSET_DIR)]
    pub assets: PathBuf,

    /// Room asset for the configurator
    #[arg(long, default_value = DEFAULT_ROOM_PATH)]
    pub room: PathBuf,

    #[arg(long, value_enum, default_value_t = Variant::Room)]
    pub variant: Variant,
}

impl StartupArgs {
    /// Path of the selected model. The file is not checked here; a missing
    /// model surfaces later as a load failure.
    pub fn model_path(&self) -> PathBuf {
        self.assets
            .join(format!("{}.{}", self.model, MODEL_EXTENSION))
    }
}
