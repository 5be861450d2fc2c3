//! Rule-variant settings for the ziwei chart engine.
//!
//! Settings are plain `Copy` values passed explicitly to every entry point;
//! there is no global default beyond `Settings::default()`.

pub mod error;
pub mod settings;
pub mod variants;

pub use error::ConfigError;
pub use settings::{DisplaySettings, FlowSettings, PlacementSettings, SiHuaSettings, Settings};
pub use variants::{
    BrightnessTable, ChangShengStart, GengSiHua, GuiSiHua, HorseBasis, LeapMonthRule,
    MasterStarTable, NobilityScheme, RenSiHua, VoidBasis, VoidMode, WuSiHua,
};
