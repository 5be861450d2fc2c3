//! The `Settings` schema and its TOML loader.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::variants::{
    BrightnessTable, ChangShengStart, GengSiHua, GuiSiHua, HorseBasis, LeapMonthRule,
    MasterStarTable, NobilityScheme, RenSiHua, VoidBasis, VoidMode, WuSiHua,
};

/// Every rule choice the chart engine reads.
///
/// `Settings::default()` is the documented fallback table; files only need
/// to list the keys they change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub leap_month: LeapMonthRule,
    /// Keep 23:00-24:00 on the civil day of birth (late Zi). When false the
    /// hour rolls into the next day.
    pub early_late_zi: bool,
    /// Correct the birth instant to local mean solar time. Needs a longitude.
    pub true_solar_time: bool,
    pub placement: PlacementSettings,
    pub si_hua: SiHuaSettings,
    pub flow: FlowSettings,
    pub display: DisplaySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            leap_month: LeapMonthRule::Current,
            early_late_zi: true,
            true_solar_time: false,
            placement: PlacementSettings::default(),
            si_hua: SiHuaSettings::default(),
            flow: FlowSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

/// Star-placement variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlacementSettings {
    pub horse_basis: HorseBasis,
    pub void_basis: VoidBasis,
    pub void_mode: VoidMode,
    pub nobility: NobilityScheme,
    pub brightness: BrightnessTable,
    pub master_star: MasterStarTable,
    pub chang_sheng: ChangShengStart,
}

/// Per-stem Si Hua variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiHuaSettings {
    pub geng: GengSiHua,
    pub wu: WuSiHua,
    pub ren: RenSiHua,
    pub gui: GuiSiHua,
}

/// Flow-star projection toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlowSettings {
    /// Master switch; when false no flow stars are projected.
    pub flow_stars: bool,
    pub ma: bool,
    pub huo_ling: bool,
    pub hong_xi: bool,
    pub chang_qu: bool,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            flow_stars: true,
            ma: true,
            huo_ling: true,
            hong_xi: true,
            chang_qu: true,
        }
    }
}

/// Presentation toggles. Carried for front ends; the engine ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySettings {
    pub liu_nian: bool,
    pub xiao_xian: bool,
    pub liu_yue: bool,
    pub arrows: bool,
    pub compact: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            liu_nian: false,
            xiao_xian: true,
            liu_yue: false,
            arrows: true,
            compact: false,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a TOML settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let settings = Self::from_toml_str(&text)?;
        debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Render as TOML, every key spelled out.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}
