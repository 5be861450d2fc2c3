//! Zi Wei Dou Shu chart engine.
//!
//! This crate provides:
//! - The twelve-sector ring: Life/Body sectors, palace names and stems
//! - Five-element bureau and the fourteen major stars
//! - Auxiliary and minor stars through a registry of independent rules
//! - Si Hua transformations and brightness grading
//! - The four god cycles, decade and small limits, Life/Body masters
//! - Flow frames (decade, year, month, day, hour) and flow star projection
//!
//! The lunar calendar is reached only through
//! [`ziwei_lunar::LunarConverter`]; the engine itself is pure and
//! deterministic.

pub mod auxiliary;
pub mod brightness;
pub mod bureau;
pub mod chart;
pub mod error;
pub mod flow;
pub mod gods;
pub mod limits;
pub mod masters;
pub mod palace;
pub mod primary;
pub mod ring;
pub mod sihua;
pub mod star;
pub mod util;

pub use auxiliary::{AUXILIARY_RULES, Bucket, Placement, RuleInputs, RuleSet};
pub use brightness::brightness;
pub use bureau::Bureau;
pub use chart::{BirthInput, Chart, ChartLabels, Gender, Palace, compute_chart};
pub use error::ChartError;
pub use flow::{
    ALL_FLOW_FRAMES, FlowFrame, FlowOverlay, FlowState, FrameState, Granularity,
    compute_flow_state, project_flow_stars,
};
pub use gods::{GodCycle, GodStar};
pub use palace::{ALL_PALACE_NAMES, PalaceName};
pub use sihua::SiHua;
pub use star::{
    ALL_STAR_NAMES, ALL_TRANSFORMATIONS, Brightness, Star, StarKind, StarName, Transformation,
};
pub use util::{fix10, fix12};
