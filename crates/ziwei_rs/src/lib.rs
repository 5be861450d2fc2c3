//! Convenience wrapper for the ziwei chart engine.
//!
//! Binds the engine to the bundled table-driven lunar converter so callers
//! can go from a civil date to a chart and its flow frames without handling
//! a `LunarConverter` themselves.
//!
//! # Quick start
//!
//! ```rust
//! use ziwei_rs::*;
//!
//! let settings = Settings::default();
//! let birth = CivilDate::new(2000, 2, 5).unwrap();
//! let chart = compute_chart("example", birth, 0, Gender::Male, &settings, None).unwrap();
//! assert_eq!(chart.bureau, Bureau::Earth);
//!
//! let query = CivilDate::new(2024, 2, 10).unwrap();
//! let state = compute_flow_state(&chart, query, birth, 6).unwrap();
//! let overlay = project_flow_stars(&chart, &state, &settings, Granularity::Year);
//! assert!(!overlay.is_empty());
//! ```

pub mod convenience;

pub use convenience::{
    compute_chart, compute_chart_at, compute_flow_state, lunar_date, project_flow_stars, si_hua,
};

// Re-export the types the convenience functions take and return.
pub use ziwei_chart::{
    Brightness, Bureau, Chart, ChartError, ChartLabels, FlowFrame, FlowOverlay, FlowState,
    FrameState, Gender, GodCycle, GodStar, Granularity, Palace, PalaceName, SiHua, Star,
    StarKind, StarName, Transformation,
};
pub use ziwei_config::{ConfigError, Settings};
pub use ziwei_lunar::{Branch, GanZhi, LunarDate, LunarDay, Stem};
pub use ziwei_time::{CivilDate, CivilDateTime, TimeError};
