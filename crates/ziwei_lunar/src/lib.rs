//! Chinese lunar calendar support for the ziwei chart engine.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches and the sixty-pair cycle
//! - A packed month-length table for lunar years 1900..=2100
//! - Gregorian → lunar date conversion with leap months
//! - Year, month, day and hour pillars
//! - The `LunarConverter` trait and its bundled table implementation

pub mod converter;
pub mod error;
pub mod lunar;
pub mod lunar_data;
pub mod pillars;
pub mod sexagenary;

pub use converter::{HOUR_SLOTS, LunarConverter, LunarDate, TableLunarConverter};
pub use error::LunarError;
pub use lunar::{LunarDay, MONTH_NAMES, day_label, solar_to_lunar};
pub use pillars::{day_pillar, hour_pillar, lunar_month_stem, month_pillar, yin_month_stem};
pub use sexagenary::{ALL_BRANCHES, ALL_STEMS, Branch, GanZhi, Stem};
