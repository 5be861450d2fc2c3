//! Time-layered flow frames over a birth chart.

mod frame;
mod project;
mod state;

pub use frame::{ALL_FLOW_FRAMES, FlowFrame, Granularity};
pub use project::{FlowOverlay, project_flow_stars};
pub use state::{FlowState, FrameState, compute_flow_state, dou_jun};
