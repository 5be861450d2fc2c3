//! Flow frames and projection granularity.

use serde::{Deserialize, Serialize};

/// A time layer laid over the birth chart, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FlowFrame {
    Decade,
    Year,
    Month,
    Day,
    Hour,
}

/// All frames in nesting order.
pub const ALL_FLOW_FRAMES: [FlowFrame; 5] = [
    FlowFrame::Decade,
    FlowFrame::Year,
    FlowFrame::Month,
    FlowFrame::Day,
    FlowFrame::Hour,
];

impl FlowFrame {
    /// One-character prefix used in flow star labels.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Decade => "大",
            Self::Year => "年",
            Self::Month => "月",
            Self::Day => "日",
            Self::Hour => "时",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Decade => "大限",
            Self::Year => "流年",
            Self::Month => "流月",
            Self::Day => "流日",
            Self::Hour => "流时",
        }
    }
}

/// How deep a projection goes. `Birth` projects nothing; each further level
/// includes every coarser frame.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    #[default]
    Birth,
    Decade,
    Year,
    Month,
    Day,
    Hour,
}

impl Granularity {
    /// The finest frame at this granularity, `None` for `Birth`.
    pub const fn finest(self) -> Option<FlowFrame> {
        match self {
            Self::Birth => None,
            Self::Decade => Some(FlowFrame::Decade),
            Self::Year => Some(FlowFrame::Year),
            Self::Month => Some(FlowFrame::Month),
            Self::Day => Some(FlowFrame::Day),
            Self::Hour => Some(FlowFrame::Hour),
        }
    }

    /// Whether `frame` is projected at this granularity.
    pub fn includes(self, frame: FlowFrame) -> bool {
        self.finest().is_some_and(|finest| frame <= finest)
    }
}

impl std::str::FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "birth" => Ok(Self::Birth),
            "decade" => Ok(Self::Decade),
            "year" => Ok(Self::Year),
            "month" => Ok(Self::Month),
            "day" => Ok(Self::Day),
            "hour" => Ok(Self::Hour),
            other => Err(format!("unknown granularity: {other}")),
        }
    }
}
