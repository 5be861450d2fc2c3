//! Flow star projection.

use std::collections::BTreeMap;

use log::debug;
use ziwei_config::Settings;

use super::frame::{FlowFrame, Granularity};
use super::state::FlowState;
use crate::auxiliary::{
    RuleSet, flow_chang_qu_sectors, hong_xi_sectors, huo_ling_sectors, kui_yue_sectors,
    lu_cun_sector, tian_ma_sector,
};
use crate::chart::Chart;
use crate::star::{Star, StarName};
use crate::util::fix12;

/// Flow stars by sector. Kept apart from the chart, which is never modified.
pub type FlowOverlay = BTreeMap<u8, Vec<Star>>;

fn deposit(overlay: &mut FlowOverlay, frame: FlowFrame, star: StarName, sector: u8) {
    overlay.entry(sector).or_default().push(Star::flow(star, frame));
}

/// Project the stars of every frame down to `granularity`.
///
/// Lu Cun, Qing Yang, Tuo Luo, Tian Kui and Tian Yue always follow the
/// frame stem; the remaining groups follow their `[flow]` toggles.
pub fn project_flow_stars(
    chart: &Chart,
    state: &FlowState,
    settings: &Settings,
    granularity: Granularity,
) -> FlowOverlay {
    let mut overlay = FlowOverlay::new();
    let toggles = &settings.flow;
    if !toggles.flow_stars {
        return overlay;
    }
    let rules = RuleSet::new(&settings.placement);

    for fs in state.frames().filter(|fs| granularity.includes(fs.frame)) {
        let f = fs.frame;
        let lu = lu_cun_sector(fs.stem) as i32;
        deposit(&mut overlay, f, StarName::LuCun, fix12(lu));
        deposit(&mut overlay, f, StarName::QingYang, fix12(lu + 1));
        deposit(&mut overlay, f, StarName::TuoLuo, fix12(lu - 1));

        let (kui, yue) = kui_yue_sectors(fs.stem, &rules);
        deposit(&mut overlay, f, StarName::TianKui, kui);
        deposit(&mut overlay, f, StarName::TianYue, yue);

        if toggles.chang_qu {
            let (chang, qu) = flow_chang_qu_sectors(fs.stem);
            deposit(&mut overlay, f, StarName::WenChang, chang);
            deposit(&mut overlay, f, StarName::WenQu, qu);
        }
        if toggles.ma {
            deposit(&mut overlay, f, StarName::TianMa, tian_ma_sector(fs.branch()));
        }
        if toggles.hong_xi {
            let (hong, xi) = hong_xi_sectors(fs.branch());
            deposit(&mut overlay, f, StarName::HongLuan, hong);
            deposit(&mut overlay, f, StarName::TianXi, xi);
        }
        if toggles.huo_ling {
            let (huo, ling) = huo_ling_sectors(fs.branch(), chart.hour_slot);
            deposit(&mut overlay, f, StarName::HuoXing, huo);
            deposit(&mut overlay, f, StarName::LingXing, ling);
        }
    }
    debug!(
        "projected {} flow stars at {granularity:?}",
        overlay.values().map(Vec::len).sum::<usize>()
    );
    overlay
}
