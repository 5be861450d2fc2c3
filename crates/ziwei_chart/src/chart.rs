//! Birth chart assembly.
//!
//! `compute_chart` runs the placement stages in a fixed order:
//!
//! 1. validate the slot and longitude, apply true solar time and the
//!    late-Zi day rollover
//! 2. lunar conversion through the supplied [`LunarConverter`]
//! 3. ring (Life/Body sectors, palace names and stems) and bureau
//! 4. major stars, then every auxiliary rule
//! 5. brightness and Si Hua over the placed stars
//! 6. god cycles, decade and small limits, master stars, labels

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use ziwei_config::Settings;
use ziwei_lunar::{Branch, LunarConverter, LunarDate, Stem};
use ziwei_time::{CivilDate, CivilDateTime, TimeError, hour_slot_for_hour, true_solar_time};

use crate::auxiliary::{Bucket, RuleInputs, RuleSet, lu_cun_sector, place_auxiliary_stars};
use crate::brightness::brightness;
use crate::bureau::Bureau;
use crate::error::ChartError;
use crate::gods::{GodCycle, GodInputs, GodStar, place_gods};
use crate::limits::{decade_ranges, small_limits};
use crate::masters::{body_master, life_master, zi_dou};
use crate::palace::PalaceName;
use crate::primary::place_major_stars;
use crate::ring::{Ring, effective_month, palace_stem};
use crate::sihua::SiHua;
use crate::star::{Star, StarName};

/// Gender of the native; with the year polarity it sets rotation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            _ => Err(format!("unknown gender: {s}")),
        }
    }
}

/// Everything a chart is computed from, apart from the settings.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthInput {
    pub name: String,
    /// Birth instant in China Standard Time.
    pub instant: CivilDateTime,
    /// Two-hour slot 0 (Zi) ..= 11 (Hai).
    pub hour_slot: u8,
    pub gender: Gender,
    /// Degrees east; used only when true solar time is enabled.
    pub longitude: Option<f64>,
}

impl BirthInput {
    /// Input known only to the hour slot. The instant is the slot midpoint.
    pub fn from_slot(
        name: impl Into<String>,
        date: CivilDate,
        hour_slot: u8,
        gender: Gender,
    ) -> Self {
        Self {
            name: name.into(),
            instant: CivilDateTime::at_midnight(date).add_minutes(hour_slot as i64 * 120),
            hour_slot,
            gender,
            longitude: None,
        }
    }

    /// Input with a clock time; the slot is derived from the hour.
    pub fn from_instant(name: impl Into<String>, instant: CivilDateTime, gender: Gender) -> Self {
        Self {
            name: name.into(),
            instant,
            hour_slot: hour_slot_for_hour(instant.hour),
            gender,
            longitude: None,
        }
    }

    pub fn with_longitude(mut self, longitude: f64) -> Self {
        self.longitude = Some(longitude);
        self
    }
}

/// One of the twelve sectors with everything placed in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palace {
    /// Sector index, equal to the branch index.
    pub index: u8,
    pub branch: Branch,
    pub stem: Stem,
    pub name: PalaceName,
    pub is_body: bool,
    /// Decade age range `(start, end)`.
    pub decade: (u8, u8),
    pub small_limits: Vec<u8>,
    pub major: Vec<Star>,
    pub auxiliary: Vec<Star>,
    pub inauspicious: Vec<Star>,
    pub minor: Vec<Star>,
    pub gods: Vec<GodStar>,
}

impl Palace {
    fn empty(index: u8, ring: &Ring, year_stem: Stem) -> Self {
        Self {
            index,
            branch: Branch::from_index(index as i32),
            stem: palace_stem(year_stem, index),
            name: ring.name_at(index),
            is_body: index == ring.body,
            decade: (0, 0),
            small_limits: Vec::new(),
            major: Vec::new(),
            auxiliary: Vec::new(),
            inauspicious: Vec::new(),
            minor: Vec::new(),
            gods: Vec::new(),
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<Star> {
        match bucket {
            Bucket::Major => &mut self.major,
            Bucket::Auxiliary => &mut self.auxiliary,
            Bucket::Inauspicious => &mut self.inauspicious,
            Bucket::Minor => &mut self.minor,
        }
    }

    /// Every star in the palace, majors first.
    pub fn stars(&self) -> impl Iterator<Item = &Star> {
        self.major
            .iter()
            .chain(&self.auxiliary)
            .chain(&self.inauspicious)
            .chain(&self.minor)
    }

    pub fn find(&self, name: StarName) -> Option<&Star> {
        self.stars().find(|s| s.name == name)
    }

    /// The god of `cycle` sitting here.
    pub fn god(&self, cycle: GodCycle) -> Option<GodStar> {
        self.gods.iter().copied().find(|g| g.cycle == cycle)
    }

    /// e.g. `戊寅 命宫`
    pub fn title(&self) -> String {
        format!("{}{} {}", self.stem, self.branch, self.name)
    }
}

/// Display strings computed with the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartLabels {
    /// `阳历 2000年2月5日 00:00`
    pub solar: String,
    /// `农历 2000年 正月 初一 壬子时`
    pub lunar: String,
    /// `真太阳时 07:48`, when a correction was applied.
    pub true_solar: Option<String>,
    /// Year, month, day and hour pillars separated by spaces.
    pub pillars: String,
}

/// A complete birth chart. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub name: String,
    pub gender: Gender,
    /// Birth instant as supplied.
    pub birth: CivilDateTime,
    /// Birth instant after the true solar correction, if one was applied.
    pub true_solar: Option<CivilDateTime>,
    pub lunar: LunarDate,
    /// Lunar month used for placement, after leap-month folding.
    pub month: u8,
    pub hour_slot: u8,
    pub yang_year: bool,
    pub bureau: Bureau,
    pub life: u8,
    pub body: u8,
    pub life_master: StarName,
    pub body_master: StarName,
    pub zi_dou: Branch,
    pub si_hua: SiHua,
    pub palaces: [Palace; 12],
    pub labels: ChartLabels,
}

impl Chart {
    pub fn year_stem(&self) -> Stem {
        self.lunar.year.stem
    }

    pub fn year_branch(&self) -> Branch {
        self.lunar.year.branch
    }

    /// Decades and Chang Sheng run clockwise.
    pub fn clockwise(&self) -> bool {
        is_clockwise(self.yang_year, self.gender)
    }

    pub fn palace(&self, name: PalaceName) -> &Palace {
        &self.palaces[Ring { life: self.life, body: self.body }.sector_of(name) as usize]
    }

    pub fn life_palace(&self) -> &Palace {
        &self.palaces[self.life as usize]
    }

    pub fn body_palace(&self) -> &Palace {
        &self.palaces[self.body as usize]
    }

    /// Sector holding a birth star.
    pub fn sector_of(&self, name: StarName) -> Option<u8> {
        self.palaces
            .iter()
            .find(|p| p.find(name).is_some())
            .map(|p| p.index)
    }

    /// All sectors holding `name` (Xun Kong and Jie Kong can appear twice).
    pub fn sectors_of(&self, name: StarName) -> Vec<u8> {
        self.palaces
            .iter()
            .filter(|p| p.find(name).is_some())
            .map(|p| p.index)
            .collect()
    }

    /// Palace whose decade contains nominal `age`.
    pub fn decade_palace(&self, age: u8) -> Option<&Palace> {
        self.palaces
            .iter()
            .find(|p| (p.decade.0..=p.decade.1).contains(&age))
    }

    /// Last age covered by the decade limits.
    pub fn max_age(&self) -> u8 {
        self.palaces.iter().map(|p| p.decade.1).max().unwrap_or(0)
    }
}

const fn is_clockwise(yang_year: bool, gender: Gender) -> bool {
    matches!(
        (yang_year, gender),
        (true, Gender::Male) | (false, Gender::Female)
    )
}

/// Apply true solar time and the late-Zi rollover.
///
/// Returns the civil date to convert, the hour slot and the corrected
/// instant if a correction was made.
fn resolve_birth_time(
    input: &BirthInput,
    settings: &Settings,
) -> Result<(CivilDate, u8, Option<CivilDateTime>), ChartError> {
    if input.hour_slot > 11 {
        return Err(ChartError::InvalidHourSlot(input.hour_slot));
    }
    if let Some(lon) = input.longitude.filter(|lon| !lon.is_finite()) {
        return Err(TimeError::NonFiniteLongitude(lon).into());
    }

    let (instant, slot, corrected) = match (settings.true_solar_time, input.longitude) {
        (true, Some(lon)) => {
            let t = true_solar_time(input.instant, lon)?;
            debug!("true solar time {} -> {t} at {lon} E", input.instant);
            (t, hour_slot_for_hour(t.hour), Some(t))
        }
        (true, None) => {
            warn!("true solar time requested without a longitude; no correction applied");
            (input.instant, input.hour_slot, None)
        }
        (false, _) => (input.instant, input.hour_slot, None),
    };

    let date = if !settings.early_late_zi && instant.hour == 23 && slot == 0 {
        instant.date.add_days(1)
    } else {
        instant.date
    };
    Ok((date, slot, corrected))
}

fn build_labels(
    birth: &CivilDateTime,
    lunar: &LunarDate,
    corrected: Option<CivilDateTime>,
) -> ChartLabels {
    let d = birth.date;
    ChartLabels {
        solar: format!(
            "阳历 {}年{}月{}日 {:02}:{:02}",
            d.year, d.month, d.day, birth.hour, birth.minute
        ),
        lunar: format!("农历 {}", lunar.label()),
        true_solar: corrected.map(|t| format!("真太阳时 {:02}:{:02}", t.hour, t.minute)),
        pillars: format!(
            "{} {} {} {}",
            lunar.year, lunar.month, lunar.day_pillar, lunar.hour
        ),
    }
}

/// Compute a birth chart.
///
/// Fails on a slot above 11, a non-finite longitude or a date the converter
/// cannot handle; never returns a partial chart.
pub fn compute_chart<C: LunarConverter + ?Sized>(
    converter: &C,
    input: &BirthInput,
    settings: &Settings,
) -> Result<Chart, ChartError> {
    let (date, slot, corrected) = resolve_birth_time(input, settings)?;
    let lunar = converter.convert(date, slot)?;

    let month = effective_month(&lunar.day, settings.leap_month);
    let year_stem = lunar.year.stem;
    let year_branch = lunar.year.branch;
    let yang_year = year_stem.is_yang();
    let clockwise = is_clockwise(yang_year, input.gender);

    let ring = Ring::new(month, slot);
    let life_stem = palace_stem(year_stem, ring.life);
    let bureau = Bureau::resolve(life_stem, Branch::from_index(ring.life as i32));
    debug!(
        "chart {}: month {month} slot {slot} life {} body {} {bureau}",
        input.name, ring.life, ring.body
    );

    let mut palaces: [Palace; 12] =
        std::array::from_fn(|i| Palace::empty(i as u8, &ring, year_stem));

    for (star, sector) in place_major_stars(lunar.day.day, bureau.number()) {
        palaces[sector as usize].major.push(Star::new(star));
    }

    let inputs = RuleInputs {
        year_stem,
        year_branch,
        month,
        day: lunar.day.day,
        hour: slot,
        life: ring.life,
        body: ring.body,
    };
    let rules = RuleSet::new(&settings.placement);
    let placed = place_auxiliary_stars(&inputs, &rules);
    debug!("placed {} auxiliary stars", placed.len());
    for p in placed {
        palaces[p.sector as usize].bucket_mut(p.bucket).push(Star::new(p.star));
    }

    let si_hua = SiHua::resolve(year_stem, &settings.si_hua);
    for palace in &mut palaces {
        let sector = palace.index;
        for bucket in [Bucket::Major, Bucket::Auxiliary, Bucket::Inauspicious, Bucket::Minor] {
            for star in palace.bucket_mut(bucket).iter_mut() {
                star.brightness = brightness(settings.placement.brightness, star.name, sector);
                if bucket != Bucket::Minor {
                    star.transformation = si_hua.of(star.name);
                }
            }
        }
    }

    let gods = place_gods(&GodInputs {
        bureau,
        year_branch,
        lu_cun: lu_cun_sector(year_stem),
        clockwise,
        chang_sheng: settings.placement.chang_sheng,
    });
    for (sector, god) in gods {
        palaces[sector as usize].gods.push(god);
    }

    let decades = decade_ranges(ring.life, bureau, clockwise);
    let max_age = decades.iter().map(|r| r.1).max().unwrap_or(0);
    let limits = small_limits(year_branch, input.gender == Gender::Male, max_age);
    for (palace, (decade, ages)) in palaces.iter_mut().zip(decades.into_iter().zip(limits)) {
        palace.decade = decade;
        palace.small_limits = ages;
    }

    let chart = Chart {
        name: input.name.clone(),
        gender: input.gender,
        birth: input.instant,
        true_solar: corrected,
        labels: build_labels(&input.instant, &lunar, corrected),
        lunar,
        month,
        hour_slot: slot,
        yang_year,
        bureau,
        life: ring.life,
        body: ring.body,
        life_master: life_master(
            settings.placement.master_star,
            Branch::from_index(ring.life as i32),
            year_branch,
        ),
        body_master: body_master(year_branch),
        zi_dou: zi_dou(month, slot),
        si_hua,
        palaces,
    };
    debug!(
        "chart {} complete: {} {}",
        chart.name, chart.labels.pillars, chart.labels.lunar
    );
    Ok(chart)
}
