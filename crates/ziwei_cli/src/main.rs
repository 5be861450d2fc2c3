use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::debug;
use serde::Serialize;
use ziwei_chart::{
    ALL_PALACE_NAMES, ALL_TRANSFORMATIONS, BirthInput, Chart, FlowOverlay, FlowState, Gender,
    Granularity, Palace, SiHua, Star, compute_chart, compute_flow_state, project_flow_stars,
};
use ziwei_config::Settings;
use ziwei_lunar::{ALL_STEMS, LunarConverter, Stem, TableLunarConverter};
use ziwei_time::{CivilDate, CivilDateTime, hour_slot_for_hour};

#[derive(Parser)]
#[command(name = "ziwei", about = "Zi Wei Dou Shu chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD), China Standard Time
    #[arg(long)]
    date: String,
    /// Clock time (HH:MM); the hour slot is derived from it
    #[arg(long, conflicts_with = "slot")]
    time: Option<String>,
    /// Two-hour slot 0 (Zi) ..= 11 (Hai)
    #[arg(long)]
    slot: Option<u8>,
    /// male / female
    #[arg(long, default_value = "male")]
    gender: String,
    /// Longitude in degrees east (used with true_solar_time)
    #[arg(long, allow_hyphen_values = true)]
    longitude: Option<f64>,
    /// Name shown in the chart header
    #[arg(long, default_value = "")]
    name: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a birth chart
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Settings file (TOML); defaults apply when omitted
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Flow frames and flow stars for a query date
    Flow {
        #[command(flatten)]
        birth: BirthArgs,
        /// Query date (YYYY-MM-DD)
        #[arg(long)]
        query: String,
        /// Query hour slot 0..=11
        #[arg(long, default_value = "0")]
        query_slot: u8,
        /// birth, decade, year, month, day or hour
        #[arg(long, default_value = "year")]
        granularity: String,
        #[arg(long)]
        settings: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Si Hua row for a heavenly stem
    Sihua {
        /// Stem as 甲, jia or 0..=9
        stem: String,
        #[arg(long)]
        settings: Option<PathBuf>,
    },
    /// Lunar date and four pillars of a civil date
    Lunar {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Hour slot 0..=11
        #[arg(long, default_value = "0")]
        slot: u8,
        #[arg(long)]
        json: bool,
    },
    /// Print the effective settings as TOML
    Settings {
        #[arg(long)]
        settings: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct FlowOutput<'a> {
    state: &'a FlowState,
    overlay: &'a FlowOverlay,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            birth,
            settings,
            json,
        } => {
            let settings = load_settings(settings.as_ref());
            let chart = require_chart(&birth, &settings);
            if json {
                print_json(&chart);
            } else {
                print_chart(&chart, &settings);
            }
        }

        Commands::Flow {
            birth,
            query,
            query_slot,
            granularity,
            settings,
            json,
        } => {
            let settings = load_settings(settings.as_ref());
            let granularity: Granularity = granularity.parse().unwrap_or_else(|e| {
                eprintln!("{e}");
                eprintln!("Valid: birth, decade, year, month, day, hour");
                std::process::exit(1);
            });
            let chart = require_chart(&birth, &settings);
            let query = require_date(&query);
            let state = compute_flow_state(
                &TableLunarConverter,
                &chart,
                chart.birth.date,
                query,
                query_slot,
            )
            .unwrap_or_else(|e| {
                eprintln!("Flow computation failed: {e}");
                std::process::exit(1);
            });
            let overlay = project_flow_stars(&chart, &state, &settings, granularity);
            if json {
                print_json(&FlowOutput {
                    state: &state,
                    overlay: &overlay,
                });
            } else {
                print_flow(&chart, &state, &overlay);
            }
        }

        Commands::Sihua { stem, settings } => {
            let settings = load_settings(settings.as_ref());
            let stem = parse_stem(&stem);
            let row = SiHua::resolve(stem, &settings.si_hua);
            let cells: Vec<String> = ALL_TRANSFORMATIONS
                .iter()
                .map(|t| format!("{}{}", row.star(*t), t.name()))
                .collect();
            println!("{stem}: {}", cells.join(" "));
        }

        Commands::Lunar { date, slot, json } => {
            let date = require_date(&date);
            let lunar = TableLunarConverter.convert(date, slot).unwrap_or_else(|e| {
                eprintln!("Lunar conversion failed: {e}");
                std::process::exit(1);
            });
            if json {
                print_json(&lunar);
            } else {
                println!("{}", lunar.label());
                println!(
                    "Pillars: {} {} {} {}",
                    lunar.year, lunar.month, lunar.day_pillar, lunar.hour
                );
            }
        }

        Commands::Settings { settings } => {
            let settings = load_settings(settings.as_ref());
            match settings.to_toml_string() {
                Ok(text) => print!("{text}"),
                Err(e) => {
                    eprintln!("Failed to serialize settings: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn load_settings(path: Option<&PathBuf>) -> Settings {
    let Some(path) = path else {
        return Settings::default();
    };
    Settings::load(path).unwrap_or_else(|e| {
        eprintln!("Failed to load settings: {e}");
        std::process::exit(1);
    })
}

fn require_date(s: &str) -> CivilDate {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid date '{s}': {e}");
        std::process::exit(1);
    })
}

fn require_instant(date: CivilDate, time: &str) -> CivilDateTime {
    let text = format!("{date}T{time}");
    text.parse().unwrap_or_else(|e| {
        eprintln!("Invalid time '{time}': {e}");
        std::process::exit(1);
    })
}

fn require_chart(args: &BirthArgs, settings: &Settings) -> Chart {
    let gender: Gender = args.gender.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        eprintln!("Valid: male, female");
        std::process::exit(1);
    });
    let date = require_date(&args.date);
    let mut input = match (&args.time, args.slot) {
        (Some(time), _) => {
            let instant = require_instant(date, time);
            debug!("slot {} from {instant}", hour_slot_for_hour(instant.hour));
            BirthInput::from_instant(args.name.clone(), instant, gender)
        }
        (None, Some(slot)) => BirthInput::from_slot(args.name.clone(), date, slot, gender),
        (None, None) => {
            eprintln!("Either --time or --slot is required");
            std::process::exit(1);
        }
    };
    input.longitude = args.longitude;
    compute_chart(&TableLunarConverter, &input, settings).unwrap_or_else(|e| {
        eprintln!("Chart computation failed: {e}");
        std::process::exit(1);
    })
}

fn parse_stem(s: &str) -> Stem {
    if let Ok(i) = s.parse::<i32>() {
        if (0..10).contains(&i) {
            return Stem::from_index(i);
        }
    }
    ALL_STEMS
        .iter()
        .copied()
        .find(|st| st.name() == s || st.pinyin().eq_ignore_ascii_case(s))
        .unwrap_or_else(|| {
            eprintln!("Invalid stem: {s}");
            eprintln!("Valid: 甲..癸, jia..gui, 0..9");
            std::process::exit(1);
        })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Failed to encode JSON: {e}");
            std::process::exit(1);
        }
    }
}

fn star_list(stars: &[Star]) -> String {
    stars.iter().map(Star::label).collect::<Vec<_>>().join(" ")
}

fn print_palace(p: &Palace, settings: &Settings) {
    let body = if p.is_body { " [身]" } else { "" };
    println!("{}{body}  {}~{}", p.title(), p.decade.0, p.decade.1);
    if !p.major.is_empty() {
        println!("  主星: {}", star_list(&p.major));
    }
    if !p.auxiliary.is_empty() {
        println!("  辅星: {}", star_list(&p.auxiliary));
    }
    if !p.inauspicious.is_empty() {
        println!("  煞星: {}", star_list(&p.inauspicious));
    }
    if settings.display.compact {
        return;
    }
    if !p.minor.is_empty() {
        println!("  杂曜: {}", star_list(&p.minor));
    }
    let gods: Vec<&str> = p.gods.iter().map(|g| g.name()).collect();
    println!("  神煞: {}", gods.join(" "));
    if settings.display.xiao_xian {
        let ages: Vec<String> = p.small_limits.iter().map(u8::to_string).collect();
        println!("  小限: {}", ages.join(" "));
    }
}

fn print_chart(chart: &Chart, settings: &Settings) {
    if !chart.name.is_empty() {
        println!("{} ({})", chart.name, chart.gender);
    }
    println!("{}", chart.labels.solar);
    if let Some(ts) = &chart.labels.true_solar {
        println!("{ts}");
    }
    println!("{}", chart.labels.lunar);
    println!("四柱: {}", chart.labels.pillars);
    println!(
        "{}  命主: {}  身主: {}  子斗: {}",
        chart.bureau, chart.life_master, chart.body_master, chart.zi_dou
    );
    println!();
    for name in ALL_PALACE_NAMES {
        print_palace(chart.palace(name), settings);
    }
}

fn print_flow(chart: &Chart, state: &FlowState, overlay: &FlowOverlay) {
    println!("{}", chart.labels.lunar);
    println!("Query: {} (age {})", state.query.label(), state.age);
    for fs in state.frames() {
        let palace = &chart.palaces[fs.sector as usize];
        println!(
            "{}: {}  @ {}{} ({})",
            fs.frame.name(),
            fs.label,
            palace.stem,
            palace.branch,
            palace.name
        );
    }
    if overlay.is_empty() {
        return;
    }
    println!();
    for (sector, stars) in overlay {
        let palace = &chart.palaces[*sector as usize];
        println!("{}: {}", palace.title(), star_list(stars));
    }
}
