//! Velobi CLI - Command-line interface for pre-race ratings

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use velobi::config::ScoringConfig;
use velobi::core::wheel::{recommend, BetRecommendation};
use velobi::data::load_riders;
use velobi::error::{validate_partner_count, validate_riders, AppError};
use velobi::models::{RaceConditions, RaceRating, Surface};
use velobi::predictor::RatingEngine;

#[derive(Parser)]
#[command(name = "velobi")]
#[command(author, version, about = "Auto race pre-race rating CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run in interactive mode
    #[arg(short, long)]
    interactive: bool,

    /// Path to a scoring config JSON (built-in tables if omitted)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rate a field and print the recommended bet
    Predict {
        /// Path to the rider CSV
        #[arg(short, long)]
        riders: PathBuf,

        /// Venue name (e.g. 川口)
        #[arg(short, long)]
        venue: String,

        /// Wet surface (dry if omitted)
        #[arg(long)]
        wet: bool,

        /// Night session
        #[arg(long)]
        night: bool,

        /// Number of partners behind the anchor (2-6)
        #[arg(short, long)]
        partners: Option<usize>,
    },

    /// Show the venue table and scoring weights
    Venues,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("{}", "Velobi CLI v0.2.0".cyan().bold());
    println!();

    let config = ScoringConfig::load_or_default(cli.config.as_deref());

    if cli.interactive {
        run_interactive(&config)?;
    } else if let Some(command) = cli.command {
        match command {
            Commands::Predict {
                riders,
                venue,
                wet,
                night,
                partners,
            } => {
                let conditions = RaceConditions {
                    venue,
                    surface: if wet { Surface::Wet } else { Surface::Dry },
                    is_night: night,
                };
                predict_field(&config, &riders, conditions, partners)?;
            }
            Commands::Venues => {
                show_venues(&config);
            }
        }
    } else {
        println!("Use --help for usage information or --interactive for interactive mode.");
    }

    Ok(())
}

fn predict_field(
    config: &ScoringConfig,
    csv_path: &Path,
    conditions: RaceConditions,
    partners: Option<usize>,
) -> Result<()> {
    println!(
        "{}: {} ／ 路面: {} {}",
        "Rating".green(),
        conditions.venue,
        surface_label(conditions.surface),
        if conditions.is_night { "／ ナイター" } else { "" }
    );
    println!();

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Loading rider table...");

    let riders = load_riders(csv_path)
        .with_context(|| format!("Failed to load rider CSV from {:?}", csv_path))?;

    pb.finish_and_clear();

    if let Err(e) = validate_riders(&riders) {
        match e {
            AppError::InvalidRiders(errors) => {
                println!("{}", "Invalid rider rows:".red().bold());
                for row_error in &errors {
                    println!("  {}", row_error.to_string().red());
                }
                anyhow::bail!("{} invalid rider rows", errors.len());
            }
            other => return Err(other.into()),
        }
    }

    let partner_count = partners.unwrap_or(config.partner_count);
    validate_partner_count(partner_count)?;

    let engine = RatingEngine::new(config.clone());
    let rating = engine.rate(&riders, &conditions)?;
    let bet = recommend(&rating.ranking, partner_count);

    // Ranking table with component standard scores
    println!("{}", "偏差値ランキング (Rating):".yellow().bold());
    println!(
        "{:>2} {:>4} {:<10} {:<8} {:>8} {:>7} {:>7} {:>7} {:>7} {:>7}",
        "印", "車番", "名前", "所属", "スコア", "位置", "ST", "タイム", "直近", "路面"
    );
    println!("{}", "-".repeat(82));

    for entry in &rating.ranking {
        let rider = riders.iter().find(|r| r.no == entry.no);
        let comp = rating.components.iter().find(|c| c.no == entry.no);
        let (name, home) = rider
            .map(|r| (r.name.as_str(), r.home.as_str()))
            .unwrap_or(("", ""));

        if let Some(c) = comp {
            println!(
                "{:>2} {:>4} {:<10} {:<8} {:>8.2} {:>7.1} {:>7.1} {:>7.1} {:>7.1} {:>7.1}",
                if entry.mark.is_empty() {
                    " "
                } else {
                    entry.mark.as_str()
                },
                entry.no,
                truncate_name(name, 10),
                home,
                entry.score,
                c.handicap,
                c.start_timing,
                c.race_time,
                c.recent,
                c.surface
            );
        }
    }
    println!();

    // Fixed wheel bet
    println!("{}", "固定買い目 (Wheel Bet):".yellow().bold());
    match &bet {
        BetRecommendation::Formation { tickets, .. } => {
            let line = bet.formation_line().unwrap_or_default();
            println!(
                "{} {}  ({} 通り)",
                "＝".green(),
                line.green().bold(),
                tickets.len()
            );
        }
        BetRecommendation::Insufficient => {
            println!("{}", "相手不足（出走頭数不足）".yellow());
        }
    }
    println!();

    // Copy-paste block
    println!("{}", "そのままコピペ用:".yellow().bold());
    println!("{}", render_text_summary(&conditions, &rating, &bet, partner_count));

    Ok(())
}

fn show_venues(config: &ScoringConfig) {
    println!("{}", "会場補正 (Venue Table):".yellow().bold());
    println!(
        "{:<8} {:>10} {:>10} {:>16}",
        "会場", "wet_boost", "st_boost", "night_wet_extra"
    );
    println!("{}", "-".repeat(48));

    let mut venues: Vec<_> = config.venues.iter().collect();
    venues.sort_by(|a, b| a.0.cmp(b.0));

    for (name, profile) in venues {
        println!(
            "{:<8} {:>10.2} {:>10.2} {:>16.2}",
            name, profile.wet_boost, profile.st_boost, profile.night_wet_extra
        );
    }
    println!();

    println!("{}", "重み (Weights):".yellow().bold());
    let w = &config.weights;
    println!("  handicap:     {:.2}", w.handicap);
    println!("  start_timing: {:.2}", w.start_timing);
    println!("  race_time:    {:.2}", w.race_time);
    println!("  recent:       {:.2}", w.recent);
    println!("  surface:      {:.2}", w.surface);
    println!("  home:         {:.2}", w.home);
    println!("  home_bonus:   {:.2} (standard-score points)", config.home_bonus);
}

fn run_interactive(config: &ScoringConfig) -> Result<()> {
    println!("{}", "Interactive mode".green().bold());
    println!();

    let theme = ColorfulTheme::default();

    loop {
        let options = vec!["Rate a field", "Show venues", "Quit"];

        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                let csv_path: String = Input::with_theme(&theme)
                    .with_prompt("Rider CSV path")
                    .default("demos/riders.csv".to_string())
                    .interact_text()?;

                let mut venue_names: Vec<String> = config.venues.keys().cloned().collect();
                venue_names.sort();
                let venue_idx = Select::with_theme(&theme)
                    .with_prompt("Venue")
                    .items(&venue_names)
                    .default(0)
                    .interact()?;

                let wet = Select::with_theme(&theme)
                    .with_prompt("Surface")
                    .items(&["良 (dry)", "湿 (wet)"])
                    .default(0)
                    .interact()?
                    == 1;

                let is_night = Confirm::with_theme(&theme)
                    .with_prompt("Night session?")
                    .default(false)
                    .interact()?;

                let partners: usize = Input::with_theme(&theme)
                    .with_prompt("Partner count (2-6)")
                    .default(config.partner_count)
                    .interact_text()?;

                let conditions = RaceConditions {
                    venue: venue_names[venue_idx].clone(),
                    surface: if wet { Surface::Wet } else { Surface::Dry },
                    is_night,
                };

                println!();
                if let Err(e) =
                    predict_field(config, Path::new(&csv_path), conditions, Some(partners))
                {
                    println!("{}: {}", "Failed".red(), e);
                }
                println!();
            }
            1 => {
                println!();
                show_venues(config);
                println!();
            }
            2 => {
                println!("Goodbye!");
                break;
            }
            _ => {}
        }
    }

    Ok(())
}

/// Copy-paste text block for the rated field
fn render_text_summary(
    conditions: &RaceConditions,
    rating: &RaceRating,
    bet: &BetRecommendation,
    partner_count: usize,
) -> String {
    let mut lines = Vec::new();
    lines.push("――――――――――――――――――――".to_string());
    lines.push(format!(
        "会場: {} ／ 路面: {}{}",
        conditions.venue,
        surface_label(conditions.surface),
        if conditions.is_night { " ／ ナイター" } else { "" }
    ));
    lines.push("印／車番／スコア".to_string());
    for entry in &rating.ranking {
        lines.push(format!(
            "{} {}  {:7.2}",
            if entry.mark.is_empty() {
                " "
            } else {
                entry.mark.as_str()
            },
            entry.no,
            entry.score
        ));
    }
    lines.push("――――――――――――――――――――".to_string());
    match bet.formation_line() {
        Some(line) => {
            lines.push(format!(
                "固定買い目：◎軸 → 上位{}頭ウィール",
                partner_count
            ));
            lines.push(format!("＝ {}", line));
        }
        None => {
            lines.push("相手不足（出走頭数不足）".to_string());
        }
    }
    lines.push("――――――――――――――――――――".to_string());
    lines.join("\n")
}

fn surface_label(surface: Surface) -> &'static str {
    if surface.is_wet() {
        "湿"
    } else {
        "良"
    }
}

/// Truncate name to fit display width
fn truncate_name(name: &str, max_len: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_len {
        name.to_string()
    } else {
        chars[..max_len - 1].iter().collect::<String>() + "…"
    }
}
