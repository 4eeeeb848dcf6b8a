use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use kaal_rs::{
    AyanamshaSystem, ExportFormat, FestivalCategory, FestivalDate, GeoLocation, Instant, Kaal,
    MuhurtaResult, MuhurtaType, Nakshatra, PanchangRequest, PanchangSnapshot, Region,
    render_festivals,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kaal", about = "Hindu panchang, muhurta and festival calculator")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Latitude in degrees, north positive
    #[arg(long, global = true, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, global = true, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Elevation above sea level in metres
    #[arg(long, global = true)]
    elevation: Option<f64>,
    /// Ayanamsha system (lahiri, raman, kp, ...)
    #[arg(long, global = true)]
    system: Option<AyanamshaSystem>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Panchang for an instant
    Panchang {
        /// UTC instant (YYYY-MM-DD, YYYY-MM-DDThh:mm:ss or RFC 3339); default now
        #[arg(long, value_parser = parse_when)]
        date: Option<DateTime<Utc>>,
        /// Birth nakshatra for tarabala (name or 1-27)
        #[arg(long)]
        birth_nakshatra: Option<Nakshatra>,
        /// Also search the exact end times of tithi, nakshatra, yoga and karana
        #[arg(long)]
        transitions: bool,
    },
    /// Compare every ayanamsha system at an instant
    Ayanamsha {
        /// UTC instant; default now
        #[arg(long, value_parser = parse_when)]
        date: Option<DateTime<Utc>>,
    },
    /// Sidereal positions of the nine grahas
    Planets {
        /// UTC instant; default now
        #[arg(long, value_parser = parse_when)]
        date: Option<DateTime<Utc>>,
    },
    /// Search auspicious windows for an activity
    Muhurta {
        /// marriage, business, travel, education, property, general, custom
        #[arg(long = "type", default_value = "general")]
        muhurta_type: MuhurtaType,
        /// Start of the search; default now
        #[arg(long, value_parser = parse_when)]
        start: Option<DateTime<Utc>>,
        /// End of the search; default start + 7 days
        #[arg(long, value_parser = parse_when)]
        end: Option<DateTime<Utc>>,
        /// Activity length in minutes
        #[arg(long, default_value = "60")]
        duration: u32,
        /// Only the best window
        #[arg(long, conflicts_with = "calendar")]
        best: bool,
        /// GOOD-or-better windows grouped by day
        #[arg(long)]
        calendar: bool,
    },
    /// Festivals of a year, month or date
    Festivals {
        /// Gregorian year; default the current year
        #[arg(long)]
        year: Option<i32>,
        /// Restrict to one month (1-12)
        #[arg(long, conflicts_with = "on")]
        month: Option<u32>,
        /// Festivals starting on this date (YYYY-MM-DD)
        #[arg(long)]
        on: Option<NaiveDate>,
        /// Regions, comma separated (all_india, bengal, kerala, ...)
        #[arg(long, value_delimiter = ',')]
        region: Vec<Region>,
        /// Categories, comma separated (major, regional, spiritual, ...)
        #[arg(long, value_delimiter = ',')]
        category: Vec<FestivalCategory>,
        /// Also print the sunrise tithi and lunar month of --on
        #[arg(long, requires = "on")]
        day_info: bool,
    },
    /// Export a year's festivals
    Export {
        /// Gregorian year; default the current year
        #[arg(long)]
        year: Option<i32>,
        /// ical, json or csv
        #[arg(long, default_value = "ical")]
        format: ExportFormat,
        /// Regions, comma separated
        #[arg(long, value_delimiter = ',')]
        region: Vec<Region>,
        /// Categories, comma separated
        #[arg(long, value_delimiter = ',')]
        category: Vec<FestivalCategory>,
        /// Output file; default stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

/// Accepts RFC 3339, `YYYY-MM-DDThh:mm:ss` (UTC) or a bare date (00:00 UTC).
fn parse_when(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(chrono::NaiveTime::MIN).and_utc())
        .map_err(|_| format!("expected YYYY-MM-DD[Thh:mm:ss[Z]], got {s}"))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_kaal(config: Option<&PathBuf>) -> Result<Kaal> {
    match config {
        Some(path) => {
            Kaal::load(path).with_context(|| format!("loading config {}", path.display()))
        }
        None => Ok(Kaal::new()),
    }
}

/// Command-line coordinates, else the configured default location.
fn location(cli: &Cli, kaal: &Kaal) -> Result<GeoLocation> {
    let base = kaal.default_location()?;
    let loc = match (cli.lat, cli.lon) {
        (Some(lat), Some(lon)) => GeoLocation::new(lat, lon, cli.elevation.unwrap_or(0.0))?,
        (None, None) => GeoLocation::new(
            base.latitude_deg,
            base.longitude_deg,
            cli.elevation.unwrap_or(base.elevation_m),
        )?,
        _ => bail!("--lat and --lon must be given together"),
    };
    Ok(loc)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_panchang(s: &PanchangSnapshot) {
    let loc = s.location;
    println!("Instant:     {}", s.timestamp.to_rfc3339());
    println!(
        "Location:    {:.4}, {:.4} ({:.0} m)",
        loc.latitude_deg, loc.longitude_deg, loc.elevation_m
    );
    println!("Ayanamsha:   {} {:.4} deg", s.ayanamsha_system, s.ayanamsha_deg);
    println!(
        "Tithi:       {} ({:.3}), about {:.1} h left",
        s.tithi.name, s.tithi.value, s.tithi.remaining_hours
    );
    println!(
        "Nakshatra:   {} pada {}, lord {}, about {:.1} h left",
        s.nakshatra.name,
        s.nakshatra.pada,
        s.nakshatra.lord.name(),
        s.nakshatra.remaining_hours
    );
    println!("Yoga:        {}", s.yoga.name);
    println!("Karana:      {}", s.karana.name);
    println!("Vaar:        {}", s.vaar.name());
    println!("Masa:        {} ({})", s.masa.name(), s.ayana.name());
    println!("Season:      {}", s.season);
    println!("Sunrise:     {}", s.sun.sunrise.to_rfc3339());
    println!("Sunset:      {}", s.sun.sunset.to_rfc3339());
    println!("Day length:  {:.2} h", s.sun.day_length_hours);
    let approx = if s.moon.approximate { " (approximate)" } else { "" };
    println!("Moonrise:    {}{approx}", s.moon.moonrise.to_rfc3339());
    println!("Moonset:     {}{approx}", s.moon.moonset.to_rfc3339());
    println!(
        "Moon phase:  {} {:.1}% lit",
        s.moon_phase.name, s.moon_phase.illumination_percent
    );
    println!("LMT:         {}", s.local_mean_time);
    println!("LST:         {:.4} h", s.local_sidereal_time_hours);
    for w in &s.windows {
        let mark = if w.inauspicious { "avoid" } else { "good" };
        println!(
            "  {:<14} {} - {} [{mark}]",
            w.name,
            w.start.format("%H:%M"),
            w.end.format("%H:%M")
        );
    }
    println!(
        "Tarabala:    {} ({})  Chandrabala: {}",
        s.tarabala.result, s.tarabala.number, s.chandrabala.strength
    );
    println!(
        "Shool:       {} ({}), favourable {}, nivas {}",
        s.shool.direction.name(),
        s.shool.deity,
        s.shool.favorable_direction.name(),
        s.shool.nivas
    );
    println!("Panchaka:    {}", s.panchaka.name);
    let y = &s.traditional_years;
    println!(
        "Years:       Vikram {} Shaka {} Kali {} Bengali {} Tamil {}",
        y.vikram_samvat, y.shaka_samvat, y.kali_yuga, y.bengali_san, y.tamil_year
    );
    if let Some(t) = &s.transitions {
        println!("Tithi ends:      {}", t.tithi_end.to_rfc3339());
        println!("Nakshatra ends:  {}", t.nakshatra_end.to_rfc3339());
        println!("Yoga ends:       {}", t.yoga_end.to_rfc3339());
        println!("Karana ends:     {}", t.karana_end.to_rfc3339());
    }
}

fn print_muhurta(r: &MuhurtaResult) {
    println!(
        "{}  {:>5.1}  {:<9} {}",
        r.datetime.format("%Y-%m-%d %H:%M"),
        r.score,
        r.quality.as_str(),
        r.description
    );
    for w in &r.warnings {
        println!("    ! {w}");
    }
}

fn print_festivals(list: &[FestivalDate]) {
    for f in list {
        println!(
            "{}  {:<28} {:<12} {}",
            f.date,
            f.name(),
            f.rule.category.as_str(),
            f.rule.english_name
        );
    }
}

fn run(cli: &Cli) -> Result<()> {
    let kaal = load_kaal(cli.config.as_ref())?;
    let now = Utc::now();

    match &cli.command {
        Commands::Panchang {
            date,
            birth_nakshatra,
            transitions,
        } => {
            let loc = location(cli, &kaal)?;
            let at = date.unwrap_or(now);
            let mut request = PanchangRequest::new(Instant::from_datetime(at), loc)
                .with_system(cli.system.unwrap_or(kaal.config().ayanamsha.system))
                .with_transitions(*transitions);
            if let Some(n) = birth_nakshatra {
                request = request.with_birth_nakshatra(*n);
            }
            let snap = kaal.panchang(&request).context("computing panchang")?;
            if cli.json {
                print_json(&*snap)?;
            } else {
                print_panchang(&snap);
            }
        }

        Commands::Ayanamsha { date } => {
            let table = kaal.ayanamsha_table(date.unwrap_or(now));
            if cli.json {
                print_json(&table)?;
            } else {
                for row in &table {
                    println!(
                        "{:<16} {:>10.6} deg  {:>+9.6}",
                        row.system.name(),
                        row.value_deg,
                        row.diff_from_lahiri_deg
                    );
                }
            }
        }

        Commands::Planets { date } => {
            let loc = location(cli, &kaal)?;
            let positions = kaal
                .planets(loc, date.unwrap_or(now), cli.system)
                .context("computing graha positions")?;
            if cli.json {
                print_json(&positions)?;
            } else {
                for p in &positions {
                    println!(
                        "{:<8} {:>9.4} deg  {:<10} {:>7.4}  {} pada {}",
                        p.graha.name(),
                        p.sidereal_longitude_deg,
                        p.rashi.name(),
                        p.degrees_in_rashi,
                        p.nakshatra.name(),
                        p.pada
                    );
                }
            }
        }

        Commands::Muhurta {
            muhurta_type,
            start,
            end,
            duration,
            best,
            calendar,
        } => {
            let loc = location(cli, &kaal)?;
            let start = start.unwrap_or(now);
            let end = end.unwrap_or(start + Duration::days(7));
            if *calendar {
                let cal = kaal
                    .muhurta_calendar(*muhurta_type, start.date_naive(), end.date_naive(), loc)
                    .context("building muhurta calendar")?;
                if cli.json {
                    print_json(&cal)?;
                } else {
                    for (day, results) in &cal {
                        println!("{day}");
                        results.iter().for_each(print_muhurta);
                    }
                }
                return Ok(());
            }

            let request = kaal
                .muhurta_request(*muhurta_type, start, end, loc)
                .with_duration_minutes(*duration);
            let results = if *best {
                kaal.best_muhurta(&request)?.into_iter().collect()
            } else {
                kaal.find_muhurta(&request)
                    .context("searching muhurta windows")?
            };
            debug!(results = results.len(), "muhurta command");
            if cli.json {
                print_json(&results)?;
            } else if results.is_empty() {
                println!("No acceptable {muhurta_type} window in range.");
            } else {
                results.iter().for_each(print_muhurta);
            }
        }

        Commands::Festivals {
            year,
            month,
            on,
            region,
            category,
            day_info,
        } => {
            if let Some(date) = on {
                let list = kaal.festivals_for_date(*date, region)?;
                if cli.json {
                    print_json(&list)?;
                } else {
                    print_festivals(&list);
                }
                if *day_info {
                    let info = kaal.day_info(*date)?;
                    if cli.json {
                        print_json(&info)?;
                    } else {
                        println!(
                            "Sunrise tithi {} nakshatra {} masa {}{}",
                            info.tithi,
                            info.nakshatra.name(),
                            info.masa.map_or("unknown", |m| m.name()),
                            if info.adhika { " (adhika)" } else { "" }
                        );
                    }
                }
                return Ok(());
            }

            let year = year.unwrap_or_else(|| now.year());
            let mut list = kaal.resolve_festivals(year, region, category)?;
            if let Some(m) = month {
                if !(1..=12).contains(m) {
                    bail!("--month {m} outside 1-12");
                }
                list.retain(|f| f.date.month() == *m);
            }
            if cli.json {
                print_json(&list)?;
            } else {
                print_festivals(&list);
            }
        }

        Commands::Export {
            year,
            format,
            region,
            category,
            output,
        } => {
            let year = year.unwrap_or_else(|| now.year());
            let list = kaal.resolve_festivals(year, region, category)?;
            let text = render_festivals(&list, *format)?;
            match output {
                Some(path) => {
                    std::fs::write(path, text)
                        .with_context(|| format!("writing {}", path.display()))?;
                    eprintln!("{} festivals written to {}", list.len(), path.display());
                }
                None => print!("{text}"),
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}
