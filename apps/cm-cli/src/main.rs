use chrono::{DateTime, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use cm_api::{ApiConfig, CarbonIntensityClient};
use cm_app::{
    AppConfig, AppError, AppResult, build_overlay, format_intensity, inspect_point, region_chart,
    snapshot_at,
};
use cm_core::{LatLon, REGION_CATALOG, RegionId, classify, parse_api_timestamp};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cm-cli")]
#[command(about = "carbonmap CLI - UK regional carbon intensity", long_about = None)]
struct Cli {
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the mapped regions and their centroids
    Regions,
    /// Classify an intensity value into its severity tier
    Classify {
        /// Intensity in gCO₂/kWh
        value: f64,
    },
    /// Show the regional snapshot, current or at a given time
    Snapshot {
        /// UTC time as YYYY-MM-DDTHH:MM (rounded down to the half hour)
        #[arg(long)]
        at: Option<String>,
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve a coordinate to a region, as a map click would
    Inspect {
        lat: f64,
        lon: f64,
        /// UTC time as YYYY-MM-DDTHH:MM
        #[arg(long)]
        at: Option<String>,
    },
    /// Export the last 24 hours of forecasts for one region
    Series {
        region_id: RegionId,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref(), cli.base_url)?;

    match cli.command {
        Commands::Regions => cmd_regions(),
        Commands::Classify { value } => cmd_classify(value),
        Commands::Snapshot { at, json } => cmd_snapshot(&config, at.as_deref(), json),
        Commands::Inspect { lat, lon, at } => cmd_inspect(&config.api, lat, lon, at.as_deref()),
        Commands::Series { region_id, output } => {
            cmd_series(&config.api, region_id, output.as_deref())
        }
    }
}

fn resolve_config(path: Option<&Path>, base_url: Option<String>) -> AppResult<AppConfig> {
    let mut config = match path {
        Some(path) => cm_app::load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(url) = base_url {
        config.api.base_url = url;
    }
    tracing::debug!(base_url = %config.api.base_url, "configuration resolved");
    Ok(config)
}

fn parse_at(raw: Option<&str>) -> AppResult<Option<DateTime<Utc>>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Ok(Some(naive.and_utc()));
    }
    // Anything else must be a full API timestamp ("...Z" or RFC 3339).
    Ok(Some(parse_api_timestamp(raw)?))
}

fn cmd_regions() -> AppResult<()> {
    println!("Mapped regions:");
    for entry in &REGION_CATALOG {
        println!(
            "  {:>2} - {} ({:.1}, {:.1})",
            entry.id, entry.name, entry.centroid.lat, entry.centroid.lon
        );
    }
    Ok(())
}

fn cmd_classify(value: f64) -> AppResult<()> {
    let tier = classify(value);
    println!("{} -> {} ({})", format_intensity(value), tier, tier.color_name());
    Ok(())
}

fn cmd_snapshot(config: &AppConfig, at: Option<&str>, json: bool) -> AppResult<()> {
    let client = CarbonIntensityClient::new(&config.api)?;
    let snapshot = snapshot_at(&client, parse_at(at)?)?;

    if json {
        let text = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| AppError::InvalidInput(format!("Failed to serialize snapshot: {}", e)))?;
        println!("{}", text);
        return Ok(());
    }

    let overlay = build_overlay(&snapshot, config.map.center());
    println!("Regional intensity {}:", overlay.period_label());
    for marker in &overlay.markers {
        let dno = snapshot
            .region(marker.region_id)
            .map(|r| r.dno_region.as_str())
            .unwrap_or_default();
        println!(
            "  {:>2} {:<24} {:>14}  {:<9}  {}",
            marker.region_id,
            marker.label,
            format_intensity(marker.intensity),
            marker.tier.label(),
            dno
        );
    }
    Ok(())
}

fn cmd_inspect(api: &ApiConfig, lat: f64, lon: f64, at: Option<&str>) -> AppResult<()> {
    let client = CarbonIntensityClient::new(api)?;
    let snapshot = snapshot_at(&client, parse_at(at)?)?;

    let Some(detail) = inspect_point(&snapshot, LatLon::new(lat, lon)) else {
        println!("No region within 1° of ({}, {})", lat, lon);
        return Ok(());
    };

    println!("{}", detail.heading);
    println!("  Carbon Intensity: {}", detail.intensity_text);
    println!("  Index: {}", detail.tier);
    println!("  DNO Region: {}", detail.dno_region);
    if !detail.generation_mix.is_empty() {
        println!("  Generation Mix:");
        for bar in &detail.generation_mix {
            println!("    {:<12} {:>5.1}%", bar.fuel, bar.percent);
        }
    }
    Ok(())
}

fn cmd_series(api: &ApiConfig, region_id: RegionId, output: Option<&Path>) -> AppResult<()> {
    let client = CarbonIntensityClient::new(api)?;
    let chart = region_chart(&client, region_id, Utc::now())?;

    // Build CSV
    let mut csv = String::from("from,forecast_gco2_per_kwh\n");
    for sample in &chart.samples {
        csv.push_str(&format!(
            "{},{}\n",
            sample.time.format("%Y-%m-%dT%H:%MZ"),
            sample.intensity
        ));
    }

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} data points to {}",
            chart.samples.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}
