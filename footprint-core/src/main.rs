//! whoMi Footprint - CLI Entry Point

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use footprint_core::constants::{APP_NAME, APP_VERSION};
use footprint_core::logic::advisory::{default_advisories, AdvisoryList};
use footprint_core::logic::config::CoreConfig;
use footprint_core::logic::scan::{ChannelStatus, ScanOrchestrator, SessionSnapshot};
use footprint_core::logic::service::HttpScanService;
use footprint_core::logic::signals::{
    HostSignalSource, ScanMode, SignalSource, SignalVector, StaticSignalSource,
};

#[derive(Parser)]
#[command(name = "footprint", version, about = "See what your device reveals about you")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan this device and print privacy advisories
    Scan {
        /// Collect advanced fingerprinting signals
        #[arg(long)]
        advanced: bool,

        /// Replay advanced signals captured elsewhere (JSON) instead of
        /// reading this host
        #[arg(long, value_name = "FILE", requires = "advanced")]
        signals: Option<PathBuf>,

        /// Also check this email against known breaches
        #[arg(long)]
        email: Option<String>,

        /// Print the session snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the default privacy tips
    Tips {
        #[arg(long)]
        json: bool,
    },
    /// Check that the scan service is reachable
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = CoreConfig::from_env();

    log::info!("{} v{} (service: {})", APP_NAME, APP_VERSION, config.api_url);

    match cli.command {
        Command::Scan { advanced, signals, email, json } => {
            let source = signal_source(&config, signals.as_deref())?;
            run_scan(&config, source, advanced, email, json).await
        }
        Command::Tips { json } => {
            let tips = default_advisories();
            if json {
                println!("{}", serde_json::to_string_pretty(&tips)?);
            } else {
                print_advisories(&tips);
            }
            Ok(())
        }
        Command::Health => {
            let service = HttpScanService::new(&config)?;
            let health = service
                .health_check()
                .await
                .with_context(|| format!("scan service at {} is unreachable", service.base_url()))?;
            println!(
                "{}: {} {}",
                health.service.as_deref().unwrap_or("scan service"),
                health.status,
                health.version.as_deref().unwrap_or("")
            );
            Ok(())
        }
    }
}

/// Captured signals when a file is given, otherwise this host
fn signal_source(config: &CoreConfig, captured: Option<&Path>) -> Result<Arc<dyn SignalSource>> {
    match captured {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let source = StaticSignalSource::from_json(&raw)
                .with_context(|| format!("{} is not a valid signals file", path.display()))?;
            log::info!("Replaying advanced signals from {}", path.display());
            Ok(Arc::new(source))
        }
        None => Ok(Arc::new(HostSignalSource::new(config))),
    }
}

async fn run_scan(
    config: &CoreConfig,
    source: Arc<dyn SignalSource>,
    advanced: bool,
    email: Option<String>,
    json: bool,
) -> Result<()> {
    let service = Arc::new(HttpScanService::new(config)?);
    let orchestrator = ScanOrchestrator::new(service, source)
        .with_connection_secure(config.connection_secure());

    let mode = if advanced { ScanMode::Advanced } else { ScanMode::Basic };

    match email {
        Some(email) => {
            tokio::join!(
                orchestrator.start_device_scan(mode),
                orchestrator.start_breach_check(&email),
            );
        }
        None => {
            orchestrator.start_device_scan(mode).await;
        }
    }

    let snapshot = orchestrator.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_snapshot(&snapshot);
    }
    Ok(())
}

// ============================================================================
// TEXT OUTPUT
// ============================================================================

fn print_snapshot(snapshot: &SessionSnapshot) {
    println!("== Device ({} scan) ==", snapshot.mode);
    match (&snapshot.signals, &snapshot.device_error) {
        (Some(signals), _) => print_signals(signals),
        (None, Some(error)) => println!("  Scan failed: {}", error),
        (None, None) => println!("  Not scanned"),
    }

    if let Some(entropy) = &snapshot.entropy {
        println!();
        println!(
            "== Uniqueness: {} ({} bits, {} distinguishing factors) ==",
            entropy.tier, entropy.bits, entropy.distinguishing_factor_count
        );
        for factor in &entropy.factors {
            println!("  - {}", factor.description());
        }
    }

    println!();
    println!("== Advisories ==");
    print_advisories(&snapshot.advisories);

    if snapshot.breach_status != ChannelStatus::Idle {
        println!();
        println!("== Breach check ==");
        match (&snapshot.breach, &snapshot.breach_error) {
            (Some(result), _) => {
                println!("  {}", result.headline());
                for breach in &result.breaches {
                    println!("  - {} ({}): {}", breach.name, breach.date, breach.leaked_data.join(", "));
                }
            }
            (None, Some(error)) => println!("  {}", error),
            (None, None) => println!("  {}", snapshot.breach_status),
        }
    }
}

fn print_signals(signals: &SignalVector) {
    let rows: [(&str, Option<String>); 12] = [
        ("IP address", signals.ip_address.clone()),
        ("Device", signals.device_name.clone()),
        ("Device type", signals.device_type.clone()),
        ("Browser version", signals.browser_version_number.map(|v| v.to_string())),
        ("Screen", signals.screen_resolution.clone()),
        ("Color depth", signals.color_depth_bits.map(|d| format!("{} bits", d))),
        ("Timezone", signals.timezone.clone()),
        ("Language", signals.language.clone()),
        ("CPU cores", signals.hardware_concurrency.map(|c| c.to_string())),
        ("Memory", signals.device_memory_gb.map(|m| format!("{:.0} GB", m))),
        ("GPU", signals.gpu_model.clone()),
        ("Ad blocker", signals.is_advanced().then(|| signals.ad_block_status.as_str().to_string())),
    ];

    for (label, value) in rows {
        if let Some(value) = value {
            println!("  {:<16} {}", label, value);
        }
    }
}

fn print_advisories(advisories: &AdvisoryList) {
    for advisory in advisories {
        let mark = if advisory.kind.is_confirmation() { "ok" } else { "!!" };
        println!("  {}. [{}] {}", advisory.rank, mark, advisory.title);
        println!("     {}", advisory.body);
    }
}

// ============================================================================
// TESTS
// ============================================================================
