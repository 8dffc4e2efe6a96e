use anyhow::Context;
use chrono::NaiveDate;
use rota_core::config::load_config;
use rota_core::constants::DATE_FORMAT;
use rota_recur::{GenerateOptions, apply_exceptions, describe, generate_with};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: rota-preview <RULE> <ANCHOR YYYY-MM-DD> [EXCEPTION ...]";

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let rule_text = args.next().context(USAGE)?;
    let anchor_text = args.next().context(USAGE)?;
    let exceptions: Vec<String> = args.collect();

    let config = load_config()?;

    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(log_filter(from_env.as_deref(), &config.logging.level))
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
    tracing::debug!(settings = ?config, "Configuration loaded");

    let rule = rota_recur::parse(&rule_text).context("Invalid rule")?;
    rota_recur::validate(&rule).context("Invalid rule")?;
    let anchor = NaiveDate::parse_from_str(&anchor_text, DATE_FORMAT)
        .with_context(|| format!("Invalid anchor date {anchor_text:?}"))?;
    tracing::debug!(%rule, %anchor, exceptions = exceptions.len(), "Previewing rule");

    let options = GenerateOptions::from(&config.scheduling);
    let occurrences = generate_with(&rule, anchor, &options);
    let dates = apply_exceptions(&occurrences.dates, &exceptions);

    println!("{}", describe(&rule));
    for date in &dates {
        println!("{}", date.format(DATE_FORMAT));
    }
    if occurrences.truncated {
        println!(
            "(truncated after {} occurrences: safety limit reached)",
            occurrences.len()
        );
    }

    Ok(())
}

/// `RUST_LOG` wins over the configured level; anything unparseable falls
/// back to `info`.
fn log_filter(from_env: Option<&str>, configured: &str) -> EnvFilter {
    from_env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
