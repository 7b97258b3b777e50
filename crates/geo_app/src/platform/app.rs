use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use geo_core::{
    NoReturnLocation, ReturnLocation, ScanStatusView, SessionStore, StorageError,
    UrlReturnLocation,
};
use geo_engine::{
    build_csv_export, generate_analytics, mock_result_for, validate_scan_url, write_csv_export,
    EnvConfig, MockBackend,
};
use geo_logging::geo_info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::effects::EffectRunner;
use super::persistence::FilePaidStorage;
use super::render;
use crate::cli::{Cli, Command};

pub fn run_app(cli: Cli) -> Result<()> {
    let config = EnvConfig::from_env();
    let location: Box<dyn ReturnLocation> = match &cli.return_url {
        Some(url) => Box::new(LoggedReturnLocation(UrlReturnLocation::new(url.clone()))),
        None => Box::new(NoReturnLocation),
    };
    let mut store = SessionStore::new(Box::new(FilePaidStorage::new(&cli.state_dir)), location);
    let mut runner = EffectRunner::new(Arc::new(MockBackend));
    runner.enqueue(store.initialize(config.validate()));

    match cli.cmd {
        Command::Scan {
            url,
            improve,
            export,
            json,
        } => scan(&mut store, &mut runner, &url, improve, export.as_deref(), json),
        Command::Upgrade => {
            println!("Checkout: {}", config.payment_link_url());
            println!("Return URL: {}", config.return_url());
            store.upgrade_to_paid();
            println!("Pro plan active.");
            Ok(())
        }
        Command::Downgrade => {
            store.set_paid_state(false);
            println!("Back on the free plan.");
            Ok(())
        }
        Command::Status => {
            println!("{}", config.app_name());
            println!("{}", render::status_line(&store.view()));
            for line in render::environment_lines(store.state().environment()) {
                println!("{line}");
            }
            Ok(())
        }
        Command::CheckEnv => {
            let report = store.state().environment();
            for line in render::environment_lines(report) {
                println!("{line}");
            }
            if !report.is_valid {
                bail!("environment configuration is invalid");
            }
            Ok(())
        }
        Command::Analytics { url, seed } => {
            let result = mock_result_for(&url);
            let today = Utc::now().date_naive();
            let data = match seed {
                Some(seed) => generate_analytics(&result, today, &mut StdRng::seed_from_u64(seed)),
                None => generate_analytics(&result, today, &mut rand::rng()),
            };
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        }
    }
}

fn scan(
    store: &mut SessionStore,
    runner: &mut EffectRunner,
    url: &str,
    improve: bool,
    export_dir: Option<&Path>,
    json: bool,
) -> Result<()> {
    let url = checked_scan_url(url)?;

    let progress = store.subscribe(|view| {
        if view.status != ScanStatusView::Idle {
            eprintln!("{}", render::status_line(view));
        }
    });
    runner.enqueue(store.start_scan(url));
    while let Some(msg) = runner.next_msg() {
        runner.enqueue(store.dispatch(msg));
    }

    if improve {
        if store.view().can_improve {
            store.improve_score();
        } else {
            println!("Improving the score is part of the pro plan. Run `geo upgrade`.");
        }
    }
    store.unsubscribe(progress);

    let view = store.view();
    if let Some(message) = store.state().scan().error() {
        bail!("scan of {url} failed: {message}");
    }
    let Some(result) = store.state().result() else {
        bail!("scan of {url} produced no result");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        for line in render::result_lines(result, &view) {
            println!("{line}");
        }
    }

    if let Some(dir) = export_dir {
        if view.can_export {
            let export = build_csv_export(result);
            let path = write_csv_export(dir, &export)
                .with_context(|| format!("writing CSV export to {}", dir.display()))?;
            println!("Exported {}", path.display());
        } else {
            println!("CSV export is part of the pro plan. Run `geo upgrade`.");
        }
    }
    Ok(())
}

/// Trimmed scan target, or an error for input that is not a website address.
fn checked_scan_url(url: &str) -> Result<&str> {
    let url = url.trim();
    if url.is_empty() {
        bail!("a URL is required");
    }
    if !validate_scan_url(url) {
        bail!("{url:?} is not a valid website address (e.g. example.com)");
    }
    Ok(url)
}

/// Return location given on the command line; logs where the user "lands"
/// once the payment marker has been consumed.
struct LoggedReturnLocation(UrlReturnLocation);

impl ReturnLocation for LoggedReturnLocation {
    fn has_payment_marker(&self) -> Result<bool, StorageError> {
        self.0.has_payment_marker()
    }

    fn clear_payment_marker(&mut self) -> Result<(), StorageError> {
        self.0.clear_payment_marker()?;
        geo_info!("Payment confirmed; continuing at {}", self.0.location());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_target_is_trimmed_when_valid() {
        assert_eq!(checked_scan_url("  https://acme.io ").unwrap(), "https://acme.io");
    }

    #[test]
    fn free_text_and_host_ports_are_refused_before_scanning() {
        for input in ["", "just text", "localhost:8080", "example.com:8080"] {
            assert!(checked_scan_url(input).is_err(), "{input:?} should be refused");
        }
    }
}
