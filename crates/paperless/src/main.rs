//! # Paperless Deploy
//!
//! Entry point of the configuration resolution layer. Resolves the
//! project identity from the working directory, loads and validates the
//! stack document, and prints the declarative deployment parameters for
//! the external provisioning tool. Any resolution failure aborts before
//! any output is produced.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use common::config::{loader, ConfigValidation};
use common::project::resolve_project_identity;
use paperless::deployment::DeploymentParameters;
use paperless::ComponentConfig;

/// Stack document path, overridable through the environment.
const STACK_CONFIG_ENV: &str = "DEPLOY_STACK_CONFIG";
const DEFAULT_STACK_CONFIG: &str = "stack.yaml";

fn main() -> Result<()> {
    init_logging("info")?;

    let cwd = std::env::current_dir()?;
    let project = resolve_project_identity(&cwd)?;
    info!("Resolved project identity: {}", project);

    let stack_path = std::env::var(STACK_CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_STACK_CONFIG));
    let document = loader::load_document(&stack_path)?;

    let config = ComponentConfig::resolve(&document, &project)?;
    config.validate()?;
    for warning in config.warnings() {
        warn!("{warning}");
    }
    info!("Configuration resolved and validated");

    let parameters = DeploymentParameters::from_config(&config);
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &parameters)?;
    writeln!(stdout)?;

    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    Ok(())
}
