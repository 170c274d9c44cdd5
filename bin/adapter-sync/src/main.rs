use adapter_api::AdapterConfig;
use adapter_core::marshal_config;
use adapter_notifier::{DeployedApiRevision, DeploymentNotifier};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod translate;

use translate::SnapshotKind;

#[derive(Parser, Debug)]
#[command(name = "adapter-sync", about = "Control plane to enforcer synchronization tool")]
struct Cli {
    /// Adapter configuration file
    #[arg(long, global = true, default_value = "conf/adapter.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the enforcer configuration resource as JSON
    RenderConfig,
    /// Translate a control plane snapshot into its enforcer wire form
    Translate {
        #[arg(long, value_enum)]
        kind: SnapshotKind,
        /// JSON snapshot as returned by the control plane
        #[arg(long)]
        input: PathBuf,
    },
    /// Report a deployed revision to the control plane
    NotifyDeployed {
        #[arg(long)]
        api_id: String,
        #[arg(long)]
        revision_id: i64,
        #[arg(long)]
        vhost: String,
        /// Environment the revision was deployed to (repeatable)
        #[arg(long = "env")]
        envs: Vec<String>,
    },
    /// Report an undeployed revision to the control plane
    NotifyUndeployed {
        #[arg(long)]
        api_uuid: String,
        #[arg(long)]
        revision_uuid: String,
        #[arg(long)]
        env: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    match cli.command {
        Command::RenderConfig => {
            let wire = marshal_config(&config);
            println!("{}", serde_json::to_string_pretty(&wire)?);
        }
        Command::Translate { kind, input } => {
            let raw = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read snapshot {}", input.display()))?;
            let wire = translate::translate(kind, &raw, &config.control_plane)?;
            println!("{}", serde_json::to_string_pretty(&wire)?);
        }
        Command::NotifyDeployed {
            api_id,
            revision_id,
            vhost,
            envs,
        } => {
            let notifier = DeploymentNotifier::from_config(config.control_plane)?;
            let revision = DeployedApiRevision::new(api_id, revision_id, envs.as_slice(), &vhost);
            let outcome = notifier.send_revision_update(&[revision]).await;
            println!("{}", outcome);
        }
        Command::NotifyUndeployed {
            api_uuid,
            revision_uuid,
            env,
        } => {
            let notifier = DeploymentNotifier::from_config(config.control_plane)?;
            let outcome = notifier
                .send_revision_undeploy(&api_uuid, &revision_uuid, &env)
                .await;
            println!("{}", outcome);
        }
    }

    Ok(())
}

/// Load the adapter configuration, falling back to defaults when the file is absent
fn load_config(path: &Path) -> Result<AdapterConfig> {
    if path.exists() {
        return Ok(AdapterConfig::load(path)?);
    }
    info!(
        "Configuration file {} not found, using defaults",
        path.display()
    );
    let mut config = AdapterConfig::default();
    config.apply_overrides(|key| std::env::var(key).ok());
    config.validate()?;
    Ok(config)
}
