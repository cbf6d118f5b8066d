use dotenv::dotenv;
use std::path::PathBuf;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::EnvFilter;
use veritas::cli::{render_report, CheckReport, Cli, Commands, ConfigAction, InputSource, FAILURE_NOTICE};
use veritas::config::Config;
use veritas::models::{ApiKey, FactCheckResult};
use veritas::pipeline::{FactChecker, GeminiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse_args();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Config {
        action: ConfigAction::Init { force },
    } = cli.command
    {
        return init_config(cli.config, force);
    }

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    config.apply_env_overrides()?;

    match cli.command {
        Commands::Check { text, file, json } => {
            let text = InputSource::from_args(text, file).read()?;
            run_check(&text, json || config.cli.json, &config).await
        }
        Commands::Config { .. } => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        Commands::Schema => {
            let schema = schemars::schema_for!(FactCheckResult);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
    }
}

async fn run_check(text: &str, json: bool, config: &Config) -> anyhow::Result<()> {
    // Fails before any request when the key is absent.
    let api_key = ApiKey::from_env(&config.provider.api_key_env)?;
    let client = GeminiClient::new(api_key, &config.provider);
    let model = client.model().to_string();
    let checker = FactChecker::new(client);

    let outcome = match config.cli.request_timeout_secs {
        0 => checker.check(text).await,
        secs => match tokio::time::timeout(Duration::from_secs(secs), checker.check(text)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                error!(timeout_secs = secs, "fact check timed out");
                anyhow::bail!(FAILURE_NOTICE);
            }
        },
    };

    let result = match outcome {
        Ok(result) => result,
        Err(e) if e.is_provider() => {
            error!(error = %e, "fact check failed");
            anyhow::bail!(FAILURE_NOTICE);
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        let report = CheckReport {
            checked_at: chrono::Utc::now(),
            model: &model,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&result));
    }
    Ok(())
}

fn init_config(path: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(Config::default_path);
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::default().save(&path)?;
    println!("wrote {}", path.display());
    Ok(())
}
