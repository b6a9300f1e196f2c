use std::future::Future;
use std::time::Duration;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use gitinsights::report::{render_comparison, render_profile, FetchState, ReportFormat};
use gitinsights::{AnalysisPipeline, BackendClient, Config, GitHubClient};

#[derive(Parser, Debug)]
#[command(name = "gitinsights")]
#[command(version)]
#[command(about = "Inspect and compare GitHub profiles")]
struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text, global = true)]
    format: ReportFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Query a running gitinsights API (e.g. http://localhost:5328/api)
    /// instead of GitHub directly
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Maximum repositories fetched per user
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    max_repositories: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the stats of a single profile
    Profile { username: String },
    /// Compare two profiles metric by metric
    Compare { user1: String, user2: String },
    /// Serve the JSON API
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
}

enum Fetcher {
    Direct(AnalysisPipeline),
    Backend(BackendClient),
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitinsights=info".parse()?)
                .add_directive("reqwest=warn".parse()?)
                .add_directive("actix_web=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let mut config = Config::from_env()?;
    if let Some(max) = args.max_repositories {
        config.github.max_repositories = max;
    }

    match &args.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host.clone();
            }
            if let Some(port) = port {
                config.port = *port;
            }
            let pipeline = AnalysisPipeline::new(GitHubClient::new(&config.github)?);
            gitinsights::api::server::run(&config.bind_addr(), pipeline).await?;
        }
        Command::Profile { username } => {
            let fetcher = fetcher(&args, &config)?;
            let data = load(format!("Analyzing @{}", username), async {
                match &fetcher {
                    Fetcher::Direct(pipeline) => pipeline.analyze_profile(username).await,
                    Fetcher::Backend(client) => client.profile(username).await,
                }
            })
            .await?;
            write_output(&render_profile(&data, args.format)?, &args)?;
        }
        Command::Compare { user1, user2 } => {
            let fetcher = fetcher(&args, &config)?;
            let data = load(format!("Comparing @{} and @{}", user1, user2), async {
                match &fetcher {
                    Fetcher::Direct(pipeline) => pipeline.compare(user1, user2).await,
                    Fetcher::Backend(client) => client.compare(user1, user2).await,
                }
            })
            .await?;
            write_output(&render_comparison(&data, args.format)?, &args)?;
        }
    }

    Ok(())
}

fn fetcher(args: &Args, config: &Config) -> anyhow::Result<Fetcher> {
    let backend = args.backend.as_ref().or(config.backend_url.as_ref());
    Ok(match backend {
        Some(url) => {
            tracing::debug!("Using backend at {}", url);
            Fetcher::Backend(BackendClient::new(url)?)
        }
        None => Fetcher::Direct(AnalysisPipeline::new(GitHubClient::new(&config.github)?)),
    })
}

/// Runs one fetch through the Idle -> Loading -> Loaded/Failed cycle.
/// A failure yields only its message; nothing partial is rendered.
async fn load<T, F>(message: String, fetch: F) -> anyhow::Result<T>
where
    F: Future<Output = gitinsights::Result<T>>,
{
    let mut state = FetchState::Idle;
    state.begin();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));

    state.finish(fetch.await);
    spinner.finish_and_clear();

    match state.into_result() {
        Some(Ok(data)) => Ok(data),
        Some(Err(message)) => Err(anyhow::anyhow!(message)),
        None => Err(anyhow::anyhow!("Fetch did not complete")),
    }
}

fn write_output(output: &str, args: &Args) -> anyhow::Result<()> {
    if let Some(ref path) = args.output {
        std::fs::write(path, output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }
    Ok(())
}
