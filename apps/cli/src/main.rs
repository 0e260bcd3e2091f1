use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use indicatif::ProgressBar;
use output::{OutputFormat, Renderer};
use progress::spinner;
use ra_api_client::{Authorization, ClientConfig, RaClient};
use ra_guide_core::GuideService;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser, Clone)]
#[command(
    name = "ra-guide",
    version,
    about = "Generate RetroAchievements guide blocks from a game's achievement list."
)]
struct Cli {
    /// Preferred renderer for command output.
    #[arg(long, global = true, value_enum, default_value = "markdown")]
    format: OutputFormat,
    /// Disable ANSI colors in CLI output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Suppress non-critical CLI output.
    #[arg(long, global = true)]
    quiet: bool,
    /// Disable progress indicators while the API call is in flight.
    #[arg(long, global = true)]
    no_progress: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand, Clone)]
enum Command {
    /// Fetch a game's achievement list and render its guide blocks.
    Generate {
        /// RetroAchievements game ID.
        game_id: u32,
        /// RetroAchievements username.
        #[arg(long, env = "RA_USERNAME")]
        username: String,
        /// RetroAchievements web API key.
        #[arg(long, env = "RA_WEB_API_KEY", hide_env_values = true)]
        api_key: String,
        /// Override the web API endpoint.
        #[arg(long)]
        api_base_url: Option<String>,
    },
    /// Generate shell completion scripts.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    fn progress_enabled(&self) -> bool {
        !self.quiet && !self.no_progress
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    match cli.command.clone() {
        Command::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "ra-guide", &mut std::io::stdout());
            Ok(())
        }
        Command::Generate {
            game_id,
            username,
            api_key,
            api_base_url,
        } => {
            let renderer = Renderer::new(cli.format);
            handle_generate(&cli, &renderer, game_id, username, api_key, api_base_url).await
        }
    }
}

async fn handle_generate(
    cli: &Cli,
    renderer: &Renderer,
    game_id: u32,
    username: String,
    api_key: String,
    api_base_url: Option<String>,
) -> Result<()> {
    let config = match api_base_url {
        Some(base_url) => ClientConfig {
            base_url,
            ..ClientConfig::default()
        },
        None => ClientConfig::default(),
    };
    let authorization = Authorization::new(username, api_key);
    let service = GuideService::new(RaClient::with_config(config));
    debug!(
        target: "ra_guide_cli",
        user = authorization.username(),
        game_id,
        "submitting achievement request"
    );

    let spinner = spinner(
        cli.progress_enabled(),
        format!("Fetching achievements for game {game_id}..."),
    );
    match service.generate(&authorization, game_id).await {
        Ok(output) => {
            finish_spinner(
                spinner,
                Some(format!(
                    "Generated {} achievement blocks for `{}`",
                    output.achievement_count, output.title
                )),
            );
            if !cli.quiet {
                renderer.guide(&output)?;
            }
            Ok(())
        }
        Err(error) => {
            finish_spinner(spinner, None);
            Err(error.context(format!("failed to generate guide blocks for game {game_id}")))
        }
    }
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,ra_guide=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .without_time()
        .with_ansi(!cli.no_color)
        .compact()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow!("failed to initialize logging: {error}"))
}

fn finish_spinner(spinner: Option<ProgressBar>, message: Option<String>) {
    if let Some(progress) = spinner {
        if let Some(msg) = message {
            progress.finish_with_message(msg);
        } else {
            progress.finish_and_clear();
        }
    }
}

mod output {
    use anyhow::Result;
    use clap::ValueEnum;
    use ra_guide_core::GuideOutput;

    #[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
    pub enum OutputFormat {
        Json,
        Markdown,
        Text,
    }

    #[derive(Copy, Clone, Debug)]
    pub struct Renderer {
        format: OutputFormat,
    }

    impl Renderer {
        pub fn new(format: OutputFormat) -> Self {
            Self { format }
        }

        pub fn guide(&self, output: &GuideOutput) -> Result<()> {
            match self.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(output)?);
                }
                OutputFormat::Markdown => {
                    print!("{}", output.markdown);
                }
                OutputFormat::Text => {
                    println!("{} ({})", output.title, output.console_name);
                    println!(
                        "{} achievements, {} points total",
                        output.achievement_count, output.total_points
                    );
                    println!();
                    print!("{}", output.markdown);
                }
            }
            Ok(())
        }
    }
}

mod progress {
    use std::time::Duration;

    use indicatif::{ProgressBar, ProgressStyle};

    pub fn spinner(enabled: bool, message: impl Into<String>) -> Option<ProgressBar> {
        if !enabled {
            return None;
        }
        let progress = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        progress.set_style(style);
        progress.set_message(message.into());
        progress.enable_steady_tick(Duration::from_millis(80));
        Some(progress)
    }
}
