//! huddle CLI: social feed, notifications and an assistant chat in the terminal

use clap::{Parser, Subcommand};
use huddle_engine::{CannedReplyProvider, Config, Fixtures, Message, ReplyScheduler, Session};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "HUDDLE_LOG";

/// Social feed, notifications and assistant chat in the terminal
#[derive(Parser)]
#[command(name = "huddle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (JSON). Defaults are used when absent.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fixture file (JSON) replacing the built-in sample content
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Send messages to the assistant without the TUI and print the transcript
    Chat {
        /// Messages to send, in order
        #[arg(required = true)]
        texts: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the fixtures as JSON
    Fixtures,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    let tui_mode = matches!(cli.command, None | Some(Commands::Tui));
    if let Err(e) = init_logging(&config, tui_mode) {
        fail(&e);
    }

    let fixtures = match load_fixtures(cli.fixtures.as_deref()) {
        Ok(fixtures) => fixtures,
        Err(e) => fail(&e),
    };

    let result = match cli.command {
        None | Some(Commands::Tui) => cmd_tui(config, fixtures),
        Some(Commands::Chat { texts, json }) => cmd_chat(&config, &texts, json),
        Some(Commands::Config { json }) => cmd_config(&config, json),
        Some(Commands::Fixtures) => cmd_fixtures(&fixtures),
    };

    if let Err(e) = result {
        fail(&e);
    }
}

fn fail(error: &dyn std::fmt::Display) -> ! {
    eprintln!("Error: {error}");
    std::process::exit(1);
}

fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Config::load_or_default(path)?),
        None => Ok(Config::default()),
    }
}

fn load_fixtures(path: Option<&Path>) -> Result<Fixtures, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Fixtures::load(path)?),
        None => Ok(Fixtures::sample()),
    }
}

/// Install the tracing subscriber.
///
/// The TUI owns the terminal, so in TUI mode logs go to the configured file.
fn init_logging(config: &Config, tui_mode: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "huddle=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if tui_mode {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }
    Ok(())
}

fn cmd_tui(config: Config, fixtures: Fixtures) -> Result<(), Box<dyn std::error::Error>> {
    info!(log = %config.log_path().display(), "starting tui");
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(huddle_tui::run_tui(config, fixtures))
}

fn cmd_chat(config: &Config, texts: &[String], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    let session = rt.block_on(run_chat(config, texts));

    if json {
        println!("{}", serde_json::to_string_pretty(session.messages())?);
    } else {
        for message in session.messages() {
            println!("{}", format_message(message, &config.assistant_name));
        }
    }
    Ok(())
}

/// Submit every text to a fresh session and wait until all replies are in.
async fn run_chat(config: &Config, texts: &[String]) -> Session {
    let provider = Arc::new(CannedReplyProvider::new(config.placeholder_reply.clone()));
    let (scheduler, mut replies) = ReplyScheduler::new(provider, config.reply_delay());
    let mut session = Session::new();

    for text in texts {
        match session.submit(text) {
            Some(ticket) => {
                scheduler.schedule(ticket);
            }
            None => debug!("skipping blank message"),
        }
    }

    while session.is_typing() {
        let Some(ready) = replies.recv().await else {
            break;
        };
        ready.apply(&mut session);
    }

    session
}

fn format_message(message: &Message, assistant_name: &str) -> String {
    let who = if message.is_user() {
        "You"
    } else {
        assistant_name
    };
    format!("[{}] {who}: {}", message.time_label(), message.body())
}

fn cmd_config(config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("huddle configuration");
    println!("====================");
    println!();
    println!("  Assistant:        {}", config.assistant_name);
    println!("  Tagline:          {}", config.assistant_tagline);
    println!("  Reply delay:      {}ms", config.reply_delay_ms);
    println!("  Drawer animation: {}ms", config.drawer_animation_ms);
    println!("  Overlay opacity:  {}", config.overlay_opacity);
    println!("  Suggestions:      while <= {} messages", config.suggestion_limit);
    println!("  Tick rate:        {}ms", config.tick_rate_ms);
    println!("  Log file:         {}", config.log_path().display());
    Ok(())
}

fn cmd_fixtures(fixtures: &Fixtures) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(fixtures)?);
    Ok(())
}
