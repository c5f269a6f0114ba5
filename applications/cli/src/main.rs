/// Cassette - browser-style music player for the terminal
use cassette_cli::{
    app::{self, Transport},
    App, CliConfig,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cassette")]
#[command(about = "Upload songs and play them back from a local library", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./cassette.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Session id; snapshots are kept per session
    #[arg(short, long, global = true)]
    session: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store audio files in the library
    Upload {
        /// Files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Show the playlist
    List,
    /// Play the song at INDEX, or pause it if it is already playing
    Play { index: usize },
    /// Toggle between playing and paused
    Toggle,
    /// Skip to the next song
    Next,
    /// Go back to the previous song
    Previous,
    /// Report that the current song finished
    Ended,
    /// Move to a position in the current song
    Seek {
        #[arg(allow_hyphen_values = true)]
        seconds: f64,
    },
    /// Show what is playing
    Status,
    /// Forget the saved playback position for this session
    ResetSession,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cassette=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(session) = cli.session {
        config.session.id = session;
    }

    let app = App::open(config).await?;
    let result = run(&app, cli.command).await;
    app.close().await;
    result
}

async fn run(app: &App, command: Commands) -> anyhow::Result<()> {
    let transport = match command {
        Commands::Upload { files } => {
            let report = app.upload(files).await?;
            for notice in &report.notices {
                println!("{}", notice);
            }
            if let Some(route) = report.next_route() {
                println!("Next: {}", route);
            }
            return Ok(());
        }
        Commands::List => {
            let controller = app.mount().await;
            for line in app::render_list(&controller) {
                println!("{}", line);
            }
            return Ok(());
        }
        Commands::ResetSession => {
            app.reset_session()?;
            println!("Session '{}' cleared", app.config().session.id);
            return Ok(());
        }
        Commands::Play { index } => Transport::Play(index),
        Commands::Toggle => Transport::Toggle,
        Commands::Next => Transport::Next,
        Commands::Previous => Transport::Previous,
        Commands::Ended => Transport::Ended,
        Commands::Seek { seconds } => Transport::Seek(seconds),
        Commands::Status => Transport::Status,
    };

    let mut controller = app.transport(transport).await?;
    for event in controller.drain_events() {
        if let cassette_playback::PlaybackEvent::StartRejected { reason } = event {
            println!("Playback could not start: {}", reason);
        }
    }
    println!("{}", app::render_status(&controller));

    Ok(())
}
