use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use reframe::config::{paths::ReframePaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "reframe",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based cognitive restructuring journal",
    long_about = "Mind Reframe walks you through a six-step cognitive restructuring \
                  exercise: the situation, the automatic thought, how intense it \
                  feels, the evidence for and against, and a more balanced \
                  perspective. Nothing you write is saved."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    tui: TuiArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui(TuiArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

#[derive(Args, Clone, Copy)]
struct TuiArgs {
    /// Skip the splash screen
    #[arg(long, env = "REFRAME_NO_SPLASH")]
    no_splash: bool,

    /// Splash screen duration in milliseconds
    #[arg(long, value_name = "MS")]
    splash_ms: Option<u64>,
}

impl TuiArgs {
    fn apply(self, settings: &mut Settings) {
        if self.no_splash {
            settings.show_splash = false;
        }
        if let Some(ms) = self.splash_ms {
            settings.splash_duration_ms = ms;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ReframePaths::new()?;

    match cli.command {
        None => launch(&paths, cli.tui)?,
        Some(Commands::Tui(args)) => launch(&paths, args)?,
        Some(Commands::Init) => {
            // Never read the old file, so a malformed one gets replaced
            Settings::default().save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            let settings = Settings::load_or_create(&paths)?;
            println!("Mind Reframe Configuration");
            println!("==========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Show splash:        {}", settings.show_splash);
            println!("  Splash duration:    {} ms", settings.splash_duration_ms);
            println!("  Tick rate:          {} ms", settings.tick_rate_ms);
            println!("  Notification time:  {} s", settings.notification_secs);
        }
    }

    Ok(())
}

fn launch(paths: &ReframePaths, args: TuiArgs) -> Result<()> {
    let mut settings = Settings::load_or_create(paths)?;
    reframe::logging::init_tracing(paths);
    args.apply(&mut settings);
    reframe::tui::run_tui(settings)?;
    Ok(())
}
