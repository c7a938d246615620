use anyhow::{Context, Result};
use carpool::app::App;
use carpool::cli::Cli;
use carpool::styles::{init_theme, ThemeType};
use carpool::Config;
use clap::Parser;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore the terminal first so the panic message is readable
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

fn no_color_requested(cli: &Cli) -> bool {
    cli.no_colors || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.command.is_some() {
        return cli.execute();
    }

    setup_panic_hook();

    let log_dir = carpool::utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout belongs to the TUI, so logs go to a file
    let file_appender = tracing_appender::rolling::never(&log_dir, "carpool.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config_path = cli.config_path();
    let config = Config::load_or_create(&config_path).context("Failed to load configuration")?;

    let theme_type = if no_color_requested(&cli) {
        ThemeType::NoColor
    } else {
        config.theme.parse().unwrap_or_default()
    };
    init_theme(theme_type);

    let mut app = App::new(config, config_path)?;
    let result = app.run();

    // Flush buffered log lines before exiting
    drop(guard);

    result
}
