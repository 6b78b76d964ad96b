//! chess-elo CLI: terminal shell for Chess ELO

use chess_elo_tui::{
    headless::{DEFAULT_HEIGHT, DEFAULT_WIDTH},
    render_to_string, run_shell_tui, ConfigError, GlyphMode, ThemeName, UiConfig,
};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a log file for the interactive shell.
const LOG_ENV: &str = "CHESS_ELO_LOG";

/// Chess ELO terminal shell
#[derive(Parser, Debug)]
#[command(name = "chess-elo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load UI settings from a JSON file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Color theme (mocha, latte, high-contrast)
    #[arg(long, global = true)]
    theme: Option<ThemeName>,

    /// Use ASCII glyphs (also enabled by NO_COLOR)
    #[arg(long, global = true)]
    ascii: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Open the interactive shell (default when no command specified)
    Tui,

    /// Render the shell once and print it as text
    Render {
        /// Width in columns
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: u16,

        /// Height in rows
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None | Some(Commands::Tui) => cmd_tui(&cli),
        Some(Commands::Render { width, height }) => cmd_render(&cli, width, height),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_tui(cli: &Cli) -> Result<(), Box<dyn Error>> {
    // Logging to the terminal would draw over the alternate screen.
    if let Some(path) = std::env::var_os(LOG_ENV) {
        init_file_logging(Path::new(&path), cli.verbose)?;
    }

    let config = resolve_config(cli)?;
    debug!(?config, "resolved ui config");

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_shell_tui(config))?;
    Ok(())
}

fn cmd_render(cli: &Cli, width: u16, height: u16) -> Result<(), Box<dyn Error>> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(true))
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = resolve_config(cli)?;
    debug!(?config, width, height, "rendering headless");
    println!("{}", render_to_string(&config, width, height));
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<UiConfig, ConfigError> {
    layer_config(cli, std::env::var_os("NO_COLOR").is_some())
}

/// Defaults, then config file, then environment, then flags.
fn layer_config(cli: &Cli, no_color: bool) -> Result<UiConfig, ConfigError> {
    let base = match &cli.config {
        Some(path) => UiConfig::load(path)?,
        None => UiConfig::default(),
    };
    Ok(apply_flags(base.with_no_color(no_color), cli))
}

fn apply_flags(mut config: UiConfig, cli: &Cli) -> UiConfig {
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if cli.ascii {
        config.glyphs = GlyphMode::Ascii;
    }
    config
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    })
}

fn init_file_logging(path: &Path, verbose: bool) -> std::io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("ui.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn parse_with_config(path: &Path, extra: &[&str]) -> Cli {
        let mut args = vec!["chess-elo", "render", "--config", path.to_str().unwrap()];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args).unwrap()
    }

    const FILE: &str = r#"{"theme": "latte", "glyphs": "unicode", "tick_rate_ms": 100}"#;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["chess-elo"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.ascii);
    }

    #[test]
    fn test_render_defaults() {
        let cli = Cli::try_parse_from(["chess-elo", "render"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Render {
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "chess-elo", "render", "--width", "40", "--theme", "latte", "--ascii",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Render {
                width: 40,
                height: DEFAULT_HEIGHT,
            })
        );

        let config = apply_flags(UiConfig::default(), &cli);
        assert_eq!(config.theme, ThemeName::Latte);
        assert_eq!(config.glyphs, GlyphMode::Ascii);
    }

    #[test]
    fn test_unknown_theme_rejected() {
        assert!(Cli::try_parse_from(["chess-elo", "--theme", "solarized"]).is_err());
    }

    #[test]
    fn test_flags_leave_config_untouched_when_absent() {
        let cli = Cli::try_parse_from(["chess-elo", "tui"]).unwrap();
        let base = UiConfig {
            theme: ThemeName::HighContrast,
            ..UiConfig::default()
        };
        assert_eq!(apply_flags(base.clone(), &cli), base);
    }

    #[test]
    fn test_layer_config_without_file_uses_defaults() {
        let cli = Cli::try_parse_from(["chess-elo"]).unwrap();
        assert_eq!(layer_config(&cli, false).unwrap(), UiConfig::default());
    }

    #[test]
    fn test_layer_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let cli = parse_with_config(&write_config(&dir, FILE), &[]);

        let config = layer_config(&cli, false).unwrap();
        assert_eq!(config.theme, ThemeName::Latte);
        assert_eq!(config.glyphs, GlyphMode::Unicode);
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_layer_config_flag_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let cli = parse_with_config(&write_config(&dir, FILE), &["--theme", "high-contrast"]);

        let config = layer_config(&cli, false).unwrap();
        assert_eq!(config.theme, ThemeName::HighContrast);
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_layer_config_no_color_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let cli = parse_with_config(&write_config(&dir, FILE), &[]);

        let config = layer_config(&cli, true).unwrap();
        assert_eq!(config.glyphs, GlyphMode::Ascii);
        assert_eq!(config.theme, ThemeName::Latte);
    }

    #[test]
    fn test_layer_config_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let cli = parse_with_config(&write_config(&dir, "{ not json"), &[]);

        let err = layer_config(&cli, false).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_layer_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let cli = parse_with_config(&dir.path().join("missing.json"), &[]);

        let err = layer_config(&cli, false).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
