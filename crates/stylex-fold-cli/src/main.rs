//! stylex-fold: fold StyleX style blocks down to their names.

mod app;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io::stdout, path::PathBuf};
use stylex_fold_config::Config;
use stylex_fold_engine::{
    ClassifierSettings, FoldIntent, FoldView, LineClassifier, apply, plan, read_document,
    scan_blocks, scan_source_files,
};

use crate::app::App;

#[derive(Parser)]
#[command(name = "stylex-fold")]
#[command(about = "Fold StyleX style blocks down to their names", long_about = None)]
struct Args {
    /// Config file to use instead of ~/.config/stylex-fold/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Browse files in a terminal viewer with fold keys
    View {
        /// Files or directories to browse
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,
    },
    /// Print the fold request an intent would issue, as JSON
    Lines {
        /// fold-names, fold-blocks, unfold-names or unfold-all
        intent: FoldIntent,
        file: PathBuf,
    },
    /// Print every style block with its top-level key lines, as JSON
    Regions { file: PathBuf },
    /// Apply intents in order and print the folded text
    Render {
        file: PathBuf,
        #[arg(long = "intent", short = 'i', value_name = "INTENT")]
        intents: Vec<FoldIntent>,
    },
    /// Write a config file holding the defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let explicit = args.config.as_ref();

    match args.command {
        Command::View { paths } => {
            let config = load_config(explicit)?;
            let classifier = classifier_from(&config)?;
            view(paths, &config, classifier)
        }
        Command::Lines { intent, file } => {
            let classifier = classifier_from(&load_config(explicit)?)?;
            let doc = read_document(&file)?;
            let request = plan(intent, &doc, &classifier);
            println!("{}", serde_json::to_string_pretty(&request)?);
            Ok(())
        }
        Command::Regions { file } => {
            let classifier = classifier_from(&load_config(explicit)?)?;
            let doc = read_document(&file)?;
            let scans = scan_blocks(&doc, &classifier);
            println!("{}", serde_json::to_string_pretty(&scans)?);
            Ok(())
        }
        Command::Render { file, intents } => {
            let classifier = classifier_from(&load_config(explicit)?)?;
            let doc = read_document(&file)?;
            let mut fold_view = FoldView::new(&doc);
            for intent in intents {
                apply(intent, &doc, &classifier, &mut fold_view);
            }
            print!("{}", fold_view.render());
            Ok(())
        }
        Command::Init { force } => {
            let path = init_config(explicit, force)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

/// Writes the default config to `explicit` or the default location.
fn init_config(explicit: Option<&PathBuf>, force: bool) -> Result<PathBuf> {
    let path = explicit.cloned().unwrap_or_else(Config::config_path);
    if path.exists() && !force {
        bail!(
            "Config file '{}' already exists (pass --force to overwrite)",
            path.display()
        );
    }

    let config = Config::default();
    match explicit {
        Some(path) => config.save_to_path(path)?,
        None => config.save()?,
    }
    Ok(path)
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(explicit: Option<&PathBuf>) -> Result<Config> {
    match explicit {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file '{}' does not exist", path.display()),
        },
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!(
                    "No config at {}, using defaults",
                    Config::config_path().display()
                );
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn classifier_from(config: &Config) -> Result<LineClassifier> {
    let settings = ClassifierSettings {
        markers: config.markers.clone(),
        terminators: config.terminators.clone(),
        terminator_prefixes: config.terminator_prefixes.clone(),
        key_pattern: config.key_pattern.clone(),
    };
    LineClassifier::new(settings).context("Invalid classifier settings in config")
}

fn view(paths: Vec<PathBuf>, config: &Config, classifier: LineClassifier) -> Result<()> {
    let mut files = Vec::new();
    for path in &paths {
        files.extend(scan_source_files(path, &config.extensions)?);
    }
    files.sort();
    files.dedup();

    if files.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }
    log::info!("Viewing {} file(s)", files.len());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(files, classifier);
    let res = app::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn args_parse_intents_and_global_config() {
        let args = Args::try_parse_from([
            "stylex-fold",
            "render",
            "styles.ts",
            "-i",
            "fold-names",
            "--intent",
            "unfold-all",
            "--config",
            "custom.toml",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        match args.command {
            Command::Render { file, intents } => {
                assert_eq!(file, PathBuf::from("styles.ts"));
                assert_eq!(intents, vec![FoldIntent::FoldNames, FoldIntent::UnfoldAll]);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn unknown_intent_is_rejected() {
        let result = Args::try_parse_from(["stylex-fold", "lines", "fold-everything", "a.ts"]);
        assert!(result.is_err());
    }

    #[test]
    fn view_requires_a_path() {
        assert!(Args::try_parse_from(["stylex-fold", "view"]).is_err());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        assert!(load_config(Some(&missing)).is_err());
    }

    #[test]
    fn classifier_uses_config_markers() {
        let config = Config {
            markers: vec!["css.create".to_string()],
            ..Config::default()
        };
        let classifier = classifier_from(&config).unwrap();
        assert!(classifier.is_block_marker("const s = css.create({"));
        assert!(!classifier.is_block_marker("const s = stylex.create({"));
    }

    #[test]
    fn config_defaults_match_classifier_defaults() {
        let config = Config::default();
        let settings = ClassifierSettings::default();

        assert_eq!(config.markers, settings.markers);
        assert_eq!(config.terminators, settings.terminators);
        assert_eq!(config.terminator_prefixes, settings.terminator_prefixes);
        assert_eq!(config.key_pattern, settings.key_pattern);
    }

    #[test]
    fn init_writes_defaults_and_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stylex-fold/config.toml");

        assert_eq!(init_config(Some(&path), false).unwrap(), path);
        assert_eq!(load_config(Some(&path)).unwrap(), Config::default());

        assert!(init_config(Some(&path), false).is_err());
        assert!(init_config(Some(&path), true).is_ok());
    }

    #[test]
    fn invalid_key_pattern_in_config_is_an_error() {
        let config = Config {
            key_pattern: "([".to_string(),
            ..Config::default()
        };
        assert!(classifier_from(&config).is_err());
    }
}
