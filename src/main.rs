//! rigrename - Main entry point
//!
//! A TUI batch renamer for modifiers, constraints, and vertex groups in 3D
//! scene documents, with a headless mode for scripted use.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use rigrename::app::App;
use rigrename::cli::{Cli, Commands};
use rigrename::engine::batch;
use rigrename::engine::rename::RenameDirective;
use rigrename::engine::resolver::ScopeQuery;
use rigrename::error;
use rigrename::scene::{Scene, SelectionContext};
use rigrename::types::{DataKind, OperationKind, OperatorKind, ScopeKind, TargetKind};

/// Initialize the tracing subscriber with appropriate settings
fn init_logger() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            // RUST_LOG overrides the default level
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    info!("rigrename starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Edit { scene }) => run_tui(scene)?,
        Some(Commands::Rename {
            scene,
            output,
            items,
            data,
            target,
            scope,
            operation,
            find,
            replace,
            exact,
            prefix,
            suffix,
        }) => {
            let query = parse_scope_query(&items, &data, &target, &scope);
            let directive = build_directive(&operation, find, replace, exact, prefix, suffix);
            run_headless_rename(&scene, output, query, directive, cli.dry_run)?;
        }
        Some(Commands::Validate { scene }) => {
            info!("Validating scene document: {:?}", scene);
            match Scene::load_from_file(&scene).and_then(|s| s.validate()) {
                Ok(_) => {
                    println!("Scene document is valid: {:?}", scene);
                }
                Err(e) => {
                    eprintln!("Scene validation failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Demo { output }) => {
            Scene::demo().save_to_file(&output)?;
            println!("Demo scene written to {:?}", output);
        }
        None => run_tui(None)?,
    }

    Ok(())
}

/// Parse one scope selector, exiting with a hint on invalid input
fn parse_selector<T>(value: &str, what: &str, valid: &str) -> T
where
    T: std::str::FromStr,
{
    value.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {}: {:?}", what, value);
        eprintln!("   Valid values: {}", valid);
        std::process::exit(1);
    })
}

fn parse_scope_query(items: &str, data: &str, target: &str, scope: &str) -> ScopeQuery {
    let operator: OperatorKind = parse_selector(
        items,
        "item family",
        "modifiers-constraints, vertex-groups",
    );
    let data: DataKind = parse_selector(data, "data kind", "modifiers, constraints");
    let target: TargetKind = parse_selector(target, "target", "objects, bones");
    let scope: ScopeKind = parse_selector(scope, "scope", "selected, all");

    ScopeQuery {
        operator,
        target,
        scope,
        data,
    }
}

fn build_directive(
    operation: &str,
    find: String,
    replace: String,
    exact: bool,
    prefix: String,
    suffix: String,
) -> RenameDirective {
    let operation: OperationKind =
        parse_selector(operation, "operation", "find-replace, prefix, suffix");

    RenameDirective {
        operation,
        find,
        replace,
        prefix,
        suffix,
        exact_match: exact,
    }
}

/// Run one batch rename without the TUI
fn run_headless_rename(
    scene_path: &Path,
    output: Option<PathBuf>,
    query: ScopeQuery,
    directive: RenameDirective,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut scene = Scene::load_from_file(scene_path)?;
    scene.validate()?;

    let ctx = SelectionContext::from_scene(&scene);
    let outcome = batch::execute(&mut scene, &ctx, &query, &directive);

    for report in &outcome.reports {
        println!("{}", report);
    }

    if dry_run {
        println!("(dry-run: document not written)");
        return Ok(());
    }

    // Aborted scopes leave nothing to write back
    if !outcome.aborted && outcome.renamed > 0 {
        let dest = output.unwrap_or_else(|| scene_path.to_path_buf());
        scene.save_to_file(&dest)?;
        info!("Scene document written to {:?}", dest);
    }

    Ok(())
}

/// Run the TUI on a scene document (or the built-in demo scene)
fn run_tui(scene_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let scene = match &scene_path {
        Some(path) => {
            let scene = Scene::load_from_file(path)?;
            scene.validate()?;
            scene
        }
        None => Scene::demo(),
    };

    debug!("Initializing terminal for TUI mode");
    enable_raw_mode()
        .map_err(|e| error::general_error(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| error::general_error(format!("Failed to enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| error::general_error(format!("Failed to create terminal: {}", e)))?;

    let mut app = App::new(scene, scene_path);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if the app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}
