//! ctc - CMake Template Creator
//!
//! Usage: ctc <COMMAND>
//!
//! Commands:
//!   init       Create a new project structure
//!   install    Add a dependency to .libname
//!   uninstall  Remove a dependency from .libname
//!   apply      Regenerate CMakeLists.txt from .libname
//!   run        Build with CMake and copy executables to bin/
//!   list       Show all dependencies in .libname

use anyhow::{Context, Result};
use clap::Parser;

use ctc::application::ProjectPaths;
use ctc::config::load_for_project;
use ctc::presentation::{Cli, Commands};

mod commands;
mod ui;

use ui::context::UiContext;
use ui::views::warnings::render_config_warnings;

fn main() {
    let cli = Cli::parse();
    ctc::logging::init(cli.verbose);

    let json = cli.json;
    let command = command_name(&cli.command);

    if let Err(err) = run(cli) {
        if json {
            commands::emit_error(command, &err);
        }
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let paths = ProjectPaths::new(cwd);

    let (config, warnings) =
        load_for_project(paths.root()).context("Failed to load configuration")?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

    if !warnings.is_empty() && !ui.json {
        eprint!("{}", render_config_warnings(&warnings, ui.color, ui.unicode));
    }
    for warning in &warnings {
        tracing::debug!(%warning, "config warning");
    }

    match cli.command {
        Commands::Init {
            readme,
            name,
            force,
        } => commands::init::cmd_init(&paths, &config, &ui, name, readme, force),
        Commands::Install { dependency } => {
            commands::dependencies::cmd_install(&paths, &ui, &dependency)
        }
        Commands::Uninstall { dependency } => {
            commands::dependencies::cmd_uninstall(&paths, &ui, &dependency)
        }
        Commands::Apply { name, diff } => {
            commands::apply::cmd_apply(&paths, &config, &ui, name, diff)
        }
        Commands::Run {
            name,
            mode,
            keep_build,
            update_cmake,
        } => commands::run::cmd_run(
            &paths,
            &config,
            &ui,
            commands::run::RunArgs {
                name,
                mode,
                keep_build,
                update_cmake,
            },
        ),
        Commands::List => commands::list::cmd_list(&paths, &ui),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Init { .. } => "init",
        Commands::Install { .. } => "install",
        Commands::Uninstall { .. } => "uninstall",
        Commands::Apply { .. } => "apply",
        Commands::Run { .. } => "run",
        Commands::List => "list",
    }
}
