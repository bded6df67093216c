use std::io::Write;

use anyhow::{Context, Result};

use ctc::application::{ProjectPaths, RunOptions};
use ctc::config::Config;
use ctc::domain::value_objects::BuildMode;
use ctc::infrastructure::CmakeTool;
use ctc::presentation::factory::create_run_use_case;

use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::run::{render_build_start, RunView};

/// Flags of `ctc run`
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    pub name: Option<String>,
    pub mode: Option<BuildMode>,
    pub keep_build: bool,
    pub update_cmake: bool,
}

/// Merge flags over the loaded configuration
pub fn resolve_options(args: RunArgs, config: &Config) -> RunOptions {
    RunOptions {
        project_name: args.name.unwrap_or_else(|| config.project.name.clone()),
        mode: args.mode.unwrap_or(config.build.mode),
        keep_build_dir: args.keep_build || config.build.keep_build_dir,
        update_descriptor: args.update_cmake,
    }
}

pub fn cmd_run(paths: &ProjectPaths, config: &Config, ui: &UiContext, args: RunArgs) -> Result<()> {
    let options = resolve_options(args, config);

    if !ui.json {
        print!(
            "{}",
            render_build_start(&options.project_name, options.mode, ui.color, ui.unicode)
        );
        let _ = std::io::stdout().flush();
    }

    // CMake's own output would break the NDJSON stream
    let cmake = CmakeTool::new(&config.build.cmake).quiet(ui.json);
    let result = create_run_use_case(cmake)
        .execute(paths, &options)
        .context("Build failed")?;

    if ui.json {
        let _ = json::emit(serde_json::json!({
            "event": "complete",
            "command": "run",
            "mode": result.mode.as_str(),
            "applied": result.applied.is_some(),
            "artifacts": json::path_list(&result.artifacts),
            "build_dir_removed": result.build_dir_removed,
        }));
    } else {
        print!("{}", RunView::new(paths.root(), &result).render(ui.color, ui.unicode));
    }
    Ok(())
}
