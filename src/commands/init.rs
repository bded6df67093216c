use anyhow::{Context, Result};

use ctc::application::{InitOptions, ProjectPaths};
use ctc::config::Config;
use ctc::presentation::factory::create_init_use_case;

use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::init::InitView;

pub fn cmd_init(
    paths: &ProjectPaths,
    config: &Config,
    ui: &UiContext,
    name: Option<String>,
    readme: bool,
    force: bool,
) -> Result<()> {
    let project_name = name.unwrap_or_else(|| config.project.name.clone());
    let options = InitOptions {
        project_name: project_name.clone(),
        readme,
        force,
    };

    let result = create_init_use_case()
        .execute(paths, &options)
        .context("Failed to initialize project")?;

    if ui.json {
        let _ = json::emit(serde_json::json!({
            "event": "complete",
            "command": "init",
            "project": project_name,
            "path": paths.root().display().to_string(),
            "created_dirs": json::path_list(&result.created_dirs),
            "written_files": json::path_list(&result.written_files),
            "skipped_files": json::path_list(&result.skipped_files),
        }));
    } else {
        print!(
            "{}",
            InitView::new(paths.root(), &project_name, &result).render(ui.color, ui.unicode)
        );
    }
    Ok(())
}
