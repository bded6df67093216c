use anyhow::{Context, Result};

use ctc::application::{ApplyOptions, ProjectPaths, DESCRIPTOR_FILE};
use ctc::config::Config;
use ctc::presentation::factory::create_apply_use_case;

use crate::ui::components::diff::render_unified_diff;
use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::apply::ApplyView;

pub fn cmd_apply(
    paths: &ProjectPaths,
    config: &Config,
    ui: &UiContext,
    name: Option<String>,
    diff: bool,
) -> Result<()> {
    let options = ApplyOptions {
        project_name: name.unwrap_or_else(|| config.project.name.clone()),
    };
    let use_case = create_apply_use_case();

    if diff {
        let plan = use_case
            .plan(paths, &options)
            .context("Failed to generate CMakeLists.txt")?;
        let current = plan.current.as_deref().unwrap_or("");

        if ui.json {
            let _ = json::emit(serde_json::json!({
                "event": "complete",
                "command": "apply",
                "dry_run": true,
                "changed": plan.is_changed(),
                "diff": render_unified_diff(DESCRIPTOR_FILE, current, &plan.rendered, false),
            }));
        } else if plan.is_changed() {
            println!(
                "{} Pending changes to {}:",
                Icon::Diff.colored(ui.color, ui.unicode),
                DESCRIPTOR_FILE
            );
            print!(
                "{}",
                render_unified_diff(DESCRIPTOR_FILE, current, &plan.rendered, ui.color)
            );
        } else {
            println!(
                "{} {} is up to date",
                Icon::Success.colored(ui.color, ui.unicode),
                DESCRIPTOR_FILE
            );
        }
        return Ok(());
    }

    let plan = use_case
        .execute(paths, &options)
        .context("Failed to update CMakeLists.txt")?;

    if ui.json {
        let _ = json::emit(serde_json::json!({
            "event": "complete",
            "command": "apply",
            "project": options.project_name,
            "changed": plan.is_changed(),
            "entries": plan.entries.len(),
        }));
    } else {
        print!(
            "{}",
            ApplyView::new(&options.project_name, &plan).render(ui.color, ui.unicode)
        );
    }
    Ok(())
}
