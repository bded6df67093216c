use anyhow::{Context, Result};

use ctc::application::{EntryChange, ProjectPaths};
use ctc::presentation::factory::create_dependency_use_case;
use ctc::presentation::DependencyArgs;

use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::changes::{ChangeAction, ChangesView};

pub fn cmd_install(paths: &ProjectPaths, ui: &UiContext, args: &DependencyArgs) -> Result<()> {
    run_change(paths, ui, args, ChangeAction::Install)
}

pub fn cmd_uninstall(paths: &ProjectPaths, ui: &UiContext, args: &DependencyArgs) -> Result<()> {
    run_change(paths, ui, args, ChangeAction::Uninstall)
}

fn run_change(
    paths: &ProjectPaths,
    ui: &UiContext,
    args: &DependencyArgs,
    action: ChangeAction,
) -> Result<()> {
    let request = args.to_request().context("No dependency given")?;

    let use_case = create_dependency_use_case();
    let changes = match action {
        ChangeAction::Install => use_case.install(paths, &request),
        ChangeAction::Uninstall => use_case.uninstall(paths, &request),
    }
    .with_context(|| format!("Failed to {} dependency", action.command()))?;

    if ui.json {
        let _ = json::emit(serde_json::json!({
            "event": "complete",
            "command": action.command(),
            "changes": changes.iter().map(change_json).collect::<Vec<_>>(),
        }));
    } else {
        print!("{}", ChangesView::new(action, &changes).render(ui.color, ui.unicode));
    }
    Ok(())
}

fn change_json(change: &EntryChange) -> serde_json::Value {
    serde_json::json!({
        "kind": change.entry.kind(),
        "value": change.entry.value(),
        "changed": change.changed,
    })
}
