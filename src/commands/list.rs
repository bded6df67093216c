use anyhow::{Context, Result};

use ctc::application::ProjectPaths;
use ctc::presentation::factory::create_dependency_use_case;

use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::entries::EntriesView;

pub fn cmd_list(paths: &ProjectPaths, ui: &UiContext) -> Result<()> {
    let list = create_dependency_use_case()
        .list(paths)
        .context("Failed to list dependencies")?;

    if ui.json {
        let _ = json::emit(serde_json::json!({
            "event": "complete",
            "command": "list",
            "total": list.len(),
            "entries": list.entries(),
        }));
    } else {
        print!("{}", EntriesView::new(&list).render(ui.color, ui.unicode));
    }
    Ok(())
}
