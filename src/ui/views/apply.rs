use ctc::application::ApplyPlan;
use ctc::domain::entities::{DependencyKind, EntryList};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::entries::group_title;

/// Result of `ctc apply`
pub struct ApplyView<'a> {
    project_name: &'a str,
    plan: &'a ApplyPlan,
}

impl<'a> ApplyView<'a> {
    pub fn new(project_name: &'a str, plan: &'a ApplyPlan) -> Self {
        Self { project_name, plan }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        let status = if self.plan.is_changed() {
            "Updated CMakeLists.txt"
        } else {
            "CMakeLists.txt already up to date"
        };
        out.push_str(&format!(
            "{} {} (project '{}')\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success(status).render(supports_color),
            self.project_name
        ));

        if self.plan.entries.is_empty() {
            out.push_str(&format!(
                "{} No dependencies in .libname. Use 'ctc install' to add some.\n",
                Icon::Warning.colored(supports_color, supports_unicode)
            ));
        } else {
            out.push_str("\nApplied dependencies:\n");
            out.push_str(&applied_summary(&self.plan.entries, supports_color));
        }

        out.push_str(&format!(
            "\n{} Next: run 'ctc run' to build\n",
            Icon::Arrow.colored(supports_color, supports_unicode)
        ));
        out
    }
}

/// One line per non-empty kind, values comma separated
pub fn applied_summary(entries: &EntryList, supports_color: bool) -> String {
    let mut out = String::new();
    for kind in DependencyKind::ALL {
        let values: Vec<&str> = entries.of_kind(kind).map(|e| e.value()).collect();
        if values.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "  - {}: {}\n",
            ColoredText::dim(group_title(kind)).render(supports_color),
            values.join(", ")
        ));
    }
    out
}
