use ctc::application::EntryChange;

use crate::ui::primitives::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeAction {
    Install,
    Uninstall,
}

impl ChangeAction {
    pub fn command(&self) -> &'static str {
        match self {
            ChangeAction::Install => "install",
            ChangeAction::Uninstall => "uninstall",
        }
    }
}

/// Per-entry outcome of `install` / `uninstall`
pub struct ChangesView<'a> {
    action: ChangeAction,
    changes: &'a [EntryChange],
}

impl<'a> ChangesView<'a> {
    pub fn new(action: ChangeAction, changes: &'a [EntryChange]) -> Self {
        Self { action, changes }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        for change in self.changes {
            let kind = change.entry.kind().display_name();
            let value = change.entry.value();
            let line = match (self.action, change.changed) {
                (ChangeAction::Install, true) => format!(
                    "{} Added {} '{}' to .libname",
                    Icon::Success.colored(supports_color, supports_unicode),
                    kind,
                    value
                ),
                (ChangeAction::Install, false) => format!(
                    "{} {} '{}' is already in .libname",
                    Icon::Skip.colored(supports_color, supports_unicode),
                    kind,
                    value
                ),
                (ChangeAction::Uninstall, true) => format!(
                    "{} Removed {} '{}' from .libname",
                    Icon::Success.colored(supports_color, supports_unicode),
                    kind,
                    value
                ),
                (ChangeAction::Uninstall, false) => format!(
                    "{} {} '{}' not found in .libname",
                    Icon::Skip.colored(supports_color, supports_unicode),
                    kind,
                    value
                ),
            };
            out.push_str(&line);
            out.push('\n');
        }

        if self.changes.iter().any(|c| c.changed) {
            out.push_str(&format!(
                "{} Next: run 'ctc apply' or 'ctc run -U' to update CMakeLists.txt\n",
                Icon::Arrow.colored(supports_color, supports_unicode)
            ));
        }
        out
    }
}
