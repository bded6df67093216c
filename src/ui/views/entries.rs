use ctc::domain::entities::{DependencyKind, EntryList};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{rule, ColoredText};

/// Plural heading for a group of entries
pub fn group_title(kind: DependencyKind) -> &'static str {
    match kind {
        DependencyKind::Package => "Packages",
        DependencyKind::LibraryPath => "Library paths",
        DependencyKind::LibraryName => "Libraries",
        DependencyKind::IncludePath => "Include paths",
        DependencyKind::ToolchainFile => "Toolchain file",
        DependencyKind::PackageComponent => "Package components",
        DependencyKind::LinkOverride => "Link overrides",
    }
}

/// `ctc list` output: entries grouped by kind with a total
pub struct EntriesView<'a> {
    list: &'a EntryList,
}

impl<'a> EntriesView<'a> {
    pub fn new(list: &'a EntryList) -> Self {
        Self { list }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        if self.list.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning("No dependencies found in .libname.").render(supports_color)
            ));
            out.push_str(&format!(
                "{} Use 'ctc install' to add dependencies.\n",
                Icon::Arrow.colored(supports_color, supports_unicode)
            ));
            return out;
        }

        out.push_str(
            &ColoredText::plain("Dependencies in .libname:")
                .bold()
                .render(supports_color),
        );
        out.push('\n');
        out.push_str(&rule(supports_unicode));
        out.push('\n');

        for kind in DependencyKind::ALL {
            let values: Vec<&str> = self.list.of_kind(kind).map(|e| e.value()).collect();
            if values.is_empty() {
                continue;
            }
            out.push('\n');
            let title = format!("{} ({}):", group_title(kind), values.len());
            out.push_str(&ColoredText::info(title).render(supports_color));
            out.push('\n');
            for value in values {
                out.push_str(&format!(
                    "  {} {}\n",
                    Icon::Bullet.colored(supports_color, supports_unicode),
                    value
                ));
            }
        }

        out.push('\n');
        out.push_str(&rule(supports_unicode));
        out.push('\n');
        out.push_str(&format!("Total: {} dependencies\n", self.list.len()));
        out
    }
}
