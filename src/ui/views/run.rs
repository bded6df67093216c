use std::path::Path;

use ctc::application::RunResult;
use ctc::domain::value_objects::BuildMode;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Line printed before CMake takes over the terminal
pub fn render_build_start(
    project_name: &str,
    mode: BuildMode,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} Building '{}' in {} mode...\n",
        Icon::Build.colored(supports_color, supports_unicode),
        project_name,
        ColoredText::info(mode.as_str()).render(supports_color)
    )
}

/// Outcome of `ctc run`
pub struct RunView<'a> {
    root: &'a Path,
    result: &'a RunResult,
}

impl<'a> RunView<'a> {
    pub fn new(root: &'a Path, result: &'a RunResult) -> Self {
        Self { root, result }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success(format!("Build succeeded ({})", self.result.mode))
                .render(supports_color)
        ));

        if self.result.artifacts.is_empty() {
            out.push_str(&format!(
                "{} No executables found in build output\n",
                Icon::Warning.colored(supports_color, supports_unicode)
            ));
        } else {
            out.push_str("Executables:\n");
            for artifact in &self.result.artifacts {
                let shown = artifact.strip_prefix(self.root).unwrap_or(artifact);
                out.push_str(&format!(
                    "  {} {}\n",
                    Icon::Bullet.colored(supports_color, supports_unicode),
                    shown.display()
                ));
            }
        }

        if !self.result.build_dir_removed {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Skip.colored(supports_color, supports_unicode),
                ColoredText::dim("build/ kept").render(supports_color)
            ));
        }
        out
    }
}
