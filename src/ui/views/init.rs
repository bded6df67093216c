use std::path::Path;

use ctc::application::InitResult;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Summary of a scaffolded project
pub struct InitView<'a> {
    root: &'a Path,
    project_name: &'a str,
    result: &'a InitResult,
}

impl<'a> InitView<'a> {
    pub fn new(root: &'a Path, project_name: &'a str, result: &'a InitResult) -> Self {
        Self {
            root,
            project_name,
            result,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{} Initialized project '{}' in {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::info(self.project_name).bold().render(supports_color),
            self.root.display()
        ));

        for dir in &self.result.created_dirs {
            out.push_str(&format!(
                "  {} {}/\n",
                Icon::Bullet.colored(supports_color, supports_unicode),
                self.relative(dir)
            ));
        }
        for file in &self.result.written_files {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Bullet.colored(supports_color, supports_unicode),
                self.relative(file)
            ));
        }
        for file in &self.result.skipped_files {
            out.push_str(&format!(
                "  {} {} {}\n",
                Icon::Skip.colored(supports_color, supports_unicode),
                self.relative(file),
                ColoredText::dim("(exists, kept)").render(supports_color)
            ));
        }

        out.push_str(&format!(
            "\n{} Next: 'ctc install <package>' then 'ctc run -U'\n",
            Icon::Arrow.colored(supports_color, supports_unicode)
        ));
        out
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
