use ctc::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Config warnings, one per line
pub fn render_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for warning in warnings {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(warning.to_string()).render(supports_color)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn renders_one_line_per_warning() {
        let warnings = vec![ConfigWarning {
            key: "mdoe".to_string(),
            file: PathBuf::from("ctc.toml"),
            line: Some(3),
            suggestion: Some("mode".to_string()),
        }];

        let rendered = render_config_warnings(&warnings, false, false);

        assert_eq!(
            rendered,
            "[WARN] unknown config key 'mdoe' in ctc.toml:3 (did you mean 'mode'?)\n"
        );
    }
}
