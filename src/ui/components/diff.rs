use crossterm::style::Stylize;
use similar::{ChangeTag, TextDiff};

use crate::ui::theme;

/// Lines of unchanged context around each hunk
const CONTEXT_RADIUS: usize = 3;

/// Render a unified diff between the current and regenerated file
///
/// Returns an empty string when the contents are identical.
pub fn render_unified_diff(path: &str, old: &str, new: &str, supports_color: bool) -> String {
    if old == new {
        return String::new();
    }

    let diff = TextDiff::from_lines(old, new);
    let mut out = String::new();

    push_line(&mut out, &format!("--- a/{}", path), LineStyle::Header, supports_color);
    push_line(&mut out, &format!("+++ b/{}", path), LineStyle::Header, supports_color);

    let mut unified = diff.unified_diff();
    unified.context_radius(CONTEXT_RADIUS);
    for hunk in unified.iter_hunks() {
        push_line(&mut out, &hunk.header().to_string(), LineStyle::Hunk, supports_color);
        for change in hunk.iter_changes() {
            let sign = match change.tag() {
                ChangeTag::Delete => "-",
                ChangeTag::Insert => "+",
                ChangeTag::Equal => " ",
            };
            let value = change.value().trim_end_matches('\n');
            push_line(
                &mut out,
                &format!("{}{}", sign, value),
                LineStyle::Body(change.tag()),
                supports_color,
            );
        }
    }

    out
}

#[derive(Debug, Clone, Copy)]
enum LineStyle {
    Header,
    Hunk,
    Body(ChangeTag),
}

fn push_line(out: &mut String, s: &str, style: LineStyle, supports_color: bool) {
    if supports_color {
        let styled = match style {
            LineStyle::Header => s.with(theme::colors::INFO).bold(),
            LineStyle::Hunk => s.with(theme::colors::INFO),
            LineStyle::Body(ChangeTag::Delete) => s.with(theme::colors::ERROR),
            LineStyle::Body(ChangeTag::Insert) => s.with(theme::colors::SUCCESS),
            LineStyle::Body(ChangeTag::Equal) => s.with(theme::colors::DIM),
        };
        out.push_str(&styled.to_string());
    } else {
        out.push_str(s);
    }
    out.push('\n');
}
