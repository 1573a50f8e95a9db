//! View rendering for the fetchlist widget.

use super::model::Model;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Styles used when rendering the suggestion list.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for option values.
    pub value: Style,
    /// Style for option labels.
    pub label: Style,
}

/// Default styles: plain values, dimmed labels.
pub fn default_styles() -> Styles {
    Styles {
        value: Style::new(),
        label: Style::new().foreground(Color::from("240")),
    }
}

impl Default for Styles {
    fn default() -> Self {
        default_styles()
    }
}

impl Model {
    /// Renders the current suggestion entries, one per line.
    ///
    /// With a non-zero [`width`](Model::width), each line is truncated to
    /// that many display cells; the label is dropped entirely when the value
    /// leaves it no room.
    pub fn view(&self) -> String {
        let width = if self.width > 0 {
            self.width as usize
        } else {
            0
        };

        let mut lines = Vec::with_capacity(self.datalist().len());
        for entry in self.datalist().entries() {
            let value = clip(&entry.value, width);
            let mut line = self.styles.value.render(&value);

            if let Some(label) = &entry.label {
                let remaining = if width > 0 {
                    width.saturating_sub(value.width() + 1)
                } else {
                    0
                };
                if width == 0 || remaining > 0 {
                    let label = clip(label, remaining);
                    if !label.is_empty() {
                        line.push(' ');
                        line.push_str(&self.styles.label.render(&label));
                    }
                }
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}

/// Truncates `text` to at most `width` display cells; 0 means unlimited.
fn clip(text: &str, width: usize) -> String {
    if width == 0 || text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_respects_display_width() {
        assert_eq!(clip("hello", 0), "hello");
        assert_eq!(clip("hello", 10), "hello");
        assert_eq!(clip("hello", 3), "hel");
        // Wide characters count double.
        assert_eq!(clip("日本語", 4), "日本");
    }
}
