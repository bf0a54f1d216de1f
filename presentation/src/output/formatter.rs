//! Panel rendering and color theme

use colored::Colorize;

/// Widest a panel's content area may grow before lines are wrapped
pub const MAX_CONTENT_WIDTH: usize = 96;

const MIN_CONTENT_WIDTH: usize = 40;

/// Terminal color theme
///
/// With color disabled every method returns its input unchanged, which keeps
/// rendered output free of escape codes.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// A theme that never emits escape codes
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Sky blue, used for borders and headings
    pub fn border(&self, text: &str) -> String {
        if self.color {
            text.truecolor(0x87, 0xce, 0xeb).to_string()
        } else {
            text.to_string()
        }
    }

    /// Light salmon, used for panel titles
    pub fn title(&self, text: &str) -> String {
        if self.color {
            text.truecolor(0xff, 0xa0, 0x7a).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn success(&self, text: &str) -> String {
        if self.color {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn error(&self, text: &str) -> String {
        if self.color {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(true)
    }
}

/// A titled box drawn with rounded box characters
#[derive(Debug, Clone)]
pub struct Panel<'a> {
    title: &'a str,
    body: &'a str,
}

impl<'a> Panel<'a> {
    pub fn new(title: &'a str, body: &'a str) -> Self {
        Self { title, body }
    }

    /// Render the panel. Body lines wider than [`MAX_CONTENT_WIDTH`] are
    /// wrapped at word boundaries.
    pub fn render(&self, theme: &Theme) -> String {
        let lines: Vec<String> = self
            .body
            .lines()
            .flat_map(|line| wrap_line(line, MAX_CONTENT_WIDTH))
            .collect();

        let title_width = self.title.chars().count() + 2;
        let width = lines
            .iter()
            .map(|l| l.chars().count())
            .chain([title_width, MIN_CONTENT_WIDTH])
            .max()
            .unwrap_or(MIN_CONTENT_WIDTH);

        // Title sits centered in the top border, surrounded by single spaces.
        let fill = width + 2 - title_width;
        let left = fill / 2;
        let right = fill - left;

        let mut out = String::new();
        out.push_str(&theme.border(&format!("╭{}", "─".repeat(left))));
        out.push_str(&format!(" {} ", theme.title(self.title)));
        out.push_str(&theme.border(&format!("{}╮", "─".repeat(right))));
        out.push('\n');

        for line in &lines {
            let pad = width - line.chars().count();
            out.push_str(&theme.border("│"));
            out.push_str(&format!(" {}{} ", line, " ".repeat(pad)));
            out.push_str(&theme.border("│"));
            out.push('\n');
        }

        out.push_str(&theme.border(&format!("╰{}╯", "─".repeat(width + 2))));
        out
    }
}

/// Wrap by character count, breaking at the last whitespace that follows
/// some text in the window. Only the whitespace character at a break is
/// consumed; indentation and inner runs of spaces survive. Stretches with no
/// usable break are split hard.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() <= width {
        return vec![line.to_string()];
    }

    let mut wrapped = Vec::new();
    let mut start = 0;

    while chars.len() - start > width {
        let window = &chars[start..start + width];
        let text_at = window.iter().position(|c| !c.is_whitespace());
        let break_at = text_at.and_then(|first| {
            (first + 1..width)
                .rev()
                .find(|&i| window[i].is_whitespace())
        });

        match break_at {
            Some(i) => {
                wrapped.push(window[..i].iter().collect());
                start += i + 1;
            }
            None => {
                wrapped.push(window.iter().collect());
                start += width;
            }
        }
    }

    wrapped.push(chars[start..].iter().collect());
    wrapped
}
