//! Rounded-box panels for the welcome and goodbye screens.

use colored::Colorize;

/// A bordered block of text with an optional title and subtitle.
#[derive(Debug, Clone)]
pub struct Panel {
    title: Option<String>,
    subtitle: Option<String>,
    body: String,
}

impl Panel {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            title: None,
            subtitle: None,
            body: body.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Welcome panel wrapping the welcome text.
    pub fn welcome(text: &str) -> Self {
        Self::new(text)
            .with_title("Welcome to Strands")
            .with_subtitle("strands")
    }

    pub fn goodbye() -> Self {
        Self::new("Thank you for using Strands!")
    }

    /// Render to a string. Border characters are colored when `color` is set.
    pub fn render(&self, color: bool) -> String {
        let lines: Vec<&str> = self.body.lines().collect();
        let label_width = |s: &Option<String>| s.as_ref().map_or(0, |t| t.chars().count() + 2);
        let width = lines
            .iter()
            .map(|l| l.chars().count())
            .chain([label_width(&self.title), label_width(&self.subtitle)])
            .max()
            .unwrap_or(0)
            + 2;

        let paint = |s: String| if color { s.blue().to_string() } else { s };
        let mut out = Vec::with_capacity(lines.len() + 2);

        out.push(paint(border('╭', '╮', self.title.as_deref(), width)));
        for line in &lines {
            let pad = width - 2 - line.chars().count();
            out.push(format!(
                "{} {}{} {}",
                paint("│".to_string()),
                line,
                " ".repeat(pad),
                paint("│".to_string())
            ));
        }
        out.push(paint(border('╰', '╯', self.subtitle.as_deref(), width)));
        out.join("\n")
    }
}

/// Horizontal border of `width` inner columns with an optional centered label.
fn border(left: char, right: char, label: Option<&str>, width: usize) -> String {
    let inner = match label {
        Some(label) => {
            let label = format!(" {} ", label);
            let remaining = width - label.chars().count();
            let before = remaining / 2;
            format!(
                "{}{}{}",
                "─".repeat(before),
                label,
                "─".repeat(remaining - before)
            )
        }
        None => "─".repeat(width),
    };
    format!("{}{}{}", left, inner, right)
}
