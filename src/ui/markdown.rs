//! Markdown replies rendered as styled terminal lines.

use std::mem;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::prelude::*;

/// Converts `markdown` into lines styled on top of `base`.
///
/// Emphasis becomes bold/italic spans, headings are bold, list items get
/// bullets or numbers, and code blocks are indented.
pub fn markdown_lines(markdown: &str, base: Style) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut writer = LineWriter::new(base);
    for event in Parser::new_ext(markdown, options) {
        writer.event(event);
    }
    let lines = writer.finish();

    if lines.is_empty() {
        markdown
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), base)))
            .collect()
    } else {
        lines
    }
}

struct LineWriter {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    styles: Vec<Style>,
    /// Next number for ordered lists, `None` for bullet lists.
    lists: Vec<Option<u64>>,
    in_code_block: bool,
}

impl LineWriter {
    fn new(base: Style) -> Self {
        Self {
            lines: Vec::new(),
            spans: Vec::new(),
            styles: vec![base],
            lists: Vec::new(),
            in_code_block: false,
        }
    }

    fn style(&self) -> Style {
        self.styles.last().copied().unwrap_or_default()
    }

    fn push_style(&mut self, patch: Style) {
        let style = self.style().patch(patch);
        self.styles.push(style);
    }

    fn pop_style(&mut self) {
        if self.styles.len() > 1 {
            self.styles.pop();
        }
    }

    fn flush(&mut self) {
        if !self.spans.is_empty() {
            self.lines.push(Line::from(mem::take(&mut self.spans)));
        }
    }

    /// Closes a top-level block with one blank separator line.
    fn end_block(&mut self) {
        self.flush();
        let after_content = self.lines.last().is_some_and(|line| !line.spans.is_empty());
        if self.lists.is_empty() && after_content {
            self.lines.push(Line::default());
        }
    }

    fn event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) if self.in_code_block => {
                let style = self.style().fg(Color::Yellow);
                for line in text.lines() {
                    self.spans.push(Span::styled(format!("  {}", line), style));
                    self.flush();
                }
            }
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => {
                let style = self.style();
                self.spans.push(Span::styled(text.into_string(), style));
            }
            Event::Code(text) => {
                let style = self.style().fg(Color::Yellow);
                self.spans.push(Span::styled(text.into_string(), style));
            }
            Event::SoftBreak => {
                let style = self.style();
                self.spans.push(Span::styled(" ", style));
            }
            Event::HardBreak => self.flush(),
            Event::Rule => {
                self.flush();
                self.lines.push(Line::from("────────".fg(Color::DarkGray)));
                self.end_block();
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush();
                let mut style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
                if level == HeadingLevel::H1 {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                self.push_style(style);
            }
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::List(start) => {
                self.flush();
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush();
                let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                let marker = match self.lists.last_mut() {
                    Some(Some(number)) => {
                        let marker = format!("{}{}. ", indent, number);
                        *number += 1;
                        marker
                    }
                    _ => format!("{}• ", indent),
                };
                self.spans.push(Span::styled(marker, Style::default().fg(Color::Yellow)));
            }
            Tag::CodeBlock(_) => {
                self.flush();
                self.in_code_block = true;
            }
            Tag::BlockQuote(_) => {
                self.flush();
                self.spans.push(Span::styled("│ ", Style::default().fg(Color::DarkGray)));
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                self.flush();
                self.pop_style();
                self.end_block();
            }
            TagEnd::Strong | TagEnd::Emphasis | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Paragraph => self.end_block(),
            TagEnd::Item => self.flush(),
            TagEnd::List(_) => {
                self.flush();
                self.lists.pop();
                self.end_block();
            }
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                self.end_block();
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        while self.lines.last().is_some_and(|line| line.spans.is_empty()) {
            self.lines.pop();
        }
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn render(markdown: &str) -> Vec<Line<'static>> {
        markdown_lines(markdown, Style::default())
    }

    #[test]
    fn test_blocks_are_laid_out() {
        let lines = render(
            "# Agni\n\n**Fire** god and *messenger*.\n\n- one\n- two\n\n1. a\n2. b\n\n```\nlet x\n```\n",
        );
        let texts: Vec<String> = lines.iter().map(text).collect();
        assert_eq!(
            texts,
            [
                "Agni",
                "",
                "Fire god and messenger.",
                "",
                "• one",
                "• two",
                "",
                "1. a",
                "2. b",
                "",
                "  let x",
            ]
        );
    }

    #[test]
    fn test_emphasis_becomes_modifiers() {
        let lines = render("**Fire** god and *messenger*.");
        let span = |content: &str| {
            lines[0]
                .spans
                .iter()
                .find(|span| span.content == content)
                .map(|span| span.style.add_modifier)
                .unwrap()
        };
        assert!(span("Fire").contains(Modifier::BOLD));
        assert!(!span("Fire").contains(Modifier::ITALIC));
        assert!(span("messenger").contains(Modifier::ITALIC));
        assert!(!span("messenger").contains(Modifier::BOLD));
    }

    #[test]
    fn test_heading_is_bold() {
        let lines = render("## Mandalas");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_nested_list_is_indented() {
        let lines = render("- Books\n  - Mandala 1\n  - Mandala 2\n- Hymns");
        let texts: Vec<String> = lines.iter().map(text).collect();
        assert_eq!(texts, ["• Books", "  • Mandala 1", "  • Mandala 2", "• Hymns"]);
    }

    #[test]
    fn test_plain_text_passes_through() {
        let lines = render("The Rig Vedha has ten books.");
        assert_eq!(lines.len(), 1);
        assert_eq!(text(&lines[0]), "The Rig Vedha has ten books.");
        assert!(render("").is_empty());
    }
}
