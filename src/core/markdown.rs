// src/core/markdown.rs
//
// Seam around the Markdown collaborator. Callers render at display/export
// time only; the store always holds Markdown source, never markup.

use pulldown_cmark::{html, Event, Options, Parser, TagEnd};

fn options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts
}

/// Markdown source → markup string.
pub fn render(md: &str) -> String {
    let parser = Parser::new_ext(md, options());
    let mut out = String::with_capacity(md.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Markdown source → plain display text (tooltips, status lines).
/// Emphasis and links lose their decoration; text content survives.
pub fn render_text(md: &str) -> String {
    let parser = Parser::new_ext(md, options());
    let mut out = String::with_capacity(md.len());
    for ev in parser {
        match ev {
            Event::Text(t) | Event::Code(t) => out.push_str(&t),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::End(TagEnd::Paragraph | TagEnd::Item | TagEnd::Heading(_)) => {
                out.push('\n');
            }
            _ => {}
        }
    }
    out.trim_end().to_string()
}
