//! Markdown to sanitized HTML.

use pulldown_cmark::{html, Options, Parser};

/// Render markdown and strip anything unsafe for `dangerous_inner_html`
/// (scripts, event handler attributes, `javascript:` links).
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut rendered = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut rendered, Parser::new_ext(source, options));
    ammonia::clean(&rendered)
}
