use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use super::code::{code_block_markup, random_block_id, BlockIdSource};
use super::links::{download_href, link_markup};
use crate::utils::escape::escape_html;

/// Rewrites a resolved URL before it is emitted in markup.
///
/// Must be safe to call repeatedly within one render; a panic inside the
/// rewriter propagates to the caller as a configuration bug.
pub type UrlRewriter = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Converts chat Markdown into the HTML fragment the chat surface injects.
///
/// The renderer owns its URL rewriter and block-id source. Installing a
/// rewriter through [`MarkdownRenderer::render_with_rewriter`] replaces it
/// for this and every later call on the instance (last write wins); callers
/// that need isolation use separate instances rather than shared process
/// state.
pub struct MarkdownRenderer {
    api_base: String,
    url_rewriter: Option<UrlRewriter>,
    block_ids: BlockIdSource,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self {
            api_base: String::new(),
            url_rewriter: None,
            block_ids: Box::new(random_block_id),
        }
    }

    /// Base URL prepended to download-API hrefs; empty means same-origin.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Replace the block-id source, e.g. with a counter for deterministic
    /// tests.
    pub fn with_block_id_source(mut self, source: BlockIdSource) -> Self {
        self.block_ids = source;
        self
    }

    /// Install `rewriter` for this and all subsequent renders, then render.
    pub fn render_with_rewriter(
        &mut self,
        markdown: &str,
        rewriter: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> String {
        self.url_rewriter = Some(Box::new(rewriter));
        self.render(markdown)
    }

    /// Render a Markdown document to block-level markup.
    ///
    /// Malformed input never fails: anything the parser does not recognize
    /// degrades to literal text.
    pub fn render(&mut self, markdown: &str) -> String {
        let mut events = Parser::new(markdown);
        let mut out = String::new();
        self.blocks(&mut events, &mut out, None);
        out
    }

    fn blocks<'a, I>(&mut self, events: &mut I, out: &mut String, until: Option<TagEnd>)
    where
        I: Iterator<Item = Event<'a>>,
    {
        while let Some(event) = events.next() {
            match event {
                Event::End(end) if Some(end) == until => return,
                Event::Start(Tag::Paragraph) => {
                    let text = self.inline(events, TagEnd::Paragraph);
                    out.push_str("<p class=\"py-2\">");
                    out.push_str(&text);
                    out.push_str("</p>\n");
                }
                Event::Start(Tag::Heading { level, .. }) => {
                    let text = self.inline(events, TagEnd::Heading(level));
                    let depth = level as u8;
                    let class = if depth == 3 {
                        format!(" class=\"h{depth}\"")
                    } else {
                        String::new()
                    };
                    out.push_str(&format!("\n      <h{depth}{class}>{text}</h{depth}>"));
                }
                Event::Start(Tag::List(start)) => {
                    let markup = self.list(events, start);
                    out.push_str(&markup);
                }
                Event::Start(Tag::CodeBlock(_)) => {
                    let text = collect_code_text(events);
                    let code_id = (self.block_ids)();
                    out.push_str(&code_block_markup(&text, false, &code_id));
                }
                Event::Rule => out.push_str("<hr class=\"hr\" />"),
                Event::Start(Tag::BlockQuote(kind)) => {
                    // Block quotes are not customized; their children render
                    // as ordinary blocks.
                    self.blocks(events, out, Some(TagEnd::BlockQuote(kind)));
                }
                Event::Start(Tag::HtmlBlock) => {
                    // Raw HTML is not trusted; it degrades to literal text.
                    let text = self.inline(events, TagEnd::HtmlBlock);
                    out.push_str(&text);
                }
                Event::Start(tag) => {
                    // Unrecognized block container: keep its literal content.
                    let end = tag.to_end();
                    let text = self.inline(events, end);
                    out.push_str(&text);
                }
                Event::Text(text) => out.push_str(&escape_html(&text)),
                Event::Html(html) => out.push_str(&escape_html(&html)),
                _ => {}
            }
        }
    }

    /// Consume inline events until `until`, producing inline markup.
    fn inline<'a, I>(&mut self, events: &mut I, until: TagEnd) -> String
    where
        I: Iterator<Item = Event<'a>>,
    {
        let mut out = String::new();
        while let Some(event) = events.next() {
            match event {
                Event::End(end) if end == until => break,
                other => self.inline_event(other, events, &mut out),
            }
        }
        out
    }

    fn inline_event<'a, I>(&mut self, event: Event<'a>, events: &mut I, out: &mut String)
    where
        I: Iterator<Item = Event<'a>>,
    {
        match event {
            Event::Text(text) => out.push_str(&escape_html(&text)),
            Event::Code(code) => {
                out.push_str("<code class=\"code\">");
                out.push_str(&escape_html(&code));
                out.push_str("</code>");
            }
            Event::SoftBreak => out.push('\n'),
            Event::HardBreak => out.push_str("<br>"),
            Event::Html(html) | Event::InlineHtml(html) => out.push_str(&escape_html(&html)),
            Event::Start(Tag::Emphasis) => {
                let inner = self.inline(events, TagEnd::Emphasis);
                out.push_str("<em>");
                out.push_str(&inner);
                out.push_str("</em>");
            }
            Event::Start(Tag::Strong) => {
                let inner = self.inline(events, TagEnd::Strong);
                out.push_str("<strong>");
                out.push_str(&inner);
                out.push_str("</strong>");
            }
            Event::Start(Tag::Link {
                dest_url, title, ..
            }) => {
                let text = self.inline(events, TagEnd::Link);
                let title = (!title.is_empty()).then_some(&*title);
                out.push_str(&self.anchor(&dest_url, title, &text));
            }
            Event::Start(Tag::Image { .. }) => {
                // Images degrade to their alt text.
                let alt = self.inline(events, TagEnd::Image);
                out.push_str(&alt);
            }
            Event::Start(tag) => {
                // Unrecognized inline container: keep its literal content.
                let end = tag.to_end();
                let inner = self.inline(events, end);
                out.push_str(&inner);
            }
            _ => {}
        }
    }

    /// Anchor markup with scratch-space hrefs rewritten to the download API
    /// and passed through the configured rewriter.
    fn anchor(&self, dest: &str, title: Option<&str>, text: &str) -> String {
        let href = match download_href(dest, &self.api_base) {
            Some(api_href) => match &self.url_rewriter {
                Some(rewrite) => rewrite(&api_href),
                None => api_href,
            },
            None => dest.to_string(),
        };
        link_markup(&href, title, text)
    }

    fn list<'a, I>(&mut self, events: &mut I, start: Option<u64>) -> String
    where
        I: Iterator<Item = Event<'a>>,
    {
        let mut items = String::new();
        loop {
            match events.next() {
                Some(Event::Start(Tag::Item)) => {
                    let item = self.list_item(events);
                    items.push_str("<li>");
                    items.push_str(&item);
                    items.push_str("</li>\n");
                }
                Some(Event::End(TagEnd::List(_))) | None => break,
                Some(_) => {}
            }
        }

        match start {
            Some(start) => {
                let start_attr = if start != 1 {
                    format!(" start=\"{start}\"")
                } else {
                    String::new()
                };
                format!(
                    "<ol class=\"list-inside list-decimal space-y-1 py-2 pl-4\"{start_attr}>\n{items}\n</ol>\n"
                )
            }
            None => {
                format!("<ul class=\"list-inside list-disc space-y-1 pl-4\">\n      {items}</ul>\n")
            }
        }
    }

    fn list_item<'a, I>(&mut self, events: &mut I) -> String
    where
        I: Iterator<Item = Event<'a>>,
    {
        let mut out = String::new();
        while let Some(event) = events.next() {
            match event {
                Event::End(TagEnd::Item) => break,
                // Loose items render their paragraphs inline inside the item.
                Event::Start(Tag::Paragraph) => {
                    let text = self.inline(events, TagEnd::Paragraph);
                    out.push_str(&text);
                }
                Event::Start(Tag::List(start)) => {
                    let nested = self.list(events, start);
                    out.push_str(&nested);
                }
                other => self.inline_event(other, events, &mut out),
            }
        }
        out
    }
}

fn collect_code_text<'a, I>(events: &mut I) -> String
where
    I: Iterator<Item = Event<'a>>,
{
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(chunk) => text.push_str(&chunk),
            Event::End(TagEnd::CodeBlock) => break,
            _ => {}
        }
    }
    // Parity with the surface's parser tokens, which exclude the closing
    // newline of a fenced block.
    match text.strip_suffix('\n') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}
