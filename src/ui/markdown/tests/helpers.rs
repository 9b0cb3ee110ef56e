use crate::ui::markdown::MarkdownRenderer;

/// Renderer with a counter-based block-id source for stable assertions.
pub fn deterministic_renderer() -> MarkdownRenderer {
    let mut counter = 0usize;
    MarkdownRenderer::new().with_block_id_source(Box::new(move || {
        counter += 1;
        format!("codeblock-test{counter}")
    }))
}

pub fn render(markdown: &str) -> String {
    deterministic_renderer().render(markdown)
}
