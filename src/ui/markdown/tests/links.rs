use super::helpers::render;
use crate::ui::markdown::MarkdownRenderer;

#[test]
fn ordinary_links_keep_their_href() {
    assert_eq!(
        render("[site](https://example.com)"),
        "<p class=\"py-2\"><a href=\"https://example.com\" title=\"Click to download site\" download=\"site\" class=\"underline text-primary-500\">site</a></p>\n"
    );
}

#[test]
fn explicit_titles_override_the_default() {
    let markup = render("[site](https://example.com \"Docs\")");
    assert!(markup.contains("title=\"Docs\""));
    assert!(!markup.contains("Click to download"));
}

#[test]
fn scratch_package_hrefs_rewrite_to_the_download_api() {
    let markup = render("[pkg](</scratch/packages/foo bar.zip>)");
    assert!(markup.contains("href=\"/api/download?file=foo%20bar.zip\""));
    assert!(markup.contains("download=\"pkg\""));
}

#[test]
fn nested_package_paths_are_fully_encoded() {
    let markup = render("[report](/scratch/packages/sub/report.zip)");
    assert!(markup.contains("href=\"/api/download?file=sub%2Freport.zip\""));
}

#[test]
fn bare_prefix_is_left_alone() {
    let markup = render("[x](/scratch/packages)");
    assert!(markup.contains("href=\"/scratch/packages\""));
}

#[test]
fn api_base_prefixes_the_download_href() {
    let markup = MarkdownRenderer::new()
        .with_api_base("http://127.0.0.1:8709")
        .render("[pkg](/scratch/packages/a.zip)");
    assert!(markup.contains("href=\"http://127.0.0.1:8709/api/download?file=a.zip\""));
}

#[test]
fn rewriter_applies_to_download_hrefs_and_persists() {
    let mut renderer = MarkdownRenderer::new();
    let markdown = "[pkg](/scratch/packages/a.zip)";

    let markup = renderer.render_with_rewriter(markdown, |url| format!("https://cdn.example{url}"));
    assert!(markup.contains("href=\"https://cdn.example/api/download?file=a.zip\""));

    // The rewriter stays installed for later plain renders (last write wins).
    let markup = renderer.render(markdown);
    assert!(markup.contains("href=\"https://cdn.example/api/download?file=a.zip\""));
}

#[test]
fn later_rewriter_replaces_the_earlier_one() {
    let mut renderer = MarkdownRenderer::new();
    let markdown = "[pkg](/scratch/packages/a.zip)";

    renderer.render_with_rewriter(markdown, |url| format!("https://one.example{url}"));
    let markup = renderer.render_with_rewriter(markdown, |url| format!("https://two.example{url}"));
    assert!(markup.contains("href=\"https://two.example/api/download?file=a.zip\""));
}

#[test]
fn rewriter_skips_non_download_links() {
    let mut renderer = MarkdownRenderer::new();
    let markup =
        renderer.render_with_rewriter("[site](https://example.com)", |url| format!("X{url}"));
    assert!(markup.contains("href=\"https://example.com\""));
}

#[test]
fn download_attribute_carries_the_link_text() {
    let markup = render("[My File](</scratch/packages/a.zip>)");
    assert!(markup.contains("download=\"My File\""));
    assert!(markup.contains(">My File</a>"));
}
