use crate::utils::escape::escape_html;
use crate::utils::url::construct_api_url;

/// Path prefix the backend serves generated packages from.
pub(super) const DOWNLOAD_PREFIX: &str = "/scratch/packages";

/// Rewrite hrefs pointing into the package scratch space to the download
/// API, percent-encoding the remainder into the `file` query parameter.
///
/// Returns `None` for hrefs outside the scratch space and for the bare
/// prefix with nothing after it.
pub(super) fn download_href(href: &str, api_base: &str) -> Option<String> {
    let rest = href.strip_prefix(DOWNLOAD_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    // Drop the separator between the prefix and the file path.
    let file = href.get(DOWNLOAD_PREFIX.len() + 1..).unwrap_or("");
    let endpoint = format!("api/download?file={}", urlencoding::encode(file));
    Some(construct_api_url(api_base, &endpoint))
}

/// Anchor markup for chat links.
///
/// Every link in a chat message is treated as downloadable, so the anchor
/// always carries `title` and `download` attributes. `text` must already be
/// inline-rendered (escaped) by the caller.
pub(super) fn link_markup(href: &str, title: Option<&str>, text: &str) -> String {
    let title = match title {
        Some(title) if !title.is_empty() => escape_html(title),
        _ => format!("Click to download {text}"),
    };
    format!(
        "<a href=\"{href}\" title=\"{title}\" download=\"{text}\" class=\"underline text-primary-500\">{text}</a>"
    )
}
