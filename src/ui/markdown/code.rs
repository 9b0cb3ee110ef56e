use crate::utils::escape::escape_html;

/// Produces DOM ids for rendered code blocks.
///
/// Ids only need to be unique enough for the copy button to find its block
/// in the current document; collisions across renders are harmless. Tests
/// inject a counter for stable output.
pub type BlockIdSource = Box<dyn FnMut() -> String + Send>;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 7;

pub(super) fn random_block_id() -> String {
    let mut bytes = [0u8; ID_LEN];
    if getrandom::fill(&mut bytes).is_err() {
        // No random source; a clock-derived id still addresses the DOM.
        let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        return format!("codeblock-{nanos:x}");
    }

    let mut id = String::with_capacity("codeblock-".len() + ID_LEN);
    id.push_str("codeblock-");
    for byte in bytes {
        id.push(ID_ALPHABET[usize::from(byte) % ID_ALPHABET.len()] as char);
    }
    id
}

/// Markup for a code block with its copy-to-clipboard control.
///
/// The copy button resolves the block through `code_id`, so the id must be
/// embedded in both the button handler and the code element.
pub(super) fn code_block_markup(text: &str, escaped: bool, code_id: &str) -> String {
    let text = if escaped {
        text.to_string()
    } else {
        escape_html(text)
    };
    format!(
        r#"
      <div class="relative my-4">
        <button
          class="absolute top-2 right-2 bg-surface-200-800 hover:bg-surface-300-700 text-xs px-2 py-1 rounded shadow"
          onclick="navigator.clipboard.writeText(document.getElementById('{code_id}').innerText)">
          Copy
        </button>
        <pre class="bg-surface-100-900 py-4 px-8 rounded leading-none"><code id="{code_id}" class="code text-xs whitespace-pre-wrap break-words">{text}</code></pre>
      </div>
    "#
    )
}
