//! Reply text to safe markup.
//!
//! Rendering is a fixed sequence of passes, each taking and returning a value:
//!
//! 1. [`extract_code_blocks`] lifts every fenced block out of the text, leaving
//!    a sentinel token in its place, so code is captured before any escaping.
//! 2. [`escape_html`] neutralizes every HTML metacharacter in what remains.
//! 3. [`apply_inline_formatting`] turns `**bold**` and then `*italic*` into tags.
//! 4. [`reinject_code_blocks`] escapes each block on its own, wraps it in a code
//!    container with a copy button, and puts it back at its sentinel.

use once_cell::sync::Lazy;
use regex::{ Captures, Regex };

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```(.*?)```").expect("valid fence pattern"));
// Inline markers stop at any line terminator: \n, \r, U+2028 and U+2029.
// Bold has to run before italic, otherwise the single-asterisk pattern eats the pairs.
static BOLD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*([^\n\r\x{2028}\x{2029}]*?)\*\*").expect("valid bold pattern")
});
static ITALIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*([^\n\r\x{2028}\x{2029}]*?)\*").expect("valid italic pattern")
});

// Private-use code points: never produced by the escape or inline passes.
const SENTINEL_OPEN: char = '\u{E000}';
const SENTINEL_CLOSE: char = '\u{E001}';

/// Text with its fenced code blocks lifted out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub text: String,
    /// Raw, unescaped block contents; index `n` belongs to sentinel `n`.
    pub blocks: Vec<String>,
}

fn sentinel(index: usize) -> String {
    format!("{}CODEBLOCK{}{}", SENTINEL_OPEN, index, SENTINEL_CLOSE)
}

pub fn extract_code_blocks(text: &str) -> Extracted {
    let mut blocks = Vec::new();
    let text = CODE_FENCE
        .replace_all(text, |caps: &Captures| {
            blocks.push(caps[1].to_string());
            sentinel(blocks.len() - 1)
        })
        .into_owned();
    Extracted { text, blocks }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn apply_inline_formatting(text: &str) -> String {
    let bolded = BOLD.replace_all(text, "<b>${1}</b>");
    ITALIC.replace_all(&bolded, "<i>${1}</i>").into_owned()
}

pub fn code_block_html(code: &str) -> String {
    format!(
        "<div class=\"code-block-wrapper\"><pre><code>{}</code></pre><button class=\"copy-btn\">Copy</button></div>",
        escape_html(code)
    )
}

pub fn reinject_code_blocks(text: String, blocks: &[String]) -> String {
    blocks
        .iter()
        .enumerate()
        .fold(text, |acc, (idx, code)| acc.replacen(&sentinel(idx), &code_block_html(code), 1))
}

pub fn render_markdown(text: &str) -> String {
    let Extracted { text, blocks } = extract_code_blocks(text);
    let escaped = escape_html(&text);
    let formatted = apply_inline_formatting(&escaped);
    reinject_code_blocks(formatted, &blocks)
}
