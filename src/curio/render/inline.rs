//! The constrained inline grammar for free text: `**bold**`, `*italic*`,
//! `` `code` ``, and `[text](url)`. Everything else is escaped verbatim, so
//! raw HTML never passes through.

use crate::render::escape_html;

/// Expands inline markers in one line of text. Unterminated markers stay
/// literal rather than swallowing the rest of the line.
pub fn inline_html(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        // Bold before italic so `**` is not read as two empty italics.
        if chars[i] == '*' && i + 1 < chars.len() && chars[i + 1] == '*' {
            if let Some(end) = find_seq(&chars, i + 2, &['*', '*']) {
                let body: String = chars[i + 2..end].iter().collect();
                out.push_str("<strong>");
                out.push_str(&inline_html(&body));
                out.push_str("</strong>");
                i = end + 2;
            } else {
                out.push_str("**");
                i += 2;
            }
            continue;
        }
        if chars[i] == '*' {
            if let Some(end) = find_seq(&chars, i + 1, &['*']) {
                let body: String = chars[i + 1..end].iter().collect();
                out.push_str("<em>");
                out.push_str(&inline_html(&body));
                out.push_str("</em>");
                i = end + 1;
                continue;
            }
        }
        if chars[i] == '`' {
            if let Some(end) = find_seq(&chars, i + 1, &['`']) {
                let body: String = chars[i + 1..end].iter().collect();
                out.push_str("<code>");
                // Code spans are verbatim: no nested markers.
                out.push_str(&escape_html(&body));
                out.push_str("</code>");
                i = end + 1;
                continue;
            }
        }
        if chars[i] == '[' {
            if let Some((label, url, next)) = parse_link(&chars, i) {
                out.push_str(&format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                    escape_html(&url),
                    inline_html(&label)
                ));
                i = next;
                continue;
            }
        }
        out.push_str(&escape_html(&chars[i].to_string()));
        i += 1;
    }
    out
}

/// Renders a whole free-text field: blank-line separated blocks, each either
/// an `### ` heading, a fenced code block, an all-`- ` bullet list, or a
/// paragraph with `<br>`-joined lines.
pub fn rich_text_html(text: &str) -> String {
    let mut out = String::new();
    for block in split_blocks(text) {
        let trimmed = block.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(heading) = trimmed.strip_prefix("### ") {
            out.push_str(&format!("<h3>{}</h3>", inline_html(heading.trim())));
        } else if trimmed.starts_with("```") {
            out.push_str(&fenced_code_html(trimmed));
        } else if trimmed.lines().all(|l| l.trim_start().starts_with("- ")) {
            out.push_str("<ul>");
            for line in trimmed.lines() {
                let item = line.trim_start().trim_start_matches("- ");
                out.push_str(&format!("<li>{}</li>", inline_html(item)));
            }
            out.push_str("</ul>");
        } else {
            let lines: Vec<String> = trimmed.lines().map(inline_html).collect();
            out.push_str(&format!("<p>{}</p>", lines.join("<br>")));
        }
    }
    out
}

/// Splits on blank lines, but keeps fenced code blocks intact even when they
/// contain empty lines.
fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();
    let mut in_fence = false;

    for line in text.lines() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
            if !in_fence {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        if line.trim().is_empty() && !in_fence {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn fenced_code_html(block: &str) -> String {
    let mut lines = block.lines();
    let fence = lines.next().unwrap_or("```");
    let language = fence.trim_start_matches('`').trim();
    let body: Vec<&str> = lines.take_while(|l| !l.trim_start().starts_with("```")).collect();
    format!(
        "<pre class=\"inline-code\"><code class=\"language-{}\">{}</code></pre>",
        escape_html(if language.is_empty() { "plaintext" } else { language }),
        escape_html(&body.join("\n"))
    )
}

fn find_seq(chars: &[char], from: usize, needle: &[char]) -> Option<usize> {
    (from..chars.len().saturating_sub(needle.len() - 1))
        .find(|&i| chars[i..i + needle.len()] == *needle)
}

fn parse_link(chars: &[char], start: usize) -> Option<(String, String, usize)> {
    let close = find_seq(chars, start + 1, &[']'])?;
    if close + 1 >= chars.len() || chars[close + 1] != '(' {
        return None;
    }
    let end = find_seq(chars, close + 2, &[')'])?;
    let label: String = chars[start + 1..close].iter().collect();
    let url: String = chars[close + 2..end].iter().collect();
    Some((label, url, end + 1))
}
