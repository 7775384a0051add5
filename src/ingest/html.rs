//! HTML tag stripping and heading conversion.
//!
//! `<h1>`..`<h6>` become `#`..`######` markdown-style headings followed by a
//! blank line, so the core's heading predicate (first non-space byte `#`)
//! picks up HTML-origin section structure without any HTML awareness of its
//! own.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Document;
use crate::source::SourceType;

static SCRIPT_OR_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<(script|style)[^>]*>.*?</(script|style)>").unwrap());
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<h([1-6])[^>]*>(.*?)</h[1-6]>").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<[^>]+>").unwrap());

fn decode_entities(s: &str) -> String {
    let mut out = s
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'");
    if out.contains("&#") {
        out = numeric_entities(&out);
    }
    out
}

fn numeric_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'&' && s[i..].starts_with("&#") {
            if let Some(semi) = s[i..].find(';') {
                let digits = &s[i + 2..i + semi];
                if let Ok(code) = digits.parse::<u32>() {
                    if let Some(ch) = char::from_u32(code) {
                        out.push(ch);
                        i += semi + 1;
                        continue;
                    }
                }
            }
        }
        let ch = s[i..].chars().next().unwrap();
        out.push(ch);
        i += ch.len_utf8();
    }
    out
}

fn collapse_whitespace(s: &str) -> String {
    let mut out_lines: Vec<String> = Vec::new();
    let mut blank_pending = false;
    for line in s.replace("\r\n", "\n").split('\n') {
        let collapsed: String = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            if !blank_pending {
                out_lines.push(String::new());
                blank_pending = true;
            }
        } else {
            blank_pending = false;
            out_lines.push(collapsed);
        }
    }
    let joined = out_lines.join("\n");
    format!("{}\n", joined.trim())
}

pub(super) fn decode(bytes: &[u8]) -> Document {
    let raw = String::from_utf8_lossy(bytes);
    let mut s = SCRIPT_OR_STYLE.replace_all(&raw, " ").into_owned();

    s = HEADING
        .replace_all(&s, |caps: &regex::Captures<'_>| {
            let level: usize = caps[1].parse().unwrap_or(1);
            let inner = TAG.replace_all(&caps[2], " ");
            let title = decode_entities(inner.trim());
            format!("{} {}\n\n", "#".repeat(level), title)
        })
        .into_owned();

    s = TAG.replace_all(&s, " ").into_owned();
    s = decode_entities(&s);
    let text = collapse_whitespace(&s);

    let mut warnings = Vec::new();
    if text.trim().len() < 20 {
        warnings.push("html extraction produced very little visible text".to_owned());
    }

    Document {
        text: text.into_bytes(),
        source_type: SourceType::Html,
        warnings,
    }
}
