//! Server-rendered HTML. Every user-supplied string goes through `escape`.

use axum::response::Html;

use crate::flash::Notice;

pub mod matches;
pub mod pages;
pub mod profiles;

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:44rem;margin:2rem auto;padding:0 1rem}\
nav a{margin-right:1rem}.notice{background:#fff4c2;padding:.5rem 1rem;border-radius:4px}\
table{border-collapse:collapse;width:100%}td,th{text-align:left;padding:.3rem;border-bottom:1px solid #ddd}\
label{display:block;margin-top:.6rem}";

/// Wraps `body` in the shared page chrome.
pub fn layout(title: &str, notice: Option<Notice>, body: &str) -> Html<String> {
    let notice = notice
        .map(|n| format!(r#"<p class="notice">{}</p>"#, escape(n.message())))
        .unwrap_or_default();

    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} · Runmatch</title>
<style>{STYLE}</style>
</head>
<body>
<nav><a href="/">Home</a><a href="/profiles">Runners</a><a href="/profiles/new">Join</a></nav>
{notice}
{body}
</body>
</html>"#,
        title = escape(title),
    ))
}

/// Minimal HTML escaping for text and attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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
