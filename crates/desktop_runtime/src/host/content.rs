//! Built-in content backend used when no network service is injected.

use desktop_app_contract::{ChatTurn, ContentFuture, ContentService, ContentServiceError};
use futures::FutureExt;

/// Deterministic stand-in for the remote text/HTML generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineContentService;

impl ContentService for OfflineContentService {
    fn chat(&self, prompt: String, history: Vec<ChatTurn>) -> ContentFuture {
        let reply = offline_chat_reply(&prompt, history.len());
        async move { reply }.boxed_local()
    }

    fn web_page(&self, url: String) -> ContentFuture {
        let page = offline_web_page(&url);
        async move { page }.boxed_local()
    }
}

fn offline_chat_reply(prompt: &str, history_len: usize) -> Result<String, ContentServiceError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(ContentServiceError::EmptyRequest);
    }
    let messages = history_len + 1;
    Ok(format!(
        "The modem is unplugged, so I am answering from the offline help file.\n\n\
         You asked: \"{prompt}\"\n\n\
         That makes {messages} message(s) in this session. Try again once you are back online."
    ))
}

fn offline_web_page(url: &str) -> Result<String, ContentServiceError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ContentServiceError::EmptyRequest);
    }
    let shown = escape_html(url);
    let looks_like_address = !url.contains(char::is_whitespace) && url.contains('.');
    let body = if looks_like_address {
        format!(
            "<h1 style='font-family: Times New Roman; color: navy;'>Welcome to {shown}</h1>\
             <marquee>Under construction! Best viewed in 640x480.</marquee>\
             <hr><p>This page was served from the local cache.</p>\
             <p><a href='#'>Guestbook</a> | <a href='#'>Links</a> | <a href='#'>Webring</a></p>"
        )
    } else {
        format!(
            "<h1 style='font-family: Courier New;'>Search results for \"{shown}\"</h1><hr>\
             <table>\
             <tr><td><a href='#'>The {shown} Homepage</a></td></tr>\
             <tr><td><a href='#'>{shown} FAQ (updated 1995)</a></td></tr>\
             <tr><td><a href='#'>Cool {shown} links</a></td></tr>\
             </table>"
        )
    };
    Ok(format!("<center>{body}</center>"))
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
