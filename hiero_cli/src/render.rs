//! 终端渲染：token 之间插入分隔符，未命中的词标红。

use colored::Colorize;
use hiero_core::{
    Token, TokenKind, Translation,
    state::{AppState, Post},
};

pub fn render_token(token: &Token) -> String {
    match token.kind {
        TokenKind::Matched => token.value.clone(),
        TokenKind::Unmatched => token.value.red().underline().to_string(),
    }
}

pub fn render_translation(translation: &Translation, separator: &str) -> String {
    let sep = format!(" {} ", separator.green());
    let mut s = String::new();
    for (key, token) in translation.keyed() {
        if key > 0 {
            s.push_str(&sep);
        }
        s.push_str(&render_token(token));
    }
    s
}

/// 帖子流里只有字符串，没有命中信息，原样拼接。
pub fn render_message(message: &[String], separator: &str) -> String {
    if message.is_empty() {
        return "…".to_string();
    }
    message.join(format!(" {} ", separator.green()).as_str())
}

pub fn render_post(state: &AppState, post: &Post, separator: &str) -> String {
    let mut s = format!(
        "{} {}\n  {}",
        post.id.to_string().dimmed(),
        state.author_name(&post.author).bold(),
        render_message(&post.emoji_message, separator),
    );
    if state.selected() == Some(post.id) {
        s.push_str(&format!("\n  {}", post.original_text.italic()));
    }
    s
}
