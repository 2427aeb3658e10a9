//! 翻译输出：按词顺序排列的 token。

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// 命中词库，`value` 是 emoji
    Matched,
    /// 未命中，`value` 是归一化后的原词
    Unmatched,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn matched(symbol: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Matched,
            value: symbol.into(),
        }
    }

    pub fn unmatched(word: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Unmatched,
            value: word.into(),
        }
    }

    pub fn is_matched(&self) -> bool {
        self.kind == TokenKind::Matched
    }
}

/// 一次翻译的结果（派生数据，不持久化）。
///
/// 列表身份用“结果内下标”（`keyed`），不依赖渲染时的位置。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    tokens: Vec<Token>,
}

impl Translation {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn matched_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_matched()).count()
    }

    /// `(key, token)`，key 即 token 在本次结果中的位置。
    pub fn keyed(&self) -> impl Iterator<Item = (usize, &Token)> {
        self.tokens.iter().enumerate()
    }

    /// 帖子里保存的 emoji 消息：未命中的词原样保留，形成 emoji/文字混排。
    pub fn emoji_message(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.value.clone()).collect()
    }

    /// 用分隔符连接（最后一个之后不加）。
    pub fn join(&self, separator: &str) -> String {
        let mut s = String::new();
        for (i, t) in self.tokens.iter().enumerate() {
            if i > 0 {
                s.push_str(separator);
            }
            s.push_str(&t.value);
        }
        s
    }
}

impl From<Vec<Token>> for Translation {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(" • "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Translation {
        vec![
            Token::unmatched("i"),
            Token::matched("❤️"),
            Token::unmatched("pizza"),
        ]
        .into()
    }

    #[test]
    fn emoji_message_keeps_unmatched_words() {
        assert_eq!(sample().emoji_message(), vec!["i", "❤️", "pizza"]);
        assert_eq!(sample().matched_count(), 1);
    }

    #[test]
    fn join_puts_separator_between_tokens_only() {
        assert_eq!(sample().join("|"), "i|❤️|pizza");
        assert_eq!(sample().to_string(), "i • ❤️ • pizza");
        assert_eq!(Translation::default().join("|"), "");
    }

    #[test]
    fn keyed_uses_position_in_result() {
        let t = sample();
        let keys: Vec<usize> = t.keyed().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![0, 1, 2]);
    }
}
