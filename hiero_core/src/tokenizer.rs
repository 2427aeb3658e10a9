//! `tokenizer`：把一条消息切成词并逐词查词库。
//!
//! 规则：
//! - 先 trim，再按一个或多个空白切分（连续空白不会产生空词）
//! - 每个词转小写，并且只去掉 `.` `,` `!` `?` 四种标点（其余字符原样保留）
//! - 一个词对应一个 token，顺序不变；全是标点的词得到 `Unmatched("")`，不丢弃
use crate::lexicon::SymbolLookup;
use crate::token::Token;

const STRIPPED: [char; 4] = ['.', ',', '!', '?'];

fn is_stripped(ch: char) -> bool {
    STRIPPED.contains(&ch)
}

/// 单词归一化：先去标点，再整串转小写（与词库触发词同一套规则）。
pub fn normalize_word(word: &str) -> String {
    let stripped: String = word.chars().filter(|&ch| !is_stripped(ch)).collect();
    stripped.to_lowercase()
}

/// 整条消息归一化：小写 + 去标点（不 trim、不切分）。
pub fn normalize(message: &str) -> String {
    normalize_word(message)
}

/// 切分出的原始词（未归一化）。空消息得到空序列。
fn split_words(message: &str) -> impl Iterator<Item = &str> {
    message.split_whitespace()
}

pub fn tokenize<L>(message: &str, lexicon: &L) -> Vec<Token>
where
    L: SymbolLookup + ?Sized,
{
    split_words(message)
        .map(|raw| {
            let word = normalize_word(raw);
            match lexicon.lookup(&word) {
                Some(symbol) => Token::matched(symbol),
                None => Token::unmatched(word),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Lexicon, LexiconEntry};
    use crate::token::TokenKind;

    fn lexicon() -> Lexicon {
        [
            LexiconEntry::new("😊", ["happy", "smile"]),
            LexiconEntry::new("🍕", ["pizza"]),
            LexiconEntry::new("❤️", ["love"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn normalize_word_strips_only_four_marks() {
        assert_eq!(normalize_word("Hello!"), "hello");
        assert_eq!(normalize_word("?wh.a,t!"), "what");
        assert_eq!(normalize_word("don't"), "don't");
        assert_eq!(normalize_word("well-known"), "well-known");
        assert_eq!(normalize_word("\"quoted\""), "\"quoted\"");
        assert_eq!(normalize_word("...!?"), "");
    }

    #[test]
    fn casing_matches_lexicon_rules() {
        let lex: Lexicon = [
            LexiconEntry::new("🛣️", ["ΟΔΟΣ"]),
            LexiconEntry::new("🔤", ["ǅ"]),
        ]
        .into_iter()
        .collect();
        assert_eq!(normalize_word("ΟΔΟΣ!"), "οδος");
        assert_eq!(tokenize("ΟΔΟΣ", &lex), vec![Token::matched("🛣️")]);
        assert_eq!(tokenize("οδος", &lex), vec![Token::matched("🛣️")]);
        assert_eq!(tokenize("ǅ Ǆ ǆ", &lex), vec![Token::matched("🔤"); 3]);
        assert_eq!(lex.lookup("ΟΔΟΣ"), Some("🛣️"));
        assert_eq!(lex.lookup("ǅ"), Some("🔤"));
        assert_eq!(lex.lookup("Ǆ"), Some("🔤"));
    }

    #[test]
    fn consecutive_whitespace_collapses() {
        let t = tokenize("  I \t love\n\n pizza  ", &lexicon());
        assert_eq!(
            t,
            vec![
                Token::unmatched("i"),
                Token::matched("❤️"),
                Token::matched("🍕"),
            ]
        );
    }

    #[test]
    fn punctuation_only_words_are_kept_as_empty_unmatched() {
        let t = tokenize("wow !!! ?", &lexicon());
        assert_eq!(
            t,
            vec![
                Token::unmatched("wow"),
                Token::unmatched(""),
                Token::unmatched(""),
            ]
        );
    }

    #[test]
    fn other_punctuation_prevents_match() {
        let t = tokenize("pizza; (happy) love!", &lexicon());
        assert_eq!(t[0], Token::unmatched("pizza;"));
        assert_eq!(t[1], Token::unmatched("(happy)"));
        assert_eq!(t[2], Token::matched("❤️"));
    }

    #[test]
    fn unmatched_value_is_the_normalized_word() {
        let t = tokenize("Hello, World!", &lexicon());
        assert!(t.iter().all(|t| t.kind == TokenKind::Unmatched));
        assert_eq!(t[0].value, "hello");
        assert_eq!(t[1].value, "world");
    }

    #[test]
    fn property_token_count_and_order() {
        use proptest::prelude::*;

        let lex = lexicon();
        proptest!(|(words in proptest::collection::vec("[a-zA-Z.,!?']{1,8}", 0..12),
                    gap in "[ \t\n]{1,3}")| {
            let message = words.join(&gap);
            let tokens = tokenize(&message, &lex);
            prop_assert_eq!(tokens.len(), message.split_whitespace().count());
            for (tok, raw) in tokens.iter().zip(message.split_whitespace()) {
                let w = normalize_word(raw);
                match lex.lookup(&w) {
                    Some(sym) => prop_assert_eq!(tok, &Token::matched(sym)),
                    None => prop_assert_eq!(tok, &Token::unmatched(w)),
                }
            }
        });
    }

    #[test]
    fn property_normalization_is_idempotent() {
        use proptest::prelude::*;

        let lex = lexicon();
        proptest!(|(words in proptest::collection::vec("[a-zA-Z'][a-zA-Z.,!?']{0,8}", 0..12))| {
            let message = words.join(" ");
            prop_assert_eq!(tokenize(&message, &lex), tokenize(&normalize(&message), &lex));
        });
    }

    #[test]
    fn property_lookup_ignores_case() {
        use proptest::prelude::*;

        let lex = lexicon();
        proptest!(|(word in "(?i)happy|smile|pizza|love")| {
            let expected = lex.lookup(&word.to_lowercase());
            prop_assert!(expected.is_some());
            prop_assert_eq!(lex.lookup(&word), expected);
            prop_assert_eq!(tokenize(&word, &lex), vec![Token::matched(expected.unwrap())]);
        });
    }
}
