//! `compose`：输入框 -> 翻译 -> 帖子草稿。
//!
//! 这里承担调用方的校验策略（空消息、未翻译就发帖、词库未加载），
//! tokenizer 本身对空输入只返回空序列。
use crate::{
    error::{ConfigurationError, Error, ValidationError},
    lexicon::SymbolLookup,
    state::UserId,
    token::Translation,
    translator::{LexiconTranslator, Translator},
};

/// 待发布的帖子：emoji 消息 + 未经修改的原文 + 作者。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub emoji_message: Vec<String>,
    pub original_text: String,
    pub author: UserId,
}

/// 撰写状态：当前文本与最近一次翻译结果。
#[derive(Debug, Clone, Default)]
pub struct Composer {
    text: String,
    translation: Translation,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn translation(&self) -> &Translation {
        &self.translation
    }

    /// 替换输入文本；文本有变化时旧的翻译结果作废。
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.translation = Translation::default();
        }
        self.text = text;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn translate<L>(&mut self, lexicon: Option<&L>) -> Result<&Translation, Error>
    where
        L: SymbolLookup + ?Sized,
    {
        if self.text.trim().is_empty() {
            return Err(ValidationError::EmptyMessage.into());
        }
        let lexicon = lexicon.ok_or(ConfigurationError::LexiconUnavailable)?;
        self.translation = LexiconTranslator::new(lexicon).translate(&self.text);
        Ok(&self.translation)
    }

    /// 生成草稿并清空撰写状态。
    pub fn post(&mut self, author: UserId) -> Result<PostDraft, Error> {
        if self.translation.is_empty() {
            return Err(ValidationError::NotTranslated.into());
        }
        let draft = PostDraft {
            emoji_message: self.translation.emoji_message(),
            original_text: std::mem::take(&mut self.text),
            author,
        };
        self.clear();
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Lexicon, LexiconEntry};

    fn lexicon() -> Lexicon {
        [LexiconEntry::new("😊", ["happy", "smile"])].into_iter().collect()
    }

    #[test]
    fn blank_text_is_a_validation_error() {
        let mut c = Composer::new();
        c.set_text("   \n");
        assert_eq!(
            c.translate(Some(&lexicon())).unwrap_err(),
            Error::Validation(ValidationError::EmptyMessage)
        );
    }

    #[test]
    fn missing_lexicon_is_a_configuration_error() {
        let mut c = Composer::new();
        c.set_text("happy");
        assert_eq!(
            c.translate::<Lexicon>(None).unwrap_err(),
            Error::Configuration(ConfigurationError::LexiconUnavailable)
        );
    }

    #[test]
    fn post_requires_translation() {
        let mut c = Composer::new();
        c.set_text("happy");
        assert_eq!(
            c.post(UserId::from("u1")).unwrap_err(),
            Error::Validation(ValidationError::NotTranslated)
        );
    }

    #[test]
    fn editing_text_discards_stale_translation() {
        let lex = lexicon();
        let mut c = Composer::new();
        c.set_text("happy");
        c.translate(Some(&lex)).unwrap();
        c.set_text("happy");
        assert_eq!(c.translation().len(), 1);

        c.set_text("something else");
        assert!(c.translation().is_empty());
        assert_eq!(
            c.post(UserId::from("u1")).unwrap_err(),
            Error::Validation(ValidationError::NotTranslated)
        );
    }

    #[test]
    fn post_keeps_original_text_and_resets() {
        let lex = lexicon();
        let mut c = Composer::new();
        c.set_text("So HAPPY today!");
        c.translate(Some(&lex)).unwrap();
        let draft = c.post(UserId::from("u1")).unwrap();
        assert_eq!(draft.emoji_message, vec!["so", "😊", "today"]);
        assert_eq!(draft.original_text, "So HAPPY today!");
        assert_eq!(draft.author, UserId::from("u1"));
        assert!(c.text().is_empty());
        assert!(c.translation().is_empty());
    }
}
