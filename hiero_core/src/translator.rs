//! `translator`：把一条消息翻译成 `Translation`。
//!
//! 当前实现：
//! - `LexiconTranslator`：基于 `SymbolLookup::lookup` 的逐词直查（无模糊匹配、无组句）

use tracing::trace;

use crate::{lexicon::SymbolLookup, token::Translation, tokenizer::tokenize};

/// Translator：消息 -> token 序列。
pub trait Translator: Send + Sync {
    fn translate(&self, message: &str) -> Translation;
}

/// 词库翻译器：只借用词库，自身不持有状态。
pub struct LexiconTranslator<'a, L: ?Sized> {
    /// 词库引用（查词发生在这里）
    pub lexicon: &'a L,
}

impl<'a, L> LexiconTranslator<'a, L>
where
    L: SymbolLookup + ?Sized,
{
    pub fn new(lexicon: &'a L) -> Self {
        Self { lexicon }
    }
}

impl<'a, L> Translator for LexiconTranslator<'a, L>
where
    L: SymbolLookup + ?Sized,
{
    fn translate(&self, message: &str) -> Translation {
        let translation = Translation::new(tokenize(message, self.lexicon));
        trace!(
            words = translation.len(),
            matched = translation.matched_count(),
            "message translated"
        );
        translation
    }
}
