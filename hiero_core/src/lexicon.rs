//! `lexicon`：词 -> emoji 的触发表。
//!
//! 约定：
//! - 触发词一律按小写存储，查询时同样先转小写（大小写不敏感的精确匹配）
//! - 同一个触发词出现在多个条目中时，**按词库顺序第一个条目生效**
//! - 词库只允许追加（`append`），不会修改/删除已有条目
use std::{borrow::Cow, collections::HashMap, iter, sync::Arc};

use tracing::debug;

use crate::error::ValidationError;
use crate::tokenizer::normalize_word;

/// 词库条目：一组触发词映射到同一个 emoji。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    /// 展示用 emoji（提交文本）
    pub symbol: String,
    /// 触发词（小写、去重、保持插入顺序，不含空串）
    pub trigger_words: Vec<String>,
}

impl LexiconEntry {
    pub fn new<I>(symbol: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut trigger_words: Vec<String> = Vec::new();
        for w in words {
            let w = w.as_ref().trim().to_lowercase();
            if w.is_empty() || trigger_words.contains(&w) {
                continue;
            }
            trigger_words.push(w);
        }
        Self {
            symbol: symbol.into(),
            trigger_words,
        }
    }
}

/// 查词抽象：translator 不关心词库来自静态文件、远端还是用户自定义。
pub trait SymbolLookup: Send + Sync {
    /// 大小写不敏感的精确匹配；未命中返回 `None`。
    fn lookup(&self, word: &str) -> Option<&str>;
}

/// 有序词库 + 触发词索引。
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    /// trigger word -> 第一个声明它的条目下标
    index: HashMap<String, usize>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加条目；已被前面条目占用的触发词保持原有结果。
    pub fn append(&mut self, entry: LexiconEntry) {
        let idx = self.entries.len();
        let mut shadowed = 0usize;
        for w in &entry.trigger_words {
            if self.index.contains_key(w) {
                shadowed += 1;
                continue;
            }
            self.index.insert(w.clone(), idx);
        }
        debug!(
            symbol = %entry.symbol,
            words = entry.trigger_words.len(),
            shadowed,
            "lexicon entry appended"
        );
        self.entries.push(entry);
    }

    pub fn lookup(&self, word: &str) -> Option<&str> {
        let key: Cow<'_, str> = if word.chars().any(|c| c.to_lowercase().ne(iter::once(c))) {
            Cow::Owned(word.to_lowercase())
        } else {
            Cow::Borrowed(word)
        };
        self.index
            .get(key.as_ref())
            .and_then(|&i| self.entries.get(i))
            .map(|e| e.symbol.as_str())
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<LexiconEntry> for Lexicon {
    fn from_iter<T: IntoIterator<Item = LexiconEntry>>(iter: T) -> Self {
        let mut lexicon = Lexicon::new();
        for e in iter {
            lexicon.append(e);
        }
        lexicon
    }
}

impl SymbolLookup for Lexicon {
    fn lookup(&self, word: &str) -> Option<&str> {
        Lexicon::lookup(self, word)
    }
}

/// 多读少写场景下的词库句柄：读者拿快照，写者 copy-on-write 追加。
///
/// 已经发出去的快照（`Arc<Lexicon>`）不会看到之后的追加。
#[derive(Debug, Clone, Default)]
pub struct SharedLexicon {
    inner: Arc<Lexicon>,
}

impl SharedLexicon {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            inner: Arc::new(lexicon),
        }
    }

    pub fn snapshot(&self) -> Arc<Lexicon> {
        Arc::clone(&self.inner)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.inner
    }

    pub fn append(&mut self, entry: LexiconEntry) {
        Arc::make_mut(&mut self.inner).append(entry);
    }
}

impl From<Lexicon> for SharedLexicon {
    fn from(lexicon: Lexicon) -> Self {
        Self::new(lexicon)
    }
}

impl SymbolLookup for SharedLexicon {
    fn lookup(&self, word: &str) -> Option<&str> {
        self.inner.lookup(word)
    }
}

/// 用户自定义 emoji（label + symbol），校验后转成词库条目。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomEmoji {
    pub symbol: String,
    pub label: String,
}

impl CustomEmoji {
    pub fn new(symbol: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            label: label.into(),
        }
    }

    /// label 按输入同样的规则归一化后作为触发词（多个词则各自触发）。
    pub fn into_entry(self) -> Result<LexiconEntry, ValidationError> {
        let symbol = self.symbol.trim();
        if symbol.is_empty() {
            return Err(ValidationError::MissingField("symbol"));
        }
        let words: Vec<String> = self
            .label
            .split_whitespace()
            .map(normalize_word)
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return Err(ValidationError::MissingField("label"));
        }
        Ok(LexiconEntry::new(symbol, words))
    }
}
