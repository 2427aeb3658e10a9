use hiero_core::{Lexicon, LexiconEntry};
use serde::Deserialize;

use crate::LexiconError;

/// 外部存储里的一条 emoji 记录；多余字段（`_id` 等）忽略。
#[derive(Debug, Clone, Deserialize)]
pub struct EmojiRecord {
    pub symbol: String,
    #[serde(default)]
    pub words: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Bare(Vec<EmojiRecord>),
    Envelope { payload: Vec<EmojiRecord> },
}

pub fn from_json_str(s: &str) -> Result<Lexicon, LexiconError> {
    let records = match serde_json::from_str::<Document>(s)? {
        Document::Bare(v) => v,
        Document::Envelope { payload } => payload,
    };
    from_records(records)
}

pub fn from_records(records: Vec<EmojiRecord>) -> Result<Lexicon, LexiconError> {
    let mut lexicon = Lexicon::new();
    for (index, r) in records.into_iter().enumerate() {
        let symbol = r.symbol.trim();
        if symbol.is_empty() {
            return Err(LexiconError::EmptySymbol { index });
        }
        lexicon.append(LexiconEntry::new(symbol, r.words));
    }
    Ok(lexicon)
}
