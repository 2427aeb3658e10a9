//! 词库加载：把外部的 `{symbol, words[]}` 记录解析成 `hiero_core::Lexicon`。
//!
//! 支持两种格式：
//! - JSON：裸数组 `[{"symbol": "😊", "words": ["happy"]}]`，或服务端的 `{"payload": [...]}` 包装
//! - TSV：`symbol<TAB>word1,word2`，允许 `#` 注释行
//!
//! 按文件扩展名分派：`.json` 走 JSON，其余按 TSV 处理。
use std::{fs, io, path::Path};

use hiero_core::Lexicon;
use thiserror::Error;
use tracing::debug;

pub mod json;
pub mod tsv;

pub use json::{EmojiRecord, from_json_str};
pub use tsv::from_tsv_str;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("failed to read lexicon: {0}")]
    Io(#[from] io::Error),

    #[error("invalid lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TSV line {line}: missing symbol or trigger words")]
    MissingField { line: usize },

    #[error("entry {index} has an empty symbol")]
    EmptySymbol { index: usize },
}

pub fn from_path(path: impl AsRef<Path>) -> Result<Lexicon, LexiconError> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let lexicon = if is_json {
        from_json_str(&s)?
    } else {
        from_tsv_str(&s)?
    };
    debug!(path = %path.display(), entries = lexicon.len(), "lexicon loaded");
    Ok(lexicon)
}
