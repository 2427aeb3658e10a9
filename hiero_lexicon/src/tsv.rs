use hiero_core::{Lexicon, LexiconEntry};

use crate::LexiconError;

/// TSV 格式（简化版）：
///
/// - `symbol<TAB>word1,word2,...`
/// - 允许 `#` 开头注释行与空行
///
/// 行顺序即词库顺序（重复触发词以先出现的行为准）。
pub fn from_tsv_str(s: &str) -> Result<Lexicon, LexiconError> {
    let mut lexicon = Lexicon::new();
    for (idx, line) in s.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut it = line.split('\t');
        let symbol = it.next().unwrap_or("").trim();
        let words: Vec<&str> = it
            .next()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .collect();
        if symbol.is_empty() || words.is_empty() {
            return Err(LexiconError::MissingField { line: idx + 1 });
        }
        lexicon.append(LexiconEntry::new(symbol, words));
    }
    Ok(lexicon)
}
