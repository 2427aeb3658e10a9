//! `hiero_core`：纯逻辑层，不做任何 I/O。
//!
//! 设计目标：
//! - **核心可复用**：CLI/GUI/服务端都能复用同一套翻译逻辑
//! - **分层清晰**：session -> compose -> translator -> tokenizer -> lexicon -> 输出（`Translation`）
//! - **无状态翻译**：`tokenize` 只依赖入参，词库由调用方持有并按引用传入
pub mod compose;
pub mod error;
pub mod event;
pub mod lexicon;
pub mod session;
pub mod state;
pub mod token;
pub mod tokenizer;
pub mod translator;

pub use error::{ConfigurationError, Error, ValidationError};
pub use lexicon::{CustomEmoji, Lexicon, LexiconEntry, SharedLexicon, SymbolLookup};
pub use token::{Token, TokenKind, Translation};
pub use tokenizer::{normalize, normalize_word, tokenize};
pub use translator::{LexiconTranslator, Translator};
