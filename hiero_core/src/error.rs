//! 错误分类：翻译本身从不失败，这里只描述调用方（compose/session）层面的错误。

use thiserror::Error;

/// 输入校验失败（由调用方策略决定，tokenizer 本身接受空输入）。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter text to translate.")]
    EmptyMessage,

    #[error("Translate before posting.")]
    NotTranslated,

    #[error("Both label and emoji symbol are required (missing {0}).")]
    MissingField(&'static str),
}

/// 运行环境缺失（词库尚未加载等），重试无意义。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("emoji lexicon is not loaded")]
    LexiconUnavailable,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
