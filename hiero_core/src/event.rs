use crate::state::{PostId, View};

/// 输入事件（语义事件）。
///
/// 说明：
/// - `Session` 只关心“用户想做什么”，不关心按钮/按键从哪来
/// - CLI/GUI 层负责把命令行或点击转换成这些事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// 替换撰写框内容
    Edit(String),
    /// 翻译撰写框内容
    Translate,
    /// 以当前用户身份发布最近一次翻译
    Post,
    /// 切换页面
    Navigate(View),
    /// 添加自定义 emoji
    AddEmoji { symbol: String, label: String },
    /// 展开/收起某个帖子的原文
    ToggleOriginal(PostId),
    /// 清空撰写框
    Clear,
}

/// 会话输出动作（给宿主的“副作用”通知）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 翻译完成：token 数 / 命中数
    Translated { words: usize, matched: usize },
    /// 帖子已发布
    Published(PostId),
    /// 自定义 emoji 已加入词库
    EmojiAdded(String),
    /// 原文展开状态变化
    Selected(Option<PostId>),
}
