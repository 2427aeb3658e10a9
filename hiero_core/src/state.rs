//! `AppState`：宿主应用的唯一状态容器。
//!
//! 约定：
//! - 当前页面、用户、帖子、词库都放在这里，由 session 按引用传给展示层
//! - 只能通过下面的变更方法修改；帖子用 `PostId` 标识，不用列表下标
use std::fmt;

use tracing::debug;

use crate::{
    compose::PostDraft,
    error::ValidationError,
    lexicon::{CustomEmoji, Lexicon, SharedLexicon},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(pub String);

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: UserId::from(id),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub emoji_message: Vec<String>,
    pub original_text: String,
    pub author: UserId,
}

/// 页面：撰写 / 帖子流 / 表情库。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Chatter,
    Library,
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::Chatter, View::Library];

    pub fn name(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Chatter => "chatter",
            View::Library => "library",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub view: View,
    users: Vec<User>,
    current_user: usize,
    posts: Vec<Post>,
    next_post_id: u64,
    lexicon: Option<SharedLexicon>,
    /// 展开原文的帖子
    selected: Option<PostId>,
}

impl AppState {
    /// `users` 为空时放一个占位用户，`current_user` 越界时回退到第一个。
    pub fn new(mut users: Vec<User>, current_user: usize) -> Self {
        if users.is_empty() {
            users.push(User::new("anonymous", "Anonymous"));
        }
        let current_user = if current_user < users.len() {
            current_user
        } else {
            0
        };
        Self {
            view: View::default(),
            users,
            current_user,
            posts: Vec::new(),
            next_post_id: 1,
            lexicon: None,
            selected: None,
        }
    }

    pub fn navigate(&mut self, view: View) {
        self.view = view;
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn current_user(&self) -> &User {
        &self.users[self.current_user]
    }

    pub fn author_name(&self, id: &UserId) -> &str {
        self.users
            .iter()
            .find(|u| &u.id == id)
            .map(|u| u.name.as_str())
            .unwrap_or("Unknown")
    }

    pub fn lexicon(&self) -> Option<&SharedLexicon> {
        self.lexicon.as_ref()
    }

    pub fn install_lexicon(&mut self, lexicon: Lexicon) {
        debug!(entries = lexicon.len(), "lexicon installed");
        self.lexicon = Some(SharedLexicon::new(lexicon));
    }

    /// 追加自定义 emoji；词库尚未加载时从空词库开始。
    pub fn add_custom_emoji(&mut self, emoji: CustomEmoji) -> Result<(), ValidationError> {
        let entry = emoji.into_entry()?;
        self.lexicon.get_or_insert_with(SharedLexicon::default).append(entry);
        Ok(())
    }

    /// 发布草稿；空 emoji 消息直接忽略（返回 `None`）。
    pub fn publish(&mut self, draft: PostDraft) -> Option<PostId> {
        if draft.emoji_message.iter().all(|s| s.trim().is_empty()) {
            return None;
        }
        let id = PostId(self.next_post_id);
        self.next_post_id += 1;
        debug!(post = %id, author = %draft.author, "post published");
        self.posts.push(Post {
            id,
            emoji_message: draft.emoji_message,
            original_text: draft.original_text,
            author: draft.author,
        });
        self.view = View::Chatter;
        Some(id)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// 同一帖子再点一次收起；点别的帖子则切换过去。不存在的 id 不改变状态。
    pub fn toggle_original(&mut self, id: PostId) -> Option<PostId> {
        if self.post(id).is_none() {
            return self.selected;
        }
        self.selected = if self.selected == Some(id) {
            None
        } else {
            Some(id)
        };
        self.selected
    }

    pub fn selected(&self) -> Option<PostId> {
        self.selected
    }

    /// 关闭会话：丢弃帖子与词库，回到首页。
    pub fn teardown(&mut self) {
        self.posts.clear();
        self.lexicon = None;
        self.selected = None;
        self.view = View::Home;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Vec::new(), 0)
    }
}
