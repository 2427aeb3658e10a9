//! `Session`：对上层（CLI/GUI）提供的会话对象。
//!
//! `Session` 自身不做展示，而是：
//! - 持有 `AppState`（应用状态）与 `Composer`（撰写状态）
//! - 把每个 `Event` 分派到对应的变更操作
//! - 输出 `Action` 列表，错误原样返回给调用方决定如何提示

use crate::{
    compose::Composer,
    error::Error,
    event::{Action, Event},
    lexicon::{CustomEmoji, Lexicon},
    state::AppState,
    token::Translation,
};

pub struct Session {
    state: AppState,
    composer: Composer,
}

impl Session {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            composer: Composer::new(),
        }
    }

    pub fn with_lexicon(mut state: AppState, lexicon: Lexicon) -> Self {
        state.install_lexicon(lexicon);
        Self::new(state)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn translation(&self) -> &Translation {
        self.composer.translation()
    }

    pub fn handle(&mut self, event: Event) -> Result<Vec<Action>, Error> {
        let mut actions = Vec::new();
        match event {
            Event::Edit(text) => self.composer.set_text(text),
            Event::Clear => self.composer.clear(),
            Event::Translate => {
                let t = self
                    .composer
                    .translate(self.state.lexicon().map(|l| l.lexicon()))?;
                actions.push(Action::Translated {
                    words: t.len(),
                    matched: t.matched_count(),
                });
            }
            Event::Post => {
                let author = self.state.current_user().id.clone();
                let draft = self.composer.post(author)?;
                if let Some(id) = self.state.publish(draft) {
                    actions.push(Action::Published(id));
                }
            }
            Event::Navigate(view) => self.state.navigate(view),
            Event::AddEmoji { symbol, label } => {
                let emoji = CustomEmoji::new(symbol, label);
                let symbol = emoji.symbol.trim().to_string();
                self.state.add_custom_emoji(emoji)?;
                actions.push(Action::EmojiAdded(symbol));
            }
            Event::ToggleOriginal(id) => {
                actions.push(Action::Selected(self.state.toggle_original(id)));
            }
        }
        Ok(actions)
    }

    /// 结束会话，返回最终状态供宿主释放。
    pub fn shutdown(mut self) -> AppState {
        self.composer.clear();
        self.state.teardown();
        self.state
    }
}
