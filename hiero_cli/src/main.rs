use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use hiero_core::{
    event::{Action, Event},
    session::Session,
    state::{AppState, PostId, User, View},
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod render;

/// 逐词把消息翻译成 emoji 的交互式 demo
#[derive(Parser, Debug)]
#[command(name = "hiero_cli")]
#[command(about = "Translate messages word-by-word into emoji and post them to a feed")]
struct Args {
    /// 词库文件（.json 或 .tsv），默认使用 asset/lexicon.json
    #[arg(long, short = 'l')]
    lexicon: Option<PathBuf>,

    /// token 之间的分隔符
    #[arg(long, default_value = "•")]
    separator: String,

    /// 以哪个用户身份发帖（u1 / u2）
    #[arg(long, short = 'u', default_value = "u1")]
    user: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let lexicon_path = args.lexicon.clone().unwrap_or_else(default_lexicon_path);

    let users = vec![User::new("u1", "Bronx Marcus"), User::new("u2", "Kush Harlem")];
    let current = users.iter().position(|u| u.id.0 == args.user).unwrap_or(0);
    let state = AppState::new(users, current);

    // 词库加载失败不退出：会话照常进行，翻译时会报“词库未加载”
    let mut session = match hiero_lexicon::from_path(&lexicon_path) {
        Ok(lexicon) => Session::with_lexicon(state, lexicon),
        Err(e) => {
            warn!(path = %lexicon_path.display(), error = %e, "failed to load lexicon");
            Session::new(state)
        }
    };

    repl(&mut session, &lexicon_path, &args.separator).context("REPL I/O failed")?;
    session.shutdown();
    Ok(())
}

fn default_lexicon_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("asset").join("lexicon.json")
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "直接输入一句话回车即翻译；命令：")?;
    writeln!(out, "  :post                 发布最近一次翻译")?;
    writeln!(out, "  :feed                 查看帖子流")?;
    writeln!(out, "  :open <n>             展开/收起第 n 个帖子的原文")?;
    writeln!(out, "  :add <emoji> <label>  添加自定义 emoji")?;
    writeln!(out, "  :library              查看词库")?;
    writeln!(out, "  :home | :clear | :help | :q")
}

fn repl(session: &mut Session, lexicon_path: &PathBuf, separator: &str) -> io::Result<()> {
    let mut out = io::stdout();
    let stdin = io::stdin();
    let mut line = String::new();
    let entries = session.state().lexicon().map_or(0, |l| l.lexicon().len());
    writeln!(out, "hiero demo | lexicon: {} ({entries} entries)", lexicon_path.display())?;
    writeln!(out, "当前用户：{}。输入 :help 查看命令，:q 退出。", session.state().current_user().name)?;

    loop {
        line.clear();
        write!(out, "{}> ", session.state().view.name())?;
        out.flush()?;
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (cmd, rest) = match input.strip_prefix(':') {
            Some(c) => c.split_once(char::is_whitespace).unwrap_or((c, "")),
            None => ("", input),
        };
        let event = match cmd {
            "" => {
                if let Err(e) = session.handle(Event::Edit(rest.to_string())) {
                    writeln!(out, "error: {e}")?;
                    continue;
                }
                Event::Translate
            }
            "q" | "quit" | "exit" => break,
            "help" | "h" => {
                print_help(&mut out)?;
                continue;
            }
            "post" => Event::Post,
            "clear" => Event::Clear,
            "home" => Event::Navigate(View::Home),
            "feed" | "chatter" => Event::Navigate(View::Chatter),
            "library" => Event::Navigate(View::Library),
            "open" => match rest.trim().trim_start_matches('#').parse::<u64>() {
                Ok(n) => Event::ToggleOriginal(PostId(n)),
                Err(_) => {
                    writeln!(out, "用法：:open <n>")?;
                    continue;
                }
            },
            "add" => {
                let rest = rest.trim();
                let (symbol, label) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Event::AddEmoji {
                    symbol: symbol.to_string(),
                    label: label.to_string(),
                }
            }
            other => {
                writeln!(out, "未知命令 :{other}，输入 :help 查看命令")?;
                continue;
            }
        };

        let show_view = !matches!(event, Event::Translate | Event::Clear);
        match session.handle(event) {
            Ok(actions) => report(&mut out, session, &actions, separator, show_view)?,
            Err(e) => writeln!(out, "error: {e}")?,
        }
    }

    Ok(())
}

fn report(
    out: &mut impl Write,
    session: &Session,
    actions: &[Action],
    separator: &str,
    show_view: bool,
) -> io::Result<()> {
    for a in actions {
        match a {
            Action::Translated { words, matched } => {
                writeln!(out, "  {}", render::render_translation(session.translation(), separator))?;
                writeln!(out, "  ({matched}/{words} matched, :post 发布)")?;
            }
            Action::Published(id) => writeln!(out, "posted {id}")?,
            Action::EmojiAdded(symbol) => writeln!(out, "added {symbol}")?,
            Action::Selected(_) => {}
        }
    }

    if !show_view {
        return Ok(());
    }
    let state = session.state();
    match state.view {
        View::Home => {}
        View::Chatter => {
            if state.posts().is_empty() {
                writeln!(out, "(还没有帖子)")?;
            }
            for p in state.posts() {
                writeln!(out, "{}", render::render_post(state, p, separator))?;
            }
        }
        View::Library => match state.lexicon() {
            Some(l) => {
                for e in l.lexicon().entries() {
                    writeln!(out, "{}  {}", e.symbol, e.trigger_words.join(", "))?;
                }
            }
            None => writeln!(out, "(词库未加载)")?,
        },
    }
    Ok(())
}
