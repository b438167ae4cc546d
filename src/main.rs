#![allow(non_snake_case)]

mod app;
mod clipboard;
mod components;
pub mod context;
mod theme;

use std::sync::OnceLock;

use anyhow::Context as _;
use chatpane_core::{ChatConfig, ChatSelection, HttpHistoryClient, UserProfile};
use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Everything the UI needs at mount, resolved from the command line.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub chat: ChatConfig,
    pub user: UserProfile,
    pub selection: Option<ChatSelection>,
    pub history: HttpHistoryClient,
}

/// Global launch configuration, set once in `main`
static LAUNCH: OnceLock<LaunchConfig> = OnceLock::new();

/// Get the launch configuration (set from command line before the window opens).
pub fn launch_config() -> Option<&'static LaunchConfig> {
    LAUNCH.get()
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ChatKindArg {
    Dm,
    Group,
}

/// Chatpane - chat message viewer
#[derive(Parser, Debug)]
#[command(name = "chatpane-desktop")]
#[command(about = "Chatpane - scrollable chat history with copy and delete actions")]
struct Args {
    /// Base URL of the chat HTTP API
    #[arg(long)]
    api_base: Option<String>,

    /// WebSocket URL of the real-time channel
    #[arg(long)]
    socket_url: Option<String>,

    /// Session token, sent as the `jwt` cookie
    #[arg(long)]
    session_token: Option<String>,

    /// Our user id
    #[arg(short, long)]
    user_id: String,

    /// Our first name (shown in delete previews)
    #[arg(long)]
    first_name: Option<String>,

    /// Conversation to open at start
    #[arg(short, long)]
    chat_id: Option<String>,

    /// Kind of the conversation given by --chat-id
    #[arg(long, value_enum, default_value = "dm")]
    chat_kind: ChatKindArg,

    /// Treat the device as touch-capable (always use the mobile dialog layout)
    #[arg(long)]
    touch: bool,
}

impl Args {
    fn into_launch(self) -> anyhow::Result<LaunchConfig> {
        let mut chat = ChatConfig::default();
        if let Some(api_base) = self.api_base {
            chat.api_base = api_base;
        }
        if let Some(socket_url) = self.socket_url {
            chat.socket_url = socket_url;
        }
        chat.session_token = self.session_token;
        chat.touch_capable = self.touch;
        chat.validate().context("invalid configuration")?;

        let history = HttpHistoryClient::new(&chat).context("failed to build HTTP client")?;

        let selection = self.chat_id.map(|id| match self.chat_kind {
            ChatKindArg::Dm => ChatSelection::direct(id),
            ChatKindArg::Group => ChatSelection::group(id),
        });

        Ok(LaunchConfig {
            chat,
            user: UserProfile {
                id: self.user_id,
                first_name: self.first_name,
                last_name: None,
                email: None,
            },
            selection,
            history,
        })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let launch = Args::parse().into_launch()?;

    tracing::info!(
        api = %launch.chat.api_base,
        socket = %launch.chat.socket_url,
        user = %launch.user.id,
        "Starting chatpane"
    );

    let title = match launch.selection.as_ref() {
        Some(selection) => format!("Chatpane - {}", selection.id),
        None => "Chatpane".to_string(),
    };

    let _ = LAUNCH.set(launch);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(960.0, 820.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatpane_core::ChatKind;

    #[test]
    fn group_selection_from_args() {
        let args = Args::try_parse_from([
            "chatpane-desktop",
            "--user-id",
            "me",
            "--chat-id",
            "general",
            "--chat-kind",
            "group",
        ])
        .unwrap();
        let launch = args.into_launch().unwrap();
        let selection = launch.selection.unwrap();
        assert_eq!(selection.kind, ChatKind::Group);
        assert!(!selection.needs_history_fetch());
        assert_eq!(launch.chat.api_base, "http://localhost:8747");
    }

    #[test]
    fn rejects_non_websocket_url() {
        let args = Args::try_parse_from([
            "chatpane-desktop",
            "--user-id",
            "me",
            "--socket-url",
            "http://localhost:8747/socket",
        ])
        .unwrap();
        assert!(args.into_launch().is_err());
    }

    #[test]
    fn touch_flag_reaches_config() {
        let args = Args::try_parse_from(["chatpane-desktop", "-u", "me", "--touch"]).unwrap();
        let launch = args.into_launch().unwrap();
        assert!(launch.chat.touch_capable);
        assert!(launch.selection.is_none());
    }
}
