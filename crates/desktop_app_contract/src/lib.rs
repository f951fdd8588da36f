//! Shared contract types between the desktop window manager runtime and hosted apps.
//!
//! Hosted apps see exactly three things from the window manager: the launch payload assigned at
//! mount ([`LaunchData`]), an [`AppHost`] handle for the few requests an app may make about its own
//! window, and the [`ContentService`] used by network-backed apps. Apps cannot move, resize, or
//! restack their window.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{fmt, rc::Rc, str::FromStr};

use futures::future::LocalBoxFuture;
use leptos::{Callable, Callback};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier for a runtime-managed window, as seen by hosted apps.
pub type WindowRuntimeId = u64;

/// Closed catalog of applications the desktop can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    /// Plain text editor.
    Notepad,
    /// Conversational assistant backed by the content service.
    Chat,
    /// Minesweeper game.
    Minesweeper,
    /// Four-function calculator.
    Calculator,
    /// Paint canvas.
    Paint,
    /// Mock filesystem browser.
    Explorer,
    /// Run dialog; the only single-instance application.
    Run,
    /// Address-bar browser rendering generated pages.
    WebBrowser,
}

impl AppId {
    /// Every application id, in catalog order.
    pub const ALL: [AppId; 8] = [
        Self::Notepad,
        Self::Chat,
        Self::Minesweeper,
        Self::Calculator,
        Self::Paint,
        Self::Explorer,
        Self::Run,
        Self::WebBrowser,
    ];

    /// Returns the canonical string token for this application.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Notepad => "notepad",
            Self::Chat => "chat",
            Self::Minesweeper => "minesweeper",
            Self::Calculator => "calculator",
            Self::Paint => "paint",
            Self::Explorer => "explorer",
            Self::Run => "run",
            Self::WebBrowser => "web-browser",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown application id `{0}`")]
pub struct UnknownAppId(pub String);

impl FromStr for AppId {
    type Err = UnknownAppId;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|app_id| app_id.as_str() == token)
            .ok_or_else(|| UnknownAppId(raw.to_string()))
    }
}

/// Initial payload handed to a hosted app at mount time.
///
/// Only apps that accept initial data have a variant here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LaunchData {
    /// A text document opened in the text editor.
    TextDocument {
        /// Display name of the document (for example `todo.txt`).
        name: String,
        /// Full document text.
        content: String,
    },
}

impl LaunchData {
    /// Returns the document text when this payload carries one.
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Self::TextDocument { content, .. } => Some(content),
        }
    }
}

/// Requests a hosted app may send about its own window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Close the window hosting the app.
    CloseWindow,
    /// Open another application, optionally with a launch payload.
    OpenApp {
        /// Application to open.
        app_id: AppId,
        /// Payload for the new window.
        data: Option<LaunchData>,
    },
    /// Resolve a run-dialog command; on success the target app opens in place of the sender.
    RunCommand {
        /// Raw command text as typed.
        command: String,
    },
}

/// Handle passed down by the window frame for app-initiated requests.
#[derive(Clone, Copy)]
pub struct AppHost {
    sender: Callback<AppCommand>,
}

impl AppHost {
    /// Creates a host handle that forwards commands to `sender`.
    pub fn new(sender: Callback<AppCommand>) -> Self {
        Self { sender }
    }

    /// Sends a raw [`AppCommand`].
    pub fn send(&self, command: AppCommand) {
        self.sender.call(command);
    }

    /// Closes the hosting window.
    pub fn close(&self) {
        self.send(AppCommand::CloseWindow);
    }

    /// Opens another application.
    pub fn open_app(&self, app_id: AppId, data: Option<LaunchData>) {
        self.send(AppCommand::OpenApp { app_id, data });
    }

    /// Submits a run-dialog command.
    pub fn run_command(&self, command: impl Into<String>) {
        self.send(AppCommand::RunCommand {
            command: command.into(),
        });
    }
}

/// Speaker of one chat transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Text typed by the user.
    User,
    /// Text produced by the content service.
    Model,
}

/// One entry of a chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Who produced the text.
    pub role: ChatRole,
    /// Message text.
    pub text: String,
}

impl ChatTurn {
    /// Creates a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    /// Creates a model turn.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// Failures reported by a [`ContentService`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentServiceError {
    /// The request text was blank.
    #[error("request is empty")]
    EmptyRequest,
    /// The backend could not be reached or returned a failure.
    ///
    /// The built-in offline service never fails this way; network backends injected through
    /// `DesktopHostContext::new` report transport and quota errors here.
    #[error("content service unavailable: {0}")]
    Unavailable(String),
}

/// Future returned by [`ContentService`] calls.
pub type ContentFuture = LocalBoxFuture<'static, Result<String, ContentServiceError>>;

/// Opaque text/HTML generation backend used by the chat and browser apps.
pub trait ContentService {
    /// Produces a chat reply to `prompt` given the prior transcript.
    fn chat(&self, prompt: String, history: Vec<ChatTurn>) -> ContentFuture;

    /// Produces the HTML body for a requested URL or search query.
    fn web_page(&self, url: String) -> ContentFuture;
}

/// Everything a hosted app receives when mounted into a window.
#[derive(Clone)]
pub struct AppMountContext {
    /// Hosting window id.
    pub window_id: WindowRuntimeId,
    /// Launch payload assigned when the window was opened.
    pub data: Option<LaunchData>,
    /// Window-scoped request handle.
    pub host: AppHost,
    /// Shared content backend.
    pub content: Rc<dyn ContentService>,
}

/// Returns the DOM id an app should put on its primary input so the shell can focus it.
pub fn window_primary_input_dom_id(window_id: WindowRuntimeId) -> String {
    format!("window-primary-input-{window_id}")
}
