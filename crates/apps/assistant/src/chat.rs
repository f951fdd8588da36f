use std::rc::Rc;

use desktop_app_contract::{
    window_primary_input_dom_id, ChatRole, ChatTurn, ContentService, ContentServiceError,
    WindowRuntimeId,
};
use leptos::{ev::SubmitEvent, logging::warn, *};

const GREETING: &str = "Hello! I am Assistant 95. How can I assist you today?";

/// Chat transcript plus the single in-flight request guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    turns: Vec<ChatTurn>,
    pending: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            turns: vec![ChatTurn::model(GREETING)],
            pending: false,
        }
    }
}

impl ChatSession {
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Records the user's prompt and returns the request to send, or `None` when the prompt is
    /// blank or a reply is still outstanding.
    ///
    /// The returned history excludes the new prompt itself.
    pub fn submit(&mut self, prompt: &str) -> Option<(String, Vec<ChatTurn>)> {
        if self.pending || prompt.trim().is_empty() {
            return None;
        }
        let history = self.turns.clone();
        self.turns.push(ChatTurn::user(prompt));
        self.pending = true;
        Some((prompt.to_string(), history))
    }

    pub fn complete(&mut self, reply: Result<String, ContentServiceError>) {
        let text = match reply {
            Ok(text) => text,
            Err(err) => format!("Error: {err}"),
        };
        self.turns.push(ChatTurn::model(text));
        self.pending = false;
    }
}

#[component]
pub fn ChatApp(window_id: WindowRuntimeId, content: Rc<dyn ContentService>) -> impl IntoView {
    let session = create_rw_signal(ChatSession::default());
    let draft = create_rw_signal(String::new());
    let content = store_value(content);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let prompt = draft.get_untracked();
        let Some((prompt, history)) = session
            .try_update(|session| session.submit(&prompt))
            .flatten()
        else {
            return;
        };
        draft.set(String::new());

        let request = content.with_value(|content| content.chat(prompt, history));
        spawn_local(async move {
            let reply = request.await;
            if let Err(err) = &reply {
                warn!("chat request failed: {err}");
            }
            session.update(|session| session.complete(reply));
        });
    };

    view! {
        <div class="app-shell app-chat-shell">
            <div class="chat-transcript" role="log" aria-live="polite">
                {move || {
                    session
                        .with(|session| session.turns().to_vec())
                        .into_iter()
                        .map(|turn| {
                            let class_name = match turn.role {
                                ChatRole::User => "chat-turn user",
                                ChatRole::Model => "chat-turn model",
                            };
                            view! {
                                <div class=class_name>
                                    <p class="chat-bubble">{turn.text}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <Show when=move || session.with(ChatSession::is_pending) fallback=|| ()>
                    <div class="chat-thinking">"Thinking..."</div>
                </Show>
            </div>

            <form class="chat-prompt" on:submit=on_submit>
                <input
                    id=window_primary_input_dom_id(window_id)
                    type="text"
                    placeholder="Type a message..."
                    aria-label="Message"
                    prop:value=move || draft.get()
                    disabled=move || session.with(ChatSession::is_pending)
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || session.with(ChatSession::is_pending)>
                    "Send"
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn submit_records_prompt_and_sends_prior_history() {
        let mut session = ChatSession::default();
        let (prompt, history) = session.submit("hi").expect("request");
        assert_eq!(prompt, "hi");
        assert_eq!(history, vec![ChatTurn::model(GREETING)]);
        assert_eq!(session.turns().len(), 2);
        assert!(session.is_pending());
    }

    #[test]
    fn second_submit_is_rejected_while_pending() {
        let mut session = ChatSession::default();
        session.submit("first");
        assert_eq!(session.submit("second"), None);
        assert_eq!(session.turns().len(), 2);
    }

    #[test]
    fn blank_prompt_is_ignored() {
        let mut session = ChatSession::default();
        assert_eq!(session.submit("   "), None);
        assert!(!session.is_pending());
    }

    #[test]
    fn failures_render_as_model_text() {
        let mut session = ChatSession::default();
        session.submit("hello");
        session.complete(Err(ContentServiceError::Unavailable("quota exceeded".to_string())));
        assert!(!session.is_pending());
        assert_eq!(
            session.turns().last(),
            Some(&ChatTurn::model(
                "Error: content service unavailable: quota exceeded"
            ))
        );
    }
}
