use yew::prelude::*;

use crate::config;
use crate::content::CHAT_WELCOME;

/// The concierge panel is decorative: it shows a fixed greeting and its input
/// is not wired to anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatPanel {
    #[default]
    Closed,
    Open,
}

impl ChatPanel {
    pub fn toggled(self) -> Self {
        match self {
            ChatPanel::Closed => ChatPanel::Open,
            ChatPanel::Open => ChatPanel::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == ChatPanel::Open
    }

    fn launcher_glyph(self) -> &'static str {
        match self {
            ChatPanel::Closed => "💬",
            ChatPanel::Open => "✕",
        }
    }
}

#[function_component(AIChatbot)]
pub fn ai_chatbot() -> Html {
    let panel = use_state(ChatPanel::default);

    let toggle = {
        let panel = panel.clone();
        Callback::from(move |_: MouseEvent| panel.set(panel.toggled()))
    };

    html! {
        <>
            <div class="chat-launcher cursor-pointer" onclick={toggle}>
                {panel.launcher_glyph()}
            </div>
            {
                if panel.is_open() {
                    html! {
                        <div class="chat-panel">
                            <div class="chat-panel__header">
                                <span class="chat-panel__eyebrow">{"Concierge"}</span>
                                <p class="chat-panel__title font-serif">{"Adroit Assistant"}</p>
                            </div>
                            <div class="chat-panel__body">
                                <div class="chat-panel__message">{CHAT_WELCOME}</div>
                            </div>
                            <div class="chat-panel__footer">
                                <input type="text" placeholder="Type a message..." />
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {format!(r#"
                .chat-launcher {{
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 40;
                    background: #0a0a0a;
                    color: #fff;
                    padding: 1rem;
                    border-radius: 9999px;
                    line-height: 1;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    transition: background 0.5s;
                }}
                .chat-launcher:hover {{ background: {accent}; }}
                .chat-panel {{
                    position: fixed;
                    bottom: 6rem;
                    right: 2rem;
                    z-index: 40;
                    width: 20rem;
                    background: #fff;
                    border: 1px solid #f5f5f4;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    animation: chat-in 0.3s ease both;
                }}
                .chat-panel__header {{
                    padding: 1.5rem;
                    background: #0a0a0a;
                    color: #fff;
                }}
                .chat-panel__eyebrow {{
                    font-size: 10px;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: {accent};
                }}
                .chat-panel__title {{ font-size: 1.125rem; font-style: italic; margin-top: 0.25rem; }}
                .chat-panel__body {{ height: 16rem; background: #fafaf9; padding: 1.5rem; }}
                .chat-panel__message {{
                    display: inline-block;
                    background: #fff;
                    padding: 1rem;
                    font-size: 0.875rem;
                    color: #57534e;
                    border: 1px solid #f5f5f4;
                    border-radius: 0 0.75rem 0.75rem 0.75rem;
                }}
                .chat-panel__footer {{ padding: 1rem; background: #fff; }}
                .chat-panel__footer input {{ width: 100%; font-size: 0.875rem; border: none; outline: none; }}
                @keyframes chat-in {{
                    from {{ opacity: 0; transform: translateY(20px); }}
                    to {{ opacity: 1; transform: translateY(0); }}
                }}
                "#, accent = config::ACCENT)}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!ChatPanel::default().is_open());
    }

    #[test]
    fn double_toggle_is_identity() {
        for start in [ChatPanel::Closed, ChatPanel::Open] {
            assert_eq!(start.toggled().toggled(), start);
            assert_ne!(start.toggled(), start);
        }
    }
}
