//! Chatbot section: a transcript over the documents uploaded this session.

pub mod model;
pub mod view_model;

use crate::app_shell::{Section, SectionRouter};
use crate::shared::icons::icon;
use leptos::html::{Div, Input};
use leptos::prelude::*;
use view_model::{ChatMessage, ChatRole, ChatVm};

#[component]
#[allow(non_snake_case)]
pub fn ChatSection() -> impl IntoView {
    let router = use_context::<SectionRouter>().expect("SectionRouter not found in context");
    let vm = ChatVm::new();

    let messages_ref = NodeRef::<Div>::new();
    let input_ref = NodeRef::<Input>::new();

    // Focus the input at startup and whenever this section becomes active.
    Effect::new(move |prev: Option<()>| {
        let active = router.is_active(Section::Chatbot);
        if prev.is_none() || active {
            request_animation_frame(move || {
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            });
        }
    });

    let scroll_to_bottom = move || {
        request_animation_frame(move || {
            if let Some(el) = messages_ref.get_untracked() {
                el.set_scroll_top(el.scroll_height());
            }
        });
    };

    let send = move || {
        let text = vm.input.get_untracked().trim().to_string();
        if text.is_empty() || vm.is_thinking.get_untracked() {
            return;
        }
        vm.push(ChatMessage::user(text.clone()));
        vm.input.set(String::new());
        vm.is_thinking.set(true);
        scroll_to_bottom();

        wasm_bindgen_futures::spawn_local(async move {
            let reply = match model::send_query(&text).await {
                Ok(resp) => resp.answer,
                Err(e) => {
                    log::error!("Chat error: {}", e);
                    "Sorry, I encountered an error. Please try again.".to_string()
                }
            };
            vm.is_thinking.set(false);
            vm.push(ChatMessage::bot(reply));
            scroll_to_bottom();
        });
    };

    view! {
        <div class="chat">
            <div class="chat__messages" node_ref=messages_ref>
                <div class="chat-message chat-message--bot">
                    <p class="chat-message__text">
                        "Hello! Upload some documents and ask me questions about them."
                    </p>
                </div>
                <For
                    each=move || vm.messages.get()
                    key=|message| message.id
                    children=move |message| message_view(message)
                />
                <Show when=move || vm.is_thinking.get()>
                    <div class="chat-message chat-message--bot chat-message--thinking">
                        <p class="chat-message__text">"Thinking..."</p>
                    </div>
                </Show>
            </div>
            <div class="chat__controls">
                <input
                    type="text"
                    class="chat__input"
                    placeholder="Ask about your documents..."
                    node_ref=input_ref
                    prop:value=move || vm.input.get()
                    on:input=move |ev| vm.input.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            send();
                        }
                    }
                />
                <button
                    class="button button--primary chat__send"
                    disabled=move || vm.is_thinking.get()
                    on:click=move |_| send()
                >
                    {icon("send")}
                    " Send"
                </button>
            </div>
        </div>
    }
}

fn message_view(message: ChatMessage) -> AnyView {
    let role_class = match message.role {
        ChatRole::User => "chat-message chat-message--user",
        ChatRole::Bot => "chat-message chat-message--bot",
    };
    view! {
        <div class=role_class>
            // answers keep their line breaks
            <p class="chat-message__text" style:white-space="pre-wrap">
                {message.text}
            </p>
        </div>
    }
    .into_any()
}
