use chrono::Utc;
use contracts::domain::a003_chat::{Author, Conversation};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::config::CHAT_REPLY_DELAY_MS;
use crate::layout::global_context::use_global_context;
use crate::shared::data;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};

const FORM_KEY: &str = "a003_chat--conversations";

/// Чат с работодателями и рекламодателями. Разговоры живут в памяти вкладки.
#[component]
#[allow(non_snake_case)]
pub fn ChatPage() -> impl IntoView {
    let ctx = use_global_context();

    let conversations = RwSignal::new(
        ctx.get_form_state::<Vec<Conversation>>(FORM_KEY)
            .unwrap_or_else(data::conversations::seed),
    );
    let selected = RwSignal::new(
        conversations.with_untracked(|cs| cs.first().map(|c| c.id)),
    );
    let draft = RwSignal::new(String::new());

    Effect::new(move |_| {
        conversations.with(|cs| ctx.set_form_state(FORM_KEY, cs));
    });

    let send = move || {
        let Some(conversation_id) = selected.get_untracked() else {
            return;
        };
        let text = draft.get_untracked();
        let sent = conversations
            .try_update(|cs| {
                cs.iter_mut()
                    .find(|c| c.id == conversation_id)
                    .and_then(|c| c.send(&text, Utc::now()).cloned())
            })
            .flatten();
        if sent.is_none() {
            return;
        }
        draft.set(String::new());

        // Ответ не привязан к времени жизни страницы
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(CHAT_REPLY_DELAY_MS).await;
            let replied = conversations.try_update(|cs| {
                if let Some(c) = cs.iter_mut().find(|c| c.id == conversation_id) {
                    c.auto_reply(Utc::now());
                }
            });
            if replied.is_none() {
                log::debug!("chat: page closed before reply to {}", conversation_id);
            }
        });
    };

    let conversation_list = move || {
        conversations.with(|cs| {
            cs.iter()
                .map(|c| {
                    let id = c.id;
                    let preview = c
                        .last_message()
                        .map(|m| m.text.clone())
                        .unwrap_or_else(|| "Немає повідомлень".to_string());
                    let item_class = move || {
                        if selected.get() == Some(id) {
                            "chat__conversation chat__conversation--active"
                        } else {
                            "chat__conversation"
                        }
                    };
                    view! {
                        <li class=item_class on:click=move |_| selected.set(Some(id))>
                            <div class="chat__peer">{c.peer.clone()}</div>
                            <div class="chat__preview">{preview}</div>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    let messages = move || {
        let Some(id) = selected.get() else {
            return view! { <p class="empty-state">"Оберіть розмову"</p> }.into_any();
        };
        conversations.with(|cs| {
            let Some(conversation) = cs.iter().find(|c| c.id == id) else {
                return view! { <p class="empty-state">"Розмову не знайдено"</p> }.into_any();
            };
            if conversation.messages.is_empty() {
                return view! { <p class="empty-state">"Напишіть перше повідомлення"</p> }.into_any();
            }
            conversation
                .messages
                .iter()
                .map(|m| {
                    let class = match m.author {
                        Author::Me => "chat__message chat__message--mine",
                        Author::Peer => "chat__message",
                    };
                    view! {
                        <div class=class>
                            <div class="chat__text">{m.text.clone()}</div>
                            <div class="chat__time">{m.sent_at.format("%H:%M").to_string()}</div>
                        </div>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <PageFrame page_id="a003_chat--page" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h2>"Повідомлення"</h2>
            </div>
            <div class="chat">
                <ul class="chat__conversations">{conversation_list}</ul>
                <div class="chat__thread">
                    <div class="chat__messages">{messages}</div>
                    <form
                        class="chat__composer"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            send();
                        }
                    >
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Ваше повідомлення..."
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                            disabled=move || selected.get().is_none()
                        />
                        <button
                            class="button button--primary"
                            type="submit"
                            disabled=move || draft.with(|d| d.trim().is_empty())
                        >
                            {icon("message")}
                            "Надіслати"
                        </button>
                    </form>
                </div>
            </div>
        </PageFrame>
    }
}
