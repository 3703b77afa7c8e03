//! Floating chat assistant for questions about the portfolio.
//!
//! SYSTEM CONTEXT
//! ==============
//! Questions go to `chat/` with recent turns as history. Replies are already
//! interpreted into prose, structured cards, or an error by
//! `net::chat`, so this view only matches on `ChatContent`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api;
use crate::net::chat::{ChatContent, ContentCard, SourceLink};
use crate::state::chat::{ChatMessage, ChatRole, ChatState};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ChatAssistant() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.loading, c.open));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let mut request = None;
        chat.update(|c| request = c.ask(&text));
        let Some((question, history)) = request else {
            return;
        };
        input.set(String::new());
        leptos::task::spawn_local(async move {
            match api::send_chat(&question, &history).await {
                Ok(reply) => chat.update(|c| c.receive(reply)),
                Err(err) => {
                    leptos::logging::warn!("chat request failed: {err}");
                    chat.update(ChatState::fail);
                }
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.with(|c| c.loading);

    view! {
        <div class="chat">
            <button
                class="btn chat__toggle"
                on:click=move |_| chat.update(|c| c.open = !c.open)
                aria-label="Toggle assistant"
            >
                {move || if chat.with(|c| c.open) { "×" } else { "💬" }}
            </button>
            <Show when=move || chat.with(|c| c.open)>
                <div class="chat__panel">
                    <div class="chat__header">"Ask about this portfolio"</div>
                    <div class="chat__messages" node_ref=messages_ref>
                        <For
                            each=move || chat.get().messages
                            key=|msg| msg.id.clone()
                            children=|msg| view! { <ChatBubble message=msg/> }
                        />
                        {move || chat.with(|c| c.loading).then(|| view! { <div class="chat__loading">"Thinking..."</div> })}
                    </div>
                    <div class="chat__input-row">
                        <input
                            class="chat__input"
                            type="text"
                            placeholder="Ask a question..."
                            disabled=move || chat.with(|c| c.loading)
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button class="btn btn--primary chat__send" on:click=move |_| do_send() disabled=move || !can_send()>
                            "Send"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let is_assistant = message.role == ChatRole::Assistant;
    let is_error = matches!(message.content, ChatContent::Error(_));

    let body = match message.content {
        ChatContent::Text(text) if is_assistant => {
            view! { <div class="chat__markdown" inner_html=render_markdown_html(&text)></div> }.into_any()
        }
        ChatContent::Text(text) => view! { <span>{text}</span> }.into_any(),
        ChatContent::Error(text) => view! { <span class="chat__error">{text}</span> }.into_any(),
        ChatContent::Cards(cards) => {
            view! { <div class="chat__cards">{cards.into_iter().map(render_card).collect_view()}</div> }.into_any()
        }
    };

    view! {
        <div class="chat__message" class:chat__message--assistant=is_assistant class:chat__message--error=is_error>
            {body}
            {(!message.sources.is_empty())
                .then(|| {
                    view! {
                        <ul class="chat__sources">
                            {message.sources.into_iter().map(render_source).collect_view()}
                        </ul>
                    }
                })}
        </div>
    }
}

fn render_source(source: SourceLink) -> impl IntoView {
    let label = source.label();
    let link = if source.is_internal() {
        view! { <A href=source.url>{label}</A> }.into_any()
    } else {
        view! {
            <a href=source.url target="_blank" rel="noopener noreferrer">
                {label}
            </a>
        }
            .into_any()
    };
    view! { <li class="chat__source">{link}</li> }
}

fn external_link(url: Option<String>, text: &'static str) -> Option<impl IntoView> {
    url.filter(|u| !u.is_empty()).map(|href| {
        view! {
            <a href=href target="_blank" rel="noopener noreferrer">
                {text}
            </a>
        }
    })
}

fn render_card(card: ContentCard) -> AnyView {
    match card {
        ContentCard::Experience(c) => view! {
            <article class="chat-card chat-card--experience">
                <h4>{c.title}</h4>
                <p class="chat-card__meta">{c.company} " · " {c.date}</p>
                <ul>{c.responsibilities.into_iter().map(|r| view! { <li>{r}</li> }).collect_view()}</ul>
            </article>
        }
        .into_any(),
        ContentCard::Project(c) => view! {
            <article class="chat-card chat-card--project">
                <h4>{c.title}</h4>
                <p>{c.description}</p>
                <ul class="chat-card__tech">
                    {c.technologies.into_iter().map(|t| view! { <li>{t}</li> }).collect_view()}
                </ul>
                <div class="chat-card__links">{external_link(c.url, "Live")} {external_link(c.repo_url, "Code")}</div>
            </article>
        }
        .into_any(),
        ContentCard::Certification(c) => view! {
            <article class="chat-card chat-card--certification">
                <h4>{c.name}</h4>
                <p class="chat-card__meta">{c.issuer}</p>
                {external_link(c.url, "View credential")}
            </article>
        }
        .into_any(),
        ContentCard::Blog(c) => view! {
            <article class="chat-card chat-card--blog">
                <h4>{c.title}</h4>
                <div class="chat__markdown" inner_html=render_markdown_html(&c.content)></div>
                {c.url.filter(|u| !u.is_empty()).map(|href| view! { <A href=href>"Read more"</A> })}
            </article>
        }
        .into_any(),
        ContentCard::TechStack(c) => view! {
            <article class="chat-card chat-card--tech">
                <ul class="chat-card__tech">
                    {c.technologies.into_iter().map(|t| view! { <li>{t}</li> }).collect_view()}
                </ul>
            </article>
        }
        .into_any(),
        ContentCard::Topic(c) => view! {
            <article class="chat-card chat-card--topic">
                <h4>{c.name}</h4>
                <div class="chat__markdown" inner_html=render_markdown_html(&c.content)></div>
            </article>
        }
        .into_any(),
    }
}
