//! Chat view
//!
//! Provides the conversation once the session leaves the landing screen:
//! - Header with the side panel toggle
//! - Message list that follows new messages and offers a jump-to-bottom
//!   button when scrolled up
//! - Follow-up composer pinned to the bottom

use std::future::Future;

use leptos::html;
use leptos::prelude::*;

use crate::core::input::{COMPOSER_MIN_HEIGHT_PX, can_send_follow_up};
use crate::core::ChatMessage;
use crate::ui::common::{IconButton, Spinner, SpinnerStyle};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

#[cfg(not(feature = "ssr"))]
use crate::core::ScrollMetrics;

/// How long the copy button shows its check mark
pub const COPIED_FEEDBACK_MS: u32 = 2000;

/// Show the copied check mark until `settle` resolves
pub async fn flash_copied<S>(set_copied: WriteSignal<bool>, settle: S)
where
    S: Future<Output = ()>,
{
    set_copied.set(true);
    settle.await;
    set_copied.set(false);
}

#[component]
pub fn ChatView() -> impl IntoView {
    let session = use_session_context();
    let messages = session.messages();
    let message_count = session.message_count();
    let is_loading = session.is_loading();
    let is_panel_open = session.is_panel_open();

    let container_ref = NodeRef::<html::Div>::new();
    let (show_jump_button, set_show_jump_button) = signal(false);

    // Jump to the newest message whenever the list grows or loading flips
    Effect::new(move |_| {
        let count = message_count.get();
        is_loading.track();
        if count > 0 {
            #[cfg(not(feature = "ssr"))]
            {
                if let Some(container) = container_ref.get() {
                    container.set_scroll_top(container.scroll_height());
                }
            }
        }
    });

    let on_scroll = move |_: leptos::ev::Event| {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(container) = container_ref.get() {
                let metrics = ScrollMetrics::new(
                    container.scroll_top() as f64,
                    container.scroll_height() as f64,
                    container.client_height() as f64,
                );
                set_show_jump_button.set(metrics.shows_jump_button());
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = set_show_jump_button;
        }
    };

    let scroll_to_bottom = move |_: leptos::ev::MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(container) = container_ref.get() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(container.scroll_height() as f64);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                container.scroll_to_with_scroll_to_options(&options);
            }
        }
    };

    let toggle_class = Signal::derive(move || {
        if is_panel_open.get() {
            "hover:bg-gray-800 rounded-md text-[#FFD700]".to_string()
        } else {
            "hover:bg-gray-800 rounded-md text-gray-400".to_string()
        }
    });

    view! {
        <div class="flex flex-col h-full w-full">
            // Chat header
            <div class="flex items-center justify-between px-4 py-3 border-b border-gray-800">
                <h2 class="text-xl font-medium">"Idea0 Chat"</h2>
                <IconButton
                    icon=icons::PANEL_RIGHT_OPEN
                    title="Toggle side panel"
                    class=toggle_class
                    on_click=Callback::new(move |_| session.toggle_side_panel())
                />
            </div>

            // Scroll to bottom button
            <Show when=move || show_jump_button.get()>
                <div class="absolute bottom-32 left-1/2 -translate-x-1/2 z-10">
                    <button
                        type="button"
                        class="rounded-full bg-gray-800 p-2 shadow-lg hover:bg-gray-700"
                        aria-label="Scroll to bottom"
                        on:click=scroll_to_bottom
                    >
                        <Icon name=icons::CHEVRON_DOWN class="w-5 h-5 text-white"/>
                    </button>
                </div>
            </Show>

            // Chat messages
            <div
                node_ref=container_ref
                class="flex-1 overflow-y-auto px-4 py-6"
                style="scroll-behavior: smooth"
                role="list"
                aria-label="Chat messages"
                on:scroll=on_scroll
            >
                <div class="max-w-3xl mx-auto">
                    <For
                        each=move || messages.get()
                        key=|message| message.id
                        children=move |message| view! { <ChatMessageItem message=message /> }
                    />
                    <Show when=move || is_loading.get()>
                        <div class="flex items-start gap-3 mb-6">
                            <div class="rounded-lg w-6 h-6 flex items-center justify-center shrink-0 bg-blue-500 text-white">
                                <Icon name=icons::BOT class="w-3.5 h-3.5"/>
                            </div>
                            <div class="pt-1">
                                <Spinner style=SpinnerStyle::Dots />
                            </div>
                        </div>
                    </Show>
                </div>
            </div>

            <FollowUpComposer />
        </div>
    }
}

/// One message row with avatar, author label and copy button
#[component]
fn ChatMessageItem(message: ChatMessage) -> impl IntoView {
    let is_user = message.kind.is_user();
    let (copied, set_copied) = signal(false);
    let content = message.content.clone();
    let (avatar_class, avatar_icon) = if is_user {
        (
            "rounded-lg w-6 h-6 flex items-center justify-center shrink-0 mt-0.5 bg-[#FFD700] text-black",
            icons::USER,
        )
    } else {
        (
            "rounded-lg w-6 h-6 flex items-center justify-center shrink-0 mt-0.5 bg-blue-500 text-white",
            icons::BOT,
        )
    };

    let on_copy = move |_: leptos::ev::MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            let text = content.clone();
            leptos::task::spawn_local(async move {
                if let Some(window) = web_sys::window() {
                    let promise = window.navigator().clipboard().write_text(&text);
                    match wasm_bindgen_futures::JsFuture::from(promise).await {
                        Ok(_) => {
                            flash_copied(
                                set_copied,
                                gloo_timers::future::TimeoutFuture::new(COPIED_FEEDBACK_MS),
                            )
                            .await
                        }
                        Err(e) => leptos::logging::warn!("Copy failed: {:?}", e),
                    }
                }
            });
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (&content, set_copied);
        }
    };

    view! {
        <div class="relative flex items-start gap-3 mb-6 group" role="listitem">
            <div class=avatar_class>
                <Icon name=avatar_icon class="w-3.5 h-3.5"/>
            </div>
            <div class="flex-1 min-w-0">
                <div class="font-medium text-xs mb-1 text-gray-300">{message.kind.author_label()}</div>
                <div class="text-sm text-white min-w-0 break-words whitespace-pre-line">
                    {message.content}
                </div>
            </div>
            <div class="absolute right-0 top-0 opacity-0 group-hover:opacity-100 transition-opacity">
                <button
                    type="button"
                    class="rounded-md p-1.5 text-gray-400 hover:text-white hover:bg-gray-800"
                    aria-label="Copy message"
                    on:click=on_copy
                >
                    {move || if copied.get() {
                        view! { <Icon name=icons::CHECK class="w-4 h-4"/> }
                    } else {
                        view! { <Icon name=icons::COPY class="w-4 h-4"/> }
                    }}
                </button>
            </div>
        </div>
    }
}

/// Auto-growing follow-up textarea with send button
#[component]
fn FollowUpComposer() -> impl IntoView {
    let session = use_session_context();
    let input = session.input();
    let is_loading = session.is_loading();
    let textarea_ref = NodeRef::<html::Textarea>::new();

    let can_send = move || can_send_follow_up(&input.get(), is_loading.get());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if can_send() {
            session.submit();
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            if can_send() {
                session.submit();
            }
        }
    };

    let resize = move || {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::input::composer_height;

            if let Some(textarea) = textarea_ref.get() {
                let style = textarea.style();
                let _ = style.set_property("height", "auto");
                let height = composer_height(textarea.scroll_height() as f64);
                let _ = style.set_property("height", &format!("{height}px"));
            }
        }
    };

    view! {
        <div class="border-t border-gray-800 px-4 pt-3">
            <form class="max-w-3xl mx-auto" on:submit=on_submit>
                <div class="flex items-end gap-2 rounded-2xl border border-gray-800 bg-gray-950 p-2">
                    <textarea
                        id="chat-main-textarea"
                        node_ref=textarea_ref
                        class="resize-none overflow-auto w-full flex-1 bg-transparent p-3 pb-1.5 text-sm outline-none ring-0 placeholder:text-gray-500"
                        placeholder="Ask a follow-up question..."
                        rows=1
                        spellcheck="false"
                        style=format!("height: {COMPOSER_MIN_HEIGHT_PX}px; min-height: {COMPOSER_MIN_HEIGHT_PX}px; max-height: 384px")
                        prop:value=move || input.get()
                        on:input=move |e| {
                            session.set_input(event_target_value(&e));
                            resize();
                        }
                        on:keydown=on_keydown
                    ></textarea>
                    <div class="flex items-center gap-1 pb-1">
                        <button
                            type="button"
                            class="rounded-md p-2 text-gray-400 hover:text-white hover:bg-gray-800"
                            aria-label="Attach file"
                        >
                            <Icon name=icons::PAPERCLIP class="w-4 h-4"/>
                        </button>
                        <button
                            type="submit"
                            class="rounded-lg p-2 bg-[#FFD700] text-black disabled:opacity-40 disabled:cursor-not-allowed"
                            aria-label="Send message"
                            disabled=move || !can_send()
                        >
                            <Icon name=icons::ARROW_UP class="w-4 h-4"/>
                        </button>
                    </div>
                </div>
            </form>
            <p class="py-2 text-center text-xs text-gray-500">
                "Idea0 may make mistakes. Please use with discretion."
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;

    #[test]
    fn test_copied_mark_clears_after_settle() {
        let owner = Owner::new();
        owner.set();
        let (copied, set_copied) = signal(false);
        let (done, settle) = oneshot::channel::<()>();

        block_on(async {
            let mut flash = Box::pin(flash_copied(set_copied, async move {
                let _ = settle.await;
            }));

            assert!(futures::poll!(&mut flash).is_pending());
            assert!(copied.get_untracked());

            let _ = done.send(());
            assert!(futures::poll!(&mut flash).is_ready());
            assert!(!copied.get_untracked());
        });
    }
}
