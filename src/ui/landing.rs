//! Landing view shown until the first submission
//!
//! Animated headline plus the single prompt box that starts the chat.

use leptos::logging::log;
use leptos::prelude::*;

use crate::core::input::{can_enhance, can_generate, generate_label};
use crate::core::Typewriter;
use crate::ui::common::{Button, ButtonVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

#[component]
pub fn LandingView() -> impl IntoView {
    let session = use_session_context();
    let input = session.input();
    let is_loading = session.is_loading();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.submit();
    };

    view! {
        <div class="w-full max-w-3xl px-4">
            <h1 class="text-center text-[29px] sm:text-[32px] md:text-[46px] font-semibold tracking-tighter mb-12 flex flex-wrap justify-center items-center gap-x-2">
                <span class="mr-1">"What's your next"</span>
                <TypewriterHeadline />
                <span>"idea?"</span>
            </h1>

            <form on:submit=on_submit>
                <div class="rounded-2xl border border-gray-800 bg-black p-3 shadow-lg">
                    <div class="flex items-center gap-2 px-2">
                        <Icon name=icons::STARS class="w-5 h-5 text-[#FFD700]"/>
                        <input
                            type="text"
                            class="flex-1 outline-none text-white placeholder-gray-500 py-2 px-1 bg-black"
                            placeholder="Brainstorm with Idea0..."
                            prop:value=move || input.get()
                            on:input=move |e| session.set_input(event_target_value(&e))
                        />
                    </div>
                    <div class="flex items-center justify-between mt-3">
                        <div class="flex items-center gap-1">
                            <Button
                                variant=ButtonVariant::Ghost
                                icon=icons::SPARKLES
                                title="Enhance prompt"
                                disabled=Signal::derive(move || !can_enhance(&input.get()))
                                on_click=Callback::new(move |_| log!("enhancing prompt"))
                            />
                            <Button
                                variant=ButtonVariant::Ghost
                                icon=icons::PAPERCLIP
                                title="Attach file"
                            />
                        </div>
                        <Button
                            button_type="submit"
                            disabled=Signal::derive(move || !can_generate(&input.get(), is_loading.get()))
                        >
                            {move || generate_label(is_loading.get())}
                        </Button>
                    </div>
                </div>
            </form>
        </div>
    }
}

/// Headline fragment that types and deletes the money phrases in a loop
#[component]
fn TypewriterHeadline() -> impl IntoView {
    // Server and client both start on the first phrase held in full, so the
    // hydrated text matches the rendered one
    let mut writer = Typewriter::headline();
    let mut initial = writer.advance();
    while initial.cursor_visible {
        initial = writer.advance();
    }
    let first_delay_ms = initial.delay_ms;
    let (frame, set_frame) = signal(initial);

    #[cfg(not(feature = "ssr"))]
    {
        use futures::future::{AbortHandle, Abortable};
        use gloo_timers::future::TimeoutFuture;

        let (handle, registration) = AbortHandle::new_pair();
        let animation = Abortable::new(
            async move {
                TimeoutFuture::new(first_delay_ms).await;
                loop {
                    let next = writer.advance();
                    let delay_ms = next.delay_ms;
                    set_frame.set(next);
                    TimeoutFuture::new(delay_ms).await;
                }
            },
            registration,
        );

        leptos::task::spawn_local(async move {
            let _ = animation.await;
        });
        on_cleanup(move || handle.abort());
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (writer, set_frame, first_delay_ms);
    }

    view! {
        <span class="text-[#FFD700] inline-flex items-center min-w-[4ch]">
            {move || frame.get().text}
            <span
                class="typewriter-cursor"
                style:visibility=move || if frame.get().cursor_visible { "visible" } else { "hidden" }
            >
                "|"
            </span>
        </span>
    }
}
