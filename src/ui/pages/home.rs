//! Home page
//!
//! Owns the session for the page and switches from the landing view to the
//! chat view after the first submission. The side panel sits beside both.

use leptos::prelude::*;

use crate::ui::chat::ChatView;
use crate::ui::landing::LandingView;
use crate::ui::session::provide_session_context;
use crate::ui::side_panel::SidePanel;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = provide_session_context();
    let is_chat_mode = session.is_chat_mode();
    let is_panel_open = session.is_panel_open();

    // Main area narrows while the panel is open on wide screens
    let main_class = move || {
        if is_panel_open.get() {
            "relative flex h-screen flex-col items-center justify-center transition-all duration-300 w-full md:w-1/2 lg:w-3/5"
        } else {
            "relative flex h-screen flex-col items-center justify-center transition-all duration-300 w-full"
        }
    };

    view! {
        <div class="min-h-screen bg-black text-white flex">
            <main class=main_class>
                <Show when=move || is_chat_mode.get() fallback=|| view! { <LandingView /> }>
                    <ChatView />
                </Show>
            </main>
            <SidePanel />
        </div>
    }
}
