//! Not found page component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black text-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-20 h-20 mx-auto mb-6 bg-gray-900 rounded-full flex items-center justify-center">
                    <Icon name=icons::LIGHTBULB class="w-10 h-10 text-[#FFD700]" />
                </div>

                <h1 class="text-6xl font-bold mb-4">"404"</h1>
                <p class="text-gray-400 mb-8 max-w-md mx-auto">
                    "This idea doesn't exist yet."
                </p>

                <A
                    href="/"
                    attr:class="btn-base btn-primary px-6 py-3"
                >
                    "Back to Idea0"
                </A>
            </div>
        </div>
    }
}
