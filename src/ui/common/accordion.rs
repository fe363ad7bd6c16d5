use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Collapsible section with an icon badge and rotating chevron.
///
/// Expansion state is owned by the caller so several sections can live in
/// one state struct.
#[component]
pub fn AccordionSection(
    title: &'static str,
    /// Icon shown in the header badge
    icon: &'static str,
    #[prop(into)]
    expanded: Signal<bool>,
    on_toggle: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="border border-gray-800 rounded-xl overflow-hidden">
            <button
                type="button"
                class="w-full flex items-center justify-between p-4 hover:bg-gray-900/50 transition-colors"
                on:click=move |_| on_toggle.run(())
                aria-expanded=move || expanded.get().to_string()
            >
                <div class="flex items-center gap-3">
                    <div class="w-8 h-8 rounded-lg bg-gray-900 flex items-center justify-center text-[#FFD700]">
                        <Icon name=icon class="w-4 h-4"/>
                    </div>
                    <h3 class="font-medium text-white">{title}</h3>
                </div>
                <span class=move || {
                    if expanded.get() {
                        "text-gray-400 transition-transform duration-200 rotate-90"
                    } else {
                        "text-gray-400 transition-transform duration-200"
                    }
                }>
                    <Icon name=icons::CHEVRON_RIGHT class="h-5 w-5"/>
                </span>
            </button>
            <Show when=move || expanded.get()>
                <div class="px-4 pb-4">{children()}</div>
            </Show>
        </div>
    }
}
