use leptos::prelude::*;

/// Spinner style variants
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerStyle {
    /// Ring with a rotating arc
    Ring,
    /// Three bouncing dots
    Dots,
}

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "w-4 h-4",
            SpinnerSize::Large => "w-20 h-20",
        }
    }
}

/// Loading spinner component
#[component]
pub fn Spinner(
    /// Spinner style
    #[prop(default = SpinnerStyle::Ring)]
    style: SpinnerStyle,
    /// Spinner size
    #[prop(default = SpinnerSize::Small)]
    size: SpinnerSize,
    /// Optional content drawn in the middle of the ring
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let body = match style {
        SpinnerStyle::Ring => view! {
            <div class=format!("relative {}", size.class())>
                <svg class="w-full h-full animate-spin" viewBox="0 0 50 50">
                    <circle class="text-gray-800" cx="25" cy="25" r="20" fill="none" stroke="currentColor" stroke-width="4"/>
                    <circle
                        class="text-[#FFD700]"
                        cx="25" cy="25" r="20"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="4"
                        stroke-linecap="round"
                        stroke-dasharray="90 150"
                    />
                </svg>
                <div class="absolute inset-0 flex items-center justify-center">
                    {children.map(|children| children())}
                </div>
            </div>
        }
        .into_any(),
        SpinnerStyle::Dots => view! {
            <div class="flex gap-1">
                <span class="w-2 h-2 bg-gray-400 rounded-full animate-bounce" style="animation-delay: 0ms"></span>
                <span class="w-2 h-2 bg-gray-400 rounded-full animate-bounce" style="animation-delay: 150ms"></span>
                <span class="w-2 h-2 bg-gray-400 rounded-full animate-bounce" style="animation-delay: 300ms"></span>
            </div>
        }
        .into_any(),
    };

    view! {
        <div role="status" aria-live="polite">
            {body}
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}
