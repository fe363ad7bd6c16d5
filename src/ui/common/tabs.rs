use leptos::prelude::*;

/// Tab item definition
#[derive(Clone, PartialEq)]
pub struct TabItem<T> {
    /// Value reported through `on_change`
    pub value: T,
    /// Unique identifier used for DOM ids
    pub id: &'static str,
    /// Display label for the tab
    pub label: String,
}

impl<T> TabItem<T> {
    /// Create a new tab item
    pub fn new(value: T, id: &'static str, label: impl Into<String>) -> Self {
        Self {
            value,
            id,
            label: label.into(),
        }
    }
}

/// Underlined tab strip; the active tab is highlighted in the accent colour
#[component]
pub fn Tabs<T>(
    /// List of tab items
    tabs: Vec<TabItem<T>>,
    /// Currently active tab
    #[prop(into)]
    active: Signal<T>,
    /// Callback when tab is changed
    on_change: Callback<T>,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class="flex border-b border-gray-800" role="tablist">
            {tabs.into_iter().map(|tab| {
                let value = tab.value;
                let is_active = Signal::derive(move || active.get() == value);

                let tab_class = move || {
                    if is_active.get() {
                        "tab-item tab-active"
                    } else {
                        "tab-item"
                    }
                };

                view! {
                    <button
                        type="button"
                        class=tab_class
                        on:click=move |_| on_change.run(value)
                        role="tab"
                        id=format!("tab-{}", tab.id)
                        aria-selected=move || is_active.get().to_string()
                        aria-controls=format!("panel-{}", tab.id)
                    >
                        {tab.label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Tab panel content component; only mounted while its tab is active
#[component]
pub fn TabPanel<T>(
    /// Tab this panel belongs to
    value: T,
    /// Tab identifier for aria wiring
    id: &'static str,
    /// Currently active tab
    #[prop(into)]
    active: Signal<T>,
    /// Panel content
    children: ChildrenFn,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <Show when=move || active.get() == value>
            <div
                class="space-y-6"
                role="tabpanel"
                id=format!("panel-{}", id)
                aria-labelledby=format!("tab-{}", id)
            >
                {children()}
            </div>
        </Show>
    }
}
