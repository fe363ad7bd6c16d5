use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Gold call-to-action
    Primary,
    Ghost,
    Outline,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    /// Square, icon-only
    Icon,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Icon => "btn-icon",
        }
    }
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// HTML button type; `submit` lets the enclosing form handle the click
    #[prop(default = "button")]
    button_type: &'static str,
    /// Whether button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Optional title/tooltip
    #[prop(optional)]
    title: Option<&'static str>,
    /// Optional icon name to show before the content
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Additional CSS classes, recomputed reactively
    #[prop(into, default = Signal::stored(String::new()))]
    class: Signal<String>,
    /// Button content (text or elements)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let base_classes = format!("btn-base {} {}", variant.class(), size.class());
    let full_classes = move || {
        let extra = class.get();
        if extra.is_empty() {
            base_classes.clone()
        } else {
            format!("{} {}", base_classes, extra)
        }
    };

    view! {
        <button
            type=button_type
            class=full_classes
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(())
                }
            }
            disabled=move || disabled.get()
            title=title
            aria-label=title
        >
            {icon.map(|icon_name| view! { <Icon name=icon_name class="w-4 h-4"/> })}
            {children.map(|children| children())}
        </button>
    }
}

/// Icon-only button component
#[component]
pub fn IconButton(
    /// Icon name to display
    icon: &'static str,
    /// Click handler
    on_click: Callback<()>,
    /// Title/tooltip, also used as the accessible label
    title: &'static str,
    /// Additional CSS classes, recomputed reactively
    #[prop(into, default = Signal::stored(String::new()))]
    class: Signal<String>,
) -> impl IntoView {
    view! {
        <Button
            variant=ButtonVariant::Ghost
            size=ButtonSize::Icon
            on_click=on_click
            title=title
            icon=icon
            class=class
        />
    }
}
