use leptos::prelude::*;

/// Inline stroke icon (24x24 viewBox)
#[component]
pub fn Icon(
    /// Icon name, one of the constants in [`icons`]
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon=name
        >
            {icons::paths(name)
                .iter()
                .map(|d| view! { <path d=*d /> })
                .collect_view()}
        </svg>
    }
}

/// Icon names and their path data
pub mod icons {
    pub const USER: &str = "user";
    pub const BOT: &str = "bot";
    pub const PAPERCLIP: &str = "paperclip";
    pub const STARS: &str = "stars";
    pub const SPARKLES: &str = "sparkles";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const PANEL_RIGHT_OPEN: &str = "panel-right-open";
    pub const ARROW_UP: &str = "arrow-up";
    pub const COPY: &str = "copy";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const SHARE: &str = "share";
    pub const DOWNLOAD: &str = "download";
    pub const THUMBS_UP: &str = "thumbs-up";
    pub const THUMBS_DOWN: &str = "thumbs-down";
    pub const LIGHTBULB: &str = "lightbulb";
    pub const BAR_CHART: &str = "bar-chart";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const ZAP: &str = "zap";
    pub const FILE: &str = "file";

    /// SVG path data for an icon; unknown names render nothing
    pub fn paths(name: &str) -> &'static [&'static str] {
        match name {
            USER => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M16 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
            ],
            BOT => &[
                "M12 8V4H8",
                "M6 8h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2z",
                "M2 14h2",
                "M20 14h2",
                "M15 13v2",
                "M9 13v2",
            ],
            PAPERCLIP => &[
                "m21.44 11.05-9.19 9.19a6 6 0 0 1-8.49-8.49l8.57-8.57A4 4 0 1 1 18 8.84l-8.59 8.57a2 2 0 0 1-2.83-2.83l8.49-8.48",
            ],
            STARS | SPARKLES => &[
                "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z",
                "M5 3v4",
                "M19 17v4",
                "M3 5h4",
                "M17 19h4",
            ],
            CHEVRON_RIGHT => &["m9 18 6-6-6-6"],
            CHEVRON_DOWN => &["m6 9 6 6 6-6"],
            PANEL_RIGHT_OPEN => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M15 3v18",
                "m10 15-3-3 3-3",
            ],
            ARROW_UP => &["m5 12 7-7 7 7", "M12 19V5"],
            COPY => &[
                "M10 8h10a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H10a2 2 0 0 1-2-2V10a2 2 0 0 1 2-2z",
                "M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2",
            ],
            CHECK => &["M20 6 9 17l-5-5"],
            X => &["M18 6 6 18", "m6 6 12 12"],
            SHARE => &[
                "M18 8a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
                "M6 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
                "M18 22a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
                "m8.59 13.51 6.83 3.98",
                "m15.41 6.51-6.82 3.98",
            ],
            DOWNLOAD => &[
                "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
                "m7 10 5 5 5-5",
                "M12 15V3",
            ],
            THUMBS_UP => &[
                "M7 10v12",
                "M15 5.88 14 10h5.83a2 2 0 0 1 1.92 2.56l-2.33 8A2 2 0 0 1 17.5 22H4a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2h2.76a2 2 0 0 0 1.79-1.11L12 2a3.13 3.13 0 0 1 3 3.88Z",
            ],
            THUMBS_DOWN => &[
                "M17 14V2",
                "M9 18.12 10 14H4.17a2 2 0 0 1-1.92-2.56l2.33-8A2 2 0 0 1 6.5 2H20a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2h-2.76a2 2 0 0 0-1.79 1.11L12 22a3.13 3.13 0 0 1-3-3.88Z",
            ],
            LIGHTBULB => &[
                "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5",
                "M9 18h6",
                "M10 22h4",
            ],
            BAR_CHART => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            CHECK_CIRCLE => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
                "m9 12 2 2 4-4",
            ],
            ZAP => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            FILE => &[
                "M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z",
                "M14 2v6h6",
            ],
            _ => &[],
        }
    }

}
