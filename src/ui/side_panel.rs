//! Side panel with the generated idea and its canned analysis
//!
//! Renders whatever the session hands it. Tab, feedback and accordion state
//! are local to the panel and live as long as the panel is mounted.

use leptos::logging::log;
use leptos::prelude::*;

use crate::core::insights::{
    self, Fact, HIGHLIGHTS, Highlight, MARKET_FACTS, NEXT_STEPS, REVENUE_MODELS, RESOURCES,
    ResourceKind, TECH_STACK,
};
use crate::core::{
    AnalysisSection, DocumentExporter, ExportError, Feedback, GeneratedIdea, IdeaDocument,
    PanelTab, PanelViewState, ShareService, UnavailableExport,
};
use crate::ui::common::{
    AccordionSection, Button, ButtonSize, ButtonVariant, IconButton, Spinner, SpinnerSize,
    TabItem, TabPanel, Tabs,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

#[component]
pub fn SidePanel() -> impl IntoView {
    let session = use_session_context();
    let is_open = session.is_panel_open();
    let is_loading = session.is_loading();
    let idea = session.generated_idea();

    let view_state = RwSignal::new(PanelViewState::default());
    let active_tab = Signal::derive(move || view_state.with(PanelViewState::active_tab));

    let tabs = PanelTab::ALL
        .into_iter()
        .map(|tab| TabItem::new(tab, tab.id(), tab.to_string()))
        .collect::<Vec<_>>();

    view! {
        <aside class=move || {
            if is_open.get() {
                "fixed inset-y-0 right-0 bg-black border-l border-gray-800 transition-all duration-300 flex flex-col w-full md:w-1/2 lg:w-2/5 translate-x-0"
            } else {
                "fixed inset-y-0 right-0 bg-black border-l border-gray-800 transition-all duration-300 flex flex-col translate-x-full w-0"
            }
        }>
            <Show when=move || is_open.get()>
                // Header section
                <div class="flex items-center justify-between px-6 py-4 border-b border-gray-800">
                    <div>
                        <h2 class="text-lg font-semibold flex items-center gap-2">
                            <Icon name=icons::SPARKLES class="w-5 h-5 text-[#FFD700]"/>
                            <span>"Generated Idea"</span>
                        </h2>
                        <p class="text-xs text-gray-500">"Created just now"</p>
                    </div>
                    <IconButton
                        icon=icons::X
                        title="Close panel"
                        class="text-gray-400 hover:text-white"
                        on_click=Callback::new(move |_| session.close_side_panel())
                    />
                </div>

                <Tabs
                    tabs=tabs.clone()
                    active=active_tab
                    on_change=Callback::new(move |tab| view_state.update(|s| s.select_tab(tab)))
                />

                <div class="flex-1 overflow-y-auto p-6">
                    <Show
                        when=move || !is_loading.get()
                        fallback=|| view! { <GeneratingPlaceholder /> }
                    >
                        <TabPanel value=PanelTab::Overview id=PanelTab::Overview.id() active=active_tab>
                            <OverviewTab idea=idea view_state=view_state />
                        </TabPanel>
                        <TabPanel value=PanelTab::Analysis id=PanelTab::Analysis.id() active=active_tab>
                            <AnalysisTab view_state=view_state />
                        </TabPanel>
                        <TabPanel value=PanelTab::Action id=PanelTab::Action.id() active=active_tab>
                            <NextStepsTab />
                        </TabPanel>
                    </Show>
                </div>
            </Show>
        </aside>
    }
}

#[component]
fn GeneratingPlaceholder() -> impl IntoView {
    view! {
        <div class="h-full flex flex-col items-center justify-center text-center px-6">
            <Spinner size=SpinnerSize::Large>
                <Icon name=icons::LIGHTBULB class="w-8 h-8 text-[#FFD700]"/>
            </Spinner>
            <p class="mt-6 text-lg font-medium">"Generating your idea..."</p>
            <p class="mt-2 text-sm text-gray-500 max-w-xs">
                "We're crafting a unique business concept based on your input. This may take a moment."
            </p>
        </div>
    }
}

/// Log an export failure and surface it to the user
fn report_unavailable(error: ExportError) {
    log!("{}", error);
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&error.to_string());
        }
    }
}

fn document_for(idea: Option<GeneratedIdea>) -> Option<IdeaDocument> {
    idea.map(|idea| IdeaDocument::from_idea(&idea, chrono::Utc::now()))
}

#[component]
fn OverviewTab(
    idea: Signal<Option<GeneratedIdea>>,
    view_state: RwSignal<PanelViewState>,
) -> impl IntoView {
    let feedback = Signal::derive(move || view_state.with(PanelViewState::feedback));

    let on_share = Callback::new(move |_| {
        log!("Sharing idea");
        let document = document_for(idea.get_untracked());
        if let Err(e) = UnavailableExport.share(document.as_ref()) {
            report_unavailable(e);
        }
    });

    let on_download = Callback::new(move |_| {
        log!("Downloading PDF");
        let document = document_for(idea.get_untracked());
        if let Err(e) = UnavailableExport.export_pdf(document.as_ref()) {
            report_unavailable(e);
        }
    });

    let feedback_class = move |choice: Feedback, selected: &'static str| {
        Signal::derive(move || {
            if feedback.get() == Some(choice) {
                format!("rounded-lg h-9 {selected}")
            } else {
                "rounded-lg h-9 border-gray-800 hover:border-gray-700".to_string()
            }
        })
    };

    view! {
        <div class="rounded-xl border border-gray-800 p-5">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-lg font-semibold">"Your Next Big Idea"</h3>
                <div class="flex items-center gap-1">
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Small
                        icon=icons::SHARE
                        title="Share idea"
                        on_click=on_share
                    />
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Small
                        icon=icons::DOWNLOAD
                        title="Download PDF"
                        on_click=on_download
                    />
                </div>
            </div>
            <div class="text-sm text-gray-300 leading-relaxed whitespace-pre-line">
                {move || idea.get().map(|idea| idea.content).unwrap_or_default()}
            </div>
            <div class="mt-6 pt-4 border-t border-gray-800 flex items-center justify-between">
                <div class="text-sm text-gray-400">"Was this idea helpful?"</div>
                <div class="flex items-center gap-2">
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Small
                        icon=icons::THUMBS_UP
                        class=feedback_class(Feedback::Like, "bg-green-900/30 border-green-800 text-green-400")
                        on_click=Callback::new(move |_| view_state.update(|s| s.give_feedback(Feedback::Like)))
                    >
                        <span>"Yes"</span>
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Small
                        icon=icons::THUMBS_DOWN
                        class=feedback_class(Feedback::Dislike, "bg-red-900/30 border-red-800 text-red-400")
                        on_click=Callback::new(move |_| view_state.update(|s| s.give_feedback(Feedback::Dislike)))
                    >
                        <span>"No"</span>
                    </Button>
                </div>
            </div>
        </div>

        <div class="rounded-xl border border-gray-800 p-5">
            <h3 class="text-lg font-semibold mb-4">"Key Highlights"</h3>
            <div class="space-y-4">
                {HIGHLIGHTS.iter().map(|highlight| view! { <HighlightRow highlight=*highlight /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn HighlightRow(highlight: Highlight) -> impl IntoView {
    view! {
        <div>
            <div class="flex justify-between text-sm mb-1.5">
                <span class="text-gray-400">{highlight.label}</span>
                <span class="font-medium">{format!("{}%", highlight.percent)}</span>
            </div>
            <ProgressBar value=highlight.bar_width() />
        </div>
    }
}

#[component]
fn ProgressBar(value: u8) -> impl IntoView {
    view! {
        <div class="w-full h-2 bg-gray-800 rounded-full overflow-hidden">
            <div
                class="h-full bg-[#FFD700] rounded-full transition-all duration-500"
                style:width=format!("{value}%")
            ></div>
        </div>
    }
}

#[component]
fn AnalysisTab(view_state: RwSignal<PanelViewState>) -> impl IntoView {
    let expanded = move |section: AnalysisSection| {
        Signal::derive(move || view_state.with(|s| s.is_expanded(section)))
    };
    let toggle = move |section: AnalysisSection| {
        Callback::new(move |_| {
            view_state.update(|s| {
                s.toggle_section(section);
            })
        })
    };

    view! {
        <AccordionSection
            title=AnalysisSection::Market.title()
            icon=icons::BAR_CHART
            expanded=expanded(AnalysisSection::Market)
            on_toggle=toggle(AnalysisSection::Market)
        >
            <p class="text-sm text-gray-400 mb-4">{insights::MARKET_SUMMARY}</p>
            <div class="grid grid-cols-2 gap-3">
                {MARKET_FACTS.iter().map(|fact| view! { <FactCard fact=*fact /> }).collect_view()}
            </div>
        </AccordionSection>

        <AccordionSection
            title=AnalysisSection::Revenue.title()
            icon=icons::ZAP
            expanded=expanded(AnalysisSection::Revenue)
            on_toggle=toggle(AnalysisSection::Revenue)
        >
            <p class="text-sm text-gray-400 mb-4">{insights::REVENUE_SUMMARY}</p>
            <div class="space-y-3">
                {REVENUE_MODELS.iter().map(|model| view! { <RevenueModelRow model=*model /> }).collect_view()}
            </div>
        </AccordionSection>

        <AccordionSection
            title=AnalysisSection::Technical.title()
            icon=icons::LIGHTBULB
            expanded=expanded(AnalysisSection::Technical)
            on_toggle=toggle(AnalysisSection::Technical)
        >
            <p class="text-sm text-gray-400 mb-4">{insights::TECHNICAL_SUMMARY}</p>
            <h4 class="text-sm font-medium mb-2">"Technology Stack"</h4>
            <div class="flex flex-wrap gap-2 mb-4">
                {TECH_STACK.iter().map(|tech| view! {
                    <span class="px-2.5 py-1 rounded-md bg-gray-900 text-xs text-gray-300">{*tech}</span>
                }).collect_view()}
            </div>
            <p class="text-sm text-gray-400">{insights::MVP_TIMELINE}</p>
        </AccordionSection>
    }
}

#[component]
fn FactCard(fact: Fact) -> impl IntoView {
    view! {
        <div class="rounded-lg bg-gray-900/60 p-3">
            <div class="text-xs text-gray-500 mb-1">{fact.title}</div>
            <div class="text-sm font-medium">{fact.detail}</div>
        </div>
    }
}

#[component]
fn RevenueModelRow(model: Fact) -> impl IntoView {
    view! {
        <div class="flex items-start gap-3">
            <div class="mt-0.5 text-green-400">
                <Icon name=icons::CHECK_CIRCLE class="w-4 h-4"/>
            </div>
            <div>
                <div class="text-sm font-medium">{model.title}</div>
                <div class="text-xs text-gray-500">{model.detail}</div>
            </div>
        </div>
    }
}

#[component]
fn NextStepsTab() -> impl IntoView {
    view! {
        <div class="rounded-xl border border-gray-800 p-5">
            <h3 class="text-lg font-semibold mb-4 flex items-center gap-2">
                <Icon name=icons::CHECK_CIRCLE class="w-5 h-5 text-[#FFD700]"/>
                <span>"Immediate Next Steps"</span>
            </h3>
            <div class="space-y-4">
                {NEXT_STEPS.iter().map(|step| view! {
                    <div class="flex gap-3">
                        <div class="w-6 h-6 rounded-full bg-[#FFD700] text-black text-xs font-bold flex items-center justify-center shrink-0">
                            {step.number}
                        </div>
                        <div>
                            <h4 class="text-sm font-medium mb-1">{step.title}</h4>
                            <p class="text-sm text-gray-400">{step.description}</p>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>

        <div class="rounded-xl border border-gray-800 p-5">
            <h3 class="text-lg font-semibold mb-4">"Resources"</h3>
            <div class="space-y-2">
                {RESOURCES.iter().map(|resource| {
                    let trailing = match resource.kind {
                        ResourceKind::Download => icons::DOWNLOAD,
                        ResourceKind::Link => icons::CHEVRON_RIGHT,
                    };
                    view! {
                        <a href="#" class="flex items-center justify-between rounded-lg p-3 hover:bg-gray-900 transition-colors">
                            <div class="flex items-center gap-3">
                                <div class="w-8 h-8 rounded-lg bg-gray-900 flex items-center justify-center text-gray-400">
                                    <Icon name=icons::FILE class="w-4 h-4"/>
                                </div>
                                <div>
                                    <div class="text-sm font-medium">{resource.title}</div>
                                    <div class="text-xs text-gray-500">{resource.meta}</div>
                                </div>
                            </div>
                            <Icon name=trailing class="w-4 h-4 text-gray-500"/>
                        </a>
                    }
                }).collect_view()}
            </div>
        </div>

        <Button class="w-full">
            "Get Started with Your Idea"
        </Button>
    }
}
