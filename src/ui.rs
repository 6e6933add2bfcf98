use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::views::shared::{Toast, ToastHost};
use crate::views::{ChatView, GraphView, LibraryView, QuizView, UploadView};
use dioxus::prelude::*;

const MINDPAL_CSS: Asset = asset!("/assets/mindpal.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AppTab {
    Upload,
    Chat,
    Graph,
    Library,
    Quiz,
}

#[component]
pub fn App() -> Element {
    let active_tab = use_signal(|| AppTab::Upload);
    let theme = use_signal(|| ThemeMode::Dark);
    let show_hero = use_signal(|| true);
    let toast = use_signal(|| Option::<Toast>::None);

    rsx! {
        ThemeStyles { theme }
        ToastHost { toast }
        if show_hero() {
            HeroSection { show_hero }
        } else {
            AppHeader { active_tab, theme }
            TabPanels { active_tab, toast }
        }
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: MINDPAL_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(active_tab: Signal<AppTab>, theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        div { class: "header",
            div { class: "header-content",
                div { class: "{definition.wordmark_class}",
                    span { class: "wordmark-glyph", "\u{1F9E0}" }
                    h1 { "MindPal" }
                }
                TabNavigation { active_tab }
                button {
                    class: "btn btn-ghost theme-toggle",
                    r#type: "button",
                    onclick: move |_| {
                        let next = match theme() {
                            ThemeMode::Dark => ThemeMode::Light,
                            ThemeMode::Light => ThemeMode::Dark,
                        };
                        theme.set(next);
                    },
                    match theme() {
                        ThemeMode::Dark => "Light",
                        ThemeMode::Light => "Dark",
                    }
                }
            }
        }
    }
}

#[component]
fn TabNavigation(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tabs",
            TabButton { active_tab, tab: AppTab::Upload, label: "Upload Knowledge" }
            TabButton { active_tab, tab: AppTab::Chat, label: "Chat & Explore" }
            TabButton { active_tab, tab: AppTab::Graph, label: "Knowledge Graph" }
            TabButton { active_tab, tab: AppTab::Library, label: "Library" }
            TabButton { active_tab, tab: AppTab::Quiz, label: "Quizzes" }
        }
    }
}

#[component]
fn TabButton(active_tab: Signal<AppTab>, tab: AppTab, label: &'static str) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab {
        "tab active"
    } else {
        "tab"
    };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| active_tab.set(tab),
            "{label}"
        }
    }
}

#[component]
fn TabPanels(active_tab: Signal<AppTab>, toast: Signal<Option<Toast>>) -> Element {
    rsx! {
        div { class: "tab-panels",
            TabPanel {
                active_tab,
                tab: AppTab::Upload,
                children: rsx!( UploadView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Chat,
                children: rsx!( ChatView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Graph,
                children: rsx!( GraphView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Library,
                children: rsx!( LibraryView { toast } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Quiz,
                children: rsx!( QuizView { toast } ),
            }
        }
    }
}

#[component]
fn TabPanel(active_tab: Signal<AppTab>, tab: AppTab, children: Element) -> Element {
    let is_active = active_tab() == tab;
    let class_suffix = if is_active { "active" } else { "" };
    rsx! {
        div {
            class: format_args!("tab-panel {}", class_suffix),
            aria_hidden: (!is_active).to_string(),
            {children}
        }
    }
}

#[component]
fn HeroSection(show_hero: Signal<bool>) -> Element {
    let mut show_hero = show_hero;
    rsx! {
        section { class: "hero",
            div { class: "hero-content",
                div { class: "hero-title-row",
                    span { class: "wordmark-glyph large", "\u{1F9E0}" }
                    h1 { class: "hero-title", "MindPal" }
                }
                h2 { class: "hero-subtitle", "Your AI Memory & Knowledge Twin" }
                p { class: "hero-lead",
                    "Transform your notes, PDFs, and knowledge into an interactive AI companion. "
                    "Chat with your information, discover connections, and never forget anything again."
                }
                button {
                    class: "btn btn-primary hero-cta",
                    r#type: "button",
                    onclick: move |_| show_hero.set(false),
                    "Start Building Your Knowledge"
                }
                div { class: "card-grid three-columns hero-features",
                    HeroFeature {
                        glyph: "\u{2B06}",
                        title: "Upload Anything",
                        body: "Notes, PDFs, research papers - feed your AI brain with knowledge",
                    }
                    HeroFeature {
                        glyph: "\u{1F4AC}",
                        title: "Chat & Learn",
                        body: "Ask questions, get summaries, explore connections in natural language",
                    }
                    HeroFeature {
                        glyph: "\u{1F578}",
                        title: "Knowledge Graph",
                        body: "Visualize how your ideas connect and discover hidden insights",
                    }
                }
            }
        }
    }
}

#[component]
fn HeroFeature(glyph: &'static str, title: &'static str, body: &'static str) -> Element {
    rsx! {
        div { class: "hero-feature",
            div { class: "hero-feature-glyph", "{glyph}" }
            h3 { "{title}" }
            p { class: "text-muted", "{body}" }
        }
    }
}
