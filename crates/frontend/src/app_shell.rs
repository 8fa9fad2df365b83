//! Application shell: top navigation plus the three content sections.
//!
//! All sections stay mounted; the active one is toggled by class so the chat
//! transcript survives navigation. Section-specific enter/leave behavior
//! (clearing the upload selection, refreshing documents, focusing the chat
//! input) lives in effects inside each section component.

use crate::domain::chat::ChatSection;
use crate::domain::documents::list::DocumentsSection;
use crate::domain::documents::upload::UploadSection;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Upload,
    Documents,
    Chatbot,
}

/// In-memory section toggle. Navigation is not URL-driven by design.
#[derive(Clone, Copy)]
pub struct SectionRouter {
    pub active: RwSignal<Section>,
}

impl SectionRouter {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::Upload),
        }
    }

    pub fn show(&self, section: Section) {
        self.active.set(section);
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active.get() == section
    }
}

impl Default for SectionRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let router = use_context::<SectionRouter>().expect("SectionRouter not found in context");

    view! {
        <div class="container">
            <header class="header">
                <h1 class="header__title">"Document Manager & Chatbot"</h1>
                <nav class="nav">
                    <button
                        class="nav__button"
                        class:nav__button--active=move || router.is_active(Section::Upload)
                        on:click=move |_| router.show(Section::Upload)
                    >
                        {icon("upload")}
                        " Upload"
                    </button>
                    <button
                        class="nav__button"
                        class:nav__button--active=move || router.is_active(Section::Documents)
                        on:click=move |_| router.show(Section::Documents)
                    >
                        {icon("documents")}
                        " Documents"
                    </button>
                    <button
                        class="nav__button"
                        class:nav__button--active=move || router.is_active(Section::Chatbot)
                        on:click=move |_| router.show(Section::Chatbot)
                    >
                        {icon("chat")}
                        " Chatbot"
                    </button>
                </nav>
            </header>

            <main class="main">
                <section
                    class="section"
                    class:section--active=move || router.is_active(Section::Upload)
                >
                    <UploadSection />
                </section>
                <section
                    class="section"
                    class:section--active=move || router.is_active(Section::Documents)
                >
                    <DocumentsSection />
                </section>
                <section
                    class="section"
                    class:section--active=move || router.is_active(Section::Chatbot)
                >
                    <ChatSection />
                </section>
            </main>
        </div>
    }
}
