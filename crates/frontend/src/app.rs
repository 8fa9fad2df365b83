use crate::app_shell::{AppShell, SectionRouter};
use crate::domain::documents::details::view_model::DocumentDetailsVm;
use crate::domain::documents::list::view_model::DocumentsVm;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Services shared across sections via context.
    provide_context(ToastService::new());
    provide_context(SectionRouter::new());
    provide_context(DocumentsVm::new());
    provide_context(DocumentDetailsVm::new());

    view! {
        <AppShell />
        <ToastHost />
    }
}
