use crate::layout::global_context::DashboardContext;
use crate::layout::ModalService;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the DashboardContext store to the whole app via context.
    provide_context(DashboardContext::new());

    // Provide ModalService for centralized modal management
    provide_context(ModalService::new());

    view! {
        <AppRoutes />
    }
}
