pub mod global_context;
pub mod modal_service;
pub mod sidebar;
pub mod top_header;

pub use modal_service::{Modal, ModalService};

use global_context::DashboardContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send + Sync,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <Show when=move || ctx.sidebar_open.get()>
                    <div class="app-sidebar">
                        {left()}
                    </div>
                </Show>

                <div class="app-main" data-zone="center" style="flex: 1; overflow: auto;">
                    {center()}
                </div>
            </div>
        </div>
    }
}
