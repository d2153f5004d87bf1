use crate::layout::global_context::DashboardContext;
use crate::shared::api;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Top bar: sidebar toggle, title, backend health dot and the admin
/// identity popover.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");

    // None = not probed yet
    let (healthy, set_healthy) = signal(Option::<bool>::None);

    // Poll the health endpoint once a minute for the indicator.
    wasm_bindgen_futures::spawn_local(async move {
        loop {
            let ok = api::health_check().await.is_ok();
            if !ok {
                log::warn!("health check failed");
            }
            set_healthy.set(Some(ok));
            gloo_timers::future::TimeoutFuture::new(60_000).await;
        }
    });

    let health_style = move || match healthy.get() {
        Some(true) => "color: #10b981;",
        Some(false) => "color: #dc2626;",
        None => "color: #9ca3af;",
    };

    let health_title = move || match healthy.get() {
        Some(true) => "Backend reachable",
        Some(false) => "Backend unreachable",
        None => "Checking backend...",
    };

    view! {
        <header class="app-top-header">
            <button
                class="app-top-header__burger"
                on:click=move |_| ctx.toggle_sidebar()
                title="Toggle sidebar"
            >
                {icon("menu")}
            </button>

            <span class="app-top-header__title">{"Markwave Admin"}</span>

            <div class="app-top-header__right">
                <span style=health_style title=health_title>
                    {icon("activity")}
                </span>
                <button
                    class="app-top-header__admin"
                    on:click=move |_| {
                        let show = ctx.show_admin_details.get_untracked();
                        ctx.set_show_admin_details(!show);
                    }
                >
                    {icon("users")}
                </button>
            </div>

            <Show when=move || ctx.show_admin_details.get()>
                <div class="app-top-header__admin-details">
                    <div>{"Admin mobile: "}{api::admin_mobile()}</div>
                </div>
            </Show>
        </header>
    }
}
