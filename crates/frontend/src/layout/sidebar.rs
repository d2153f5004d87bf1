//! Sidebar with one entry per dashboard tab.

use crate::layout::global_context::{AdminTab, DashboardContext};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");

    view! {
        <div class="app-sidebar__content">
            {AdminTab::all().into_iter().map(|tab| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.active_tab.get() == tab
                        on:click=move |_| ctx.set_active_tab(tab)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(tab.icon_name())}
                            <span>{tab.label()}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
