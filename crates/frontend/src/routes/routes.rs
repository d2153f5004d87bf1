use crate::domain::orders::ui::{OrdersList, TrackingBoard};
use crate::domain::products::ui::ProductGallery;
use crate::domain::tree::ui::FamilyTreePage;
use crate::domain::users::ui::{CustomersList, ReferralsList};
use crate::layout::global_context::{AdminTab, DashboardContext};
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use crate::shared::components::EmbeddedPage;
use leptos::prelude::*;

/// Center pane, switching on the active tab. Components mount fresh on
/// every switch, which is also what triggers their data fetch.
#[component]
fn CenterContent() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");

    view! {
        {move || match ctx.active_tab.get() {
            AdminTab::Orders => view! { <OrdersList /> }.into_any(),
            AdminTab::Referrals => view! { <ReferralsList /> }.into_any(),
            AdminTab::Customers => view! { <CustomersList /> }.into_any(),
            AdminTab::FamilyTree => view! { <FamilyTreePage /> }.into_any(),
            AdminTab::Products => view! { <ProductGallery /> }.into_any(),
            AdminTab::Tracking => view! { <TrackingBoard /> }.into_any(),
            AdminTab::BuffaloViz => view! {
                <EmbeddedPage src="/buffalo_viz/index.html" title="Herd Visualization" />
            }.into_any(),
            AdminTab::EmiCalculator => view! {
                <EmbeddedPage src="/emi_calculator/index.html" title="EMI Calculator" />
            }.into_any(),
        }}
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <CenterContent /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <MainLayout />
    }
}
