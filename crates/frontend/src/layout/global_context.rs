use contracts::domain::order::OrderUnit;
use contracts::domain::user::UserRecord;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Orders,
    Referrals,
    Customers,
    FamilyTree,
    Products,
    Tracking,
    BuffaloViz,
    EmiCalculator,
}

impl AdminTab {
    pub fn key(&self) -> &'static str {
        match self {
            AdminTab::Orders => "orders",
            AdminTab::Referrals => "referrals",
            AdminTab::Customers => "customers",
            AdminTab::FamilyTree => "tree",
            AdminTab::Products => "products",
            AdminTab::Tracking => "tracking",
            AdminTab::BuffaloViz => "viz",
            AdminTab::EmiCalculator => "emi",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Orders => "Orders",
            AdminTab::Referrals => "Referrals",
            AdminTab::Customers => "Verified Users",
            AdminTab::FamilyTree => "Buffalo Tree",
            AdminTab::Products => "Products",
            AdminTab::Tracking => "Order Tracking",
            AdminTab::BuffaloViz => "Herd Visualization",
            AdminTab::EmiCalculator => "EMI Calculator",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            AdminTab::Orders => "orders",
            AdminTab::Referrals => "user-plus",
            AdminTab::Customers => "users",
            AdminTab::FamilyTree => "tree",
            AdminTab::Products => "products",
            AdminTab::Tracking => "truck",
            AdminTab::BuffaloViz => "chart",
            AdminTab::EmiCalculator => "calculator",
        }
    }

    pub fn all() -> Vec<AdminTab> {
        vec![
            AdminTab::Orders,
            AdminTab::Referrals,
            AdminTab::Customers,
            AdminTab::FamilyTree,
            AdminTab::Products,
            AdminTab::Tracking,
            AdminTab::BuffaloViz,
            AdminTab::EmiCalculator,
        ]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        AdminTab::all().into_iter().find(|tab| tab.key() == key)
    }
}

/// Global UI state: active tab, sidebar, and the modal stack.
///
/// Presentation code never writes the signals directly; every mutation goes
/// through a named transition method so each state slice has a single writer.
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub active_tab: RwSignal<AdminTab>,
    pub sidebar_open: RwSignal<bool>,
    pub show_admin_details: RwSignal<bool>,

    // modal payloads; the payload-less create-referral modal goes through
    // the shared ModalService instead
    pub edit_referral: RwSignal<Option<UserRecord>>,
    pub proof: RwSignal<Option<OrderUnit>>,
    pub rejection_unit: RwSignal<Option<String>>,
}

impl DashboardContext {
    pub fn new() -> Self {
        // Sidebar starts open on desktop-sized viewports only.
        let wide = window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .map(|w| w >= 768.0)
            .unwrap_or(true);

        Self {
            active_tab: RwSignal::new(AdminTab::Orders),
            sidebar_open: RwSignal::new(wide),
            show_admin_details: RwSignal::new(false),
            edit_referral: RwSignal::new(None),
            proof: RwSignal::new(None),
            rejection_unit: RwSignal::new(None),
        }
    }

    /// Restore the active tab from `?tab=` and mirror changes back into the
    /// URL via `history.replace_state`.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(tab) = params.get("tab").and_then(|k| AdminTab::from_key(k)) {
            self.active_tab.set(tab);
        }

        let this = *self;
        Effect::new(move |_| {
            let key = this.active_tab.get().key();
            let query_string =
                serde_qs::to_string(&HashMap::from([("tab".to_string(), key.to_string())]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn set_active_tab(&self, tab: AdminTab) {
        log::debug!("activate tab '{}'", tab.key());
        self.active_tab.set(tab);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    pub fn set_show_admin_details(&self, show: bool) {
        self.show_admin_details.set(show);
    }

    pub fn open_edit_referral(&self, user: UserRecord) {
        self.edit_referral.set(Some(user));
    }

    pub fn close_edit_referral(&self) {
        self.edit_referral.set(None);
    }

    pub fn open_proof(&self, order: OrderUnit) {
        self.proof.set(Some(order));
    }

    pub fn close_proof(&self) {
        self.proof.set(None);
    }

    /// First step of rejection: remember the unit and ask for confirmation.
    pub fn request_rejection(&self, unit_id: String) {
        self.rejection_unit.set(Some(unit_id));
    }

    pub fn clear_rejection(&self) {
        self.rejection_unit.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tabs_present() {
        let tabs = AdminTab::all();
        assert_eq!(tabs.len(), 8);
        assert!(tabs.contains(&AdminTab::BuffaloViz));
        assert!(tabs.contains(&AdminTab::EmiCalculator));
    }

    #[test]
    fn test_tab_keys_round_trip() {
        for tab in AdminTab::all() {
            assert_eq!(AdminTab::from_key(tab.key()), Some(tab));
        }
        assert_eq!(AdminTab::from_key("bogus"), None);
    }
}
