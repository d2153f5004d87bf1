use crate::domain::orders::api::{distinct_orders, fetch_pending_orders};
use crate::domain::orders::tracking::{
    advance_label, stage_name, TrackingStore, FINAL_STAGE, FIRST_STAGE, UNITS_PER_ORDER,
};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Shipment tracking tab: pick an order and one of its two buffaloes, see
/// the eight-stage timeline, advance it stage by stage.
///
/// Progress is held in a component signal for the session only; it resets
/// on reload. That is a product decision, not an oversight.
#[component]
pub fn TrackingBoard() -> impl IntoView {
    // (order id, investor) pairs; one entry per order, not per unit
    let (orders, set_orders) = signal(Vec::<(String, String)>::new());
    let (error, set_error) = signal(Option::<String>::None);

    let (selected_order, set_selected_order) = signal(Option::<String>::None);
    let (selected_unit, set_selected_unit) = signal(1u8);

    let store = RwSignal::new(TrackingStore::new());

    leptos::task::spawn_local(async move {
        match fetch_pending_orders().await {
            Ok(list) => {
                let orders = distinct_orders(&list);
                if let Some((first_id, _)) = orders.first() {
                    set_selected_order.set(Some(first_id.clone()));
                }
                set_orders.set(orders);
            }
            Err(e) => {
                log::error!("failed to fetch orders for tracking: {}", e);
                set_orders.set(Vec::new());
                set_error.set(Some(e));
            }
        }
    });

    // Reactive read of the selected timeline; synthesizes the stage-1
    // default for keys never advanced.
    let entry = move || {
        selected_order
            .get()
            .map(|order_id| store.with(|s| s.get_or_create(&order_id, selected_unit.get())))
    };

    let advance = move |_| {
        let Some(order_id) = selected_order.get_untracked() else {
            return;
        };
        let unit = selected_unit.get_untracked();
        let current = store.with_untracked(|s| s.get_or_create(&order_id, unit).current_stage);
        if current >= FINAL_STAGE {
            return;
        }
        store.update(|s| s.advance(&order_id, unit, current + 1));
    };

    view! {
        <div style="padding: 1rem;">
            <h2>{"Order Tracking"}</h2>

            {move || error.get().map(|e| view! {
                <div style="padding: 10px; color: #dc2626;">{"Failed to load orders: "}{e}</div>
            })}

            <div style="display: flex; gap: 10px; align-items: center; margin-bottom: 1rem; flex-wrap: wrap;">
                <select
                    style="padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                    on:change=move |ev| {
                        let val = event_target_value(&ev);
                        set_selected_order.set(if val.is_empty() { None } else { Some(val) });
                    }
                >
                    <option value="">{"Select order..."}</option>
                    {move || orders.get().into_iter().map(|(order_id, investor)| {
                        let is_selected = selected_order.get() == Some(order_id.clone());
                        view! {
                            <option value=order_id.clone() selected=is_selected>
                                {format!("{} — {}", order_id, investor)}
                            </option>
                        }
                    }).collect_view()}
                </select>

                {(1..=UNITS_PER_ORDER).map(|unit| view! {
                    <button
                        class="button"
                        class:button--primary=move || selected_unit.get() == unit
                        class:button--secondary=move || selected_unit.get() != unit
                        on:click=move |_| set_selected_unit.set(unit)
                    >
                        {format!("Buffalo {}", unit)}
                    </button>
                }).collect_view()}
            </div>

            {move || match entry() {
                None => view! {
                    <div style="color: #888; padding: 2rem;">
                        {"Pick an order to see its shipment timeline. Progress is kept for this session only and resets on reload."}
                    </div>
                }.into_any(),
                Some(entry) => {
                    let current = entry.current_stage;
                    view! {
                        <div style="max-width: 520px;">
                            {(FIRST_STAGE..=FINAL_STAGE).map(|stage| {
                                let reached = stage <= current;
                                let stamp = entry.history.get(&stage).cloned();
                                view! {
                                    <div style="display: flex; gap: 12px; align-items: flex-start; padding: 6px 0;">
                                        <div style=format!(
                                            "width: 24px; height: 24px; border-radius: 50%; display: flex; align-items: center; justify-content: center; color: white; font-size: 12px; flex-shrink: 0; background: {};",
                                            if reached { "#10b981" } else { "#d1d5db" }
                                        )>
                                            {if reached { icon("check") } else { view! { <span>{stage.to_string()}</span> }.into_any() }}
                                        </div>
                                        <div>
                                            <div style=format!(
                                                "font-weight: {}; color: {};",
                                                if stage == current { "600" } else { "400" },
                                                if reached { "#111" } else { "#9ca3af" }
                                            )>
                                                {stage_name(stage).unwrap_or("?")}
                                            </div>
                                            {stamp.map(|s| view! {
                                                <div style="font-size: 12px; color: #6b7280;">
                                                    {s.date}{" "}{s.time}
                                                </div>
                                            })}
                                        </div>
                                    </div>
                                }
                            }).collect_view()}

                            {advance_label(current).map(|label| view! {
                                <button
                                    class="button button--primary"
                                    style="margin-top: 12px;"
                                    on:click=advance
                                >
                                    {label}
                                </button>
                            })}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
