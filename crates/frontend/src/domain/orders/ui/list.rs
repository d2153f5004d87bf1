use crate::domain::orders::api::fetch_pending_orders;
use crate::domain::orders::filters::{OrderFilters, OrderSummary, PaymentFilter, StatusFilter};
use crate::layout::global_context::DashboardContext;
use crate::shared::api::{self, endpoints};
use crate::shared::components::number_format::format_rupees;
use crate::shared::components::stat_card::{CardAccent, StatCard};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::order::{OrderUnit, UnitActionResponse};
use contracts::enums::{OrderStatus, PaymentMethod, StatusClass};
use leptos::prelude::*;

fn alert(message: &str) {
    web_sys::window().and_then(|w| w.alert_with_message(message).ok());
}

fn status_badge(status: OrderStatus) -> AnyView {
    let color = match status.class() {
        StatusClass::Pending => "#f59e0b",
        StatusClass::Approved => "#10b981",
        StatusClass::Rejected => "#dc2626",
        StatusClass::Unknown => "#6b7280",
    };
    view! {
        <span style=format!(
            "background: {}; color: white; padding: 2px 8px; border-radius: 4px; font-size: 12px; font-weight: 500; white-space: nowrap;",
            color
        )>
            {status.display_name().to_string()}
        </span>
    }
    .into_any()
}

/// Pending-orders tab: summary cards, filter toolbar, table with
/// approve/reject actions, proof viewer and the rejection confirmation.
#[component]
pub fn OrdersList() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");

    let (all_orders, set_all_orders) = signal(Vec::<OrderUnit>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    // Filters
    let (filter_text, set_filter_text) = signal(String::new());
    let (payment_filter, set_payment_filter) = signal(PaymentFilter::All);
    let (status_filter, set_status_filter) = signal(StatusFilter::All);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        leptos::task::spawn_local(async move {
            match fetch_pending_orders().await {
                Ok(orders) => {
                    set_all_orders.set(orders);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    log::error!("failed to fetch pending orders: {}", e);
                    // Do not leave stale data on screen after a failed fetch
                    set_all_orders.set(Vec::new());
                    set_error.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    // Load on mount
    leptos::task::spawn_local(async move {
        load();
    });

    // Aggregates run over the unfiltered list
    let summary = Memo::new(move |_| OrderSummary::from_orders(&all_orders.get()));

    let filtered_orders = move || {
        let filters = OrderFilters {
            query: filter_text.get(),
            payment: payment_filter.get(),
            status: status_filter.get(),
        };
        filters.apply(&all_orders.get())
    };

    let approve = move |unit_id: String| {
        leptos::task::spawn_local(async move {
            match api::post_empty::<UnitActionResponse>(&endpoints::approve_unit(&unit_id)).await {
                Ok(_) => load(),
                Err(e) => {
                    log::error!("approve failed for unit {}: {}", unit_id, e);
                    alert("Error approving unit. Please try again.");
                }
            }
        });
    };

    let confirm_reject = move |unit_id: String| {
        leptos::task::spawn_local(async move {
            match api::post_empty::<UnitActionResponse>(&endpoints::reject_unit(&unit_id)).await {
                Ok(_) => {
                    ctx.clear_rejection();
                    load();
                }
                Err(e) => {
                    log::error!("reject failed for unit {}: {}", unit_id, e);
                    ctx.clear_rejection();
                    alert("Error rejecting unit. Please try again.");
                }
            }
        });
    };

    view! {
        <div style="display: flex; flex-direction: column; height: calc(100vh - 60px); overflow: auto; padding: 10px;">
            <h2>{"Orders"}</h2>

            // Summary cards
            <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 10px; margin-bottom: 10px;">
                <StatCard
                    label="Pending".to_string()
                    icon_name="orders".to_string()
                    value=Signal::derive(move || summary.get().pending.to_string())
                    accent=CardAccent::Warning
                />
                <StatCard
                    label="Approved".to_string()
                    icon_name="check".to_string()
                    value=Signal::derive(move || summary.get().approved.to_string())
                    accent=CardAccent::Success
                />
                <StatCard
                    label="Rejected".to_string()
                    icon_name="x".to_string()
                    value=Signal::derive(move || summary.get().rejected.to_string())
                    accent=CardAccent::Error
                />
                <StatCard
                    label="Total Orders".to_string()
                    icon_name="orders".to_string()
                    value=Signal::derive(move || summary.get().total.to_string())
                />
                <StatCard
                    label="Total Units".to_string()
                    icon_name="products".to_string()
                    value=Signal::derive(move || summary.get().total_units.to_string())
                />
                <StatCard
                    label="Total Amount".to_string()
                    icon_name="orders".to_string()
                    value=Signal::derive(move || format_rupees(summary.get().total_amount))
                />
            </div>

            // Toolbar
            <div style="display: flex; gap: 10px; padding: 10px; background: #f5f5f5; border-bottom: 1px solid #ddd; align-items: center; flex-wrap: wrap;">
                <SearchInput
                    value=filter_text
                    on_change=Callback::new(move |val| set_filter_text.set(val))
                    placeholder="Search by order, buyer, breed or investor..."
                />
                <select
                    style="padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                    on:change=move |ev| {
                        let val = event_target_value(&ev);
                        set_payment_filter.set(match PaymentMethod::from_code(&val) {
                            Some(method) => PaymentFilter::Method(method),
                            None => PaymentFilter::All,
                        });
                    }
                >
                    <option value="">{"All Payments"}</option>
                    {PaymentMethod::all().into_iter().map(|method| view! {
                        <option value=method.code()>{method.display_name()}</option>
                    }).collect_view()}
                </select>
                <select
                    style="padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                    on:change=move |ev| {
                        let val = event_target_value(&ev);
                        set_status_filter.set(match OrderStatus::from_code(&val) {
                            Some(status) => StatusFilter::Status(status),
                            None => StatusFilter::All,
                        });
                    }
                >
                    <option value="">{"All Status"}</option>
                    {OrderStatus::all().into_iter().map(|status| view! {
                        <option value=status.code().to_string()>{status.code().to_string()}</option>
                    }).collect_view()}
                </select>
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    {"Refresh"}
                </button>
                <div style="margin-left: auto; font-size: 14px; color: #666;">
                    {"Showing: "}
                    <strong style="color: #333;">{move || filtered_orders().len()}</strong>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div style="padding: 10px; color: #dc2626;">{"Failed to load orders: "}{e}</div>
            })}

            // Table
            <div class="table-container" style="overflow: auto;">
                <table class="data-table" style="width: 100%; border-collapse: collapse;">
                    <thead>
                        <tr>
                            <th>{"Unit"}</th>
                            <th>{"Order"}</th>
                            <th>{"Investor"}</th>
                            <th>{"Breed"}</th>
                            <th>{"Units"}</th>
                            <th>{"Amount"}</th>
                            <th>{"Payment"}</th>
                            <th>{"Status"}</th>
                            <th>{"Created"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let orders = filtered_orders();
                            if orders.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="10" style="text-align: center; color: #888;">
                                            {if is_loading.get() { "Loading..." } else { "No orders found" }}
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                orders.into_iter().map(|order| {
                                    let unit_id = order.unit_id.clone();
                                    let approve_id = unit_id.clone();
                                    let reject_id = unit_id.clone();
                                    let proof_order = order.clone();
                                    let is_pending = order.status.class() == StatusClass::Pending;
                                    view! {
                                        <tr>
                                            <td>{order.unit_id.clone()}</td>
                                            <td>{order.order_id.clone()}</td>
                                            <td>{order.investor_name().to_string()}</td>
                                            <td>{order.breed_id.clone()}</td>
                                            <td>{order.num_units}</td>
                                            <td>{format_rupees(order.amount())}</td>
                                            <td>{order.payment_type().unwrap_or("-").to_string()}</td>
                                            <td>{status_badge(order.status.clone())}</td>
                                            <td>{order.created_at.map(|dt| format_date(&dt.to_rfc3339())).unwrap_or_else(|| "-".to_string())}</td>
                                            <td style="white-space: nowrap;">
                                                <button
                                                    class="button button--primary"
                                                    disabled=!is_pending
                                                    on:click=move |_| approve(approve_id.clone())
                                                >
                                                    {"Approve"}
                                                </button>
                                                <button
                                                    class="button button--danger"
                                                    disabled=!is_pending
                                                    on:click=move |_| ctx.request_rejection(reject_id.clone())
                                                >
                                                    {"Reject"}
                                                </button>
                                                <button
                                                    class="button button--secondary"
                                                    title="View payment proof"
                                                    on:click=move |_| ctx.open_proof(proof_order.clone())
                                                >
                                                    {icon("eye")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <ProofModal />
            <RejectionModal on_confirm=Callback::new(confirm_reject) />
        </div>
    }
}

/// Payment-proof viewer for the selected order.
#[component]
fn ProofModal() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");

    view! {
        {move || ctx.proof.get().map(|order| {
            let transaction = order.transaction.clone().unwrap_or_default();
            view! {
                <div class="modal-overlay" on:click=move |_| ctx.close_proof()>
                    <div class="modal-content" on:click=|e| e.stop_propagation()>
                        <h3>{"Payment Proof"}</h3>
                        <div style="font-size: 14px; margin-bottom: 8px;">
                            <div><strong>{"Unit: "}</strong>{order.unit_id.clone()}</div>
                            <div><strong>{"Investor: "}</strong>{order.investor_name().to_string()}</div>
                            <div><strong>{"Amount: "}</strong>{format_rupees(order.amount())}</div>
                            <div><strong>{"Payment: "}</strong>{order.payment_type().unwrap_or("-").to_string()}</div>
                            <div><strong>{"Transaction: "}</strong>{transaction.transaction_id.clone().unwrap_or_else(|| "-".to_string())}</div>
                        </div>
                        {match transaction.proof_url.clone() {
                            Some(url) => view! {
                                <img
                                    src=url
                                    alt="Payment proof"
                                    style="max-width: 100%; max-height: 60vh; border-radius: 8px;"
                                />
                            }.into_any(),
                            None => view! {
                                <div style="color: #888;">{"No proof document attached"}</div>
                            }.into_any(),
                        }}
                        <div style="margin-top: 12px; text-align: right;">
                            <button class="button button--secondary" on:click=move |_| ctx.close_proof()>
                                {"Close"}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}

/// Explicit confirmation step before a reject request is dispatched.
#[component]
fn RejectionModal(on_confirm: Callback<String>) -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");

    view! {
        {move || ctx.rejection_unit.get().map(|unit_id| {
            let confirm_id = unit_id.clone();
            view! {
                <div class="modal-overlay" on:click=move |_| ctx.clear_rejection()>
                    <div class="modal-content" on:click=|e| e.stop_propagation()>
                        <h3>{"Reject Unit"}</h3>
                        <p>
                            {"Reject unit "}
                            <strong>{unit_id.clone()}</strong>
                            {"? The investor will be notified and the unit returns to the pool."}
                        </p>
                        <div style="display: flex; gap: 8px; justify-content: flex-end;">
                            <button
                                class="button button--danger"
                                on:click=move |_| on_confirm.run(confirm_id.clone())
                            >
                                {"Reject"}
                            </button>
                            <button class="button button--secondary" on:click=move |_| ctx.clear_rejection()>
                                {"Cancel"}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
