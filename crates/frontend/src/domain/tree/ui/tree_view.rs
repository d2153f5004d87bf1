use crate::domain::tree::herd::project_herd;
use chrono::Datelike;
use contracts::domain::tree::HerdNode;
use leptos::prelude::*;

/// Projection window rendered by the tab.
const HORIZON_YEARS: u32 = 6;

/// Recursive collapsible node row. Each node owns its expansion signal;
/// collapsing a parent hides the whole subtree without resetting it.
fn herd_node_view(node: HerdNode, hovered: RwSignal<Option<HerdNode>>) -> AnyView {
    let expanded = RwSignal::new(true);
    let has_children = !node.children.is_empty();
    let node = StoredValue::new(node);

    let dot_color = if has_children { "#10b981" } else { "#9ca3af" };
    let milk_year = node.with_value(|n| {
        n.milk_starts
            .split('-')
            .nth(1)
            .unwrap_or_default()
            .to_string()
    });

    view! {
        <div style="margin-left: 20px; border-left: 1px dashed #cbd5e1; padding-left: 12px;">
            <div
                style="display: flex; align-items: center; gap: 8px; padding: 4px 0; cursor: pointer;"
                on:click=move |_| {
                    if has_children {
                        expanded.update(|e| *e = !*e);
                    }
                }
                on:mouseenter=move |_| hovered.set(Some(node.get_value()))
                on:mouseleave=move |_| hovered.set(None)
            >
                {has_children.then(|| view! {
                    <span style="color: #64748b; font-size: 11px; width: 10px;">
                        {move || if expanded.get() { "▾" } else { "▸" }}
                    </span>
                })}
                <span style=format!(
                    "display: inline-flex; align-items: center; justify-content: center; min-width: 34px; height: 34px; border-radius: 50%; background: {}; color: white; font-size: 12px; font-weight: 600; padding: 0 4px;",
                    dot_color
                )>
                    {node.with_value(|n| n.name.clone())}
                </span>
                <span style="color: #475569; font-size: 12px;">{milk_year}</span>
            </div>
            {move || expanded.get().then(|| {
                node.with_value(|n| n.children.clone())
                    .into_iter()
                    .map(|child| herd_node_view(child, hovered))
                    .collect_view()
            })}
        </div>
    }
    .into_any()
}

/// Family-tree tab: the projected herd of one purchased buffalo, with a
/// details panel for the hovered node.
#[component]
pub fn FamilyTreePage() -> impl IntoView {
    let purchase_year = chrono::Local::now().year() as u32;
    let root = project_herd("B1", purchase_year, purchase_year + HORIZON_YEARS);
    let herd_size = root.herd_size();

    let hovered = RwSignal::new(Option::<HerdNode>::None);

    view! {
        <div style="height: calc(100vh - 60px); overflow: auto; padding: 16px; background: #f8fafc; position: relative;">
            <div style="display: flex; align-items: baseline; gap: 12px; margin-bottom: 8px;">
                <h2 style="margin: 0;">{"Buffalo Family Tree"}</h2>
                <span style="color: #64748b; font-size: 13px;">
                    {format!("projected herd of {} through {}", herd_size, purchase_year + HORIZON_YEARS)}
                </span>
            </div>

            {herd_node_view(root, hovered)}

            {move || hovered.get().map(|node| view! {
                <div style="position: fixed; top: 76px; right: 24px; background: white; border-radius: 12px; padding: 1rem; box-shadow: 0 8px 32px rgba(0,0,0,0.15); min-width: 200px; pointer-events: none;">
                    <strong style="font-size: 1.05rem;">{"Buffalo "}{node.name.clone()}</strong>
                    <div style="font-size: 0.875rem; margin-top: 0.5rem; line-height: 1.5;">
                        <div><strong>{"Born: "}</strong>{node.born.clone()}</div>
                        <div><strong>{"Milk Starts: "}</strong>{node.milk_starts.clone()}</div>
                        <div>
                            <strong>{"Children: "}</strong>
                            <span style=format!(
                                "color: {}; font-weight: 600;",
                                if node.total_children > 0 { "#10b981" } else { "#ef4444" }
                            )>
                                {node.total_children}
                            </span>
                        </div>
                        <div><strong>{"Herd size: "}</strong>{node.herd_size()}</div>
                    </div>
                </div>
            })}
        </div>
    }
}
