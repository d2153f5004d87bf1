use crate::shared::icons::icon;
use leptos::prelude::*;

/// Visual accent for a summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAccent {
    Neutral,
    Success,
    Warning,
    Error,
}

impl CardAccent {
    fn class(&self) -> &'static str {
        match self {
            CardAccent::Neutral => "stat-card",
            CardAccent::Success => "stat-card stat-card--success",
            CardAccent::Warning => "stat-card stat-card--warning",
            CardAccent::Error => "stat-card stat-card--error",
        }
    }
}

/// Summary card used in the order dashboard header row.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Pre-formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Visual accent
    #[prop(optional)]
    accent: Option<CardAccent>,
) -> impl IntoView {
    let accent = accent.unwrap_or(CardAccent::Neutral);

    view! {
        <div class=accent.class()>
            <div class="stat-card__header">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__icon">{icon(&icon_name)}</span>
            </div>
            <div class="stat-card__value">{move || value.get()}</div>
        </div>
    }
}
