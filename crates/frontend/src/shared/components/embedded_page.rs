use leptos::prelude::*;

/// Full-height iframe wrapper for the static mini-apps shipped alongside
/// the dashboard (herd visualization, EMI calculator).
#[component]
pub fn EmbeddedPage(src: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div style="width: 100%; height: calc(100vh - 60px); overflow: hidden;">
            <iframe
                src=src
                title=title
                width="100%"
                height="100%"
                style="border: none;"
            ></iframe>
        </div>
    }
}
