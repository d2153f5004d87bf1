use crate::shared::api::{self, endpoints};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, sort_list, SearchInput, SortDirection,
};
use contracts::domain::user::{UserRecord, UsersResponse};
use leptos::prelude::*;

async fn fetch_customers() -> Result<Vec<UserRecord>, String> {
    let resp: UsersResponse = api::get_json(&endpoints::customers()).await?;
    Ok(resp.users)
}

fn yes_no(flag: bool) -> AnyView {
    let (text, color) = if flag {
        ("Yes", "#10b981")
    } else {
        ("No", "#9ca3af")
    };
    view! {
        <span style=format!("color: {}; font-weight: 500;", color)>{text}</span>
    }
    .into_any()
}

/// Verified-users tab: searchable, sortable table.
#[component]
pub fn CustomersList() -> impl IntoView {
    let (customers, set_customers) = signal(Vec::<UserRecord>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let (filter_text, set_filter_text) = signal(String::new());
    let (sort_field, set_sort_field) = signal("first_name".to_string());
    let (sort_direction, set_sort_direction) = signal(SortDirection::Asc);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        leptos::task::spawn_local(async move {
            match fetch_customers().await {
                Ok(users) => {
                    set_customers.set(users);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    log::error!("failed to fetch customers: {}", e);
                    set_customers.set(Vec::new());
                    set_error.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    leptos::task::spawn_local(async move {
        load();
    });

    // Filter then sort; the two commute, but filtering first sorts less.
    let visible = move || {
        let mut users = filter_list(customers.get(), &filter_text.get());
        sort_list(&mut users, &sort_field.get(), sort_direction.get());
        users
    };

    let header = move |field: &'static str, title: &'static str| {
        let on_click = create_sort_toggle(
            field,
            sort_field.into(),
            set_sort_field,
            sort_direction.into(),
            set_sort_direction,
        );
        view! {
            <th style="cursor: pointer; user-select: none; white-space: nowrap;" on:click=on_click>
                {title}
                {move || get_sort_indicator(&sort_field.get(), field, sort_direction.get())}
            </th>
        }
    };

    view! {
        <div style="display: flex; flex-direction: column; height: calc(100vh - 60px); overflow: auto; padding: 10px;">
            <div style="display: flex; align-items: center; gap: 10px; margin-bottom: 10px; flex-wrap: wrap;">
                <h2 style="margin: 0;">{"Verified Users"}</h2>
                <SearchInput
                    value=Signal::derive(move || filter_text.get())
                    on_change=Callback::new(move |q| set_filter_text.set(q))
                    placeholder="Search name, mobile, referrer...".to_string()
                />
                <button class="button button--secondary" title="Refresh" on:click=move |_| load()>
                    {icon("refresh")}
                </button>
                {move || is_loading.get().then(|| view! {
                    <span style="color: #888; font-size: 13px;">{"Loading..."}</span>
                })}
                <span style="color: #888; font-size: 13px; margin-left: auto;">
                    {move || format!("{} of {}", visible().len(), customers.get().len())}
                </span>
            </div>

            {move || error.get().map(|e| view! {
                <div style="padding: 10px; color: #dc2626;">{"Failed to load customers: "}{e}</div>
            })}

            <table class="data-table">
                <thead>
                    <tr>
                        {header("first_name", "First Name")}
                        {header("last_name", "Last Name")}
                        {header("mobile", "Mobile")}
                        {header("referrer", "Referred By")}
                        {header("form_filled", "Form Filled")}
                        {header("verified", "Verified")}
                    </tr>
                </thead>
                <tbody>
                    {move || visible().into_iter().map(|user| view! {
                        <tr>
                            <td>{user.first_name.clone()}</td>
                            <td>{user.last_name.clone()}</td>
                            <td>{user.mobile.clone()}</td>
                            <td>{user.refered_by_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                            <td>{yes_no(user.is_form_filled)}</td>
                            <td>{yes_no(user.verified)}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>

            {move || (!is_loading.get() && visible().is_empty() && error.get().is_none()).then(|| view! {
                <div style="color: #888; padding: 2rem; text-align: center;">
                    {move || if filter_text.get().trim().is_empty() {
                        "No verified users yet"
                    } else {
                        "No users match the search"
                    }}
                </div>
            })}
        </div>
    }
}
