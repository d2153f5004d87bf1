use crate::layout::global_context::DashboardContext;
use crate::layout::{Modal, ModalService};
use crate::shared::api::{self, endpoints};
use crate::shared::icons::icon;
use contracts::domain::user::{
    CreateUserRequest, UpdateUserRequest, UserRecord, UserResponse, UsersResponse,
};
use leptos::prelude::*;

async fn fetch_referrals() -> Result<Vec<UserRecord>, String> {
    let resp: UsersResponse = api::get_json(&endpoints::referrals()).await?;
    Ok(resp.users)
}

fn alert(message: &str) {
    web_sys::window().and_then(|w| w.alert_with_message(message).ok());
}

/// Duplicate-mobile detection across the two ways the backend reports it:
/// a 409 transport error or a 200 envelope with a message.
fn is_duplicate(result: &Result<UserResponse, String>) -> bool {
    match result {
        Ok(resp) => resp
            .message
            .as_deref()
            .is_some_and(|m| m.to_lowercase().contains("already exists")),
        Err(e) => e.contains("409"),
    }
}

/// Referrals tab: non-verified users with their referrer, plus the
/// create/edit forms.
#[component]
pub fn ReferralsList() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");
    let modal = use_context::<ModalService>().expect("ModalService not found");

    let (referrals, set_referrals) = signal(Vec::<UserRecord>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        leptos::task::spawn_local(async move {
            match fetch_referrals().await {
                Ok(users) => {
                    set_referrals.set(users);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    log::error!("failed to fetch referrals: {}", e);
                    set_referrals.set(Vec::new());
                    set_error.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    leptos::task::spawn_local(async move {
        load();
    });

    let on_saved = Callback::new(move |_: ()| load());

    view! {
        <div style="display: flex; flex-direction: column; height: calc(100vh - 60px); overflow: auto; padding: 10px; position: relative;">
            <div style="display: flex; align-items: center; gap: 10px; margin-bottom: 10px;">
                <h2 style="margin: 0;">{"Referrals"}</h2>
                <button class="button button--secondary" title="Refresh" on:click=move |_| load()>
                    {icon("refresh")}
                </button>
                {move || is_loading.get().then(|| view! {
                    <span style="color: #888; font-size: 13px;">{"Loading..."}</span>
                })}
            </div>

            {move || error.get().map(|e| view! {
                <div style="padding: 10px; color: #dc2626;">{"Failed to load referrals: "}{e}</div>
            })}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Mobile"}</th>
                        <th>{"Referred By"}</th>
                        <th>{"Referrer Mobile"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || referrals.get().into_iter().map(|user| {
                        let edit_user = user.clone();
                        view! {
                            <tr>
                                <td>{user.full_name()}</td>
                                <td>{user.mobile.clone()}</td>
                                <td>{user.refered_by_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                <td>{user.refered_by_mobile.clone().unwrap_or_else(|| "-".to_string())}</td>
                                <td>
                                    <button
                                        class="button button--secondary"
                                        title="Edit"
                                        on:click=move |_| ctx.open_edit_referral(edit_user.clone())
                                    >
                                        {"Edit"}
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            {move || (!is_loading.get() && referrals.get().is_empty() && error.get().is_none()).then(|| view! {
                <div style="color: #888; padding: 2rem; text-align: center;">{"No referrals yet"}</div>
            })}

            // Floating create button
            <button
                class="button button--primary"
                style="position: fixed; bottom: 24px; right: 24px; width: 48px; height: 48px; border-radius: 50%; display: flex; align-items: center; justify-content: center; box-shadow: 0 2px 8px rgba(0,0,0,0.25);"
                title="Add referral"
                on:click=move |_| modal.show()
            >
                {icon("plus")}
            </button>

            <Modal>
                <CreateReferralForm on_saved=on_saved />
            </Modal>

            {move || ctx.edit_referral.get().map(|user| view! {
                <EditReferralForm user=user on_saved=on_saved />
            })}
        </div>
    }
}

#[component]
fn CreateReferralForm(on_saved: Callback<()>) -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not found");

    let mobile = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let refered_by_mobile = RwSignal::new(String::new());
    let refered_by_name = RwSignal::new(String::new());
    let (is_saving, set_is_saving) = signal(false);

    let clear = move || {
        mobile.set(String::new());
        first_name.set(String::new());
        last_name.set(String::new());
        refered_by_mobile.set(String::new());
        refered_by_name.set(String::new());
    };

    let submit = move |_| {
        let request = CreateUserRequest {
            mobile: mobile.get_untracked().trim().to_string(),
            first_name: first_name.get_untracked().trim().to_string(),
            last_name: last_name.get_untracked().trim().to_string(),
            refered_by_mobile: refered_by_mobile.get_untracked().trim().to_string(),
            refered_by_name: refered_by_name.get_untracked().trim().to_string(),
        };
        if request.mobile.is_empty()
            || request.first_name.is_empty()
            || request.last_name.is_empty()
            || request.refered_by_mobile.is_empty()
            || request.refered_by_name.is_empty()
        {
            alert("All fields are required.");
            return;
        }

        set_is_saving.set(true);
        leptos::task::spawn_local(async move {
            let result =
                api::post_json::<_, UserResponse>(&endpoints::create_user(), &request).await;
            set_is_saving.set(false);
            if is_duplicate(&result) {
                alert("User already exists");
                return;
            }
            match result {
                Ok(_) => {
                    clear();
                    modal.hide();
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("create referral failed: {}", e);
                    alert("Error creating referral. Please try again.");
                }
            }
        });
    };

    view! {
        <h3>{"New Referral"}</h3>
        <div style="display: flex; flex-direction: column; gap: 8px; min-width: 300px;">
            <input type="text" placeholder="Mobile" prop:value=move || mobile.get()
                on:input=move |ev| mobile.set(event_target_value(&ev)) />
            <input type="text" placeholder="First name" prop:value=move || first_name.get()
                on:input=move |ev| first_name.set(event_target_value(&ev)) />
            <input type="text" placeholder="Last name" prop:value=move || last_name.get()
                on:input=move |ev| last_name.set(event_target_value(&ev)) />
            <input type="text" placeholder="Referrer mobile" prop:value=move || refered_by_mobile.get()
                on:input=move |ev| refered_by_mobile.set(event_target_value(&ev)) />
            <input type="text" placeholder="Referrer name" prop:value=move || refered_by_name.get()
                on:input=move |ev| refered_by_name.set(event_target_value(&ev)) />
        </div>
        <div style="display: flex; gap: 8px; justify-content: flex-end; margin-top: 12px;">
            <button class="button button--primary" disabled=move || is_saving.get() on:click=submit>
                {move || if is_saving.get() { "Saving..." } else { "Create" }}
            </button>
            <button class="button button--secondary" on:click=move |_| modal.hide()>
                {"Cancel"}
            </button>
        </div>
    }
}

/// Edit form for an existing referral. The mobile is the user key and is
/// shown read-only; it travels in the update URL.
#[component]
fn EditReferralForm(user: UserRecord, on_saved: Callback<()>) -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");

    let mobile = StoredValue::new(user.mobile.clone());
    let first_name = RwSignal::new(user.first_name.clone());
    let last_name = RwSignal::new(user.last_name.clone());
    let refered_by_mobile = RwSignal::new(user.refered_by_mobile.clone().unwrap_or_default());
    let refered_by_name = RwSignal::new(user.refered_by_name.clone().unwrap_or_default());
    let (is_saving, set_is_saving) = signal(false);

    let submit = move |_| {
        let request = UpdateUserRequest {
            first_name: first_name.get_untracked().trim().to_string(),
            last_name: last_name.get_untracked().trim().to_string(),
            refered_by_mobile: refered_by_mobile.get_untracked().trim().to_string(),
            refered_by_name: refered_by_name.get_untracked().trim().to_string(),
        };
        if request.first_name.is_empty() || request.last_name.is_empty() {
            alert("First and last name are required.");
            return;
        }

        set_is_saving.set(true);
        leptos::task::spawn_local(async move {
            let url = endpoints::update_user(&mobile.get_value());
            match api::put_json::<_, UserResponse>(&url, &request).await {
                Ok(_) => {
                    set_is_saving.set(false);
                    ctx.close_edit_referral();
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("update referral failed: {}", e);
                    set_is_saving.set(false);
                    alert("Error updating referral. Please try again.");
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| ctx.close_edit_referral()>
            <div class="modal-content" on:click=|e| e.stop_propagation()>
                <h3>{"Edit Referral"}</h3>
                <div style="display: flex; flex-direction: column; gap: 8px; min-width: 300px;">
                    <input type="text" disabled=true prop:value=move || mobile.get_value() />
                    <input type="text" placeholder="First name" prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev)) />
                    <input type="text" placeholder="Last name" prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev)) />
                    <input type="text" placeholder="Referrer mobile" prop:value=move || refered_by_mobile.get()
                        on:input=move |ev| refered_by_mobile.set(event_target_value(&ev)) />
                    <input type="text" placeholder="Referrer name" prop:value=move || refered_by_name.get()
                        on:input=move |ev| refered_by_name.set(event_target_value(&ev)) />
                </div>
                <div style="display: flex; gap: 8px; justify-content: flex-end; margin-top: 12px;">
                    <button class="button button--primary" disabled=move || is_saving.get() on:click=submit>
                        {move || if is_saving.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button class="button button--secondary" on:click=move |_| ctx.close_edit_referral()>
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_detection() {
        let by_message = Ok(UserResponse {
            user: None,
            message: Some("User already exists".to_string()),
        });
        assert!(is_duplicate(&by_message));

        let by_status: Result<UserResponse, String> = Err("HTTP 409".to_string());
        assert!(is_duplicate(&by_status));

        let created = Ok(UserResponse {
            user: Some(UserRecord::default()),
            message: None,
        });
        assert!(!is_duplicate(&created));

        let other_error: Result<UserResponse, String> = Err("HTTP 500".to_string());
        assert!(!is_duplicate(&other_error));
    }
}
