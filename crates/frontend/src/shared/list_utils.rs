/// Generic list helpers: client-side search, sorting and the search input
/// component shared by the table tabs.
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Types that expose a set of fields for free-text search.
pub trait Searchable {
    /// Values considered by the substring filter.
    fn searchable_fields(&self) -> Vec<String>;

    /// Case-insensitive substring match over the searchable fields.
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Types sortable by a named field.
pub trait Sortable {
    /// Compare two items by `field`. Unknown fields return `Equal`, which
    /// leaves the list order unchanged under a stable sort.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive string comparison for `compare_by_field` impls.
pub fn cmp_str(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Optional-field comparison; missing values sort after present ones.
pub fn cmp_opt_str(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp_str(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Filter a list by a free-text query. An empty (or whitespace) query
/// returns the input unchanged.
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Sort a list by a named field and direction.
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, direction: SortDirection) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        match direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    });
}

/// Sort-toggle semantics: clicking the active column flips direction,
/// clicking a new column starts ascending.
pub fn toggle_sort(
    current_field: &str,
    current_direction: SortDirection,
    requested_field: &str,
) -> (String, SortDirection) {
    if current_field == requested_field {
        let flipped = match current_direction {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        };
        (current_field.to_string(), flipped)
    } else {
        (requested_field.to_string(), SortDirection::Asc)
    }
}

/// Header indicator for the current sort state.
pub fn get_sort_indicator(
    current_field: &str,
    field: &str,
    direction: SortDirection,
) -> &'static str {
    if current_field == field {
        match direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    } else {
        " ⇅"
    }
}

/// Click handler factory for sortable header cells.
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: Signal<String>,
    set_sort_field: WriteSignal<String>,
    sort_direction: Signal<SortDirection>,
    set_sort_direction: WriteSignal<SortDirection>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        let (next_field, next_direction) =
            toggle_sort(&sort_field.get(), sort_direction.get(), field);
        set_sort_field.set(next_field);
        set_sort_direction.set(next_direction);
    }
}

/// Search input with debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Current filter value (for display)
    #[prop(into)]
    value: Signal<String>,
    /// Callback invoked after the debounce window
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local input state, ahead of the debounce
    let (input_value, set_input_value) = signal(String::new());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        if let Ok(timeout_id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            debounce_timeout.set_value(Some(timeout_id));
        }
        closure.forget();
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        mobile: String,
        referrer: Option<String>,
    }

    fn row(name: &str, mobile: &str, referrer: Option<&str>) -> Row {
        Row {
            name: name.to_string(),
            mobile: mobile.to_string(),
            referrer: referrer.map(str::to_string),
        }
    }

    impl Searchable for Row {
        fn searchable_fields(&self) -> Vec<String> {
            vec![self.name.clone(), self.mobile.clone()]
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => cmp_str(&self.name, &other.name),
                "mobile" => cmp_str(&self.mobile, &other.mobile),
                "referrer" => cmp_opt_str(self.referrer.as_deref(), other.referrer.as_deref()),
                _ => Ordering::Equal,
            }
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            row("Meera", "9000000003", Some("Ravi")),
            row("Arjun", "9000000001", None),
            row("ravi", "9000000002", Some("Arjun")),
        ]
    }

    #[test]
    fn test_empty_query_returns_all() {
        let items = sample();
        assert_eq!(filter_list(items.clone(), ""), items);
        assert_eq!(filter_list(items.clone(), "   "), items);
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(filter_list(sample(), "zzz").is_empty());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let hits = filter_list(sample(), "RAVI");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "ravi");
    }

    #[test]
    fn test_sort_asc_desc_are_reverses() {
        let mut asc = sample();
        sort_list(&mut asc, "name", SortDirection::Asc);
        let mut desc = sample();
        sort_list(&mut desc, "name", SortDirection::Desc);
        desc.reverse();
        assert_eq!(asc, desc);
        assert_eq!(asc[0].name, "Arjun");
    }

    #[test]
    fn test_unknown_field_keeps_order() {
        let items = sample();
        let mut sorted = items.clone();
        sort_list(&mut sorted, "breed", SortDirection::Asc);
        assert_eq!(sorted, items);
    }

    #[test]
    fn test_missing_values_sort_last() {
        let mut items = sample();
        sort_list(&mut items, "referrer", SortDirection::Asc);
        assert_eq!(items.last().unwrap().name, "Arjun");
    }

    #[test]
    fn test_toggle_sort_semantics() {
        assert_eq!(
            toggle_sort("name", SortDirection::Asc, "name"),
            ("name".to_string(), SortDirection::Desc)
        );
        assert_eq!(
            toggle_sort("name", SortDirection::Desc, "name"),
            ("name".to_string(), SortDirection::Asc)
        );
        assert_eq!(
            toggle_sort("name", SortDirection::Desc, "mobile"),
            ("mobile".to_string(), SortDirection::Asc)
        );
    }

    #[test]
    fn test_filter_then_sort_matches_sort_then_filter() {
        let mut a = filter_list(sample(), "90000000");
        sort_list(&mut a, "name", SortDirection::Asc);

        let mut b = sample();
        sort_list(&mut b, "name", SortDirection::Asc);
        let b = filter_list(b, "90000000");

        assert_eq!(a, b);
    }
}
