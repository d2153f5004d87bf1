//! Search and sort wiring for user tables.

use crate::shared::list_utils::{cmp_opt_str, cmp_str, Searchable, Sortable};
use contracts::domain::user::UserRecord;
use std::cmp::Ordering;

impl Searchable for UserRecord {
    fn searchable_fields(&self) -> Vec<String> {
        vec![
            self.full_name(),
            self.mobile.clone(),
            self.refered_by_name.clone().unwrap_or_default(),
            self.refered_by_mobile.clone().unwrap_or_default(),
        ]
    }
}

impl Sortable for UserRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "first_name" => cmp_str(&self.first_name, &other.first_name),
            "last_name" => cmp_str(&self.last_name, &other.last_name),
            "mobile" => cmp_str(&self.mobile, &other.mobile),
            "referrer" => cmp_opt_str(
                self.refered_by_name.as_deref(),
                other.refered_by_name.as_deref(),
            ),
            // false before true, so verified/filled rows group together
            "verified" => self.verified.cmp(&other.verified),
            "form_filled" => self.is_form_filled.cmp(&other.is_form_filled),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{filter_list, sort_list, SortDirection};

    fn user(first: &str, last: &str, mobile: &str, referrer: Option<&str>) -> UserRecord {
        UserRecord {
            mobile: mobile.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            refered_by_name: referrer.map(str::to_string),
            refered_by_mobile: referrer.map(|_| "9000000000".to_string()),
            ..Default::default()
        }
    }

    fn sample() -> Vec<UserRecord> {
        vec![
            user("Meera", "Shah", "9000000003", Some("Ravi Kumar")),
            user("Arjun", "Verma", "9000000001", None),
            user("ravi", "Kumar", "9000000002", Some("Arjun Verma")),
        ]
    }

    #[test]
    fn test_search_covers_name_and_referrer() {
        let by_name = filter_list(sample(), "meera");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].mobile, "9000000003");

        // "arjun" hits Arjun himself and the user he referred
        let by_referrer = filter_list(sample(), "arjun");
        assert_eq!(by_referrer.len(), 2);
    }

    #[test]
    fn test_sort_by_first_name_ignores_case() {
        let mut users = sample();
        sort_list(&mut users, "first_name", SortDirection::Asc);
        let names: Vec<&str> = users.iter().map(|u| u.first_name.as_str()).collect();
        assert_eq!(names, vec!["Arjun", "Meera", "ravi"]);
    }

    #[test]
    fn test_sort_missing_referrer_last() {
        let mut users = sample();
        sort_list(&mut users, "referrer", SortDirection::Asc);
        assert_eq!(users.last().unwrap().first_name, "Arjun");
    }

    #[test]
    fn test_unknown_field_is_stable() {
        let users = sample();
        let mut sorted = users.clone();
        sort_list(&mut sorted, "breed", SortDirection::Asc);
        assert_eq!(sorted, users);
    }
}
