use serde::{Deserialize, Serialize};

/// Order/unit statuses as the platform API emits them.
///
/// The API currently sends two spellings for the terminal states
/// (`PAID`/`Approved`, `REJECTED`/`Rejected`) while an upstream schema
/// migration is in progress. All equivalence decisions live here; call
/// sites compare via [`StatusClass`] and never against raw strings.
///
/// Statuses outside the known set decode as [`OrderStatus::Other`] so a
/// single new spelling cannot fail the whole orders envelope; such units
/// still render, they just fall outside the three summary buckets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    PendingAdminVerification,
    PendingPayment,
    Paid,
    Approved,
    Rejected,
    RejectedLegacy,
    Other(String),
}

/// Coarse status buckets used by filtering and the summary counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Pending,
    Approved,
    Rejected,
    Unknown,
}

impl OrderStatus {
    /// Wire form, exactly as received/sent on the API.
    pub fn code(&self) -> &str {
        match self {
            OrderStatus::PendingAdminVerification => "PENDING_ADMIN_VERIFICATION",
            OrderStatus::PendingPayment => "PENDING_PAYMENT",
            OrderStatus::Paid => "PAID",
            OrderStatus::Approved => "Approved",
            OrderStatus::Rejected => "REJECTED",
            OrderStatus::RejectedLegacy => "Rejected",
            OrderStatus::Other(raw) => raw,
        }
    }

    pub fn display_name(&self) -> &str {
        match self.class() {
            StatusClass::Pending => match self {
                OrderStatus::PendingPayment => "Payment Pending",
                _ => "Pending Verification",
            },
            StatusClass::Approved => "Approved",
            StatusClass::Rejected => "Rejected",
            // unrecognized spellings show verbatim
            StatusClass::Unknown => self.code(),
        }
    }

    pub fn class(&self) -> StatusClass {
        match self {
            OrderStatus::PendingAdminVerification | OrderStatus::PendingPayment => {
                StatusClass::Pending
            }
            OrderStatus::Paid | OrderStatus::Approved => StatusClass::Approved,
            OrderStatus::Rejected | OrderStatus::RejectedLegacy => StatusClass::Rejected,
            OrderStatus::Other(_) => StatusClass::Unknown,
        }
    }

    /// The known statuses, for filter dropdowns. `Other` is deliberately
    /// absent: it is not a selectable value, only a decoding fallback.
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::PendingAdminVerification,
            OrderStatus::PendingPayment,
            OrderStatus::Paid,
            OrderStatus::Approved,
            OrderStatus::Rejected,
            OrderStatus::RejectedLegacy,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PENDING_ADMIN_VERIFICATION" => Some(OrderStatus::PendingAdminVerification),
            "PENDING_PAYMENT" => Some(OrderStatus::PendingPayment),
            "PAID" => Some(OrderStatus::Paid),
            "Approved" => Some(OrderStatus::Approved),
            "REJECTED" => Some(OrderStatus::Rejected),
            "Rejected" => Some(OrderStatus::RejectedLegacy),
            _ => None,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        OrderStatus::from_code(&value).unwrap_or(OrderStatus::Other(value))
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_spellings_share_a_class() {
        assert_eq!(OrderStatus::Paid.class(), StatusClass::Approved);
        assert_eq!(OrderStatus::Approved.class(), StatusClass::Approved);
        assert_eq!(OrderStatus::Rejected.class(), StatusClass::Rejected);
        assert_eq!(OrderStatus::RejectedLegacy.class(), StatusClass::Rejected);
        assert_eq!(
            OrderStatus::PendingPayment.class(),
            StatusClass::Pending
        );
        assert_eq!(
            OrderStatus::PendingAdminVerification.class(),
            StatusClass::Pending
        );
    }

    #[test]
    fn test_round_trip_codes() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code("SHIPPED"), None);
    }

    #[test]
    fn test_serde_uses_wire_form() {
        let status: OrderStatus = serde_json::from_str("\"Approved\"").unwrap();
        assert_eq!(status, OrderStatus::Approved);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"Approved\"");
    }

    #[test]
    fn test_unknown_spelling_decodes_as_other() {
        let status: OrderStatus = serde_json::from_str("\"SHIPPED\"").unwrap();
        assert_eq!(status, OrderStatus::Other("SHIPPED".to_string()));
        assert_eq!(status.class(), StatusClass::Unknown);
        assert_eq!(status.code(), "SHIPPED");
        assert_eq!(status.display_name(), "SHIPPED");
        // round-trips unchanged
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"SHIPPED\"");
    }
}
