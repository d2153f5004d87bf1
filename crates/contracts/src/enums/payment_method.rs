use serde::{Deserialize, Serialize};

/// Payment types attached to order transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PaymentMethod {
    Upi,
    BankTransfer,
    Card,
    Cash,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::BankTransfer => "BANK_TRANSFER",
            PaymentMethod::Card => "CARD",
            PaymentMethod::Cash => "CASH",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Card => "Card",
            PaymentMethod::Cash => "Cash",
        }
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::Upi,
            PaymentMethod::BankTransfer,
            PaymentMethod::Card,
            PaymentMethod::Cash,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "UPI" => Some(PaymentMethod::Upi),
            "BANK_TRANSFER" => Some(PaymentMethod::BankTransfer),
            "CARD" => Some(PaymentMethod::Card),
            "CASH" => Some(PaymentMethod::Cash),
            _ => None,
        }
    }
}

impl TryFrom<String> for PaymentMethod {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PaymentMethod::from_code(&value)
            .ok_or_else(|| format!("unknown payment method: {}", value))
    }
}

impl From<PaymentMethod> for String {
    fn from(method: PaymentMethod) -> Self {
        method.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_codes() {
        for method in PaymentMethod::all() {
            assert_eq!(PaymentMethod::from_code(method.code()), Some(method));
        }
        assert_eq!(PaymentMethod::from_code("CHEQUE"), None);
    }
}
