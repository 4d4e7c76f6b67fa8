use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rust_decimal_macros::dec;

use pokertracker_core::{DomainError, DomainResult, Entity, PaymentId};

/// How the player paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Venmo,
    #[serde(rename = "Apple Pay")]
    ApplePay,
    Zelle,
    Other,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Venmo => "Venmo",
            PaymentMethod::ApplePay => "Apple Pay",
            PaymentMethod::Zelle => "Zelle",
            PaymentMethod::Other => "Other",
        }
    }
}

impl core::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective transaction type of a stored payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionType {
    BuyIn,
    Rebuy,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::BuyIn => "buy-in",
            TransactionType::Rebuy => "rebuy",
        }
    }
}

impl core::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Largest amount a single payment may carry. Keeps every player and pot
/// sum far inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = dec!(1000000);

/// Strictly positive monetary amount, at most [`MAX_AMOUNT`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value <= Decimal::ZERO {
            return Err(DomainError::validation("amount must be positive"));
        }
        if value > MAX_AMOUNT {
            return Err(DomainError::validation(format!(
                "amount must not exceed {MAX_AMOUNT}"
            )));
        }
        Ok(Self(value))
    }

    #[cfg(test)]
    pub(crate) fn unchecked(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One recorded payment. Immutable once appended to a player.
///
/// `amount` is what the player handed over; the dealer fee is never
/// subtracted from it, only from the pot contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub amount: Amount,
    pub method: PaymentMethod,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub dealer_fee_applied: bool,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Net amount this payment adds to the pot.
    pub fn pot_contribution(&self, dealer_fee: Decimal) -> Decimal {
        if self.dealer_fee_applied {
            self.amount.value() - dealer_fee
        } else {
            self.amount.value()
        }
    }
}

impl Entity for Payment {
    type Id = PaymentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn payment(amount: Decimal, dealer_fee_applied: bool) -> Payment {
        Payment {
            id: PaymentId::new(),
            amount: Amount::new(amount).unwrap(),
            method: PaymentMethod::ApplePay,
            kind: TransactionType::BuyIn,
            dealer_fee_applied,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        assert!(Amount::new(dec!(0)).is_err());
        assert!(Amount::new(dec!(-5)).is_err());
        assert_eq!(Amount::new(dec!(0.01)).unwrap().value(), dec!(0.01));
    }

    #[test]
    fn fee_only_reduces_pot_contribution() {
        let p = payment(dec!(100), true);
        assert_eq!(p.pot_contribution(dec!(35)), dec!(65));
        assert_eq!(p.amount.value(), dec!(100));

        let p = payment(dec!(50), false);
        assert_eq!(p.pot_contribution(dec!(35)), dec!(50));
    }

    #[test]
    fn wire_names_match_the_json_contract() {
        let json = serde_json::to_value(payment(dec!(20), true)).unwrap();
        assert_eq!(json["method"], "Apple Pay");
        assert_eq!(json["type"], "buy-in");
        assert_eq!(json["amount"], 20.0);
        assert_eq!(json["dealer_fee_applied"], true);

        let rebuy: TransactionType = serde_json::from_str("\"rebuy\"").unwrap();
        assert_eq!(rebuy, TransactionType::Rebuy);
    }

    #[test]
    fn deserializing_a_negative_amount_fails() {
        assert!(serde_json::from_str::<Amount>("-1").is_err());
        assert_eq!(serde_json::from_str::<Amount>("12.5").unwrap().value(), dec!(12.5));
    }

    #[test]
    fn amounts_above_the_cap_are_rejected() {
        assert_eq!(Amount::new(MAX_AMOUNT).unwrap().value(), MAX_AMOUNT);
        assert!(Amount::new(MAX_AMOUNT + dec!(0.01)).is_err());
        assert!(serde_json::from_str::<Amount>("4e28").is_err());
    }
}
