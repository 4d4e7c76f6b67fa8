use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use pokertracker_core::{DomainError, DomainResult, Entity, PaymentId, PlayerId};

use crate::payment::{Payment, TransactionType};

/// A player and their payment history.
///
/// `total` is a cache of the net pot contribution. It is recomputed from
/// `payments` after every change and never written any other way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    payments: Vec<Payment>,
    total: Decimal,
    created_at: DateTime<Utc>,
}

impl Player {
    pub(crate) fn new(id: PlayerId, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            payments: Vec::new(),
            total: Decimal::ZERO,
            created_at,
        }
    }

    pub fn id_typed(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Payments in insertion order.
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn has_payments(&self) -> bool {
        !self.payments.is_empty()
    }

    pub fn has_buy_in(&self) -> bool {
        self.payments.iter().any(|p| p.kind == TransactionType::BuyIn)
    }

    /// Sum of pot contributions over all payments.
    pub fn expected_total(&self, dealer_fee: Decimal) -> DomainResult<Decimal> {
        sum_contributions(self.payments.iter(), dealer_fee)
    }

    pub fn check_total(&self, dealer_fee: Decimal) -> DomainResult<()> {
        let expected = self.expected_total(dealer_fee)?;
        if self.total != expected {
            return Err(DomainError::invariant(format!(
                "player {} total {} != recomputed {}",
                self.id, self.total, expected
            )));
        }
        Ok(())
    }

    /// Append a payment. The new total is computed first; on overflow the
    /// player is left untouched.
    pub(crate) fn push_payment(&mut self, payment: Payment, dealer_fee: Decimal) -> DomainResult<()> {
        let total = sum_contributions(
            self.payments.iter().chain(core::iter::once(&payment)),
            dealer_fee,
        )?;
        self.payments.push(payment);
        self.total = total;
        Ok(())
    }

    pub(crate) fn remove_payment(&mut self, id: &PaymentId, dealer_fee: Decimal) -> DomainResult<Payment> {
        let idx = self
            .payments
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(DomainError::payment_not_found)?;
        let total = sum_contributions(
            self.payments
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != idx)
                .map(|(_, p)| p),
            dealer_fee,
        )?;
        let removed = self.payments.remove(idx);
        self.total = total;
        Ok(removed)
    }
}

fn sum_contributions<'a>(
    mut payments: impl Iterator<Item = &'a Payment>,
    dealer_fee: Decimal,
) -> DomainResult<Decimal> {
    payments.try_fold(Decimal::ZERO, |acc, p| {
        acc.checked_add(p.pot_contribution(dealer_fee))
            .ok_or_else(|| DomainError::validation("pot total out of range"))
    })
}

impl Entity for Player {
    type Id = PlayerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    use crate::payment::{Amount, PaymentMethod};

    fn payment(amount: Amount, dealer_fee_applied: bool) -> Payment {
        Payment {
            id: PaymentId::new(),
            amount,
            method: PaymentMethod::Cash,
            kind: TransactionType::BuyIn,
            dealer_fee_applied,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn overflowing_push_leaves_player_untouched() {
        let mut player = Player::new(PlayerId::new(), "Whale".to_string(), Utc::now());
        let huge = Amount::unchecked(dec!(40000000000000000000000000000));

        player.push_payment(payment(huge, false), dec!(35)).unwrap();
        let before = player.clone();

        let err = player.push_payment(payment(huge, false), dec!(35)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(player, before);
        assert_eq!(player.payments().len(), 1);
        assert!(player.check_total(dec!(35)).is_ok());
    }

    #[test]
    fn removing_recomputes_and_unknown_id_is_not_found() {
        let mut player = Player::new(PlayerId::new(), "Ann".to_string(), Utc::now());
        let first = payment(Amount::new(dec!(100)).unwrap(), true);
        let second = payment(Amount::new(dec!(50)).unwrap(), false);
        let second_id = second.id;
        player.push_payment(first, dec!(35)).unwrap();
        player.push_payment(second, dec!(35)).unwrap();
        assert_eq!(player.total(), dec!(115));

        let removed = player.remove_payment(&second_id, dec!(35)).unwrap();
        assert_eq!(removed.id, second_id);
        assert_eq!(player.total(), dec!(65));
        assert_eq!(
            player.remove_payment(&second_id, dec!(35)).unwrap_err(),
            DomainError::payment_not_found()
        );
    }
}
