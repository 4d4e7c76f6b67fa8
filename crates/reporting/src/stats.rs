use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use pokertracker_ledger::{Ledger, Payment, PaymentMethod, PlayerStore};

/// Sum and count of payments made with one method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MethodTotal {
    pub total: Decimal,
    pub count: usize,
}

/// Per-method totals. Only methods that were actually used appear.
pub type MethodBreakdown = BTreeMap<PaymentMethod, MethodTotal>;

/// Game-wide aggregate.
///
/// `total_buyins` is the raw amount over every payment, rebuys included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameStats {
    pub total_pot: Decimal,
    pub total_dealer_fees: Decimal,
    pub total_buyins: Decimal,
    pub player_count: usize,
    pub payment_methods: MethodBreakdown,
}

pub fn game_stats<S: PlayerStore>(ledger: &Ledger<S>) -> GameStats {
    let total_pot: Decimal = ledger.players().map(|p| p.total()).sum();

    let payments = move || ledger.players().flat_map(|p| p.payments().iter());

    let fees_charged = payments().filter(|p| p.dealer_fee_applied).count();
    let total_buyins: Decimal = payments().map(|p| p.amount.value()).sum();

    GameStats {
        total_pot,
        total_dealer_fees: ledger.dealer_fee() * Decimal::from(fees_charged),
        total_buyins,
        player_count: ledger.player_count(),
        payment_methods: breakdown(payments()),
    }
}

pub(crate) fn breakdown<'a>(payments: impl Iterator<Item = &'a Payment>) -> MethodBreakdown {
    payments.fold(MethodBreakdown::new(), |mut acc, p| {
        let entry = acc.entry(p.method).or_default();
        entry.total += p.amount.value();
        entry.count += 1;
        acc
    })
}
