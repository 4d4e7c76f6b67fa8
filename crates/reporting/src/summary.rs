use rust_decimal::Decimal;
use serde::Serialize;

use pokertracker_core::{DomainResult, PlayerId};
use pokertracker_ledger::{Ledger, PlayerStore};

use crate::stats::{MethodBreakdown, breakdown};

/// One player's pot contribution and how they paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerPaymentSummary {
    pub player_id: PlayerId,
    pub player_name: String,
    pub total_in_pot: Decimal,
    pub payment_methods: MethodBreakdown,
}

pub fn player_payment_summary<S: PlayerStore>(
    ledger: &Ledger<S>,
    player_id: &PlayerId,
) -> DomainResult<PlayerPaymentSummary> {
    let player = ledger.player(player_id)?;
    Ok(PlayerPaymentSummary {
        player_id: player.id_typed(),
        player_name: player.name().to_string(),
        total_in_pot: player.total(),
        payment_methods: breakdown(player.payments().iter()),
    })
}
