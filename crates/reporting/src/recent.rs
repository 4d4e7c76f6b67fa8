use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use pokertracker_core::{PaymentId, PlayerId};
use pokertracker_ledger::{Ledger, Payment, PaymentMethod, Player, PlayerStore, TransactionType};

pub const RECENT_REBUYS_LIMIT: usize = 5;
pub const RECENT_TRANSACTIONS_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentRebuy {
    pub player_name: String,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentTransaction {
    pub payment_id: PaymentId,
    pub player_id: PlayerId,
    pub player_name: String,
    pub amount: Decimal,
    pub method: PaymentMethod,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub dealer_fee_applied: bool,
    pub created_at: DateTime<Utc>,
}

/// The most recent rebuy-typed payments, newest first.
pub fn recent_rebuys<S: PlayerStore>(ledger: &Ledger<S>) -> Vec<RecentRebuy> {
    newest(ledger, |p| p.kind == TransactionType::Rebuy, RECENT_REBUYS_LIMIT)
        .into_iter()
        .map(|(player, payment)| RecentRebuy {
            player_name: player.name().to_string(),
            amount: payment.amount.value(),
            method: payment.method,
            created_at: payment.created_at,
        })
        .collect()
}

/// The most recent payments of any type, newest first.
pub fn recent_transactions<S: PlayerStore>(ledger: &Ledger<S>) -> Vec<RecentTransaction> {
    newest(ledger, |_| true, RECENT_TRANSACTIONS_LIMIT)
        .into_iter()
        .map(|(player, payment)| RecentTransaction {
            payment_id: payment.id,
            player_id: player.id_typed(),
            player_name: player.name().to_string(),
            amount: payment.amount.value(),
            method: payment.method,
            kind: payment.kind,
            dealer_fee_applied: payment.dealer_fee_applied,
            created_at: payment.created_at,
        })
        .collect()
}

// Ties on `created_at` keep enumeration order (stable sort).
fn newest<'a, S: PlayerStore>(
    ledger: &'a Ledger<S>,
    keep: impl Fn(&Payment) -> bool,
    limit: usize,
) -> Vec<(&'a Player, &'a Payment)> {
    let mut rows: Vec<_> = ledger
        .players()
        .flat_map(|player| player.payments().iter().map(move |payment| (player, payment)))
        .filter(|(_, payment)| keep(payment))
        .collect();
    rows.sort_by(|a, b| b.1.created_at.cmp(&a.1.created_at));
    rows.truncate(limit);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pokertracker_ledger::Amount;
    use rust_decimal_macros::dec;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn amt(value: i64) -> Amount {
        Amount::new(Decimal::from(value)).unwrap()
    }

    #[test]
    fn recent_rebuys_skip_buy_ins_and_cap_at_five() {
        let mut ledger = Ledger::new();
        let names = ["Ann", "Ben"];
        for i in 0..10 {
            ledger
                .record_rebuy(names[i % 2], amt(10 + i as i64), PaymentMethod::Cash, at(i as i64))
                .unwrap();
        }

        let rebuys = recent_rebuys(&ledger);
        assert_eq!(rebuys.len(), RECENT_REBUYS_LIMIT);
        // First payment of each player was a buy-in; the newest rebuy is #9 (Ben, 19).
        assert_eq!(rebuys[0].player_name, "Ben");
        assert_eq!(rebuys[0].amount, dec!(19));
        assert!(rebuys.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert!(rebuys.iter().all(|r| r.created_at > at(1)));
    }

    #[test]
    fn recent_transactions_cap_at_twenty_newest_first() {
        let mut ledger = Ledger::new();
        // Interleave players so insertion order differs from time order.
        for i in 0..25 {
            let name = if i % 3 == 0 { "Cy" } else { "Di" };
            ledger
                .record_rebuy(name, amt(5 + i), PaymentMethod::Zelle, at(100 - i))
                .unwrap();
        }

        let txs = recent_transactions(&ledger);
        assert_eq!(txs.len(), RECENT_TRANSACTIONS_LIMIT);
        assert!(txs.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert_eq!(txs[0].created_at, at(100));
        assert_eq!(txs[0].kind, TransactionType::BuyIn);
        assert!(txs[0].dealer_fee_applied);
        assert_eq!(txs[0].player_name, "Cy");
    }

    #[test]
    fn deleted_payments_disappear_from_feeds() {
        let mut ledger = Ledger::new();
        ledger
            .record_rebuy("Eli", amt(100), PaymentMethod::Cash, at(0))
            .unwrap();
        let rebuy = ledger
            .record_rebuy("Eli", amt(20), PaymentMethod::Cash, at(1))
            .unwrap();
        ledger.delete_payment(rebuy.player_id, rebuy.payment_id).unwrap();

        assert!(recent_rebuys(&ledger).is_empty());
        let txs = recent_transactions(&ledger);
        assert_eq!(txs.len(), 1);
        assert_ne!(txs[0].payment_id, rebuy.payment_id);
    }

    #[test]
    fn transaction_rows_use_type_on_the_wire() {
        let mut ledger = Ledger::new();
        ledger
            .record_rebuy("Fay", amt(40), PaymentMethod::Other, at(0))
            .unwrap();
        let json = serde_json::to_value(recent_transactions(&ledger)).unwrap();
        assert_eq!(json[0]["type"], "buy-in");
        assert_eq!(json[0]["method"], "Other");
        assert_eq!(json[0]["player_name"], "Fay");
    }
}
