use serde::Deserialize;

use pokertracker_ledger::{Amount, PaymentDeleted, PaymentMethod, PlayerDeleted, RebuyOutcome};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct BuyInRequest {
    pub amount: Amount,
    pub method: PaymentMethod,
}

#[derive(Debug, Deserialize)]
pub struct RebuyRequest {
    pub player_name: String,
    pub amount: Amount,
    pub method: PaymentMethod,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn rebuy_outcome_to_json(o: RebuyOutcome) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "message": o.message,
        "player_id": o.player_id.to_string(),
        "payment_id": o.payment_id.to_string(),
        "is_new_player": o.is_new_player,
        "is_first_buyin": o.is_first_buyin,
        "dealer_fee_applied": o.dealer_fee_applied,
        "amount_to_pot": o.amount_to_pot,
    })
}

pub fn payment_deleted_to_json(d: PaymentDeleted) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "message": format!(
            "Deleted ${:.2} {} payment from {}",
            d.payment.amount.value(),
            d.payment.kind,
            d.player_name
        ),
        "player_name": d.player_name,
        "deleted_amount": d.payment.amount,
        "deleted_type": d.payment.kind,
        "new_total": d.new_total,
    })
}

pub fn player_deleted_to_json(d: PlayerDeleted) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "message": format!(
            "Deleted {} and {} transaction(s) (${:.2} removed from pot)",
            d.player_name, d.transaction_count, d.final_total
        ),
        "player_name": d.player_name,
        "final_total": d.final_total,
        "transaction_count": d.transaction_count,
    })
}
