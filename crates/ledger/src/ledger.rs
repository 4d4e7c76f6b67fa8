use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pokertracker_core::{DomainError, DomainResult, PaymentId, PlayerId};

use crate::payment::{Amount, Payment, PaymentMethod, TransactionType};
use crate::player::Player;
use crate::store::{InMemoryPlayerStore, PlayerStore};

/// Dealer fee charged once per player, on their first payment.
pub const DEFAULT_DEALER_FEE: Decimal = dec!(35);

/// Result of the find-or-create-then-classify rebuy path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebuyOutcome {
    pub player_id: PlayerId,
    pub player_name: String,
    pub payment_id: PaymentId,
    pub is_new_player: bool,
    pub is_first_buyin: bool,
    pub dealer_fee_applied: bool,
    pub amount_to_pot: Decimal,
    pub message: String,
}

/// Confirmation of a removed payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDeleted {
    pub player_id: PlayerId,
    pub player_name: String,
    pub payment: Payment,
    pub new_total: Decimal,
}

/// Confirmation of a removed player. Captured before removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerDeleted {
    pub player_id: PlayerId,
    pub player_name: String,
    pub final_total: Decimal,
    pub transaction_count: usize,
}

/// The game ledger: players, their payments, and the dealer fee rule.
///
/// Mutations take `&mut self`; a shared ledger must sit behind a single
/// writer lock so that append-then-recompute is never interleaved.
#[derive(Debug)]
pub struct Ledger<S = InMemoryPlayerStore> {
    store: S,
    dealer_fee: Decimal,
}

impl Ledger<InMemoryPlayerStore> {
    pub fn new() -> Self {
        Self::with_dealer_fee(DEFAULT_DEALER_FEE)
    }

    pub fn with_dealer_fee(dealer_fee: Decimal) -> Self {
        Self::with_store(InMemoryPlayerStore::new(), dealer_fee)
    }
}

impl Default for Ledger<InMemoryPlayerStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PlayerStore> Ledger<S> {
    pub fn with_store(store: S, dealer_fee: Decimal) -> Self {
        Self { store, dealer_fee }
    }

    pub fn dealer_fee(&self) -> Decimal {
        self.dealer_fee
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.store.iter()
    }

    pub fn player_count(&self) -> usize {
        self.store.count()
    }

    pub fn player(&self, id: &PlayerId) -> DomainResult<&Player> {
        self.store.get(id).ok_or_else(DomainError::player_not_found)
    }

    /// Case-insensitive exact name match; first hit wins when names repeat.
    pub fn find_by_name(&self, name: &str) -> Option<&Player> {
        let needle = name.to_lowercase();
        self.store.iter().find(|p| p.name().to_lowercase() == needle)
    }

    /// Add a player with no payments. Duplicate names are allowed.
    pub fn create_player(&mut self, name: &str, occurred_at: DateTime<Utc>) -> DomainResult<&Player> {
        let name = normalize_name(name)?;
        let id = self.insert_player(name, occurred_at);
        self.player(&id)
    }

    /// Record a payment through the buy-in entry point.
    ///
    /// The fee applies when the player has no prior *buy-in* typed payment.
    /// This differs from [`Ledger::record_rebuy`], which looks at all prior
    /// payments; a player whose only remaining payments are rebuys is charged
    /// again here.
    pub fn record_buy_in(
        &mut self,
        player_id: PlayerId,
        amount: Amount,
        method: PaymentMethod,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<&Player> {
        let dealer_fee = self.dealer_fee;
        let player = self
            .store
            .get_mut(&player_id)
            .ok_or_else(DomainError::player_not_found)?;

        let dealer_fee_applied = !player.has_buy_in();
        let payment = Payment {
            id: PaymentId::new(),
            amount,
            method,
            kind: TransactionType::BuyIn,
            dealer_fee_applied,
            created_at: occurred_at,
        };
        let payment_id = payment.id;
        player.push_payment(payment, dealer_fee)?;
        debug_assert!(player.check_total(dealer_fee).is_ok());

        tracing::info!(
            %player_id,
            %payment_id,
            %amount,
            %method,
            dealer_fee_applied,
            total = %player.total(),
            "buy-in recorded"
        );

        Ok(&*player)
    }

    /// Find the player by name (creating them if needed) and record a payment
    /// whose effective type depends on history, not on the caller's label:
    /// a player with no payments at all gets a fee-applied buy-in, everyone
    /// else a fee-free rebuy.
    pub fn record_rebuy(
        &mut self,
        name: &str,
        amount: Amount,
        method: PaymentMethod,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<RebuyOutcome> {
        let name = normalize_name(name)?;
        let dealer_fee = self.dealer_fee;

        let existing = self.find_by_name(&name).map(Player::id_typed);
        let (player_id, is_new_player) = match existing {
            Some(id) => (id, false),
            None => (self.insert_player(name, occurred_at), true),
        };

        let player = self
            .store
            .get_mut(&player_id)
            .ok_or_else(DomainError::player_not_found)?;

        let is_first_buyin = !player.has_payments();
        let kind = if is_first_buyin {
            TransactionType::BuyIn
        } else {
            TransactionType::Rebuy
        };
        let payment = Payment {
            id: PaymentId::new(),
            amount,
            method,
            kind,
            dealer_fee_applied: is_first_buyin,
            created_at: occurred_at,
        };
        let payment_id = payment.id;
        let amount_to_pot = payment.pot_contribution(dealer_fee);
        if let Err(err) = player.push_payment(payment, dealer_fee) {
            if is_new_player {
                self.store.remove(&player_id);
            }
            return Err(err);
        }
        let player = self
            .store
            .get(&player_id)
            .ok_or_else(DomainError::player_not_found)?;
        debug_assert!(player.check_total(dealer_fee).is_ok());

        tracing::info!(
            %player_id,
            %payment_id,
            %amount,
            %method,
            kind = %kind,
            is_new_player,
            dealer_fee_applied = is_first_buyin,
            total = %player.total(),
            "rebuy recorded"
        );

        let message = rebuy_message(
            player.name(),
            amount,
            dealer_fee,
            amount_to_pot,
            is_new_player,
            is_first_buyin,
        );

        Ok(RebuyOutcome {
            player_id,
            player_name: player.name().to_string(),
            payment_id,
            is_new_player,
            is_first_buyin,
            dealer_fee_applied: is_first_buyin,
            amount_to_pot,
            message,
        })
    }

    pub fn delete_payment(
        &mut self,
        player_id: PlayerId,
        payment_id: PaymentId,
    ) -> DomainResult<PaymentDeleted> {
        let dealer_fee = self.dealer_fee;
        let player = self
            .store
            .get_mut(&player_id)
            .ok_or_else(DomainError::player_not_found)?;
        let payment = player.remove_payment(&payment_id, dealer_fee)?;
        debug_assert!(player.check_total(dealer_fee).is_ok());

        tracing::info!(
            %player_id,
            %payment_id,
            amount = %payment.amount,
            kind = %payment.kind,
            total = %player.total(),
            "payment deleted"
        );

        Ok(PaymentDeleted {
            player_id,
            player_name: player.name().to_string(),
            payment,
            new_total: player.total(),
        })
    }

    /// Remove a player together with all of their payments.
    pub fn delete_player(&mut self, player_id: PlayerId) -> DomainResult<PlayerDeleted> {
        let player = self
            .store
            .remove(&player_id)
            .ok_or_else(DomainError::player_not_found)?;

        tracing::info!(
            %player_id,
            final_total = %player.total(),
            transactions = player.payments().len(),
            "player deleted"
        );

        Ok(PlayerDeleted {
            player_id,
            player_name: player.name().to_string(),
            final_total: player.total(),
            transaction_count: player.payments().len(),
        })
    }

    /// Re-derive every player's total and compare with the cached value.
    pub fn verify_totals(&self) -> DomainResult<()> {
        self.store
            .iter()
            .try_for_each(|p| p.check_total(self.dealer_fee))
    }

    fn insert_player(&mut self, name: String, occurred_at: DateTime<Utc>) -> PlayerId {
        let player = Player::new(PlayerId::new(), name, occurred_at);
        let id = player.id_typed();
        tracing::info!(player_id = %id, name = %player.name(), "player created");
        self.store.insert(player);
        id
    }
}

fn normalize_name(name: &str) -> DomainResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::validation("player name must not be empty"));
    }
    Ok(name.to_string())
}

fn rebuy_message(
    name: &str,
    amount: Amount,
    dealer_fee: Decimal,
    amount_to_pot: Decimal,
    is_new_player: bool,
    is_first_buyin: bool,
) -> String {
    let amount = amount.value();
    if is_new_player {
        format!(
            "Welcome {name}! Buy-in of ${amount:.2} processed (${dealer_fee:.2} dealer fee, ${amount_to_pot:.2} to pot)"
        )
    } else if is_first_buyin {
        format!(
            "Buy-in processed for {name}: ${amount:.2} (${dealer_fee:.2} dealer fee, ${amount_to_pot:.2} to pot)"
        )
    } else {
        format!("Rebuy processed for {name}: ${amount:.2} added to pot")
    }
}
