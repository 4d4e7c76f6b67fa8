//! Player ledger (buy-ins, rebuys, dealer fee).
//!
//! Pure domain logic only: no IO, no HTTP. State lives in an injected
//! [`PlayerStore`]; callers serialize mutations (the ledger takes `&mut self`).

pub mod ledger;
pub mod payment;
pub mod player;
pub mod store;

pub use ledger::{
    DEFAULT_DEALER_FEE, Ledger, PaymentDeleted, PlayerDeleted, RebuyOutcome,
};
pub use payment::{Amount, MAX_AMOUNT, Payment, PaymentMethod, TransactionType};
pub use player::Player;
pub use store::{InMemoryPlayerStore, PlayerStore};
