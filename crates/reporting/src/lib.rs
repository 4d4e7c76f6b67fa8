//! Read-only views over the ledger.
//!
//! Nothing here mutates a [`Ledger`](pokertracker_ledger::Ledger); every
//! view is derived from the current snapshot on demand.

pub mod recent;
pub mod stats;
pub mod summary;

pub use recent::{
    RECENT_REBUYS_LIMIT, RECENT_TRANSACTIONS_LIMIT, RecentRebuy, RecentTransaction,
    recent_rebuys, recent_transactions,
};
pub use stats::{GameStats, MethodBreakdown, MethodTotal, game_stats};
pub use summary::{PlayerPaymentSummary, player_payment_summary};
