pub mod claim_ledger;
pub mod distribution_state;

pub use claim_ledger::*;
pub use distribution_state::*;
