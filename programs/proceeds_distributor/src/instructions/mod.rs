pub mod create_distribution;
pub mod open_claim_word;
pub mod is_claimed;
pub mod claim;
pub mod batch_claim;
pub mod create_auction;
pub mod set_auction_approval;
pub mod set_auction_reserve_price;
pub mod end_auction;
pub mod cancel_auction;

pub use create_distribution::*;
pub use open_claim_word::*;
pub use is_claimed::*;
pub use claim::*;
pub use batch_claim::*;
pub use create_auction::*;
pub use set_auction_approval::*;
pub use set_auction_reserve_price::*;
pub use end_auction::*;
pub use cancel_auction::*;
