pub mod fund;
pub mod initialize;
pub mod initialize_price_feed;
pub mod update_price;
pub mod withdraw;

pub use fund::*;
pub use initialize::*;
pub use initialize_price_feed::*;
pub use update_price::*;
pub use withdraw::*;
