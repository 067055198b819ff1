pub mod auction_house;
pub mod vault;

pub use auction_house::AuctionHouse;
pub use vault::Vault;
