pub mod company;
pub mod enriched;
pub mod listing;
