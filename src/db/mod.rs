pub mod listingdb;
pub mod seed;
