pub mod artist;
pub mod search;
