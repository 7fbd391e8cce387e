pub mod auction;
pub mod bid;
pub mod login;
pub mod user;
