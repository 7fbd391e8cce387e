mod auction_test;
mod helpers;
mod user_test;
