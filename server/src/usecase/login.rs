use crate::domain::repository::{AuctionRepository, BidRepository, UserRepository};
use crate::error::MarketError;
use crate::usecase::user::{UserRecord, load_user_record};

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginUseCase<U, A, B> {
    pub users: U,
    pub auctions: A,
    pub bids: B,
}

impl<U: UserRepository, A: AuctionRepository, B: BidRepository> LoginUseCase<U, A, B> {
    /// Plaintext credential check. An unknown username and a wrong password
    /// produce the same error, and a NULLed-out stored password never
    /// matches.
    pub async fn execute(&self, username: &str, password: &str) -> Result<UserRecord, MarketError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(MarketError::InvalidCredentials)?;
        if user.password.as_deref() != Some(password) {
            return Err(MarketError::InvalidCredentials);
        }
        load_user_record(user, &self.auctions, &self.bids).await
    }
}
