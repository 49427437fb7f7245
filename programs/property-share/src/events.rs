use anchor_lang::prelude::*;

#[event]
pub struct PlatformInitialized {
    pub platform: Pubkey,
    pub authority: Pubkey,
    pub payment_mint: Pubkey,
    pub fee_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct VerifierAdded {
    pub platform: Pubkey,
    pub verifier: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VerifierRemoved {
    pub platform: Pubkey,
    pub verifier: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PlatformFeeUpdated {
    pub platform: Pubkey,
    pub fee_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct PauseToggled {
    pub platform: Pubkey,
    pub paused: bool,
    pub timestamp: i64,
}

#[event]
pub struct FeesWithdrawn {
    pub platform: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct PropertyCreated {
    pub property: Pubkey,
    pub property_id: u64,
    pub owner: Pubkey,
    pub property_value: u64,
    pub total_tokens: u64,
    pub monthly_rent: u64,
    pub timestamp: i64,
}

#[event]
pub struct PropertyVerified {
    pub property: Pubkey,
    pub property_id: u64,
    pub verifier: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PropertyValueUpdated {
    pub property: Pubkey,
    pub property_id: u64,
    pub old_value: u64,
    pub new_value: u64,
    pub appreciation_bps: u64,
    pub timestamp: i64,
}

#[event]
pub struct TokensPurchased {
    pub property: Pubkey,
    pub property_id: u64,
    pub buyer: Pubkey,
    pub tokens: u64,
    pub base_cost: u64,
    pub fee: u64,
    pub timestamp: i64,
}

#[event]
pub struct IncomeDistributed {
    pub property: Pubkey,
    pub property_id: u64,
    pub distribution_id: u64,
    pub total_amount: u64,
    pub per_token_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct IncomeClaimed {
    pub property: Pubkey,
    pub distribution_id: u64,
    pub claimant: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct TokensListed {
    pub property: Pubkey,
    pub property_id: u64,
    pub seller: Pubkey,
    pub tokens: u64,
    pub price_per_token: u64,
    pub timestamp: i64,
}

#[event]
pub struct ListingCancelled {
    pub property: Pubkey,
    pub property_id: u64,
    pub seller: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct TokensSold {
    pub property: Pubkey,
    pub property_id: u64,
    pub trade_id: u64,
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub tokens: u64,
    pub total_amount: u64,
    pub fee: u64,
    pub timestamp: i64,
}

#[event]
pub struct ListingDelisted {
    pub property: Pubkey,
    pub property_id: u64,
    pub seller: Pubkey,
    pub authority: Pubkey,
    pub timestamp: i64,
}
