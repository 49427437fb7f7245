pub const PLATFORM_SEED: &[u8] = b"platform";
pub const TREASURY_SEED: &[u8] = b"treasury";
pub const PROPERTY_SEED: &[u8] = b"property";
pub const HOLDING_SEED: &[u8] = b"holding";
pub const LISTING_SEED: &[u8] = b"listing";
pub const DISTRIBUTION_SEED: &[u8] = b"distribution";
pub const CLAIM_SEED: &[u8] = b"claim";
pub const TRADE_SEED: &[u8] = b"trade";

pub const BPS_DENOMINATOR: u64 = 10_000;

/// Platform fee is capped at 10%.
pub const FEE_CAP_BPS: u16 = 1_000;

/// A property is fractionalized into at most 10,000 tokens.
pub const MAX_TOKENS_PER_PROPERTY: u64 = 10_000;

pub const MAX_TITLE_LEN: usize = 64;
pub const MAX_LOCATION_LEN: usize = 128;
pub const MAX_VERIFIERS: usize = 16;
