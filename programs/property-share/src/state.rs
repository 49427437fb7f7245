use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ErrorCode;

/// Record-level operations return the bare error code so the bookkeeping can
/// be exercised without a runtime; instruction handlers convert with `?`.
pub type LedgerResult<T> = core::result::Result<T, ErrorCode>;

/// Singleton platform configuration, threaded into every instruction.
/// The treasury token account PDA is owned by this account.
#[account]
#[derive(InitSpace, Default)]
pub struct Platform {
    pub authority: Pubkey,
    /// Mint all payments are denominated in.
    pub payment_mint: Pubkey,
    pub paused: bool,
    /// Platform fee in basis points, capped at FEE_CAP_BPS.
    pub fee_bps: u16,
    /// Fees collected and not yet withdrawn, held in the treasury.
    pub accumulated_fees: u64,
    /// Global property counter; ids are assigned sequentially from 1.
    pub property_count: u64,
    #[max_len(16)]
    pub verifiers: Vec<Pubkey>,
    pub bump: u8,
    pub treasury_bump: u8,
}

impl Platform {
    pub fn fee_on(&self, amount: u64) -> LedgerResult<u64> {
        amount
            .checked_mul(self.fee_bps as u64)
            .ok_or(ErrorCode::ArithmeticOverflow)?
            .checked_div(BPS_DENOMINATOR)
            .ok_or(ErrorCode::ArithmeticOverflow)
    }

    pub fn set_fee(&mut self, fee_bps: u16) -> LedgerResult<()> {
        if fee_bps > FEE_CAP_BPS {
            return Err(ErrorCode::InvalidParameter);
        }
        self.fee_bps = fee_bps;
        Ok(())
    }

    pub fn ensure_unpaused(&self) -> LedgerResult<()> {
        // Paused and malformed input share one signal.
        if self.paused {
            return Err(ErrorCode::InvalidParameter);
        }
        Ok(())
    }

    pub fn is_verifier(&self, key: &Pubkey) -> bool {
        self.verifiers.contains(key)
    }

    /// Adding a verifier twice is a no-op success.
    pub fn add_verifier(&mut self, key: Pubkey) -> LedgerResult<()> {
        if self.verifiers.contains(&key) {
            return Ok(());
        }
        if self.verifiers.len() >= MAX_VERIFIERS {
            return Err(ErrorCode::InvalidParameter);
        }
        self.verifiers.push(key);
        Ok(())
    }

    /// Removing an unknown verifier is a no-op success.
    pub fn remove_verifier(&mut self, key: &Pubkey) {
        self.verifiers.retain(|v| v != key);
    }

    pub fn next_property_id(&self) -> LedgerResult<u64> {
        self.property_count
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)
    }

    /// Aggregate value of a holder's positions across all properties.
    /// Not yet implemented; always returns 0.
    pub fn portfolio_value(&self, _holder: &Pubkey) -> u64 {
        0
    }
}

/// Rolling per-property statistics, updated by valuations and distributions.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, InitSpace)]
pub struct PropertyStats {
    /// Distinct addresses with a nonzero balance.
    pub total_holders: u64,
    /// Cumulative rental income pushed through distributions.
    pub total_distributed: u64,
    /// Slot of the most recent distribution, 0 before the first.
    pub last_distribution: u64,
    /// Basis points relative to the previous valuation; depreciation
    /// floors to 0.
    pub appreciation_rate: u64,
}

#[account]
#[derive(InitSpace, Default)]
pub struct Property {
    /// Sequential id, starting at 1. Also part of the PDA seeds.
    pub id: u64,
    pub owner: Pubkey,
    #[max_len(64)]
    pub title: String,
    #[max_len(128)]
    pub location: String,
    /// Valuation in the smallest unit of the payment mint.
    pub property_value: u64,
    /// Fixed fractional supply, 1..=MAX_TOKENS_PER_PROPERTY.
    pub total_tokens: u64,
    /// Tokens still held by the registry for primary issuance.
    pub available_tokens: u64,
    pub monthly_rent: u64,
    pub verified: bool,
    /// True iff verified; gates issuance, listing and distribution.
    pub active: bool,
    /// Slot at creation.
    pub created_at: u64,
    /// Per-property sequential counters for child records.
    pub distribution_count: u64,
    pub trade_count: u64,
    pub stats: PropertyStats,
}

impl Property {
    /// Primary issuance price per token, floor of value over supply.
    pub fn unit_price(&self) -> LedgerResult<u64> {
        self.property_value
            .checked_div(self.total_tokens)
            .ok_or(ErrorCode::ArithmeticOverflow)
    }

    pub fn verify(&mut self) -> LedgerResult<()> {
        if self.verified {
            return Err(ErrorCode::AlreadyVerified);
        }
        self.verified = true;
        self.active = true;
        Ok(())
    }

    /// Replaces the valuation and recomputes the appreciation rate in
    /// basis points. Returns the new rate.
    pub fn apply_valuation(&mut self, new_value: u64) -> LedgerResult<u64> {
        if new_value == 0 {
            return Err(ErrorCode::InvalidParameter);
        }
        let old_value = self.property_value;
        let appreciation = if new_value > old_value {
            new_value
                .checked_sub(old_value)
                .ok_or(ErrorCode::ArithmeticOverflow)?
                .checked_mul(BPS_DENOMINATOR)
                .ok_or(ErrorCode::ArithmeticOverflow)?
                .checked_div(old_value)
                .ok_or(ErrorCode::ArithmeticOverflow)?
        } else {
            0
        };
        self.property_value = new_value;
        self.stats.appreciation_rate = appreciation;
        Ok(appreciation)
    }

    /// Moves tokens out of the primary issuance pool.
    pub fn reserve_tokens(&mut self, tokens: u64) -> LedgerResult<()> {
        if tokens > self.available_tokens {
            return Err(ErrorCode::InsufficientTokens);
        }
        self.available_tokens = self
            .available_tokens
            .checked_sub(tokens)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }

    /// Records a new distribution snapshot and returns
    /// (distribution id, per-token amount).
    pub fn record_distribution(&mut self, amount: u64, slot: u64) -> LedgerResult<(u64, u64)> {
        let id = self
            .distribution_count
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        let per_token = amount
            .checked_div(self.total_tokens)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.distribution_count = id;
        self.stats.total_distributed = self
            .stats
            .total_distributed
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.stats.last_distribution = slot;
        Ok((id, per_token))
    }

    pub fn record_trade(&mut self) -> LedgerResult<u64> {
        let id = self
            .trade_count
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.trade_count = id;
        Ok(id)
    }

    /// Ownership in basis points, floored. A missing holding, a drained
    /// holding and an unknown property all surface the same generic error.
    pub fn ownership_bps(&self, holding: Option<&Holding>) -> LedgerResult<u64> {
        let holding = holding.ok_or(ErrorCode::InvalidParameter)?;
        if holding.tokens == 0 {
            return Err(ErrorCode::InvalidParameter);
        }
        holding
            .tokens
            .checked_mul(BPS_DENOMINATOR)
            .ok_or(ErrorCode::ArithmeticOverflow)?
            .checked_div(self.total_tokens)
            .ok_or(ErrorCode::ArithmeticOverflow)
    }

    pub fn holder_gained(&mut self) -> LedgerResult<()> {
        self.stats.total_holders = self
            .stats
            .total_holders
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn holder_lost(&mut self) -> LedgerResult<()> {
        self.stats.total_holders = self
            .stats
            .total_holders
            .checked_sub(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }
}

/// Per-(property, holder) balance and cost basis.
#[account]
#[derive(InitSpace, Default)]
pub struct Holding {
    pub property: Pubkey,
    pub holder: Pubkey,
    pub tokens: u64,
    /// Cumulative acquisition cost. Grows with every purchase, untouched
    /// by sales.
    pub purchase_price: u64,
    /// Slot of the most recent acquisition.
    pub acquired_at: u64,
}

impl Holding {
    pub fn credit(&mut self, tokens: u64, cost: u64, slot: u64) -> LedgerResult<()> {
        self.tokens = self
            .tokens
            .checked_add(tokens)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.purchase_price = self
            .purchase_price
            .checked_add(cost)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.acquired_at = slot;
        Ok(())
    }

    pub fn debit(&mut self, tokens: u64) -> LedgerResult<()> {
        if tokens > self.tokens {
            return Err(ErrorCode::InsufficientTokens);
        }
        self.tokens = self
            .tokens
            .checked_sub(tokens)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }
}

/// One rental income snapshot. Claims pull from it exactly once per holder.
#[account]
#[derive(InitSpace, Default)]
pub struct Distribution {
    pub property: Pubkey,
    /// Sequential per property, starting at 1.
    pub id: u64,
    pub total_amount: u64,
    /// floor(total_amount / total_tokens) at distribution time.
    pub per_token_amount: u64,
    /// Slot of the distribution.
    pub distribution_date: u64,
    /// Sum of all claims so far; never exceeds total_amount.
    pub claimed_amount: u64,
}

impl Distribution {
    /// Payout owed to a balance of `tokens` at claim time.
    pub fn payout_for(&self, tokens: u64) -> LedgerResult<u64> {
        tokens
            .checked_mul(self.per_token_amount)
            .ok_or(ErrorCode::ArithmeticOverflow)
    }

    /// Read-only would-be claim; 0 once the holder has claimed.
    pub fn claimable(&self, tokens: u64, existing: Option<&Claim>) -> u64 {
        if existing.is_some() {
            return 0;
        }
        tokens.saturating_mul(self.per_token_amount)
    }

    pub fn register_claim(&mut self, amount: u64) -> LedgerResult<()> {
        let claimed = self
            .claimed_amount
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        if claimed > self.total_amount {
            return Err(ErrorCode::InvalidParameter);
        }
        self.claimed_amount = claimed;
        Ok(())
    }
}

/// Exactly-once receipt for a (distribution, holder) claim. Existence of
/// the record is the guard.
#[account]
#[derive(InitSpace, Default)]
pub struct Claim {
    pub property: Pubkey,
    pub distribution_id: u64,
    pub holder: Pubkey,
    pub amount: u64,
    pub claimed_at: u64,
}

/// Sell order for fractional tokens; at most one active per
/// (property, seller). Deactivated records are kept as history.
#[account]
#[derive(InitSpace, Default)]
pub struct Listing {
    pub property: Pubkey,
    pub seller: Pubkey,
    pub tokens_for_sale: u64,
    pub price_per_token: u64,
    /// Slot at listing time.
    pub listed_at: u64,
    pub active: bool,
}

impl Listing {
    /// Fills `tokens` against the listing, deactivating it when drained.
    pub fn fill(&mut self, tokens: u64) -> LedgerResult<()> {
        if !self.active || tokens == 0 {
            return Err(ErrorCode::InvalidParameter);
        }
        if tokens > self.tokens_for_sale {
            return Err(ErrorCode::InsufficientTokens);
        }
        self.tokens_for_sale = self
            .tokens_for_sale
            .checked_sub(tokens)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        if self.tokens_for_sale == 0 {
            self.active = false;
        }
        Ok(())
    }
}

/// Append-only record of a matched secondary-market fill.
#[account]
#[derive(InitSpace, Default)]
pub struct Trade {
    pub property: Pubkey,
    /// Sequential per property, starting at 1.
    pub id: u64,
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub tokens: u64,
    pub price_per_token: u64,
    pub total_amount: u64,
    /// Slot of the trade.
    pub traded_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform_with_fee(fee_bps: u16) -> Platform {
        Platform {
            authority: Pubkey::new_unique(),
            payment_mint: Pubkey::new_unique(),
            fee_bps,
            ..Platform::default()
        }
    }

    fn property(value: u64, total_tokens: u64) -> Property {
        Property {
            id: 1,
            owner: Pubkey::new_unique(),
            title: "Test Property".to_string(),
            location: "Test Location".to_string(),
            property_value: value,
            total_tokens,
            available_tokens: total_tokens,
            monthly_rent: 10_000_000,
            ..Property::default()
        }
    }

    #[test]
    fn fee_is_floored_basis_points() {
        let platform = platform_with_fee(200);
        assert_eq!(platform.fee_on(100_000_000).unwrap(), 2_000_000);
        assert_eq!(platform.fee_on(49).unwrap(), 0);
    }

    #[test]
    fn zero_fee_rate_charges_nothing() {
        let platform = platform_with_fee(0);
        assert_eq!(platform.fee_on(u64::MAX / 2).unwrap(), 0);
    }

    #[test]
    fn fee_above_cap_is_rejected() {
        let mut platform = platform_with_fee(250);
        assert!(matches!(
            platform.set_fee(1_100),
            Err(ErrorCode::InvalidParameter)
        ));
        assert_eq!(platform.fee_bps, 250);
        platform.set_fee(1_000).unwrap();
        assert_eq!(platform.fee_bps, 1_000);
    }

    #[test]
    fn verifier_roster_add_remove() {
        let mut platform = platform_with_fee(250);
        let verifier = Pubkey::new_unique();
        assert!(!platform.is_verifier(&verifier));
        platform.add_verifier(verifier).unwrap();
        assert!(platform.is_verifier(&verifier));
        // Duplicate add is a no-op, not an error.
        platform.add_verifier(verifier).unwrap();
        assert_eq!(platform.verifiers.len(), 1);
        platform.remove_verifier(&verifier);
        assert!(!platform.is_verifier(&verifier));
        // Removing again is also a no-op.
        platform.remove_verifier(&verifier);
    }

    #[test]
    fn verifier_roster_is_bounded() {
        let mut platform = platform_with_fee(250);
        for _ in 0..MAX_VERIFIERS {
            platform.add_verifier(Pubkey::new_unique()).unwrap();
        }
        assert!(matches!(
            platform.add_verifier(Pubkey::new_unique()),
            Err(ErrorCode::InvalidParameter)
        ));
    }

    #[test]
    fn pause_uses_the_generic_signal() {
        let mut platform = platform_with_fee(250);
        platform.ensure_unpaused().unwrap();
        platform.paused = true;
        assert!(matches!(
            platform.ensure_unpaused(),
            Err(ErrorCode::InvalidParameter)
        ));
    }

    #[test]
    fn portfolio_value_is_a_stub() {
        let platform = platform_with_fee(250);
        assert_eq!(platform.portfolio_value(&Pubkey::new_unique()), 0);
    }

    #[test]
    fn verify_transitions_once() {
        let mut prop = property(1_000_000_000, 1_000);
        assert!(!prop.active);
        prop.verify().unwrap();
        assert!(prop.verified);
        assert!(prop.active);
        assert!(matches!(prop.verify(), Err(ErrorCode::AlreadyVerified)));
    }

    #[test]
    fn appreciation_rate_in_basis_points() {
        let mut prop = property(1_000_000_000, 1_000);
        let rate = prop.apply_valuation(1_500_000_000).unwrap();
        assert_eq!(rate, 5_000);
        assert_eq!(prop.property_value, 1_500_000_000);
        assert_eq!(prop.stats.appreciation_rate, 5_000);
    }

    #[test]
    fn depreciation_floors_to_zero() {
        let mut prop = property(1_000_000_000, 1_000);
        prop.apply_valuation(1_500_000_000).unwrap();
        let rate = prop.apply_valuation(800_000_000).unwrap();
        assert_eq!(rate, 0);
        assert_eq!(prop.property_value, 800_000_000);
        assert_eq!(prop.stats.appreciation_rate, 0);
    }

    #[test]
    fn zero_valuation_is_rejected() {
        let mut prop = property(1_000_000_000, 1_000);
        assert!(matches!(
            prop.apply_valuation(0),
            Err(ErrorCode::InvalidParameter)
        ));
        assert_eq!(prop.property_value, 1_000_000_000);
    }

    #[test]
    fn unit_price_is_floored() {
        let prop = property(2_000_000_000, 2_000);
        assert_eq!(prop.unit_price().unwrap(), 1_000_000);
        let odd = property(1_000_000_001, 1_000);
        assert_eq!(odd.unit_price().unwrap(), 1_000_000);
    }

    #[test]
    fn reserve_beyond_available_fails_without_mutation() {
        let mut prop = property(1_000_000_000, 1_000);
        prop.reserve_tokens(400).unwrap();
        assert_eq!(prop.available_tokens, 600);
        assert!(matches!(
            prop.reserve_tokens(601),
            Err(ErrorCode::InsufficientTokens)
        ));
        assert_eq!(prop.available_tokens, 600);
    }

    #[test]
    fn holding_credit_accumulates_cost_basis() {
        let mut holding = Holding::default();
        holding.credit(250, 250_000_000, 10).unwrap();
        holding.credit(50, 60_000_000, 20).unwrap();
        assert_eq!(holding.tokens, 300);
        assert_eq!(holding.purchase_price, 310_000_000);
        assert_eq!(holding.acquired_at, 20);
    }

    #[test]
    fn holding_debit_keeps_cost_basis() {
        let mut holding = Holding::default();
        holding.credit(300, 300_000_000, 10).unwrap();
        holding.debit(100).unwrap();
        assert_eq!(holding.tokens, 200);
        assert_eq!(holding.purchase_price, 300_000_000);
        assert_eq!(holding.acquired_at, 10);
    }

    #[test]
    fn holding_overdraw_fails_without_mutation() {
        let mut holding = Holding::default();
        holding.credit(100, 100, 1).unwrap();
        assert!(matches!(
            holding.debit(101),
            Err(ErrorCode::InsufficientTokens)
        ));
        assert_eq!(holding.tokens, 100);
    }

    #[test]
    fn ownership_percentage_floors() {
        let prop = property(1_000_000_000, 1_000);
        let holding = Holding {
            tokens: 250,
            ..Holding::default()
        };
        assert_eq!(prop.ownership_bps(Some(&holding)).unwrap(), 2_500);

        let prop = property(1_000_000_000, 2_000);
        let holding = Holding {
            tokens: 33,
            ..Holding::default()
        };
        assert_eq!(prop.ownership_bps(Some(&holding)).unwrap(), 165);
    }

    #[test]
    fn ownership_percentage_without_holding_is_generic_error() {
        let prop = property(1_000_000_000, 1_000);
        assert!(matches!(
            prop.ownership_bps(None),
            Err(ErrorCode::InvalidParameter)
        ));
        // A drained holding is not distinguished from a missing one.
        let drained = Holding::default();
        assert!(matches!(
            prop.ownership_bps(Some(&drained)),
            Err(ErrorCode::InvalidParameter)
        ));
    }

    #[test]
    fn distribution_snapshot_math() {
        let mut prop = property(1_000_000_000, 1_000);
        let (id, per_token) = prop.record_distribution(20_000_000, 99).unwrap();
        assert_eq!(id, 1);
        assert_eq!(per_token, 20_000);
        assert_eq!(prop.stats.total_distributed, 20_000_000);
        assert_eq!(prop.stats.last_distribution, 99);

        let (id, _) = prop.record_distribution(5_000_000, 120).unwrap();
        assert_eq!(id, 2);
        assert_eq!(prop.stats.total_distributed, 25_000_000);
    }

    #[test]
    fn payout_follows_balance_at_claim_time() {
        let dist = Distribution {
            total_amount: 20_000_000,
            per_token_amount: 20_000,
            ..Distribution::default()
        };
        assert_eq!(dist.payout_for(250).unwrap(), 5_000_000);
        assert_eq!(dist.payout_for(0).unwrap(), 0);
    }

    #[test]
    fn claimable_is_zero_after_claim() {
        let dist = Distribution {
            total_amount: 20_000_000,
            per_token_amount: 20_000,
            ..Distribution::default()
        };
        assert_eq!(dist.claimable(250, None), 5_000_000);
        let receipt = Claim {
            amount: 5_000_000,
            ..Claim::default()
        };
        assert_eq!(dist.claimable(250, Some(&receipt)), 0);
    }

    #[test]
    fn claims_never_exceed_the_pot() {
        let mut dist = Distribution {
            total_amount: 1_000,
            per_token_amount: 1,
            ..Distribution::default()
        };
        dist.register_claim(600).unwrap();
        dist.register_claim(400).unwrap();
        assert_eq!(dist.claimed_amount, 1_000);
        assert!(matches!(
            dist.register_claim(1),
            Err(ErrorCode::InvalidParameter)
        ));
    }

    #[test]
    fn listing_fill_deactivates_when_drained() {
        let mut listing = Listing {
            tokens_for_sale: 200,
            price_per_token: 500_000,
            active: true,
            ..Listing::default()
        };
        listing.fill(50).unwrap();
        assert_eq!(listing.tokens_for_sale, 150);
        assert!(listing.active);
        listing.fill(150).unwrap();
        assert_eq!(listing.tokens_for_sale, 0);
        assert!(!listing.active);
    }

    #[test]
    fn listing_overfill_and_inactive_fill_fail() {
        let mut listing = Listing {
            tokens_for_sale: 100,
            price_per_token: 500_000,
            active: true,
            ..Listing::default()
        };
        assert!(matches!(
            listing.fill(101),
            Err(ErrorCode::InsufficientTokens)
        ));
        listing.active = false;
        assert!(matches!(listing.fill(10), Err(ErrorCode::InvalidParameter)));
    }

    #[test]
    fn holder_count_transitions() {
        let mut prop = property(1_000_000_000, 1_000);
        prop.holder_gained().unwrap();
        prop.holder_gained().unwrap();
        assert_eq!(prop.stats.total_holders, 2);
        prop.holder_lost().unwrap();
        assert_eq!(prop.stats.total_holders, 1);
    }
}
