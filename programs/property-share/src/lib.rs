#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

pub mod constants;
pub mod errors;
pub mod events;
pub mod state;

use constants::*;
use errors::ErrorCode;
use events::*;
use state::*;

declare_id!("EcPni58apii69R7PstXNThzv44dTYdrpEV1HzkjT3DbE");

#[program]
pub mod property_share {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, fee_bps: u16) -> Result<()> {
        require!(fee_bps <= FEE_CAP_BPS, ErrorCode::InvalidParameter);

        let clock = Clock::get()?;
        let platform = &mut ctx.accounts.platform;
        platform.authority = ctx.accounts.authority.key();
        platform.payment_mint = ctx.accounts.payment_mint.key();
        platform.paused = false;
        platform.fee_bps = fee_bps;
        platform.accumulated_fees = 0;
        platform.property_count = 0;
        platform.verifiers = Vec::new();
        platform.bump = ctx.bumps.platform;
        platform.treasury_bump = ctx.bumps.treasury;

        emit!(PlatformInitialized {
            platform: platform.key(),
            authority: platform.authority,
            payment_mint: platform.payment_mint,
            fee_bps,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn add_verifier(ctx: Context<AdminUpdate>, verifier: Pubkey) -> Result<()> {
        let clock = Clock::get()?;
        let platform = &mut ctx.accounts.platform;
        require!(
            platform.authority == ctx.accounts.authority.key(),
            ErrorCode::OwnerOnly
        );

        platform.add_verifier(verifier)?;

        emit!(VerifierAdded {
            platform: platform.key(),
            verifier,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn remove_verifier(ctx: Context<AdminUpdate>, verifier: Pubkey) -> Result<()> {
        let clock = Clock::get()?;
        let platform = &mut ctx.accounts.platform;
        require!(
            platform.authority == ctx.accounts.authority.key(),
            ErrorCode::OwnerOnly
        );

        platform.remove_verifier(&verifier);

        emit!(VerifierRemoved {
            platform: platform.key(),
            verifier,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn set_platform_fee(ctx: Context<AdminUpdate>, fee_bps: u16) -> Result<()> {
        let clock = Clock::get()?;
        let platform = &mut ctx.accounts.platform;
        require!(
            platform.authority == ctx.accounts.authority.key(),
            ErrorCode::OwnerOnly
        );

        platform.set_fee(fee_bps)?;

        emit!(PlatformFeeUpdated {
            platform: platform.key(),
            fee_bps,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn toggle_pause(ctx: Context<AdminUpdate>) -> Result<()> {
        let clock = Clock::get()?;
        let platform = &mut ctx.accounts.platform;
        require!(
            platform.authority == ctx.accounts.authority.key(),
            ErrorCode::OwnerOnly
        );

        platform.paused = !platform.paused;

        emit!(PauseToggled {
            platform: platform.key(),
            paused: platform.paused,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Sweeps the whole accumulated fee pot to the platform owner.
    pub fn withdraw_platform_fees(ctx: Context<WithdrawFees>) -> Result<()> {
        let clock = Clock::get()?;
        require!(
            ctx.accounts.platform.authority == ctx.accounts.authority.key(),
            ErrorCode::OwnerOnly
        );
        require!(
            ctx.accounts.authority_token_account.mint == ctx.accounts.platform.payment_mint,
            ErrorCode::InvalidParameter
        );

        let amount = ctx.accounts.platform.accumulated_fees;
        let bump = ctx.accounts.platform.bump;
        let signer_seeds: &[&[&[u8]]] = &[&[PLATFORM_SEED, &[bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.treasury.to_account_info(),
                    to: ctx.accounts.authority_token_account.to_account_info(),
                    authority: ctx.accounts.platform.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;

        let platform = &mut ctx.accounts.platform;
        platform.accumulated_fees = 0;

        emit!(FeesWithdrawn {
            platform: platform.key(),
            authority: ctx.accounts.authority.key(),
            amount,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn create_property(
        ctx: Context<CreateProperty>,
        title: String,
        location: String,
        property_value: u64,
        total_tokens: u64,
        monthly_rent: u64,
    ) -> Result<u64> {
        ctx.accounts.platform.ensure_unpaused()?;
        require!(title.len() <= MAX_TITLE_LEN, ErrorCode::InvalidParameter);
        require!(location.len() <= MAX_LOCATION_LEN, ErrorCode::InvalidParameter);
        require!(property_value > 0, ErrorCode::InvalidParameter);
        require!(total_tokens > 0, ErrorCode::InvalidParameter);
        require!(
            total_tokens <= MAX_TOKENS_PER_PROPERTY,
            ErrorCode::InvalidParameter
        );

        let clock = Clock::get()?;
        let platform = &mut ctx.accounts.platform;
        let property = &mut ctx.accounts.property;
        let id = platform.next_property_id()?;

        property.id = id;
        property.owner = ctx.accounts.owner.key();
        property.title = title;
        property.location = location;
        property.property_value = property_value;
        property.total_tokens = total_tokens;
        property.available_tokens = total_tokens;
        property.monthly_rent = monthly_rent;
        property.verified = false;
        property.active = false;
        property.created_at = clock.slot;
        property.distribution_count = 0;
        property.trade_count = 0;
        property.stats = PropertyStats::default();

        platform.property_count = id;

        emit!(PropertyCreated {
            property: property.key(),
            property_id: id,
            owner: property.owner,
            property_value,
            total_tokens,
            monthly_rent,
            timestamp: clock.unix_timestamp,
        });

        Ok(id)
    }

    pub fn verify_property(ctx: Context<VerifierAction>) -> Result<()> {
        let clock = Clock::get()?;
        require!(
            ctx.accounts
                .platform
                .is_verifier(&ctx.accounts.verifier.key()),
            ErrorCode::NotAuthorized
        );

        let property = &mut ctx.accounts.property;
        property.verify()?;

        emit!(PropertyVerified {
            property: property.key(),
            property_id: property.id,
            verifier: ctx.accounts.verifier.key(),
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn update_property_value(ctx: Context<VerifierAction>, new_value: u64) -> Result<()> {
        let clock = Clock::get()?;
        require!(
            ctx.accounts
                .platform
                .is_verifier(&ctx.accounts.verifier.key()),
            ErrorCode::NotAuthorized
        );

        let property = &mut ctx.accounts.property;
        let old_value = property.property_value;
        let appreciation_bps = property.apply_valuation(new_value)?;

        emit!(PropertyValueUpdated {
            property: property.key(),
            property_id: property.id,
            old_value,
            new_value,
            appreciation_bps,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Primary issuance: sells tokens out of the registry's available pool
    /// at the registry-derived unit price.
    pub fn purchase_tokens(ctx: Context<PurchaseTokens>, tokens: u64) -> Result<()> {
        let clock = Clock::get()?;
        ctx.accounts.platform.ensure_unpaused()?;
        require!(ctx.accounts.property.active, ErrorCode::NotVerified);
        require!(tokens > 0, ErrorCode::InvalidParameter);
        require!(
            tokens <= ctx.accounts.property.available_tokens,
            ErrorCode::InsufficientTokens
        );
        require!(
            ctx.accounts.buyer_token_account.mint == ctx.accounts.platform.payment_mint,
            ErrorCode::InvalidParameter
        );
        require!(
            ctx.accounts.owner_token_account.mint == ctx.accounts.platform.payment_mint,
            ErrorCode::InvalidParameter
        );
        require!(
            ctx.accounts.owner_token_account.owner == ctx.accounts.property.owner,
            ErrorCode::InvalidParameter
        );

        let unit_price = ctx.accounts.property.unit_price()?;
        let base_cost = tokens
            .checked_mul(unit_price)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        let fee = ctx.accounts.platform.fee_on(base_cost)?;

        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.buyer_token_account.to_account_info(),
                    to: ctx.accounts.owner_token_account.to_account_info(),
                    authority: ctx.accounts.buyer.to_account_info(),
                },
            ),
            base_cost,
        )?;

        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.buyer_token_account.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                    authority: ctx.accounts.buyer.to_account_info(),
                },
            ),
            fee,
        )?;

        let property = &mut ctx.accounts.property;
        let holding = &mut ctx.accounts.holding;

        property.reserve_tokens(tokens)?;
        if holding.holder == Pubkey::default() {
            holding.property = property.key();
            holding.holder = ctx.accounts.buyer.key();
        }
        if holding.tokens == 0 {
            property.holder_gained()?;
        }
        holding.credit(tokens, base_cost, clock.slot)?;

        let platform = &mut ctx.accounts.platform;
        platform.accumulated_fees = platform
            .accumulated_fees
            .checked_add(fee)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        emit!(TokensPurchased {
            property: property.key(),
            property_id: property.id,
            buyer: ctx.accounts.buyer.key(),
            tokens,
            base_cost,
            fee,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Property owner pushes a lump sum of rental income into the treasury;
    /// holders pull their share through `claim_income`.
    pub fn distribute_income(ctx: Context<DistributeIncome>, amount: u64) -> Result<()> {
        let clock = Clock::get()?;
        ctx.accounts.platform.ensure_unpaused()?;
        require!(
            ctx.accounts.property.owner == ctx.accounts.owner.key(),
            ErrorCode::NotAuthorized
        );
        require!(ctx.accounts.property.active, ErrorCode::NotVerified);
        require!(amount > 0, ErrorCode::InvalidParameter);
        require!(
            ctx.accounts.owner_token_account.mint == ctx.accounts.platform.payment_mint,
            ErrorCode::InvalidParameter
        );

        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.owner_token_account.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                    authority: ctx.accounts.owner.to_account_info(),
                },
            ),
            amount,
        )?;

        let property = &mut ctx.accounts.property;
        let (id, per_token) = property.record_distribution(amount, clock.slot)?;

        let distribution = &mut ctx.accounts.distribution;
        distribution.property = property.key();
        distribution.id = id;
        distribution.total_amount = amount;
        distribution.per_token_amount = per_token;
        distribution.distribution_date = clock.slot;
        distribution.claimed_amount = 0;

        emit!(IncomeDistributed {
            property: property.key(),
            property_id: property.id,
            distribution_id: id,
            total_amount: amount,
            per_token_amount: per_token,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Pays out the caller's share of a distribution, computed from the
    /// balance held at claim time. The claim receipt account makes a second
    /// claim impossible.
    pub fn claim_income(ctx: Context<ClaimIncome>) -> Result<()> {
        let clock = Clock::get()?;
        ctx.accounts.platform.ensure_unpaused()?;
        require!(
            ctx.accounts.distribution.property == ctx.accounts.property.key(),
            ErrorCode::InvalidParameter
        );
        require!(
            ctx.accounts.claimant_token_account.mint == ctx.accounts.platform.payment_mint,
            ErrorCode::InvalidParameter
        );

        let balance = ctx
            .accounts
            .holding
            .as_ref()
            .map(|h| h.tokens)
            .unwrap_or(0);
        require!(balance > 0, ErrorCode::InsufficientTokens);

        let amount = ctx.accounts.distribution.payout_for(balance)?;

        let bump = ctx.accounts.platform.bump;
        let signer_seeds: &[&[&[u8]]] = &[&[PLATFORM_SEED, &[bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.treasury.to_account_info(),
                    to: ctx.accounts.claimant_token_account.to_account_info(),
                    authority: ctx.accounts.platform.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;

        let distribution = &mut ctx.accounts.distribution;
        distribution.register_claim(amount)?;

        let claim = &mut ctx.accounts.claim;
        claim.property = ctx.accounts.property.key();
        claim.distribution_id = distribution.id;
        claim.holder = ctx.accounts.claimant.key();
        claim.amount = amount;
        claim.claimed_at = clock.slot;

        emit!(IncomeClaimed {
            property: ctx.accounts.property.key(),
            distribution_id: distribution.id,
            claimant: ctx.accounts.claimant.key(),
            amount,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn list_tokens(ctx: Context<ListTokens>, tokens: u64, price_per_token: u64) -> Result<()> {
        let clock = Clock::get()?;
        ctx.accounts.platform.ensure_unpaused()?;
        require!(ctx.accounts.property.active, ErrorCode::NotVerified);
        require!(tokens > 0, ErrorCode::InvalidParameter);
        require!(price_per_token > 0, ErrorCode::InvalidParameter);
        require!(!ctx.accounts.listing.active, ErrorCode::InvalidParameter);

        let balance = ctx
            .accounts
            .holding
            .as_ref()
            .map(|h| h.tokens)
            .unwrap_or(0);
        require!(tokens <= balance, ErrorCode::InsufficientTokens);

        let listing = &mut ctx.accounts.listing;
        listing.property = ctx.accounts.property.key();
        listing.seller = ctx.accounts.seller.key();
        listing.tokens_for_sale = tokens;
        listing.price_per_token = price_per_token;
        listing.listed_at = clock.slot;
        listing.active = true;

        emit!(TokensListed {
            property: ctx.accounts.property.key(),
            property_id: ctx.accounts.property.id,
            seller: listing.seller,
            tokens,
            price_per_token,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn cancel_listing(ctx: Context<CancelListing>) -> Result<()> {
        let clock = Clock::get()?;
        ctx.accounts.platform.ensure_unpaused()?;
        require!(ctx.accounts.listing.active, ErrorCode::InvalidParameter);

        let listing = &mut ctx.accounts.listing;
        listing.active = false;

        emit!(ListingCancelled {
            property: ctx.accounts.property.key(),
            property_id: ctx.accounts.property.id,
            seller: ctx.accounts.seller.key(),
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Matched buy against an active listing. Moves tokens between holdings,
    /// pays the seller minus the platform fee and appends a trade record.
    pub fn buy_tokens(ctx: Context<BuyTokens>, tokens: u64) -> Result<u64> {
        let clock = Clock::get()?;
        ctx.accounts.platform.ensure_unpaused()?;
        require!(tokens > 0, ErrorCode::InvalidParameter);
        require!(
            ctx.accounts.buyer.key() != ctx.accounts.seller.key(),
            ErrorCode::InvalidParameter
        );
        require!(ctx.accounts.listing.active, ErrorCode::InvalidParameter);
        require!(
            tokens <= ctx.accounts.listing.tokens_for_sale,
            ErrorCode::InsufficientTokens
        );
        require!(
            ctx.accounts.buyer_token_account.mint == ctx.accounts.platform.payment_mint,
            ErrorCode::InvalidParameter
        );
        require!(
            ctx.accounts.seller_token_account.mint == ctx.accounts.platform.payment_mint,
            ErrorCode::InvalidParameter
        );
        require!(
            ctx.accounts.seller_token_account.owner == ctx.accounts.seller.key(),
            ErrorCode::InvalidParameter
        );

        let total = tokens
            .checked_mul(ctx.accounts.listing.price_per_token)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        let fee = ctx.accounts.platform.fee_on(total)?;
        let seller_proceeds = total
            .checked_sub(fee)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.buyer_token_account.to_account_info(),
                    to: ctx.accounts.seller_token_account.to_account_info(),
                    authority: ctx.accounts.buyer.to_account_info(),
                },
            ),
            seller_proceeds,
        )?;

        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.buyer_token_account.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                    authority: ctx.accounts.buyer.to_account_info(),
                },
            ),
            fee,
        )?;

        let property = &mut ctx.accounts.property;
        let listing = &mut ctx.accounts.listing;
        let seller_holding = &mut ctx.accounts.seller_holding;
        let buyer_holding = &mut ctx.accounts.buyer_holding;

        seller_holding.debit(tokens)?;
        if seller_holding.tokens == 0 {
            property.holder_lost()?;
        }

        if buyer_holding.holder == Pubkey::default() {
            buyer_holding.property = property.key();
            buyer_holding.holder = ctx.accounts.buyer.key();
        }
        if buyer_holding.tokens == 0 {
            property.holder_gained()?;
        }
        // Cost basis grows by the gross trade total, matching primary
        // issuance accounting.
        buyer_holding.credit(tokens, total, clock.slot)?;

        listing.fill(tokens)?;
        let trade_id = property.record_trade()?;

        let trade = &mut ctx.accounts.trade;
        trade.property = property.key();
        trade.id = trade_id;
        trade.seller = ctx.accounts.seller.key();
        trade.buyer = ctx.accounts.buyer.key();
        trade.tokens = tokens;
        trade.price_per_token = listing.price_per_token;
        trade.total_amount = total;
        trade.traded_at = clock.slot;

        let platform = &mut ctx.accounts.platform;
        platform.accumulated_fees = platform
            .accumulated_fees
            .checked_add(fee)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        emit!(TokensSold {
            property: property.key(),
            property_id: property.id,
            trade_id,
            seller: ctx.accounts.seller.key(),
            buyer: ctx.accounts.buyer.key(),
            tokens,
            total_amount: total,
            fee,
            timestamp: clock.unix_timestamp,
        });

        Ok(trade_id)
    }

    /// Owner-only kill switch for a listing, usable regardless of state.
    pub fn emergency_delist(ctx: Context<EmergencyDelist>) -> Result<()> {
        let clock = Clock::get()?;
        require!(
            ctx.accounts.platform.authority == ctx.accounts.authority.key(),
            ErrorCode::OwnerOnly
        );

        let listing = &mut ctx.accounts.listing;
        listing.active = false;

        emit!(ListingDelisted {
            property: ctx.accounts.property.key(),
            property_id: ctx.accounts.property.id,
            seller: ctx.accounts.seller.key(),
            authority: ctx.accounts.authority.key(),
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Platform::INIT_SPACE,
        seeds = [PLATFORM_SEED],
        bump
    )]
    pub platform: Account<'info, Platform>,
    pub payment_mint: Account<'info, Mint>,
    #[account(
        init,
        payer = authority,
        seeds = [TREASURY_SEED],
        bump,
        token::mint = payment_mint,
        token::authority = platform
    )]
    pub treasury: Account<'info, TokenAccount>,
    #[account(mut)]
    pub authority: Signer<'info>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct AdminUpdate<'info> {
    #[account(mut, seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
    pub authority: Signer<'info>,
}

#[derive(Accounts)]
pub struct WithdrawFees<'info> {
    #[account(mut, seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
    #[account(mut, seeds = [TREASURY_SEED], bump = platform.treasury_bump)]
    pub treasury: Account<'info, TokenAccount>,
    #[account(mut)]
    pub authority_token_account: Account<'info, TokenAccount>,
    pub authority: Signer<'info>,
    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct CreateProperty<'info> {
    #[account(mut, seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
    #[account(
        init,
        payer = owner,
        space = 8 + Property::INIT_SPACE,
        seeds = [
            PROPERTY_SEED,
            &platform
                .property_count
                .checked_add(1)
                .ok_or(ErrorCode::ArithmeticOverflow)?
                .to_le_bytes()
        ],
        bump
    )]
    pub property: Account<'info, Property>,
    #[account(mut)]
    pub owner: Signer<'info>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct VerifierAction<'info> {
    #[account(seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
    #[account(mut)]
    pub property: Account<'info, Property>,
    pub verifier: Signer<'info>,
}

#[derive(Accounts)]
pub struct PurchaseTokens<'info> {
    #[account(mut, seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
    #[account(mut)]
    pub property: Account<'info, Property>,
    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + Holding::INIT_SPACE,
        seeds = [HOLDING_SEED, property.key().as_ref(), buyer.key().as_ref()],
        bump
    )]
    pub holding: Account<'info, Holding>,
    #[account(mut)]
    pub buyer: Signer<'info>,
    #[account(mut)]
    pub buyer_token_account: Account<'info, TokenAccount>,
    #[account(mut)]
    pub owner_token_account: Account<'info, TokenAccount>,
    #[account(mut, seeds = [TREASURY_SEED], bump = platform.treasury_bump)]
    pub treasury: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct DistributeIncome<'info> {
    #[account(seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
    #[account(mut)]
    pub property: Account<'info, Property>,
    #[account(
        init,
        payer = owner,
        space = 8 + Distribution::INIT_SPACE,
        seeds = [
            DISTRIBUTION_SEED,
            property.key().as_ref(),
            &property
                .distribution_count
                .checked_add(1)
                .ok_or(ErrorCode::ArithmeticOverflow)?
                .to_le_bytes()
        ],
        bump
    )]
    pub distribution: Account<'info, Distribution>,
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(mut)]
    pub owner_token_account: Account<'info, TokenAccount>,
    #[account(mut, seeds = [TREASURY_SEED], bump = platform.treasury_bump)]
    pub treasury: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct ClaimIncome<'info> {
    #[account(seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
    pub property: Account<'info, Property>,
    #[account(mut)]
    pub distribution: Account<'info, Distribution>,
    #[account(
        seeds = [HOLDING_SEED, property.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub holding: Option<Account<'info, Holding>>,
    #[account(
        init,
        payer = claimant,
        space = 8 + Claim::INIT_SPACE,
        seeds = [CLAIM_SEED, distribution.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim: Account<'info, Claim>,
    #[account(mut)]
    pub claimant: Signer<'info>,
    #[account(mut)]
    pub claimant_token_account: Account<'info, TokenAccount>,
    #[account(mut, seeds = [TREASURY_SEED], bump = platform.treasury_bump)]
    pub treasury: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct ListTokens<'info> {
    #[account(seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
    pub property: Account<'info, Property>,
    #[account(
        seeds = [HOLDING_SEED, property.key().as_ref(), seller.key().as_ref()],
        bump
    )]
    pub holding: Option<Account<'info, Holding>>,
    #[account(
        init_if_needed,
        payer = seller,
        space = 8 + Listing::INIT_SPACE,
        seeds = [LISTING_SEED, property.key().as_ref(), seller.key().as_ref()],
        bump
    )]
    pub listing: Account<'info, Listing>,
    #[account(mut)]
    pub seller: Signer<'info>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct CancelListing<'info> {
    #[account(seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
    pub property: Account<'info, Property>,
    #[account(
        mut,
        seeds = [LISTING_SEED, property.key().as_ref(), seller.key().as_ref()],
        bump
    )]
    pub listing: Account<'info, Listing>,
    pub seller: Signer<'info>,
}

#[derive(Accounts)]
pub struct BuyTokens<'info> {
    #[account(mut, seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
    #[account(mut)]
    pub property: Account<'info, Property>,
    #[account(
        mut,
        seeds = [LISTING_SEED, property.key().as_ref(), seller.key().as_ref()],
        bump
    )]
    pub listing: Account<'info, Listing>,
    #[account(
        mut,
        seeds = [HOLDING_SEED, property.key().as_ref(), seller.key().as_ref()],
        bump
    )]
    pub seller_holding: Account<'info, Holding>,
    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + Holding::INIT_SPACE,
        seeds = [HOLDING_SEED, property.key().as_ref(), buyer.key().as_ref()],
        bump
    )]
    pub buyer_holding: Account<'info, Holding>,
    #[account(
        init,
        payer = buyer,
        space = 8 + Trade::INIT_SPACE,
        seeds = [
            TRADE_SEED,
            property.key().as_ref(),
            &property
                .trade_count
                .checked_add(1)
                .ok_or(ErrorCode::ArithmeticOverflow)?
                .to_le_bytes()
        ],
        bump
    )]
    pub trade: Account<'info, Trade>,
    /// CHECK: listing seller; bound by the listing PDA seeds, receives the
    /// sale proceeds into its token account
    pub seller: UncheckedAccount<'info>,
    #[account(mut)]
    pub buyer: Signer<'info>,
    #[account(mut)]
    pub buyer_token_account: Account<'info, TokenAccount>,
    #[account(mut)]
    pub seller_token_account: Account<'info, TokenAccount>,
    #[account(mut, seeds = [TREASURY_SEED], bump = platform.treasury_bump)]
    pub treasury: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct EmergencyDelist<'info> {
    #[account(seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
    pub property: Account<'info, Property>,
    #[account(
        mut,
        seeds = [LISTING_SEED, property.key().as_ref(), seller.key().as_ref()],
        bump
    )]
    pub listing: Account<'info, Listing>,
    /// CHECK: seller of the listing being delisted; only used for seed
    /// derivation
    pub seller: UncheckedAccount<'info>,
    pub authority: Signer<'info>,
}
