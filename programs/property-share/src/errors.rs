use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Caller is not the platform owner")]
    OwnerOnly,
    #[msg("Caller is not authorized for this action")]
    NotAuthorized,
    #[msg("Property does not exist")]
    PropertyNotFound,
    #[msg("Requested tokens exceed the available balance")]
    InsufficientTokens,
    #[msg("Invalid parameter")]
    InvalidParameter,
    #[msg("Property has not been verified")]
    NotVerified,
    #[msg("Property is already verified")]
    AlreadyVerified,
    #[msg("Arithmetic operation resulted in overflow")]
    ArithmeticOverflow,
}
