use anchor_lang::error_code;

#[error_code]
pub enum ErrorCode {
    #[msg("You need to spend more SOL!")]
    InsufficientContribution,
    #[msg("Caller is not the contract owner")]
    NotOwner,
    #[msg("Vault transfer failed")]
    TransferFailed,
    #[msg("Funder index out of range")]
    IndexOutOfRange,
    #[msg("Price feed returned no usable answer")]
    OracleUnavailable,
    #[msg("Price feed does not match the configured feed")]
    InvalidPriceFeed,
    #[msg("Invalid authority")]
    InvalidAuthority,
    #[msg("Overflow")]
    Overflow,
    #[msg("Missing account")]
    MissingAccount,
    #[msg("Invalid PDA account")]
    InvalidPDAAccount,
    #[msg("Funder list is full")]
    FunderLimitReached,
}
