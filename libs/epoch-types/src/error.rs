use soroban_sdk::contracterror;

/// Errors surfaced by the pool contracts.
///
/// Every error aborts the current invocation; the host rolls back any
/// storage writes and nested token transfers made before it was raised.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    /// A required amount was zero
    ZeroAmount = 1,
    /// Deposit ratio outside the slippage tolerance, or a swap paid nothing in
    InsufficientInput = 2,
    /// Share issuance or redemption rounded down to zero
    ZeroLiquidityComputed = 3,
    /// Swap output rounded down to zero
    ZeroOutputComputed = 4,
    /// Fee-adjusted K check failed
    InvariantViolation = 5,
    /// Holder owns fewer shares than requested
    InsufficientBalance = 6,
    /// A checked operation would exceed the integer width
    ArithmeticOverflow = 7,
    /// The token collaborator rejected a transfer
    TransferFailed = 8,
    /// A reserve or slot share supply would go negative
    InsufficientReserves = 9,
    /// Swap input above the per-call cap
    SwapInputTooLarge = 10,
    AlreadyInitialized = 11,
    NotInitialized = 12,
    InvalidEpochDuration = 13,
    IdenticalTokens = 14,
}
