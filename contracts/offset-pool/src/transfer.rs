use epoch_math::to_token_amount;
use epoch_types::PoolError;
use soroban_sdk::{token, Address, Env};

/// Move `amount` of `token` between two addresses.
/// A rejected transfer surfaces as TransferFailed.
pub fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: u128,
) -> Result<(), PoolError> {
    if amount == 0 {
        return Ok(());
    }

    let amount = to_token_amount(amount)?;
    match token::Client::new(env, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(PoolError::TransferFailed),
    }
}
