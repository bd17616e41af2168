use epoch_math::{from_token_amount, to_token_amount};
use epoch_types::PoolError;
use soroban_sdk::{token, Address, Env};

/// Move `amount` of `token`; zero amounts are skipped
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

/// Pool's own balance of `token`
pub fn pool_balance(env: &Env, token: &Address) -> Result<u128, PoolError> {
    let balance = token::Client::new(env, token).balance(&env.current_contract_address());
    from_token_amount(balance)
}
