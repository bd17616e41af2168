use crate::storage::{has_snapshot, set_snapshot, set_state};
use epoch_math::{check_epoch, sqrt_product};
use epoch_types::{EpochAdvance, PoolError, SnapshotPoolConfig, SnapshotPoolState};
use soroban_sdk::{log, Env, Symbol};

/// Epoch check run at the top of every mutating operation.
///
/// On a boundary crossing the live reserves are reduced to
/// floor(sqrt(reserve_a * reserve_b)) and recorded under `new_epoch - 1`,
/// unless that epoch already has a snapshot. Skipped epochs get none.
pub fn sync_epoch(
    env: &Env,
    config: &SnapshotPoolConfig,
    state: &mut SnapshotPoolState,
) -> Result<Option<EpochAdvance>, PoolError> {
    let now = env.ledger().timestamp();
    let Some(advance) = check_epoch(now, &config.clock, state.current_epoch)? else {
        return Ok(None);
    };

    let closed = advance.previous();
    let liquidity = sqrt_product(env, state.reserve_a, state.reserve_b)?;
    if !has_snapshot(env, closed) {
        set_snapshot(env, closed, liquidity);
    }

    state.current_epoch = advance.to;
    set_state(env, state);

    log!(env, "epoch advanced", advance.from, advance.to, advance.skipped(), liquidity);
    env.events().publish(
        (Symbol::new(env, "epoch_advanced"),),
        (advance.from, advance.to, liquidity),
    );

    Ok(Some(advance))
}
