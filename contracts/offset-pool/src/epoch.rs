use crate::invariants::epoch_monotonic;
use crate::storage::{get_epoch_entry, set_epoch_entry, set_state};
use epoch_math::check_epoch;
use epoch_types::{EpochAdvance, OffsetPoolConfig, OffsetPoolState, PoolError};
use soroban_sdk::{log, Env, Symbol};

/// Epoch check run at the top of every mutating operation.
///
/// When the clock has crossed a boundary, the slot of `new_epoch - 1` is
/// copied verbatim into the new epoch's slot and the state moves to the new
/// epoch. The copy happens once per call no matter how many epochs were
/// skipped; skipped slots are never materialized.
pub fn sync_epoch(
    env: &Env,
    config: &OffsetPoolConfig,
    state: &mut OffsetPoolState,
) -> Result<Option<EpochAdvance>, PoolError> {
    let now = env.ledger().timestamp();
    let Some(advance) = check_epoch(now, &config.clock, state.current_epoch)? else {
        return Ok(None);
    };
    debug_assert!(epoch_monotonic(advance.from, advance.to));

    let carried = get_epoch_entry(env, advance.previous());
    if carried.is_empty() {
        log!(env, "carrying empty slot", advance.previous());
    }
    set_epoch_entry(env, advance.to, &carried);

    state.current_epoch = advance.to;
    set_state(env, state);

    log!(env, "epoch advanced", advance.from, advance.to, advance.skipped());
    env.events().publish(
        (Symbol::new(env, "epoch_advanced"),),
        (advance.from, advance.to),
    );

    Ok(Some(advance))
}
