#![no_std]

mod epoch;
mod liquidity;
mod storage;
mod swap;
mod transfer;

use epoch_math::{epoch_at, sqrt_product};
use epoch_types::{
    EpochClock, PoolError, SnapshotPoolConfig, SnapshotPoolState, DECAY_NUMERATOR,
};
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol, U256};
use storage::{get_config, get_snapshot, get_state, is_initialized, set_config, set_state};

/// Two-asset pool with a single live reserve pair and a per-epoch record
/// of sqrt(K), taken when each epoch closes.
///
/// Swaps are validated against the closed epoch's K rather than the live one.
#[contract]
pub struct SnapshotPool;

#[contractimpl]
impl SnapshotPool {
    /// Initialize a new pool
    ///
    /// # Arguments
    /// * `seeder` - Provides the bootstrap reserves and receives their shares
    /// * `epoch_duration` - Epoch length in seconds, counted from now
    /// * `bootstrap_a`, `bootstrap_b` - Initial live reserves; both zero for an empty pool
    pub fn initialize(
        env: Env,
        seeder: Address,
        token_a: Address,
        token_b: Address,
        epoch_duration: u64,
        bootstrap_a: u128,
        bootstrap_b: u128,
    ) -> Result<(), PoolError> {
        if is_initialized(&env) {
            return Err(PoolError::AlreadyInitialized);
        }
        if token_a == token_b {
            return Err(PoolError::IdenticalTokens);
        }
        if epoch_duration == 0 {
            return Err(PoolError::InvalidEpochDuration);
        }
        if (bootstrap_a == 0) != (bootstrap_b == 0) {
            return Err(PoolError::ZeroAmount);
        }

        let config = SnapshotPoolConfig {
            token_a,
            token_b,
            clock: EpochClock {
                epoch_start: env.ledger().timestamp(),
                epoch_duration,
            },
            decay_numerator: DECAY_NUMERATOR,
        };
        set_config(&env, &config);

        let state = SnapshotPoolState {
            reserve_a: bootstrap_a,
            reserve_b: bootstrap_b,
            current_epoch: 0,
        };
        set_state(&env, &state);

        if bootstrap_a > 0 {
            seeder.require_auth();

            let shares = sqrt_product(&env, bootstrap_a, bootstrap_b)?;
            if shares == 0 {
                return Err(PoolError::ZeroLiquidityComputed);
            }

            let pool = env.current_contract_address();
            transfer::transfer(&env, &config.token_a, &seeder, &pool, bootstrap_a)?;
            transfer::transfer(&env, &config.token_b, &seeder, &pool, bootstrap_b)?;
            pool_shares::mint(&env, &seeder, shares)?;
        }

        env.events().publish(
            (Symbol::new(&env, "initialized"),),
            (config.token_a, config.token_b, epoch_duration, bootstrap_a, bootstrap_b),
        );
        Ok(())
    }

    /// Add liquidity to the live reserves
    ///
    /// # Returns
    /// Shares minted to `provider`
    pub fn add_liquidity(
        env: Env,
        provider: Address,
        amount_a: u128,
        amount_b: u128,
    ) -> Result<u128, PoolError> {
        provider.require_auth();
        liquidity::add_liquidity(&env, &provider, amount_a, amount_b)
    }

    /// Redeem shares; both payouts carry the decay haircut
    pub fn remove_liquidity(
        env: Env,
        provider: Address,
        shares: u128,
    ) -> Result<(u128, u128), PoolError> {
        provider.require_auth();
        liquidity::remove_liquidity(&env, &provider, shares)
    }

    /// Pay out the requested amounts against input already sent to the pool
    ///
    /// # Returns
    /// (amount_a_in, amount_b_in) - Inputs implied by the pool's balances
    pub fn swap(
        env: Env,
        to: Address,
        amount_a_out: u128,
        amount_b_out: u128,
    ) -> Result<(u128, u128), PoolError> {
        swap::execute_swap(&env, &to, amount_a_out, amount_b_out)
    }

    /// Run the epoch check on its own
    pub fn checkpoint(env: Env) -> Result<u64, PoolError> {
        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        epoch::sync_epoch(&env, &config, &mut state)?;
        Ok(state.current_epoch)
    }

    // === View Functions ===

    pub fn current_epoch(env: Env) -> Result<u64, PoolError> {
        Ok(get_state(&env)?.current_epoch)
    }

    /// Epoch derived from the ledger clock, which may be ahead of `current_epoch`
    pub fn clock_epoch(env: Env) -> Result<u64, PoolError> {
        let config = get_config(&env)?;
        epoch_at(env.ledger().timestamp(), &config.clock)
    }

    pub fn get_reserves(env: Env) -> Result<(u128, u128), PoolError> {
        let state = get_state(&env)?;
        Ok((state.reserve_a, state.reserve_b))
    }

    /// Snapshot recorded for a closed epoch, 0 if none
    pub fn epoch_liquidity(env: Env, epoch: u64) -> u128 {
        get_snapshot(&env, epoch)
    }

    /// Threshold a swap in the stored epoch is checked against
    pub fn k_required(env: Env) -> Result<U256, PoolError> {
        let state = get_state(&env)?;
        Ok(swap::required_k(&env, &state))
    }

    pub fn share_balance(env: Env, holder: Address) -> u128 {
        pool_shares::balance(&env, &holder)
    }

    pub fn total_shares(env: Env) -> u128 {
        pool_shares::total_supply(&env)
    }

    pub fn get_config(env: Env) -> Result<SnapshotPoolConfig, PoolError> {
        get_config(&env)
    }

    pub fn get_state(env: Env) -> Result<SnapshotPoolState, PoolError> {
        get_state(&env)
    }

    pub fn token_a(env: Env) -> Result<Address, PoolError> {
        Ok(get_config(&env)?.token_a)
    }

    pub fn token_b(env: Env) -> Result<Address, PoolError> {
        Ok(get_config(&env)?.token_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::{Address as _, Ledger};
    use soroban_sdk::{token, Address, Env, U256};

    const EPOCH: u64 = 3_600;
    const FUNDING: i128 = 1_000_000_000;

    struct Setup<'a> {
        pool: SnapshotPoolClient<'a>,
        token_a: token::Client<'a>,
        token_b: token::Client<'a>,
        asset_a: token::StellarAssetClient<'a>,
        asset_b: token::StellarAssetClient<'a>,
        seeder: Address,
    }

    impl<'a> Setup<'a> {
        fn funded_user(&self, env: &Env) -> Address {
            let user = Address::generate(env);
            self.asset_a.mint(&user, &FUNDING);
            self.asset_b.mint(&user, &FUNDING);
            user
        }

        /// Send input to the pool ahead of a swap
        fn pre_send(&self, trader: &Address, token: &token::Client<'a>, amount: i128) {
            token.transfer(trader, &self.pool.address, &amount);
        }
    }

    fn create_token<'a>(
        env: &Env,
        admin: &Address,
    ) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
        let address = env
            .register_stellar_asset_contract_v2(admin.clone())
            .address();
        (
            token::Client::new(env, &address),
            token::StellarAssetClient::new(env, &address),
        )
    }

    fn setup_pool<'a>(env: &Env, bootstrap: u128) -> Setup<'a> {
        env.mock_all_auths();

        let admin = Address::generate(env);
        let (token_a, asset_a) = create_token(env, &admin);
        let (token_b, asset_b) = create_token(env, &admin);

        let contract_id = env.register(SnapshotPool, ());
        let pool = SnapshotPoolClient::new(env, &contract_id);

        let seeder = Address::generate(env);
        asset_a.mint(&seeder, &FUNDING);
        asset_b.mint(&seeder, &FUNDING);

        pool.initialize(
            &seeder,
            &token_a.address,
            &token_b.address,
            &EPOCH,
            &bootstrap,
            &bootstrap,
        );

        Setup {
            pool,
            token_a,
            token_b,
            asset_a,
            asset_b,
            seeder,
        }
    }

    fn set_epoch(env: &Env, epoch: u64) {
        env.ledger().set_timestamp(epoch * EPOCH);
    }

    fn k(env: &Env, value: u128) -> U256 {
        U256::from_u128(env, value)
    }

    // === Initialization Tests ===

    #[test]
    fn test_initialize_seeds_live_reserves() {
        let env = Env::default();
        let s = setup_pool(&env, 10_000);

        assert_eq!(s.pool.get_reserves(), (10_000, 10_000));
        assert_eq!(s.pool.share_balance(&s.seeder), 10_000);
        assert_eq!(s.pool.total_shares(), 10_000);
        assert_eq!(s.pool.current_epoch(), 0);
        assert_eq!(s.pool.get_config().decay_numerator, DECAY_NUMERATOR);
        assert_eq!(s.token_a.balance(&s.pool.address), 10_000);
        assert_eq!(s.pool.token_a(), s.token_a.address);
        assert_eq!(s.pool.token_b(), s.token_b.address);
    }

    #[test]
    fn test_initialize_errors() {
        let env = Env::default();
        let s = setup_pool(&env, 10_000);
        assert_eq!(
            s.pool.try_initialize(
                &s.seeder,
                &s.token_a.address,
                &s.token_b.address,
                &EPOCH,
                &0,
                &0
            ),
            Err(Ok(PoolError::AlreadyInitialized))
        );

        let fresh = SnapshotPoolClient::new(&env, &env.register(SnapshotPool, ()));
        let token = Address::generate(&env);
        let other = Address::generate(&env);
        assert_eq!(
            fresh.try_initialize(&s.seeder, &token, &token, &EPOCH, &0, &0),
            Err(Ok(PoolError::IdenticalTokens))
        );
        assert_eq!(
            fresh.try_initialize(&s.seeder, &token, &other, &0, &0, &0),
            Err(Ok(PoolError::InvalidEpochDuration))
        );
        assert_eq!(
            fresh.try_initialize(&s.seeder, &token, &other, &EPOCH, &0, &5),
            Err(Ok(PoolError::ZeroAmount))
        );
        assert_eq!(fresh.try_get_reserves(), Err(Ok(PoolError::NotInitialized)));
    }

    // === Snapshot Tests ===

    #[test]
    fn test_snapshot_recorded_once_per_epoch() {
        let env = Env::default();
        let s = setup_pool(&env, 10_000);
        let lp = s.funded_user(&env);

        assert_eq!(s.pool.epoch_liquidity(&0), 0);

        set_epoch(&env, 1);
        assert_eq!(s.pool.checkpoint(), 1);
        assert_eq!(s.pool.epoch_liquidity(&0), 10_000);

        // Live reserves change, the closed epoch's record does not
        s.pool.add_liquidity(&lp, &50_000, &50_000);
        assert_eq!(s.pool.checkpoint(), 1);
        assert_eq!(s.pool.epoch_liquidity(&0), 10_000);
        assert_eq!(s.pool.epoch_liquidity(&1), 0);

        set_epoch(&env, 2);
        s.pool.checkpoint();
        assert_eq!(s.pool.epoch_liquidity(&1), 60_000);
    }

    #[test]
    fn test_skipped_epochs_snapshot_under_previous_index() {
        let env = Env::default();
        let s = setup_pool(&env, 10_000);

        set_epoch(&env, 4);
        assert_eq!(s.pool.checkpoint(), 4);

        assert_eq!(s.pool.epoch_liquidity(&0), 0);
        assert_eq!(s.pool.epoch_liquidity(&1), 0);
        assert_eq!(s.pool.epoch_liquidity(&3), 10_000);
        assert_eq!(s.pool.k_required(), k(&env, 100_000_000));
    }

    #[test]
    fn test_k_required_falls_back_to_live_reserves() {
        let env = Env::default();
        let s = setup_pool(&env, 0);
        let lp = s.funded_user(&env);

        // Epoch 0 has no previous snapshot
        assert_eq!(s.pool.k_required(), k(&env, 0));

        // Closing an empty epoch records 0, which also means "use live K"
        set_epoch(&env, 1);
        s.pool.checkpoint();
        assert_eq!(s.pool.epoch_liquidity(&0), 0);

        s.pool.add_liquidity(&lp, &4_000, &9_000);
        assert_eq!(s.pool.k_required(), k(&env, 36_000_000));
    }

    // === Liquidity Tests ===

    #[test]
    fn test_round_trip_applies_decay() {
        let env = Env::default();
        let s = setup_pool(&env, 0);
        let lp = s.funded_user(&env);

        assert_eq!(s.pool.add_liquidity(&lp, &10_000, &10_000), 10_000);
        assert_eq!(s.pool.remove_liquidity(&lp, &10_000), (9_950, 9_950));

        assert_eq!(s.token_a.balance(&lp), FUNDING - 50);
        assert_eq!(s.token_b.balance(&lp), FUNDING - 50);
        assert_eq!(s.pool.total_shares(), 0);
        // The haircut stays behind as reserves
        assert_eq!(s.pool.get_reserves(), (50, 50));
    }

    #[test]
    fn test_deposit_slippage_boundary() {
        let env = Env::default();
        let s = setup_pool(&env, 10_000);
        let lp = s.funded_user(&env);

        assert_eq!(
            s.pool.try_add_liquidity(&lp, &1_000, &900),
            Err(Ok(PoolError::InsufficientInput))
        );
        assert_eq!(s.pool.add_liquidity(&lp, &1_000, &996), 996);
        assert_eq!(s.pool.get_reserves(), (10_996, 10_996));
    }

    #[test]
    fn test_withdraw_errors() {
        let env = Env::default();
        let s = setup_pool(&env, 10_000);
        let lp = s.funded_user(&env);

        assert_eq!(
            s.pool.try_remove_liquidity(&lp, &1),
            Err(Ok(PoolError::InsufficientBalance))
        );
        assert_eq!(
            s.pool.try_remove_liquidity(&lp, &0),
            Err(Ok(PoolError::ZeroAmount))
        );
        assert_eq!(
            s.pool.try_add_liquidity(&lp, &1_000, &0),
            Err(Ok(PoolError::ZeroAmount))
        );
    }

    #[test]
    fn test_share_ledger_matches_supply() {
        let env = Env::default();
        let s = setup_pool(&env, 10_000);
        let alice = s.funded_user(&env);
        let bob = s.funded_user(&env);

        s.pool.add_liquidity(&alice, &3_000, &3_000);
        set_epoch(&env, 1);
        s.pool.add_liquidity(&bob, &2_000, &2_000);
        s.pool.remove_liquidity(&alice, &1_000);

        let sum = s.pool.share_balance(&s.seeder)
            + s.pool.share_balance(&alice)
            + s.pool.share_balance(&bob);
        assert_eq!(sum, s.pool.total_shares());
    }

    // === Swap Tests ===

    #[test]
    fn test_swap_validated_against_stale_snapshot() {
        let env = Env::default();
        let s = setup_pool(&env, 10_000);
        let lp = s.funded_user(&env);
        let trader = s.funded_user(&env);

        set_epoch(&env, 1);
        s.pool.add_liquidity(&lp, &50_000, &50_000);
        assert_eq!(s.pool.epoch_liquidity(&0), 10_000);
        assert_eq!(s.pool.get_reserves(), (60_000, 60_000));

        // 1_000 B for 50_000 A: hopeless against live K = 60_000^2
        s.pre_send(&trader, &s.token_b, 1_000);
        let (amount_a_in, amount_b_in) = s.pool.swap(&trader, &50_000, &0);
        assert_eq!((amount_a_in, amount_b_in), (0, 1_000));

        let (reserve_a, reserve_b) = s.pool.get_reserves();
        assert_eq!((reserve_a, reserve_b), (10_000, 61_000));
        assert!(reserve_a * reserve_b < 60_000 * 60_000);
        assert_eq!(s.token_a.balance(&trader), FUNDING + 50_000);
    }

    #[test]
    fn test_swap_in_epoch_zero_uses_live_k() {
        let env = Env::default();
        let s = setup_pool(&env, 10_000);
        let trader = s.funded_user(&env);

        s.pre_send(&trader, &s.token_a, 1_000);

        // 1_000 A cannot buy 950 B against 10_000 * 10_000
        assert_eq!(
            s.pool.try_swap(&trader, &0, &950),
            Err(Ok(PoolError::InvariantViolation))
        );
        assert_eq!(s.token_b.balance(&s.pool.address), 10_000);
        assert_eq!(s.pool.get_reserves(), (10_000, 10_000));

        // A fair price clears
        assert_eq!(s.pool.swap(&trader, &0, &900), (1_000, 0));
        assert_eq!(s.pool.get_reserves(), (11_000, 9_100));
        assert_eq!(s.token_b.balance(&trader), FUNDING + 900);
    }

    #[test]
    fn test_swap_without_input() {
        let env = Env::default();
        let s = setup_pool(&env, 10_000);
        let trader = s.funded_user(&env);

        assert_eq!(
            s.pool.try_swap(&trader, &0, &100),
            Err(Ok(PoolError::InsufficientInput))
        );
        assert_eq!(
            s.pool.try_swap(&trader, &0, &0),
            Err(Ok(PoolError::ZeroAmount))
        );
        assert_eq!(
            s.pool.try_swap(&trader, &10_000, &0),
            Err(Ok(PoolError::InsufficientReserves))
        );
    }

    #[test]
    fn test_failed_swap_rolls_back_snapshot() {
        let env = Env::default();
        let s = setup_pool(&env, 10_000);
        let trader = s.funded_user(&env);

        set_epoch(&env, 1);
        assert_eq!(
            s.pool.try_swap(&trader, &0, &100),
            Err(Ok(PoolError::InsufficientInput))
        );
        assert_eq!(s.pool.current_epoch(), 0);
        assert_eq!(s.pool.epoch_liquidity(&0), 0);
        assert_eq!(s.pool.clock_epoch(), 1);
    }
}
