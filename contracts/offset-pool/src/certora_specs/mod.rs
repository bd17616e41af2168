// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules for the epoch-offset pool.
//
// - epoch_specs.rs     : Slot resolution and epoch clock properties
// - liquidity_specs.rs : Deposit, withdrawal and swap slot accounting
//
// USAGE:
// - Unit tests: cargo test -p offset-pool
// - Certora build: cargo build --features certora -p offset-pool
//
// ============================================================================

pub mod epoch_specs;
pub mod liquidity_specs;
