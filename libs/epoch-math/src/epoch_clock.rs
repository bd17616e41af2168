use epoch_types::{EpochAdvance, EpochClock, PoolError};

/// Epoch index for a timestamp: (now - epoch_start) / epoch_duration.
/// Timestamps before `epoch_start` belong to epoch 0.
pub fn epoch_at(now: u64, clock: &EpochClock) -> Result<u64, PoolError> {
    if clock.epoch_duration == 0 {
        return Err(PoolError::InvalidEpochDuration);
    }
    Ok(now.saturating_sub(clock.epoch_start) / clock.epoch_duration)
}

/// Clock check run before every mutating pool operation.
///
/// Returns the transition to apply when the clock has moved past the
/// pool's last observed epoch. A single transition covers any number of
/// skipped epochs, and the epoch never moves backwards.
pub fn check_epoch(
    now: u64,
    clock: &EpochClock,
    current_epoch: u64,
) -> Result<Option<EpochAdvance>, PoolError> {
    let new_epoch = epoch_at(now, clock)?;
    if new_epoch > current_epoch {
        Ok(Some(EpochAdvance {
            from: current_epoch,
            to: new_epoch,
        }))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(start: u64, duration: u64) -> EpochClock {
        EpochClock {
            epoch_start: start,
            epoch_duration: duration,
        }
    }

    #[test]
    fn test_epoch_at_boundaries() {
        let c = clock(1_000, 3_600);
        assert_eq!(epoch_at(1_000, &c), Ok(0));
        assert_eq!(epoch_at(4_599, &c), Ok(0));
        assert_eq!(epoch_at(4_600, &c), Ok(1));
        assert_eq!(epoch_at(1_000 + 3_600 * 10, &c), Ok(10));
    }

    #[test]
    fn test_epoch_before_start_is_zero() {
        let c = clock(1_000, 60);
        assert_eq!(epoch_at(0, &c), Ok(0));
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert_eq!(
            epoch_at(100, &clock(0, 0)),
            Err(PoolError::InvalidEpochDuration)
        );
    }

    #[test]
    fn test_check_epoch_same_epoch() {
        let c = clock(0, 100);
        assert_eq!(check_epoch(99, &c, 0), Ok(None));
        assert_eq!(check_epoch(150, &c, 1), Ok(None));
    }

    #[test]
    fn test_check_epoch_single_step() {
        let c = clock(0, 100);
        assert_eq!(
            check_epoch(100, &c, 0),
            Ok(Some(EpochAdvance { from: 0, to: 1 }))
        );
    }

    #[test]
    fn test_check_epoch_skips_in_one_transition() {
        let c = clock(0, 100);
        let advance = check_epoch(550, &c, 1).unwrap().unwrap();
        assert_eq!(advance, EpochAdvance { from: 1, to: 5 });
        assert_eq!(advance.previous(), 4);
    }

    #[test]
    fn test_check_epoch_never_moves_backwards() {
        let c = clock(0, 100);
        // Stored epoch ahead of the clock (e.g. clock reset in a test)
        assert_eq!(check_epoch(50, &c, 3), Ok(None));
    }
}
