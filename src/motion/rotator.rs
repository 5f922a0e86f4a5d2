use std::num::NonZeroUsize;

pub fn next_index(index: usize, len: NonZeroUsize) -> usize {
    let len = len.get();
    (index % len + 1) % len
}

pub fn prev_index(index: usize, len: NonZeroUsize) -> usize {
    let len = len.get();
    (index % len + len - 1) % len
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatorAction {
    /// Automatic advance from the autoplay timer.
    Tick,
    Next,
    Prev,
    Jump(usize),
}

impl RotatorAction {
    pub fn is_manual(self) -> bool {
        !matches!(self, RotatorAction::Tick)
    }
}

/// Showcase position. `index` is always in `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotator {
    index: usize,
    len: NonZeroUsize,
    manual_moves: u32,
}

impl Rotator {
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            index: 0,
            len,
            manual_moves: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Count of user-driven moves; bumps re-arm the autoplay timer under
    /// [`AutoplayPolicy::Restart`].
    pub fn manual_moves(&self) -> u32 {
        self.manual_moves
    }

    pub fn apply(self, action: RotatorAction) -> Self {
        let index = match action {
            RotatorAction::Tick | RotatorAction::Next => next_index(self.index, self.len),
            RotatorAction::Prev => prev_index(self.index, self.len),
            RotatorAction::Jump(target) => target % self.len.get(),
        };
        let manual_moves = if action.is_manual() {
            self.manual_moves.wrapping_add(1)
        } else {
            self.manual_moves
        };
        Self {
            index,
            len: self.len,
            manual_moves,
        }
    }
}

/// What manual navigation does to the autoplay timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoplayPolicy {
    /// Keep the running interval; manual moves neither pause nor reset it.
    #[default]
    Continue,
    /// Start a fresh interval after every manual move.
    #[allow(dead_code)] // selectable through config::SHOWCASE_AUTOPLAY
    Restart,
}

impl AutoplayPolicy {
    /// Value the autoplay effect is keyed on. A change tears down the
    /// running interval and starts a new one.
    pub fn timer_generation(self, rotator: &Rotator) -> u32 {
        match self {
            AutoplayPolicy::Continue => 0,
            AutoplayPolicy::Restart => rotator.manual_moves(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four() -> NonZeroUsize {
        NonZeroUsize::new(4).unwrap()
    }

    #[test]
    fn next_walks_and_wraps() {
        let mut rotator = Rotator::new(four());
        let mut seen = Vec::new();
        for _ in 0..3 {
            rotator = rotator.apply(RotatorAction::Next);
            seen.push(rotator.index());
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(rotator.apply(RotatorAction::Next).index(), 0);
    }

    #[test]
    fn prev_wraps_below_zero() {
        let rotator = Rotator::new(four()).apply(RotatorAction::Prev);
        assert_eq!(rotator.index(), 3);
    }

    #[test]
    fn jump_reduces_out_of_range_targets() {
        let rotator = Rotator::new(four());
        assert_eq!(rotator.apply(RotatorAction::Jump(2)).index(), 2);
        assert_eq!(rotator.apply(RotatorAction::Jump(9)).index(), 1);
    }

    #[test]
    fn single_entry_stays_put() {
        let one = NonZeroUsize::new(1).unwrap();
        let rotator = Rotator::new(one);
        assert_eq!(rotator.apply(RotatorAction::Tick).index(), 0);
        assert_eq!(rotator.apply(RotatorAction::Prev).index(), 0);
        assert_eq!(next_index(0, one), 0);
        assert_eq!(prev_index(0, one), 0);
    }

    #[test]
    fn ticks_do_not_count_as_manual() {
        let rotator = Rotator::new(four())
            .apply(RotatorAction::Tick)
            .apply(RotatorAction::Tick);
        assert_eq!(rotator.manual_moves(), 0);
        let rotator = rotator.apply(RotatorAction::Prev).apply(RotatorAction::Jump(0));
        assert_eq!(rotator.manual_moves(), 2);
    }

    #[test]
    fn continue_policy_never_rearms_timer() {
        let rotator = Rotator::new(four()).apply(RotatorAction::Next);
        assert_eq!(AutoplayPolicy::default(), AutoplayPolicy::Continue);
        assert_eq!(AutoplayPolicy::Continue.timer_generation(&rotator), 0);
        assert_eq!(AutoplayPolicy::Restart.timer_generation(&rotator), 1);
    }

    #[test]
    fn index_helpers_tolerate_stale_indices() {
        assert_eq!(next_index(7, four()), 0);
        assert_eq!(prev_index(usize::MAX, four()), 2);
    }
}
