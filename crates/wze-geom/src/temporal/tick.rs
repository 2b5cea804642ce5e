// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Discrete simulation tick.
///
/// The engine advances in integer ticks; one collision pass per layer runs per
/// tick. This newtype keeps tick numbers from being confused with counts or
/// indices across APIs.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick {
    index: u64,
}

impl Tick {
    /// The first tick of a simulation.
    pub const ZERO: Self = Self::new(0);

    /// Creates a new tick with the given index.
    #[must_use]
    pub const fn new(index: u64) -> Self {
        Self { index }
    }

    /// Returns the tick index.
    #[must_use]
    pub const fn index(&self) -> u64 {
        self.index
    }

    /// Returns the tick that follows this one (saturating at `u64::MAX`).
    #[must_use]
    pub const fn next(&self) -> Self {
        Self::new(self.index.saturating_add(1))
    }
}

impl core::fmt::Display for Tick {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_advances_and_saturates() {
        assert_eq!(Tick::ZERO.next().index(), 1);
        assert_eq!(Tick::new(u64::MAX).next().index(), u64::MAX);
        assert_eq!(Tick::new(7).to_string(), "#7");
    }
}
