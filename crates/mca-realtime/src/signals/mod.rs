//! Per-turn behavioral signals.

mod levels;
mod turn;

pub use levels::{RelianceLevel, SignalLevel};
pub use turn::TurnSignals;

use std::fmt;

/// One discretized observation. Every level of every behavior has its own
/// identifier, so likelihoods are looked up by index with no fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Signal {
    DecompositionStrong,
    DecompositionWeak,
    DecompositionAbsent,
    VerificationStrong,
    VerificationWeak,
    VerificationAbsent,
    IterationStrong,
    IterationWeak,
    IterationAbsent,
    ReflectionStrong,
    ReflectionWeak,
    ReflectionAbsent,
    ContextStrong,
    ContextWeak,
    ContextAbsent,
    RelianceLow,
    RelianceModerate,
    RelianceHigh,
}

impl Signal {
    pub const COUNT: usize = 18;

    pub const ALL: [Signal; Signal::COUNT] = [
        Signal::DecompositionStrong,
        Signal::DecompositionWeak,
        Signal::DecompositionAbsent,
        Signal::VerificationStrong,
        Signal::VerificationWeak,
        Signal::VerificationAbsent,
        Signal::IterationStrong,
        Signal::IterationWeak,
        Signal::IterationAbsent,
        Signal::ReflectionStrong,
        Signal::ReflectionWeak,
        Signal::ReflectionAbsent,
        Signal::ContextStrong,
        Signal::ContextWeak,
        Signal::ContextAbsent,
        Signal::RelianceLow,
        Signal::RelianceModerate,
        Signal::RelianceHigh,
    ];

    /// Column in the likelihood table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable form used in evidence trails.
    pub fn description(self) -> &'static str {
        match self {
            Signal::DecompositionStrong => "decomposition strong",
            Signal::DecompositionWeak => "decomposition weak",
            Signal::DecompositionAbsent => "decomposition absent",
            Signal::VerificationStrong => "verification strong",
            Signal::VerificationWeak => "verification weak",
            Signal::VerificationAbsent => "verification absent",
            Signal::IterationStrong => "iteration strong",
            Signal::IterationWeak => "iteration weak",
            Signal::IterationAbsent => "iteration absent",
            Signal::ReflectionStrong => "reflection strong",
            Signal::ReflectionWeak => "reflection weak",
            Signal::ReflectionAbsent => "reflection absent",
            Signal::ContextStrong => "context adaptation strong",
            Signal::ContextWeak => "context adaptation weak",
            Signal::ContextAbsent => "context adaptation absent",
            Signal::RelianceLow => "reliance low",
            Signal::RelianceModerate => "reliance moderate",
            Signal::RelianceHigh => "reliance high",
        }
    }

    /// Baseline observations: an absent behavior or moderate reliance.
    /// They still carry likelihood factors but are left out of evidence trails.
    pub fn is_baseline(self) -> bool {
        matches!(
            self,
            Signal::DecompositionAbsent
                | Signal::VerificationAbsent
                | Signal::IterationAbsent
                | Signal::ReflectionAbsent
                | Signal::ContextAbsent
                | Signal::RelianceModerate
        )
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_table_order() {
        for (i, signal) in Signal::ALL.iter().enumerate() {
            assert_eq!(signal.index(), i);
        }
    }

    #[test]
    fn six_baseline_signals() {
        assert_eq!(Signal::ALL.iter().filter(|s| s.is_baseline()).count(), 6);
    }
}
