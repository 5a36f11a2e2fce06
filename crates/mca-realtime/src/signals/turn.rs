use serde::{Deserialize, Serialize};

use super::{RelianceLevel, Signal, SignalLevel};

/// Discretized signals observed in one turn.
///
/// Missing fields deserialize to their baseline: behaviors absent,
/// reliance moderate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnSignals {
    pub decomposition: SignalLevel,
    pub verification: SignalLevel,
    pub iteration: SignalLevel,
    pub reflection: SignalLevel,
    pub context_adaptation: SignalLevel,
    pub reliance: RelianceLevel,
}

impl TurnSignals {
    /// The turn of a user who delegates wholesale and checks nothing.
    pub fn passive() -> Self {
        Self {
            reliance: RelianceLevel::High,
            ..Self::default()
        }
    }

    /// One signal per behavior, in table order.
    pub fn signals(&self) -> [Signal; 6] {
        [
            pick(
                self.decomposition,
                Signal::DecompositionStrong,
                Signal::DecompositionWeak,
                Signal::DecompositionAbsent,
            ),
            pick(
                self.verification,
                Signal::VerificationStrong,
                Signal::VerificationWeak,
                Signal::VerificationAbsent,
            ),
            pick(
                self.iteration,
                Signal::IterationStrong,
                Signal::IterationWeak,
                Signal::IterationAbsent,
            ),
            pick(
                self.reflection,
                Signal::ReflectionStrong,
                Signal::ReflectionWeak,
                Signal::ReflectionAbsent,
            ),
            pick(
                self.context_adaptation,
                Signal::ContextStrong,
                Signal::ContextWeak,
                Signal::ContextAbsent,
            ),
            match self.reliance {
                RelianceLevel::Low => Signal::RelianceLow,
                RelianceLevel::Moderate => Signal::RelianceModerate,
                RelianceLevel::High => Signal::RelianceHigh,
            },
        ]
    }
}

fn pick(level: SignalLevel, strong: Signal, weak: Signal, absent: Signal) -> Signal {
    match level {
        SignalLevel::Strong => strong,
        SignalLevel::Weak => weak,
        SignalLevel::Absent => absent,
    }
}
