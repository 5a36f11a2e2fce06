//! Static likelihood table: how strongly each signal favors each pattern.
//!
//! Factors above 1 raise a pattern's posterior when the signal is seen,
//! factors below 1 lower it. The table is hand-authored, not fitted.

use mca_core::Pattern;

use crate::signals::Signal;

/// Rows follow [`Pattern::ALL`], columns follow [`Signal::ALL`].
#[rustfmt::skip]
pub const LIKELIHOOD: [[f64; Signal::COUNT]; Pattern::COUNT] = [
    //  decomposition    verification     iteration        reflection       context          reliance
    //  S    W    A      S    W    A      S    W    A      S    W    A      S    W    A      L    M    H
    [2.0, 1.3, 0.6,   1.2, 1.1, 0.8,   1.1, 1.0, 1.0,   1.1, 1.0, 1.0,   1.1, 1.0, 1.0,   1.2, 1.0, 0.5], // A
    [1.1, 1.1, 1.0,   1.1, 1.1, 0.9,   2.0, 1.4, 0.5,   1.0, 1.0, 1.0,   1.0, 1.0, 1.0,   1.1, 1.0, 0.7], // B
    [1.2, 1.1, 1.0,   1.2, 1.1, 0.9,   1.1, 1.0, 1.0,   1.1, 1.0, 1.0,   2.0, 1.4, 0.8,   1.1, 1.0, 0.7], // C
    [1.1, 1.0, 1.0,   2.2, 1.4, 0.4,   1.2, 1.0, 1.0,   1.0, 1.0, 1.0,   1.1, 1.0, 1.0,   1.3, 1.0, 0.4], // D
    [1.2, 1.1, 1.0,   1.1, 1.0, 0.9,   1.1, 1.0, 1.0,   2.0, 1.4, 0.8,   1.0, 1.0, 1.0,   1.2, 1.0, 0.6], // E
    [0.3, 0.7, 1.4,   0.2, 0.6, 1.6,   0.3, 0.7, 1.4,   0.4, 0.8, 1.1,   0.4, 0.8, 1.1,   0.3, 1.0, 2.0], // F
];

/// Multiplicative factor of one signal for one pattern.
pub fn factor(pattern: Pattern, signal: Signal) -> f64 {
    LIKELIHOOD[pattern.index()][signal.index()]
}
