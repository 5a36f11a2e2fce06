use mca_core::config::ContextConfig;
use mca_core::traits::IContextFilter;
use mca_core::RiskClass;

use crate::indicators;

/// Keeps the lines around every mention of a risk class.
///
/// Each indicator line pulls in `window` lines on either side. Overlapping
/// windows merge, and kept lines come out once each in their original order.
#[derive(Debug, Clone)]
pub struct ContextFilter {
    window: usize,
}

impl ContextFilter {
    pub fn new() -> Self {
        Self::with_config(&ContextConfig::default())
    }

    pub fn with_config(config: &ContextConfig) -> Self {
        Self::with_window(config.window)
    }

    pub fn with_window(window: usize) -> Self {
        Self { window }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Indices of the lines that mention an indicator of the risk class.
    pub fn matching_lines(&self, text: &str, risk_class: RiskClass) -> Vec<usize> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| indicators::line_matches(line, risk_class))
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of every kept line, ascending.
    pub fn included_lines(&self, text: &str, risk_class: RiskClass) -> Vec<usize> {
        let line_count = text.lines().count();
        let mut included = vec![false; line_count];
        for hit in self.matching_lines(text, risk_class) {
            let start = hit.saturating_sub(self.window);
            let end = hit.saturating_add(self.window).min(line_count.saturating_sub(1));
            for slot in &mut included[start..=end] {
                *slot = true;
            }
        }
        included
            .iter()
            .enumerate()
            .filter_map(|(i, keep)| keep.then_some(i))
            .collect()
    }

    /// Excerpt of the text relevant to the risk class, lines joined by `\n`.
    /// Empty when nothing matches.
    pub fn filter_by_risk(&self, text: &str, risk_class: RiskClass) -> String {
        let lines: Vec<&str> = text.lines().collect();
        let kept: Vec<&str> = self
            .included_lines(text, risk_class)
            .into_iter()
            .map(|i| lines[i])
            .collect();
        tracing::debug!(
            risk_class = risk_class.as_str(),
            kept = kept.len(),
            total = lines.len(),
            "filtered transcript"
        );
        kept.join("\n")
    }
}

impl Default for ContextFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl IContextFilter for ContextFilter {
    fn filter_by_risk(&self, text: &str, risk_class: RiskClass) -> String {
        ContextFilter::filter_by_risk(self, text, risk_class)
    }
}
