use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// The four metacognitive families the twelve dimensions are grouped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Family {
    Planning,
    Monitoring,
    Evaluation,
    Regulation,
}

impl Family {
    pub const ALL: [Family; 4] = [
        Family::Planning,
        Family::Monitoring,
        Family::Evaluation,
        Family::Regulation,
    ];

    /// Dimensions belonging to this family, in vector order.
    pub fn dimensions(self) -> &'static [Dimension] {
        match self {
            Family::Planning => &[
                Dimension::Decomposition,
                Dimension::GoalSetting,
                Dimension::StrategySelection,
                Dimension::ResourcePlanning,
            ],
            Family::Monitoring => &[
                Dimension::ProgressMonitoring,
                Dimension::QualityChecking,
                Dimension::ContextAwareness,
            ],
            Family::Evaluation => &[
                Dimension::ResultEvaluation,
                Dimension::LearningReflection,
                Dimension::CapabilityJudgment,
            ],
            Family::Regulation => &[Dimension::StrategyAdjustment, Dimension::TrustCalibration],
        }
    }
}

/// One of the twelve metacognitive sub-behaviors scored by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Dimension {
    /// P1: breaking a task into parts.
    Decomposition,
    /// P2: stating what a good result looks like.
    GoalSetting,
    /// P3: choosing how to approach the task.
    StrategySelection,
    /// P4: planning time, tools, and sources.
    ResourcePlanning,
    /// M1: tracking progress during the work.
    ProgressMonitoring,
    /// M2: checking the quality of AI output.
    QualityChecking,
    /// M3: adapting behavior to the task context.
    ContextAwareness,
    /// E1: judging the result.
    ResultEvaluation,
    /// E2: reflecting on what was learned.
    LearningReflection,
    /// E3: judging what the AI can and cannot do.
    CapabilityJudgment,
    /// R1: changing approach when something does not work.
    StrategyAdjustment,
    /// R2: adjusting how much to trust the AI.
    TrustCalibration,
}

impl Dimension {
    /// All dimensions in canonical vector order.
    pub const ALL: [Dimension; 12] = [
        Dimension::Decomposition,
        Dimension::GoalSetting,
        Dimension::StrategySelection,
        Dimension::ResourcePlanning,
        Dimension::ProgressMonitoring,
        Dimension::QualityChecking,
        Dimension::ContextAwareness,
        Dimension::ResultEvaluation,
        Dimension::LearningReflection,
        Dimension::CapabilityJudgment,
        Dimension::StrategyAdjustment,
        Dimension::TrustCalibration,
    ];

    pub const COUNT: usize = 12;

    /// Position in the canonical vector order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short code, e.g. `P1` or `R2`.
    pub fn code(self) -> &'static str {
        match self {
            Dimension::Decomposition => "P1",
            Dimension::GoalSetting => "P2",
            Dimension::StrategySelection => "P3",
            Dimension::ResourcePlanning => "P4",
            Dimension::ProgressMonitoring => "M1",
            Dimension::QualityChecking => "M2",
            Dimension::ContextAwareness => "M3",
            Dimension::ResultEvaluation => "E1",
            Dimension::LearningReflection => "E2",
            Dimension::CapabilityJudgment => "E3",
            Dimension::StrategyAdjustment => "R1",
            Dimension::TrustCalibration => "R2",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Decomposition => "decomposition",
            Dimension::GoalSetting => "goal setting",
            Dimension::StrategySelection => "strategy selection",
            Dimension::ResourcePlanning => "resource planning",
            Dimension::ProgressMonitoring => "progress monitoring",
            Dimension::QualityChecking => "quality checking",
            Dimension::ContextAwareness => "context awareness",
            Dimension::ResultEvaluation => "result evaluation",
            Dimension::LearningReflection => "learning reflection",
            Dimension::CapabilityJudgment => "capability judgment",
            Dimension::StrategyAdjustment => "strategy adjustment",
            Dimension::TrustCalibration => "trust calibration",
        }
    }

    pub fn family(self) -> Family {
        match self.index() {
            0..=3 => Family::Planning,
            4..=6 => Family::Monitoring,
            7..=9 => Family::Evaluation,
            _ => Family::Regulation,
        }
    }

    /// Look up a dimension by its code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Dimension> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
