use crate::models::RiskClass;

/// Isolates the parts of a transcript that talk about tasks of one risk class.
pub trait IContextFilter: Send + Sync {
    fn filter_by_risk(&self, text: &str, risk_class: RiskClass) -> String;
}
