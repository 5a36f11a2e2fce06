//! Risk indicator vocabularies.
//!
//! High-risk indicators name research publication, safety-critical work, and
//! sensitive data. Low-risk indicators name daily correspondence, formatting,
//! and simple lookups. No term appears in both lists.

use mca_core::RiskClass;
use regex::Regex;
use std::sync::LazyLock;

/// A compiled indicator pattern.
pub struct IndicatorPattern {
    pub name: &'static str,
    pub risk_class: RiskClass,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! indicator_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── High risk: research and publication ────────────────────────────────────
indicator_pattern!(
    RE_RESEARCH,
    r"(?i)\b(?:papers?|thesis|dissertation|journals?|publications?|publish(?:ed|ing)?|manuscripts?|citations?|peer[- ]review|literature review|grant proposal)\b|论文|发表|期刊|投稿|学位|文献综述|引用"
);

// ── High risk: production and safety-critical work ────────────────────────
indicator_pattern!(
    RE_CRITICAL,
    r"(?i)\b(?:production|deploy(?:ed|ing|ment)?|medical|clinical|diagnos\w*|safety[- ]critical|security|financial|legal|contracts?|compliance)\b|生产环境|上线|医疗|临床|诊断|安全|法律|合同|金融|财务"
);

// ── High risk: sensitive data ──────────────────────────────────────────────
indicator_pattern!(
    RE_SENSITIVE,
    r"(?i)\b(?:patient data|personal data|privacy|confidential|PII|sensitive (?:data|information))\b|隐私|敏感(?:数据|信息)|个人信息|机密"
);

// ── Low risk: daily correspondence ─────────────────────────────────────────
indicator_pattern!(
    RE_CORRESPONDENCE,
    r"(?i)\b(?:e-?mails?|messages? to (?:a )?(?:friend|colleague)s?|thank[- ]you notes?|invitations?|greeting cards?|social media posts?)\b|邮件|日常|微信|朋友圈|祝福"
);

// ── Low risk: formatting and language polish ──────────────────────────────
indicator_pattern!(
    RE_FORMATTING,
    r"(?i)\b(?:format(?:ting)?|grammar|spelling|typos?|reword|polish(?:ing)?|bullet points|slides?)\b|格式|排版|语法|润色|错别字"
);

// ── Low risk: simple lookups and casual tasks ─────────────────────────────
indicator_pattern!(
    RE_LOOKUP,
    r"(?i)\b(?:recipes?|look(?:ing)? up|quick question|trivia|brainstorm(?:ing)?|gift ideas?|travel plans?|movie recommendations?)\b|查一下|菜谱|食谱|头脑风暴|旅行|推荐"
);

/// All indicator patterns.
pub fn all_patterns() -> Vec<IndicatorPattern> {
    vec![
        IndicatorPattern {
            name: "research",
            risk_class: RiskClass::High,
            regex: &RE_RESEARCH,
        },
        IndicatorPattern {
            name: "critical",
            risk_class: RiskClass::High,
            regex: &RE_CRITICAL,
        },
        IndicatorPattern {
            name: "sensitive",
            risk_class: RiskClass::High,
            regex: &RE_SENSITIVE,
        },
        IndicatorPattern {
            name: "correspondence",
            risk_class: RiskClass::Low,
            regex: &RE_CORRESPONDENCE,
        },
        IndicatorPattern {
            name: "formatting",
            risk_class: RiskClass::Low,
            regex: &RE_FORMATTING,
        },
        IndicatorPattern {
            name: "lookup",
            risk_class: RiskClass::Low,
            regex: &RE_LOOKUP,
        },
    ]
}

/// Indicator patterns of one risk class.
pub fn patterns_for(risk_class: RiskClass) -> impl Iterator<Item = IndicatorPattern> {
    all_patterns()
        .into_iter()
        .filter(move |p| p.risk_class == risk_class)
}

/// Whether a line mentions any indicator of the risk class.
pub fn line_matches(line: &str, risk_class: RiskClass) -> bool {
    patterns_for(risk_class).any(|p| p.regex.as_ref().is_some_and(|re| re.is_match(line)))
}

/// Names of indicator patterns that failed to compile.
pub fn failed_patterns() -> Vec<&'static str> {
    all_patterns()
        .into_iter()
        .filter(|p| p.regex.is_none())
        .map(|p| p.name)
        .collect()
}
