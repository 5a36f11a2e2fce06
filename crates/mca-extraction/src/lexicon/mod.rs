//! Per-dimension vocabularies and their compiled tier patterns.

pub mod evaluation;
pub mod monitoring;
pub mod planning;
pub mod regulation;

use mca_core::text::is_cjk;
use mca_core::Dimension;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::cascade::Tier;

// ── Shared frequency and negation vocabulary ───────────────────────────────

const ALWAYS_EN: &str = r"always|every time|each time|every single time|consistently|systematically|without exception|invariably";
const ALWAYS_ZH: &str = "总是|每次|一直|始终|每一次|每回";
const OFTEN_EN: &str = r"sometimes|often|usually|occasionally|frequently|regularly|generally|most of the time";
const OFTEN_ZH: &str = "有时|经常|通常|偶尔|常常|一般|大多";
const NEVER_EN: &str = r"never|don't|do not|doesn't|didn't|rarely|seldom|hardly ever|not really";
const NEVER_ZH: &str = "从不|从来不|很少|不会|没有|不太|不用|不怎么";

/// Words before a frequency adverb that are inspected for a negation.
const LEAD_IN_WORDS: usize = 3;
/// Same, for unspaced Chinese text.
const LEAD_IN_CJK_CHARS: usize = 4;

static NEGATION_CUE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{NEVER_EN})\b|(?:{NEVER_ZH})")).ok()
});

/// Hand-authored vocabulary for one dimension.
///
/// Phrase fields hold regex alternations; an empty string contributes
/// nothing to its tier. English keywords are whole words: open-ended stems
/// spell out their suffix (`verif\w*`).
pub struct Vocabulary {
    pub dimension: Dimension,
    pub keywords_en: &'static str,
    pub keywords_zh: &'static str,
    pub strong: &'static str,
    pub moderate: &'static str,
    pub negation: &'static str,
    /// Whether "always"/"sometimes" near a keyword grades the evidence.
    /// Off for dimensions where frequency says nothing about quality
    /// ("always trust" is not calibrated trust).
    pub frequency_graded: bool,
}

impl Vocabulary {
    fn keyword_clause(&self) -> String {
        format!(r"\b(?:{})\b|(?:{})", self.keywords_en, self.keywords_zh)
    }

    fn near_keyword(&self, en: &str, zh: &str, en_span: u8, zh_span: u8) -> String {
        format!(
            r"\b(?:{en})\b[^.!?,;\n]{{0,{en_span}}}?\b(?:{kw_en})\b|(?:{zh})[^。！？，；.!?,;\n]{{0,{zh_span}}}?(?:{kw_zh})",
            kw_en = self.keywords_en,
            kw_zh = self.keywords_zh,
        )
    }

    /// Source of the phrase pattern for one tier, or `None` if the tier has
    /// no vocabulary for this dimension.
    pub fn source(&self, tier: Tier) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        match tier {
            Tier::Strong => push_nonempty(&mut parts, self.strong),
            Tier::Moderate => push_nonempty(&mut parts, self.moderate),
            Tier::Negated => {
                push_nonempty(&mut parts, self.negation);
                parts.push(self.near_keyword(NEVER_EN, NEVER_ZH, 25, 4));
            }
            Tier::Keyword => parts.push(self.keyword_clause()),
            Tier::Absent => {}
        }
        if parts.is_empty() {
            return None;
        }
        Some(format!("(?i){}", parts.join("|")))
    }

    /// Source of the frequency-adverb pattern that grades a keyword into
    /// the strong or moderate tier. Its matches must still pass
    /// [`is_negated`].
    pub fn frequency_source(&self, tier: Tier) -> Option<String> {
        if !self.frequency_graded {
            return None;
        }
        let near = match tier {
            Tier::Strong => self.near_keyword(ALWAYS_EN, ALWAYS_ZH, 60, 20),
            Tier::Moderate => self.near_keyword(OFTEN_EN, OFTEN_ZH, 60, 20),
            _ => return None,
        };
        Some(format!("(?i){near}"))
    }
}

/// Whether the frequency match `text[start..end]` is undercut by a negation,
/// either inside the match or in the few words leading into it within the
/// same clause ("I don't always check").
pub fn is_negated(text: &str, start: usize, end: usize) -> bool {
    let Some(cue) = NEGATION_CUE.as_ref() else {
        return false;
    };
    if cue.is_match(&text[start..end]) {
        return true;
    }
    let clause = text[..start].rsplit(is_clause_break).next().unwrap_or_default();
    cue.is_match(lead_in(clause))
}

fn is_clause_break(c: char) -> bool {
    matches!(
        c,
        '.' | '!' | '?' | ',' | ';' | '\n' | '。' | '！' | '？' | '，' | '；'
    )
}

fn lead_in(clause: &str) -> &str {
    let clause = clause.trim_end();
    let words = clause
        .rmatch_indices(char::is_whitespace)
        .nth(LEAD_IN_WORDS - 1)
        .map_or(clause, |(i, _)| &clause[i..]);
    if !words.chars().any(is_cjk) {
        return words;
    }
    match words.char_indices().rev().nth(LEAD_IN_CJK_CHARS - 1) {
        Some((i, _)) => &words[i..],
        None => words,
    }
}

fn push_nonempty(parts: &mut Vec<String>, alternation: &str) {
    if !alternation.is_empty() {
        parts.push(format!("(?:{alternation})"));
    }
}

/// Vocabulary for one dimension.
pub fn vocabulary(dimension: Dimension) -> &'static Vocabulary {
    use Dimension::*;
    match dimension {
        Decomposition => &planning::DECOMPOSITION,
        GoalSetting => &planning::GOAL_SETTING,
        StrategySelection => &planning::STRATEGY_SELECTION,
        ResourcePlanning => &planning::RESOURCE_PLANNING,
        ProgressMonitoring => &monitoring::PROGRESS_MONITORING,
        QualityChecking => &monitoring::QUALITY_CHECKING,
        ContextAwareness => &monitoring::CONTEXT_AWARENESS,
        ResultEvaluation => &evaluation::RESULT_EVALUATION,
        LearningReflection => &evaluation::LEARNING_REFLECTION,
        CapabilityJudgment => &evaluation::CAPABILITY_JUDGMENT,
        StrategyAdjustment => &regulation::STRATEGY_ADJUSTMENT,
        TrustCalibration => &regulation::TRUST_CALIBRATION,
    }
}

/// Compiled tier patterns for one dimension. A `None` tier never matches.
pub struct CompiledLexicon {
    pub dimension: Dimension,
    pub strong: Option<Regex>,
    pub moderate: Option<Regex>,
    pub negated: Option<Regex>,
    pub keyword: Option<Regex>,
    /// "always" near a keyword.
    pub frequent: Option<Regex>,
    /// "often" near a keyword.
    pub occasional: Option<Regex>,
}

impl CompiledLexicon {
    /// Pattern for a scoring tier, in cascade order.
    pub fn tier(&self, tier: Tier) -> Option<&Regex> {
        match tier {
            Tier::Strong => self.strong.as_ref(),
            Tier::Moderate => self.moderate.as_ref(),
            Tier::Negated => self.negated.as_ref(),
            Tier::Keyword => self.keyword.as_ref(),
            Tier::Absent => None,
        }
    }

    /// Frequency-graded pattern feeding a tier, if any.
    pub fn frequency(&self, tier: Tier) -> Option<&Regex> {
        match tier {
            Tier::Strong => self.frequent.as_ref(),
            Tier::Moderate => self.occasional.as_ref(),
            _ => None,
        }
    }
}

/// A vocabulary pattern that failed to compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternFailure {
    pub dimension: Dimension,
    pub tier: Tier,
    pub error: String,
}

struct Compiled {
    lexicons: Vec<CompiledLexicon>,
    failures: Vec<PatternFailure>,
}

static COMPILED: LazyLock<Compiled> = LazyLock::new(compile_all);

fn compile_all() -> Compiled {
    let mut failures = Vec::new();
    let lexicons = Dimension::ALL
        .into_iter()
        .map(|dimension| {
            let vocab = vocabulary(dimension);
            let mut build = |tier: Tier, source: Option<String>| {
                let source = source?;
                match Regex::new(&source) {
                    Ok(re) => Some(re),
                    Err(e) => {
                        tracing::warn!(
                            dimension = dimension.code(),
                            tier = tier.as_str(),
                            error = %e,
                            "vocabulary pattern failed to compile; tier disabled"
                        );
                        failures.push(PatternFailure {
                            dimension,
                            tier,
                            error: e.to_string(),
                        });
                        None
                    }
                }
            };
            CompiledLexicon {
                dimension,
                strong: build(Tier::Strong, vocab.source(Tier::Strong)),
                moderate: build(Tier::Moderate, vocab.source(Tier::Moderate)),
                negated: build(Tier::Negated, vocab.source(Tier::Negated)),
                keyword: build(Tier::Keyword, vocab.source(Tier::Keyword)),
                frequent: build(Tier::Strong, vocab.frequency_source(Tier::Strong)),
                occasional: build(Tier::Moderate, vocab.frequency_source(Tier::Moderate)),
            }
        })
        .collect();
    Compiled { lexicons, failures }
}

/// Compiled patterns for one dimension.
pub fn lexicon(dimension: Dimension) -> &'static CompiledLexicon {
    &COMPILED.lexicons[dimension.index()]
}

/// Vocabulary patterns that failed to compile. Empty when healthy.
pub fn pattern_health() -> &'static [PatternFailure] {
    &COMPILED.failures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_vocabulary_compiles() {
        assert!(pattern_health().is_empty(), "failures: {:?}", pattern_health());
    }

    #[test]
    fn vocabularies_are_indexed_by_their_dimension() {
        for dimension in Dimension::ALL {
            assert_eq!(vocabulary(dimension).dimension, dimension);
            assert_eq!(lexicon(dimension).dimension, dimension);
        }
    }

    #[test]
    fn every_dimension_has_keyword_and_negation_tiers() {
        for dimension in Dimension::ALL {
            let lex = lexicon(dimension);
            assert!(lex.keyword.is_some(), "{dimension} keyword");
            assert!(lex.negated.is_some(), "{dimension} negation");
            assert!(lex.strong.is_some(), "{dimension} strong");
        }
    }

    #[test]
    fn no_tier_matches_empty_text() {
        for dimension in Dimension::ALL {
            let lex = lexicon(dimension);
            for tier in Tier::SCORED {
                for re in lex.tier(tier).into_iter().chain(lex.frequency(tier)) {
                    assert!(!re.is_match(""), "{dimension} {tier:?} matches empty text");
                }
            }
        }
    }

    #[test]
    fn frequency_grading_follows_the_vocabulary_flag() {
        for dimension in Dimension::ALL {
            let lex = lexicon(dimension);
            let graded = vocabulary(dimension).frequency_graded;
            assert_eq!(lex.frequent.is_some(), graded, "{dimension}");
            assert_eq!(lex.occasional.is_some(), graded, "{dimension}");
        }
    }

    fn negated_at(text: &str, needle: &str) -> bool {
        let start = text.find(needle).expect("needle in text");
        is_negated(text, start, start + needle.len())
    }

    #[test]
    fn negation_before_the_adverb_undercuts_it() {
        assert!(negated_at("I don't always check the output.", "always check"));
        assert!(negated_at("Honestly I do not usually review it.", "usually review"));
        assert!(negated_at("我不会每次都检查。", "每次都检查"));
        assert!(negated_at("Don't always check it.", "always check"));
    }

    #[test]
    fn negation_inside_the_match_undercuts_it() {
        assert!(negated_at("I always never check.", "always never check"));
    }

    #[test]
    fn negation_in_an_earlier_clause_does_not_leak() {
        assert!(!negated_at("I never guess, I always check the output.", "always check"));
        assert!(!negated_at("For my thesis I always verify.", "always verify"));
        assert!(!negated_at("I didn't like it at first but now I always check.", "always check"));
    }
}
