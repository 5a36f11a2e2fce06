//! Regulation family: R1 strategy adjustment, R2 trust calibration.

use mca_core::Dimension;

use super::Vocabulary;

pub const STRATEGY_ADJUSTMENT: Vocabulary = Vocabulary {
    dimension: Dimension::StrategyAdjustment,
    keywords_en: r"adjust\w*|rephras\w*|try again|tried again|retr(?:y|ied)|modif\w*|tweak\w*|change (?:the|my) (?:prompt|question|approach|wording)|changed (?:the|my)|redo|re-?ask\w*",
    keywords_zh: "调整|换个|重新|修改|改一下|再问|重来",
    strong: r"\blast time\b[^.!?\n]{0,80}\bthis time\b|\bchanged my (?:approach|strategy|method)\b|\bswitched (?:to|approach|strategy|strategies)\b|\bcompletely different (?:approach|prompt|angle)\b|\bdifferent angle\b|换(?:个|一个)角度|换了(?:个|一种)?(?:思路|策略|方法)|上次[^。！？\n]{0,40}这次",
    moderate: r"\brephras|\brefin(?:e|ed|ing)\b|\biterat|\brewr(?:ite|ote|iting)\b|\bfollow[- ]up (?:question|prompt)s?\b|\bmore specific\b|\bnarrow(?:ed)? (?:it )?down\b|改写|迭代|追问|更具体",
    negation: r"\bg(?:ive|ave) up\b|\bjust accept (?:whatever|what)\b|\bdon't bother (?:asking|trying)\b|放弃|算了|就这样吧",
    frequency_graded: true,
};

/// Frequency adverbs are not graded here: "always trust" is the opposite
/// of calibrated trust.
pub const TRUST_CALIBRATION: Vocabulary = Vocabulary {
    dimension: Dimension::TrustCalibration,
    keywords_en: r"trust\w*|rel(?:y|ies|ied)|reliance|doubt\w*|skeptic\w*|sceptic\w*|believe (?:it|the|what)|suspicious|credib\w*",
    keywords_zh: "信任|相信|依赖|怀疑|可信|靠谱",
    strong: r"\btrust (?:it )?(?:more|less) (?:for|when|on|with)\b|\b(?:more|less) trust (?:for|when|on|in)\b|\bdepending on the (?:topic|task|domain)\b[^.!?\n]{0,60}\btrust|\bcalibrat|\bdon't trust it (?:for|with|on)\b|(?:事实性|数据|引用)[^。！？\n]{0,20}(?:验证|核实|不信)|(?:相信|信任)[^。！？\n]{0,15}(?:但|不过)[^。！？\n]{0,20}(?:验证|核实|检查)",
    moderate: r"\bnot (?:fully|completely|entirely|always) trust|\b(?:never|don't|do not) (?:blindly|fully|completely) trust|\bare you sure\b|\bwith a grain of salt\b|\bhealthy skepticism\b|\bpartially trust|不完全(?:相信|信任)|真的吗|半信半疑|持保留",
    negation: r"\bblindly (?:trust|accept|believe)|\btrust (?:it |the ai |everything )?(?:completely|totally|fully|100%)|\bjust (?:accept|copy|believe)\b|\bbelieve (?:whatever|everything)\b|完全(?:相信|信任)|直接用|全信",
    frequency_graded: false,
};
