//! Monitoring family: M1 progress, M2 quality checking, M3 context awareness.

use mca_core::Dimension;

use super::Vocabulary;

pub const PROGRESS_MONITORING: Vocabulary = Vocabulary {
    dimension: Dimension::ProgressMonitoring,
    keywords_en: r"progress|so far|on track|how far|where (?:i am|we are)|keep(?:ing)? track|track(?:ing)?|milestones?|status",
    keywords_zh: "进度|进展|到哪|跟踪|里程碑|完成了多少",
    strong: r"\b\d+\s?(?:/|out of|of)\s?\d+ (?:done|complete|completed|finished|steps|parts|sections)\b|\bcheckpoints?\b|\bchecklist\b|\bhalf ?way (?:through|point)\b|\bafter each (?:step|section|part)\b|检查点|清单|每完成一(?:步|部分)|完成了\d+",
    moderate: r"\bwhat's left\b|\bremaining (?:parts|steps|sections|work)\b|\bstill (?:need|have) to\b|\bnext step\b|还剩|下一步|还需要",
    negation: r"\blo(?:se|st) track\b|没注意进度|不管进度",
    frequency_graded: true,
};

pub const QUALITY_CHECKING: Vocabulary = Vocabulary {
    dimension: Dimension::QualityChecking,
    keywords_en: r"check(?:s|ed|ing)?|verif\w*|review(?:s|ed|ing)?|proofread\w*|validat\w*|confirm(?:s|ed|ing)?|inspect\w*|look (?:it |them |the output )?over",
    keywords_zh: "检查|核实|核对|验证|审查|确认|校对",
    strong: r"\bcross[- ]?(?:check|referenc|verif)|\b(?:a )?second source\b|\banother source\b|\bmultiple sources\b|\bagainst the (?:original|source|sources|documentation|docs|paper|data)\b|\bfact[- ]?check|\bline by line\b|\bcompare (?:it |the (?:output|answer|result) )?(?:with|against|to) (?:the )?(?:original|source|docs|documentation|textbook)\b|交叉(?:验证|核对|检查)|逐(?:条|行|句)(?:检查|核对)|对照(?:原文|原始|文献|资料)|另一个来源",
    moderate: r"\b(?:spot(?:s|ted|ting)?|f(?:ind|ound|inding)|catch(?:es|ing)?|caught|notic(?:e|ed|ing)|correct(?:s|ed|ing)?|fix(?:es|ed|ing)?|point(?:ed)? out|look(?:ed|ing)? for)\b[^.!?,;\n]{0,25}?\b(?:errors?|mistakes?|problems?|issues?|bugs?|inaccuraci(?:es|y)|(?:what|something|anything) (?:was |is )?(?:wrong|incorrect|off))\b|发现[^。！？，；\n]{0,6}(?:错误|错|问题|不对|不准确)|找(?:出|到)[^。！？，；\n]{0,4}(?:错|问题)|纠正|指出[^。！？，；\n]{0,6}(?:错误|问题|不对)",
    negation: r"\b(?:just|simply) (?:copy|paste|use|accept|take) (?:it|the (?:answer|output|result))\b|\bas[- ]is\b|\bwithout (?:checking|reading|looking|verifying|reviewing)\b|直接(?:复制|粘贴|用)|不看就",
    frequency_graded: true,
};

pub const CONTEXT_AWARENESS: Vocabulary = Vocabulary {
    dimension: Dimension::ContextAwareness,
    keywords_en: r"context\w*|depends on|audience|situations?|stakes|important|critical|casual|formal|scenarios?",
    keywords_zh: "背景|场景|语境|情况|上下文|受众|重要",
    strong: r"\bdepending on (?:the )?(?:task|stakes|context|situation|audience|how important|what it's for)\b|\bit depends on (?:the )?(?:task|stakes|context|situation)\b|\bfor (?:important|high[- ]stakes|critical|serious) (?:tasks|things|work|stuff)\b[^.!?\n]{0,60}\bbut\b|\bdifferent(?:ly)? (?:for|depending on|based on) (?:different )?(?:tasks|contexts|situations)\b|视情况|看(?:任务|场景|情况)(?:而定|决定)|重要的(?:事|任务)[^。！？\n]{0,20}(?:不重要|日常|简单)的",
    moderate: r"\bit depends\b|\b(?:more|less) careful (?:with|when|for)\b|\bwhen it matters\b|看情况|重要的(?:时候|事情)",
    negation: r"\bregardless of (?:the )?(?:task|context|situation)\b|\bdoesn't matter what (?:the )?(?:task|context)\b|不管什么(?:任务|情况)都|无论什么都",
    frequency_graded: true,
};
