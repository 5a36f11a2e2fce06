//! Evaluation family: E1 result evaluation, E2 learning reflection,
//! E3 capability judgment.

use mca_core::Dimension;

use super::Vocabulary;

pub const RESULT_EVALUATION: Vocabulary = Vocabulary {
    dimension: Dimension::ResultEvaluation,
    keywords_en: r"quality|evaluat\w*|assess\w*|judg(?:e|es|ed|ing)|good enough|useful|accura\w*|helpful|rate|grad(?:e|es|ed|ing)",
    keywords_zh: "质量|评价|评估|判断|好不好|有没有用|准确",
    strong: r"\b\d+(?:\.\d)?\s?(?:/|out of)\s?10\b|\bpros and cons\b|\bstrengths? and weaknesses?\b|\bin terms of\b|\bcriteria\b|\brubric\b|优点[^。！？\n]{0,30}缺点|优缺点|从[^。！？\n]{0,10}(?:角度|方面)来?看|打分",
    moderate: r"\b(?:good|bad|useful|accurate|helpful|weak|strong|quality)\b[^.!?\n]{0,40}\bbecause\b|\bnot (?:good|great|useful|accurate) enough\b|\bbetter than\b|\bworse than\b|因为[^。！？\n]{0,40}所以|比[^。！？\n]{0,10}(?:好|差)",
    negation: r"\blooks? (?:fine|ok|okay|good) to me\b|\bseems? (?:fine|ok|okay)\b|\bgood enough for me\b|看起来(?:没问题|还行)|差不多就行",
    frequency_graded: true,
};

pub const LEARNING_REFLECTION: Vocabulary = Vocabulary {
    dimension: Dimension::LearningReflection,
    keywords_en: r"learn\w*|understand\w*|reflect\w*|reali[sz]\w*|insights?|lessons?|improv(?:e|ed|ing) my|think back",
    keywords_zh: "学到|学习|理解|反思|意识到|体会|收获|明白",
    strong: r"\bnext time\b|\blessons? learned\b|\bin hindsight\b|\blooking back\b|\bfrom now on\b|\bi've learned (?:to|that)\b|\btaught me\b|下次|吸取(?:了)?教训|回头看|以后(?:我)?会|教会了我",
    moderate: r"\bi see now\b|\bnow i (?:know|understand|see)\b|\bturns out\b|\bmade me (?:think|realize|realise)\b|原来|现在(?:我)?(?:知道|明白)了|才发现",
    negation: r"\bdon't (?:need|want|care) to (?:learn|understand)\b|\bjust (?:want|need) the answer\b|只要答案|不需要(?:理解|懂)",
    frequency_graded: true,
};

pub const CAPABILITY_JUDGMENT: Vocabulary = Vocabulary {
    dimension: Dimension::CapabilityJudgment,
    keywords_en: r"limitations?|limits|capab\w*|good at|bad at|weakness(?:es)?|not reliable|unreliable|can't (?:do|handle)|strengths?",
    keywords_zh: "局限|能力|擅长|不可靠|靠谱|限制",
    strong: r"\bknowledge cut-?off\b|\bbeyond (?:its|your|the model's) (?:knowledge|training)\b|\btraining data\b|\bnot (?:good|reliable) (?:at|for|with) (?:math|citations|references|numbers|recent|dates|facts)\b|\b(?:bad|weak|terrible) (?:at|with) (?:math|citations|references|numbers|recent|dates)\b|知识截止|训练数据|不擅长(?:数学|引用|计算|最新)|(?:数学|引用|计算)(?:方面)?(?:不行|不可靠)",
    moderate: r"\bhallucinat|\bmade (?:it |things |stuff )?up\b|\bmakes (?:it |things |stuff )?up\b|\bfabricat|\bfake (?:citations|references|sources)\b|编造|瞎编|幻觉|虚构",
    negation: r"\bknows? everything\b|\bnever (?:wrong|makes mistakes)\b|什么都(?:懂|知道)|不会错",
    frequency_graded: true,
};
