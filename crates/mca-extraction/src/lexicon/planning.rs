//! Planning family: P1 decomposition, P2 goal-setting, P3 strategy selection,
//! P4 resource planning.

use mca_core::Dimension;

use super::Vocabulary;

pub const DECOMPOSITION: Vocabulary = Vocabulary {
    dimension: Dimension::Decomposition,
    keywords_en: r"break (?:it |this |that |things |the task |the problem )?(?:down|into)|broke (?:it |this |things )?(?:down|into)|breaking (?:it |this |things )?(?:down|into)|decompos\w*|split (?:it |this |the task |things )?(?:up|into)|sub-?tasks?|smaller (?:parts|pieces|steps|tasks|chunks|questions)|step by step|one step at a time|piece by piece|in stages|outlines?",
    keywords_zh: "拆分|拆解|分解|分步|一步一步|逐步|分成|分块|大纲",
    strong: r"\bfirst\b[^.!?\n]{0,80}\bthen\b[^.!?\n]{0,80}\b(?:finally|lastly|after that)\b|\bstep (?:1|one)\b[^\n]{0,120}\bstep (?:2|two)\b|首先[^\n]{0,40}然后[^\n]{0,40}(?:最后|接着)|第一步[^\n]{0,40}第二步",
    moderate: r"\bfirst\b[^.!?\n]{0,60}\bthen\b|先[^。！？\n]{1,15}再",
    negation: r"\b(?:just|simply) (?:ask|throw|dump|paste) (?:it|the whole|everything)|\ball at once\b|\bthe whole thing at once\b|一次性(?:全部|都)|整个丢",
    frequency_graded: true,
};

pub const GOAL_SETTING: Vocabulary = Vocabulary {
    dimension: Dimension::GoalSetting,
    keywords_en: r"goals?|objectives?|aims?|targets?|what i want|desired (?:outcome|result)s?|expected (?:outcome|result|output)s?|requirements?|purpose",
    keywords_zh: "目标|目的|要求|想要的结果|期望",
    strong: r"\bsuccess criteria\b|\bacceptance criteria\b|\bdefinition of done\b|\bmeasurable\b|\bdeadline\b|\bby (?:monday|tuesday|wednesday|thursday|friday|tomorrow|next week|the end of)\b|\b(?:under|within|at most|no more than|at least) \d+ (?:words|pages|minutes|hours|days|characters)\b|(?:明确|具体)的?(?:目标|标准)|截止|验收标准|不超过\d+|至少\d+",
    moderate: r"\bclear (?:goal|idea|picture)\b|\bknow exactly what\b|\bspecif(?:y|ied) (?:what|the format|the length|the tone)|清楚(?:自己)?(?:要|想)",
    negation: r"\bno (?:clear |particular |specific )?(?:goal|idea what i want)\b|\bnot sure what i want\b|没有(?:明确的?)?目标|不知道(?:自己)?要什么",
    frequency_graded: true,
};

pub const STRATEGY_SELECTION: Vocabulary = Vocabulary {
    dimension: Dimension::StrategySelection,
    keywords_en: r"strateg\w*|approach(?:es)?|methods?|techniques?|which tool|which model|choose (?:a|the|between)|chose|options?",
    keywords_zh: "策略|方法|方式|思路|选择|办法",
    strong: r"\balternative(?:ly|s)?\b|\banother (?:approach|way|method|strategy)\b|\bplan b\b|\bif (?:that|it|this) (?:doesn't|does not|fails|didn't) work|\bcompare (?:the |two |different )?(?:approaches|options|methods|tools|models)\b|\bweigh(?:ed|ing)? (?:the |my )?options\b|备选|另一种(?:方法|方案|思路)|如果不行|比较(?:不同的?)?(?:方法|方案|工具)|或者换",
    moderate: r"\bdecide (?:how|which|whether)\b|\bbetter (?:approach|way|method)\b|\bpick(?:ed)? (?:a|the) (?:right|best)\b|选(?:一个|个)?(?:合适|最好)的|哪种方法",
    negation: r"\bwhatever (?:comes|works) first\b|\bdon't (?:really )?think about (?:how|which)\b|都一样|随便用",
    frequency_graded: true,
};

pub const RESOURCE_PLANNING: Vocabulary = Vocabulary {
    dimension: Dimension::ResourcePlanning,
    keywords_en: r"budget\w*|resources?|tools?|sources?|references?|databases?|materials?|how much time|time (?:limit|budget|frame)s?|timelines?|schedul\w*",
    keywords_zh: "时间|预算|资源|工具|资料|参考|数据库|文献",
    strong: r"\ballocat(?:e|ed|ing)\b|\bset aside\b|\bplan(?:ned)? (?:my|the|our) time\b|\bbudget(?:ed)? (?:\d+|an hour|a day)\b|\b\d+ (?:minutes|hours) (?:for|on)\b|安排(?:好)?时间|分配(?:时间|资源)|预留",
    moderate: r"\bgather(?:ed|ing)? (?:the )?(?:materials|sources|references|data)\b|\bprepare(?:d)? (?:the )?(?:materials|context|background)\b|\bwhich (?:sources|tools|databases)\b|先(?:准备|收集)(?:好)?(?:资料|材料)|收集资料",
    negation: r"\bdon't (?:bother|need) (?:with )?(?:sources|references|tools)\b|不需要(?:参考|资料)",
    frequency_graded: true,
};
