//! Speaker-prefixed transcript parsing.
//!
//! Interview and chat exports mark each turn with a speaker prefix
//! (`User:`, `Interviewer:`, `受访者：`...). Only the participant's own words
//! carry evidence about their behavior, so extraction can be restricted to
//! those turns.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static RE_SPEAKER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:\*\*)?(user|interviewee|participant|human|me|用户|受访者|ai|assistant|interviewer|chatgpt|gpt|claude|bot|助手|采访者|访谈者)(?:\*\*)?\s*[:：]\s*",
    )
    .ok()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Participant,
    Assistant,
}

impl Speaker {
    fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "user" | "interviewee" | "participant" | "human" | "me" | "用户" | "受访者" => {
                Speaker::Participant
            }
            _ => Speaker::Assistant,
        }
    }
}

/// One speaker turn. Unprefixed lines continue the previous turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

/// Split a transcript into speaker turns.
///
/// Returns an empty list when no line carries a speaker prefix. Lines before
/// the first prefixed line belong to no turn and are dropped.
pub fn parse_turns(text: &str) -> Vec<Turn> {
    let Some(re) = RE_SPEAKER.as_ref() else {
        return Vec::new();
    };
    let mut turns: Vec<Turn> = Vec::new();
    for line in text.lines() {
        if let Some(caps) = re.captures(line) {
            let label = caps.get(1).map_or("", |m| m.as_str());
            let rest = caps.get(0).map_or(line, |m| &line[m.end()..]);
            turns.push(Turn {
                speaker: Speaker::from_label(label),
                text: rest.to_string(),
            });
        } else if let Some(current) = turns.last_mut() {
            current.text.push('\n');
            current.text.push_str(line);
        }
    }
    turns
}

/// The participant's own words: all participant turns joined by newlines,
/// or the whole text when it has no speaker prefixes.
pub fn participant_text(text: &str) -> String {
    let turns = parse_turns(text);
    if turns.is_empty() {
        return text.to_string();
    }
    turns
        .into_iter()
        .filter(|t| t.speaker == Speaker::Participant)
        .map(|t| t.text)
        .collect::<Vec<_>>()
        .join("\n")
}
