//! Heuristic classification for incoming intake requests.

pub mod model;

use model::{AnalysisResult, Category, Priority};

/// Keywords routed to the IT queue. Checked before the facilities group,
/// so IT wins when both groups match.
const IT_KEYWORDS: [&str; 4] = ["wifi", "login", "software", "laptop"];

/// Keywords routed to the facilities queue.
const FACILITIES_KEYWORDS: [&str; 4] = ["leak", "light", "ac", "furniture"];

/// Keywords that escalate priority to High.
const HIGH_PRIORITY_KEYWORDS: [&str; 4] = ["urgent", "broken", "emergency", "immediately"];

/// Classify a request title and description.
///
/// Lower-cases the concatenated text and tests plain substring containment
/// against the keyword groups. The matching is intentionally literal:
/// "ac" matches inside unrelated words and "urgent" matches inside
/// "not urgent".
pub fn classify(title: &str, description: &str) -> AnalysisResult {
    let text = format!("{} {}", title, description).to_lowercase();

    let suggested_category = if contains_any(&text, &IT_KEYWORDS) {
        Category::It
    } else if contains_any(&text, &FACILITIES_KEYWORDS) {
        Category::Facilities
    } else {
        Category::General
    };

    let suggested_priority = if contains_any(&text, &HIGH_PRIORITY_KEYWORDS) {
        Priority::High
    } else {
        Priority::Low
    };

    AnalysisResult {
        suggested_category,
        suggested_priority,
        sentiment: suggested_priority.sentiment(),
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
