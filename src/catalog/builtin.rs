use super::Category;

/// Neutral category of the built-in catalog.
pub const BUILTIN_DEFAULT_CATEGORY: &str = "Ocean Blue";

const PROFILES: &[(&str, &[&str], &str)] = &[
    (
        "Ruby Red",
        &[
            "ambitious", "driven", "compete", "lead", "challenge", "goals", "win", "achieve",
            "success", "power", "determined", "assertive", "confident",
        ],
        "The Passionate Driver",
    ),
    (
        "Ocean Blue",
        &[
            "people", "understand", "help", "connect", "emotional", "care", "empathy", "listen",
            "support", "feelings", "compassion", "sensitive",
        ],
        "The Deep Connector",
    ),
    (
        "Sunlight Yellow",
        &[
            "adventure", "explore", "fun", "travel", "new", "exciting", "spontaneous", "freedom",
            "happy", "optimistic", "energy", "creative",
        ],
        "The Joyful Explorer",
    ),
    (
        "Forest Green",
        &[
            "growing", "balance", "peace", "nature", "sustainable", "mindful", "harmony", "calm",
            "stability", "grounded", "patient", "nurture",
        ],
        "The Steady Builder",
    ),
    (
        "Amber Gold",
        &[
            "teach", "mentor", "share", "wisdom", "guide", "support", "inspire", "knowledge",
            "experience", "generous", "warm", "advise",
        ],
        "The Warm Mentor",
    ),
    (
        "Lavender Purple",
        &[
            "create", "art", "imagine", "design", "express", "beauty", "intuitive", "artistic",
            "vision", "inspiration", "original", "innovative",
        ],
        "The Creative Dreamer",
    ),
    (
        "Coral Pink",
        &[
            "friends", "laugh", "positive", "social", "energy", "vibrant", "enthusiastic",
            "playful", "joy", "connection", "upbeat", "cheerful",
        ],
        "The Playful Optimist",
    ),
    (
        "Earth Brown",
        &[
            "real", "honest", "loyal", "practical", "roots", "family", "traditional",
            "authentic", "reliable", "trustworthy", "down-to-earth", "genuine",
        ],
        "The Grounded Realist",
    ),
];

pub(super) fn builtin_categories() -> Vec<Category> {
    PROFILES
        .iter()
        .map(|(name, keywords, description)| Category {
            name: (*name).to_string(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            description: (*description).to_string(),
        })
        .collect()
}
