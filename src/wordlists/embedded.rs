//! Embedded word lists
//!
//! Small lists compiled into the binary: the fallback words used when the
//! word-of-the-day endpoint is unreachable, and an answer pool for offline
//! play.

/// Words substituted when the remote word source fails
pub const FALLBACK_WORDS: &[&str] = &[
    "hello", "world", "games", "words", "coded", "music", "light", "space",
];

/// Answer pool for offline play
pub const OFFLINE_ANSWERS: &[&str] = &[
    "about", "apple", "beach", "brave", "bread", "brick", "candy", "chair",
    "charm", "chess", "cloud", "crane", "crate", "cream", "dance", "dream",
    "drive", "earth", "field", "flame", "fresh", "frost", "fruit", "glass",
    "grape", "grasp", "green", "happy", "heart", "house", "juice", "lemon",
    "lunar", "march", "money", "mount", "night", "ocean", "olive", "paint",
    "peach", "pearl", "piano", "plant", "quiet", "radio", "river", "salad",
    "shine", "smile", "snack", "spice", "sport", "stone", "storm", "sugar",
    "sweet", "table", "tiger", "toast", "train", "vivid", "water", "wheat",
];

/// Number of fallback words
pub const FALLBACK_COUNT: usize = 8;

/// Number of offline answer words
pub const OFFLINE_COUNT: usize = 64;
