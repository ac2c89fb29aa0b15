//! Keyword matching primitives: alert gate, substring matcher, and the
//! region/topic taggers used to label headlines.
//!
//! Matching is deliberately dumb: case-insensitive substring containment,
//! no tokenization or stemming. Headlines are short and the keyword lists
//! are curated, so the false-positive rate stays acceptable.

/// Terms whose presence in a headline marks it high-priority.
pub const ALERT_KEYWORDS: &[&str] = &[
    "war",
    "invasion",
    "military",
    "nuclear",
    "sanctions",
    "missile",
    "attack",
    "troops",
    "conflict",
    "strike",
    "bomb",
    "casualties",
    "ceasefire",
    "treaty",
    "nato",
    "coup",
    "martial law",
    "emergency",
    "assassination",
    "terrorist",
    "hostage",
    "evacuation",
];

/// Region tags applied to headlines for the intel feed.
pub const REGION_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "EUROPE",
        &[
            "nato", "eu", "european", "ukraine", "russia", "germany", "france", "uk", "britain",
            "poland",
        ],
    ),
    (
        "MENA",
        &[
            "iran",
            "israel",
            "saudi",
            "syria",
            "iraq",
            "gaza",
            "lebanon",
            "yemen",
            "houthi",
            "middle east",
        ],
    ),
    (
        "APAC",
        &[
            "china",
            "taiwan",
            "japan",
            "korea",
            "indo-pacific",
            "south china sea",
            "asean",
            "philippines",
        ],
    ),
    (
        "AMERICAS",
        &["us", "america", "canada", "mexico", "brazil", "venezuela", "latin"],
    ),
    (
        "AFRICA",
        &["africa", "sahel", "niger", "sudan", "ethiopia", "somalia"],
    ),
];

/// Topic tags applied to headlines for the intel feed.
pub const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "CYBER",
        &["cyber", "hack", "ransomware", "malware", "breach", "apt", "vulnerability"],
    ),
    (
        "NUCLEAR",
        &["nuclear", "icbm", "warhead", "nonproliferation", "uranium", "plutonium"],
    ),
    (
        "CONFLICT",
        &["war", "military", "troops", "invasion", "strike", "missile", "combat", "offensive"],
    ),
    (
        "INTEL",
        &["intelligence", "espionage", "spy", "cia", "mossad", "fsb", "covert"],
    ),
    (
        "DEFENSE",
        &["pentagon", "dod", "defense", "military", "army", "navy", "air force"],
    ),
    (
        "DIPLO",
        &["diplomat", "embassy", "treaty", "sanctions", "talks", "summit", "bilateral"],
    ),
];

/// All keywords from `keywords` contained in `text`, case-insensitive.
/// Empty keyword list yields no matches.
pub fn match_keywords<'a>(text: &str, keywords: &[&'a str]) -> Vec<&'a str> {
    let lower = text.to_lowercase();
    keywords
        .iter()
        .filter(|kw| lower.contains(&kw.to_lowercase()))
        .copied()
        .collect()
}

/// Owned-list variant for user-supplied monitor keywords (already lowercased
/// by the registry, but lowercased again here so direct callers are safe).
pub fn match_owned_keywords<'a>(text: &str, keywords: &'a [String]) -> Vec<&'a str> {
    let lower = text.to_lowercase();
    keywords
        .iter()
        .filter(|kw| lower.contains(&kw.to_lowercase()))
        .map(String::as_str)
        .collect()
}

/// True iff the lowercased title contains at least one alert keyword.
pub fn is_alert(title: &str) -> bool {
    let lower = title.to_lowercase();
    ALERT_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Region tags for a headline, in table order.
pub fn region_tags(title: &str) -> Vec<&'static str> {
    REGION_KEYWORDS
        .iter()
        .filter(|(_, kws)| !match_keywords(title, kws).is_empty())
        .map(|(tag, _)| *tag)
        .collect()
}

/// Topic tags for a headline, in table order.
pub fn topic_tags(title: &str) -> Vec<&'static str> {
    TOPIC_KEYWORDS
        .iter()
        .filter(|(_, kws)| !match_keywords(title, kws).is_empty())
        .map(|(tag, _)| *tag)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_is_case_insensitive_substring() {
        let matched = match_keywords("Russia Masses Troops Near Border", &["russia", "troops"]);
        assert_eq!(matched, vec!["russia", "troops"]);
    }

    #[test]
    fn empty_keyword_list_matches_nothing() {
        assert!(match_keywords("anything at all", &[]).is_empty());
    }

    #[test]
    fn substring_containment_no_word_boundaries() {
        // substring containment, not token match: "us" hits inside "Russia"
        assert_eq!(match_keywords("Russia sanctions", &["us"]), vec!["us"]);
    }

    #[test]
    fn alert_detection_matches_configured_list() {
        assert!(is_alert("Missile strike reported near the border"));
        assert!(is_alert("Martial Law declared in the capital"));
        assert!(!is_alert("Markets rally on earnings beat"));
    }

    #[test]
    fn alert_is_exactly_the_configured_list() {
        // every configured keyword alone must flip the flag
        for kw in ALERT_KEYWORDS {
            assert!(is_alert(&format!("headline about {kw} today")), "{kw}");
        }
    }

    #[test]
    fn region_and_topic_tagging() {
        let title = "NATO summit weighs Ukraine missile deliveries";
        assert!(region_tags(title).contains(&"EUROPE"));
        let topics = topic_tags(title);
        assert!(topics.contains(&"CONFLICT"));
        assert!(topics.contains(&"DIPLO"));
    }
}
