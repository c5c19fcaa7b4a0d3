//! # Knowledge Base
//!
//! File: cli/src/dialogue/knowledge.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! ## Overview
//!
//! The static content the bot answers with. Every [`TopicId`] owns a pool of
//! one or more canned responses: the seven core topics carry several tips each
//! (a "tip pool"), the keyword and second-tier topics carry a single answer.
//!
//! The keyword table used by [`match_keyword`] is an ordered slice; the first
//! registered key that occurs in the text wins. Registration order:
//! `ransomware`, `malware`, `virus`, `vpn`, `scam`, `encrypt`, `backup`.
//! `ransomware` is registered before `malware` so the more specific answer
//! is reached first.
//!
use crate::core::error::CyberbotError;
use std::fmt;
use std::str::FromStr;

/// A fixed subject in the safety-tips domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TopicId {
    Password,
    Phishing,
    Privacy,
    Antivirus,
    SocialMedia,
    SoftwareUpdate,
    Firewall,
    Ransomware,
    Malware,
    Vpn,
    Scam,
    Encryption,
    Backup,
    SafeBrowsing,
    TwoFactor,
    PublicWifi,
}

impl TopicId {
    /// Every topic, in listing order.
    pub const ALL: [TopicId; 16] = [
        TopicId::Password,
        TopicId::Phishing,
        TopicId::Privacy,
        TopicId::Antivirus,
        TopicId::SocialMedia,
        TopicId::SoftwareUpdate,
        TopicId::Firewall,
        TopicId::Ransomware,
        TopicId::Malware,
        TopicId::Vpn,
        TopicId::Scam,
        TopicId::Encryption,
        TopicId::Backup,
        TopicId::SafeBrowsing,
        TopicId::TwoFactor,
        TopicId::PublicWifi,
    ];

    /// Stable snake_case identifier, accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            TopicId::Password => "password",
            TopicId::Phishing => "phishing",
            TopicId::Privacy => "privacy",
            TopicId::Antivirus => "antivirus",
            TopicId::SocialMedia => "social_media",
            TopicId::SoftwareUpdate => "software_update",
            TopicId::Firewall => "firewall",
            TopicId::Ransomware => "ransomware",
            TopicId::Malware => "malware",
            TopicId::Vpn => "vpn",
            TopicId::Scam => "scam",
            TopicId::Encryption => "encryption",
            TopicId::Backup => "backup",
            TopicId::SafeBrowsing => "safe_browsing",
            TopicId::TwoFactor => "two_factor",
            TopicId::PublicWifi => "public_wifi",
        }
    }

    /// Human-readable label used in follow-up offers.
    pub fn label(self) -> &'static str {
        match self {
            TopicId::Password => "password safety",
            TopicId::Phishing => "phishing",
            TopicId::Privacy => "online privacy",
            TopicId::Antivirus => "antivirus software",
            TopicId::SocialMedia => "social media safety",
            TopicId::SoftwareUpdate => "software updates",
            TopicId::Firewall => "firewalls",
            TopicId::Ransomware => "ransomware",
            TopicId::Malware => "malware",
            TopicId::Vpn => "VPNs",
            TopicId::Scam => "online scams",
            TopicId::Encryption => "encryption",
            TopicId::Backup => "backups",
            TopicId::SafeBrowsing => "safe browsing",
            TopicId::TwoFactor => "two-factor authentication",
            TopicId::PublicWifi => "public Wi-Fi",
        }
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TopicId {
    type Err = CyberbotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        TopicId::ALL
            .into_iter()
            .find(|topic| topic.name() == wanted)
            .ok_or_else(|| CyberbotError::UnknownTopic {
                name: s.trim().to_string(),
            })
    }
}

const PASSWORD_TIPS: &[&str] = &[
    "Use a long passphrase of at least 12 characters mixing words, numbers and symbols.",
    "Never reuse a password across accounts. One breach should not unlock everything.",
    "A password manager can generate and remember strong, unique passwords for you.",
    "Avoid personal details like birthdays or pet names in your passwords; they are easy to guess.",
    "Change a password straight away if a service tells you it has been part of a breach.",
];

const PHISHING_TIPS: &[&str] = &[
    "Be cautious of emails asking for personal information. Legitimate organisations rarely ask for it by email.",
    "Hover over links before clicking to check where they really lead.",
    "Watch for urgent or threatening language. Scammers want you to act before you think.",
    "Check the sender's address carefully; phishing emails often use look-alike domains.",
    "When in doubt, contact the company through its official website or phone number instead of replying.",
];

const PRIVACY_TIPS: &[&str] = &[
    "Review the privacy settings on your accounts and limit who can see your information.",
    "Think twice before sharing your location, address or phone number online.",
    "Read app permissions before installing and deny the ones an app does not need.",
    "Clear cookies regularly and consider a privacy-focused browser or search engine.",
];

const ANTIVIRUS_TIPS: &[&str] = &[
    "Install reputable antivirus software and keep it running in the background.",
    "Keep your antivirus definitions up to date so it recognises the newest threats.",
    "Run a full system scan regularly, not just the quick scan.",
    "Only download antivirus tools from the vendor's official site; fake scanners are a common trap.",
];

const SOCIAL_MEDIA_TIPS: &[&str] = &[
    "Set your social media profiles to private and review your friend or follower lists.",
    "Avoid posting holiday plans or your live location while you are away from home.",
    "Be wary of quizzes that ask for your first pet or street name; those are common security answers.",
    "Do not accept connection requests from people you do not know.",
];

const SOFTWARE_UPDATE_TIPS: &[&str] = &[
    "Turn on automatic updates so security fixes are installed as soon as they are released.",
    "Update your operating system, browser and apps; attackers target known, unpatched holes.",
    "Restart your device when an update asks you to. Many patches only apply after a reboot.",
    "Only install updates from official sources, never from pop-ups on websites.",
];

const FIREWALL_TIPS: &[&str] = &[
    "Keep your operating system's firewall switched on at all times.",
    "A firewall filters traffic coming into your device and blocks unauthorised connections.",
    "Check that your home router's built-in firewall is enabled as well.",
    "Be careful when an app asks you to allow it through the firewall; only allow programs you trust.",
];

const RANSOMWARE_ANSWER: &[&str] = &[
    "Ransomware locks your files and demands payment. Keep offline backups and never open unexpected attachments.",
];

const MALWARE_ANSWER: &[&str] = &[
    "Malware is malicious software such as viruses, worms and spyware. Avoid downloads from untrusted sites and keep your antivirus active.",
];

const VPN_ANSWER: &[&str] = &[
    "A VPN encrypts your internet connection, which is especially useful on networks you do not control. Choose a reputable provider.",
];

const SCAM_ANSWER: &[&str] = &[
    "If an offer sounds too good to be true, it probably is. Never send money or gift cards to someone you have only met online.",
];

const ENCRYPTION_ANSWER: &[&str] = &[
    "Encryption scrambles your data so only someone with the key can read it. Turn on device encryption and prefer sites that use HTTPS.",
];

const BACKUP_ANSWER: &[&str] = &[
    "Follow the 3-2-1 rule: three copies of your data, on two different media, with one copy stored off-site.",
];

const SAFE_BROWSING_ANSWER: &[&str] = &[
    "Look for HTTPS and the padlock icon before entering details, and avoid downloading files from sites you do not trust.",
];

const TWO_FACTOR_ANSWER: &[&str] = &[
    "Two-factor authentication adds a second step, like a code from an app, so a stolen password alone is not enough. Turn it on wherever you can.",
];

const PUBLIC_WIFI_ANSWER: &[&str] = &[
    "Avoid logging in to banking or shopping sites on public Wi-Fi. If you must, use a VPN.",
];

/// Keyword table, scanned in registration order.
const KEYWORDS: &[(&str, TopicId)] = &[
    ("ransomware", TopicId::Ransomware),
    ("malware", TopicId::Malware),
    ("virus", TopicId::Malware),
    ("vpn", TopicId::Vpn),
    ("scam", TopicId::Scam),
    ("encrypt", TopicId::Encryption),
    ("backup", TopicId::Backup),
];

/// Returns the candidate responses for `topic`. Never empty.
pub fn lookup(topic: TopicId) -> &'static [&'static str] {
    match topic {
        TopicId::Password => PASSWORD_TIPS,
        TopicId::Phishing => PHISHING_TIPS,
        TopicId::Privacy => PRIVACY_TIPS,
        TopicId::Antivirus => ANTIVIRUS_TIPS,
        TopicId::SocialMedia => SOCIAL_MEDIA_TIPS,
        TopicId::SoftwareUpdate => SOFTWARE_UPDATE_TIPS,
        TopicId::Firewall => FIREWALL_TIPS,
        TopicId::Ransomware => RANSOMWARE_ANSWER,
        TopicId::Malware => MALWARE_ANSWER,
        TopicId::Vpn => VPN_ANSWER,
        TopicId::Scam => SCAM_ANSWER,
        TopicId::Encryption => ENCRYPTION_ANSWER,
        TopicId::Backup => BACKUP_ANSWER,
        TopicId::SafeBrowsing => SAFE_BROWSING_ANSWER,
        TopicId::TwoFactor => TWO_FACTOR_ANSWER,
        TopicId::PublicWifi => PUBLIC_WIFI_ANSWER,
    }
}

/// First keyword-table entry whose key occurs in `text`.
pub fn match_keyword(text: &str) -> Option<TopicId> {
    KEYWORDS
        .iter()
        .find(|(key, _)| text.contains(key))
        .map(|&(_, topic)| topic)
}

/// Keyword-table keys that lead to `topic`, in registration order.
pub fn keywords_for(topic: TopicId) -> impl Iterator<Item = &'static str> {
    KEYWORDS
        .iter()
        .filter(move |(_, t)| *t == topic)
        .map(|&(key, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_has_non_empty_responses() {
        for topic in TopicId::ALL {
            let pool = lookup(topic);
            assert!(!pool.is_empty(), "{topic} has no responses");
            assert!(pool.iter().all(|s| !s.trim().is_empty()), "{topic} has a blank response");
        }
    }

    #[test]
    fn core_topics_have_tip_pools() {
        for topic in [
            TopicId::Password,
            TopicId::Phishing,
            TopicId::Privacy,
            TopicId::Antivirus,
            TopicId::SocialMedia,
            TopicId::SoftwareUpdate,
            TopicId::Firewall,
        ] {
            assert!(lookup(topic).len() > 1, "{topic} should have several tips");
        }
    }

    #[test]
    fn keyword_match_first_registered_wins() {
        // Both "ransomware" and "malware"-family keys could apply; registration order decides.
        assert_eq!(match_keyword("is ransomware a virus?"), Some(TopicId::Ransomware));
        assert_eq!(match_keyword("i think i have a virus"), Some(TopicId::Malware));
        assert_eq!(match_keyword("should i use a vpn"), Some(TopicId::Vpn));
        assert_eq!(match_keyword("how does encryption work"), Some(TopicId::Encryption));
        assert_eq!(match_keyword("tell me a joke"), None);
    }

    #[test]
    fn topic_names_round_trip_through_from_str() {
        for topic in TopicId::ALL {
            assert_eq!(topic.name().parse::<TopicId>(), Ok(topic));
        }
        assert_eq!("Social Media".parse::<TopicId>(), Ok(TopicId::SocialMedia));
        assert_eq!("two-factor".parse::<TopicId>(), Ok(TopicId::TwoFactor));
    }

    #[test]
    fn unknown_topic_name_is_an_error() {
        assert_eq!(
            "quantum".parse::<TopicId>(),
            Err(CyberbotError::UnknownTopic {
                name: "quantum".into()
            })
        );
    }

    #[test]
    fn keywords_for_lists_registered_keys() {
        assert_eq!(keywords_for(TopicId::Malware).collect::<Vec<_>>(), vec!["malware", "virus"]);
        assert_eq!(keywords_for(TopicId::Phishing).count(), 0);
    }
}
