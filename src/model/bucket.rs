use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the four priority quadrants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    UrgentImportant,
    Important,
    Urgent,
    Low,
}

impl Bucket {
    /// All buckets in board display order: top-left, top-right,
    /// bottom-left, bottom-right.
    pub const ALL: [Bucket; 4] = [
        Bucket::Important,
        Bucket::UrgentImportant,
        Bucket::Low,
        Bucket::Urgent,
    ];

    /// The stored identifier for this bucket
    pub fn key(self) -> &'static str {
        match self {
            Bucket::UrgentImportant => "urgent_important",
            Bucket::Important => "important",
            Bucket::Urgent => "urgent",
            Bucket::Low => "low",
        }
    }

    /// Map a stored bucket identifier to a bucket. Unrecognized values
    /// classify as `Low` so stale data never strands a task off the board.
    pub fn classify(raw: &str) -> Bucket {
        match raw {
            "urgent_important" => Bucket::UrgentImportant,
            "important" => Bucket::Important,
            "urgent" => Bucket::Urgent,
            _ => Bucket::Low,
        }
    }

    /// Strict parse used by the CLI (unknown keys are an error there,
    /// unlike stored data). Accepts short aliases.
    pub fn from_key(raw: &str) -> Option<Bucket> {
        match raw {
            "urgent_important" | "ui" => Some(Bucket::UrgentImportant),
            "important" | "i" => Some(Bucket::Important),
            "urgent" | "u" => Some(Bucket::Urgent),
            "low" | "l" => Some(Bucket::Low),
            _ => None,
        }
    }

    /// Board heading for this bucket
    pub fn heading(self) -> &'static str {
        match self {
            Bucket::UrgentImportant => "Urgent & Important",
            Bucket::Important => "Important",
            Bucket::Urgent => "Urgent",
            Bucket::Low => "Low Priority",
        }
    }
}

/// The classifier fallback, used when a stored task carries no bucket field
impl Default for Bucket {
    fn default() -> Self {
        Bucket::Low
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown bucket: {0} (expected urgent_important, important, urgent, or low)")]
pub struct UnknownBucket(String);

impl FromStr for Bucket {
    type Err = UnknownBucket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bucket::from_key(s).ok_or_else(|| UnknownBucket(s.to_string()))
    }
}

impl Serialize for Bucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Bucket {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Lenient by design: `null` and unknown strings classify as Low
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or(Bucket::Low, Bucket::classify))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_valid_keys_round_trip() {
        for bucket in Bucket::ALL {
            assert_eq!(Bucket::classify(bucket.key()), bucket);
        }
    }

    #[test]
    fn classify_unknown_falls_back_to_low() {
        assert_eq!(Bucket::classify(""), Bucket::Low);
        assert_eq!(Bucket::classify("URGENT_IMPORTANT"), Bucket::Low);
        assert_eq!(Bucket::classify("someday"), Bucket::Low);
    }

    #[test]
    fn deserialize_null_and_garbage() {
        let b: Bucket = serde_json::from_str("null").unwrap();
        assert_eq!(b, Bucket::Low);
        let b: Bucket = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(b, Bucket::Low);
        let b: Bucket = serde_json::from_str("\"urgent\"").unwrap();
        assert_eq!(b, Bucket::Urgent);
    }

    #[test]
    fn from_key_is_strict() {
        assert_eq!(Bucket::from_key("urgent"), Some(Bucket::Urgent));
        assert_eq!(Bucket::from_key("u"), Some(Bucket::Urgent));
        assert_eq!(Bucket::from_key("someday"), None);
    }
}
