//! Track label value object

use serde::{Deserialize, Serialize};

/// Which of the two prompt variants a track or result belongs to.
///
/// Ordering is significant: baseline is always processed and presented
/// before custom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackLabel {
    /// Seeded with the built-in default prompt
    Baseline,
    /// Seeded with the user-entered prompt (or the default one)
    Custom,
}

impl TrackLabel {
    /// Both labels in presentation order
    pub const ALL: [TrackLabel; 2] = [TrackLabel::Baseline, TrackLabel::Custom];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackLabel::Baseline => "baseline",
            TrackLabel::Custom => "custom",
        }
    }

    /// Label shown to the user
    pub fn display_name(&self) -> &'static str {
        match self {
            TrackLabel::Baseline => "Default",
            TrackLabel::Custom => "User",
        }
    }
}

impl std::fmt::Display for TrackLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_order() {
        assert_eq!(TrackLabel::ALL, [TrackLabel::Baseline, TrackLabel::Custom]);
        assert!(TrackLabel::Baseline < TrackLabel::Custom);
    }

    #[test]
    fn test_names() {
        assert_eq!(TrackLabel::Baseline.to_string(), "baseline");
        assert_eq!(TrackLabel::Custom.display_name(), "User");
    }
}
