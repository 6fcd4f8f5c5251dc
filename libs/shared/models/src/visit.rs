use serde::{Deserialize, Serialize};
use std::fmt;

/// How a consultation takes place.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum VisitType {
    #[default]
    Video,
    InPerson,
}

impl VisitType {
    /// Label shown next to the choice, e.g. "Video Call".
    pub fn display_label(&self) -> &'static str {
        match self {
            VisitType::Video => "Video Call",
            VisitType::InPerson => "In-Person",
        }
    }
}

impl fmt::Display for VisitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisitType::Video => write!(f, "video"),
            VisitType::InPerson => write!(f, "in-person"),
        }
    }
}
