use serde::{Deserialize, Serialize};

pub const KANNADA_TAG: &str = "kn-IN";
pub const HINDI_TAG: &str = "hi-IN";

/// Output language for every user-facing message.
///
/// Only the two alternate tags are recognised, by exact match. Anything
/// else, including a missing tag, collapses to English. The raw tag is kept
/// separately by callers because engines receive it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    English,
    Kannada,
    Hindi,
}

impl Language {
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(KANNADA_TAG) => Language::Kannada,
            Some(HINDI_TAG) => Language::Hindi,
            _ => Language::English,
        }
    }

    /// English name of the language, used in log lines.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Kannada => "Kannada",
            Language::Hindi => "Hindi",
        }
    }
}
