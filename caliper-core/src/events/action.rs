//! The Caliper action vocabulary

use std::fmt;

use serde::{Serialize, Serializer};

/// What the actor did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Annotation
    Bookmarked,
    Highlighted,
    Shared,
    Tagged,

    // Assessment and assessment item
    Started,
    Paused,
    Restarted,
    Submitted,
    Completed,
    Skipped,
    Reviewed,
    Viewed,

    // Navigation, session, outcome
    NavigatedTo,
    LoggedIn,
    LoggedOut,
    TimedOut,
    Graded,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bookmarked => "Bookmarked",
            Self::Highlighted => "Highlighted",
            Self::Shared => "Shared",
            Self::Tagged => "Tagged",
            Self::Started => "Started",
            Self::Paused => "Paused",
            Self::Restarted => "Restarted",
            Self::Submitted => "Submitted",
            Self::Completed => "Completed",
            Self::Skipped => "Skipped",
            Self::Reviewed => "Reviewed",
            Self::Viewed => "Viewed",
            Self::NavigatedTo => "NavigatedTo",
            Self::LoggedIn => "LoggedIn",
            Self::LoggedOut => "LoggedOut",
            Self::TimedOut => "TimedOut",
            Self::Graded => "Graded",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "http://purl.imsglobal.org/vocab/caliper/v1/action#{}", self.name())
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
