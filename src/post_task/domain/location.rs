//! Where a posted task should be done.

use super::ParseLocationModeError;
use serde::{Deserialize, Serialize};

/// Location mode selected on the location step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationMode {
    /// No mode selected yet.
    #[default]
    Unset,
    /// The Flexer must be physically present.
    InPerson,
    /// The Flexer can do the task remotely.
    Online,
}

impl LocationMode {
    /// Returns the wire representation used by the marketplace API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::InPerson => "in-person",
            Self::Online => "online",
        }
    }
}

impl TryFrom<&str> for LocationMode {
    type Error = ParseLocationModeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "" => Ok(Self::Unset),
            "in-person" => Ok(Self::InPerson),
            "online" => Ok(Self::Online),
            _ => Err(ParseLocationModeError(value.to_owned())),
        }
    }
}

/// Location choice for a task draft.
///
/// The ZIP code lives inside the in-person variant, so online tasks cannot
/// carry one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum TaskLocation {
    /// No mode selected yet.
    #[default]
    Unset,
    /// The task happens at a physical address.
    InPerson {
        /// ZIP code entered by the poster, possibly still empty.
        zip_code: String,
    },
    /// The task can be done remotely.
    Online,
}

impl TaskLocation {
    /// Returns the selected mode.
    #[must_use]
    pub const fn mode(&self) -> LocationMode {
        match self {
            Self::Unset => LocationMode::Unset,
            Self::InPerson { .. } => LocationMode::InPerson,
            Self::Online => LocationMode::Online,
        }
    }

    /// Returns the entered ZIP code, or an empty string outside in-person
    /// mode.
    #[must_use]
    pub fn zip_code(&self) -> &str {
        match self {
            Self::InPerson { zip_code } => zip_code,
            Self::Unset | Self::Online => "",
        }
    }
}
