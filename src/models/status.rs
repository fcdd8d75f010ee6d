use serde::{Deserialize, Deserializer, Serialize};

/// Workflow stage of a punch-list item.
///
/// The only way to move between stages is [`Status::advance`], which walks
/// the fixed cycle Pending → Fix → Closed → Pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    #[default]
    Pending,
    Fix,
    Closed,
}

impl Status {
    /// Cycle order, also used to render the status toggle.
    pub const CYCLE: [Status; 3] = [Status::Pending, Status::Fix, Status::Closed];

    /// Next stage in the cycle, wrapping from Closed back to Pending.
    pub fn advance(self) -> Self {
        let idx = Self::CYCLE.iter().position(|s| *s == self).unwrap_or(0);
        Self::CYCLE[(idx + 1) % Self::CYCLE.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Fix => "Fix",
            Status::Closed => "Closed",
        }
    }
}

impl<'de> Deserialize<'de> for Status {
    /// Stored names outside the cycle read back as Pending.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::CYCLE
            .into_iter()
            .find(|s| s.as_str() == name)
            .unwrap_or(Status::Pending))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
