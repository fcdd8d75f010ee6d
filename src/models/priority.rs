use clap::ValueEnum;

/// Priority codes accepted by the form. Records keep the raw code as text
/// (`"1"`..`"4"`), this enum is the typed view used at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Priority {
    #[value(name = "1")]
    Critical,
    #[value(name = "2")]
    Serious,
    #[value(name = "3")]
    Minor,
    #[value(name = "4")]
    DesignIssue,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::Serious,
        Priority::Minor,
        Priority::DesignIssue,
    ];

    /// Convert enum → stored code
    pub fn code(&self) -> &'static str {
        match self {
            Priority::Critical => "1",
            Priority::Serious => "2",
            Priority::Minor => "3",
            Priority::DesignIssue => "4",
        }
    }

    /// Convert stored code → enum
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "1" => Some(Priority::Critical),
            "2" => Some(Priority::Serious),
            "3" => Some(Priority::Minor),
            "4" => Some(Priority::DesignIssue),
            _ => None,
        }
    }

    /// Plain name, without the colour marker (used by the filter options).
    pub fn name(&self) -> &'static str {
        match self {
            Priority::Critical => "1 - Critical",
            Priority::Serious => "2 - Serious",
            Priority::Minor => "3 - Minor",
            Priority::DesignIssue => "4 - Design Issue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "1 - Critical (🔴)",
            Priority::Serious => "2 - Serious (🟠)",
            Priority::Minor => "3 - Minor (🟡)",
            Priority::DesignIssue => "4 - Design Issue (🔵)",
        }
    }

    /// Marker colour as RGB components in 0..=1 (red, orange, yellow, blue).
    pub fn rgb(&self) -> (f32, f32, f32) {
        match self {
            Priority::Critical => (0.86, 0.16, 0.16),
            Priority::Serious => (1.0, 0.6, 0.2),
            Priority::Minor => (0.98, 0.8, 0.1),
            Priority::DesignIssue => (0.2, 0.45, 0.9),
        }
    }
}

/// Human-readable label for a stored priority code.
/// Unknown codes map to an empty string.
pub fn priority_label(code: &str) -> &'static str {
    match code {
        "1" => Priority::Critical.label(),
        "2" => Priority::Serious.label(),
        "3" => Priority::Minor.label(),
        "4" => Priority::DesignIssue.label(),
        _ => "",
    }
}
