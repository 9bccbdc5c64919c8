use std::fmt;

/// Machine-readable error codes for scripts and agents driving the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    NoProjects,
    ManifestParseError,
    ProjectsDirMissing,
    InvalidCategory,
    UnknownCohort,
    CatalogParseError,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1001",
            Self::NoProjects => "E2001",
            Self::ManifestParseError => "E2002",
            Self::ProjectsDirMissing => "E2003",
            Self::InvalidCategory => "E3001",
            Self::UnknownCohort => "E3002",
            Self::CatalogParseError => "E4001",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::NoProjects => "No projects found",
            Self::ManifestParseError => "Project manifest parse error",
            Self::ProjectsDirMissing => "Projects directory missing",
            Self::InvalidCategory => "Invalid category",
            Self::UnknownCohort => "Unknown recruit cohort",
            Self::CatalogParseError => "Recruit catalog parse error",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in .showcase/config.toml and retry."),
            Self::NoProjects => Some("Add at least one .json or .yaml manifest under the projects directory."),
            Self::ManifestParseError => {
                Some("Each manifest needs name, thumbnail, tags, field and generation.")
            }
            Self::ProjectsDirMissing => Some("Pass --projects <DIR> pointing at the manifests."),
            Self::InvalidCategory => Some("Use one of: all, web, ios, android, ml."),
            Self::UnknownCohort => Some("Use a cohort listed under [recruit] cohorts."),
            Self::CatalogParseError => Some("Check the recruit catalog YAML/JSON syntax."),
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
