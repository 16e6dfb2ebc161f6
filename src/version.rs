use chrono::{DateTime, Utc};

/// build information recorded by build.rs
#[derive(Debug, Clone)]
pub struct Version {
    pub semver: &'static str,
    pub commit: String,
    pub short_commit: String,
    pub timestamp: DateTime<Utc>,
    pub channel: String,
    pub build_date: DateTime<Utc>,
    pub dirty: bool,
}

impl Version {
    pub fn current() -> Self {
        let timestamp =
            DateTime::from_timestamp(env!("GIT_TIMESTAMP").parse::<i64>().unwrap_or(0), 0)
                .unwrap_or_else(Utc::now);

        Self {
            semver: env!("CARGO_PKG_VERSION"),
            commit: env!("GIT_COMMIT").to_string(),
            short_commit: env!("GIT_COMMIT_SHORT").to_string(),
            timestamp,
            channel: env!("RELEASE_CHANNEL").to_string(),
            build_date: env!("BUILD_DATE").parse().unwrap_or_else(|_| Utc::now()),
            dirty: env!("GIT_DIRTY") == "true",
        }
    }

    /// "0.1.0 a3f2b1c4 (dev, 2024-02-11)", with " *" after the hash when dirty
    pub fn version_string(&self) -> String {
        let dirty_marker = if self.dirty { " *" } else { "" };
        format!(
            "{} {}{} ({}, {})",
            self.semver,
            self.short_commit,
            dirty_marker,
            self.channel,
            self.timestamp.format("%Y-%m-%d")
        )
    }
}
