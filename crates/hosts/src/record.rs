//! SSH host record type.

/// One row of the hosts CSV.
///
/// Two records are equal only when all six fields match, so the same alias
/// may appear several times with different targets, users or priorities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HostRecord {
    /// Last ordering tie-break after `hostname` and `host`.
    pub priority: u64,
    /// Alias used as the `Host` pattern.
    pub host: String,
    /// Target address, emitted as `HostName` even when empty.
    pub hostname: String,
    /// Login user; empty means no `User` directive.
    pub user: String,
    /// Identity file, emitted verbatim; empty means no `IdentityFile` directive.
    pub identity_file: String,
    pub port: u16,
}

impl HostRecord {
    /// Creates a record from its six fields in CSV column order.
    pub fn new(
        priority: u64,
        host: impl Into<String>,
        hostname: impl Into<String>,
        user: impl Into<String>,
        identity_file: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            priority,
            host: host.into(),
            hostname: hostname.into(),
            user: user.into(),
            identity_file: identity_file.into(),
            port,
        }
    }

    /// Canonical ordering key: `(hostname, host, priority)`.
    #[must_use]
    pub fn sort_key(&self) -> (&str, &str, u64) {
        (&self.hostname, &self.host, self.priority)
    }
}
