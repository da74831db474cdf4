use serde::{Deserialize, Serialize};

/// Contents of the optional settings file.
///
/// Every key is optional; a missing file is the same as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Hosts CSV path. `~/` is expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv: Option<String>,

    /// Generated SSH client config path. `~/` is expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_config: Option<String>,

    /// Directory relative `IdentityFile` names are joined onto.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_dir: Option<String>,

    /// Reject unparseable numbers instead of reading them as 0.
    #[serde(default)]
    pub strict_numbers: bool,
}
