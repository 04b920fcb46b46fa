//! Site-check classification and its label mapping.

/// Result of probing a listed site.
///
/// Ephemeral: used only to choose the labels that replace the issue's
/// label set, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The site advertises the Stellar theme.
    Stellar {
        /// The `theme-version` attribute, when the site advertises one.
        version: Option<String>,
    },
    /// The page loaded but does not advertise the Stellar theme.
    NotStellar,
    /// The fetch failed: network error, timeout, or non-success status.
    Error,
}

impl CheckOutcome {
    /// Whether this outcome is a transient fetch failure worth retrying.
    pub fn is_error(&self) -> bool {
        matches!(self, CheckOutcome::Error)
    }

    /// The labels that replace the issue's full label set for this outcome.
    pub fn labels(&self) -> Vec<String> {
        match self {
            CheckOutcome::Stellar { version: Some(v) } => vec![format!("Stellar {v}")],
            CheckOutcome::Stellar { version: None } => vec!["Stellar".to_string()],
            CheckOutcome::NotStellar => vec!["NOT Stellar".to_string()],
            CheckOutcome::Error => vec!["NETWORK ERROR".to_string()],
        }
    }
}
