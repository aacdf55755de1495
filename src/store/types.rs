use serde::{Deserialize, Serialize};

/// A single vehicle-diagnostic record.
///
/// Wire names match the source dataset exactly (Italian field names,
/// including the space in `Codice SDF`). Every field is optional in the
/// source data; an absent field compares as the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    /// Vehicle model name.
    #[serde(rename = "modello", default)]
    pub model: Option<String>,
    /// Electronic Control Unit identifier.
    #[serde(rename = "ECU", default)]
    pub ecu: Option<String>,
    /// Suspect Parameter Number of the fault.
    #[serde(rename = "SPN", default)]
    pub spn: Option<String>,
    /// Failure Mode Identifier qualifying the SPN.
    #[serde(rename = "FMI", default)]
    pub fmi: Option<String>,
    /// Secondary diagnostic classification code.
    #[serde(rename = "Codice SDF", default)]
    pub sdf_code: Option<String>,
    /// Identifier of the control module instance.
    #[serde(rename = "ID_CENTRALINA", default)]
    pub controller_id: Option<String>,
}

impl DiagnosticRecord {
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or("")
    }

    pub fn ecu(&self) -> &str {
        self.ecu.as_deref().unwrap_or("")
    }

    pub fn spn(&self) -> &str {
        self.spn.as_deref().unwrap_or("")
    }

    pub fn fmi(&self) -> &str {
        self.fmi.as_deref().unwrap_or("")
    }

    pub fn sdf_code(&self) -> &str {
        self.sdf_code.as_deref().unwrap_or("")
    }

    pub fn controller_id(&self) -> &str {
        self.controller_id.as_deref().unwrap_or("")
    }
}
