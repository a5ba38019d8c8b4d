use serde::{Deserialize, Serialize};

/// The three configuration lists driving UI dropdowns, persisted as one
/// JSON document. Wire field names keep the legacy camelCase form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionLists {
    #[serde(rename = "bankNames")]
    pub bank_names: Vec<String>,
    #[serde(rename = "appointmentTypes")]
    pub appointment_types: Vec<String>,
    #[serde(rename = "soinTypes")]
    pub soin_types: Vec<String>,
}

/// Partial update for [`OptionLists`]: fields left out of the request body
/// are left untouched by a merge.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionListsPatch {
    #[serde(rename = "bankNames", skip_serializing_if = "Option::is_none")]
    pub bank_names: Option<Vec<String>>,
    #[serde(rename = "appointmentTypes", skip_serializing_if = "Option::is_none")]
    pub appointment_types: Option<Vec<String>>,
    #[serde(rename = "soinTypes", skip_serializing_if = "Option::is_none")]
    pub soin_types: Option<Vec<String>>,
}

impl OptionLists {
    /// Built-in defaults used to seed a fresh store.
    pub fn defaults() -> Self {
        Self {
            bank_names: vec![
                "Attijariwafa Bank".to_string(),
                "Banque Populaire".to_string(),
                "BMCE Bank".to_string(),
                "CIH Bank".to_string(),
                "Société Générale".to_string(),
                "Crédit du Maroc".to_string(),
            ],
            appointment_types: vec![
                "Consultation".to_string(),
                "Contrôle".to_string(),
                "Urgence".to_string(),
            ],
            soin_types: vec![
                "Détartrage".to_string(),
                "Extraction".to_string(),
                "Traitement de carie".to_string(),
                "Blanchiment".to_string(),
            ],
        }
    }

    /// Replace each field present in the patch with its sanitized value.
    /// Absent fields keep their stored value.
    pub fn apply(&mut self, patch: OptionListsPatch) {
        if let Some(list) = patch.bank_names {
            self.bank_names = sanitize_list(list);
        }
        if let Some(list) = patch.appointment_types {
            self.appointment_types = sanitize_list(list);
        }
        if let Some(list) = patch.soin_types {
            self.soin_types = sanitize_list(list);
        }
    }
}

/// Trim entries, drop blanks, and deduplicate case-sensitively keeping the
/// first occurrence. Order is otherwise preserved.
pub fn sanitize_list(raw: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    for entry in raw {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }
        if out.iter().any(|seen| seen == trimmed) {
            continue;
        }
        out.push(trimmed.to_string());
    }
    out
}
