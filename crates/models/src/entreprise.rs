use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

/// The clinic's own company/legal profile, used to stamp generated
/// documents. At most one record exists. `if` is the fiscal identifier;
/// the Rust field is renamed because of the keyword.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Entreprise {
    pub id: Uuid,
    pub ice: u64,
    pub cnss: u64,
    pub rc: u64,
    #[serde(rename = "if")]
    pub fiscal_id: u64,
    pub rib: u64,
    pub patente: u64,
    pub adresse: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Form input as submitted by clients: numeric identifiers arrive as
/// strings. [`EntrepriseInput::parse`] is the single coercion boundary
/// producing a typed record; nothing downstream re-parses strings.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct EntrepriseInput {
    pub ice: String,
    pub cnss: String,
    pub rc: String,
    #[serde(rename = "if")]
    pub fiscal_id: String,
    pub rib: String,
    pub patente: String,
    pub adresse: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
}

/// Fully validated, typed payload. Identifier and timestamp are assigned
/// by the store on create.
#[derive(Clone, Debug, PartialEq)]
pub struct EntrepriseData {
    pub ice: u64,
    pub cnss: u64,
    pub rc: u64,
    pub fiscal_id: u64,
    pub rib: u64,
    pub patente: u64,
    pub adresse: String,
    pub email: Option<String>,
    pub telephone: Option<String>,
}

fn parse_positive(label: &str, raw: &str) -> Result<u64, String> {
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("Le champ {label} doit être un entier positif")),
    }
}

fn normalize_optional(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl EntrepriseInput {
    /// Pure validation returning human-readable messages; empty iff valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        for (label, value) in [
            ("ICE", &self.ice),
            ("CNSS", &self.cnss),
            ("RC", &self.rc),
            ("IF", &self.fiscal_id),
            ("RIB", &self.rib),
            ("patente", &self.patente),
        ] {
            if let Err(msg) = parse_positive(label, value) {
                errors.push(msg);
            }
        }
        if self.adresse.trim().is_empty() {
            errors.push("L'adresse est obligatoire".to_string());
        }
        errors
    }

    /// Coerce the string-typed form into a typed record, or fail with the
    /// full list of validation messages.
    pub fn parse(&self) -> Result<EntrepriseData, ModelError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(ModelError::Validation(errors));
        }
        Ok(EntrepriseData {
            ice: parse_positive("ICE", &self.ice).expect("validated"),
            cnss: parse_positive("CNSS", &self.cnss).expect("validated"),
            rc: parse_positive("RC", &self.rc).expect("validated"),
            fiscal_id: parse_positive("IF", &self.fiscal_id).expect("validated"),
            rib: parse_positive("RIB", &self.rib).expect("validated"),
            patente: parse_positive("patente", &self.patente).expect("validated"),
            adresse: self.adresse.trim().to_string(),
            email: normalize_optional(&self.email),
            telephone: normalize_optional(&self.telephone),
        })
    }
}

impl Entreprise {
    /// Assemble a fresh record from validated data.
    pub fn new(data: EntrepriseData) -> Self {
        Self {
            id: Uuid::new_v4(),
            ice: data.ice,
            cnss: data.cnss,
            rc: data.rc,
            fiscal_id: data.fiscal_id,
            rib: data.rib,
            patente: data.patente,
            adresse: data.adresse,
            email: data.email,
            telephone: data.telephone,
            created_at: Utc::now(),
        }
    }

    /// Overwrite mutable fields from validated data; id and created_at
    /// are kept.
    pub fn apply(&mut self, data: EntrepriseData) {
        self.ice = data.ice;
        self.cnss = data.cnss;
        self.rc = data.rc;
        self.fiscal_id = data.fiscal_id;
        self.rib = data.rib;
        self.patente = data.patente;
        self.adresse = data.adresse;
        self.email = data.email;
        self.telephone = data.telephone;
    }
}
