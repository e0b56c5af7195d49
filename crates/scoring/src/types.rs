use std::fmt;

use serde::{Deserialize, Serialize};

pub const GENDERS: [Gender; 2] = [Gender::Female, Gender::Male];

pub const CLAIM_MONTHS: [ClaimMonth; 4] = [
    ClaimMonth::Jan,
    ClaimMonth::Mar,
    ClaimMonth::Jun,
    ClaimMonth::Dec,
];

pub const PROCEDURE_TYPES: [ProcedureType; 7] = [
    ProcedureType::BloodTest,
    ProcedureType::MriScan,
    ProcedureType::RoutineCheck,
    ProcedureType::SpecialistConsult,
    ProcedureType::Surgery,
    ProcedureType::Vaccination,
    ProcedureType::XRay,
];

pub const DIAGNOSIS_CODES: [DiagnosisCode; 7] = [
    DiagnosisCode::C34,
    DiagnosisCode::E11,
    DiagnosisCode::E66,
    DiagnosisCode::I10,
    DiagnosisCode::I21,
    DiagnosisCode::J45,
    DiagnosisCode::M54,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Female => 0,
            Self::Male => 1,
        }
    }

    pub fn parse(raw: &str) -> Result<Self, EncodeError> {
        GENDERS
            .iter()
            .copied()
            .find(|g| g.as_str() == raw)
            .ok_or_else(|| EncodeError::unknown_category("gender", raw))
    }
}

/// Claim months the training data covers. Not all calendar months: the
/// artifact was trained on a four-month sample, so the set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimMonth {
    Jan,
    Mar,
    Jun,
    Dec,
}

impl ClaimMonth {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jan => "Jan",
            Self::Mar => "Mar",
            Self::Jun => "Jun",
            Self::Dec => "Dec",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Jan => 0,
            Self::Mar => 1,
            Self::Jun => 2,
            Self::Dec => 3,
        }
    }

    /// Historical fraud rate for the month, fed to the model as its own
    /// feature and weighted into the heuristic risk score.
    pub fn fraud_risk(self) -> f64 {
        match self {
            Self::Jan => 0.25,
            Self::Mar => 0.22,
            Self::Jun => 0.18,
            Self::Dec => 0.35,
        }
    }

    pub fn parse(raw: &str) -> Result<Self, EncodeError> {
        CLAIM_MONTHS
            .iter()
            .copied()
            .find(|m| m.as_str() == raw)
            .ok_or_else(|| EncodeError::UnknownMonth(raw.to_string()))
    }
}

/// Encoded indices follow the alphabetical order of the display names,
/// matching the label encoding the artifact was trained with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcedureType {
    #[serde(rename = "Blood Test")]
    BloodTest,
    #[serde(rename = "MRI Scan")]
    MriScan,
    #[serde(rename = "Routine Check")]
    RoutineCheck,
    #[serde(rename = "Specialist Consult")]
    SpecialistConsult,
    Surgery,
    Vaccination,
    #[serde(rename = "X-Ray")]
    XRay,
}

impl ProcedureType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BloodTest => "Blood Test",
            Self::MriScan => "MRI Scan",
            Self::RoutineCheck => "Routine Check",
            Self::SpecialistConsult => "Specialist Consult",
            Self::Surgery => "Surgery",
            Self::Vaccination => "Vaccination",
            Self::XRay => "X-Ray",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::BloodTest => 0,
            Self::MriScan => 1,
            Self::RoutineCheck => 2,
            Self::SpecialistConsult => 3,
            Self::Surgery => 4,
            Self::Vaccination => 5,
            Self::XRay => 6,
        }
    }

    pub fn parse(raw: &str) -> Result<Self, EncodeError> {
        PROCEDURE_TYPES
            .iter()
            .copied()
            .find(|p| p.as_str() == raw)
            .ok_or_else(|| EncodeError::unknown_category("procedure_type", raw))
    }
}

/// ICD-like diagnosis codes, alphabetical like the procedure list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosisCode {
    C34,
    E11,
    E66,
    I10,
    I21,
    J45,
    M54,
}

impl DiagnosisCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::C34 => "C34",
            Self::E11 => "E11",
            Self::E66 => "E66",
            Self::I10 => "I10",
            Self::I21 => "I21",
            Self::J45 => "J45",
            Self::M54 => "M54",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::C34 => 0,
            Self::E11 => 1,
            Self::E66 => 2,
            Self::I10 => 3,
            Self::I21 => 4,
            Self::J45 => 5,
            Self::M54 => 6,
        }
    }

    pub fn parse(raw: &str) -> Result<Self, EncodeError> {
        DIAGNOSIS_CODES
            .iter()
            .copied()
            .find(|d| d.as_str() == raw)
            .ok_or_else(|| EncodeError::unknown_category("diagnosis_code", raw))
    }
}

/// One submitted claim, fully validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimInput {
    pub patient_age: u32,
    pub gender: Gender,
    pub provider_id: u32,
    pub hospital_id: u32,
    pub claim_month: ClaimMonth,
    pub procedure_type: ProcedureType,
    pub diagnosis_code: DiagnosisCode,
    pub claim_amount: f64,
    pub num_procedures: u32,
    pub days_admitted: u32,
    pub previous_claims: u32,
    pub billing_discrepancy: f64,
    pub anomaly_score: f64,
}

/// A claim as submitted by a front-end: numerics typed, categoricals still
/// raw strings awaiting validation against the closed sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawClaim {
    pub patient_age: u32,
    pub gender: String,
    pub provider_id: u32,
    pub hospital_id: u32,
    pub claim_month: String,
    pub procedure_type: String,
    pub diagnosis_code: String,
    pub claim_amount: f64,
    pub num_procedures: u32,
    pub days_admitted: u32,
    pub previous_claims: u32,
    pub billing_discrepancy: f64,
    pub anomaly_score: f64,
}

impl RawClaim {
    /// Validate the categorical fields. Rejects the whole claim on the
    /// first value outside its closed set; nothing is scored before this
    /// succeeds.
    pub fn parse(self) -> Result<ClaimInput, EncodeError> {
        Ok(ClaimInput {
            patient_age: self.patient_age,
            gender: Gender::parse(&self.gender)?,
            provider_id: self.provider_id,
            hospital_id: self.hospital_id,
            claim_month: ClaimMonth::parse(&self.claim_month)?,
            procedure_type: ProcedureType::parse(&self.procedure_type)?,
            diagnosis_code: DiagnosisCode::parse(&self.diagnosis_code)?,
            claim_amount: self.claim_amount,
            num_procedures: self.num_procedures,
            days_admitted: self.days_admitted,
            previous_claims: self.previous_claims,
            billing_discrepancy: self.billing_discrepancy,
            anomaly_score: self.anomaly_score,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    UnknownCategory { field: &'static str, value: String },
    UnknownMonth(String),
}

impl EncodeError {
    fn unknown_category(field: &'static str, value: &str) -> Self {
        Self::UnknownCategory {
            field,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCategory { field, value } => {
                write!(f, "unknown {} category: {:?}", field, value)
            }
            Self::UnknownMonth(value) => write!(f, "unknown claim month: {:?}", value),
        }
    }
}

impl std::error::Error for EncodeError {}
