//! Comorbidity vocabulary for the Elixhauser index
//!
//! This module defines the fixed set of comorbidity indicator columns the
//! scoring function operates on. Column names follow the HCUP Elixhauser
//! comorbidity software naming standard.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Column name of the optional cardiac arrhythmia indicator
///
/// Cardiac arrhythmia is not part of the 29 required indicators; it is only
/// read when the caller explicitly requests the extra term.
pub const CARDIAC_ARRHYTHMIA_COLUMN: &str = "CARDARRH";

/// Human-readable description of the optional cardiac arrhythmia indicator
pub const CARDIAC_ARRHYTHMIA_DESCRIPTION: &str = "Cardiac arrhythmias";

/// The 29 Elixhauser comorbidities required in every scored dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comorbidity {
    /// Acquired immune deficiency syndrome
    Aids,
    /// Alcohol abuse
    AlcoholAbuse,
    /// Deficiency anemias
    DeficiencyAnemia,
    /// Rheumatoid arthritis / collagen vascular diseases
    RheumatoidArthritis,
    /// Chronic blood loss anemia
    BloodLossAnemia,
    /// Congestive heart failure
    CongestiveHeartFailure,
    /// Chronic pulmonary disease
    ChronicPulmonaryDisease,
    /// Coagulopathy
    Coagulopathy,
    /// Depression
    Depression,
    /// Diabetes without chronic complications
    Diabetes,
    /// Diabetes with chronic complications
    DiabetesComplicated,
    /// Drug abuse
    DrugAbuse,
    /// Hypertension (combined uncomplicated and complicated)
    Hypertension,
    /// Hypothyroidism
    Hypothyroidism,
    /// Liver disease
    LiverDisease,
    /// Lymphoma
    Lymphoma,
    /// Fluid and electrolyte disorders
    FluidElectrolyteDisorders,
    /// Metastatic cancer
    MetastaticCancer,
    /// Other neurological disorders
    NeurologicalDisorders,
    /// Obesity
    Obesity,
    /// Paralysis
    Paralysis,
    /// Peripheral vascular disorders
    PeripheralVascularDisorders,
    /// Psychoses
    Psychoses,
    /// Pulmonary circulation disorders
    PulmonaryCirculationDisorders,
    /// Renal failure
    RenalFailure,
    /// Solid tumor without metastasis
    SolidTumor,
    /// Peptic ulcer disease excluding bleeding
    PepticUlcer,
    /// Valvular disease
    ValvularDisease,
    /// Weight loss
    WeightLoss,
}

impl Comorbidity {
    /// Get the HCUP column name for this comorbidity
    #[must_use]
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::Aids => "AIDS",
            Self::AlcoholAbuse => "ALCOHOL",
            Self::DeficiencyAnemia => "ANEMDEF",
            Self::RheumatoidArthritis => "ARTH",
            Self::BloodLossAnemia => "BLDLOSS",
            Self::CongestiveHeartFailure => "CHF",
            Self::ChronicPulmonaryDisease => "CHRNLUNG",
            Self::Coagulopathy => "COAG",
            Self::Depression => "DEPRESS",
            Self::Diabetes => "DM",
            Self::DiabetesComplicated => "DMCX",
            Self::DrugAbuse => "DRUG",
            Self::Hypertension => "HTN_C",
            Self::Hypothyroidism => "HYPOTHY",
            Self::LiverDisease => "LIVER",
            Self::Lymphoma => "LYMPH",
            Self::FluidElectrolyteDisorders => "LYTES",
            Self::MetastaticCancer => "METS",
            Self::NeurologicalDisorders => "NEURO",
            Self::Obesity => "OBESE",
            Self::Paralysis => "PARA",
            Self::PeripheralVascularDisorders => "PERIVASC",
            Self::Psychoses => "PSYCH",
            Self::PulmonaryCirculationDisorders => "PULMCIRC",
            Self::RenalFailure => "RENLFAIL",
            Self::SolidTumor => "TUMOR",
            Self::PepticUlcer => "ULCER",
            Self::ValvularDisease => "VALVE",
            Self::WeightLoss => "WGHTLOSS",
        }
    }

    /// Get the human-readable description for this comorbidity
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Aids => "Acquired immune deficiency syndrome",
            Self::AlcoholAbuse => "Alcohol abuse",
            Self::DeficiencyAnemia => "Deficiency anemias",
            Self::RheumatoidArthritis => "Rheumatoid arthritis/collagen vascular diseases",
            Self::BloodLossAnemia => "Chronic blood loss anemia",
            Self::CongestiveHeartFailure => "Congestive heart failure",
            Self::ChronicPulmonaryDisease => "Chronic pulmonary disease",
            Self::Coagulopathy => "Coagulopathy",
            Self::Depression => "Depression",
            Self::Diabetes => "Diabetes without chronic complications",
            Self::DiabetesComplicated => "Diabetes with chronic complications",
            Self::DrugAbuse => "Drug abuse",
            Self::Hypertension => "Hypertension (combined uncomplicated and complicated)",
            Self::Hypothyroidism => "Hypothyroidism",
            Self::LiverDisease => "Liver disease",
            Self::Lymphoma => "Lymphoma",
            Self::FluidElectrolyteDisorders => "Fluid and electrolyte disorders",
            Self::MetastaticCancer => "Metastatic cancer",
            Self::NeurologicalDisorders => "Other neurological disorders",
            Self::Obesity => "Obesity",
            Self::Paralysis => "Paralysis",
            Self::PeripheralVascularDisorders => "Peripheral vascular disorders",
            Self::Psychoses => "Psychoses",
            Self::PulmonaryCirculationDisorders => "Pulmonary circulation disorders",
            Self::RenalFailure => "Renal failure",
            Self::SolidTumor => "Solid tumor without metastasis",
            Self::PepticUlcer => "Peptic ulcer disease excluding bleeding",
            Self::ValvularDisease => "Valvular disease",
            Self::WeightLoss => "Weight loss",
        }
    }

    /// Get all required comorbidities, in column-name order
    #[must_use]
    pub fn all() -> Vec<Self> {
        vec![
            Self::Aids,
            Self::AlcoholAbuse,
            Self::DeficiencyAnemia,
            Self::RheumatoidArthritis,
            Self::BloodLossAnemia,
            Self::CongestiveHeartFailure,
            Self::ChronicPulmonaryDisease,
            Self::Coagulopathy,
            Self::Depression,
            Self::Diabetes,
            Self::DiabetesComplicated,
            Self::DrugAbuse,
            Self::Hypertension,
            Self::Hypothyroidism,
            Self::LiverDisease,
            Self::Lymphoma,
            Self::FluidElectrolyteDisorders,
            Self::MetastaticCancer,
            Self::NeurologicalDisorders,
            Self::Obesity,
            Self::Paralysis,
            Self::PeripheralVascularDisorders,
            Self::Psychoses,
            Self::PulmonaryCirculationDisorders,
            Self::RenalFailure,
            Self::SolidTumor,
            Self::PepticUlcer,
            Self::ValvularDisease,
            Self::WeightLoss,
        ]
    }

    /// Look up a comorbidity from its HCUP column name
    #[must_use]
    pub fn from_column_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.column_name() == name)
    }
}

impl fmt::Display for Comorbidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}
