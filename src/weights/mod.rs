//! Published weight tables for the Elixhauser comorbidity index
//!
//! One integer weight per comorbidity per method, plus the extra weight for
//! the optional cardiac arrhythmia indicator. The tables are fixed constants;
//! several comorbidities carry a weight of 0 in one or more methods and still
//! participate in the sum.

use crate::models::{Comorbidity, ScoreMethod};

/// Weight of a comorbidity under the given method
#[must_use]
pub const fn weight(method: ScoreMethod, comorbidity: Comorbidity) -> i32 {
    match method {
        ScoreMethod::VanWalraven => van_walraven_weight(comorbidity),
        ScoreMethod::Sid30 => sid_30_weight(comorbidity),
        ScoreMethod::Sid29 => sid_29_weight(comorbidity),
    }
}

/// Extra weight applied to the optional cardiac arrhythmia indicator
///
/// Returns `None` for methods whose formula defines no cardiac arrhythmia
/// term.
#[must_use]
pub const fn cardiac_arrhythmia_weight(method: ScoreMethod) -> Option<i32> {
    match method {
        ScoreMethod::VanWalraven => Some(5),
        ScoreMethod::Sid30 => Some(8),
        ScoreMethod::Sid29 => None,
    }
}

const fn van_walraven_weight(comorbidity: Comorbidity) -> i32 {
    match comorbidity {
        Comorbidity::Aids => 0,
        Comorbidity::AlcoholAbuse => 0,
        Comorbidity::DeficiencyAnemia => -2,
        Comorbidity::RheumatoidArthritis => 0,
        Comorbidity::BloodLossAnemia => -2,
        Comorbidity::CongestiveHeartFailure => 7,
        Comorbidity::ChronicPulmonaryDisease => 3,
        Comorbidity::Coagulopathy => 3,
        Comorbidity::Depression => -3,
        Comorbidity::Diabetes => 0,
        Comorbidity::DiabetesComplicated => 0,
        Comorbidity::DrugAbuse => -7,
        Comorbidity::Hypertension => 0,
        Comorbidity::Hypothyroidism => 0,
        Comorbidity::LiverDisease => 11,
        Comorbidity::Lymphoma => 9,
        Comorbidity::FluidElectrolyteDisorders => 5,
        Comorbidity::MetastaticCancer => 12,
        Comorbidity::NeurologicalDisorders => 6,
        Comorbidity::Obesity => -4,
        Comorbidity::Paralysis => 7,
        Comorbidity::PeripheralVascularDisorders => 2,
        Comorbidity::Psychoses => 0,
        Comorbidity::PulmonaryCirculationDisorders => 4,
        Comorbidity::RenalFailure => 5,
        Comorbidity::SolidTumor => 4,
        Comorbidity::PepticUlcer => 0,
        Comorbidity::ValvularDisease => -1,
        Comorbidity::WeightLoss => 6,
    }
}

const fn sid_30_weight(comorbidity: Comorbidity) -> i32 {
    match comorbidity {
        Comorbidity::Aids => 0,
        Comorbidity::AlcoholAbuse => 0,
        Comorbidity::DeficiencyAnemia => 0,
        Comorbidity::RheumatoidArthritis => 0,
        Comorbidity::BloodLossAnemia => -3,
        Comorbidity::CongestiveHeartFailure => 9,
        Comorbidity::ChronicPulmonaryDisease => 3,
        Comorbidity::Coagulopathy => 12,
        Comorbidity::Depression => -5,
        Comorbidity::Diabetes => 1,
        Comorbidity::DiabetesComplicated => 0,
        Comorbidity::DrugAbuse => -11,
        Comorbidity::Hypertension => -2,
        Comorbidity::Hypothyroidism => 0,
        Comorbidity::LiverDisease => 7,
        Comorbidity::Lymphoma => 8,
        Comorbidity::FluidElectrolyteDisorders => 11,
        Comorbidity::MetastaticCancer => 17,
        Comorbidity::NeurologicalDisorders => 5,
        Comorbidity::Obesity => -5,
        Comorbidity::Paralysis => 4,
        Comorbidity::PeripheralVascularDisorders => 4,
        Comorbidity::Psychoses => -6,
        Comorbidity::PulmonaryCirculationDisorders => 5,
        Comorbidity::RenalFailure => 7,
        Comorbidity::SolidTumor => 10,
        Comorbidity::PepticUlcer => 0,
        Comorbidity::ValvularDisease => 0,
        Comorbidity::WeightLoss => 10,
    }
}

const fn sid_29_weight(comorbidity: Comorbidity) -> i32 {
    match comorbidity {
        Comorbidity::Aids => 0,
        Comorbidity::AlcoholAbuse => -2,
        Comorbidity::DeficiencyAnemia => 0,
        Comorbidity::RheumatoidArthritis => 0,
        Comorbidity::BloodLossAnemia => -2,
        Comorbidity::CongestiveHeartFailure => 9,
        Comorbidity::ChronicPulmonaryDisease => 3,
        Comorbidity::Coagulopathy => 9,
        Comorbidity::Depression => -4,
        Comorbidity::Diabetes => 0,
        Comorbidity::DiabetesComplicated => -1,
        Comorbidity::DrugAbuse => -8,
        Comorbidity::Hypertension => -1,
        Comorbidity::Hypothyroidism => 0,
        Comorbidity::LiverDisease => 5,
        Comorbidity::Lymphoma => 6,
        Comorbidity::FluidElectrolyteDisorders => 9,
        Comorbidity::MetastaticCancer => 13,
        Comorbidity::NeurologicalDisorders => 4,
        Comorbidity::Obesity => -4,
        Comorbidity::Paralysis => 3,
        Comorbidity::PeripheralVascularDisorders => 4,
        Comorbidity::Psychoses => -4,
        Comorbidity::PulmonaryCirculationDisorders => 5,
        Comorbidity::RenalFailure => 6,
        Comorbidity::SolidTumor => 8,
        Comorbidity::PepticUlcer => 0,
        Comorbidity::ValvularDisease => 0,
        Comorbidity::WeightLoss => 8,
    }
}
