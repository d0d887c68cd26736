// ABOUTME: Named physiological and policy constants for plan calculation and adjustment
// ABOUTME: Single source for every numeric value the engine's policy branches on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Coaching

//! Physiological constants and domain policy values
//!
//! Every numeric constant the engine uses lives here so it can be documented
//! and tested independently of the calculation code. Values fall in two
//! groups: physiological constants with literature backing (Müller equation
//! coefficients, macronutrient energy densities) and coaching policy values
//! (deficit size, adjustment step sizes) chosen for a deliberately slow,
//! conservative weekly cadence that avoids overcorrecting on noisy weight
//! data.

/// Macronutrient energy densities (Atwater general factors)
pub mod energy {
    /// Protein energy density (kcal per gram)
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

    /// Carbohydrate energy density (kcal per gram)
    pub const KCAL_PER_G_CARB: f64 = 4.0;

    /// Fat energy density (kcal per gram)
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Müller BMR equation coefficients
///
/// BMR = 13.587 x LBM + 9.613 x FM + 198 x sex - 3.351 x age + 674
/// (sex: 1 for male, 0 for female)
///
/// Body-composition based equations outperform weight/height equations for
/// dieting populations because they separate metabolically active lean mass
/// from fat mass.
///
/// Reference: Müller, M.J., et al. (2004). World Health Organization
/// equations have shortcomings for predicting resting energy expenditure.
/// *American Journal of Clinical Nutrition*, 80(5), 1379-1390.
/// <https://doi.org/10.1093/ajcn/80.5.1379>
pub mod muller {
    /// Lean body mass coefficient (kcal per kg LBM)
    pub const LBM_COEF: f64 = 13.587;

    /// Fat mass coefficient (kcal per kg FM)
    pub const FM_COEF: f64 = 9.613;

    /// Male constant term (kcal); females contribute 0
    pub const MALE_CONSTANT: f64 = 198.0;

    /// Age coefficient (kcal per year, subtracted)
    pub const AGE_COEF: f64 = 3.351;

    /// Base constant term (kcal)
    pub const BASE_CONSTANT: f64 = 674.0;
}

/// Metabolic adaptation factors by diet-history bucket
///
/// Sustained caloric deficits suppress resting metabolic rate beyond what
/// body-composition change predicts; the discount grows monotonically with
/// cumulative dieting exposure.
///
/// Reference: Trexler, E.T., Smith-Ryan, A.E., & Norton, L.E. (2014).
/// Metabolic adaptation to weight loss. *Journal of the International
/// Society of Sports Nutrition*, 11, 7. <https://doi.org/10.1186/1550-2783-11-7>
pub mod adaptation {
    /// Little to no prior dieting: no discount
    pub const LOW: f64 = 0.0;

    /// Some prior dieting: 5% discount
    pub const MEDIUM: f64 = 0.05;

    /// Extensive prior dieting: 10% discount
    pub const HIGH: f64 = 0.10;

    /// Chronic dieting: 20% discount
    pub const PERPETUAL: f64 = 0.20;
}

/// Protein targets in grams per kg of lean body mass
///
/// Reference: Helms, E.R., Aragon, A.A., & Fitschen, P.J. (2014).
/// Evidence-based recommendations for natural bodybuilding contest
/// preparation. *JISSN*, 11, 20. Deficit range 2.4-2.8 g/kg LBM,
/// maintenance 2.0-2.3 g/kg LBM; midpoints used.
pub mod protein {
    /// Fat loss: higher protein preserves lean mass in a deficit
    pub const FAT_LOSS_G_PER_KG_LBM: f64 = 2.6;

    /// Maintenance and reverse dieting
    pub const DEFAULT_G_PER_KG_LBM: f64 = 2.15;
}

/// Calorie targeting by goal
pub mod goals {
    /// Fat loss runs a 10% deficit from TDEE
    pub const FAT_LOSS_DEFICIT_MULTIPLIER: f64 = 0.90;
}

/// Macro split policy after protein is fixed
pub mod macro_split {
    /// Minimum fat as a fraction of target calories (hormonal function floor)
    pub const MIN_FAT_FRACTION: f64 = 0.20;

    /// Fraction of post-protein calories allocated to carbs (rest to fat)
    pub const REMAINDER_CARB_FRACTION: f64 = 0.50;
}

/// Weekly adjustment policy
///
/// Step sizes are fixed constants, not derived: at most one small step per
/// week so that day-to-day water-weight noise never drives a large swing.
pub mod adjustment {
    /// Week-over-week change below this magnitude counts as a plateau (kg)
    pub const PLATEAU_THRESHOLD_KG: f64 = 0.1;

    /// Plateau response: calorie step (kcal, subtracted)
    pub const PLATEAU_CALORIE_STEP: i32 = 125;

    /// Plateau response: carb step (grams, subtracted)
    pub const PLATEAU_CARB_STEP_G: i32 = 15;

    /// Plateau response: fat step (grams, subtracted)
    pub const PLATEAU_FAT_STEP_G: i32 = 7;

    /// Fat loss slower than this weekly percentage triggers a reduction
    pub const SLOW_LOSS_THRESHOLD_PCT: f64 = -0.3;

    /// Slow loss response: calorie step (kcal, subtracted)
    pub const SLOW_LOSS_CALORIE_STEP: i32 = 100;

    /// Slow loss response: carb step (grams, subtracted)
    pub const SLOW_LOSS_CARB_STEP_G: i32 = 12;

    /// Slow loss response: fat step (grams, subtracted)
    pub const SLOW_LOSS_FAT_STEP_G: i32 = 4;

    /// Reverse dieting: maximum weekly gain percentage that still earns an increase
    pub const REVERSE_MAX_GAIN_PCT: f64 = 0.2;

    /// Reverse dieting: calorie increase as a fraction of the current target
    pub const REVERSE_CALORIE_INCREASE_FRACTION: f64 = 0.02;

    /// Reverse dieting: carb step (grams, added)
    pub const REVERSE_CARB_STEP_G: i32 = 8;

    /// Reverse dieting: fat step (grams, added)
    pub const REVERSE_FAT_STEP_G: i32 = 2;
}

/// Validated onboarding input ranges (inclusive)
pub mod validation {
    /// Minimum age in years
    pub const AGE_MIN: u32 = 18;

    /// Maximum age in years
    pub const AGE_MAX: u32 = 100;

    /// Minimum body fat percentage (essential fat boundary)
    pub const BODY_FAT_MIN_PCT: f64 = 3.0;

    /// Maximum body fat percentage
    pub const BODY_FAT_MAX_PCT: f64 = 60.0;

    /// Minimum body weight (kg)
    pub const BODY_WEIGHT_MIN_KG: f64 = 30.0;

    /// Maximum body weight (kg)
    pub const BODY_WEIGHT_MAX_KG: f64 = 300.0;
}
