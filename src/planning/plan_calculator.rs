// ABOUTME: Onboarding plan calculation from biometrics to a full macro plan
// ABOUTME: Body composition, Müller BMR, metabolic adaptation, TDEE, calorie and macro targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Coaching

//! Plan Calculator
//!
//! Turns onboarding inputs into a full calculated plan in a fixed chain,
//! each step consuming the previous step's output:
//!
//! 1. Body composition split (lean body mass / fat mass)
//! 2. BMR via the Müller body-composition equation
//! 3. Metabolic adaptation discount from dieting history
//! 4. TDEE from adjusted BMR and activity factor
//! 5. Goal-based calorie target
//! 6. Protein target from lean body mass
//! 7. Macro split: protein fixed, fat floored, carbs absorb the remainder
//!
//! Rounding is significant: every intermediate kcal value is rounded to an
//! integer before the next step, so small differences would compound down
//! the chain. All rounding is half-away-from-zero on positive values.

use crate::config::{
    AdaptationFactorsConfig, GoalPolicyConfig, MacroSplitConfig, MullerBmrConfig, PlanConfig,
};
use crate::errors::{AppError, AppResult};
use crate::models::{CalculatedPlan, DietHistory, GoalType, MacroPlan, OnboardingInput, Sex};
use crate::planning::physiological_constants::{energy, validation};

/// Lean body mass and fat mass split (kg)
#[derive(Debug, Clone, Copy)]
pub struct BodyComposition {
    /// Lean body mass (kg)
    pub lbm_kg: f64,
    /// Fat mass (kg)
    pub fm_kg: f64,
}

/// Split body weight into lean body mass and fat mass
///
/// The two components always sum back to the input weight.
pub fn calculate_body_composition(body_weight_kg: f64, body_fat_percentage: f64) -> BodyComposition {
    let fm_kg = body_weight_kg * (body_fat_percentage / 100.0);
    BodyComposition {
        lbm_kg: body_weight_kg - fm_kg,
        fm_kg,
    }
}

/// Calculate BMR using the Müller body-composition equation
///
/// Formula: BMR = `lbm_coef` x LBM + `fm_coef` x FM + `male_constant` x sex
/// - `age_coef` x age + `base_constant`, with sex = 1 for male, 0 for female.
/// Rounded to the nearest kcal.
///
/// # Reference
/// Müller et al. (2004) DOI: 10.1093/ajcn/80.5.1379
pub fn calculate_muller_bmr(
    composition: BodyComposition,
    sex: Sex,
    age: u32,
    config: &MullerBmrConfig,
) -> i32 {
    let sex_term = match sex {
        Sex::Male => config.male_constant,
        Sex::Female => 0.0,
    };

    let bmr = config.lbm_coef * composition.lbm_kg + config.fm_coef * composition.fm_kg + sex_term
        - config.age_coef * f64::from(age)
        + config.base_constant;

    bmr.round() as i32
}

/// Metabolic adaptation factor for a diet-history bucket
///
/// Exhaustive by construction: a new `DietHistory` variant fails compilation
/// here rather than silently defaulting to no adaptation.
pub fn metabolic_adaptation_factor(
    diet_history: DietHistory,
    config: &AdaptationFactorsConfig,
) -> f64 {
    match diet_history {
        DietHistory::Low => config.low,
        DietHistory::Medium => config.medium,
        DietHistory::High => config.high,
        DietHistory::Perpetual => config.perpetual,
    }
}

/// Discount BMR by the metabolic adaptation factor
pub fn apply_metabolic_adaptation(bmr: i32, adaptation_factor: f64) -> i32 {
    (f64::from(bmr) * (1.0 - adaptation_factor)).round() as i32
}

/// Calculate TDEE from the adaptation-adjusted BMR
pub fn calculate_tdee(adjusted_bmr: i32, activity_factor: f64) -> i32 {
    (f64::from(adjusted_bmr) * activity_factor).round() as i32
}

/// Goal-based calorie target from TDEE
///
/// Fat loss runs a fixed deficit; reverse dieting starts at maintenance and
/// earns weekly increases through the adjustment engine; maintenance holds.
pub fn calculate_target_calories(tdee: i32, goal_type: GoalType, config: &GoalPolicyConfig) -> i32 {
    match goal_type {
        GoalType::FatLoss => (f64::from(tdee) * config.fat_loss_deficit_multiplier).round() as i32,
        GoalType::ReverseDieting | GoalType::Maintenance => tdee,
    }
}

/// Protein target in grams from lean body mass
///
/// Higher per-kg target during fat loss to preserve lean mass in the deficit.
pub fn calculate_protein_target(lbm_kg: f64, goal_type: GoalType, config: &GoalPolicyConfig) -> i32 {
    let g_per_kg_lbm = match goal_type {
        GoalType::FatLoss => config.protein_fat_loss_g_per_kg_lbm,
        GoalType::ReverseDieting | GoalType::Maintenance => config.protein_default_g_per_kg_lbm,
    };
    (lbm_kg * g_per_kg_lbm).round() as i32
}

/// Distribute target calories across macros with protein already fixed
///
/// Priority order is load-bearing: protein is the binding constraint, fat
/// has a physiological minimum, carbohydrate absorbs the remainder. After
/// the fat floor is applied, carb grams are recomputed from the residual
/// calories so the plan still reconstructs to the target within rounding.
pub fn calculate_macro_split(
    target_calories: i32,
    protein_g: i32,
    config: &MacroSplitConfig,
) -> MacroPlan {
    let target = f64::from(target_calories);
    let protein_calories = f64::from(protein_g) * energy::KCAL_PER_G_PROTEIN;

    let min_fat_g = (target * config.min_fat_fraction / energy::KCAL_PER_G_FAT).round() as i32;

    let remaining_calories = target - protein_calories;
    let fat_calories = remaining_calories * (1.0 - config.remainder_carb_fraction);

    let fat_g = min_fat_g.max((fat_calories / energy::KCAL_PER_G_FAT).round() as i32);
    let final_fat_calories = f64::from(fat_g) * energy::KCAL_PER_G_FAT;

    let carb_calories = target - protein_calories - final_fat_calories;
    let carb_g = ((carb_calories / energy::KCAL_PER_G_CARB).round() as i32).max(0);

    MacroPlan {
        calories_target: target_calories,
        protein_target_g: protein_g,
        carbs_target_g: carb_g,
        fat_target_g: fat_g,
    }
}

fn validate_input(input: &OnboardingInput) -> AppResult<()> {
    if !(validation::BODY_FAT_MIN_PCT..=validation::BODY_FAT_MAX_PCT)
        .contains(&input.body_fat_percentage)
    {
        return Err(AppError::value_out_of_range(
            "bodyFatPercentage",
            input.body_fat_percentage,
            validation::BODY_FAT_MIN_PCT,
            validation::BODY_FAT_MAX_PCT,
        ));
    }

    if !(validation::AGE_MIN..=validation::AGE_MAX).contains(&input.age) {
        return Err(AppError::value_out_of_range(
            "age",
            f64::from(input.age),
            f64::from(validation::AGE_MIN),
            f64::from(validation::AGE_MAX),
        ));
    }

    if !(validation::BODY_WEIGHT_MIN_KG..=validation::BODY_WEIGHT_MAX_KG)
        .contains(&input.body_weight_kg)
    {
        return Err(AppError::value_out_of_range(
            "bodyWeightKg",
            input.body_weight_kg,
            validation::BODY_WEIGHT_MIN_KG,
            validation::BODY_WEIGHT_MAX_KG,
        ));
    }

    Ok(())
}

/// Calculate the full onboarding plan
///
/// This is the main entry point invoked once per user at onboarding. The
/// returned plan is immutable; the weekly adjustment engine may later
/// produce replacement macro plans from it.
///
/// # Errors
///
/// Returns a `ValueOutOfRange` error, before any computation, when body fat
/// percentage, age, or body weight falls outside its validated range.
pub fn calculate_onboarding_plan(
    input: &OnboardingInput,
    config: &PlanConfig,
) -> AppResult<CalculatedPlan> {
    validate_input(input)?;

    tracing::info!(
        goal_type = ?input.goal_type,
        diet_history = ?input.diet_history,
        "calculating onboarding plan"
    );

    // Step 1: body composition split
    let composition = calculate_body_composition(input.body_weight_kg, input.body_fat_percentage);

    // Step 2: BMR via the Müller equation
    let bmr = calculate_muller_bmr(composition, input.sex, input.age, &config.bmr);

    // Step 3: metabolic adaptation discount
    let adaptation_factor = metabolic_adaptation_factor(input.diet_history, &config.adaptation);
    let adjusted_bmr = apply_metabolic_adaptation(bmr, adaptation_factor);

    // Step 4: TDEE
    let tdee = calculate_tdee(adjusted_bmr, input.activity_factor);

    // Step 5: goal-based calorie target
    let target_calories = calculate_target_calories(tdee, input.goal_type, &config.goals);

    // Step 6: protein from unrounded lean body mass
    let protein_g = calculate_protein_target(composition.lbm_kg, input.goal_type, &config.goals);

    // Step 7: full macro distribution
    let macros = calculate_macro_split(target_calories, protein_g, &config.macros);

    let plan = CalculatedPlan {
        lbm_kg: (composition.lbm_kg * 10.0).round() / 10.0,
        fm_kg: (composition.fm_kg * 10.0).round() / 10.0,
        bmr,
        adjusted_bmr,
        tdee,
        target_calories,
        macros,
        metabolic_adaptation_factor: adaptation_factor,
    };

    tracing::info!(
        bmr = plan.bmr,
        tdee = plan.tdee,
        target_calories = plan.target_calories,
        "onboarding plan calculation complete"
    );

    Ok(plan)
}
