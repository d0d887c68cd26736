// ABOUTME: Wire-compatible data model for onboarding inputs, calculated plans, and adjustments
// ABOUTME: Field names and enum values match the JSON contract of the request-handling layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Coaching

//! Data model shared with the external request-handling layer.
//!
//! Every type here serializes to the exact JSON shape the onboarding and
//! weekly check-in endpoints exchange: camelCase field names, snake_case
//! enum values. All types are plain values; the engine never mutates or
//! stores them.

use serde::{Deserialize, Serialize};

/// Biological sex, used only as a binary term in the Müller BMR equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (+198 kcal term in the Müller equation)
    Male,
    /// Female (no constant term)
    Female,
}

/// Dieting goal driving calorie targeting and weekly adjustment policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Caloric deficit targeting 0.4-0.8% body weight loss per week
    FatLoss,
    /// Gradual calorie increases while holding weight near stable
    ReverseDieting,
    /// Hold at maintenance, no weekly adjustments
    Maintenance,
}

/// Cumulative prior dieting duration, bucketed
///
/// Drives the metabolic adaptation factor: the longer a user has spent in
/// sustained deficits, the more their measured BMR is discounted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DietHistory {
    /// Little to no prior dieting
    Low,
    /// Some prior dieting
    Medium,
    /// Extensive prior dieting
    High,
    /// Chronic, near-continuous dieting
    Perpetual,
}

/// Onboarding biometrics and preferences, supplied once per user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingInput {
    /// Age in years (validated to 18-100)
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Body weight in kilograms (validated to 30-300)
    pub body_weight_kg: f64,
    /// Body fat percentage (validated to 3-60)
    pub body_fat_percentage: f64,
    /// Dieting goal
    pub goal_type: GoalType,
    /// Prior dieting history bucket
    pub diet_history: DietHistory,
    /// TDEE activity multiplier (typically 1.2-1.9)
    pub activity_factor: f64,
}

/// Daily calorie and macronutrient targets
///
/// Targets are signed so that weekly adjustment deltas behave like plain
/// arithmetic; the plan calculator itself never produces negative grams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MacroPlan {
    /// Daily calorie target (kcal)
    pub calories_target: i32,
    /// Daily protein target (grams)
    pub protein_target_g: i32,
    /// Daily carbohydrate target (grams)
    pub carbs_target_g: i32,
    /// Daily fat target (grams)
    pub fat_target_g: i32,
}

impl MacroPlan {
    /// Calories reconstructed from the macro targets (4/4/9 kcal per gram)
    ///
    /// For freshly calculated plans this lands within a few kcal of
    /// `calories_target`; weekly-adjusted plans drift slightly because the
    /// adjustment engine mutates grams by fixed deltas without re-deriving
    /// the split.
    pub const fn reconstructed_calories(&self) -> i32 {
        self.protein_target_g * 4 + self.carbs_target_g * 4 + self.fat_target_g * 9
    }
}

/// Full calculated plan produced at onboarding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedPlan {
    /// Lean body mass (kg, one decimal)
    pub lbm_kg: f64,
    /// Fat mass (kg, one decimal)
    pub fm_kg: f64,
    /// Base metabolic rate from the Müller equation (kcal)
    pub bmr: i32,
    /// BMR discounted by the metabolic adaptation factor (kcal)
    pub adjusted_bmr: i32,
    /// Total daily energy expenditure (kcal)
    pub tdee: i32,
    /// Goal-adjusted daily calorie target (kcal)
    pub target_calories: i32,
    /// Macro split of the calorie target
    pub macros: MacroPlan,
    /// Metabolic adaptation factor applied to BMR (0.0-0.20)
    pub metabolic_adaptation_factor: f64,
}

/// Weekly check-in payload from the tracking layer
///
/// The 7-day averaging that produces the two weight figures is the tracking
/// system's responsibility; the engine only compares them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyCheckInData {
    /// Owning user id
    pub user_id: String,
    /// Current 7-day weight average (kg)
    pub current_weight_avg: f64,
    /// Previous period's weight average (kg)
    pub previous_weight_avg: f64,
    /// Active dieting goal
    pub goal_type: GoalType,
    /// Currently active macro plan
    pub current_plan: MacroPlan,
}

/// Outcome of a weekly adjustment evaluation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAdjustment {
    /// Whether the active plan should be replaced
    pub should_adjust: bool,
    /// Classification of the decision (plateau, slow loss, good progress, ...)
    pub reason: String,
    /// Replacement plan, present iff `should_adjust`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_plan: Option<MacroPlan>,
    /// Coaching guidance for the user
    pub recommendation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_values() {
        assert_eq!(serde_json::to_string(&Sex::Male).unwrap(), "\"male\"");
        assert_eq!(
            serde_json::to_string(&GoalType::ReverseDieting).unwrap(),
            "\"reverse_dieting\""
        );
        assert_eq!(
            serde_json::to_string(&DietHistory::Perpetual).unwrap(),
            "\"perpetual\""
        );
    }

    #[test]
    fn test_macro_plan_calorie_reconstruction() {
        let plan = MacroPlan {
            calories_target: 2683,
            protein_target_g: 187,
            carbs_target_g: 241,
            fat_target_g: 108,
        };
        assert_eq!(plan.reconstructed_calories(), 2684);
    }
}
