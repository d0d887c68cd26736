// ABOUTME: Policy configuration for plan calculation and weekly adjustment
// ABOUTME: Groups every tunable constant with literature-backed defaults and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Coaching

//! Plan policy configuration
//!
//! The calculation chain is parameterized by this table rather than by
//! inline literals so the policy is independently testable and documented.
//! Defaults reproduce the production coaching policy exactly; a deployment
//! that overrides them must pass [`PlanConfig::validate`] before use.

use crate::errors::{AppError, AppResult};
use crate::planning::physiological_constants::{
    adaptation, adjustment, goals, macro_split, muller, protein,
};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Müller BMR equation coefficients
///
/// Reference: Müller et al. (2004) DOI: 10.1093/ajcn/80.5.1379
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MullerBmrConfig {
    /// Lean body mass coefficient (13.587)
    pub lbm_coef: f64,
    /// Fat mass coefficient (9.613)
    pub fm_coef: f64,
    /// Male constant term (198); females contribute 0
    pub male_constant: f64,
    /// Age coefficient, subtracted (3.351)
    pub age_coef: f64,
    /// Base constant term (674)
    pub base_constant: f64,
}

/// Metabolic adaptation factor per diet-history bucket
///
/// Reference: Trexler et al. (2014) DOI: 10.1186/1550-2783-11-7
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptationFactorsConfig {
    /// Little to no prior dieting: 0.00
    pub low: f64,
    /// Some prior dieting: 0.05
    pub medium: f64,
    /// Extensive prior dieting: 0.10
    pub high: f64,
    /// Chronic dieting: 0.20
    pub perpetual: f64,
}

/// Goal-dependent calorie and protein targeting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalPolicyConfig {
    /// Fat loss TDEE multiplier (0.90 = 10% deficit)
    pub fat_loss_deficit_multiplier: f64,
    /// Fat loss protein (g per kg LBM): 2.6
    pub protein_fat_loss_g_per_kg_lbm: f64,
    /// Maintenance / reverse protein (g per kg LBM): 2.15
    pub protein_default_g_per_kg_lbm: f64,
}

/// Macro split policy applied after protein is fixed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Minimum fat as a fraction of target calories: 0.20
    pub min_fat_fraction: f64,
    /// Fraction of post-protein calories given to carbs: 0.50
    pub remainder_carb_fraction: f64,
}

/// Weekly adjustment thresholds and step sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentPolicyConfig {
    /// Absolute week-over-week change below this is a plateau (kg): 0.1
    pub plateau_threshold_kg: f64,
    /// Plateau: kcal subtracted from the calorie target: 125
    pub plateau_calorie_step: i32,
    /// Plateau: grams subtracted from carbs: 15
    pub plateau_carb_step_g: i32,
    /// Plateau: grams subtracted from fat: 7
    pub plateau_fat_step_g: i32,
    /// Weekly loss percentage above this (i.e. slower) triggers a cut: -0.3
    pub slow_loss_threshold_pct: f64,
    /// Slow loss: kcal subtracted: 100
    pub slow_loss_calorie_step: i32,
    /// Slow loss: grams subtracted from carbs: 12
    pub slow_loss_carb_step_g: i32,
    /// Slow loss: grams subtracted from fat: 4
    pub slow_loss_fat_step_g: i32,
    /// Reverse dieting: maximum weekly gain percentage still rewarded: 0.2
    pub reverse_max_gain_pct: f64,
    /// Reverse dieting: calorie increase fraction of current target: 0.02
    pub reverse_calorie_increase_fraction: f64,
    /// Reverse dieting: grams added to carbs: 8
    pub reverse_carb_step_g: i32,
    /// Reverse dieting: grams added to fat: 2
    pub reverse_fat_step_g: i32,
}

/// Complete plan engine policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    /// BMR equation coefficients
    pub bmr: MullerBmrConfig,
    /// Metabolic adaptation lookup
    pub adaptation: AdaptationFactorsConfig,
    /// Goal-dependent targeting
    pub goals: GoalPolicyConfig,
    /// Macro split policy
    pub macros: MacroSplitConfig,
    /// Weekly adjustment policy
    pub adjustment: AdjustmentPolicyConfig,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            bmr: MullerBmrConfig {
                lbm_coef: muller::LBM_COEF,
                fm_coef: muller::FM_COEF,
                male_constant: muller::MALE_CONSTANT,
                age_coef: muller::AGE_COEF,
                base_constant: muller::BASE_CONSTANT,
            },
            adaptation: AdaptationFactorsConfig {
                low: adaptation::LOW,
                medium: adaptation::MEDIUM,
                high: adaptation::HIGH,
                perpetual: adaptation::PERPETUAL,
            },
            goals: GoalPolicyConfig {
                fat_loss_deficit_multiplier: goals::FAT_LOSS_DEFICIT_MULTIPLIER,
                protein_fat_loss_g_per_kg_lbm: protein::FAT_LOSS_G_PER_KG_LBM,
                protein_default_g_per_kg_lbm: protein::DEFAULT_G_PER_KG_LBM,
            },
            macros: MacroSplitConfig {
                min_fat_fraction: macro_split::MIN_FAT_FRACTION,
                remainder_carb_fraction: macro_split::REMAINDER_CARB_FRACTION,
            },
            adjustment: AdjustmentPolicyConfig {
                plateau_threshold_kg: adjustment::PLATEAU_THRESHOLD_KG,
                plateau_calorie_step: adjustment::PLATEAU_CALORIE_STEP,
                plateau_carb_step_g: adjustment::PLATEAU_CARB_STEP_G,
                plateau_fat_step_g: adjustment::PLATEAU_FAT_STEP_G,
                slow_loss_threshold_pct: adjustment::SLOW_LOSS_THRESHOLD_PCT,
                slow_loss_calorie_step: adjustment::SLOW_LOSS_CALORIE_STEP,
                slow_loss_carb_step_g: adjustment::SLOW_LOSS_CARB_STEP_G,
                slow_loss_fat_step_g: adjustment::SLOW_LOSS_FAT_STEP_G,
                reverse_max_gain_pct: adjustment::REVERSE_MAX_GAIN_PCT,
                reverse_calorie_increase_fraction: adjustment::REVERSE_CALORIE_INCREASE_FRACTION,
                reverse_carb_step_g: adjustment::REVERSE_CARB_STEP_G,
                reverse_fat_step_g: adjustment::REVERSE_FAT_STEP_G,
            },
        }
    }
}

/// Global configuration singleton
static PLAN_CONFIG: OnceLock<PlanConfig> = OnceLock::new();

impl PlanConfig {
    /// Process-wide configuration with production defaults
    pub fn global() -> &'static Self {
        PLAN_CONFIG.get_or_init(Self::default)
    }

    /// Check internal coherence of an overridden configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first incoherent value found.
    pub fn validate(&self) -> AppResult<()> {
        if self.bmr.lbm_coef <= 0.0 || self.bmr.fm_coef <= 0.0 {
            return Err(AppError::config(
                "BMR body composition coefficients must be positive",
            ));
        }

        for (bucket, factor) in [
            ("low", self.adaptation.low),
            ("medium", self.adaptation.medium),
            ("high", self.adaptation.high),
            ("perpetual", self.adaptation.perpetual),
        ] {
            if !(0.0..1.0).contains(&factor) {
                return Err(AppError::config(format!(
                    "adaptation factor for '{bucket}' must be in [0, 1), got {factor}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.goals.fat_loss_deficit_multiplier) {
            return Err(AppError::config(
                "fat loss deficit multiplier must be in [0, 1]",
            ));
        }
        if self.goals.protein_fat_loss_g_per_kg_lbm <= 0.0
            || self.goals.protein_default_g_per_kg_lbm <= 0.0
        {
            return Err(AppError::config("protein targets must be positive"));
        }

        if self.macros.min_fat_fraction <= 0.0 || self.macros.min_fat_fraction >= 1.0 {
            return Err(AppError::config("minimum fat fraction must be in (0, 1)"));
        }
        if !(0.0..=1.0).contains(&self.macros.remainder_carb_fraction) {
            return Err(AppError::config(
                "remainder carb fraction must be in [0, 1]",
            ));
        }

        if self.adjustment.plateau_threshold_kg <= 0.0 {
            return Err(AppError::config("plateau threshold must be positive"));
        }

        Ok(())
    }
}
