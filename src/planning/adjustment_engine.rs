// ABOUTME: Weekly plan adjustment from rolling weight-trend averages
// ABOUTME: Goal-dependent hold/change decisions with fixed conservative step sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Coaching

//! Adjustment Engine
//!
//! Evaluates one weekly check-in against the active macro plan and decides
//! whether to hold or take one small step. The decision is entirely local
//! to the two weight averages supplied; the engine keeps no memory across
//! calls, so "plateau" and "good progress" are re-derived fresh each week.
//!
//! Adjusted plans mutate macro grams by fixed deltas rather than re-deriving
//! the split from the new calorie target. This is deliberate: it matches the
//! production coaching policy, at the cost that adjusted plans drift a few
//! kcal from exact macro reconstruction.

use crate::config::{AdjustmentPolicyConfig, PlanConfig};
use crate::errors::{AppError, AppResult};
use crate::models::{GoalType, MacroPlan, WeeklyAdjustment, WeeklyCheckInData};

/// Evaluate a weekly check-in and decide whether to adjust the active plan
///
/// # Errors
///
/// Returns a `DegenerateInput` error when `previous_weight_avg` is zero or
/// negative, or when either average is not finite, since the percentage
/// change would be undefined.
pub fn calculate_weekly_adjustment(
    current_weight_avg: f64,
    previous_weight_avg: f64,
    goal_type: GoalType,
    current_plan: &MacroPlan,
    config: &AdjustmentPolicyConfig,
) -> AppResult<WeeklyAdjustment> {
    if !current_weight_avg.is_finite() || !previous_weight_avg.is_finite() {
        return Err(AppError::degenerate_input(
            "weight averages must be finite numbers",
        ));
    }
    if previous_weight_avg <= 0.0 {
        return Err(AppError::degenerate_input(format!(
            "previousWeightAvg must be positive (got {previous_weight_avg})"
        )));
    }

    let weight_change = current_weight_avg - previous_weight_avg;
    let weight_change_pct = weight_change / previous_weight_avg * 100.0;

    tracing::info!(
        current_weight_avg,
        previous_weight_avg,
        weight_change,
        weight_change_pct,
        goal_type = ?goal_type,
        "evaluating weekly adjustment"
    );

    let adjustment = match goal_type {
        GoalType::FatLoss => {
            fat_loss_adjustment(weight_change, weight_change_pct, current_plan, config)
        }
        GoalType::ReverseDieting => {
            reverse_dieting_adjustment(weight_change_pct, current_plan, config)
        }
        GoalType::Maintenance => WeeklyAdjustment {
            should_adjust: false,
            reason: "Maintenance mode - no adjustments needed".to_owned(),
            new_plan: None,
            recommendation: "Continue monitoring weight trends.".to_owned(),
        },
    };

    Ok(adjustment)
}

/// Evaluate a full check-in payload
///
/// Thin wrapper over [`calculate_weekly_adjustment`] for callers holding a
/// [`WeeklyCheckInData`] document from the tracking layer.
///
/// # Errors
///
/// Same error conditions as [`calculate_weekly_adjustment`].
pub fn process_weekly_check_in(
    data: &WeeklyCheckInData,
    config: &PlanConfig,
) -> AppResult<WeeklyAdjustment> {
    tracing::info!(user_id = %data.user_id, "processing weekly check-in");

    calculate_weekly_adjustment(
        data.current_weight_avg,
        data.previous_weight_avg,
        data.goal_type,
        &data.current_plan,
        &config.adjustment,
    )
}

/// Fat loss: plateau takes precedence over the rate check
///
/// Target rate is 0.4-0.8% loss per week; anything slower than the
/// threshold earns a small cut, anything at or beyond it holds.
fn fat_loss_adjustment(
    weight_change: f64,
    weight_change_pct: f64,
    current_plan: &MacroPlan,
    config: &AdjustmentPolicyConfig,
) -> WeeklyAdjustment {
    if weight_change.abs() < config.plateau_threshold_kg {
        return WeeklyAdjustment {
            should_adjust: true,
            reason: "Plateau detected (no weight change for 7+ days)".to_owned(),
            new_plan: Some(MacroPlan {
                calories_target: current_plan.calories_target - config.plateau_calorie_step,
                protein_target_g: current_plan.protein_target_g,
                carbs_target_g: current_plan.carbs_target_g - config.plateau_carb_step_g,
                fat_target_g: current_plan.fat_target_g - config.plateau_fat_step_g,
            }),
            recommendation: format!(
                "Reduce calories by {} ({}g carbs + {}g fat). Monitor for next 7 days.",
                config.plateau_calorie_step, config.plateau_carb_step_g, config.plateau_fat_step_g
            ),
        };
    }

    if weight_change_pct > config.slow_loss_threshold_pct {
        return WeeklyAdjustment {
            should_adjust: true,
            reason: format!("Weight loss too slow ({weight_change_pct:.2}%)"),
            new_plan: Some(MacroPlan {
                calories_target: current_plan.calories_target - config.slow_loss_calorie_step,
                protein_target_g: current_plan.protein_target_g,
                carbs_target_g: current_plan.carbs_target_g - config.slow_loss_carb_step_g,
                fat_target_g: current_plan.fat_target_g - config.slow_loss_fat_step_g,
            }),
            recommendation: "Small calorie reduction. Continue monitoring.".to_owned(),
        };
    }

    WeeklyAdjustment {
        should_adjust: false,
        reason: format!("Good progress ({weight_change_pct:.2}% change)"),
        new_plan: None,
        recommendation: "Continue with current plan. Keep tracking consistently.".to_owned(),
    }
}

/// Reverse dieting: gain at or below the conservative ceiling earns an increase
fn reverse_dieting_adjustment(
    weight_change_pct: f64,
    current_plan: &MacroPlan,
    config: &AdjustmentPolicyConfig,
) -> WeeklyAdjustment {
    if weight_change_pct <= config.reverse_max_gain_pct {
        let calorie_increase = (f64::from(current_plan.calories_target)
            * config.reverse_calorie_increase_fraction)
            .round() as i32;

        return WeeklyAdjustment {
            should_adjust: true,
            reason: format!("Metabolism adapting well ({weight_change_pct:.2}% gain)"),
            new_plan: Some(MacroPlan {
                calories_target: current_plan.calories_target + calorie_increase,
                protein_target_g: current_plan.protein_target_g,
                carbs_target_g: current_plan.carbs_target_g + config.reverse_carb_step_g,
                fat_target_g: current_plan.fat_target_g + config.reverse_fat_step_g,
            }),
            recommendation: "Increase calories by ~2%. You've earned this metabolic boost!"
                .to_owned(),
        };
    }

    WeeklyAdjustment {
        should_adjust: false,
        reason: format!("Weight gain above threshold ({weight_change_pct:.2}%)"),
        new_plan: None,
        recommendation: "Hold calories steady for 1-2 weeks to allow metabolism to catch up."
            .to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_plan() -> MacroPlan {
        MacroPlan {
            calories_target: 2683,
            protein_target_g: 187,
            carbs_target_g: 241,
            fat_target_g: 108,
        }
    }

    fn adjustment_config() -> AdjustmentPolicyConfig {
        PlanConfig::default().adjustment
    }

    #[test]
    fn test_fat_loss_plateau_takes_precedence() {
        let config = adjustment_config();
        // |change| = 0.05 kg, below the 0.1 kg plateau threshold. The
        // percentage branch would also fire here, but plateau wins.
        let adjustment =
            calculate_weekly_adjustment(80.0, 80.05, GoalType::FatLoss, &active_plan(), &config)
                .unwrap();

        assert!(adjustment.should_adjust);
        assert!(adjustment.reason.contains("Plateau"));

        let new_plan = adjustment.new_plan.unwrap();
        assert_eq!(new_plan.calories_target, 2683 - 125);
        assert_eq!(new_plan.carbs_target_g, 241 - 15);
        assert_eq!(new_plan.fat_target_g, 108 - 7);
        assert_eq!(new_plan.protein_target_g, 187);
    }

    #[test]
    fn test_fat_loss_too_slow() {
        let config = adjustment_config();
        // -0.2 kg on 90 kg = -0.22%, slower than the -0.3% target
        let adjustment =
            calculate_weekly_adjustment(89.8, 90.0, GoalType::FatLoss, &active_plan(), &config)
                .unwrap();

        assert!(adjustment.should_adjust);
        assert!(adjustment.reason.contains("too slow"));

        let new_plan = adjustment.new_plan.unwrap();
        assert_eq!(new_plan.calories_target, 2683 - 100);
        assert_eq!(new_plan.carbs_target_g, 241 - 12);
        assert_eq!(new_plan.fat_target_g, 108 - 4);
        assert_eq!(new_plan.protein_target_g, 187);
    }

    #[test]
    fn test_fat_loss_good_progress_holds() {
        let config = adjustment_config();
        // -1.0 kg on 90 kg = -1.11%, at or beyond the target rate
        let adjustment =
            calculate_weekly_adjustment(89.0, 90.0, GoalType::FatLoss, &active_plan(), &config)
                .unwrap();

        assert!(!adjustment.should_adjust);
        assert!(adjustment.reason.contains("Good progress"));
        assert!(adjustment.new_plan.is_none());
    }

    #[test]
    fn test_reverse_dieting_increase() {
        let config = adjustment_config();
        // +0.08 kg on 80 kg = +0.1%, under the 0.2% ceiling
        let adjustment = calculate_weekly_adjustment(
            80.08,
            80.0,
            GoalType::ReverseDieting,
            &active_plan(),
            &config,
        )
        .unwrap();

        assert!(adjustment.should_adjust);
        assert!(adjustment.reason.contains("adapting well"));

        let new_plan = adjustment.new_plan.unwrap();
        // round(2683 * 0.02) = 54
        assert_eq!(new_plan.calories_target, 2683 + 54);
        assert_eq!(new_plan.carbs_target_g, 241 + 8);
        assert_eq!(new_plan.fat_target_g, 108 + 2);
        assert_eq!(new_plan.protein_target_g, 187);
    }

    #[test]
    fn test_reverse_dieting_gain_above_ceiling_holds() {
        let config = adjustment_config();
        // +0.4 kg on 80 kg = +0.5%
        let adjustment = calculate_weekly_adjustment(
            80.4,
            80.0,
            GoalType::ReverseDieting,
            &active_plan(),
            &config,
        )
        .unwrap();

        assert!(!adjustment.should_adjust);
        assert!(adjustment.reason.contains("above threshold"));
        assert!(adjustment.new_plan.is_none());
    }

    #[test]
    fn test_maintenance_never_adjusts() {
        let config = adjustment_config();

        for (current, previous) in [(80.0, 80.05), (79.0, 80.0), (81.0, 80.0)] {
            let adjustment = calculate_weekly_adjustment(
                current,
                previous,
                GoalType::Maintenance,
                &active_plan(),
                &config,
            )
            .unwrap();

            assert!(!adjustment.should_adjust);
            assert!(adjustment.new_plan.is_none());
        }
    }

    #[test]
    fn test_zero_previous_average_is_degenerate() {
        let config = adjustment_config();
        let error =
            calculate_weekly_adjustment(80.0, 0.0, GoalType::FatLoss, &active_plan(), &config)
                .unwrap_err();

        assert!(error.is_validation());
        assert!(error.message.contains("previousWeightAvg"));
    }

    #[test]
    fn test_non_finite_average_is_degenerate() {
        let config = adjustment_config();
        let result = calculate_weekly_adjustment(
            f64::NAN,
            80.0,
            GoalType::FatLoss,
            &active_plan(),
            &config,
        );

        assert!(result.is_err());
    }
}
