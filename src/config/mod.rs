// ABOUTME: Configuration module for the plan engine
// ABOUTME: Re-exports the policy configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Coaching

/// Plan policy configuration structures and defaults
pub mod plan_config;

pub use plan_config::{
    AdaptationFactorsConfig, AdjustmentPolicyConfig, GoalPolicyConfig, MacroSplitConfig,
    MullerBmrConfig, PlanConfig,
};
