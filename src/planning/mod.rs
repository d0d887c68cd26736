// ABOUTME: Planning module grouping the plan calculator and adjustment engine
// ABOUTME: Pure deterministic algorithms over the shared data model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Coaching

//! Plan calculation and weekly adjustment
//!
//! Two leaf components with no shared state: the plan calculator produces
//! the initial plan at onboarding, the adjustment engine revises it from
//! weekly weight-trend data. The adjustment engine depends only on the
//! calculator's output shape, never on the calculator itself.

/// Weekly hold/change decisions from weight-trend averages
pub mod adjustment_engine;

/// Named physiological constants and policy values
pub mod physiological_constants;

/// Onboarding plan calculation chain
pub mod plan_calculator;

pub use adjustment_engine::{calculate_weekly_adjustment, process_weekly_check_in};
pub use plan_calculator::calculate_onboarding_plan;
