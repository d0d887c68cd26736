// ABOUTME: Main library entry point for the Atlas plan engine
// ABOUTME: Deterministic nutrition plan calculation and weekly adjustment algorithms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Coaching

#![deny(unsafe_code)]

//! # Atlas Plan Engine
//!
//! The deterministic core of the Atlas nutrition coaching platform: turns
//! onboarding biometrics into a personalized macro plan, and revises that
//! plan weekly from observed weight trend.
//!
//! ## Components
//!
//! - **Plan calculator** ([`planning::plan_calculator`]): onboarding inputs
//!   (age, sex, body composition, dieting history, activity) → full
//!   calculated plan (BMR via the Müller equation, metabolic-adaptation
//!   adjustment, TDEE, target calories, macro split).
//! - **Adjustment engine** ([`planning::adjustment_engine`]): weekly weight
//!   averages + active plan → hold/change decision and, on change, a new
//!   macro plan.
//!
//! Both components are pure, synchronous functions over value inputs. They
//! perform no I/O and hold no state; the embedding service owns persistence
//! (active plan, weight history) and passes everything in as arguments.
//! Identical inputs always produce structurally identical outputs.
//!
//! ## Example
//!
//! ```rust
//! use atlas_plan_engine::config::PlanConfig;
//! use atlas_plan_engine::models::{DietHistory, GoalType, OnboardingInput, Sex};
//! use atlas_plan_engine::planning::calculate_onboarding_plan;
//!
//! let input = OnboardingInput {
//!     age: 30,
//!     sex: Sex::Male,
//!     body_weight_kg: 90.0,
//!     body_fat_percentage: 20.0,
//!     goal_type: GoalType::FatLoss,
//!     diet_history: DietHistory::Low,
//!     activity_factor: 1.55,
//! };
//!
//! let plan = calculate_onboarding_plan(&input, PlanConfig::global())?;
//! assert_eq!(plan.tdee, 2981);
//! # Ok::<(), atlas_plan_engine::errors::AppError>(())
//! ```

/// Policy configuration: every numeric constant the engine branches on
pub mod config;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Wire-compatible data model shared with the request-handling layer
pub mod models;

/// Plan calculation and weekly adjustment algorithms
pub mod planning;
