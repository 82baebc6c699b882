//! API request and response types
//!
//! These are pure data-transfer shapes: each instance exists only for the
//! duration of one request/response exchange. Open-ended payloads (plan
//! bodies, generation output, constraint snapshots) stay as `serde_json`
//! values so the backend can evolve them without breaking the client.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use validator::Validate;

// ============================================================================
// Nutrition Target Types
// ============================================================================

/// Rate-of-change key for cut/bulk target maps, in kg per week.
///
/// Serialized as the literal strings "0.5", "1" and "2", the only keys
/// the backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChangeRate {
    #[serde(rename = "0.5")]
    Half,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
}

impl ChangeRate {
    /// The wire label for this rate
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeRate::Half => "0.5",
            ChangeRate::One => "1",
            ChangeRate::Two => "2",
        }
    }
}

/// Calorie targets: a maintenance value plus cut and bulk target sets
/// keyed by weekly rate of change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    pub maintenance: f64,
    pub cut: BTreeMap<ChangeRate, f64>,
    pub bulk: BTreeMap<ChangeRate, f64>,
}

// ============================================================================
// Nutrition Snapshot Types
// ============================================================================

/// An accepted or rejected meal record inside a version snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSnapshot {
    pub key: String,
    pub name: String,
}

/// Versioned record of a previous nutrition generation round.
///
/// The `version` counter is caller-supplied and must be non-decreasing
/// across regenerate calls; the backend uses the snapshot as the baseline
/// for its diff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionVersionSnapshotV1 {
    pub version: u64,
    pub targets: NutritionTargets,
    pub accepted_meals: Vec<MealSnapshot>,
    pub rejected_meals: Vec<MealSnapshot>,
    #[serde(default)]
    pub constraints_snapshot: Map<String, Value>,
}

// ============================================================================
// Nutrition Request Types
// ============================================================================

/// Request body for `/nutrition/generate`.
///
/// Count bounds match what the backend enforces server-side; validating
/// them here keeps obviously malformed requests off the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NutritionGenerateRequest {
    pub targets: NutritionTargets,
    /// Explicit calorie target overriding the maintenance-derived one
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 900, max = 4500))]
    pub target_calories: Option<u32>,
    /// Diet label, e.g. "vegan", "vegetarian", "pescatarian"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allergies: Vec<String>,
    #[validate(range(min = 1, max = 20))]
    pub meals_needed: u32,
    #[validate(range(min = 1, max = 50))]
    pub max_attempts: u32,
    #[validate(range(min = 1, max = 20))]
    pub batch_size: u32,
}

/// Request body for `/nutrition/regenerate`: a generate request plus the
/// previous snapshot the backend diffs against.
///
/// Flattened on the wire, so the generate fields sit at the top level
/// alongside `prev_snapshot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NutritionRegenerateRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub request: NutritionGenerateRequest,
    pub prev_snapshot: NutritionVersionSnapshotV1,
}

// ============================================================================
// Nutrition Response Types
// ============================================================================

/// Response body for `/nutrition/generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionGenerateResponse {
    pub output: Map<String, Value>,
    pub version_snapshot: NutritionVersionSnapshotV1,
}

/// Response body for `/nutrition/regenerate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRegenerateResponse {
    pub output: Map<String, Value>,
    pub version_snapshot: NutritionVersionSnapshotV1,
    pub diff: Map<String, Value>,
    pub explanations: Vec<String>,
}

// ============================================================================
// Macro Calculation Types
// ============================================================================

/// Biological sex (male/female) for macro calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

/// Activity level labels accepted by the macro calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Very,
    Athlete,
    Active,
    VeryActive,
}

/// Request body for `/nutrition/macro-calc`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroCalcRequest {
    pub sex: BiologicalSex,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
}

/// Derived calorie/macro figures returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    /// Total Daily Energy Expenditure
    pub tdee: f64,
    pub maintenance: f64,
    pub targets: NutritionTargets,
    pub explanation: String,
    pub activity_multiplier: f64,
    /// Basal Metabolic Rate
    pub bmr: f64,
}

/// Response body for `/nutrition/macro-calc`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroCalcResponse {
    pub implemented: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macros: Option<MacroBreakdown>,
}
