//! Condition, group and eligibility evaluation.
//!
//! Two fixed nesting levels: an eligibility expression combines groups, a
//! group combines atomic conditions, both under AND/OR with the usual
//! vacuous-truth rules. Malformed operator or logic strings fail fast with
//! the offending symbol; everything else evaluates to a plain boolean.

use assess_model::{
    CompareOp, ConditionExpression, ConditionGroup, EligibilityExpression, EvalError, Logic,
    Result, VariableValue,
};
use serde_json::Value;
use std::collections::BTreeMap;

const NULL: VariableValue = VariableValue::Null;

/// Evaluate one atomic comparison against the derived variables.
///
/// An unknown variable name evaluates as null; only an unsupported operator
/// errors.
pub fn evaluate_condition(
    variables: &BTreeMap<String, VariableValue>,
    condition: &ConditionExpression,
) -> Result<bool> {
    let lhs = variables.get(&condition.var).unwrap_or(&NULL);
    compare(lhs, &condition.op, &condition.value)
}

/// Combine a group's conditions under its logic combinator.
pub fn evaluate_group(
    variables: &BTreeMap<String, VariableValue>,
    group: &ConditionGroup,
) -> Result<bool> {
    match &group.logic {
        Logic::And => {
            for condition in &group.conditions {
                if !evaluate_condition(variables, condition)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Logic::Or => {
            for condition in &group.conditions {
                if evaluate_condition(variables, condition)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        Logic::Other(raw) => Err(EvalError::UnsupportedLogic(raw.clone())),
    }
}

/// Combine an eligibility expression's groups under its logic combinator.
pub fn evaluate_eligibility(
    variables: &BTreeMap<String, VariableValue>,
    eligibility: &EligibilityExpression,
) -> Result<bool> {
    match &eligibility.logic {
        Logic::And => {
            for group in &eligibility.groups {
                if !evaluate_group(variables, group)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Logic::Or => {
            for group in &eligibility.groups {
                if evaluate_group(variables, group)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        Logic::Other(raw) => Err(EvalError::UnsupportedLogic(raw.clone())),
    }
}

fn compare(lhs: &VariableValue, op: &CompareOp, rhs: &Value) -> Result<bool> {
    match op {
        CompareOp::Eq => Ok(values_equal(lhs, rhs)),
        CompareOp::Ne => Ok(!values_equal(lhs, rhs)),
        CompareOp::Ge => Ok(ordered(lhs, rhs, |l, r| l >= r)),
        CompareOp::Le => Ok(ordered(lhs, rhs, |l, r| l <= r)),
        CompareOp::Gt => Ok(ordered(lhs, rhs, |l, r| l > r)),
        CompareOp::Lt => Ok(ordered(lhs, rhs, |l, r| l < r)),
        CompareOp::Other(raw) => Err(EvalError::UnsupportedOperator(raw.clone())),
    }
}

/// Strict same-kind equality. NaN never equals anything; multi-select
/// values never compare equal.
fn values_equal(lhs: &VariableValue, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (VariableValue::Null, Value::Null) => true,
        (VariableValue::Bool(l), Value::Bool(r)) => l == r,
        (VariableValue::Number(l), Value::Number(r)) => r.as_f64().is_some_and(|r| *l == r),
        (VariableValue::Text(l), Value::String(r)) => l == r,
        _ => false,
    }
}

/// Ordering is meaningful only for a numeric variable against a numeric
/// literal; every other combination is false. NaN orders false under all
/// four operators. Ordering never errors.
fn ordered(lhs: &VariableValue, rhs: &Value, cmp: impl Fn(f64, f64) -> bool) -> bool {
    match (lhs.as_number(), rhs.as_f64()) {
        (Some(l), Some(r)) => cmp(l, r),
        _ => false,
    }
}
