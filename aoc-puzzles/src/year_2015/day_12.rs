use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use serde_json::Value;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 12, tags = ["2015", "json"])]
pub struct Solver;

/// Sum every number in `value`, skipping objects `skip` accepts
fn sum(value: &Value, skip: &impl Fn(&serde_json::Map<String, Value>) -> bool) -> Result<i64, SolveError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| SolveError::SolveFailed(format!("{} is not an integer", n).into())),
        Value::Array(items) => checked_total(items.iter(), skip),
        Value::Object(map) if skip(map) => Ok(0),
        Value::Object(map) => checked_total(map.values(), skip),
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(0),
    }
}

fn checked_total<'v>(
    mut values: impl Iterator<Item = &'v Value>,
    skip: &impl Fn(&serde_json::Map<String, Value>) -> bool,
) -> Result<i64, SolveError> {
    values.try_fold(0i64, |total, v| {
        total
            .checked_add(sum(v, skip)?)
            .ok_or_else(|| SolveError::SolveFailed("sum overflows i64".into()))
    })
}

fn is_red(map: &serde_json::Map<String, Value>) -> bool {
    map.values().any(|v| v.as_str() == Some("red"))
}

impl AocParser for Solver {
    type SharedData<'a> = Value;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        serde_json::from_str(input.trim()).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum(shared, &|_| false).map(|total| total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum(shared, &is_red).map(|total| total.to_string())
    }
}
