use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::md5::{Md5Miner, leading_zero_nibbles};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 4, tags = ["2015", "hash"])]
pub struct Solver;

pub struct SharedData {
    miner: Md5Miner,
    five_zeros: Option<u64>,
}

/// Lowest `n >= start` whose digest begins with `zeros` hex zeros
fn mine(miner: &Md5Miner, zeros: u32, start: u64) -> Result<u64, SolveError> {
    (start.max(1)..=u64::MAX)
        .find(|&n| leading_zero_nibbles(&miner.digest(n)) >= zeros)
        .ok_or_else(|| SolveError::SolveFailed(format!("no hash with {} leading zeros", zeros).into()))
}

fn five_zeros(shared: &mut SharedData) -> Result<u64, SolveError> {
    if let Some(n) = shared.five_zeros {
        return Ok(n);
    }
    let n = mine(&shared.miner, 5, 1)?;
    Ok(*shared.five_zeros.insert(n))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let key = input.trim();
        if key.is_empty() {
            return Err(ParseError::MissingData("secret key".to_string()));
        }
        Ok(SharedData {
            miner: Md5Miner::new(key),
            five_zeros: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        five_zeros(shared).map(|n| n.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // six zeros imply five, so nothing below the part one answer qualifies
        let start = shared.five_zeros.unwrap_or(1);
        mine(&shared.miner, 6, start).map(|n| n.to_string())
    }
}
