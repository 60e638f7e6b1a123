use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 10, tags = ["2015", "string"], input = "1321131112")]
pub struct Solver;

const PART_ONE_ROUNDS: usize = 40;
const PART_TWO_ROUNDS: usize = 50;

pub struct SharedData {
    digits: Vec<u8>,
    after_part_one: Option<Vec<u8>>,
}

/// One round of look-and-say: each run of a digit becomes its length then the digit
fn look_and_say(digits: &[u8]) -> Vec<u8> {
    let mut next = Vec::with_capacity(digits.len() * 4 / 3 + 2);
    for run in digits.chunk_by(|a, b| a == b) {
        next.extend(run.len().to_string().bytes().map(|b| b - b'0'));
        next.push(run[0]);
    }
    next
}

fn rounds(digits: &[u8], count: usize) -> Vec<u8> {
    (0..count).fold(digits.to_vec(), |seq, _| look_and_say(&seq))
}

fn after_part_one(shared: &mut SharedData) -> &[u8] {
    let digits = &shared.digits;
    shared
        .after_part_one
        .get_or_insert_with(|| rounds(digits, PART_ONE_ROUNDS))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let seed = input.trim();
        if seed.is_empty() {
            return Err(ParseError::MissingData("starting sequence".to_string()));
        }
        let digits = seed
            .bytes()
            .map(|b| match b {
                b'0'..=b'9' => Ok(b - b'0'),
                other => Err(ParseError::InvalidFormat(format!(
                    "expected digits, found {:?}",
                    char::from(other)
                ))),
            })
            .collect::<Result<_, _>>()?;
        Ok(SharedData {
            digits,
            after_part_one: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(after_part_one(shared).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sequence = rounds(after_part_one(shared), PART_TWO_ROUNDS - PART_ONE_ROUNDS);
        Ok(sequence.len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    #[test]
    fn test_rounds() {
        let mut seq = vec![1];
        for expected in [&[1, 1][..], &[2, 1], &[1, 2, 1, 1], &[1, 1, 1, 2, 2, 1], &[3, 1, 2, 2, 1, 1]] {
            seq = look_and_say(&seq);
            assert_eq!(seq, expected);
        }
    }

    #[test]
    fn test_long_runs_in_seed() {
        assert_eq!(look_and_say(&[7; 12]), vec![1, 2, 7]);
    }

    #[test]
    fn test_embedded_input() {
        assert_eq!(solve::<Solver>("1321131112", 1).unwrap(), "492982");
    }

    #[test]
    fn test_part_two_reuses_part_one() {
        let mut shared = Solver::parse("1").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "82350");
        assert!(shared.after_part_one.is_some());
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "1166642");
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(Solver::parse("12a").is_err());
        assert!(matches!(Solver::parse(" \n"), Err(ParseError::MissingData(_))));
    }
}
