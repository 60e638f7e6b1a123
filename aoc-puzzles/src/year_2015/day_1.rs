use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 1, tags = ["2015", "string"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
}

impl Move {
    fn delta(self) -> i64 {
        match self {
            Move::Up => 1,
            Move::Down => -1,
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Move>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .map(|(pos, c)| match c {
                '(' => Ok(Move::Up),
                ')' => Ok(Move::Down),
                other => Err(ParseError::InvalidFormat(format!(
                    "unexpected character {:?} at position {}",
                    other,
                    pos + 1
                ))),
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|m| m.delta()).sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .scan(0i64, |floor, m| {
                *floor += m.delta();
                Some(*floor)
            })
            .position(|floor| floor == -1)
            .map(|pos| (pos + 1).to_string())
            .ok_or_else(|| SolveError::SolveFailed("basement not reached".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    #[test]
    fn test_final_floor() {
        for (input, floor) in [
            ("(())", "0"),
            ("()()", "0"),
            ("(((", "3"),
            ("(()(()(", "3"),
            ("))(((((", "3"),
            ("())", "-1"),
            ("))(", "-1"),
            (")))", "-3"),
            (")())())", "-3"),
        ] {
            assert_eq!(solve::<Solver>(input, 1).unwrap(), floor, "input {}", input);
        }
    }

    #[test]
    fn test_basement_position() {
        assert_eq!(solve::<Solver>(")", 2).unwrap(), "1");
        assert_eq!(solve::<Solver>("()())", 2).unwrap(), "5");
        assert!(matches!(solve::<Solver>("((", 2), Err(SolveError::SolveFailed(_))));
    }

    #[test]
    fn test_rejects_unknown_character() {
        let err = Solver::parse("(()x").unwrap_err();
        assert!(err.to_string().contains("position 4"));
        assert!(Solver::parse("(()\n").is_ok());
    }
}
