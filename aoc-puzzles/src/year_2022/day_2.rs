use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 2, tags = ["2022", "game"])]
pub struct Solver;

/// One round as column indices: opponent `A|B|C` and own `X|Y|Z`, both `0..3`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub opponent: u8,
    pub column: u8,
}

/// Shape `0..3` (rock, paper, scissors) against `opponent`, scored by the round
fn score(opponent: u8, own: u8) -> u32 {
    // 0 loss, 1 draw, 2 win
    let outcome = (own + 4 - opponent) % 3;
    u32::from(own) + 1 + u32::from(outcome) * 3
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Round>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| match line.trim().as_bytes() {
                &[opponent @ b'A'..=b'C', b' ', column @ b'X'..=b'Z'] => Ok(Round {
                    opponent: opponent - b'A',
                    column: column - b'X',
                }),
                _ => Err(ParseError::at_line(idx + 1, format!("expected \"A-C X-Z\", got {:?}", line))),
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared.iter().map(|r| score(r.opponent, r.column)).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // column is the desired outcome; losing shape is one behind the opponent's
        let total: u32 = shared
            .iter()
            .map(|r| score(r.opponent, (r.opponent + r.column + 2) % 3))
            .sum();
        Ok(total.to_string())
    }
}
