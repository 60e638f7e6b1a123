use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 3, tags = ["2015", "grid"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    fn step(self, (x, y): (i32, i32)) -> (i32, i32) {
        match self {
            Direction::North => (x, y + 1),
            Direction::South => (x, y - 1),
            Direction::East => (x + 1, y),
            Direction::West => (x - 1, y),
        }
    }
}

/// Walk `couriers` deliverers through `moves` in turn, counting distinct houses
fn houses_visited(moves: &[Direction], couriers: usize) -> usize {
    let mut positions = vec![(0, 0); couriers];
    let mut visited = HashSet::from([(0, 0)]);
    for (turn, direction) in moves.iter().enumerate() {
        let position = &mut positions[turn % couriers];
        *position = direction.step(*position);
        visited.insert(*position);
    }
    visited.len()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Direction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '^' => Ok(Direction::North),
                'v' => Ok(Direction::South),
                '>' => Ok(Direction::East),
                '<' => Ok(Direction::West),
                other => Err(ParseError::InvalidFormat(format!("unexpected move {:?}", other))),
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(houses_visited(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(houses_visited(shared, 2).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    #[test]
    fn test_santa_alone() {
        assert_eq!(solve::<Solver>(">", 1).unwrap(), "2");
        assert_eq!(solve::<Solver>("^>v<", 1).unwrap(), "4");
        assert_eq!(solve::<Solver>("^v^v^v^v^v", 1).unwrap(), "2");
    }

    #[test]
    fn test_with_robo_santa() {
        assert_eq!(solve::<Solver>("^v", 2).unwrap(), "3");
        assert_eq!(solve::<Solver>("^>v<", 2).unwrap(), "3");
        assert_eq!(solve::<Solver>("^v^v^v^v^v", 2).unwrap(), "11");
    }

    #[test]
    fn test_invalid_move() {
        assert!(Solver::parse("^^x").is_err());
    }
}
