//! Property tests for part range validation and derive dispatch

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Solver with a configurable number of parts that echoes the part number
struct Echo<const N: u8>;

impl<const N: u8> AocParser for Echo<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for Echo<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

fn checked(max_parts: u8, part: u8) -> Result<String, SolveError> {
    match max_parts {
        1 => Echo::<1>::solve_part_checked_range(&mut (), part),
        2 => Echo::<2>::solve_part_checked_range(&mut (), part),
        _ => Echo::<3>::solve_part_checked_range(&mut (), part),
    }
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Lines;

impl AocParser for Lines {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for Lines {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for Lines {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|l| l.len()).sum::<usize>().to_string())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Parts outside `1..=PARTS` are rejected with the requested part number
    #[test]
    fn prop_out_of_range_rejected(max_parts in 1u8..=3, part in 0u8..=255) {
        let result = checked(max_parts, part);
        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{}", part));
        }
    }

    /// `solve_part` on a derived solver matches calling the part directly
    #[test]
    fn prop_derive_dispatch(lines in prop::collection::vec("[a-z]{0,8}", 0..6), part in 1u8..=2) {
        let input = lines.join("\n");
        let mut via_solver = Lines::parse(&input).unwrap();
        let mut direct = Lines::parse(&input).unwrap();

        let expected = match part {
            1 => <Lines as PartSolver<1>>::solve(&mut direct),
            _ => <Lines as PartSolver<2>>::solve(&mut direct),
        };
        prop_assert_eq!(Lines::solve_part(&mut via_solver, part).unwrap(), expected.unwrap());
    }
}

#[test]
fn test_part_zero_rejected() {
    assert!(matches!(
        Echo::<2>::solve_part_checked_range(&mut (), 0),
        Err(SolveError::PartOutOfRange(0))
    ));
}

#[test]
fn test_part_exceeds_max_rejected() {
    assert!(matches!(
        Lines::solve_part_checked_range(&mut Vec::new(), 3),
        Err(SolveError::PartOutOfRange(3))
    ));
}
