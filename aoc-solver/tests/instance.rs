//! Behavior of solver instances behind the type-erased interface

use aoc_solver::{
    AocParser, AocSolver, DynSolver, ParseError, PartSolver, SolveError, SolverInstance,
};

#[derive(Debug, Default)]
struct Counter {
    values: Vec<u32>,
    part_one_runs: u32,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Counting;

impl AocParser for Counting {
    type SharedData<'a> = Counter;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let values = input
            .split(',')
            .map(|v| v.trim().parse().map_err(|_| ParseError::InvalidFormat(v.to_string())))
            .collect::<Result<_, _>>()?;
        Ok(Counter {
            values,
            part_one_runs: 0,
        })
    }
}

impl PartSolver<1> for Counting {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.part_one_runs += 1;
        Ok(shared.values.iter().max().copied().unwrap_or(0).to_string())
    }
}

impl PartSolver<2> for Counting {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.part_one_runs.to_string())
    }
}

#[test]
fn test_parse_error_surfaces() {
    let result = SolverInstance::<Counting>::new(2015, 1, "1,x,3");
    assert!(matches!(result, Err(ParseError::InvalidFormat(v)) if v == "x"));
}

#[test]
fn test_instance_metadata_and_timing() {
    let instance = SolverInstance::<Counting>::new(2015, 7, "4, 9, 2").unwrap();
    assert_eq!(instance.shared().values, vec![4, 9, 2]);

    let mut solver: Box<dyn DynSolver> = Box::new(instance);
    assert_eq!(solver.year(), 2015);
    assert_eq!(solver.day(), 7);
    assert_eq!(solver.parts(), 2);
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());

    let result = solver.solve(1).unwrap();
    assert_eq!(result.part, 1);
    assert_eq!(result.answer, "9");
    assert!(result.duration() >= chrono::TimeDelta::zero());
}

#[test]
fn test_parse_time_reported_once() {
    let mut solver = SolverInstance::<Counting>::new(2015, 7, "5").unwrap();
    assert!(solver.solve(3).is_err());

    let first = solver.solve(2).unwrap();
    assert_eq!(first.parse_duration, Some(solver.parse_duration()));
    assert_eq!(solver.solve(1).unwrap().parse_duration, None);
    assert_eq!(solver.solve(2).unwrap().parse_duration, None);
}

#[test]
fn test_shared_state_persists_between_parts() {
    let mut solver = SolverInstance::<Counting>::new(2015, 7, "1").unwrap();
    assert_eq!(solver.solve(2).unwrap().answer, "0");
    solver.solve(1).unwrap();
    solver.solve(1).unwrap();
    assert_eq!(solver.solve(2).unwrap().answer, "2");
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}
