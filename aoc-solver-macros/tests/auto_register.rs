use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 10, tags = ["test", "embedded"], input = "111221")]
struct Embedded;

impl AocParser for Embedded {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for Embedded {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for Embedded {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.chars().rev().collect())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2022, day = 1)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = usize;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().count())
    }
}

impl PartSolver<1> for Untagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

#[test]
fn test_plugins_discovered() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    assert_eq!(registry.len(), 2);

    let info = registry.info(2015, 10).expect("2015/10 registered");
    assert_eq!(info.parts, 2);
    assert_eq!(info.tags, &["test", "embedded"]);
    assert_eq!(info.embedded_input, Some("111221"));

    let info = registry.info(2022, 1).expect("2022/1 registered");
    assert_eq!(info.parts, 1);
    assert!(info.tags.is_empty());
    assert_eq!(info.embedded_input, None);
}

#[test]
fn test_plugin_filter_by_tag() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"embedded"))
        .unwrap()
        .build();

    assert!(registry.contains(2015, 10));
    assert!(!registry.contains(2022, 1));
}

#[test]
fn test_registered_plugin_solves() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let input = registry.info(2015, 10).and_then(|i| i.embedded_input).unwrap();
    let mut solver = registry.create_solver(2015, 10, input).unwrap();
    assert_eq!(solver.year(), 2015);
    assert_eq!(solver.day(), 10);
    assert_eq!(solver.solve(1).unwrap().answer, "6");
    assert_eq!(solver.solve(2).unwrap().answer, "122111");
}
