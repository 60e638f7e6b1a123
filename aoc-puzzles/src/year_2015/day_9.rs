use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 9, tags = ["2015", "graph", "permutation"])]
pub struct Solver;

/// Cities by index with a symmetric distance matrix
#[derive(Debug)]
pub struct Graph<'a> {
    names: Vec<&'a str>,
    distances: Vec<Vec<Option<u32>>>,
}

impl<'a> Graph<'a> {
    fn index_of(&mut self, name: &'a str) -> usize {
        match self.names.iter().position(|n| *n == name) {
            Some(idx) => idx,
            None => {
                self.names.push(name);
                for row in &mut self.distances {
                    row.push(None);
                }
                self.distances.push(vec![None; self.names.len()]);
                self.names.len() - 1
            }
        }
    }

    fn route_length(&self, route: &[usize]) -> Option<u32> {
        route
            .windows(2)
            .map(|leg| self.distances[leg[0]][leg[1]])
            .sum()
    }

    /// Shortest and longest complete routes
    fn extremes(&self) -> Option<(u32, u32)> {
        let route_lengths = (0..self.names.len())
            .permutations(self.names.len())
            // every route is also listed reversed
            .filter(|route| route.first() <= route.last())
            .filter_map(|route| self.route_length(&route));
        route_lengths.minmax().into_option()
    }
}

pub struct SharedData<'a> {
    graph: Graph<'a>,
    extremes: Option<(u32, u32)>,
}

fn extremes(shared: &mut SharedData<'_>) -> Result<(u32, u32), SolveError> {
    if let Some(extremes) = shared.extremes {
        return Ok(extremes);
    }
    let extremes = shared
        .graph
        .extremes()
        .ok_or_else(|| SolveError::SolveFailed("no route visits every city".into()))?;
    shared.extremes = Some(extremes);
    Ok(extremes)
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let line_regex = Regex::new(r"^(\w+) to (\w+) = (\d+)$")
            .map_err(|e| ParseError::Other(e.to_string()))?;
        let mut graph = Graph {
            names: Vec::new(),
            distances: Vec::new(),
        };

        for (idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let caps = line_regex
                .captures(line)
                .ok_or_else(|| ParseError::at_line(idx + 1, "expected \"A to B = distance\""))?;
            let (_, [from, to, distance]) = caps.extract();
            let distance: u32 = distance
                .parse()
                .map_err(|e| ParseError::at_line(idx + 1, e))?;
            if from == to {
                return Err(ParseError::at_line(idx + 1, format!("{} is linked to itself", from)));
            }

            let (a, b) = (graph.index_of(from), graph.index_of(to));
            if graph.distances[a][b].is_some_and(|known| known != distance) {
                return Err(ParseError::at_line(
                    idx + 1,
                    format!("conflicting distance between {} and {}", from, to),
                ));
            }
            graph.distances[a][b] = Some(distance);
            graph.distances[b][a] = Some(distance);
        }

        if graph.names.is_empty() {
            return Err(ParseError::MissingData("no distances".to_string()));
        }
        Ok(SharedData {
            graph,
            extremes: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        extremes(shared).map(|(shortest, _)| shortest.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        extremes(shared).map(|(_, longest)| longest.to_string())
    }
}
