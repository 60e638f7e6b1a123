use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 3, tags = ["2022", "set"])]
pub struct Solver;

/// Items of one rucksack as priority bitsets, one per compartment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rucksack {
    pub left: u64,
    pub right: u64,
}

impl Rucksack {
    fn all(&self) -> u64 {
        self.left | self.right
    }
}

fn priority(item: u8) -> Option<u32> {
    match item {
        b'a'..=b'z' => Some(u32::from(item - b'a') + 1),
        b'A'..=b'Z' => Some(u32::from(item - b'A') + 27),
        _ => None,
    }
}

fn items(compartment: &[u8]) -> anyhow::Result<u64> {
    compartment.iter().try_fold(0u64, |set, &item| {
        priority(item)
            .map(|p| set | 1 << p)
            .ok_or_else(|| anyhow!("invalid item {:?}", char::from(item)))
    })
}

fn parse_line(line: &str) -> anyhow::Result<Rucksack> {
    let bytes = line.as_bytes();
    if bytes.len() % 2 != 0 {
        bail!("compartments differ in size ({} items)", bytes.len());
    }
    let (left, right) = bytes.split_at(bytes.len() / 2);
    Ok(Rucksack {
        left: items(left)?,
        right: items(right)?,
    })
}

/// Priority of the single item present in `set`
fn only_item(set: u64, what: &str) -> Result<u32, SolveError> {
    match set.count_ones() {
        1 => Ok(set.trailing_zeros()),
        0 => Err(SolveError::SolveFailed(format!("{} has no common item", what).into())),
        n => Err(SolveError::SolveFailed(format!("{} has {} common items", what, n).into())),
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Rucksack>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| parse_line(line).map_err(|e| ParseError::at_line(idx + 1, e)))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .enumerate()
            .map(|(idx, r)| only_item(r.left & r.right, &format!("rucksack {}", idx + 1)))
            .sum::<Result<u32, _>>()
            .map(|total| total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() % 3 != 0 {
            return Err(SolveError::SolveFailed(
                format!("{} rucksacks do not split into groups of three", shared.len()).into(),
            ));
        }
        shared
            .chunks(3)
            .enumerate()
            .map(|(idx, group)| {
                let badge = group.iter().fold(u64::MAX, |set, r| set & r.all());
                only_item(badge, &format!("group {}", idx + 1))
            })
            .sum::<Result<u32, _>>()
            .map(|total| total.to_string())
    }
}
