use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::Scanner;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 6, tags = ["2015", "grid"])]
pub struct Solver;

const SIZE: usize = 1000;
const WORDS_PER_ROW: usize = SIZE.div_ceil(64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    On,
    Off,
    Toggle,
}

/// Inclusive rectangle of lights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub action: Action,
    pub from: (usize, usize),
    pub to: (usize, usize),
}

fn parse_point(scanner: &mut Scanner<'_>) -> anyhow::Result<(usize, usize)> {
    let x = scanner.number()?;
    scanner.expect(",")?;
    let y = scanner.number()?;
    if x >= SIZE || y >= SIZE {
        bail!("point {},{} outside the {}x{} grid", x, y, SIZE, SIZE);
    }
    Ok((x, y))
}

fn parse_line(line: &str) -> anyhow::Result<Instruction> {
    let mut scanner = Scanner::new(line.trim());
    let action = if scanner.expect("turn on ").is_ok() {
        Action::On
    } else if scanner.expect("turn off ").is_ok() {
        Action::Off
    } else if scanner.expect("toggle ").is_ok() {
        Action::Toggle
    } else {
        bail!("unknown action in {:?}", line.trim());
    };

    let from = parse_point(&mut scanner)?;
    scanner.expect(" through ")?;
    let to = parse_point(&mut scanner)?;
    if !scanner.is_empty() {
        return Err(anyhow!("trailing data {:?}", scanner.rest()));
    }
    if to.0 < from.0 || to.1 < from.1 {
        bail!("rectangle ends before it starts");
    }
    Ok(Instruction { action, from, to })
}

/// On/off lights, one bit per light, rows of `u64` words
struct BitGrid {
    rows: Vec<[u64; WORDS_PER_ROW]>,
}

impl BitGrid {
    fn new() -> Self {
        Self {
            rows: vec![[0; WORDS_PER_ROW]; SIZE],
        }
    }

    fn apply(&mut self, instruction: &Instruction) {
        let (x1, y1) = instruction.from;
        let (x2, y2) = instruction.to;
        for row in &mut self.rows[y1..=y2] {
            for (idx, word) in row.iter_mut().enumerate() {
                let base = idx * 64;
                if x2 < base || x1 >= base + 64 {
                    continue;
                }
                let lo = x1.max(base) - base;
                let hi = x2.min(base + 63) - base;
                let mask = (u64::MAX >> (63 - (hi - lo))) << lo;
                match instruction.action {
                    Action::On => *word |= mask,
                    Action::Off => *word &= !mask,
                    Action::Toggle => *word ^= mask,
                }
            }
        }
    }

    fn lit(&self) -> u32 {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|word| word.count_ones())
            .sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| parse_line(line).map_err(|e| ParseError::at_line(idx + 1, e)))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut grid = BitGrid::new();
        shared.iter().for_each(|instruction| grid.apply(instruction));
        Ok(grid.lit().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut brightness = vec![0u32; SIZE * SIZE];
        for instruction in shared.iter() {
            let (x1, y1) = instruction.from;
            let (x2, y2) = instruction.to;
            for y in y1..=y2 {
                for light in &mut brightness[y * SIZE + x1..=y * SIZE + x2] {
                    *light = match instruction.action {
                        Action::On => *light + 1,
                        Action::Off => light.saturating_sub(1),
                        Action::Toggle => *light + 2,
                    };
                }
            }
        }
        Ok(brightness.iter().map(|&b| u64::from(b)).sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    #[test]
    fn test_lit_lights() {
        assert_eq!(solve::<Solver>("turn on 0,0 through 999,999", 1).unwrap(), "1000000");
        assert_eq!(solve::<Solver>("toggle 0,0 through 999,0", 1).unwrap(), "1000");
        let input = "turn on 0,0 through 999,999\ntoggle 0,0 through 999,0\nturn off 499,499 through 500,500\n";
        assert_eq!(solve::<Solver>(input, 1).unwrap(), "998996");
    }

    #[test]
    fn test_word_boundaries() {
        // spans the end of the first word and the start of the second
        assert_eq!(solve::<Solver>("turn on 60,3 through 70,3", 1).unwrap(), "11");
        assert_eq!(solve::<Solver>("toggle 63,0 through 64,1\ntoggle 64,0 through 64,0", 1).unwrap(), "3");
    }

    #[test]
    fn test_brightness() {
        assert_eq!(solve::<Solver>("turn on 0,0 through 0,0", 2).unwrap(), "1");
        assert_eq!(solve::<Solver>("toggle 0,0 through 999,999", 2).unwrap(), "2000000");
        assert_eq!(solve::<Solver>("turn off 0,0 through 9,9\nturn on 0,0 through 0,0", 2).unwrap(), "1");
    }

    #[test]
    fn test_invalid_instructions() {
        assert!(Solver::parse("turn on 0,0 through 1000,0").is_err());
        assert!(Solver::parse("turn on 5,5 through 4,5").is_err());
        assert!(Solver::parse("switch 0,0 through 1,1").is_err());
        let err = Solver::parse("toggle 0,0 through 1,1\ntoggle 0,0 thru 1,1").unwrap_err();
        assert!(err.to_string().contains("(line 2)"));
    }
}
