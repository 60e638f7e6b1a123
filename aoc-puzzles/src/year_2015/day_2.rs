use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::Scanner;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 2, tags = ["2015", "math"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub length: u64,
    pub width: u64,
    pub height: u64,
}

impl Dimensions {
    /// Sides sorted ascending
    fn sorted(&self) -> [u64; 3] {
        let mut sides = [self.length, self.width, self.height];
        sides.sort_unstable();
        sides
    }

    /// `None` when the area does not fit in a `u64`
    fn wrapping_paper(&self) -> Option<u64> {
        let Dimensions { length: l, width: w, height: h } = *self;
        let [a, b, _] = self.sorted();
        let faces = l
            .checked_mul(w)?
            .checked_add(w.checked_mul(h)?)?
            .checked_add(h.checked_mul(l)?)?;
        faces.checked_mul(2)?.checked_add(a.checked_mul(b)?)
    }

    fn ribbon(&self) -> Option<u64> {
        let [a, b, c] = self.sorted();
        let bow = a.checked_mul(b)?.checked_mul(c)?;
        a.checked_add(b)?.checked_mul(2)?.checked_add(bow)
    }
}

fn total(presents: &[Dimensions], measure: fn(&Dimensions) -> Option<u64>) -> Result<String, SolveError> {
    presents
        .iter()
        .try_fold(0u64, |sum, present| measure(present).and_then(|n| sum.checked_add(n)))
        .map(|sum| sum.to_string())
        .ok_or_else(|| SolveError::SolveFailed("total overflows u64".into()))
}

fn parse_line(line: &str) -> anyhow::Result<Dimensions> {
    let mut scanner = Scanner::new(line.trim());
    let mut side = || -> anyhow::Result<u64> {
        let token = scanner.token('x').ok_or_else(|| anyhow!("expected LxWxH"))?;
        token
            .parse()
            .map_err(|e| anyhow!("invalid side {:?}: {}", token, e))
    };
    let dimensions = Dimensions {
        length: side()?,
        width: side()?,
        height: side()?,
    };
    if !scanner.is_empty() {
        return Err(anyhow!("trailing data after LxWxH"));
    }
    Ok(dimensions)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Dimensions>;

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
        total(shared, Dimensions::wrapping_paper)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total(shared, Dimensions::ribbon)
    }
}
