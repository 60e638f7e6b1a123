use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 5, tags = ["2015", "string"])]
pub struct Solver;

const FORBIDDEN: [&[u8; 2]; 4] = [b"ab", b"cd", b"pq", b"xy"];

fn is_nice(word: &[u8]) -> bool {
    let vowels = word.iter().filter(|b| b"aeiou".contains(b)).count();
    let doubled = word.windows(2).any(|w| w[0] == w[1]);
    let forbidden = word.windows(2).any(|w| FORBIDDEN.iter().any(|f| w == *f));
    vowels >= 3 && doubled && !forbidden
}

fn is_nicer(word: &[u8]) -> bool {
    let repeated_pair = (0..word.len().saturating_sub(1))
        .any(|i| word[i + 2..].windows(2).any(|w| w == &word[i..i + 2]));
    let sandwich = word.windows(3).any(|w| w[0] == w[2]);
    repeated_pair && sandwich
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| {
                if line.bytes().all(|b| b.is_ascii_lowercase()) {
                    Ok(line)
                } else {
                    Err(ParseError::at_line(idx + 1, "expected lowercase letters only"))
                }
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|w| is_nice(w.as_bytes())).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|w| is_nicer(w.as_bytes())).count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    #[test]
    fn test_nice_rules() {
        assert!(is_nice(b"ugknbfddgicrmopn"));
        assert!(is_nice(b"aaa"));
        assert!(!is_nice(b"jchzalrnumimnmhp"));
        assert!(!is_nice(b"haegwjzuvuyypxyu"));
        assert!(!is_nice(b"dvszwmarrgswjxmb"));
    }

    #[test]
    fn test_nicer_rules() {
        assert!(is_nicer(b"qjhvhtzxzqqjkmpb"));
        assert!(is_nicer(b"xxyxx"));
        assert!(!is_nicer(b"uurcxstgmygtbstg"));
        assert!(!is_nicer(b"ieodomkazucvgmuy"));
        // overlapping pair does not count
        assert!(!is_nicer(b"aaa"));
    }

    #[test]
    fn test_counts() {
        let input = "ugknbfddgicrmopn\naaa\njchzalrnumimnmhp\nqjhvhtzxzqqjkmpb\nxxyxx\n";
        assert_eq!(solve::<Solver>(input, 1).unwrap(), "2");
        assert_eq!(solve::<Solver>(input, 2).unwrap(), "2");
    }
}
