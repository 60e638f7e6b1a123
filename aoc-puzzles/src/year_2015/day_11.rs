use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 11, tags = ["2015", "string"], input = "cqjxjnds")]
pub struct Solver;

const FORBIDDEN: [u8; 3] = [b'i', b'o', b'l'];

/// Shortest length that can hold a straight and two distinct pairs
const MIN_LENGTH: usize = 5;

pub struct SharedData {
    password: Vec<u8>,
    first: Option<Vec<u8>>,
}

/// Add one with `z` wrapping to `a`; returns false when every letter wrapped
fn increment(password: &mut [u8]) -> bool {
    for letter in password.iter_mut().rev() {
        if *letter == b'z' {
            *letter = b'a';
        } else {
            *letter += 1;
            return true;
        }
    }
    false
}

/// Bump the first forbidden letter and reset everything after it
fn skip_forbidden(password: &mut [u8]) {
    if let Some(pos) = password.iter().position(|b| FORBIDDEN.contains(b)) {
        password[pos] += 1;
        password[pos + 1..].fill(b'a');
    }
}

fn is_valid(password: &[u8]) -> bool {
    let straight = password
        .windows(3)
        .any(|w| w[1] == w[0] + 1 && w[2] == w[1] + 1);
    if !straight || password.iter().any(|b| FORBIDDEN.contains(b)) {
        return false;
    }

    let mut first_pair = None;
    let mut i = 0;
    while i + 1 < password.len() {
        if password[i] == password[i + 1] {
            match first_pair {
                None => first_pair = Some(password[i]),
                Some(letter) if letter != password[i] => return true,
                Some(_) => {}
            }
            i += 2;
        } else {
            i += 1;
        }
    }
    false
}

fn next_password(current: &[u8]) -> Result<Vec<u8>, SolveError> {
    if current.len() < MIN_LENGTH {
        return Err(SolveError::SolveFailed(
            format!("no valid password has fewer than {} letters", MIN_LENGTH).into(),
        ));
    }
    let mut password = current.to_vec();
    loop {
        if !increment(&mut password) {
            return Err(SolveError::SolveFailed("ran out of passwords".into()));
        }
        skip_forbidden(&mut password);
        if is_valid(&password) {
            return Ok(password);
        }
    }
}

fn first_password(shared: &mut SharedData) -> Result<&[u8], SolveError> {
    let first = match shared.first.take() {
        Some(first) => first,
        None => next_password(&shared.password)?,
    };
    Ok(shared.first.insert(first))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let password = input.trim();
        if password.is_empty() {
            return Err(ParseError::MissingData("current password".to_string()));
        }
        if !password.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(ParseError::InvalidFormat(format!(
                "password must be lowercase letters, got {:?}",
                password
            )));
        }
        Ok(SharedData {
            password: password.as_bytes().to_vec(),
            first: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        first_password(shared).map(|p| String::from_utf8_lossy(p).into_owned())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let second = next_password(first_password(shared)?)?;
        Ok(String::from_utf8_lossy(&second).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    #[test]
    fn test_validity_rules() {
        assert!(!is_valid(b"hijklmmn"));
        assert!(!is_valid(b"abbceffg"));
        assert!(!is_valid(b"abbcegjk"));
        assert!(is_valid(b"abcdffaa"));
        // same letter twice is one pair
        assert!(!is_valid(b"abcaaaxy"));
    }

    #[test]
    fn test_next_password() {
        assert_eq!(solve::<Solver>("abcdefgh", 1).unwrap(), "abcdffaa");
        assert_eq!(solve::<Solver>("ghijklmn", 1).unwrap(), "ghjaabcc");
    }

    #[test]
    fn test_embedded_input() {
        assert_eq!(solve::<Solver>("cqjxjnds", 1).unwrap(), "cqjxxyzz");
        assert_eq!(solve::<Solver>("cqjxjnds", 2).unwrap(), "cqkaabcc");
    }

    #[test]
    fn test_increment_carries() {
        let mut password = *b"azz";
        assert!(increment(&mut password));
        assert_eq!(&password, b"baa");
        let mut password = *b"zz";
        assert!(!increment(&mut password));
    }

    #[test]
    fn test_invalid_passwords() {
        assert!(Solver::parse("Abc").is_err());
        assert!(matches!(solve::<Solver>("abcd", 1), Err(SolveError::SolveFailed(_))));
    }
}
