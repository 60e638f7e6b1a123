use std::collections::HashMap;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 7, tags = ["2015", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    Wire(&'a str),
    Value(u16),
}

impl<'a> Operand<'a> {
    fn parse(token: &'a str) -> anyhow::Result<Self> {
        if token.bytes().all(|b| b.is_ascii_digit()) && !token.is_empty() {
            token
                .parse()
                .map(Operand::Value)
                .map_err(|e| anyhow!("invalid signal {:?}: {}", token, e))
        } else if is_wire_name(token) {
            Ok(Operand::Wire(token))
        } else {
            Err(anyhow!("invalid operand {:?}", token))
        }
    }

    fn resolve(&self, signals: &HashMap<&'a str, u16>) -> Option<u16> {
        match self {
            Operand::Wire(name) => signals.get(name).copied(),
            Operand::Value(value) => Some(*value),
        }
    }
}

fn is_wire_name(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate<'a> {
    Assign(Operand<'a>),
    And(Operand<'a>, Operand<'a>),
    Or(Operand<'a>, Operand<'a>),
    Not(Operand<'a>),
    LShift(Operand<'a>, u32),
    RShift(Operand<'a>, u32),
}

impl<'a> Gate<'a> {
    /// Output signal, or `None` while an input is still unknown
    fn eval(&self, signals: &HashMap<&'a str, u16>) -> Option<u16> {
        Some(match self {
            Gate::Assign(src) => src.resolve(signals)?,
            Gate::And(l, r) => l.resolve(signals)? & r.resolve(signals)?,
            Gate::Or(l, r) => l.resolve(signals)? | r.resolve(signals)?,
            Gate::Not(src) => !src.resolve(signals)?,
            Gate::LShift(src, n) => src.resolve(signals)?.checked_shl(*n).unwrap_or(0),
            Gate::RShift(src, n) => src.resolve(signals)?.checked_shr(*n).unwrap_or(0),
        })
    }
}

/// Gates keyed by the wire they drive
pub type Circuit<'a> = HashMap<&'a str, Gate<'a>>;

fn parse_gate(expr: &str) -> anyhow::Result<Gate<'_>> {
    let tokens: Vec<&str> = expr.split_whitespace().collect();
    let shift = |token: &str| -> anyhow::Result<u32> {
        token.parse().map_err(|e| anyhow!("invalid shift amount {:?}: {}", token, e))
    };
    Ok(match *tokens.as_slice() {
        [src] => Gate::Assign(Operand::parse(src)?),
        ["NOT", src] => Gate::Not(Operand::parse(src)?),
        [l, "AND", r] => Gate::And(Operand::parse(l)?, Operand::parse(r)?),
        [l, "OR", r] => Gate::Or(Operand::parse(l)?, Operand::parse(r)?),
        [src, "LSHIFT", n] => Gate::LShift(Operand::parse(src)?, shift(n)?),
        [src, "RSHIFT", n] => Gate::RShift(Operand::parse(src)?, shift(n)?),
        _ => bail!("unrecognized gate {:?}", expr),
    })
}

/// Drive `overrides` directly, then fire gates until every wire has a signal.
///
/// An override replaces the wire's own driver.
pub fn evaluate<'a>(
    circuit: &Circuit<'a>,
    overrides: &[(&'a str, u16)],
) -> Result<HashMap<&'a str, u16>, SolveError> {
    let mut signals: HashMap<&'a str, u16> = overrides.iter().copied().collect();
    let mut pending: Vec<(&'a str, &Gate<'a>)> = circuit
        .iter()
        .filter(|(wire, _)| !signals.contains_key(*wire))
        .map(|(wire, gate)| (*wire, gate))
        .collect();

    while !pending.is_empty() {
        let before = pending.len();
        pending.retain(|(wire, gate)| match gate.eval(&signals) {
            Some(value) => {
                signals.insert(*wire, value);
                false
            }
            None => true,
        });

        if pending.len() == before {
            let mut stuck: Vec<&str> = pending.iter().map(|(wire, _)| *wire).collect();
            stuck.sort_unstable();
            return Err(SolveError::SolveFailed(
                format!("unresolved wires: {}", stuck.join(", ")).into(),
            ));
        }
    }
    Ok(signals)
}

pub struct SharedData<'a> {
    circuit: Circuit<'a>,
    signal_a: Option<u16>,
}

fn wire_a(signals: &HashMap<&str, u16>) -> Result<u16, SolveError> {
    signals
        .get("a")
        .copied()
        .ok_or_else(|| SolveError::SolveFailed("circuit has no wire a".into()))
}

fn signal_a(shared: &mut SharedData<'_>) -> Result<u16, SolveError> {
    if let Some(value) = shared.signal_a {
        return Ok(value);
    }
    let value = wire_a(&evaluate(&shared.circuit, &[])?)?;
    shared.signal_a = Some(value);
    Ok(value)
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut circuit = Circuit::new();
        for (idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let at_line = |e: anyhow::Error| ParseError::at_line(idx + 1, e);

            let (expr, wire) = line
                .split_once(" -> ")
                .ok_or_else(|| at_line(anyhow!("missing \"->\"")))?;
            let wire = wire.trim();
            if !is_wire_name(wire) {
                return Err(at_line(anyhow!("invalid wire name {:?}", wire)));
            }
            let gate = parse_gate(expr).map_err(at_line)?;
            if circuit.insert(wire, gate).is_some() {
                return Err(at_line(anyhow!("wire {} has more than one driver", wire)));
            }
        }
        Ok(SharedData {
            circuit,
            signal_a: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        signal_a(shared).map(|a| a.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let a = signal_a(shared)?;
        let signals = evaluate(&shared.circuit, &[("b", a)])?;
        wire_a(&signals).map(|a| a.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    const EXAMPLE: &str = "123 -> x
456 -> y
x AND y -> d
x OR y -> e
x LSHIFT 2 -> f
y RSHIFT 2 -> g
NOT x -> h
NOT y -> i
";

    #[test]
    fn test_example_circuit() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        let signals = evaluate(&shared.circuit, &[]).unwrap();
        for (wire, value) in [
            ("d", 72),
            ("e", 507),
            ("f", 492),
            ("g", 114),
            ("h", 65412),
            ("i", 65079),
            ("x", 123),
            ("y", 456),
        ] {
            assert_eq!(signals[wire], value, "wire {}", wire);
        }
    }

    #[test]
    fn test_out_of_order_definitions() {
        let input = "b AND c -> a\n1 OR b -> c\nNOT d -> b\n65534 -> d\n";
        assert_eq!(solve::<Solver>(input, 1).unwrap(), "1");
    }

    #[test]
    fn test_override_b() {
        // a follows b, so after overriding b with a the answer is unchanged
        let input = "b -> a\n7 -> b\n";
        assert_eq!(solve::<Solver>(input, 2).unwrap(), "7");

        let input = "b LSHIFT 1 -> a\n3 -> b\n";
        assert_eq!(solve::<Solver>(input, 1).unwrap(), "6");
        assert_eq!(solve::<Solver>(input, 2).unwrap(), "12");
    }

    #[test]
    fn test_cycle_reports_unresolved_wires() {
        let err = solve::<Solver>("b -> a\na AND c -> b\n1 -> c\n", 1).unwrap_err();
        assert!(err.to_string().contains("unresolved wires: a, b"), "{}", err);
    }

    #[test]
    fn test_invalid_circuits() {
        assert!(Solver::parse("1 -> a\n2 -> a\n").is_err());
        assert!(Solver::parse("x XOR y -> z").is_err());
        assert!(Solver::parse("x AND y").is_err());
        assert!(Solver::parse("70000 -> a").is_err());
    }
}
