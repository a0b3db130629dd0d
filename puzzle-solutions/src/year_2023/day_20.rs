//! Day 20: Pulse Propagation
//!
//! Simulates the flip-flop/conjunction pulse network. Part 2 records
//! the first button press at which each conjunction emits a high pulse
//! and combines them with an lcm.

use std::collections::{BTreeMap, HashMap, VecDeque};

use anyhow::anyhow;
use puzzle_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};

pub struct Day20;

inventory::submit! {
    SolverPlugin { year: 2023, day: 20, solver: &Day20, tags: &["2023", "simulation"] }
}

/// Presses to try before giving up on part 2. Real inputs cycle within
/// a few thousand presses.
const PRESS_BUDGET: u64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModuleKind {
    Broadcast,
    FlipFlop,
    Conjunction,
}

#[derive(Debug, Clone)]
pub struct Module {
    kind: ModuleKind,
    outputs: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Network {
    modules: HashMap<String, Module>,
}

impl AocParser for Day20 {
    type SharedData<'a> = Network;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let modules = input
            .trim()
            .lines()
            .enumerate()
            .map(|(i, line)| {
                parse_module(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("line {}: {e}", i + 1)))
            })
            .collect::<Result<_, _>>()?;
        Ok(Network { modules })
    }
}

fn parse_module(line: &str) -> anyhow::Result<(String, Module)> {
    let (name, outputs) = line
        .split_once(" -> ")
        .ok_or_else(|| anyhow!("expected '<module> -> <outputs>'"))?;
    let outputs = outputs.split(", ").map(str::to_string).collect();
    let (name, kind) = match name.strip_prefix(['%', '&']) {
        Some(stripped) if name.starts_with('%') => (stripped, ModuleKind::FlipFlop),
        Some(stripped) => (stripped, ModuleKind::Conjunction),
        None if name == "broadcaster" => (name, ModuleKind::Broadcast),
        None => return Err(anyhow!("unknown module {name:?}")),
    };
    Ok((name.to_string(), Module { kind, outputs }))
}

/// Mutable pulse state of the network: flip-flop latches plus each
/// conjunction's memory of its inputs' last pulses.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NetworkState {
    flipflops: BTreeMap<String, bool>,
    memories: BTreeMap<String, BTreeMap<String, bool>>,
}

impl NetworkState {
    fn initial(network: &Network) -> Self {
        let mut flipflops = BTreeMap::new();
        let mut memories: BTreeMap<String, BTreeMap<String, bool>> = BTreeMap::new();
        for (name, module) in &network.modules {
            for dest in &module.outputs {
                match network.modules.get(dest).map(|m| m.kind) {
                    Some(ModuleKind::FlipFlop) => {
                        flipflops.entry(dest.clone()).or_insert(false);
                    }
                    Some(ModuleKind::Conjunction) => {
                        memories
                            .entry(dest.clone())
                            .or_default()
                            .insert(name.clone(), false);
                    }
                    _ => {}
                }
            }
        }
        Self { flipflops, memories }
    }
}

/// One button press. Returns (low, high) pulse counts including the
/// button pulse itself; `on_conjunction_high` fires for every high
/// pulse a conjunction emits.
fn press_button(
    network: &Network,
    state: &mut NetworkState,
    mut on_conjunction_high: impl FnMut(&str),
) -> (u64, u64) {
    let mut low = 1;
    let mut high = 0;
    let mut queue = VecDeque::from([(false, "button".to_string(), "broadcaster".to_string())]);

    while let Some((pulse, src, dest)) = queue.pop_front() {
        // Sink modules (e.g. "output", "rx") absorb pulses.
        let Some(module) = network.modules.get(&dest) else {
            continue;
        };
        let outgoing = match module.kind {
            ModuleKind::Broadcast => pulse,
            ModuleKind::FlipFlop => {
                if pulse {
                    continue;
                }
                let latch = state.flipflops.entry(dest.clone()).or_insert(false);
                *latch = !*latch;
                *latch
            }
            ModuleKind::Conjunction => {
                let memory = state.memories.entry(dest.clone()).or_default();
                memory.insert(src.clone(), pulse);
                let outgoing = !memory.values().all(|&p| p);
                if outgoing {
                    on_conjunction_high(&dest);
                }
                outgoing
            }
        };
        for next in &module.outputs {
            if outgoing {
                high += 1;
            } else {
                low += 1;
            }
            queue.push_back((outgoing, dest.clone(), next.clone()));
        }
    }
    (low, high)
}

impl Solver for Day20 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => {
                let mut state = NetworkState::initial(shared);
                let (mut low, mut high) = (0u64, 0u64);
                for _ in 0..1000 {
                    let (l, h) = press_button(shared, &mut state, |_| {});
                    low += l;
                    high += h;
                }
                Ok((low * high).to_string())
            }
            2 => {
                let conjunctions: Vec<&String> = shared
                    .modules
                    .iter()
                    .filter(|(_, m)| m.kind == ModuleKind::Conjunction)
                    .map(|(name, _)| name)
                    .collect();
                if conjunctions.is_empty() {
                    return Err(SolveError::SolveFailed(
                        anyhow!("network has no conjunction modules").into(),
                    ));
                }

                let mut first_high: HashMap<String, u64> = HashMap::new();
                let mut state = NetworkState::initial(shared);
                for press in 1..=PRESS_BUDGET {
                    press_button(shared, &mut state, |name| {
                        first_high.entry(name.to_string()).or_insert(press);
                    });
                    if first_high.len() == conjunctions.len() {
                        let combined = conjunctions.iter().map(|&n| first_high[n]).fold(1, lcm);
                        return Ok(combined.to_string());
                    }
                }
                Err(SolveError::SolveFailed(
                    anyhow!("some conjunction never went high within {PRESS_BUDGET} presses")
                        .into(),
                ))
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}
