use tagdfa_compiler::PatternBuilder;
use tagdfa_core::Colors;

use super::{Handlers, NoopTracer, PrintTracer, StateMachine, Tracer, Verbosity};

fn machine(source: &str) -> StateMachine {
    StateMachine::new(PatternBuilder::new(source).build().unwrap())
}

fn trace(verbosity: Verbosity, input: &[u32]) -> String {
    let machine = machine("a = 0; b = 1; main = a b;");
    let mut tracer = PrintTracer::new(verbosity, Colors::OFF);
    let count = machine.matches_with(input, &mut tracer).count();
    assert!(count <= input.len());
    tracer.lines().join("\n")
}

#[test]
fn default_verbosity() {
    let out = trace(Verbosity::Default, &[0, 0, 1, 1, 0, 1, 0]);

    insta::assert_snapshot!(out, @r"
    miss 0
    match 1..=2
    miss 3
    match 4..=5
    miss 6
    ");
}

#[test]
fn verbose() {
    let out = trace(Verbosity::Verbose, &[1, 0, 1]);

    insta::assert_snapshot!(out, @r"
    @0
      0: 1 S1→✗
    miss 0
    @1
      ✓ S3 at 2
    match 1..=2
    ");
}

#[test]
fn very_verbose() {
    let out = trace(Verbosity::VeryVerbose, &[0, 1, 1]);

    insta::assert_snapshot!(out, @r"
    @0
      0: 0 S1→S2
      1: 1 S2→S3
      ✓ S3 at 1
      2: 1 S3→✗
    match 0..=1
    @2
      2: 1 S1→✗
    miss 2
    ");
}

#[test]
fn tags_on_match_line() {
    let machine = machine("a = 0; b = 1; main = x:(b a) | y:(a b);");
    let mut tracer = PrintTracer::new(Verbosity::Default, Colors::OFF);
    machine.apply_with(&[1, 0], &mut Handlers::new(), &mut tracer);

    insta::assert_snapshot!(tracer.lines().join("\n"), @"match 0..=1 [x]");
}

#[test]
fn colored() {
    let machine = machine("a = 0; main = a;");
    let mut tracer = PrintTracer::new(Verbosity::VeryVerbose, Colors::ON);
    machine.matches_with(&[0], &mut tracer).for_each(drop);

    let out = tracer.into_lines().join("\n");
    assert!(out.contains("\x1b[34mS1\x1b[0m→\x1b[34mS2\x1b[0m"));
    assert!(out.contains("\x1b[32mmatch\x1b[0m 0..=0"));
}

#[test]
fn tracer_is_returned_by_value() {
    let machine = machine("a = 0; main = a;");
    let mut matches = machine.matches_with(&[1, 0], PrintTracer::default());
    assert_eq!(matches.next().map(|m| m.start), Some(1));

    let tracer = matches.into_tracer();
    insta::assert_snapshot!(tracer.lines().join("\n"), @r"
    miss 0
    match 1..=1
    ");
}

/// Counts events without formatting them.
#[derive(Default)]
struct Counter {
    attempts: usize,
    steps: usize,
    dead: usize,
    matches: usize,
}

impl Tracer for Counter {
    fn trace_attempt(&mut self, _start: usize) {
        self.attempts += 1;
    }

    fn trace_step(&mut self, _pos: usize, _symbol: u32, _from: u32, _to: u32) {
        self.steps += 1;
    }

    fn trace_dead(&mut self, _pos: usize, _symbol: u32, _from: u32) {
        self.dead += 1;
    }

    fn trace_accept(&mut self, _pos: usize, _state: u32) {}

    fn trace_match(&mut self, _start: usize, _end: usize, _tags: &[String]) {
        self.matches += 1;
    }

    fn trace_miss(&mut self, _start: usize) {}
}

#[test]
fn custom_tracer() {
    let machine = machine("a = 0; b = 1; main = a b;");
    let input = [0, 0, 1, 1, 0, 1, 0];
    let mut counter = Counter::default();
    let found = machine.matches_with(&input, &mut counter).count();

    assert_eq!(found, 2);
    assert_eq!(counter.matches, 2);
    assert_eq!(counter.attempts, 5);
    // 0 | 0 1 | (dead) | 0 1 | 0
    assert_eq!(counter.steps, 6);
    assert_eq!(counter.dead, 4);
}

#[test]
fn noop_tracer_matches_untraced() {
    let machine = machine("a = 0; b = 1; main = a b;");
    let input = [0, 1, 0, 1];

    let traced: Vec<_> = machine.matches_with(&input, NoopTracer).collect();
    let plain: Vec<_> = machine.matches(&input).collect();
    assert_eq!(traced, plain);
}
