// src/runner.rs
//
// Ejecución de código simulada. No se compila ni se ejecuta nada: tras el retardo
// configurado se decide al azar si "pasan" los tests. La fuente de azar se inyecta.

use crate::model::QuestionId;
use rand::Rng;

pub const PASS_PROBABILITY: f64 = 0.7;

/// Decide el resultado de cada ejecución simulada
pub trait OutcomeSource {
    fn next_passes(&mut self) -> bool;
}

/// Fuente real: moneda cargada con `rand`
pub struct RandomOutcomes<R> {
    rng: R,
    pass_probability: f64,
}

impl<R: Rng> RandomOutcomes<R> {
    pub fn new(rng: R, pass_probability: f64) -> Self {
        Self {
            rng,
            pass_probability: pass_probability.clamp(0.0, 1.0),
        }
    }
}

impl<R: Rng> OutcomeSource for RandomOutcomes<R> {
    fn next_passes(&mut self) -> bool {
        self.rng.gen_bool(self.pass_probability)
    }
}

/// Fuente fija, útil para forzar una rama
pub struct FixedOutcome(pub bool);

impl OutcomeSource for FixedOutcome {
    fn next_passes(&mut self) -> bool {
        self.0
    }
}

/// Secuencia de resultados que se repite en bucle
pub struct ScriptedOutcomes {
    script: Vec<bool>,
    next: usize,
}

impl ScriptedOutcomes {
    pub fn new(script: Vec<bool>) -> Self {
        Self { script, next: 0 }
    }
}

impl OutcomeSource for ScriptedOutcomes {
    fn next_passes(&mut self) -> bool {
        if self.script.is_empty() {
            return true;
        }
        let value = self.script[self.next % self.script.len()];
        self.next += 1;
        value
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RunOutcome {
    Passed {
        runtime_ms: u32,
        memory_mb: f32,
    },
    Failed {
        test_case: usize,
        input: String,
        expected: String,
        got: String,
    },
}

impl RunOutcome {
    pub fn passed() -> Self {
        RunOutcome::Passed {
            runtime_ms: 124,
            memory_mb: 42.3,
        }
    }

    pub fn failed() -> Self {
        RunOutcome::Failed {
            test_case: 2,
            input: "[3,2,4], target=6".into(),
            expected: "[1,2]".into(),
            got: "[0,1]".into(),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, RunOutcome::Passed { .. })
    }

    pub fn console_lines(&self) -> Vec<ConsoleLine> {
        match self {
            RunOutcome::Passed {
                runtime_ms,
                memory_mb,
            } => vec![
                ConsoleLine::success("✓ All test cases passed!"),
                ConsoleLine::plain(format!("Runtime: {runtime_ms} ms")),
                ConsoleLine::plain(format!("Memory: {memory_mb:.1} MB")),
            ],
            RunOutcome::Failed {
                test_case,
                input,
                expected,
                got,
            } => vec![
                ConsoleLine::error(format!("✗ Test case {test_case} failed")),
                ConsoleLine::plain(format!("Input: {input}")),
                ConsoleLine::plain(format!("Expected: {expected}")),
                ConsoleLine::plain(format!("Got: {got}")),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Plain,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConsoleLine {
    pub kind: LineKind,
    pub text: String,
}

impl ConsoleLine {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Plain,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Error,
            text: text.into(),
        }
    }
}

/// Ejecución en curso
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunRequest {
    pub question: Option<QuestionId>,
    pub submission: bool,
}

pub struct CodeRunner {
    console: Vec<ConsoleLine>,
    pending: Option<RunRequest>,
    outcomes: Box<dyn OutcomeSource>,
}

impl CodeRunner {
    pub fn new(outcomes: Box<dyn OutcomeSource>) -> Self {
        Self {
            console: vec![Self::ready_line()],
            pending: None,
            outcomes,
        }
    }

    fn ready_line() -> ConsoleLine {
        ConsoleLine::plain("Ready to run your code...")
    }

    pub fn console(&self) -> &[ConsoleLine] {
        &self.console
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Arranca una ejecución; una nueva sustituye a la que estuviera pendiente
    pub fn start(&mut self, request: RunRequest) {
        self.console = vec![ConsoleLine::plain("Running tests...")];
        self.pending = Some(request);
    }

    /// Resuelve la ejecución pendiente (la llama el temporizador)
    pub fn finish(&mut self) -> Option<(RunRequest, RunOutcome)> {
        let request = self.pending.take()?;
        let outcome = if self.outcomes.next_passes() {
            RunOutcome::passed()
        } else {
            RunOutcome::failed()
        };
        self.console = outcome.console_lines();
        Some((request, outcome))
    }

    pub fn clear(&mut self) {
        self.console = vec![Self::ready_line()];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn request() -> RunRequest {
        RunRequest {
            question: Some(1),
            submission: false,
        }
    }

    #[test]
    fn passing_run_reports_all_tests_passed() {
        let mut runner = CodeRunner::new(Box::new(FixedOutcome(true)));
        runner.start(request());
        assert!(runner.is_running());
        assert_eq!(runner.console()[0].text, "Running tests...");

        let (req, outcome) = runner.finish().expect("pending run");
        assert_eq!(req, request());
        assert!(outcome.is_pass());
        assert_eq!(runner.console()[0].kind, LineKind::Success);
        assert_eq!(runner.console()[1].text, "Runtime: 124 ms");
        assert_eq!(runner.console()[2].text, "Memory: 42.3 MB");
        assert!(!runner.is_running());
    }

    #[test]
    fn failing_run_reports_the_fixed_case() {
        let mut runner = CodeRunner::new(Box::new(FixedOutcome(false)));
        runner.start(request());
        let (_, outcome) = runner.finish().unwrap();
        assert_eq!(outcome, RunOutcome::failed());
        let texts: Vec<_> = runner.console().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            [
                "✗ Test case 2 failed",
                "Input: [3,2,4], target=6",
                "Expected: [1,2]",
                "Got: [0,1]"
            ]
        );
    }

    #[test]
    fn finish_without_a_run_does_nothing_and_clear_resets() {
        let mut runner = CodeRunner::new(Box::new(ScriptedOutcomes::new(vec![false, true])));
        assert!(runner.finish().is_none());
        runner.start(request());
        assert!(!runner.finish().unwrap().1.is_pass());
        runner.start(request());
        assert!(runner.finish().unwrap().1.is_pass());
        runner.clear();
        assert_eq!(runner.console(), [ConsoleLine::plain("Ready to run your code...")]);
    }

    #[test]
    fn random_source_respects_extreme_probabilities() {
        let mut always = RandomOutcomes::new(StdRng::seed_from_u64(7), 1.0);
        let mut never = RandomOutcomes::new(StdRng::seed_from_u64(7), 0.0);
        for _ in 0..50 {
            assert!(always.next_passes());
            assert!(!never.next_passes());
        }
        // probabilidad fuera de rango se recorta en vez de hacer panic
        let mut clamped = RandomOutcomes::new(StdRng::seed_from_u64(7), 3.0);
        assert!(clamped.next_passes());
    }
}
