use rand::seq::SliceRandom;

/// A producer of decoded identifier tokens.
///
/// The engine never touches pixels or video streams; whatever does the
/// physical decoding (camera pipeline, hardware reader, simulator, test
/// fixture) sits behind this trait and hands over plain token strings.
pub trait TokenSource {
    /// Produces the next decoded token, or `None` if nothing can be read.
    fn produce_token(&mut self) -> Option<String>;
}

/// Simulated scanner used in place of a real decoding pipeline.
///
/// Draws a uniformly random token from a fixed candidate list per call,
/// mimicking an operator holding arbitrary ID cards up to the camera.
pub struct SimulatedScanner {
    candidates: Vec<String>,
}

impl SimulatedScanner {
    pub fn new(candidates: Vec<String>) -> Self {
        Self { candidates }
    }
}

impl TokenSource for SimulatedScanner {
    fn produce_token(&mut self) -> Option<String> {
        self.candidates.choose(&mut rand::thread_rng()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Deterministic fixture standing in for a real decoder.
    struct FixedScanner {
        tokens: VecDeque<String>,
    }

    impl TokenSource for FixedScanner {
        fn produce_token(&mut self) -> Option<String> {
            self.tokens.pop_front()
        }
    }

    fn drain(source: &mut dyn TokenSource) -> Vec<String> {
        std::iter::from_fn(|| source.produce_token()).collect()
    }

    #[test]
    fn test_simulated_scanner_draws_from_candidates() {
        let candidates = vec!["STU001".to_string(), "STU002".to_string()];
        let mut scanner = SimulatedScanner::new(candidates.clone());

        for _ in 0..20 {
            let token = scanner.produce_token().unwrap();
            assert!(candidates.contains(&token));
        }
    }

    #[test]
    fn test_simulated_scanner_empty_candidates() {
        let mut scanner = SimulatedScanner::new(Vec::new());
        assert!(scanner.produce_token().is_none());
    }

    #[test]
    fn test_fixture_scanner_behind_trait() {
        let mut scanner = FixedScanner {
            tokens: VecDeque::from(["STU001".to_string(), "STU002".to_string()]),
        };

        assert_eq!(drain(&mut scanner), ["STU001", "STU002"]);
        assert!(scanner.produce_token().is_none());
    }
}
