use tracing::{debug, trace};

use logomotion_config::{Config, OffsetMode};
use logomotion_err::ErrorCtx;
use logomotion_sourcemap::Span;

use crate::draw::Draw;
use crate::token::Tokens;
use crate::Detect;

/// Detector that flags each token independently with a fixed probability.
///
/// This has no semantic validity whatsoever. It exists to exercise the reporting path
/// with plausible-looking flat spans.
#[derive(Debug)]
pub struct StochasticDetector<'a, D> {
    draw: D,
    config: &'a Config,
}

impl<'a, D: Draw> StochasticDetector<'a, D> {
    pub fn new(draw: D, config: &'a Config) -> Self {
        StochasticDetector { draw, config }
    }
}

impl<'a, D: Draw> Detect for StochasticDetector<'a, D> {
    fn detect(&mut self, source: &str, errors: &ErrorCtx) {
        // Total length of all tokens seen so far, whitespace not counted.
        let mut concatenated = 0;
        let mut tokens = 0;
        let mut flagged = 0;

        for token in Tokens::new(source) {
            tokens += 1;

            if self.draw.draw() > self.config.flag_threshold {
                let span = match self.config.offsets {
                    OffsetMode::Concatenated => Span::new(concatenated, token.span.len),
                    OffsetMode::TextAware => token.span,
                };
                trace!(token = token.text, ?span, "flagged token");

                errors.error(&self.config.stochastic_message).span(span);
                flagged += 1;
            }

            concatenated += token.span.len;
        }

        debug!(tokens, flagged, "stochastic scan finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Use pretty_assertions for `assert_eq` diffs.
    use pretty_assertions::assert_eq;

    use crate::draw::{FixedDraws, RngDraw};
    use crate::{detect_stochastic, run};

    fn bounds(source: &str, draws: FixedDraws, config: &Config) -> Vec<(usize, usize)> {
        detect_stochastic(source, draws, config)
            .into_iter()
            .map(|span| (span.start, span.end))
            .collect()
    }

    #[test]
    fn concatenated_offsets_ignore_whitespace() {
        let config = Config::original();
        assert_eq!(
            vec![(0, 2), (2, 5), (5, 7), (7, 9)],
            bounds("fd 100\n  rt   90", FixedDraws::always(), &config)
        );
    }

    #[test]
    fn text_aware_offsets_match_source() {
        let config = Config::new();
        let source = "fd 100\n  rt   90";
        let spans = detect_stochastic(source, FixedDraws::always(), &config);

        let texts: Vec<_> = spans
            .iter()
            .map(|span| span.span().read(source).unwrap())
            .collect();
        assert_eq!(vec!["fd", "100", "rt", "90"], texts);
    }

    #[test]
    fn flags_only_draws_above_threshold() {
        let config = Config::original();
        // 6 is not strictly greater than the default threshold.
        let draws = FixedDraws::new(vec![7, 6, 1, 10]);
        assert_eq!(
            vec![(0, 2), (7, 9)],
            bounds("fd 100 rt 90", draws, &config)
        );
    }

    #[test]
    fn single_token_starts_at_zero() {
        let config = Config::original();
        assert_eq!(
            vec![(0, 7)],
            bounds("   forward  ", FixedDraws::new(vec![8]), &config)
        );
    }

    #[test]
    fn empty_source_has_no_spans() {
        let config = Config::new();
        assert!(detect_stochastic("", FixedDraws::always(), &config).is_empty());
        assert!(detect_stochastic(" \n \n", FixedDraws::always(), &config).is_empty());
    }

    #[test]
    fn spans_are_flat_and_carry_message() {
        let config = Config::new();
        for span in detect_stochastic("a b c", FixedDraws::always(), &config) {
            assert!(span.is_flat());
            assert_eq!("errorroror", span.message);
        }
    }

    #[test]
    fn seeded_runs_are_identical_and_bounded() {
        let config = Config::original();
        let source = "repeat 4 [ fd 100 rt 90 ]\nPenUp\n  home";
        let total: usize = source.split_whitespace().map(|t| t.chars().count()).sum();

        for seed in 0..32 {
            let a = run(
                &mut StochasticDetector::new(RngDraw::seeded(seed), &config),
                source,
            );
            let b = run(
                &mut StochasticDetector::new(RngDraw::seeded(seed), &config),
                source,
            );
            assert_eq!(a, b);

            for span in &a {
                assert!(span.start <= span.end);
                assert!(span.end <= total);
            }
        }
    }
}
