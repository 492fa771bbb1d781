use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest value a `Draw` may return.
pub const DRAW_MIN: u8 = 1;
/// Largest value a `Draw` may return.
pub const DRAW_MAX: u8 = 10;

/// Source of uniform draws from `DRAW_MIN..=DRAW_MAX`.
pub trait Draw {
    fn draw(&mut self) -> u8;
}

impl<D: Draw + ?Sized> Draw for &mut D {
    fn draw(&mut self) -> u8 {
        (**self).draw()
    }
}

/// `Draw` backed by a `rand` generator.
#[derive(Clone, Debug)]
pub struct RngDraw<R> {
    rng: R,
}

impl<R: Rng> RngDraw<R> {
    pub fn new(rng: R) -> Self {
        RngDraw { rng }
    }
}

impl RngDraw<StdRng> {
    /// Reproducible draws. Two instances with the same seed produce the same sequence.
    pub fn seeded(seed: u64) -> Self {
        RngDraw::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        RngDraw::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Draw for RngDraw<R> {
    fn draw(&mut self) -> u8 {
        self.rng.gen_range(DRAW_MIN..=DRAW_MAX)
    }
}

/// `Draw` that cycles through a scripted sequence. An empty script always draws
/// `DRAW_MIN`.
#[derive(Clone, Debug, Default)]
pub struct FixedDraws {
    draws: Vec<u8>,
    next: usize,
}

impl FixedDraws {
    pub fn new<I: IntoIterator<Item = u8>>(draws: I) -> Self {
        FixedDraws {
            draws: draws.into_iter().collect(),
            next: 0,
        }
    }

    /// Draws that flag every token under any threshold below `DRAW_MAX`.
    pub fn always() -> Self {
        FixedDraws::new(vec![DRAW_MAX])
    }

    /// Draws that never flag a token.
    pub fn never() -> Self {
        FixedDraws::new(vec![DRAW_MIN])
    }
}

impl Draw for FixedDraws {
    fn draw(&mut self) -> u8 {
        if self.draws.is_empty() {
            return DRAW_MIN;
        }

        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_draws_cycle() {
        let mut draws = FixedDraws::new(vec![3, 9]);
        let values: Vec<_> = (0..5).map(|_| draws.draw()).collect();
        assert_eq!(vec![3, 9, 3, 9, 3], values);
        assert_eq!(DRAW_MIN, FixedDraws::default().draw());
    }

    #[test]
    fn seeded_draws_are_reproducible_and_in_range() {
        let mut a = RngDraw::seeded(42);
        let mut b = RngDraw::seeded(42);
        for _ in 0..1000 {
            let value = a.draw();
            assert_eq!(value, b.draw());
            assert!((DRAW_MIN..=DRAW_MAX).contains(&value));
        }
    }
}
