//! Decorative star field placement

use rand::Rng;

/// Number of stars scattered behind the page.
pub const STAR_COUNT: usize = 30;

/// One decorative dot, positioned in viewport percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub id: usize,
    pub left_pct: f64,
    pub top_pct: f64,
    pub opacity: f64,
}

impl Star {
    /// Inline style placing the dot.
    pub fn style(&self) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; opacity: {:.3};",
            self.left_pct, self.top_pct, self.opacity
        )
    }
}

/// Scatter `count` stars uniformly over the viewport.
///
/// Purely cosmetic: the values are never used for anything but placement.
pub fn scatter<R: Rng>(rng: &mut R, count: usize) -> Vec<Star> {
    (0..count)
        .map(|id| Star {
            id,
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            opacity: rng.gen_range(0.3..1.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scatter_count_and_ids() {
        let mut rng = StdRng::seed_from_u64(7);
        let stars = scatter(&mut rng, STAR_COUNT);
        assert_eq!(stars.len(), 30);
        assert!(stars.iter().enumerate().all(|(i, s)| s.id == i));
    }

    #[test]
    fn test_scatter_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for star in scatter(&mut rng, 500) {
            assert!((0.0..100.0).contains(&star.left_pct));
            assert!((0.0..100.0).contains(&star.top_pct));
            assert!((0.3..1.0).contains(&star.opacity));
        }
    }

    #[test]
    fn test_style_format() {
        let star = Star { id: 0, left_pct: 12.5, top_pct: 50.0, opacity: 0.3 };
        assert_eq!(star.style(), "left: 12.500%; top: 50.000%; opacity: 0.300;");
    }
}
