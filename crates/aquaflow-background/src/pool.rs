//! Entity pool sizing.

use aquaflow_core::Viewport;

/// Number of entities for a viewport: one per `density` square world units.
///
/// Empty viewports and non-positive densities give an empty pool.
pub fn pool_size(viewport: Viewport, density: f64) -> usize {
    if !(density > 0.0) {
        return 0;
    }
    let count = (viewport.area() / density).floor();
    if count.is_finite() && count > 0.0 {
        count as usize
    } else {
        0
    }
}

/// Build a fresh pool of `count` entities.
pub fn populate<T>(count: usize, make: impl FnMut() -> T) -> Vec<T> {
    std::iter::repeat_with(make).take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_scenario() {
        assert_eq!(pool_size(Viewport::new(1000.0, 800.0), 9_000.0), 88);
    }

    #[test]
    fn test_aqua_densities() {
        let view = Viewport::new(1920.0, 1080.0);
        assert_eq!(pool_size(view, 10_000.0), 207);
        assert_eq!(pool_size(view, 100_000.0), 20);
    }

    #[test]
    fn test_empty_viewport() {
        assert_eq!(pool_size(Viewport::new(0.0, 0.0), 9_000.0), 0);
        assert_eq!(pool_size(Viewport::new(1000.0, 0.0), 9_000.0), 0);
        assert_eq!(pool_size(Viewport::new(10.0, 10.0), 9_000.0), 0);
    }

    #[test]
    fn test_bad_density() {
        let view = Viewport::new(100.0, 100.0);
        assert_eq!(pool_size(view, 0.0), 0);
        assert_eq!(pool_size(view, -1.0), 0);
        assert_eq!(pool_size(view, f64::NAN), 0);
    }

    #[test]
    fn test_populate() {
        let mut n = 0;
        let pool = populate(3, || {
            n += 1;
            n
        });
        assert_eq!(pool, vec![1, 2, 3]);
    }
}
