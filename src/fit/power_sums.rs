//! Power-sum statistics over a sample grid.
//!
//! These are the building blocks of the normal equations:
//!
//! - `Σ x^k`      (matrix entries)
//! - `Σ y`        (`Σ x^0 · y`)
//! - `Σ x^k · y`  (right-hand side)
//!
//! Sums are plain left-to-right accumulations in grid order.

use crate::sample::SampleGrid;

#[derive(Debug, Clone, Copy)]
pub struct PowerSums<'a> {
    grid: &'a SampleGrid,
}

impl<'a> PowerSums<'a> {
    pub fn new(grid: &'a SampleGrid) -> Self {
        Self { grid }
    }

    /// `Σ x_i^exponent`.
    pub fn sum_x_pow(&self, exponent: u32) -> f64 {
        self.grid.xs().iter().map(|&x| pow(x, exponent)).sum()
    }

    /// `Σ y_i`.
    pub fn sum_y(&self) -> f64 {
        self.grid.ys().iter().sum()
    }

    /// `Σ x_i^exponent · y_i`.
    pub fn sum_x_pow_y(&self, exponent: u32) -> f64 {
        self.grid
            .xs()
            .iter()
            .zip(self.grid.ys())
            .map(|(&x, &y)| pow(x, exponent) * y)
            .sum()
    }
}

// `0^0 == 1`, so the exponent-0 sums count samples.
fn pow(x: f64, exponent: u32) -> f64 {
    match i32::try_from(exponent) {
        Ok(e) => x.powi(e),
        Err(_) => x.powf(exponent as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> SampleGrid {
        SampleGrid::from_points(vec![1.0, 2.0, 3.0], vec![2.0, 0.5, -1.0]).unwrap()
    }

    #[test]
    fn sums_of_powers_of_x() {
        let g = grid();
        let sums = PowerSums::new(&g);
        assert_eq!(sums.sum_x_pow(0), 3.0);
        assert_eq!(sums.sum_x_pow(1), 6.0);
        assert_eq!(sums.sum_x_pow(2), 14.0);
        assert_eq!(sums.sum_x_pow(3), 36.0);
    }

    #[test]
    fn sums_weighted_by_y() {
        let g = grid();
        let sums = PowerSums::new(&g);
        assert_eq!(sums.sum_y(), 1.5);
        assert_eq!(sums.sum_x_pow_y(0), sums.sum_y());
        // 1*2 + 2*0.5 + 3*(-1)
        assert_eq!(sums.sum_x_pow_y(1), 0.0);
        // 1*2 + 4*0.5 + 9*(-1)
        assert_eq!(sums.sum_x_pow_y(2), -5.0);
    }

    #[test]
    fn zero_to_the_zero_counts_as_one() {
        let g = SampleGrid::from_points(vec![0.0, 0.0], vec![1.0, 1.0]).unwrap();
        assert_eq!(PowerSums::new(&g).sum_x_pow(0), 2.0);
    }

    #[test]
    fn empty_grid_sums_to_zero() {
        let g = SampleGrid::from_points(Vec::new(), Vec::new()).unwrap();
        let sums = PowerSums::new(&g);
        assert_eq!(sums.sum_x_pow(2), 0.0);
        assert_eq!(sums.sum_y(), 0.0);
    }
}
