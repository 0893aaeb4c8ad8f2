/// Returns `n` evenly spaced points over `[start, end]`, endpoints included.
///
/// Point `i` is `start + i * step` with `step = (end - start) / (n - 1)`, and
/// the last point is set to exactly `end` so rounding never pushes the grid
/// past its endpoint.
///
/// A grid of `n == 0` points is empty and a grid of one point is `[start]`.
///
/// ```
/// let t = odestep_core::linspace(0.0, 1.0, 5);
/// assert_eq!(t, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (end - start) / (n - 1) as f64;

            let mut grid: Vec<f64> = (0..n)
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    let i = i as f64;
                    start + i * step
                })
                .collect();
            grid[n - 1] = end;
            grid
        }
    }
}
