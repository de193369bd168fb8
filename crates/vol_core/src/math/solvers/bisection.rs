//! Bisection root-finding solver.

use super::SolverConfig;
use num_traits::Float;

/// Outcome of a bracketing root search.
///
/// Bisection always terminates with a value: either a root that met the
/// tolerance, or the last midpoint examined when the iteration budget
/// ran out. The `converged` flag distinguishes the two so callers can
/// treat a best-effort root differently from a converged one.
///
/// # Example
///
/// ```
/// use vol_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::new(1e-10, 200));
/// let result = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0);
///
/// assert!(result.converged);
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult<T> {
    /// The root estimate (last midpoint examined).
    pub root: T,
    /// Number of function evaluations performed.
    pub iterations: usize,
    /// True when `|f(root)|` met the configured tolerance.
    pub converged: bool,
}

/// Bisection method root finder.
///
/// Repeatedly halves a bracketing interval, keeping the half that still
/// contains the root. Convergence is linear but unconditional for a
/// monotonic function whose root lies inside the interval, and each
/// iteration costs one function evaluation, so the worst case is bounded
/// by `max_iterations`.
///
/// The function is assumed to be increasing across the bracket: a
/// positive midpoint value sends the search into the lower half. For a
/// decreasing function, negate it. No bracket validation is performed;
/// if the root lies outside the interval the search drifts to the
/// nearer endpoint and comes back with `converged = false`.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use vol_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::with_defaults();
///
/// // Solve e^x - 2 = 0 in [0, 1] (find ln 2)
/// let result = solver.find_root(|x: f64| x.exp() - 2.0, 0.0, 1.0);
///
/// assert!(result.converged);
/// assert!((result.root - 2.0_f64.ln()).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Solver configuration with tolerance and max iterations
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` in the interval `[lower, upper]`.
    ///
    /// Each iteration evaluates `f` at the interval midpoint. When
    /// `|f(mid)| < tolerance` the midpoint is returned immediately with
    /// `converged = true`; exact convergence beats exhausting the
    /// iteration budget. Otherwise the bracket narrows: a positive value
    /// moves the upper bound to the midpoint, a non-positive value moves
    /// the lower bound. When the budget runs out the last midpoint is
    /// returned with `converged = false`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find the root of (increasing across the interval)
    /// * `lower` - Lower interval endpoint
    /// * `upper` - Upper interval endpoint
    ///
    /// # Example
    ///
    /// ```
    /// use vol_core::math::solvers::{BisectionSolver, SolverConfig};
    ///
    /// let solver = BisectionSolver::new(SolverConfig::new(1e-10, 100));
    ///
    /// let result = solver.find_root(|x: f64| x - 1.0, 0.0, 2.0);
    /// assert!(result.converged);
    /// assert_eq!(result.iterations, 1); // midpoint of [0, 2] is the root
    /// ```
    pub fn find_root<F>(&self, f: F, lower: T, upper: T) -> RootResult<T>
    where
        F: Fn(T) -> T,
    {
        let half = T::from(0.5).unwrap();

        let mut lo = lower;
        let mut hi = upper;
        let mut mid = half * (lo + hi);

        for iteration in 0..self.config.max_iterations {
            mid = half * (lo + hi);
            let value = f(mid);

            if value.abs() < self.config.tolerance {
                return RootResult {
                    root: mid,
                    iterations: iteration + 1,
                    converged: true,
                };
            }

            if value > T::zero() {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        RootResult {
            root: mid,
            iterations: self.config.max_iterations,
            converged: false,
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
