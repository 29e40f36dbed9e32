//! One dimensional root finding by bisection.
//!
//! This crate offers the bisection algorithm for functions from ℝ to
//! ℝ.  It starts with an interval \[a,b\] such that the function has
//! opposite signs at a and b (thus containing a root of the function
//! if it is continuous) and halves it until the value of the function
//! at the midpoint, or the width of the interval, falls below a
//! tolerance.  When neither happens within the iteration budget, the
//! computation reports that no root was found (`Ok(None)`), which is
//! not an error.
//!
//! # Example
//!
//! The function [`bisect`] specifies the function `f` and the
//! interval \[`a`, `b`\] on which `f` changes sign.  It returns a
//! structure [`Bisect`] which provides methods to specify the
//! parameters ([`tol`][Bisect::tol], [`maxiter`][Bisect::maxiter]) and
//! to compute a root ([`root`][Bisect::root] and
//! [`report`][Bisect::report]).
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use bisect1d::bisect;
//! let r = bisect(|x| x*x - 2., 1., 2.).root()?;
//! assert!((r.unwrap() - 2f64.sqrt()).abs() < 1e-6);
//! # Ok(()) }
//! ```
//!
//! The same computation is available as a single call with all
//! parameters spelled out, see [`find_root`].
//!
//! # Callable check
//!
//! The first argument must be a function.  This is enforced by the
//! type system, so passing anything else does not compile:
//!
//! ```compile_fail
//! let _ = bisect1d::find_root(3f64, 0., 1., 1e-7, 100);
//! ```
//!
//! # Use with your own types
//!
//! This library can readily be used with types `f64` and `f32`.  To
//! use it with another type, implement the trait [`Bisectable`] (and
//! [`FloatOrError`] if the function should return it directly).

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "nightly", feature(never_type))]

use core::{
    fmt::{self, Debug, Display, Formatter},
    ops::{Add, Sub, Mul, Div},
    marker::PhantomData,
    result::Result,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

#[cfg(feature = "nightly")]
/// Type indicating that no error is raised by the function.
pub type NoError = !;
#[cfg(not(feature = "nightly"))]
#[derive(Debug)]
/// Type indicating that no error is raised by the function.
pub enum NoError {}

/// Errors that may be returned by the root finding methods.
#[derive(Debug)]
pub enum Error<T, E = NoError> {
    /// Report that `f(a) * f(b) >= 0`, i.e., the function does not
    /// change sign strictly on the original interval \[a, b\].  This
    /// includes the case where `a` or `b` is an exact root.
    PreconditionViolation { a: T, fa: T, b: T, fb: T },
    /// Error returned by the function evaluated at `x`.
    Fun { x: T, err: E },
}
impl<T: Display, E: Debug> Display for Error<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::PreconditionViolation { .. } => {
                write!(f, "the function must have opposite signs at the \
                           endpoints")
            }
            Error::Fun { x, err } => {
                write!(f, "evaluating the function at {} yields the error \
                          {:?}", x, err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl<T: Debug + Display, E: Debug> std::error::Error for Error<T, E> {}

////////////////////////////////////////////////////////////////////////
//
// Error returning functions

/// A float type or a Result type for floats.  This is intended for
/// copy types.
pub trait FloatOrError<T> {
    type Error;
    fn to_result(self) -> Result<T, Self::Error>;
}

macro_rules! impl_float_or_error { ($t: ty) => {
    impl FloatOrError<$t> for $t {
        type Error = NoError;

        #[inline]
        fn to_result(self) -> Result<$t, NoError> { Ok(self) }
    }
    impl<E> FloatOrError<$t> for Result<$t, E> {
        type Error = E;

        #[inline]
        fn to_result(self) -> Result<$t, E> { self }
    }
}}

impl_float_or_error!(f64);
impl_float_or_error!(f32);

#[inline]
fn eval_float_result<T, F, R>(mut f: F, x: T) -> Result<T, Error<T, R::Error>>
where
    T: Copy,
    F: FnMut(T) -> R,
    R: FloatOrError<T>,
{
    f(x).to_result()
        .map_err(|err| Error::Fun{ x, err })
}

////////////////////////////////////////////////////////////////////////
//
// Bisectable types

/// Default maximum number of iterations.
pub const DEFAULT_MAXITER: usize = 100;

/// Trait indicating that the type is suitable for the bisection algorithm.
pub trait Bisectable:
    Copy + PartialOrd + Debug + Display
    + Add<Output = Self> + Sub<Output = Self>
    + Mul<Output = Self> + Div<Output = Self>
{
    /// The value `0`.
    const ZERO: Self;

    /// Tolerance used when none is given with [`Bisect::tol`].
    const DEFAULT_TOL: Self;

    /// Absolute value.  A NaN must be mapped to a NaN.
    fn abs(self) -> Self;

    /// Midpoint `(a + b) / 2` of the interval \[`a`, `b`\].  No
    /// rescaling is done when `a + b` overflows: the midpoint is then
    /// infinite and the bisection runs out of iterations.
    fn midpoint(a: Self, b: Self) -> Self;
}

macro_rules! impl_bisectable_fXX {
    ($t: ty, $tol: expr) => {
        impl Bisectable for $t {
            const ZERO: $t = 0.;
            const DEFAULT_TOL: $t = $tol;
            #[inline]
            fn abs(self) -> Self { if self < 0. { - self } else { self } }
            #[inline]
            fn midpoint(a: Self, b: Self) -> Self { (a + b) / 2. }
        }
    }
}

// 1e-7 is below the spacing of `f32` numbers around 1.
impl_bisectable_fXX!(f64, 1e-7);
impl_bisectable_fXX!(f32, 1e-5);

////////////////////////////////////////////////////////////////////////
//
// Reports

/// Stopping criterion that ended the bisection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// |f(mid)| < tol.
    Residual,
    /// |right - left| < tol (the residual criterion did not hold).
    Width,
    /// The maximum number of iterations was reached.
    MaxIter,
}

/// Outcome of a bisection run, see [`Bisect::report`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report<T> {
    /// Approximate root, or `None` if the iteration budget was
    /// exhausted.
    pub root: Option<T>,
    /// Interval \[left, right\] whose midpoint is `root`, or the last
    /// interval if no root was found.  It keeps the orientation of
    /// the original interval \[a, b\].
    pub bracket: (T, T),
    /// Number of midpoints at which the function was evaluated.
    pub iterations: usize,
    /// Total number of function evaluations, endpoints included.
    pub evaluations: usize,
    /// Why the computation stopped.
    pub termination: Termination,
}

////////////////////////////////////////////////////////////////////////
//
// Bisection

/// Find a root of the function `f` on the interval \[`a`, `b`\]
/// assuming `f(a)` and `f(b)` have opposite signs and `f` is
/// continuous using the bisection algorithm.
///
/// Trying to compute the root when `f(a) * f(b) >= 0` (in particular
/// when `a` or `b` is an exact root) returns the error
/// [`Error::PreconditionViolation`].  The order of `a` and `b` does
/// not matter.
///
/// The default tolerance is [`Bisectable::DEFAULT_TOL`] (`1e-7` for
/// [`f64`]) and the default maximum number of iterations is
/// [`DEFAULT_MAXITER`].  Nothing is computed until the
/// [`root`][Bisect::root] or [`report`][Bisect::report] method is used
/// on the result.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use bisect1d::bisect;
/// let r = bisect(|x| x*x*x - 4., 1., 3.).tol(1e-12).root()?;
/// assert!((r.unwrap() - 4f64.cbrt()).abs() < 1e-12);
/// # Ok(()) }
/// ```
///
/// The function may also return an error in which case the bisection
/// stops and returns the error [`Error::Fun`].
///
/// ```
/// use bisect1d::{bisect, Error};
/// let f = |x: f64| if x > 0.6 { Err("out of domain") } else { Ok(x - 0.3) };
/// assert!(matches!(bisect(f, 0., 0.5).root(), Ok(Some(_))));
/// assert!(matches!(bisect(f, 0., 1.).root(), Err(Error::Fun { .. })));
/// ```
pub fn bisect<T, F, R>(f: F, a: T, b: T) -> Bisect<T, F, R::Error>
where
    T: Bisectable,
    F: FnMut(T) -> R,
    R: FloatOrError<T>
{
    Bisect {
        f,  a,  b,
        error: PhantomData,
        tol: T::DEFAULT_TOL,
        maxiter: DEFAULT_MAXITER,
    }
}

/// Bisection algorithm, see [`bisect`].
pub struct Bisect<T, F, E = NoError> {
    f: F,
    a: T,  // `a` and `b` are the bounds of the interval.
    b: T,
    error: PhantomData<E>, // Error that `f` might return
    tol: T,
    maxiter: usize,
}

impl<T, F, E> Bisect<T, F, E>
where T: Bisectable {
    /// Set the tolerance on both |f(mid)| and the interval width.
    ///
    /// A tolerance ≤ 0 disables both criteria so the computation
    /// always uses the full iteration budget.
    pub fn tol(mut self, tol: T) -> Self {
        self.tol = tol;
        self
    }

    /// Set the maximum number of iterations.  With `n = 0`, no
    /// midpoint is evaluated and no root is found.
    pub fn maxiter(mut self, n: usize) -> Self {
        self.maxiter = n;
        self
    }
}

impl<T, F, R> Bisect<T, F, R::Error>
where
    T: Bisectable,
    F: FnMut(T) -> R,
    R: FloatOrError<T>,
{
    /// Return `Ok(Some(r))` where `r` is an approximate root of the
    /// function, `Ok(None)` if the maximum number of iterations was
    /// reached before a stopping criterion held, or `Err` if the
    /// interval is not valid or the function returned an error.
    pub fn root(&mut self) -> Result<Option<T>, Error<T, R::Error>> {
        Ok(self.report()?.root)
    }

    /// Same as [`root`][Bisect::root] but also return the final
    /// interval, the number of evaluations and the reason for
    /// stopping.
    ///
    /// ```
    /// use bisect1d::{bisect, Termination};
    /// let r = bisect(|x| x - 0.5, 0., 1.).report().unwrap();
    /// assert_eq!(r.root, Some(0.5));
    /// assert_eq!(r.iterations, 1);
    /// assert_eq!(r.evaluations, 3);
    /// assert_eq!(r.termination, Termination::Residual);
    /// ```
    pub fn report(&mut self) -> Result<Report<T>, Error<T, R::Error>> {
        let a = self.a;
        let b = self.b;
        let fa = eval_float_result(&mut self.f, a)?;
        let fb = eval_float_result(&mut self.f, b)?;
        // A NaN product compares false and is let through.
        if fa * fb >= T::ZERO {
            return Err(Error::PreconditionViolation { a, fa, b, fb })
        }
        // The sign of `f(left)` is always the one of `fa`.
        let mut left = a;
        let mut right = b;
        for iter in 0 .. self.maxiter {
            let mid = T::midpoint(left, right);
            let fmid = eval_float_result(&mut self.f, mid)?;
            let termination =
                if fmid.abs() < self.tol { Termination::Residual }
                else if (right - left).abs() < self.tol { Termination::Width }
                else {
                    if fa * fmid < T::ZERO { right = mid } else { left = mid }
                    continue
                };
            return Ok(Report {
                root: Some(mid),
                bracket: (left, right),
                iterations: iter + 1,
                evaluations: iter + 3,
                termination,
            })
        }
        Ok(Report {
            root: None,
            bracket: (left, right),
            iterations: self.maxiter,
            evaluations: self.maxiter.saturating_add(2),
            termination: Termination::MaxIter,
        })
    }
}

/// Find a root of `f` on \[`a`, `b`\] by bisection with tolerance
/// `tol` and at most `max_iter` iterations.  This is a shortcut for
/// `bisect(f, a, b).tol(tol).maxiter(max_iter).root()`, see [`bisect`].
///
/// ```
/// use bisect1d::{find_root, Error};
/// let f = |x: f64| x * x - 2.;
/// let r = find_root(f, 0., 2., 1e-7, 100).unwrap().unwrap();
/// assert!((r - 2f64.sqrt()).abs() < 1e-6);
/// assert_eq!(find_root(f, 0., 2., 1e-7, 0).unwrap(), None);
/// assert!(matches!(find_root(f, -1., 1., 1e-7, 100),
///                  Err(Error::PreconditionViolation { .. })));
/// ```
pub fn find_root<T, F, R>(
    f: F, a: T, b: T, tol: T, max_iter: usize
) -> Result<Option<T>, Error<T, R::Error>>
where
    T: Bisectable,
    F: FnMut(T) -> R,
    R: FloatOrError<T>
{
    bisect(f, a, b).tol(tol).maxiter(max_iter).root()
}


////////////////////////////////////////////////////////////////////////
//
// Tests

#[cfg(all(test, feature = "std"))]
macro_rules! assert_approx_eq {
    ($a: expr, $b: expr, $err: expr) => {
        let a = $a;
        let b = $b;
        if ! ((a.clone() - b.clone()).abs() <= $err) {
            panic!("|left - right| ≤ {:e}\n  left: {}\n right: {}",
                   $err, a, b);
        }
    }
}
