//! The doubling growth policy and the potential function.
//!
//! Both are pure; the containers compose them with
//! [`ResizableBuffer`](crate::buffer::ResizableBuffer) rather than
//! reimplementing growth decisions per flavor.
//!
//! The potential function is Φ(size, capacity) = 2·size − capacity + 1,
//! normalized so that `potential(0, 1) == 0`. Under doubling growth it makes
//! the amortized cost of every insertion exactly [`AMORTIZED_CHARGE`]:
//!
//! * no resize: actual cost 1, Φ rises by 2, amortized 3;
//! * resize at size s: actual cost 1 + s, Φ falls from s + 1 to 3,
//!   amortized (1 + s) + (2 − s) = 3.

/// The fixed per-insertion charge of the accounting (banker's) method.
///
/// Equal to the amortized cost derived from [`potential`] under doubling
/// growth; the credit bank stays non-negative because the two methods agree.
pub const AMORTIZED_CHARGE: i64 = 3;

/// Returns `true` iff an insertion requires a resize first, i.e. iff the
/// buffer is full.
#[inline]
pub fn needs_growth(size: usize, capacity: usize) -> bool {
    size == capacity
}

/// Returns the capacity to grow to: always a doubling.
///
/// Capacities start at 1 and only ever pass through this function, so they
/// remain powers of two.
#[inline]
pub fn next_capacity(capacity: usize) -> usize {
    capacity * 2
}

/// The potential Φ(size, capacity) = 2·size − capacity + 1.
///
/// # Examples
/// ```
/// assert_eq!(amort::policy::potential(0, 1), 0);
/// assert_eq!(amort::policy::potential(4, 4), 5);
/// assert_eq!(amort::policy::potential(5, 8), 3);
/// ```
#[inline]
pub fn potential(size: usize, capacity: usize) -> i64 {
    2 * size as i64 - capacity as i64 + 1
}
