/// Numeric conversion helpers.
///
/// This module provides the conversions the evaluator needs when mixing
/// integers and reals, or when an integer must fit a narrower type such as a
/// `u32` exponent. Narrowing conversions return a `Result` instead of
/// truncating silently.
pub mod num;
