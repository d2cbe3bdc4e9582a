//! SAGA line normalizer.
//!
//! Scripts are line-oriented and indentation-structured; before any
//! tokenization happens the raw source is flattened into normalized
//! logical lines. This stage never fails — malformed input degrades to
//! fewer or garbled lines, not errors.

mod normalize;

pub use normalize::{indentation, normalize, space_operators, starts_with_capital, Line};
