//! Output types for the quantization pipeline.
//!
//! [`QuantizedGrid`] is the canonical output of both quantizers. It stores
//! level values rather than indices so that consumers holding their own
//! level-keyed tables can look cells up directly.

mod quantized_grid;

pub use quantized_grid::QuantizedGrid;
