/// Checked conversions between [`BigInt`](crate::interpreter::value::big_int::BigInt)
/// and machine integers.
///
/// All functions return a `Result`, which is `Ok` if the conversion is
/// lossless and valid, or an error if the value is out of range or malformed.
pub mod num;
/// A fixed-capacity linear allocator with O(1) reset.
pub mod arena;
/// A whitespace-delimited word scanner that reports numbers and strings to a
/// listener.
pub mod words;
/// A dense, row-major integer matrix.
pub mod matrix;
