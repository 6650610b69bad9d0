/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: filesystem access,
/// the module metadata codec, and console feedback.
pub mod outbound;
