/// Application layer - Use cases and DTOs
///
/// Orchestrates reading, decoding, rule application and encoding of
/// metadata files through the outbound ports.
pub mod dto;
pub mod use_cases;
