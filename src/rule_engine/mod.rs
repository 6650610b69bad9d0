//! Domain layer: component metadata, the rules that rewrite it, and the
//! registry that decides which rules run for which component.
pub mod domain;
pub mod rules;
pub mod services;
