mod rule_registry;

pub use rule_registry::{ComponentRewrite, RuleRegistry, RuleScope, VariantChange};
