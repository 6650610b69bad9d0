use crate::rule_engine::domain::{ComponentIdentity, ComponentMetadata};

/// What a rule sees while it runs: the metadata of exactly one component.
///
/// The context borrows the metadata mutably for the duration of one
/// `execute` call and is dropped afterwards, so a rule cannot hold on to it.
pub struct ComponentMetadataContext<'a> {
    details: &'a mut ComponentMetadata,
}

impl<'a> ComponentMetadataContext<'a> {
    pub fn new(details: &'a mut ComponentMetadata) -> Self {
        Self { details }
    }

    /// Identity of the component being rewritten
    pub fn id(&self) -> &ComponentIdentity {
        self.details.component()
    }

    pub fn details(&mut self) -> &mut ComponentMetadata {
        self.details
    }
}

/// A rewrite applied to component metadata while dependencies are resolved.
///
/// Implementations must be stateless: the result may only depend on the
/// metadata passed in. They are invoked once per matching component, possibly
/// from several threads at once on unrelated components.
pub trait ComponentMetadataRule: Send + Sync {
    /// Short name used in reports
    fn name(&self) -> &str;

    /// Rewrites the metadata reachable from `context` in place
    fn execute(&self, context: &mut ComponentMetadataContext<'_>);

    /// Whether a host may cache this rule's output per component identity
    fn is_cacheable(&self) -> bool {
        false
    }

    /// Value-in, value-out form of [`execute`](Self::execute)
    fn rewrite(&self, mut metadata: ComponentMetadata) -> ComponentMetadata {
        let mut context = ComponentMetadataContext::new(&mut metadata);
        self.execute(&mut context);
        metadata
    }
}
