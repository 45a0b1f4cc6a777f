//! A registry normally needs no setup, but tests and embedders swap in their own
//! resolver or diagnostic writer before any config is applied.

use super::Registry;
use crate::internal::Diagnostics;
use crate::output::{DestinationResolver, Resolve};

/// Stepwise construction of a [`Registry`].
#[derive(Default)]
pub struct RegistryBuilder {
    resolver: Option<Box<dyn Resolve>>,
    diagnostics: Option<Diagnostics>,
    default_namespace: String,
}

impl RegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the standard-stream/file resolver.
    #[must_use]
    pub fn resolver(mut self, resolver: impl Resolve + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Where open failures (and, when verbose, bindings) are reported.
    #[must_use]
    pub fn diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Namespace used by the convenience calls until changed.
    #[must_use]
    pub fn default_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.default_namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn build(self) -> Registry {
        Registry::from_parts(
            self.resolver
                .unwrap_or_else(|| Box::new(DestinationResolver)),
            self.diagnostics.unwrap_or_default(),
            self.default_namespace,
        )
    }
}
