//! Component lookup and execution

use super::components::{Component, ComponentOutput, builtin_components};
use super::errors::ApplicationError;
use crate::domain::ComponentName;
use crate::infrastructure::VulnCheckApi;
use std::collections::BTreeMap;
use std::io::Write;
use std::sync::Arc;

/// Name-to-component table, iterated in name order
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    components: BTreeMap<String, Arc<dyn Component>>,
}

impl ComponentRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in component
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for component in builtin_components() {
            registry.register(component);
        }
        registry
    }

    /// Add a component under its normalized name, returning any component it replaced
    pub fn register(&mut self, component: Arc<dyn Component>) -> Option<Arc<dyn Component>> {
        let name = ComponentName::normalize(component.name());
        self.components.insert(name, component)
    }

    pub fn get(&self, name: &ComponentName) -> Option<Arc<dyn Component>> {
        self.components.get(name.as_str()).cloned()
    }

    /// Normalize raw user input and look it up
    pub fn resolve(&self, raw: &str) -> Option<Arc<dyn Component>> {
        let name = ComponentName::parse(raw).ok()?;
        self.get(&name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Component>> {
        self.components.values()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Executes components against an API client and prints their output
pub struct ComponentRunner {
    api: Arc<dyn VulnCheckApi>,
}

impl ComponentRunner {
    pub fn new(api: Arc<dyn VulnCheckApi>) -> Self {
        Self { api }
    }

    pub async fn execute(
        &self,
        component: &dyn Component,
    ) -> Result<ComponentOutput, ApplicationError> {
        tracing::info!(component = component.name(), "Running component");
        let output = component.execute(self.api.as_ref()).await?;
        tracing::debug!(component = component.name(), "Component finished");
        Ok(output)
    }

    /// Execute and write the rendered output followed by a newline
    pub async fn run<W: Write + Send>(
        &self,
        component: &dyn Component,
        out: &mut W,
    ) -> Result<(), ApplicationError> {
        let output = self.execute(component).await?;
        writeln!(out, "{}", output.render()?)?;
        Ok(())
    }
}
