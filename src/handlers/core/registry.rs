//! Command registry.
//!
//! Maps lowercase command names to handlers and their documentation. Names
//! are unique: the first registration of a name wins and later attempts are
//! rejected with a log notice. Registration order is kept for help listings.

use super::context::Handler;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Example invocation shown in a command's help.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Example {
    /// Arguments following the command name.
    pub input: String,
    /// Expected reply, shown after an arrow.
    pub output: Option<String>,
}

/// Optional help metadata for a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
    /// One-line summary used in the general listing.
    pub description: Option<String>,
    /// Longer text preferred over the description in specific help.
    pub explanation: Option<String>,
    pub example: Option<Example>,
}

impl Documentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn example(mut self, input: impl Into<String>, output: Option<&str>) -> Self {
        self.example = Some(Example {
            input: input.into(),
            output: output.map(str::to_string),
        });
        self
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.explanation.is_none() && self.example.is_none()
    }

    /// Explanation, falling back to the description.
    pub fn summary(&self) -> Option<&str> {
        self.explanation.as_deref().or(self.description.as_deref())
    }
}

/// A registered command.
pub struct Command<C, M> {
    name: String,
    handler: Arc<dyn Handler<C, M>>,
    documentation: Option<Documentation>,
}

impl<C, M> Command<C, M> {
    /// Lowercase command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handler(&self) -> &Arc<dyn Handler<C, M>> {
        &self.handler
    }

    pub fn documentation(&self) -> Option<&Documentation> {
        self.documentation.as_ref()
    }

    /// Documentation with at least one field set.
    pub fn documented(&self) -> Option<&Documentation> {
        self.documentation.as_ref().filter(|docs| !docs.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.documentation.as_ref()?.description.as_deref()
    }
}

impl<C, M> fmt::Debug for Command<C, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("documentation", &self.documentation)
            .finish_non_exhaustive()
    }
}

/// Registry of commands.
pub struct Registry<C, M> {
    commands: HashMap<String, Arc<Command<C, M>>>,
    /// Names in registration order
    order: Vec<String>,
}

impl<C, M> Registry<C, M> {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a command under the lowercased `name`.
    ///
    /// Returns false, leaving the existing command in place, if the name is
    /// already taken.
    pub fn register(
        &mut self,
        name: &str,
        handler: Arc<dyn Handler<C, M>>,
        documentation: Option<Documentation>,
    ) -> bool {
        let name = name.to_lowercase();
        if self.commands.contains_key(&name) {
            info!(command = %name, "Command already exists, keeping the original");
            return false;
        }

        let command = Command {
            name: name.clone(),
            handler,
            documentation,
        };
        self.commands.insert(name.clone(), Arc::new(command));
        self.order.push(name);
        true
    }

    /// Look up a command by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<Arc<Command<C, M>>> {
        match self.commands.get(name) {
            Some(command) => Some(Arc::clone(command)),
            None => self.commands.get(&name.to_lowercase()).cloned(),
        }
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Registered commands in registration order.
    pub fn commands(&self) -> Vec<Arc<Command<C, M>>> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<C, M> Default for Registry<C, M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::core::context::{CommandMessage, FnHandler, HandlerResult, Response};
    use async_trait::async_trait;

    struct Reply(&'static str);

    #[async_trait]
    impl Handler<(), ()> for Reply {
        async fn handle(&self, _message: CommandMessage<()>, _client: Arc<()>) -> HandlerResult {
            Ok(Response::from(self.0))
        }
    }

    fn handler(text: &'static str) -> Arc<dyn Handler<(), ()>> {
        Arc::new(Reply(text))
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = Registry::new();
        let h = handler("pong");
        assert!(registry.register("ping", Arc::clone(&h), None));

        let command = registry.lookup("ping").unwrap();
        assert_eq!(command.name(), "ping");
        assert!(Arc::ptr_eq(command.handler(), &h));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut registry = Registry::new();
        let h = handler("pong");
        registry.register("Ping", Arc::clone(&h), None);

        for name in ["ping", "PING", "pInG"] {
            let command = registry.lookup(name).unwrap();
            assert!(Arc::ptr_eq(command.handler(), &h));
        }
        assert!(registry.lookup("pong").is_none());
    }

    #[test]
    fn test_duplicate_registration_keeps_original() {
        let mut registry = Registry::new();
        let h1 = handler("first");
        let h2 = handler("second");

        assert!(registry.register("x", Arc::clone(&h1), None));
        assert!(!registry.register("X", Arc::clone(&h2), Some(Documentation::new().description("new"))));

        let command = registry.lookup("x").unwrap();
        assert!(Arc::ptr_eq(command.handler(), &h1));
        assert!(command.documentation().is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_names_preserve_registration_order() {
        let mut registry: Registry<(), ()> = Registry::new();
        for name in ["help", "zeta", "alpha", "Mid"] {
            registry.register(name, handler("x"), None);
        }
        assert_eq!(registry.names(), vec!["help", "zeta", "alpha", "mid"]);
        let names: Vec<_> = registry.commands().iter().map(|c| c.name().to_string()).collect();
        assert_eq!(names, registry.names());
    }

    #[test]
    fn test_fn_handler_registration() {
        let mut registry: Registry<(), ()> = Registry::new();
        let h: Arc<dyn Handler<(), ()>> =
            Arc::new(FnHandler(|_m: CommandMessage<()>, _c: Arc<()>| async { anyhow::Ok("ok") }));
        assert!(registry.register("ok", h, None));
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_documentation_helpers() {
        let docs = Documentation::new();
        assert!(docs.is_empty());
        assert_eq!(docs.summary(), None);

        let docs = Documentation::new().description("short");
        assert_eq!(docs.summary(), Some("short"));

        let docs = docs.explanation("long").example("a b", Some("c"));
        assert_eq!(docs.summary(), Some("long"));
        assert_eq!(
            docs.example,
            Some(Example {
                input: "a b".to_string(),
                output: Some("c".to_string()),
            })
        );
    }

    #[test]
    fn test_documented_filters_empty() {
        let mut registry: Registry<(), ()> = Registry::new();
        registry.register("a", handler("x"), Some(Documentation::new()));
        registry.register("b", handler("x"), Some(Documentation::new().description("d")));
        assert!(registry.lookup("a").unwrap().documented().is_none());
        assert_eq!(registry.lookup("b").unwrap().description(), Some("d"));
    }
}
