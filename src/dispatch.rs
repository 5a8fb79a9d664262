//! Named-operation registry with a failure boundary

use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::error;

use crate::BoxError;

/// A named unit of business logic invocable by the dispatcher.
pub trait Operation: Send + Sync {
    fn name(&self) -> &'static str;
    fn run(&self, args: Value) -> Result<Value, BoxError>;
}

/// Returned when dispatch is asked for a name nobody registered. Unlike
/// handler failures this propagates to the caller as a hard error.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationNotFound {
    pub requested: String,
    pub registered: Vec<String>,
}

impl fmt::Display for OperationNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Operation '{}' not found! Registered operations: {:?}",
            self.requested, self.registered
        )
    }
}

impl std::error::Error for OperationNotFound {}

#[derive(Clone, Default)]
pub struct Dispatcher {
    operations: HashMap<&'static str, Arc<dyn Operation>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Dispatcher::default()
    }

    /// Binds the operation under its own name. Registering the same name
    /// again replaces the previous binding.
    pub fn register(&mut self, operation: Arc<dyn Operation>) {
        self.operations.insert(operation.name(), operation);
    }

    /// Runs the named operation. An unknown name is a hard failure; an
    /// error raised by a found operation is logged and folded into an
    /// `{"error": ...}` payload so it never propagates to the caller.
    pub fn dispatch(&self, name: &str, args: Value) -> Result<Value, OperationNotFound> {
        let Some(operation) = self.operations.get(name) else {
            let mut registered: Vec<String> =
                self.operations.keys().map(|k| k.to_string()).collect();
            registered.sort();
            return Err(OperationNotFound {
                requested: name.to_string(),
                registered,
            });
        };

        match operation.run(args) {
            Ok(result) => Ok(result),
            Err(e) => {
                error!("Error running operation '{}': {}", name, e);
                Ok(json!({
                    "error": format!("{} failed to run: {}", name, e)
                }))
            }
        }
    }
}
