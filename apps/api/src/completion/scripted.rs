//! Test double: canned responses per operation, with call counting,
//! injected failures and artificial latency.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::completion::{CompletionError, CompletionService, Operation};

#[derive(Default)]
pub struct ScriptedCompletionService {
    responses: HashMap<Operation, Result<Value, String>>,
    delays: HashMap<Operation, Duration>,
    calls: Mutex<HashMap<Operation, usize>>,
    inputs: Mutex<HashMap<Operation, Vec<Value>>>,
}

impl ScriptedCompletionService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, operation: Operation, output: Value) -> Self {
        self.responses.insert(operation, Ok(output));
        self
    }

    pub fn fail(mut self, operation: Operation, message: &str) -> Self {
        self.responses.insert(operation, Err(message.to_string()));
        self
    }

    pub fn delay(mut self, operation: Operation, delay: Duration) -> Self {
        self.delays.insert(operation, delay);
        self
    }

    pub fn calls(&self, operation: Operation) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(&operation)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    pub fn last_input(&self, operation: Operation) -> Option<Value> {
        self.inputs
            .lock()
            .unwrap()
            .get(&operation)
            .and_then(|inputs| inputs.last().cloned())
    }
}

#[async_trait]
impl CompletionService for ScriptedCompletionService {
    async fn complete(
        &self,
        operation: Operation,
        input: Value,
    ) -> Result<Value, CompletionError> {
        *self.calls.lock().unwrap().entry(operation).or_insert(0) += 1;
        self.inputs
            .lock()
            .unwrap()
            .entry(operation)
            .or_default()
            .push(input);

        if let Some(delay) = self.delays.get(&operation) {
            tokio::time::sleep(*delay).await;
        }

        match self.responses.get(&operation) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(message)) => Err(CompletionError::Other(message.clone())),
            None => Err(CompletionError::Other(format!(
                "no scripted response for {operation}"
            ))),
        }
    }
}
