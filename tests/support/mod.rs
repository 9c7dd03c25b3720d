// Helper functions are shared across multiple test crates; not every helper is
// referenced in each test module.
#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::io;
use std::sync::Mutex;

use stack_secrets::catalog::SecretDescriptor;
use stack_secrets::interactive::InteractiveIo;
use stack_secrets::store::{SecretStore, StoreError};

pub(crate) const ROOT_TOKEN: &str = "root-token";

pub(crate) const fn descriptor(name: &'static str, required: bool) -> SecretDescriptor {
    SecretDescriptor {
        name,
        description: "test secret",
        reference_key: name,
        required,
        example: None,
    }
}

/// Secret store kept in memory that records every call.
#[derive(Default)]
pub(crate) struct MemoryStore {
    secrets: Mutex<BTreeMap<String, String>>,
    identifiers: Mutex<HashMap<String, String>>,
    exists_failures: Mutex<HashMap<String, StoreError>>,
    create_failures: Mutex<HashMap<String, StoreError>>,
    exists_calls: Mutex<Vec<String>>,
    create_calls: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub(crate) fn with_secrets(names: &[&str]) -> Self {
        let store = Self::default();
        for name in names {
            store.insert(name, "existing");
        }
        store
    }

    pub(crate) fn insert(&self, name: &str, value: &str) {
        self.secrets
            .lock()
            .expect("secrets lock")
            .insert(name.to_string(), value.to_string());
    }

    pub(crate) fn value(&self, name: &str) -> Option<String> {
        self.secrets.lock().expect("secrets lock").get(name).cloned()
    }

    pub(crate) fn set_identifier(&self, name: &str, identifier: &str) {
        self.identifiers
            .lock()
            .expect("identifiers lock")
            .insert(name.to_string(), identifier.to_string());
    }

    pub(crate) fn fail_exists(&self, name: &str, err: StoreError) {
        self.exists_failures
            .lock()
            .expect("failures lock")
            .insert(name.to_string(), err);
    }

    pub(crate) fn fail_create(&self, name: &str, err: StoreError) {
        self.create_failures
            .lock()
            .expect("failures lock")
            .insert(name.to_string(), err);
    }

    pub(crate) fn clear_failures(&self) {
        self.exists_failures.lock().expect("failures lock").clear();
        self.create_failures.lock().expect("failures lock").clear();
    }

    pub(crate) fn exists_calls(&self) -> Vec<String> {
        self.exists_calls.lock().expect("calls lock").clone()
    }

    pub(crate) fn create_calls(&self) -> Vec<String> {
        self.create_calls.lock().expect("calls lock").clone()
    }

    pub(crate) fn reset_calls(&self) {
        self.exists_calls.lock().expect("calls lock").clear();
        self.create_calls.lock().expect("calls lock").clear();
    }
}

impl SecretStore for MemoryStore {
    async fn exists(&self, name: &str) -> Result<bool, StoreError> {
        self.exists_calls
            .lock()
            .expect("calls lock")
            .push(name.to_string());
        if let Some(err) = self.exists_failures.lock().expect("failures lock").get(name) {
            return Err(err.clone());
        }
        Ok(self.secrets.lock().expect("secrets lock").contains_key(name))
    }

    async fn create(
        &self,
        name: &str,
        value: &str,
        _description: &str,
    ) -> Result<String, StoreError> {
        self.create_calls
            .lock()
            .expect("calls lock")
            .push(name.to_string());
        if let Some(err) = self.create_failures.lock().expect("failures lock").get(name) {
            return Err(err.clone());
        }
        self.insert(name, value);
        let identifier = self
            .identifiers
            .lock()
            .expect("identifiers lock")
            .get(name)
            .cloned()
            .unwrap_or_else(|| format!("memory:{name}"));
        Ok(identifier)
    }

    fn target(&self) -> String {
        "memory".to_string()
    }
}

/// Operator stand-in answering from a script.
pub(crate) struct ScriptedIo {
    confirm_answer: bool,
    values: VecDeque<String>,
    pub(crate) confirm_prompts: Vec<String>,
    pub(crate) value_prompts: Vec<String>,
    pub(crate) lines: Vec<String>,
}

impl ScriptedIo {
    pub(crate) fn new(confirm_answer: bool, values: &[&str]) -> Self {
        Self {
            confirm_answer,
            values: values.iter().map(ToString::to_string).collect(),
            confirm_prompts: Vec::new(),
            value_prompts: Vec::new(),
            lines: Vec::new(),
        }
    }

    pub(crate) fn output(&self) -> String {
        self.lines.join("\n")
    }
}

impl InteractiveIo for ScriptedIo {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        self.confirm_prompts.push(prompt.to_string());
        Ok(self.confirm_answer)
    }

    fn prompt_value(&mut self, prompt: &str) -> io::Result<String> {
        self.value_prompts.push(prompt.to_string());
        Ok(self.values.pop_front().unwrap_or_default())
    }

    fn report(&mut self, lines: &[String]) -> io::Result<()> {
        self.lines.extend_from_slice(lines);
        Ok(())
    }
}
