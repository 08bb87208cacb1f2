//! Activity-result contracts.
//!
//! Modules register contracts through an `ActivityResultCaller` handed to
//! their contracts callback after creation. Each registration yields an
//! `ActivityResultLauncher`; the host delivers results back by launcher key.

use std::collections::VecDeque;
use std::sync::Arc;

use bridgekit_types::error::RegistryError;
use bridgekit_types::payload::ActivityResultPayload;
use dashmap::DashMap;
use futures_util::future::BoxFuture;
use serde_json::Value;
use uuid::Uuid;

type ResultCallback = Arc<dyn Fn(Option<Value>, &ActivityResultPayload) + Send + Sync>;

/// Async callback that registers a module's contracts.
pub type RegisterContractsFn = dyn Fn(ActivityResultCaller) -> BoxFuture<'static, ()> + Send + Sync;

struct ContractEntry {
    contract: String,
    callback: ResultCallback,
    /// Inputs of launches still waiting for a result, oldest first.
    pending: VecDeque<Value>,
}

/// Capability for registering activity-result contracts.
///
/// Cloning the caller shares the underlying contract table.
#[derive(Clone, Default)]
pub struct ActivityResultCaller {
    contracts: Arc<DashMap<Uuid, ContractEntry>>,
}

impl ActivityResultCaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a contract. `callback` receives the input of the launch the
    /// result answers (if any launch was pending) and the result itself.
    pub fn register_for_activity_result<F>(
        &self,
        contract: impl Into<String>,
        callback: F,
    ) -> ActivityResultLauncher
    where
        F: Fn(Option<Value>, &ActivityResultPayload) + Send + Sync + 'static,
    {
        let key = Uuid::now_v7();
        let contract = contract.into();
        tracing::debug!(%key, contract = %contract, "registered activity result contract");
        self.contracts.insert(
            key,
            ContractEntry {
                contract: contract.clone(),
                callback: Arc::new(callback),
                pending: VecDeque::new(),
            },
        );
        ActivityResultLauncher {
            key,
            contract,
            caller: self.clone(),
        }
    }

    /// Names of all registered contracts, sorted.
    pub fn contracts(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .contracts
            .iter()
            .map(|entry| entry.contract.clone())
            .collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    pub fn pending_launches(&self, key: Uuid) -> usize {
        self.contracts
            .get(&key)
            .map(|entry| entry.pending.len())
            .unwrap_or(0)
    }

    /// Deliver a result to the contract registered under `key`.
    pub fn deliver(&self, key: Uuid, payload: &ActivityResultPayload) -> Result<(), RegistryError> {
        let (callback, input) = {
            let mut entry = self
                .contracts
                .get_mut(&key)
                .ok_or(RegistryError::UnknownLauncher(key))?;
            let input = entry.pending.pop_front();
            if input.is_none() {
                tracing::warn!(%key, contract = %entry.contract, "result delivered without a pending launch");
            }
            (Arc::clone(&entry.callback), input)
        };
        callback(input, payload);
        Ok(())
    }

    fn record_launch(&self, key: Uuid, input: Value) -> Result<(), RegistryError> {
        let mut entry = self
            .contracts
            .get_mut(&key)
            .ok_or(RegistryError::UnknownLauncher(key))?;
        entry.pending.push_back(input);
        Ok(())
    }
}

impl std::fmt::Debug for ActivityResultCaller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityResultCaller")
            .field("contracts", &self.contracts.len())
            .finish()
    }
}

/// Handle returned by contract registration, used to start the activity.
#[derive(Debug, Clone)]
pub struct ActivityResultLauncher {
    key: Uuid,
    contract: String,
    caller: ActivityResultCaller,
}

impl ActivityResultLauncher {
    pub fn key(&self) -> Uuid {
        self.key
    }

    pub fn contract(&self) -> &str {
        &self.contract
    }

    /// Record a launch with `input`; the host answers it via
    /// [`ActivityResultCaller::deliver`].
    pub fn launch(&self, input: impl Into<Value>) -> Result<(), RegistryError> {
        tracing::debug!(key = %self.key, contract = %self.contract, "launching activity");
        self.caller.record_launch(self.key, input.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridgekit_types::payload::RESULT_OK;
    use serde_json::json;
    use std::sync::Mutex;

    fn ok_result() -> ActivityResultPayload {
        ActivityResultPayload {
            request_code: 1,
            result_code: RESULT_OK,
            data: None,
        }
    }

    #[test]
    fn launch_then_deliver_passes_input_to_callback() {
        let caller = ActivityResultCaller::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let launcher = caller.register_for_activity_result("PickImage", move |input, result| {
            sink.lock().unwrap().push((input, result.is_ok()));
        });

        launcher.launch(json!({"mime": "image/*"})).unwrap();
        launcher.launch(json!({"mime": "image/png"})).unwrap();
        assert_eq!(caller.pending_launches(launcher.key()), 2);

        caller.deliver(launcher.key(), &ok_result()).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, Some(json!({"mime": "image/*"})));
        assert!(seen[0].1);
        assert_eq!(caller.pending_launches(launcher.key()), 1);
    }

    #[test]
    fn deliver_without_pending_launch_passes_none() {
        let caller = ActivityResultCaller::new();
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let launcher = caller.register_for_activity_result("TakePicture", move |input, _| {
            *sink.lock().unwrap() = Some(input.is_none());
        });

        caller.deliver(launcher.key(), &ok_result()).unwrap();
        assert_eq!(*seen.lock().unwrap(), Some(true));
    }

    #[test]
    fn deliver_unknown_key_fails() {
        let caller = ActivityResultCaller::new();
        let key = Uuid::now_v7();
        assert_eq!(
            caller.deliver(key, &ok_result()).unwrap_err(),
            RegistryError::UnknownLauncher(key)
        );
    }

    #[test]
    fn clones_share_contract_table() {
        let caller = ActivityResultCaller::new();
        let clone = caller.clone();
        clone.register_for_activity_result("b", |_, _| {});
        caller.register_for_activity_result("a", |_, _| {});
        assert_eq!(caller.len(), 2);
        assert_eq!(clone.contracts(), vec!["a", "b"]);
    }
}
