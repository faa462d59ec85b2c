use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::api::application::ports::outgoing::{endpoints, AdminApi, ApiError, UploadAsset};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calls {
    pub reads: usize,
    pub creates: usize,
    pub updates: usize,
    pub removes: usize,
    pub uploads: usize,
}

#[derive(Default)]
struct State {
    collections: HashMap<String, Vec<Value>>,
    about: Value,
    calls: Calls,
    requests: Vec<(String, String)>,
    fail_reads: bool,
    /// `Some(message)` makes every write fail; the inner `None` means the
    /// server sent no message.
    fail_writes: Option<Option<String>>,
    fail_uploads: bool,
    /// Writes and uploads never complete while set.
    stall_writes: bool,
}

/// In-memory stand-in for the remote content store, behaving like the
/// real server for the paths the view-models use.
#[derive(Default)]
pub struct FakeStore {
    state: Mutex<State>,
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        message: Some("Not found".into()),
    }
}

/// `/projects/p1` -> (`/projects`, `p1`)
fn split_item(path: &str) -> Option<(String, String)> {
    let (collection, id) = path.trim_start_matches('/').split_once('/')?;
    Some((format!("/{collection}"), id.to_string()))
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, collection: &str, records: Vec<Value>) {
        self.state
            .lock()
            .unwrap()
            .collections
            .insert(collection.to_string(), records);
    }

    pub fn set_about(&self, profile: Value) {
        self.state.lock().unwrap().about = profile;
    }

    pub fn about(&self) -> Value {
        self.state.lock().unwrap().about.clone()
    }

    pub fn collection(&self, collection: &str) -> Vec<Value> {
        self.state
            .lock()
            .unwrap()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn calls(&self) -> Calls {
        self.state.lock().unwrap().calls
    }

    /// `(METHOD, path)` in the order received.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state.lock().unwrap().fail_reads = fail;
    }

    pub fn fail_writes(&self, message: Option<&str>) {
        self.state.lock().unwrap().fail_writes = Some(message.map(str::to_string));
    }

    pub fn fail_uploads(&self, fail: bool) {
        self.state.lock().unwrap().fail_uploads = fail;
    }

    pub fn stall_writes(&self, stall: bool) {
        self.state.lock().unwrap().stall_writes = stall;
    }

    async fn wait_if_stalled(&self) {
        let stalled = self.state.lock().unwrap().stall_writes;
        if stalled {
            std::future::pending::<()>().await;
        }
    }

    fn write_failure(state: &State) -> Option<ApiError> {
        state.fail_writes.as_ref().map(|message| ApiError::Status {
            status: 500,
            message: message.clone(),
        })
    }
}

#[async_trait]
impl AdminApi for FakeStore {
    async fn read(&self, path: &str) -> Result<Value, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.reads += 1;
        state.requests.push(("GET".into(), path.into()));

        if state.fail_reads {
            return Err(ApiError::Status {
                status: 500,
                message: None,
            });
        }
        if path == endpoints::ABOUT {
            return Ok(state.about.clone());
        }
        if let Some(records) = state.collections.get(path) {
            return Ok(Value::Array(records.clone()));
        }
        match split_item(path) {
            Some((collection, id)) => state
                .collections
                .get(&collection)
                .and_then(|records| records.iter().find(|r| r["id"] == json!(id)))
                .cloned()
                .ok_or_else(not_found),
            None => Ok(Value::Array(Vec::new())),
        }
    }

    async fn create(&self, path: &str, mut body: Value) -> Result<Value, ApiError> {
        self.wait_if_stalled().await;
        let mut state = self.state.lock().unwrap();
        state.calls.creates += 1;
        state.requests.push(("POST".into(), path.into()));

        if let Some(err) = Self::write_failure(&state) {
            return Err(err);
        }
        if let Some(record) = body.as_object_mut() {
            record.insert("id".into(), json!(Uuid::new_v4().to_string()));
            record.insert("createdAt".into(), json!(Utc::now().to_rfc3339()));
        }
        state
            .collections
            .entry(path.to_string())
            .or_default()
            .push(body.clone());
        Ok(body)
    }

    async fn update(&self, path: &str, mut body: Value) -> Result<Value, ApiError> {
        self.wait_if_stalled().await;
        let mut state = self.state.lock().unwrap();
        state.calls.updates += 1;
        state.requests.push(("PUT".into(), path.into()));

        if let Some(err) = Self::write_failure(&state) {
            return Err(err);
        }
        if path == endpoints::ABOUT {
            state.about = body.clone();
            return Ok(body);
        }

        if let Some(id) = path
            .strip_prefix(endpoints::CONTACT)
            .and_then(|rest| rest.strip_suffix("/read"))
            .map(|rest| rest.trim_start_matches('/'))
        {
            let message = state
                .collections
                .get_mut(endpoints::CONTACT)
                .and_then(|records| records.iter_mut().find(|r| r["id"] == json!(id)))
                .ok_or_else(not_found)?;
            message["read"] = json!(true);
            return Ok(message.clone());
        }

        let (collection, id) = split_item(path).ok_or_else(not_found)?;
        let record = state
            .collections
            .get_mut(&collection)
            .and_then(|records| records.iter_mut().find(|r| r["id"] == json!(id)))
            .ok_or_else(not_found)?;

        if let Some(fields) = body.as_object_mut() {
            fields.insert("id".into(), json!(id));
            if let Some(created_at) = record.get("createdAt") {
                fields.insert("createdAt".into(), created_at.clone());
            }
        }
        *record = body.clone();
        Ok(body)
    }

    async fn remove(&self, path: &str) -> Result<Value, ApiError> {
        self.wait_if_stalled().await;
        let mut state = self.state.lock().unwrap();
        state.calls.removes += 1;
        state.requests.push(("DELETE".into(), path.into()));

        if let Some(err) = Self::write_failure(&state) {
            return Err(err);
        }
        let (collection, id) = split_item(path).ok_or_else(not_found)?;
        let records = state.collections.get_mut(&collection).ok_or_else(not_found)?;
        let index = records
            .iter()
            .position(|r| r["id"] == json!(id))
            .ok_or_else(not_found)?;
        records.remove(index);
        Ok(json!({ "message": "Deleted" }))
    }

    async fn upload_asset(&self, asset: UploadAsset) -> Result<String, ApiError> {
        self.wait_if_stalled().await;
        let mut state = self.state.lock().unwrap();
        state.calls.uploads += 1;
        state.requests.push(("POST".into(), endpoints::UPLOAD.into()));

        if state.fail_uploads {
            return Err(ApiError::Status {
                status: 500,
                message: Some("Upload Failed".into()),
            });
        }
        Ok(format!("https://cdn.test/{}", asset.file_name))
    }
}
