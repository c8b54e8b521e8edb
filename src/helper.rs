// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::create_dir_all;
use std::fs::write;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::post;
use jpstudy_core::error::Fallible;
use portpicker::pick_unused_port;
use serde_json::Value;
use serde_json::json;
use tempfile::TempDir;
use tempfile::tempdir;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::spawn;
use tokio::time::sleep;

const TEST_HOST: &str = "127.0.0.1";

/// Create a temporary vault containing the given files.
pub fn create_tmp_vault(files: &[(&str, &str)]) -> Fallible<TempDir> {
    let dir = tempdir()?;
    for (name, contents) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }
        write(path, contents)?;
    }
    Ok(dir)
}

type Requests = Arc<Mutex<Vec<Value>>>;

/// A stand-in for AnkiConnect that records every request. Notes whose front
/// is `重複` are rejected as duplicates.
pub struct StubAnki {
    pub endpoint: String,
    requests: Requests,
}

impl StubAnki {
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    pub fn actions(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter_map(|r| r["action"].as_str().map(str::to_string))
            .collect()
    }
}

async fn stub_handler(State(requests): State<Requests>, Json(body): Json<Value>) -> Json<Value> {
    let duplicate = body["action"] == "addNote"
        && body["params"]["note"]["fields"]
            .as_object()
            .is_some_and(|fields| fields.values().any(|v| v == "重複"));
    requests.lock().unwrap().push(body);
    if duplicate {
        Json(json!({ "result": null, "error": "cannot create note because it is a duplicate" }))
    } else {
        Json(json!({ "result": 1, "error": null }))
    }
}

pub async fn spawn_stub_anki() -> Fallible<StubAnki> {
    let port = pick_unused_port().unwrap();
    let requests: Requests = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/", post(stub_handler))
        .with_state(requests.clone());
    let listener = TcpListener::bind(format!("{TEST_HOST}:{port}")).await?;
    spawn(async move { axum::serve(listener, app).await });
    wait_for_server(TEST_HOST, port).await?;
    Ok(StubAnki {
        endpoint: format!("http://{TEST_HOST}:{port}"),
        requests,
    })
}

async fn wait_for_server(host: &str, port: u16) -> Fallible<()> {
    loop {
        if let Ok(stream) = TcpStream::connect(format!("{host}:{port}")).await {
            drop(stream);
            break;
        }
        sleep(Duration::from_millis(1)).await;
    }
    Ok(())
}
