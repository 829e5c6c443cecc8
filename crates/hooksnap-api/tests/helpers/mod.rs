//! Test helpers: build the router over a throwaway upload directory.
//!
//! Run from workspace root: `cargo test -p hooksnap-api`.

use std::path::{Path, PathBuf};

use axum_test::TestServer;
use hooksnap_api::setup;
use hooksnap_core::{Config, Snapshot};
use tempfile::TempDir;

pub const TEST_TOKEN: &str = "secret";

/// Test application: server plus the directory it writes into.
pub struct TestApp {
    pub server: TestServer,
    pub upload_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Names of every file in the upload directory, sorted.
    pub fn stored_files(&self) -> Vec<String> {
        list_files(&self.upload_dir)
    }

    pub fn files_with_extension(&self, ext: &str) -> Vec<PathBuf> {
        self.stored_files()
            .into_iter()
            .filter(|name| Path::new(name).extension().and_then(|e| e.to_str()) == Some(ext))
            .map(|name| self.upload_dir.join(name))
            .collect()
    }

    /// The single snapshot written so far.
    pub fn only_snapshot(&self) -> (PathBuf, Snapshot) {
        let metas = self.files_with_extension("json");
        assert_eq!(metas.len(), 1, "expected exactly one snapshot, found {:?}", metas);
        let path = metas.into_iter().next().unwrap();
        let snapshot = serde_json::from_slice(&std::fs::read(&path).unwrap())
            .expect("snapshot file is not a valid Snapshot");
        (path, snapshot)
    }
}

/// Build the app with an optional shared secret.
pub async fn setup_test_app(token: Option<&str>) -> TestApp {
    setup_test_app_with(token, |_| {}).await
}

/// Build the app, letting the test adjust the config first.
pub async fn setup_test_app_with(
    token: Option<&str>,
    configure: impl FnOnce(&mut Config),
) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    // Not created up front; startup must create it
    let upload_dir = temp_dir.path().join("uploads");

    let mut config = Config {
        webhook_token: token.map(str::to_string),
        upload_dir: upload_dir.clone(),
        ..Config::default()
    };
    configure(&mut config);

    let (_state, app) = setup::build_app(config)
        .await
        .expect("Failed to build app");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        upload_dir,
        _temp_dir: temp_dir,
    }
}

pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("upload dir should exist")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
