//! Test helpers for writing fort and request documents to disk.

use camino::{Utf8Path, Utf8PathBuf};
use fortwalk_core::RouteRequest;
use fortwalk_core::test_support::triangle_fort;
use std::fs;
use tempfile::TempDir;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// A temporary directory holding a triangle fort document and a request.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
    fort_path: Utf8PathBuf,
    request_path: Utf8PathBuf,
}

impl Workspace {
    /// Stage the triangle fort and a 40 minute request from `A`.
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let fort_path = root.join("fort.json");
        let request_path = root.join("request.json");
        let fort = serde_json::to_vec_pretty(&triangle_fort()).expect("serialise fort");
        write_utf8(&fort_path, &fort);
        let workspace = Self {
            _dir: dir,
            root,
            fort_path,
            request_path,
        };
        workspace.write_request(&RouteRequest::new("A", 40.0));
        workspace
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn fort_path(&self) -> &Utf8Path {
        &self.fort_path
    }

    pub(super) fn request_path(&self) -> &Utf8Path {
        &self.request_path
    }

    /// Replace the staged request.
    pub(super) fn write_request(&self, request: &RouteRequest) {
        let payload = serde_json::to_vec_pretty(request).expect("serialise request");
        write_utf8(&self.request_path, &payload);
    }

    /// Arguments for `plan` pointing at the staged documents.
    pub(super) fn plan_args(&self) -> crate::plan::PlanArgs {
        crate::plan::PlanArgs {
            request_path: Some(self.request_path.clone()),
            fort: Some(self.fort_path.clone()),
            ..crate::plan::PlanArgs::default()
        }
    }
}
