//! Common functions used across test cases.

use std::path::PathBuf;

pub const DRILL_DEPLOYMENT_PATH: &str = "static/drill-deployment";

/// Find the project root via the crate root provided by `cargo test`.
/// This depends on the convention that this crate lives in `/crates/<name>`.
pub fn get_path_from_project_root(path: &str) -> PathBuf {
    let mut d = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    d.push("../../");
    d.push(path);
    d
}
