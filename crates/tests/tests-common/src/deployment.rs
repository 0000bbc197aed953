//! Deployment functions used across test cases.

pub mod helpers {
    use std::path::PathBuf;

    /// Path of the static test deployment, relative to the project root.
    pub const DRILL_DEPLOYMENT_PATH: &str = "static/drill-deployment";

    /// Find the project root via the crate root provided by `cargo test`,
    /// and resolve `path` against it.
    /// This depends on the convention that all our crates live in `/crates/<name>`
    /// or `/crates/<group>/<name>`, which is checked by looking for the `static`
    /// directory.
    pub fn get_path_from_project_root(path: &str) -> PathBuf {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let root = manifest_dir
            .ancestors()
            .find(|dir| dir.join("static").is_dir())
            .map_or_else(|| manifest_dir.join("../../.."), PathBuf::from);
        root.join(path)
    }

    /// Install a logger for the current test binary, once.
    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}
