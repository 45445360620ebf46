//! `GET /api/buildinfo` and the startup identification line

use std::fmt;

use axum::response::Json;
use serde::Serialize;

use crate::MODULE_NAME;

/// Compile-time identification of this binary (values come from build.rs)
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub module: &'static str,
    pub version: &'static str,
    pub git_hash: &'static str,
    pub build_timestamp: &'static str,
    pub build_profile: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            module: MODULE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            git_hash: env!("GIT_HASH"),
            build_timestamp: env!("BUILD_TIMESTAMP"),
            build_profile: env!("BUILD_PROFILE"),
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{} [{}] built {} ({})",
            self.module, self.version, self.git_hash, self.build_timestamp, self.build_profile
        )
    }
}

pub async fn get_build_info() -> Json<BuildInfo> {
    Json(BuildInfo::current())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_module_and_version() {
        let info = BuildInfo::current();
        let line = info.to_string();
        assert!(line.starts_with(&format!("moodlens-web v{} [", env!("CARGO_PKG_VERSION"))));
        assert!(line.ends_with(&format!("({})", info.build_profile)));
    }
}
