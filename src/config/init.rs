// ABOUTME: Config scaffolding for a new working directory.
// ABOUTME: Writes a commented berth.yml that spells out every default.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::{CONFIG_FILENAME, Config};

/// Write the template to `dir/berth.yml`, refusing to overwrite unless `force`.
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    std::fs::write(&config_path, template_yaml())?;
    Ok(config_path)
}

/// Commented template listing every key with its default value.
pub fn template_yaml() -> &'static str {
    r#"# Runtime selection. Auto-detected when both are unset
# (DOCKER_HOST, then Podman sockets, then Docker).
# runtime: docker
# socket: /var/run/docker.sock

timeout: 30s
pull_timeout: 10m

stop:
  timeout: 10s

launch:
  host: localhost

logs:
  tail: 500

search:
  limit: 25

prune:
  volumes: false
"#
}
