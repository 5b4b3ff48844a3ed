//! Resolved repository records served by the vanity server.

use serde::Serialize;

use crate::config::PathSpec;
use crate::vcs::Vcs;

/// Normalize a request or configuration path into a lookup key.
///
/// Trailing slashes are removed and a leading slash is added when absent, so
/// `"pkg"`, `"/pkg"` and `"/pkg/"` all map to `"/pkg"`. The empty path maps
/// to `"/"`.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// One fully resolved mapping entry.
///
/// `import_path` is derived from the host and the normalized path at
/// construction time; there is no setter, so it cannot go stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryDescriptor {
    path: String,
    vcs: Vcs,
    source: String,
    display: String,
    import_path: String,
}

impl RepositoryDescriptor {
    /// Resolve a configured path entry against `host`.
    pub fn new(host: &str, path: &str, spec: &PathSpec) -> Self {
        let path = normalize_path(path);
        let display = match spec.display.as_deref().map(str::trim) {
            Some(display) if !display.is_empty() => display.to_string(),
            _ => default_display(&spec.repo),
        };
        Self {
            import_path: format!("{}{}", host, path),
            path,
            vcs: spec.vcs,
            source: spec.repo.clone(),
            display,
        }
    }

    /// Normalized URL path, always starting with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Version-control kind.
    pub fn vcs(&self) -> Vcs {
        self.vcs
    }

    /// Location of the actual repository.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Source-browsing template used in the `go-source` meta tag.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Full import path (`host + path`).
    pub fn import_path(&self) -> &str {
        &self.import_path
    }
}

/// Derive a `go-source` template for well-known hosting services.
///
/// Unknown hosts get `"{source} _ _"`, meaning "no directory or file links".
fn default_display(source: &str) -> String {
    let source = source.trim_end_matches('/');
    if source.starts_with("https://github.com/") {
        format!(
            "{0} {0}/tree/master{{/dir}} {0}/blob/master{{/dir}}/{{file}}#L{{line}}",
            source
        )
    } else if source.starts_with("https://gitlab.com/") {
        format!(
            "{0} {0}/-/tree/master{{/dir}} {0}/-/blob/master{{/dir}}/{{file}}#L{{line}}",
            source
        )
    } else if source.starts_with("https://bitbucket.org/") {
        format!(
            "{0} {0}/src/default{{/dir}} {0}/src/default{{/dir}}/{{file}}#{{file}}-{{line}}",
            source
        )
    } else {
        format!("{} _ _", source)
    }
}
