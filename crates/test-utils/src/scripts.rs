//! Shell scripts standing in for external tools in real-process tests.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Copies the first `-i` input to the last argument, like a stream copy.
pub const COPY_TOOL: &str = r#"#!/bin/sh
input=""
while [ "$#" -gt 1 ]; do
  if [ "$1" = "-i" ] && [ -z "$input" ]; then input="$2"; fi
  shift
done
echo "copying $input" >&2
cp "$input" "$1"
"#;

/// Writes a diagnostic to each stream and exits 1.
pub const FAILING_TOOL: &str =
    "#!/bin/sh\necho 'reading input'\necho 'Unknown encoder' >&2\nexit 1\n";

/// Write an executable script `name` into `dir` and return its path.
///
/// The file is closed before returning; write every script a test needs
/// before spawning anything.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, body).with_context(|| format!("writing script {:?}", path))?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("making script {:?} executable", path))?;
    Ok(path)
}
