use crate::Result;
use crate::redact::RedactionPolicy;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Scrub an archive document and replace `path` with it.
///
/// The JSON is written to a sibling temp file and renamed into place, so
/// readers see either the previous archive or the new one.
pub fn write_archive<T: Serialize>(
    path: &Path,
    document: &T,
    policy: &RedactionPolicy,
    pretty: bool,
) -> Result<()> {
    let value = policy.redact_serializable(document)?;

    let tmp_path = temp_path_for(path);
    {
        let file = std::fs::File::create(&tmp_path)?;
        let mut writer = std::io::BufWriter::new(file);
        if pretty {
            serde_json::to_writer_pretty(&mut writer, &value)?;
        } else {
            serde_json::to_writer(&mut writer, &value)?;
        }
        writer.flush()?;
    }

    if let Err(err) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(err.into());
    }

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
