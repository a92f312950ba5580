use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};

/// Read the `key=value` pairs of one `[section]` out of `text`.
///
/// Returns `Ok(None)` when the section never appears. Keys of other sections
/// and lines before the first header are skipped; a repeated key keeps its
/// last value. Only full-line `#` and `;` comments are recognized, so values
/// such as `Keywords=web;browser;` survive intact.
pub(super) fn read_section(
    path: &Path,
    text: &str,
    section: &str,
) -> Result<Option<HashMap<String, String>>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut fields: Option<HashMap<String, String>> = None;
    let mut in_section = false;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            // Anything after the closing bracket, such as a trailing comment,
            // is ignored.
            let end = header.rfind(']').ok_or_else(|| Error::Syntax {
                path: path.to_path_buf(),
                line: idx + 1,
                message: "unterminated section header".into(),
            })?;
            let name = &header[..end];
            in_section = name.trim() == section;
            if in_section {
                fields.get_or_insert_with(HashMap::new);
            }
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(Error::Syntax {
                path: path.to_path_buf(),
                line: idx + 1,
                message: format!("expected key=value, found `{line}`"),
            });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::Syntax {
                path: path.to_path_buf(),
                line: idx + 1,
                message: "missing key before `=`".into(),
            });
        }

        if in_section {
            if let Some(fields) = fields.as_mut() {
                fields.insert(key.to_string(), value.trim().to_string());
            }
        }
    }

    Ok(fields)
}
