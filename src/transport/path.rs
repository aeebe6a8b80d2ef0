/// Normalize a share-relative path: `\` becomes `/`, empty and `.` segments are dropped.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Join a directory path and an entry name.
#[must_use]
pub fn join(dir: &str, name: &str) -> String {
    let dir = normalize(dir);
    let name = normalize(name);
    if dir.is_empty() {
        name
    } else if name.is_empty() {
        dir
    } else {
        format!("{dir}/{name}")
    }
}

/// Split a UNC-style path (`//host/share/path` or `\\host\share\path`) into host and rest.
///
/// Returns `None` when the path does not start with a double separator.
#[must_use]
pub fn split_unc(raw: &str) -> Option<(String, String)> {
    let rest = raw
        .strip_prefix("//")
        .or_else(|| raw.strip_prefix("\\\\"))?;
    let normalized = normalize(rest);
    let (host, path) = normalized
        .split_once('/')
        .unwrap_or((normalized.as_str(), ""));
    if host.is_empty() {
        return None;
    }
    Some((host.to_string(), path.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_converts_backslashes() {
        assert_eq!(normalize("share\\logs\\app.log"), "share/logs/app.log");
    }

    #[test]
    fn normalize_drops_empty_and_dot_segments() {
        assert_eq!(normalize("/share//./logs/"), "share/logs");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn join_handles_empty_sides() {
        assert_eq!(join("share/logs", "a.log"), "share/logs/a.log");
        assert_eq!(join("", "a.log"), "a.log");
        assert_eq!(join("share", ""), "share");
    }

    #[test]
    fn split_unc_extracts_host() {
        assert_eq!(
            split_unc("//fileserver/public/report.csv"),
            Some(("fileserver".to_string(), "public/report.csv".to_string()))
        );
        assert_eq!(
            split_unc("\\\\fileserver\\public"),
            Some(("fileserver".to_string(), "public".to_string()))
        );
    }

    #[test]
    fn split_unc_rejects_relative_paths() {
        assert_eq!(split_unc("public/report.csv"), None);
        assert_eq!(split_unc("//"), None);
    }
}
