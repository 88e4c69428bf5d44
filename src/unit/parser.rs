//! Line parser for generated service units.
//!
//! Generated units are plain `Key=Value` text split into `[Section]` blocks. Only the
//! keys listed in [`UnitKey`] are of interest; section headers, comments and every
//! other directive are passed over without complaint.

/// Keys recognised in a generated unit file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKey {
    SourcePath,
    PodName,
    ContainerName,
    Exec,
    Image,
    Pod,
}

impl UnitKey {
    /// Looks up a key by its name as written in the unit file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SourcePath" => Some(Self::SourcePath),
            "PodName" => Some(Self::PodName),
            "ContainerName" => Some(Self::ContainerName),
            "Exec" => Some(Self::Exec),
            "Image" => Some(Self::Image),
            "Pod" => Some(Self::Pod),
            _ => None,
        }
    }
}

impl std::fmt::Display for UnitKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            UnitKey::SourcePath => "SourcePath",
            UnitKey::PodName => "PodName",
            UnitKey::ContainerName => "ContainerName",
            UnitKey::Exec => "Exec",
            UnitKey::Image => "Image",
            UnitKey::Pod => "Pod",
        };
        write!(f, "{name}")
    }
}

/// A recognised `Key=Value` line.
#[derive(Debug, PartialEq, Eq)]
pub struct UnitLine<'a> {
    pub key: UnitKey,
    /// Value with surrounding whitespace removed. May be empty.
    pub value: &'a str,
}

/// Parses a single unit file line.
///
/// The line is split on the first `=`, and both halves are trimmed. Returns `None` for
/// lines without `=` and for keys outside of [`UnitKey`].
pub fn parse_unit_line(line: &str) -> Option<UnitLine<'_>> {
    let (key, value) = line.split_once('=')?;
    let key = UnitKey::from_name(key.trim())?;

    Some(UnitLine {
        key,
        value: value.trim(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recognised_key() {
        let line = parse_unit_line("SourcePath=/etc/containers/systemd/web.container\n").unwrap();
        assert_eq!(line.key, UnitKey::SourcePath);
        assert_eq!(line.value, "/etc/containers/systemd/web.container");
    }

    #[test]
    fn trims_key_and_value() {
        let line = parse_unit_line("  Image =  nginx:latest \t").unwrap();
        assert_eq!(line.key, UnitKey::Image);
        assert_eq!(line.value, "nginx:latest");
    }

    #[test]
    fn splits_on_first_separator_only() {
        let line = parse_unit_line("Exec=/usr/bin/app --opt=value").unwrap();
        assert_eq!(line.key, UnitKey::Exec);
        assert_eq!(line.value, "/usr/bin/app --opt=value");
    }

    #[test]
    fn keeps_empty_value() {
        let line = parse_unit_line("ContainerName=").unwrap();
        assert_eq!(line.key, UnitKey::ContainerName);
        assert_eq!(line.value, "");
    }

    #[test]
    fn ignores_unknown_keys() {
        assert_eq!(parse_unit_line("ExecStart=/usr/bin/podman run"), None);
        assert_eq!(parse_unit_line("sourcepath=/x.container"), None);
    }

    #[test]
    fn ignores_lines_without_separator() {
        assert_eq!(parse_unit_line("[X-Container]"), None);
        assert_eq!(parse_unit_line("SourcePath"), None);
        assert_eq!(parse_unit_line(""), None);
    }

    #[test]
    fn key_display_matches_name() {
        for name in ["SourcePath", "PodName", "ContainerName", "Exec", "Image", "Pod"] {
            assert_eq!(UnitKey::from_name(name).unwrap().to_string(), name);
        }
    }
}
