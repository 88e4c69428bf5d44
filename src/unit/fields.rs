use std::io::BufRead;
use std::path::Path;

use super::parser::{UnitKey, UnitLine, parse_unit_line};
use super::words::split_words;
use super::{Error, Result};
use crate::fsutil;

/// The recognised fields of one generated unit file.
///
/// Every slot is `None` until its key is seen, so a key that was never written stays
/// distinguishable from one written with an empty value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UnitFields {
    /// Path of the quadlet definition the unit was generated from.
    pub source_path: Option<String>,
    /// Declared name, from either `PodName` or `ContainerName`.
    pub name: Option<String>,
    /// `Exec` split into argv-style tokens.
    pub exec: Option<Vec<String>>,
    pub image: Option<String>,
    /// Unit filename of the pod the container belongs to.
    pub pod: Option<String>,
}

impl UnitFields {
    /// Reads and extracts the fields of the unit file at `path`.
    ///
    /// # Errors
    ///
    /// - [`Error::FileOpen`] if the file can't be opened.
    /// - [`Error::ReadLine`] if reading fails, including content that is not valid UTF-8.
    /// - [`Error::Exec`] if the `Exec` value can't be split into words.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let buf = fsutil::open_file_reader(path)?;

        Self::from_reader(buf, path)
    }

    /// Extracts the fields from a buffered reader over unit file content.
    ///
    /// `origin` is only used in error messages.
    ///
    /// # Errors
    ///
    /// - [`Error::ReadLine`] if reading a line fails.
    /// - [`Error::Exec`] if the `Exec` value can't be split into words.
    pub fn from_reader<R: BufRead>(mut reader: R, origin: &Path) -> Result<Self> {
        let mut fields = Self::default();
        let mut line = String::with_capacity(256);

        while reader
            .read_line(&mut line)
            .map_err(|source| Error::ReadLine {
                path: origin.to_path_buf(),
                source,
            })?
            != 0
        {
            if let Some(unit_line) = parse_unit_line(&line) {
                fields.apply(unit_line, origin)?;
            }

            line.clear();
        }

        Ok(fields)
    }

    /// Records a single parsed line.
    ///
    /// Names are overwritten by every `PodName` or `ContainerName`. All other keys keep
    /// their first value.
    fn apply(&mut self, line: UnitLine<'_>, origin: &Path) -> Result<()> {
        let UnitLine { key, value } = line;
        let recorded = match key {
            UnitKey::PodName | UnitKey::ContainerName => {
                self.name = Some(value.to_owned());
                true
            }
            UnitKey::SourcePath => set_once(&mut self.source_path, value),
            UnitKey::Image => set_once(&mut self.image, value),
            UnitKey::Pod => set_once(&mut self.pod, value),
            UnitKey::Exec if self.exec.is_none() => {
                let words = split_words(value).map_err(|source| Error::Exec {
                    path: origin.to_path_buf(),
                    value: value.to_owned(),
                    source,
                })?;
                self.exec = Some(words);
                true
            }
            UnitKey::Exec => false,
        };

        if !recorded {
            log::trace!("Ignoring repeated `{key}` in `{}`", origin.display());
        }

        Ok(())
    }
}

/// Stores `value` unless the slot is already set. Returns whether it was stored.
fn set_once(slot: &mut Option<String>, value: &str) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(value.to_owned());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::SplitError;
    use std::io::Cursor;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fields_from(contents: &str) -> Result<UnitFields> {
        UnitFields::from_reader(Cursor::new(contents.as_bytes().to_vec()), Path::new("/dummy"))
    }

    #[test]
    fn test_extract_generated_container_unit() {
        let input = "\
# Automatically generated by /usr/lib/systemd/system-generators/podman-system-generator
[X-Container]
Image=nginx:latest
Exec=/usr/bin/podman run nginx

[Unit]
SourcePath=/etc/containers/systemd/web.container
RequiresMountsFor=%t/containers

[Service]
ExecStart=/usr/bin/podman run --name=systemd-%N --cidfile=%t/%N.cid nginx:latest
";
        let fields = fields_from(input).unwrap();
        assert_eq!(
            fields,
            UnitFields {
                source_path: Some("/etc/containers/systemd/web.container".to_owned()),
                name: None,
                exec: Some(vec![
                    "/usr/bin/podman".to_owned(),
                    "run".to_owned(),
                    "nginx".to_owned()
                ]),
                image: Some("nginx:latest".to_owned()),
                pod: None,
            }
        );
    }

    #[test]
    fn test_exec_quoting() {
        let fields = fields_from("Exec=/usr/bin/app --flag \"quoted value\"\n").unwrap();
        assert_eq!(
            fields.exec.unwrap(),
            vec!["/usr/bin/app", "--flag", "quoted value"]
        );
    }

    #[test]
    fn test_exec_single_quotes_and_escapes() {
        let fields = fields_from("Exec=sh -c 'echo hi' a\\ b\n").unwrap();
        assert_eq!(fields.exec.unwrap(), vec!["sh", "-c", "echo hi", "a b"]);
    }

    #[test]
    fn test_exec_unbalanced_quote() {
        let err = fields_from("Exec=/usr/bin/app \"oops\n").unwrap_err();
        match err {
            Error::Exec {
                path,
                value,
                source,
            } => {
                assert_eq!(path, Path::new("/dummy"));
                assert_eq!(value, "/usr/bin/app \"oops");
                assert_eq!(source, SplitError::NoClosingQuotation);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_exec_keeps_hash_words() {
        let fields = fields_from("Exec=/usr/bin/app #tag --verbose\n").unwrap();
        assert_eq!(
            fields.exec.unwrap(),
            vec!["/usr/bin/app", "#tag", "--verbose"]
        );
    }

    #[test]
    fn test_exec_backslash_in_double_quotes() {
        let fields = fields_from("Exec=echo \"a\\$b\" \"say \\\"hi\\\"\"\n").unwrap();
        assert_eq!(fields.exec.unwrap(), vec!["echo", "a\\$b", "say \"hi\""]);
    }

    #[test]
    fn test_exec_trailing_backslash() {
        let err = fields_from("Exec=/usr/bin/app \\\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Exec {
                source: SplitError::NoEscapedCharacter,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_exec_is_present() {
        let fields = fields_from("Exec=\n").unwrap();
        assert_eq!(fields.exec, Some(Vec::new()));
    }

    #[test]
    fn test_last_name_wins_across_aliases() {
        let fields = fields_from("ContainerName=first\nPodName=second\nContainerName=third\n")
            .unwrap();
        assert_eq!(fields.name.as_deref(), Some("third"));
    }

    #[test]
    fn test_first_value_wins_for_other_keys() {
        let input = "\
SourcePath=/a.container
SourcePath=/b.container
Image=one
Image=two
Pod=first-pod.service
Pod=second-pod.service
Exec=first
Exec=second \"unbalanced
";
        let fields = fields_from(input).unwrap();
        assert_eq!(fields.source_path.as_deref(), Some("/a.container"));
        assert_eq!(fields.image.as_deref(), Some("one"));
        assert_eq!(fields.pod.as_deref(), Some("first-pod.service"));
        assert_eq!(fields.exec.unwrap(), vec!["first"]);
    }

    #[test]
    fn test_empty_value_differs_from_absent() {
        let fields = fields_from("Image=\n").unwrap();
        assert_eq!(fields.image.as_deref(), Some(""));
        assert_eq!(fields.pod, None);
    }

    #[test]
    fn test_malformed_lines_are_ignored() {
        let fields = fields_from("garbage\n[Unit]\nSourcePath\n=value\n").unwrap();
        assert_eq!(fields, UnitFields::default());
    }

    #[test]
    fn test_last_line_without_newline() {
        let fields = fields_from("Pod=mypod-pod.service").unwrap();
        assert_eq!(fields.pod.as_deref(), Some("mypod-pod.service"));
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let reader = Cursor::new(vec![b'I', b'=', 0xff, 0xfe, b'\n']);
        let err = UnitFields::from_reader(reader, Path::new("/dummy")).unwrap_err();
        assert!(matches!(err, Error::ReadLine { .. }));
    }

    #[test]
    fn test_from_path() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "SourcePath=/etc/containers/systemd/mypod.pod").unwrap();
        writeln!(tmp, "PodName=backend").unwrap();

        let fields = UnitFields::from_path(tmp.path()).unwrap();
        assert_eq!(
            fields.source_path.as_deref(),
            Some("/etc/containers/systemd/mypod.pod")
        );
        assert_eq!(fields.name.as_deref(), Some("backend"));
    }

    #[test]
    fn test_from_missing_path() {
        let err = UnitFields::from_path("/definitely/does/not/exist.service").unwrap_err();
        assert!(matches!(err, Error::FileOpen(_)));
    }
}
