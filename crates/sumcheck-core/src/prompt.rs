//! Line input for the interactive session.

use crate::error::{Error, Result};
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Read one line and trim surrounding whitespace.
///
/// End of input counts as a failed read: the session cannot continue
/// without an answer.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Err(Error::InvalidInput { source: None }),
        Ok(_) => Ok(line.trim().to_string()),
        Err(e) => Err(Error::InvalidInput { source: Some(e) }),
    }
}

/// Turn the text a terminal pastes for a dropped file into a path.
///
/// A line that already names something on disk is used as typed. Otherwise
/// the quoting terminals add is undone: one pair of surrounding quotes, and
/// on Unix backslash escapes such as `\ `.
pub fn dropped_path(line: &str) -> PathBuf {
    let literal = Path::new(line);
    if fs::symlink_metadata(literal).is_ok() {
        return literal.to_path_buf();
    }
    unquote(line, cfg!(unix))
}

fn unquote(line: &str, backslash_escapes: bool) -> PathBuf {
    for quote in ['\'', '"'] {
        if line.len() >= 2 && line.starts_with(quote) && line.ends_with(quote) {
            return PathBuf::from(&line[1..line.len() - 1]);
        }
    }
    if !backslash_escapes {
        return PathBuf::from(line);
    }

    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
                continue;
            }
        }
        out.push(c);
    }
    PathBuf::from(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    #[test]
    fn reads_trimmed_lines_in_order() {
        let mut input = Cursor::new("  /tmp/file.iso \r\nABCdef\n");
        assert_eq!(read_line(&mut input).unwrap(), "/tmp/file.iso");
        assert_eq!(read_line(&mut input).unwrap(), "ABCdef");
    }

    #[test]
    fn empty_line_is_returned_as_empty() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_line(&mut input).unwrap(), "");
    }

    #[test]
    fn last_line_without_newline() {
        let mut input = Cursor::new("deadbeef");
        assert_eq!(read_line(&mut input).unwrap(), "deadbeef");
    }

    #[test]
    fn end_of_input_is_invalid() {
        let mut input = Cursor::new("");
        assert!(matches!(
            read_line(&mut input),
            Err(Error::InvalidInput { source: None })
        ));
    }

    #[test]
    fn read_error_is_invalid() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
        }
        let mut input = io::BufReader::new(Broken);
        assert!(matches!(
            read_line(&mut input),
            Err(Error::InvalidInput { source: Some(_) })
        ));
    }

    #[test]
    fn non_utf8_is_invalid() {
        let mut input = Cursor::new(vec![0xff, 0xfe, b'\n']);
        assert!(matches!(read_line(&mut input), Err(Error::InvalidInput { .. })));
    }

    #[test]
    fn quotes_and_escapes_are_undone() {
        assert_eq!(unquote("/plain/path", true), PathBuf::from("/plain/path"));
        assert_eq!(
            unquote("'/home/me/My Files/a.iso'", true),
            PathBuf::from("/home/me/My Files/a.iso")
        );
        assert_eq!(
            unquote("\"/home/me/My Files/a.iso\"", false),
            PathBuf::from("/home/me/My Files/a.iso")
        );
        assert_eq!(
            unquote("/home/me/My\\ Files/a\\(1\\).iso", true),
            PathBuf::from("/home/me/My Files/a(1).iso")
        );
        assert_eq!(unquote("'", true), PathBuf::from("'"));
        assert_eq!(unquote("", true), PathBuf::from(""));
    }

    #[test]
    fn windows_paths_keep_backslashes() {
        for path in [
            r"C:\Users\me\a.iso",
            r"C:\_build\.cache\a.iso",
            r"\\server\share\a.iso",
        ] {
            assert_eq!(unquote(path, false), PathBuf::from(path));
        }
    }

    #[test]
    fn missing_path_falls_back_to_unquoting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("My Files.iso");
        assert_eq!(dropped_path(&format!("'{}'", path.display())), path);
    }

    #[cfg(unix)]
    #[test]
    fn existing_path_is_used_as_typed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(r"back\-slash.txt");
        std::fs::write(&path, b"abc").unwrap();
        let line = path.to_str().unwrap();
        assert_eq!(dropped_path(line), path);

        let quoted = dir.path().join("'quoted'");
        std::fs::write(&quoted, b"abc").unwrap();
        assert_eq!(dropped_path(quoted.to_str().unwrap()), quoted);
    }
}
