use std::io::{self, BufRead};

/// Yields one logical line at a time; `None` means end of input.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads newline-terminated lines from any buffered reader.
///
/// The newline is not part of the returned text. A final line without a
/// newline is still returned. Invalid UTF-8 is replaced rather than
/// rejected.
pub struct ReaderSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &str) -> Vec<String> {
        let mut source = ReaderSource::new(Cursor::new(input.as_bytes().to_vec()));
        let mut lines = Vec::new();
        while let Some(line) = source.next_line().unwrap() {
            lines.push(line);
        }
        lines
    }

    #[test]
    fn test_lines_without_delimiter() {
        assert_eq!(collect("ls\npwd\n"), vec!["ls", "pwd"]);
    }

    #[test]
    fn test_empty_line_is_not_end_of_input() {
        assert_eq!(collect("\n\nexit\n"), vec!["", "", "exit"]);
    }

    #[test]
    fn test_partial_last_line() {
        assert_eq!(collect("echo a\necho b"), vec!["echo a", "echo b"]);
        assert!(collect("").is_empty());
    }
}
