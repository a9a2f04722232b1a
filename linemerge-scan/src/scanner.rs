//! Windowed line scanner
//!
//! [`LineScanner`] turns one seekable byte stream into a lazy sequence of
//! lines. Memory stays bounded by the two-page [`Window`] plus whatever the
//! longest line needs in the [`LineAccumulator`], independent of file size.
//!
//! # Example
//!
//! ```rust
//! use linemerge_scan::LineScanner;
//! use std::io::Cursor;
//!
//! let mut scanner = LineScanner::new(Cursor::new("b\na\nc")).unwrap();
//! let lines: Vec<String> = scanner.by_ref().collect::<Result<_, _>>().unwrap();
//! assert_eq!(lines, ["b", "a", "c"]);
//!
//! scanner.reset().unwrap();
//! assert_eq!(scanner.next().unwrap().unwrap(), "b");
//! ```

use crate::accumulator::LineAccumulator;
use crate::config::{IoErrorPolicy, ScannerConfig};
use crate::error::{Result, ScanError};
use crate::terminator::Terminator;
use crate::window::Window;
use std::io::{self, Read, Seek, SeekFrom};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Forward-only line reader over a seekable stream
///
/// Lines are produced in stream order with the terminator removed and
/// decoded as UTF-8. After the last line every further request yields
/// `None`. Reaching the end never releases the stream; drop the scanner or
/// call [`close`](Self::close) for that.
#[derive(Debug)]
pub struct LineScanner<R> {
    reader: R,
    origin: u64,
    config: ScannerConfig,
    /// `None` until the first pull
    buffers: Option<ScanBuffers>,
    finished: bool,
    lines_read: u64,
}

/// Per-scanner state created on first pull
#[derive(Debug)]
struct ScanBuffers {
    window: Window,
    line: LineAccumulator,
    /// Window offset where the next line begins
    cursor: usize,
}

impl<R: Read + Seek> LineScanner<R> {
    /// Create a scanner with the default configuration
    pub fn new(reader: R) -> Result<Self> {
        Self::with_config(reader, ScannerConfig::default())
    }

    /// Create a scanner with an explicit configuration
    ///
    /// Fails with [`ScanError::NotSeekable`] before reading anything if the
    /// stream cannot report its position.
    pub fn with_config(mut reader: R, config: ScannerConfig) -> Result<Self> {
        config.validate()?;
        let origin = reader.stream_position().map_err(ScanError::NotSeekable)?;

        Ok(Self {
            reader,
            origin,
            config,
            buffers: None,
            finished: false,
            lines_read: 0,
        })
    }

    /// Rewind to the position the stream had at construction
    ///
    /// On failure the scanner is left exactly as it was.
    pub fn reset(&mut self) -> Result<()> {
        self.reader
            .seek(SeekFrom::Start(self.origin))
            .map_err(ScanError::ResetUnsupported)?;

        log::debug!(
            "scanner reset to offset {} after {} lines",
            self.origin,
            self.lines_read
        );
        self.buffers = None;
        self.finished = false;
        self.lines_read = 0;
        Ok(())
    }
}

impl<R: Read> LineScanner<R> {
    /// Produce the next line, or `None` once the stream is exhausted
    pub fn next_line(&mut self) -> Result<Option<String>> {
        if self.finished {
            return Ok(None);
        }

        match self.scan_line() {
            Ok(true) => {}
            Ok(false) => {
                self.finished = true;
                return Ok(None);
            }
            Err(e) => {
                self.finished = true;
                return Err(e);
            }
        }

        self.lines_read += 1;
        let Some(buffers) = self.buffers.as_ref() else {
            return Ok(None);
        };
        match std::str::from_utf8(buffers.line.as_bytes()) {
            Ok(line) => Ok(Some(line.to_owned())),
            Err(_) => Err(ScanError::InvalidUtf8 {
                line: self.lines_read,
            }),
        }
    }

    /// Locate the next line and leave its bytes in the accumulator
    fn scan_line(&mut self) -> Result<bool> {
        let policy = self.config.io_error_policy;
        let lines_read = self.lines_read;

        if self.buffers.is_none() {
            let buffers = ScanBuffers::prime(&mut self.reader, &self.config, lines_read)?;
            self.buffers = Some(buffers);
        }

        let Self {
            reader,
            config,
            buffers,
            ..
        } = self;
        let Some(buffers) = buffers.as_mut() else {
            return Ok(false);
        };
        buffers.scan(reader, &config.terminator, policy, lines_read)
    }

    /// Number of lines produced since construction or the last reset
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Whether the scanner has reported the end of its stream
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Scanner configuration
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Borrow the underlying stream
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Release the scanner and hand back the underlying stream
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Release the scanner and its stream
    pub fn close(self) {
        log::trace!("closing scanner after {} lines", self.lines_read);
        drop(self.reader);
    }
}

impl<R: Read> Iterator for LineScanner<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

impl ScanBuffers {
    /// Fill the window with its first two pages
    fn prime<R: Read>(reader: &mut R, config: &ScannerConfig, lines_read: u64) -> Result<Self> {
        let mut window = Window::new(config.page_size);
        let filled = window.fill(reader);
        absorb_io(filled, &mut window, config.io_error_policy, lines_read)?;

        let cursor = if config.strip_bom && window.valid().starts_with(UTF8_BOM) {
            UTF8_BOM.len()
        } else {
            0
        };
        log::debug!(
            "primed {} byte window ({} valid, eof: {})",
            window.capacity(),
            window.len(),
            window.is_eof()
        );

        Ok(Self {
            window,
            line: LineAccumulator::with_capacity(config.initial_line_capacity),
            cursor,
        })
    }

    fn scan<R: Read>(
        &mut self,
        reader: &mut R,
        terminator: &Terminator,
        policy: IoErrorPolicy,
        lines_read: u64,
    ) -> Result<bool> {
        let page = self.window.page_size();

        // A line that ended exactly at the edge of a full window leaves the
        // cursor there while the stream still has data.
        while self.cursor >= self.window.len() && self.cursor >= page && !self.window.is_eof() {
            self.cycle(reader, policy, lines_read)?;
        }

        if self.cursor >= self.window.len() {
            return Ok(false);
        }

        self.line.clear();
        let mut span = 0;
        loop {
            let pos = self.cursor + span;
            let valid = self.window.valid();
            let at_end = pos >= valid.len();

            if at_end || terminator.matches_at(valid, pos) {
                self.line.append(&valid[self.cursor..pos]);
                self.cursor = if at_end { pos } else { pos + terminator.len() };
                return Ok(true);
            }

            if pos > page {
                // Commit what the upcoming cycle would discard, then test the
                // same position again: a terminator cut off by the window
                // edge is whole once the next page is in.
                self.line.append(&valid[self.cursor..pos]);
                self.cursor = pos;
                span = 0;
                self.cycle(reader, policy, lines_read)?;
                continue;
            }

            span += 1;
        }
    }

    fn cycle<R: Read>(&mut self, reader: &mut R, policy: IoErrorPolicy, lines_read: u64) -> Result<()> {
        let result = self.window.cycle(reader);
        self.cursor -= self.window.page_size();
        log::trace!(
            "cycled window: {} valid bytes, cursor at {}",
            self.window.len(),
            self.cursor
        );
        absorb_io(result, &mut self.window, policy, lines_read)
    }
}

/// Apply the configured policy to the outcome of a page read
fn absorb_io(
    result: io::Result<()>,
    window: &mut Window,
    policy: IoErrorPolicy,
    lines_read: u64,
) -> Result<()> {
    match (result, policy) {
        (Ok(()), _) => Ok(()),
        (Err(source), IoErrorPolicy::Propagate) => Err(ScanError::Io { lines_read, source }),
        (Err(source), IoErrorPolicy::TreatAsEof) => {
            log::warn!("read failed after {lines_read} lines, treating as end of stream: {source}");
            window.mark_eof();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn config(page_size: usize, terminator: &str) -> ScannerConfig {
        ScannerConfig::builder()
            .page_size(page_size)
            .terminator(Terminator::try_from(terminator).unwrap())
            .initial_line_capacity(2)
            .build()
            .unwrap()
    }

    fn scan_all(text: &str, page_size: usize, terminator: &str) -> Vec<String> {
        let scanner =
            LineScanner::with_config(Cursor::new(text.as_bytes().to_vec()), config(page_size, terminator))
                .unwrap();
        scanner.collect::<Result<Vec<_>>>().unwrap()
    }

    #[test]
    fn test_simple_lines() {
        assert_eq!(scan_all("a\nbb\nccc", 4, "\n"), ["a", "bb", "ccc"]);
    }

    #[test]
    fn test_empty_stream_yields_nothing() {
        assert!(scan_all("", 4, "\n").is_empty());
    }

    #[test]
    fn test_trailing_terminator_adds_no_empty_line() {
        assert_eq!(scan_all("a\nb\n", 4, "\n"), ["a", "b"]);
    }

    #[test]
    fn test_empty_lines_preserved() {
        assert_eq!(scan_all("\n\na\n\nb", 4, "\n"), ["", "", "a", "", "b"]);
        assert_eq!(scan_all("\n", 4, "\n"), [""]);
    }

    #[test]
    fn test_unterminated_final_line() {
        assert_eq!(scan_all("first\nlast", 4, "\n"), ["first", "last"]);
    }

    #[test]
    fn test_crlf_terminator() {
        assert_eq!(scan_all("ab\r\ncd\r\nef", 4, "\r\n"), ["ab", "cd", "ef"]);
    }

    #[test]
    fn test_lone_cr_is_content_under_crlf() {
        assert_eq!(scan_all("a\rb\r\nc\r", 4, "\r\n"), ["a\rb", "c\r"]);
    }

    #[test]
    fn test_terminator_ending_at_window_edge() {
        // Page of 3: "abcd\r\n" fills the window exactly and the terminator
        // match happens one past the first page, leaving the cursor at the
        // window's end while "ef" is still unread.
        assert_eq!(scan_all("abcd\r\nef", 3, "\r\n"), ["abcd", "ef"]);
        assert_eq!(scan_all("abcd\r\n", 3, "\r\n"), ["abcd"]);
    }

    #[test]
    fn test_terminator_straddling_window_end() {
        // Page of 3: the second line starts on the window's last byte, so its
        // terminator is only half loaded until the window cycles.
        assert_eq!(scan_all("abc\r\n\r\nx", 3, "\r\n"), ["abc", "", "x"]);
        assert_eq!(scan_all("abc\r\nd\r\nx", 3, "\r\n"), ["abc", "d", "x"]);
        assert_eq!(scan_all("ab\naba\nabac", 4, "aba"), ["ab\n", "\n", "c"]);
    }

    #[test]
    fn test_line_longer_than_page() {
        let long = "x".repeat(37);
        let text = format!("short\n{long}\ntail");
        assert_eq!(scan_all(&text, 4, "\n"), ["short", long.as_str(), "tail"]);
    }

    #[test]
    fn test_multibyte_char_across_page_edge() {
        let text = "ab\u{3042}\u{3044}\ncd\u{1F600}e";
        assert_eq!(scan_all(text, 4, "\n"), ["ab\u{3042}\u{3044}", "cd\u{1F600}e"]);
    }

    #[test]
    fn test_bom_stripped_by_default() {
        assert_eq!(scan_all("\u{FEFF}one\ntwo", 4, "\n"), ["one", "two"]);
    }

    #[test]
    fn test_bom_kept_when_disabled() {
        let config = ScannerConfig::builder()
            .page_size(4)
            .strip_bom(false)
            .build()
            .unwrap();
        let scanner = LineScanner::with_config(Cursor::new("\u{FEFF}one"), config).unwrap();
        let lines: Vec<String> = scanner.collect::<Result<_>>().unwrap();
        assert_eq!(lines, ["\u{FEFF}one"]);
    }

    #[test]
    fn test_invalid_utf8_reports_line_number() {
        let data = b"ok\n\xFF\xFE\nafter".to_vec();
        let mut scanner = LineScanner::with_config(Cursor::new(data), config(4, "\n")).unwrap();

        assert_eq!(scanner.next_line().unwrap().as_deref(), Some("ok"));
        assert!(matches!(
            scanner.next_line(),
            Err(ScanError::InvalidUtf8 { line: 2 })
        ));
        assert_eq!(scanner.next_line().unwrap().as_deref(), Some("after"));
    }

    #[test]
    fn test_exhausted_scanner_stays_exhausted() {
        let mut scanner = LineScanner::new(Cursor::new("only")).unwrap();
        assert_eq!(scanner.next_line().unwrap().as_deref(), Some("only"));
        assert!(scanner.next_line().unwrap().is_none());
        assert!(scanner.next_line().unwrap().is_none());
        assert!(scanner.is_finished());
        assert_eq!(scanner.lines_read(), 1);
    }

    #[test]
    fn test_lazy_until_first_pull() {
        let scanner = LineScanner::new(Cursor::new("data")).unwrap();
        assert!(scanner.buffers.is_none());
        assert_eq!(scanner.get_ref().position(), 0);
    }

    #[test]
    fn test_reset_reproduces_sequence() {
        let text = "delta\nalpha\n".repeat(20);
        let mut scanner = LineScanner::with_config(Cursor::new(text), config(8, "\n")).unwrap();

        let first: Vec<String> = scanner.by_ref().take(7).collect::<Result<_>>().unwrap();
        scanner.reset().unwrap();
        assert_eq!(scanner.lines_read(), 0);
        assert!(scanner.buffers.is_none());

        let full: Vec<String> = scanner.by_ref().collect::<Result<_>>().unwrap();
        assert_eq!(full.len(), 40);
        assert_eq!(&full[..7], &first[..]);
    }

    #[test]
    fn test_reset_returns_to_construction_offset() {
        let mut cursor = Cursor::new(b"skip\nkeep\nme".to_vec());
        cursor.set_position(5);

        let mut scanner = LineScanner::new(cursor).unwrap();
        let lines: Vec<String> = scanner.by_ref().collect::<Result<_>>().unwrap();
        assert_eq!(lines, ["keep", "me"]);

        scanner.reset().unwrap();
        assert_eq!(scanner.next_line().unwrap().as_deref(), Some("keep"));
    }

    /// Stream whose position can be read but which refuses to seek anywhere
    struct ForwardOnly {
        inner: Cursor<Vec<u8>>,
        seekable: bool,
    }

    impl Read for ForwardOnly {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.inner.read(buf)
        }
    }

    impl Seek for ForwardOnly {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            if self.seekable {
                return self.inner.seek(pos);
            }
            Err(io::Error::new(io::ErrorKind::Unsupported, "illegal seek"))
        }

        fn stream_position(&mut self) -> io::Result<u64> {
            Ok(self.inner.position())
        }
    }

    #[test]
    fn test_reset_failure_leaves_state_unchanged() {
        let stream = ForwardOnly {
            inner: Cursor::new(b"a\nb\nc".to_vec()),
            seekable: false,
        };
        let mut scanner = LineScanner::new(stream).unwrap();
        assert_eq!(scanner.next_line().unwrap().as_deref(), Some("a"));

        assert!(matches!(scanner.reset(), Err(ScanError::ResetUnsupported(_))));
        assert_eq!(scanner.lines_read(), 1);
        assert_eq!(scanner.next_line().unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn test_non_seekable_stream_rejected() {
        struct Pipe;
        impl Read for Pipe {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                panic!("must not read before rejecting the stream");
            }
        }
        impl Seek for Pipe {
            fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
                Err(io::Error::new(io::ErrorKind::Unsupported, "illegal seek"))
            }
        }

        assert!(matches!(
            LineScanner::new(Pipe),
            Err(ScanError::NotSeekable(_))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let bad = ScannerConfig {
            page_size: 1,
            ..ScannerConfig::default()
        };
        assert!(matches!(
            LineScanner::with_config(Cursor::new(""), bad),
            Err(ScanError::Config(_))
        ));
    }
}
