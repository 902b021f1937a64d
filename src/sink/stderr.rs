// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::Write;

use crate::Error;
use crate::Level;
use crate::sink::Sink;

/// A sink that writes one `"<Level>: <message>"` line per call to stderr.
///
/// This is the sink behind [`LoggerFactory::new`](crate::LoggerFactory::new)'s default logger.
///
/// # Examples
///
/// ```
/// use logshim::Logger;
/// use logshim::sink::Stderr;
///
/// let logger = Logger::new(Stderr::default());
/// logger.warning("disk almost full", &logshim::context! {}).unwrap();
/// // stderr: "Warning: disk almost full"
/// ```
#[derive(Debug, Default)]
pub struct Stderr {
    #[cfg(feature = "colored")]
    color: Option<crate::color::LevelColor>,
}

impl Stderr {
    /// Paint the level name with the given colors.
    #[cfg(feature = "colored")]
    pub fn with_color(mut self, color: crate::color::LevelColor) -> Self {
        self.color = Some(color);
        self
    }

    fn format_line(&self, level: Level, message: &str) -> String {
        #[cfg(feature = "colored")]
        if let Some(color) = &self.color {
            return format!("{}: {message}\n", color.colorize_level(level));
        }

        format!("{}: {message}\n", level.title())
    }

    fn write_line(&self, w: &mut impl Write, level: Level, message: &str) -> Result<(), Error> {
        let line = self.format_line(level, message);
        w.write_all(line.as_bytes())?;
        Ok(())
    }
}

impl Sink for Stderr {
    fn emit(&self, level: Level, message: &str) -> Result<(), Error> {
        self.write_line(&mut std::io::stderr().lock(), level, message)
    }

    fn flush(&self) -> Result<(), Error> {
        std::io::stderr().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_line_format() {
        let stderr = Stderr::default();
        assert_eq!(
            stderr.format_line(Level::Warning, "disk almost full"),
            "Warning: disk almost full\n"
        );
        assert_eq!(stderr.format_line(Level::Emergency, ""), "Emergency: \n");
    }

    #[test]
    fn test_emit_and_flush() {
        let stderr = Stderr::default();
        stderr.emit(Level::Debug, "written to stderr").unwrap();
        stderr.flush().unwrap();
    }

    #[test]
    fn test_write_line() {
        let mut buf = Vec::new();
        let stderr = Stderr::default();
        stderr.write_line(&mut buf, Level::Notice, "a").unwrap();
        stderr.write_line(&mut buf, Level::Critical, "b").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Notice: a\nCritical: b\n");
    }

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let err = Stderr::default()
            .write_line(&mut Closed, Level::Error, "lost")
            .unwrap_err();
        assert!(matches!(&err, Error::Io(e) if e.kind() == io::ErrorKind::BrokenPipe));
        insta::assert_snapshot!(err, @"failed to perform io: stream closed");
    }

    #[cfg(feature = "colored")]
    #[test]
    fn test_colored_line_keeps_message() {
        let stderr = Stderr::default().with_color(crate::color::LevelColor::default());
        let line = stderr.format_line(Level::Error, "boom");
        assert!(line.contains("Error"));
        assert!(line.ends_with(": boom\n"));
    }
}
