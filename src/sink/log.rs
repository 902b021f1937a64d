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

use std::fmt;

use crate::Error;
use crate::Level;
use crate::sink::Sink;

/// A sink that forwards to a [`log::Log`] implementation.
///
/// The eight levels are folded onto the five `log` levels; the original token is attached to the
/// record as the `severity` key-value.
///
/// # Examples
///
/// ```
/// use logshim::Logger;
/// use logshim::sink::LogSink;
///
/// // forward to whatever is installed behind the `log` macros
/// let logger = Logger::new(LogSink::global().with_target("my_app"));
/// logger.notice("ready", &logshim::context! {}).unwrap();
/// ```
pub struct LogSink {
    log: Option<Box<dyn log::Log>>,
    target: String,
}

impl LogSink {
    /// Forward to the given logger.
    pub fn new(log: impl log::Log + 'static) -> Self {
        Self {
            log: Some(Box::new(log)),
            target: "logshim".to_string(),
        }
    }

    /// Forward to the global logger returned by [`log::logger`].
    pub fn global() -> Self {
        Self {
            log: None,
            target: "logshim".to_string(),
        }
    }

    /// Set the target of forwarded records.
    ///
    /// Default to `"logshim"`.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    fn log(&self) -> &dyn log::Log {
        match &self.log {
            Some(log) => log.as_ref(),
            None => log::logger(),
        }
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink")
            .field("global", &self.log.is_none())
            .field("target", &self.target)
            .finish()
    }
}

impl Sink for LogSink {
    fn emit(&self, level: Level, message: &str) -> Result<(), Error> {
        let logger = self.log();
        let metadata = log::Metadata::builder()
            .level(level.into())
            .target(&self.target)
            .build();
        if !logger.enabled(&metadata) {
            return Ok(());
        }

        let severity: &[(&str, &str)] = &[("severity", level.as_str())];
        logger.log(
            &log::Record::builder()
                .metadata(metadata)
                .args(format_args!("{message}"))
                .key_values(&severity)
                .build(),
        );
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        self.log().flush();
        Ok(())
    }
}
