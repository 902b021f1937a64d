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
use std::sync::Arc;

use crate::Context;
use crate::Error;
use crate::Level;
use crate::format;
use crate::sink::Sink;

/// The uniform logger.
///
/// A `Logger` owns exactly one [`Sink`], fixed at construction. Every call validates the level,
/// interpolates the template with the context, and forwards `(level, message)` to the sink.
/// Cloning is cheap and shares the sink.
///
/// # Examples
///
/// ```
/// use logshim::Logger;
/// use logshim::sink::Testing;
///
/// let testing = Testing::default();
/// let logger = Logger::new(testing.clone());
///
/// let ctx = logshim::context! { "id" => 42, "action" => "login" };
/// logger.log("debug", "user {id} did {action}", &ctx).unwrap();
///
/// let err = logger.log("wat", "x", &ctx).unwrap_err();
/// assert_eq!(err.invalid_level(), Some("wat"));
/// assert_eq!(testing.take().len(), 1);
/// ```
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn Sink>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("sink", &self.sink).finish()
    }
}

impl Logger {
    /// Create a logger that forwards to `sink`.
    pub fn new(sink: impl Sink) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    /// Create a logger over an already shared sink.
    pub fn from_arc(sink: Arc<dyn Sink>) -> Self {
        Self { sink }
    }

    /// Whether both loggers forward to the same sink instance.
    pub fn same_sink(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.sink, &other.sink)
    }

    /// Log a message at `level`.
    ///
    /// # Errors
    ///
    /// Return [`Error::InvalidLevel`] if `level` is not one of the eight level tokens; the sink
    /// is not called in that case. Errors of the sink itself are returned unchanged.
    pub fn log(
        &self,
        level: impl AsRef<str>,
        template: &str,
        context: &Context<'_>,
    ) -> Result<(), Error> {
        let (level, message) = format::format_message(level.as_ref(), template, context)?;
        self.sink.emit(level, &message)
    }

    /// Flush the sink.
    pub fn flush(&self) -> Result<(), Error> {
        self.sink.flush()
    }

    /// Log at [`Level::Emergency`].
    pub fn emergency(&self, template: &str, context: &Context<'_>) -> Result<(), Error> {
        self.log(Level::Emergency, template, context)
    }

    /// Log at [`Level::Alert`].
    pub fn alert(&self, template: &str, context: &Context<'_>) -> Result<(), Error> {
        self.log(Level::Alert, template, context)
    }

    /// Log at [`Level::Critical`].
    pub fn critical(&self, template: &str, context: &Context<'_>) -> Result<(), Error> {
        self.log(Level::Critical, template, context)
    }

    /// Log at [`Level::Error`].
    pub fn error(&self, template: &str, context: &Context<'_>) -> Result<(), Error> {
        self.log(Level::Error, template, context)
    }

    /// Log at [`Level::Warning`].
    pub fn warning(&self, template: &str, context: &Context<'_>) -> Result<(), Error> {
        self.log(Level::Warning, template, context)
    }

    /// Log at [`Level::Notice`].
    pub fn notice(&self, template: &str, context: &Context<'_>) -> Result<(), Error> {
        self.log(Level::Notice, template, context)
    }

    /// Log at [`Level::Info`].
    pub fn info(&self, template: &str, context: &Context<'_>) -> Result<(), Error> {
        self.log(Level::Info, template, context)
    }

    /// Log at [`Level::Debug`].
    pub fn debug(&self, template: &str, context: &Context<'_>) -> Result<(), Error> {
        self.log(Level::Debug, template, context)
    }
}
