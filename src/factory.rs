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

//! Adapting backends into uniform [`Logger`]s.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::Error;
use crate::Level;
use crate::Logger;
use crate::legacy::LegacyLog;
use crate::sink::Callback;
use crate::sink::LegacySink;
use crate::sink::Stderr;

/// A function that receives a level and a message.
pub type LogFn = dyn Fn(Level, &str) + Send + Sync;

/// The backend shapes a [`LoggerFactory`] knows how to adapt.
#[derive(Clone)]
pub enum Backend {
    /// An already uniform logger; adapted as is.
    Logger(Logger),
    /// A function called with each level and message.
    Callable(Arc<LogFn>),
    /// A severity-numbered logger called with each message and its [`Priority`].
    ///
    /// [`Priority`]: crate::legacy::Priority
    Legacy(Arc<dyn LegacyLog>),
}

impl Backend {
    /// Wrap a function as a [`Backend::Callable`].
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(Level, &str) + Send + Sync + 'static,
    {
        Backend::Callable(Arc::new(f))
    }

    /// Wrap a severity-numbered logger as a [`Backend::Legacy`].
    pub fn legacy(log: impl LegacyLog) -> Self {
        Backend::Legacy(Arc::new(log))
    }
}

impl From<Logger> for Backend {
    fn from(logger: Logger) -> Self {
        Backend::Logger(logger)
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Logger(logger) => f.debug_tuple("Logger").field(logger).finish(),
            Backend::Callable(_) => f.write_str("Callable"),
            Backend::Legacy(_) => f.write_str("Legacy"),
        }
    }
}

/// A factory of uniform loggers.
///
/// The factory holds a default logger, returned whenever no backend is given. Unless one is
/// supplied with [`LoggerFactory::with_default`], it is a logger over [`Stderr`], built once when
/// the factory is created.
///
/// # Examples
///
/// ```
/// use logshim::Backend;
/// use logshim::LoggerFactory;
///
/// let factory = LoggerFactory::new();
/// let logger = factory.create_logger(Some(Backend::callable(|level, message| {
///     println!("{level}: {message}");
/// })));
/// logger.info("user {id} logged in", &logshim::context! { "id" => 42 }).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct LoggerFactory {
    default: Logger,
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerFactory {
    /// Create a factory whose default logger writes to stderr.
    pub fn new() -> Self {
        Self::with_default(Logger::new(Stderr::default()))
    }

    /// Create a factory with the given default logger.
    pub fn with_default(logger: Logger) -> Self {
        Self { default: logger }
    }

    /// The logger returned when no backend is given.
    pub fn default_logger(&self) -> &Logger {
        &self.default
    }

    /// Create a logger on top of `base`.
    ///
    /// * `None` yields the default logger.
    /// * [`Backend::Logger`] is returned unchanged.
    /// * [`Backend::Callable`] is called with every level and message.
    /// * [`Backend::Legacy`] is called with every message and the level's legacy priority.
    pub fn create_logger(&self, base: Option<Backend>) -> Logger {
        match base {
            None => self.default.clone(),
            Some(Backend::Logger(logger)) => logger,
            Some(Backend::Callable(f)) => Logger::new(Callback::from_arc(f)),
            Some(Backend::Legacy(log)) => Logger::new(LegacySink::from_arc(log)),
        }
    }

    /// Create a logger that calls `f` with every level and message.
    pub fn from_callable<F>(f: F) -> Logger
    where
        F: Fn(Level, &str) + Send + Sync + 'static,
    {
        Logger::new(Callback::new(f))
    }

    /// Create a logger on top of a severity-numbered logger.
    pub fn from_legacy(log: impl LegacyLog) -> Logger {
        Logger::new(LegacySink::new(log))
    }

    /// Adapt an already uniform logger, which is returned unchanged.
    pub fn from_logger(logger: Logger) -> Logger {
        logger
    }

    /// Create a logger on top of a value whose type is only known at runtime.
    ///
    /// The accepted types are checked in this order:
    ///
    /// 1. `()`, standing for an omitted backend: the default logger;
    /// 2. `Option<Backend>` and [`Backend`]: as [`create_logger`](Self::create_logger);
    /// 3. [`Logger`]: returned unchanged;
    /// 4. `fn(Level, &str)`, `Box<LogFn>` and `Arc<LogFn>`: called with every level and message;
    /// 5. `Box<dyn LegacyLog>` and `Arc<dyn LegacyLog>`: called with every message and priority.
    ///
    /// Closures have unnameable types; wrap them with [`Backend::callable`] or box them first.
    ///
    /// # Errors
    ///
    /// Return [`Error::UnsupportedBackend`] naming `T` for any other type. Nothing is called on
    /// `base` in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use logshim::Error;
    /// use logshim::LoggerFactory;
    ///
    /// let factory = LoggerFactory::new();
    /// assert!(factory.adapt(()).is_ok());
    /// assert!(matches!(factory.adapt(42u32), Err(Error::UnsupportedBackend("u32"))));
    /// ```
    pub fn adapt<T: Any>(&self, base: T) -> Result<Logger, Error> {
        let mut slot = Some(base);
        let slot: &mut dyn Any = &mut slot;

        if take::<()>(slot).is_some() {
            return Ok(self.create_logger(None));
        }
        if let Some(base) = take::<Option<Backend>>(slot) {
            return Ok(self.create_logger(base));
        }
        if let Some(base) = take::<Backend>(slot) {
            return Ok(self.create_logger(Some(base)));
        }
        if let Some(logger) = take::<Logger>(slot) {
            return Ok(Self::from_logger(logger));
        }
        if let Some(f) = take::<fn(Level, &str)>(slot) {
            return Ok(Self::from_callable(f));
        }
        if let Some(f) = take::<Box<LogFn>>(slot) {
            return Ok(self.create_logger(Some(Backend::Callable(Arc::from(f)))));
        }
        if let Some(f) = take::<Arc<LogFn>>(slot) {
            return Ok(self.create_logger(Some(Backend::Callable(f))));
        }
        if let Some(log) = take::<Box<dyn LegacyLog>>(slot) {
            return Ok(self.create_logger(Some(Backend::Legacy(Arc::from(log)))));
        }
        if let Some(log) = take::<Arc<dyn LegacyLog>>(slot) {
            return Ok(self.create_logger(Some(Backend::Legacy(log))));
        }

        Err(Error::UnsupportedBackend(std::any::type_name::<T>()))
    }
}

// `slot` is an `Option<T>`; this moves the value out if `T` is `U`.
fn take<U: Any>(slot: &mut dyn Any) -> Option<U> {
    slot.downcast_mut::<Option<U>>().and_then(Option::take)
}
