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

use std::cell::Cell;
use std::io;
use std::io::Write;

use crate::Context;
use crate::Error;
use crate::Level;
use crate::Logger;

impl From<Level> for log::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Emergency | Level::Alert | Level::Critical | Level::Error => Self::Error,
            Level::Warning => Self::Warn,
            Level::Notice | Level::Info => Self::Info,
            Level::Debug => Self::Debug,
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warning,
            log::Level::Info => Self::Info,
            log::Level::Debug | log::Level::Trace => Self::Debug,
        }
    }
}

impl Logger {
    /// Install this logger behind the `log` macros.
    ///
    /// A record whose message is a plain string literal, such as
    /// `log::info!(id = 42; "user {{id}}")`, is interpolated with the record's key-values. A
    /// message built from format arguments is forwarded as formatted, without interpolation, so
    /// placeholders inside formatted data are never substituted.
    ///
    /// Records emitted while this logger is already handling a record on the same thread (for
    /// example through a [`LogSink`](crate::sink::LogSink) that forwards back to the global
    /// logger) are reported on stderr and dropped.
    ///
    /// # Errors
    ///
    /// Return an error if a global logger has already been set.
    ///
    /// # Examples
    ///
    /// ```
    /// use logshim::Logger;
    /// use logshim::sink::Stderr;
    ///
    /// if Logger::new(Stderr::default()).try_apply().is_err() {
    ///     eprintln!("failed to set logger");
    /// }
    /// ```
    pub fn try_apply(self) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }

    /// Install this logger behind the `log` macros.
    ///
    /// # Panics
    ///
    /// Panic if the global logger has already been set.
    pub fn apply(self) {
        self.try_apply()
            .expect("Logger::apply must be called before the global logger initialized");
    }
}

struct ContextVisitor<'a, 'kvs> {
    context: &'a mut Context<'kvs>,
}

impl<'kvs> log::kv::VisitSource<'kvs> for ContextVisitor<'_, 'kvs> {
    fn visit_pair(
        &mut self,
        key: log::kv::Key<'kvs>,
        value: log::kv::Value<'kvs>,
    ) -> Result<(), log::kv::Error> {
        self.context.insert(key.as_str().to_owned(), value.to_string());
        Ok(())
    }
}

thread_local! {
    static IN_BRIDGE: Cell<bool> = const { Cell::new(false) };
}

// Marks the current thread as handling a bridged record until dropped.
struct BridgeGuard;

impl BridgeGuard {
    fn enter() -> Option<BridgeGuard> {
        if IN_BRIDGE.with(|flag| flag.replace(true)) {
            None
        } else {
            Some(BridgeGuard)
        }
    }
}

impl Drop for BridgeGuard {
    fn drop(&mut self) {
        IN_BRIDGE.with(|flag| flag.set(false));
    }
}

impl log::Log for Logger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let Some(_guard) = BridgeGuard::enter() else {
            let err = anyhow::anyhow!("recursive logging detected; the record is dropped");
            handle_error(record, Error::Sink(err));
            return;
        };

        let level = Level::from(record.level());
        let Some(template) = record.args().as_str() else {
            let message = record.args().to_string();
            if let Err(err) = Logger::log(self, level, &message, &Context::new()) {
                handle_error(record, err);
            }
            return;
        };

        let mut context = Context::new();
        let mut visitor = ContextVisitor {
            context: &mut context,
        };
        if let Err(err) = record.key_values().visit(&mut visitor) {
            handle_error(record, Error::Sink(err.into()));
            return;
        }

        if let Err(err) = Logger::log(self, level, template, &context) {
            handle_error(record, err);
        }
    }

    fn flush(&self) {
        if let Err(err) = Logger::flush(self) {
            let _ = writeln!(io::stderr(), "Error flushing logger: {err}");
        }
    }
}

fn handle_error(record: &log::Record, error: Error) {
    let _ = write!(
        io::stderr(),
        r###"
Error perform logging.
    Attempted to log: {args}
    Record: {record:?}
    Error: {error}
"###,
        args = record.args(),
        record = record,
        error = error,
    );
}
