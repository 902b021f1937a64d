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

//! Severity-numbered loggers.
//!
//! Older logging systems identify severities by the syslog-style numeric codes `0` (emergency)
//! through `7` (debug). [`Priority`] is that numbering, and [`LegacyLog`] is the shape of a
//! logger that expects it.

use std::fmt;

use crate::Error;
use crate::Level;

/// A legacy numeric severity.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(i32)]
pub enum Priority {
    Emerg = 0,
    Alert = 1,
    Crit = 2,
    Err = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

impl Priority {
    /// The numeric code.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.code(), f)
    }
}

impl From<Level> for Priority {
    fn from(level: Level) -> Self {
        match level {
            Level::Emergency => Priority::Emerg,
            Level::Alert => Priority::Alert,
            Level::Critical => Priority::Crit,
            Level::Error => Priority::Err,
            Level::Warning => Priority::Warning,
            Level::Notice => Priority::Notice,
            Level::Info => Priority::Info,
            Level::Debug => Priority::Debug,
        }
    }
}

impl From<Priority> for Level {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Emerg => Level::Emergency,
            Priority::Alert => Level::Alert,
            Priority::Crit => Level::Critical,
            Priority::Err => Level::Error,
            Priority::Warning => Level::Warning,
            Priority::Notice => Level::Notice,
            Priority::Info => Level::Info,
            Priority::Debug => Level::Debug,
        }
    }
}

impl TryFrom<i32> for Priority {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Priority::Emerg),
            1 => Ok(Priority::Alert),
            2 => Ok(Priority::Crit),
            3 => Ok(Priority::Err),
            4 => Ok(Priority::Warning),
            5 => Ok(Priority::Notice),
            6 => Ok(Priority::Info),
            7 => Ok(Priority::Debug),
            _ => Err(Error::InvalidPriority(code)),
        }
    }
}

/// A logger that takes a message and a numeric severity.
///
/// Wrap one with [`LoggerFactory::from_legacy`](crate::LoggerFactory::from_legacy) to obtain a
/// uniform [`Logger`](crate::Logger).
pub trait LegacyLog: Send + Sync + 'static {
    /// Log `message` with the given priority.
    fn log(&self, message: &str, priority: Priority);
}

impl<T: LegacyLog + ?Sized> LegacyLog for Box<T> {
    fn log(&self, message: &str, priority: Priority) {
        (**self).log(message, priority)
    }
}

impl<T: LegacyLog + ?Sized> LegacyLog for std::sync::Arc<T> {
    fn log(&self, message: &str, priority: Priority) {
        (**self).log(message, priority)
    }
}
