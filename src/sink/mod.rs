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

//! Destinations that receive a validated level and an interpolated message.

use std::fmt;

use crate::Error;
use crate::Level;

mod callback;
mod legacy;
mod log;
mod stderr;
mod testing;

pub use self::callback::Callback;
pub use self::legacy::LegacySink;
pub use self::log::LogSink;
pub use self::stderr::Stderr;
pub use self::testing::Testing;

/// The native call a [`Logger`](crate::Logger) forwards to.
pub trait Sink: fmt::Debug + Send + Sync + 'static {
    /// Deliver one message.
    fn emit(&self, level: Level, message: &str) -> Result<(), Error>;

    /// Flush any buffered messages.
    ///
    /// Default to a no-op.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}
