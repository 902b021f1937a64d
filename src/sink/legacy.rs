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

use crate::Error;
use crate::Level;
use crate::legacy::LegacyLog;
use crate::legacy::Priority;
use crate::sink::Sink;

/// A sink that forwards to a severity-numbered [`LegacyLog`].
///
/// Each level is translated to its [`Priority`] before the call.
#[derive(Clone)]
pub struct LegacySink {
    log: Arc<dyn LegacyLog>,
}

impl LegacySink {
    /// Forward to `log`, translating each level to its legacy [`Priority`].
    pub fn new(log: impl LegacyLog) -> Self {
        Self { log: Arc::new(log) }
    }

    /// Wrap an already shared legacy logger.
    pub fn from_arc(log: Arc<dyn LegacyLog>) -> Self {
        Self { log }
    }
}

impl fmt::Debug for LegacySink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegacySink").finish_non_exhaustive()
    }
}

impl Sink for LegacySink {
    fn emit(&self, level: Level, message: &str) -> Result<(), Error> {
        self.log.log(message, Priority::from(level));
        Ok(())
    }
}
