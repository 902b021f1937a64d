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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::Error;
use crate::Level;
use crate::sink::Sink;

/// A sink that keeps every message in memory, for assertions in tests.
///
/// Clones share the same buffer, so keep one clone and hand the other to the logger.
///
/// # Examples
///
/// ```
/// use logshim::Level;
/// use logshim::Logger;
/// use logshim::sink::Testing;
///
/// let testing = Testing::default();
/// let logger = Logger::new(testing.clone());
/// logger.info("hello {name}", &logshim::context! { "name" => "world" }).unwrap();
///
/// assert_eq!(testing.take(), vec![(Level::Info, "hello world".to_string())]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Testing {
    records: Arc<Mutex<Vec<(Level, String)>>>,
}

impl Testing {
    /// A copy of the messages received so far.
    pub fn records(&self) -> Vec<(Level, String)> {
        self.lock().clone()
    }

    /// Remove and return the messages received so far.
    pub fn take(&self) -> Vec<(Level, String)> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(Level, String)>> {
        // a panicking test thread must not hide the records from the others
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for Testing {
    fn emit(&self, level: Level, message: &str) -> Result<(), Error> {
        self.lock().push((level, message.to_string()));
        Ok(())
    }
}
