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
use crate::sink::Sink;

/// A sink that calls a function with each level and message.
///
/// # Examples
///
/// ```
/// use logshim::Logger;
/// use logshim::sink::Callback;
///
/// let logger = Logger::new(Callback::new(|level, message| println!("[{level}] {message}")));
/// logger.info("hello", &logshim::context! {}).unwrap();
/// ```
#[derive(Clone)]
pub struct Callback {
    f: Arc<dyn Fn(Level, &str) + Send + Sync>,
}

impl Callback {
    /// Call `f` with the level and message of every emitted record.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Level, &str) + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Wrap an already shared function.
    pub fn from_arc(f: Arc<dyn Fn(Level, &str) + Send + Sync>) -> Self {
        Self { f }
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}

impl Sink for Callback {
    fn emit(&self, level: Level, message: &str) -> Result<(), Error> {
        (self.f)(level, message);
        Ok(())
    }
}
