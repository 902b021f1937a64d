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

//! Logshim is a small logging facade that turns heterogeneous logging backends into one uniform
//! logger.
//!
//! # Overview
//!
//! A [`Logger`] accepts a severity [`Level`] token, a message template with `{name}`
//! placeholders and a [`Context`] of values. It validates the level, interpolates the template
//! and forwards the level and the final message to its [`Sink`](sink::Sink). A
//! [`LoggerFactory`] builds loggers on top of plain functions, severity-numbered legacy loggers
//! ([`LegacyLog`](legacy::LegacyLog)) or existing loggers.
//!
//! # Examples
//!
//! Wrap a function:
//!
//! ```
//! use logshim::LoggerFactory;
//!
//! let logger = LoggerFactory::from_callable(|level, message| {
//!     println!("[{level}] {message}");
//! });
//!
//! let ctx = logshim::context! { "id" => 42, "action" => "login" };
//! logger.debug("user {id} did {action}", &ctx).unwrap();
//! // prints "[debug] user 42 did login"
//! ```
//!
//! Wrap a severity-numbered logger:
//!
//! ```
//! use logshim::LoggerFactory;
//! use logshim::legacy::LegacyLog;
//! use logshim::legacy::Priority;
//!
//! struct Syslog;
//!
//! impl LegacyLog for Syslog {
//!     fn log(&self, message: &str, priority: Priority) {
//!         println!("<{}> {message}", priority.code());
//!     }
//! }
//!
//! let logger = LoggerFactory::from_legacy(Syslog);
//! logger.error("disk {disk} failed", &logshim::context! { "disk" => "sda" }).unwrap();
//! // prints "<3> disk sda failed"
//! ```
//!
//! Unknown levels are rejected before anything reaches the backend:
//!
//! ```
//! let logger = logshim::LoggerFactory::new().create_logger(None);
//! let err = logger.log("wat", "x", &logshim::Context::new()).unwrap_err();
//! assert_eq!(err.invalid_level(), Some("wat"));
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod format;
pub mod legacy;
pub mod sink;

mod bridge;
#[cfg(feature = "colored")]
mod color;
mod error;
mod factory;
mod kv;
mod level;
mod logger;

#[cfg(feature = "colored")]
pub use self::color::LevelColor;
pub use self::error::Error;
pub use self::factory::Backend;
pub use self::factory::LogFn;
pub use self::factory::LoggerFactory;
pub use self::kv::Context;
pub use self::kv::Value;
pub use self::level::Level;
pub use self::logger::Logger;
