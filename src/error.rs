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

/// The error type of every fallible operation in this crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The level passed to a logger is not one of the eight severity tokens.
    #[error("could not log unknown level: {0:?}")]
    InvalidLevel(String),
    /// The value given to [`LoggerFactory::adapt`](crate::LoggerFactory::adapt) matches none of
    /// the supported backend shapes.
    #[error("could not create logger from {0}")]
    UnsupportedBackend(&'static str),
    /// A numeric code that has no counterpart in the legacy severity map.
    #[error("unknown legacy priority: {0}")]
    InvalidPriority(i32),
    #[error("failed to perform io: {0}")]
    Io(#[from] std::io::Error),
    /// A sink failed to deliver the message.
    #[error(transparent)]
    Sink(#[from] anyhow::Error),
}

impl Error {
    /// The raw level string, if this is an [`Error::InvalidLevel`].
    pub fn invalid_level(&self) -> Option<&str> {
        match self {
            Error::InvalidLevel(level) => Some(level),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        insta::assert_snapshot!(
            Error::InvalidLevel("wat".to_string()),
            @r#"could not log unknown level: "wat""#
        );
        insta::assert_snapshot!(
            Error::UnsupportedBackend("u32"),
            @"could not create logger from u32"
        );
        insta::assert_snapshot!(Error::InvalidPriority(9), @"unknown legacy priority: 9");
    }

    #[test]
    fn test_invalid_level_accessor() {
        let err = Error::InvalidLevel("Info".to_string());
        assert_eq!(err.invalid_level(), Some("Info"));
        assert_eq!(Error::UnsupportedBackend("()").invalid_level(), None);
    }
}
