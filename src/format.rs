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

//! Message construction: level validation and placeholder interpolation.
//!
//! A message template refers to context values with `{name}` placeholders:
//!
//! ```
//! use logshim::format;
//!
//! let ctx = logshim::context! { "id" => 42, "action" => "login" };
//! let (level, message) = format::format_message("debug", "user {id} did {action}", &ctx).unwrap();
//! assert_eq!(level, logshim::Level::Debug);
//! assert_eq!(message, "user 42 did login");
//! ```

use std::borrow::Cow;

use crate::Context;
use crate::Error;
use crate::Level;
use crate::kv::Value;

/// Validate a level token.
///
/// The token must be exactly one of the eight level names; the returned level renders back to
/// the same string.
///
/// # Errors
///
/// Return [`Error::InvalidLevel`] carrying `level` otherwise.
pub fn validate_level(level: &str) -> Result<Level, Error> {
    level.parse()
}

/// Render a context value as placeholder text. This never fails.
pub fn stringify(value: &Value<'_>) -> String {
    value.to_string()
}

/// Replace the `{key}` placeholders of `template` with the values of `context`.
///
/// Replacement is a single left-to-right pass: substituted text is never scanned again, and
/// where several placeholders start at the same position the longest one wins. Placeholders
/// without a matching key are kept verbatim.
///
/// If nothing is replaced the template is returned borrowed.
pub fn interpolate<'t>(template: &'t str, context: &Context<'_>) -> Cow<'t, str> {
    if context.is_empty() || !template.contains('{') {
        return Cow::Borrowed(template);
    }

    let mut replacements: Vec<(String, String)> = context
        .iter()
        .map(|(key, value)| (format!("{{{key}}}"), stringify(value)))
        .collect();
    replacements.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut message = String::with_capacity(template.len());
    let mut replaced = false;
    let mut rest = template;
    while let Some(pos) = rest.find('{') {
        message.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match replacements
            .iter()
            .find(|(placeholder, _)| tail.starts_with(placeholder.as_str()))
        {
            Some((placeholder, value)) => {
                message.push_str(value);
                rest = &tail[placeholder.len()..];
                replaced = true;
            }
            None => {
                message.push('{');
                rest = &tail[1..];
            }
        }
    }

    if !replaced {
        return Cow::Borrowed(template);
    }
    message.push_str(rest);
    Cow::Owned(message)
}

/// Validate `level`, then interpolate `template` with `context`.
///
/// A malformed level is rejected before any interpolation work is done.
pub fn format_message<'t>(
    level: &str,
    template: &'t str,
    context: &Context<'_>,
) -> Result<(Level, Cow<'t, str>), Error> {
    let level = validate_level(level)?;
    Ok((level, interpolate(template, context)))
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand::distr::Alphanumeric;

    use super::*;
    use crate::context;

    #[test]
    fn test_validate_level() {
        for level in Level::ALL {
            assert_eq!(validate_level(level.as_str()).unwrap().as_str(), level.as_str());
        }

        let err = validate_level("wat").unwrap_err();
        insta::assert_snapshot!(err, @r#"could not log unknown level: "wat""#);
    }

    #[test]
    fn test_validate_random_tokens() {
        let mut rng = rand::rng();
        for _ in 0..256 {
            let len = rng.random_range(0..12);
            let raw: String = (&mut rng)
                .sample_iter(Alphanumeric)
                .take(len)
                .map(char::from)
                .collect();
            let known = Level::ALL.iter().any(|level| level.as_str() == raw);
            assert_eq!(validate_level(&raw).is_ok(), known, "{raw:?}");
        }
    }

    #[test]
    fn test_interpolate() {
        let ctx = context! { "id" => 42, "action" => "login" };
        let message = interpolate("user {id} did {action}", &ctx);
        assert_eq!(message, "user 42 did login");
    }

    #[test]
    fn test_interpolate_empty_context_is_identity() {
        let template = "left {x} and {y} untouched";
        let message = interpolate(template, &Context::new());
        assert!(matches!(message, Cow::Borrowed(s) if s == template));
    }

    #[test]
    fn test_interpolate_keeps_unknown_placeholders() {
        let ctx = context! { "a" => 1 };
        assert_eq!(interpolate("{a} {b} {a", &ctx), "1 {b} {a");
        assert!(matches!(interpolate("{b}", &ctx), Cow::Borrowed("{b}")));
    }

    #[test]
    fn test_interpolate_repeated_placeholder() {
        let ctx = context! { "n" => "x" };
        assert_eq!(interpolate("{n}{n}-{n}", &ctx), "xx-x");
    }

    #[test]
    fn test_interpolate_single_pass() {
        // substituted text is not scanned again
        let ctx = context! { "a" => "{b}", "b" => "B" };
        assert_eq!(interpolate("{a}|{b}", &ctx), "{b}|B");
    }

    #[test]
    fn test_interpolate_longest_placeholder_wins() {
        let ctx = context! { "a" => 1, "a}{b" => 2, "b" => 3 };
        assert_eq!(interpolate("{a}{b}", &ctx), "2");
        assert_eq!(interpolate("{a} {b}", &ctx), "1 3");
    }

    #[test]
    fn test_interpolate_keys_with_braces_and_unicode() {
        let ctx = context! { "{x}" => "X", "ключ" => "значение" };
        assert_eq!(interpolate("{{x}} {ключ}!", &ctx), "X значение!");
    }

    #[test]
    fn test_interpolate_value_kinds() {
        struct Opaque;
        let opaque = Opaque;
        let ctx = context! {
            "null" => Value::null(),
            "yes" => true,
            "list" => vec![1, 2],
            "object" => Value::from_object(&opaque),
        };
        let message = interpolate("{null} {yes} {list} {object}", &ctx);
        assert!(message.starts_with("NULL true array "), "{message}");
        assert!(message.ends_with("Opaque"), "{message}");
    }

    #[test]
    fn test_interpolate_random_placeholders() {
        let mut rng = rand::rng();
        for _ in 0..64 {
            let len = rng.random_range(1..8);
            let key: String = (&mut rng)
                .sample_iter(Alphanumeric)
                .take(len)
                .map(char::from)
                .collect();
            let value: u32 = rng.random();
            let ctx = context! { key.as_str() => value };
            let template = format!("<{{{key}}}>");
            let message = interpolate(&template, &ctx);
            assert_eq!(message, format!("<{value}>"));
            assert!(!message.contains(&format!("{{{key}}}")));
        }
    }

    #[test]
    fn test_format_message_rejects_before_interpolating() {
        let ctx = context! { "x" => 1 };
        let err = format_message("Debug", "{x}", &ctx).unwrap_err();
        assert_eq!(err.invalid_level(), Some("Debug"));

        let (level, message) = format_message("notice", "{x}", &ctx).unwrap();
        assert_eq!(level, Level::Notice);
        assert_eq!(message, "1");
    }
}
