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

use std::panic;
use std::sync::Arc;
use std::sync::Mutex;

use logshim::Backend;
use logshim::Context;
use logshim::Error;
use logshim::Level;
use logshim::Logger;
use logshim::LoggerFactory;
use logshim::Value;
use logshim::context;
use logshim::legacy::LegacyLog;
use logshim::legacy::Priority;
use logshim::sink::Testing;

type Calls = Arc<Mutex<Vec<(Level, String)>>>;

fn capturing() -> (Backend, Calls) {
    let calls = Calls::default();
    let backend = {
        let calls = calls.clone();
        Backend::callable(move |level, message| {
            calls.lock().unwrap().push((level, message.to_string()));
        })
    };
    (backend, calls)
}

#[test]
fn test_end_to_end_interpolation() {
    let (backend, calls) = capturing();
    let logger = LoggerFactory::new().create_logger(Some(backend));

    let ctx = context! { "id" => 42, "action" => "login" };
    logger.log("debug", "user {id} did {action}", &ctx).unwrap();

    assert_eq!(
        *calls.lock().unwrap(),
        vec![(Level::Debug, "user 42 did login".to_string())]
    );
}

#[test]
fn test_end_to_end_invalid_level() {
    let (backend, calls) = capturing();
    let logger = LoggerFactory::new().create_logger(Some(backend));

    let err = logger.log("wat", "x", &Context::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidLevel(ref raw) if raw == "wat"));
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_legacy_backend_round_trip() {
    #[derive(Default)]
    struct Pear(Mutex<Vec<(String, Priority)>>);

    impl LegacyLog for Pear {
        fn log(&self, message: &str, priority: Priority) {
            self.0.lock().unwrap().push((message.to_string(), priority));
        }
    }

    let pear = Arc::new(Pear::default());
    let logger = LoggerFactory::new().create_logger(Some(Backend::Legacy(pear.clone())));
    for level in Level::ALL {
        logger.log(level, "m", &Context::new()).unwrap();
    }

    let calls = pear.0.lock().unwrap();
    assert_eq!(calls.len(), Level::ALL.len());
    for ((message, priority), level) in calls.iter().zip(Level::ALL) {
        assert_eq!(message, "m");
        assert_eq!(Level::from(*priority), level);
        assert_eq!(Priority::try_from(priority.code()).unwrap(), *priority);
    }
}

#[test]
fn test_stringify_through_logger() {
    struct Session {
        id: u64,
    }

    impl std::fmt::Display for Session {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "session#{}", self.id)
        }
    }

    struct Handle;

    let testing = Testing::default();
    let logger = Logger::new(testing.clone());
    let session = Session { id: 7 };
    let handle = Handle;
    let ctx = context! {
        "session" => Value::from_display(&session),
        "handle" => Value::from_object(&handle),
        "tags" => vec!["a", "b"],
        "user" => None::<&str>,
        "ok" => false,
        "ratio" => 0.25,
    };

    logger
        .info("{session} {handle} {tags} {user} {ok} {ratio} {unknown}", &ctx)
        .unwrap();

    let records = testing.take();
    let (level, message) = &records[0];
    assert_eq!(*level, Level::Info);
    assert!(message.starts_with("session#7 "), "{message}");
    assert!(message.contains("Handle array NULL false 0.25 {unknown}"), "{message}");
}

#[test]
fn test_backend_panics_propagate() {
    let logger = LoggerFactory::from_callable(|_, message| panic!("backend failed: {message}"));
    let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        logger.critical("boom", &Context::new())
    }));
    assert!(result.is_err());
}

#[test]
fn test_unsupported_backend_is_rejected_synchronously() {
    struct NotALogger;

    let factory = LoggerFactory::with_default(Logger::new(Testing::default()));
    let err = factory.adapt(NotALogger).unwrap_err();
    match err {
        Error::UnsupportedBackend(name) => assert!(name.ends_with("NotALogger"), "{name}"),
        err => panic!("unexpected error: {err}"),
    }
}

#[test]
fn test_loggers_are_shareable_across_threads() {
    let testing = Testing::default();
    let logger = Logger::new(testing.clone());

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let logger = logger.clone();
            std::thread::spawn(move || {
                logger.notice("worker {n}", &context! { "n" => n }).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut messages: Vec<_> = testing.take().into_iter().map(|(_, m)| m).collect();
    messages.sort();
    assert_eq!(messages, ["worker 0", "worker 1", "worker 2", "worker 3"]);
}
