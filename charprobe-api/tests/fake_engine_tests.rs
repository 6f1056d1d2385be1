//! Session behaviour against a scripted engine
//!
//! The fake engine counts allocations and analyses and can hold an analysis
//! open for a while, which makes lock behaviour observable.

use charprobe_api::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

const FAILURE_CODE: i32 = 6;

#[derive(Default)]
struct Counters {
    allocated: AtomicUsize,
    analysed: AtomicUsize,
    released: AtomicUsize,
    inside: AtomicUsize,
    max_inside: AtomicUsize,
}

struct FakeEngine {
    counters: Arc<Counters>,
    hold: Duration,
}

impl FakeEngine {
    fn new(hold: Duration) -> (Arc<Self>, Arc<Counters>) {
        let counters = Arc::new(Counters::default());
        let engine = Arc::new(Self {
            counters: counters.clone(),
            hold,
        });
        (engine, counters)
    }
}

impl RecognitionEngine for FakeEngine {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn languages(&self) -> charprobe_engine::Result<Vec<String>> {
        Ok(vec!["aa".to_string(), "bb".to_string()])
    }

    fn analyser(
        &self,
        language: &str,
        _policy: &DetectionPolicy,
    ) -> charprobe_engine::Result<Box<dyn Analyser>> {
        self.counters.allocated.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeAnalyser {
            language: language.to_string(),
            counters: self.counters.clone(),
            hold: self.hold,
            errno: 0,
        }))
    }

    fn charset_name(&self, charset: CharsetId, style: NameStyle) -> Option<&str> {
        match (charset.0, style) {
            (_, NameStyle::Mime) => None,
            (1, _) => Some("one"),
            (2, _) => Some("two"),
            _ => Some("other"),
        }
    }
}

struct FakeAnalyser {
    language: String,
    counters: Arc<Counters>,
    hold: Duration,
    errno: i32,
}

impl Drop for FakeAnalyser {
    fn drop(&mut self) {
        self.counters.released.fetch_add(1, Ordering::SeqCst);
    }
}

impl Analyser for FakeAnalyser {
    fn language(&self) -> &str {
        &self.language
    }

    fn analyse(&mut self, sample: &[u8]) -> Option<CharsetId> {
        self.counters.analysed.fetch_add(1, Ordering::SeqCst);
        let inside = self.counters.inside.fetch_add(1, Ordering::SeqCst) + 1;
        self.counters.max_inside.fetch_max(inside, Ordering::SeqCst);
        thread::sleep(self.hold);
        self.counters.inside.fetch_sub(1, Ordering::SeqCst);

        // The first byte selects the charset; zero means failure.
        match sample[0] {
            0 => {
                self.errno = FAILURE_CODE;
                None
            }
            b => {
                self.errno = 0;
                Some(CharsetId(u32::from(b)))
            }
        }
    }

    fn errno(&self) -> i32 {
        self.errno
    }

    fn strerror(&self, errno: i32) -> String {
        format!("fake failure {errno}")
    }
}

fn detector(engine: &Arc<FakeEngine>, language: &str) -> Result<Detector> {
    Detector::builder()
        .language(language)
        .engine(engine.clone())
        .build()
}

#[test]
fn test_invalid_language_allocates_nothing() {
    let (engine, counters) = FakeEngine::new(Duration::ZERO);

    for language in ["zh", "", "AA", "aa "] {
        let result = detector(&engine, language);
        assert!(
            matches!(result, Err(ApiError::InvalidLanguage { .. })),
            "{language:?} was accepted"
        );
    }
    assert_eq!(counters.allocated.load(Ordering::SeqCst), 0);

    let _detector = detector(&engine, "aa").unwrap();
    assert_eq!(counters.allocated.load(Ordering::SeqCst), 1);
}

#[test]
fn test_invalid_language_reports_registry() {
    let (engine, _) = FakeEngine::new(Duration::ZERO);
    match detector(&engine, "zz") {
        Err(ApiError::InvalidLanguage {
            language,
            available,
        }) => {
            assert_eq!(language, "zz");
            assert_eq!(available, vec!["aa".to_string(), "bb".to_string()]);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_explicit_registry_overrides_engine() {
    let (engine, _) = FakeEngine::new(Duration::ZERO);
    let registry = LanguageRegistry::default();

    let result = Detector::builder()
        .language("aa")
        .engine(engine)
        .registry(registry)
        .build();
    assert!(matches!(
        result,
        Err(ApiError::InvalidLanguage { available, .. }) if available.is_empty()
    ));
}

#[test]
fn test_empty_input_skips_engine() {
    let (engine, counters) = FakeEngine::new(Duration::ZERO);
    let detector = detector(&engine, "aa").unwrap();

    assert!(matches!(
        detector.detect(&[], NameStyle::Default),
        Err(ApiError::EmptyInput)
    ));
    assert_eq!(counters.analysed.load(Ordering::SeqCst), 0);
}

#[test]
fn test_failure_carries_engine_code_and_message() {
    let (engine, _) = FakeEngine::new(Duration::ZERO);
    let detector = detector(&engine, "aa").unwrap();

    match detector.detect(&[0], NameStyle::Default) {
        Err(ApiError::DetectionFailed { code, message }) => {
            assert_eq!(code, FAILURE_CODE);
            assert_eq!(message, "fake failure 6");
        }
        other => panic!("unexpected result: {other:?}"),
    }

    // The session stays usable after a failed detection.
    assert_eq!(detector.detect(&[1], NameStyle::Default).unwrap(), "one");
}

#[test]
fn test_absent_style_renders_empty() {
    let (engine, _) = FakeEngine::new(Duration::ZERO);
    let detector = detector(&engine, "bb").unwrap();

    assert_eq!(detector.detect(&[2], NameStyle::Mime).unwrap(), "");
    for style in NameStyle::ALL {
        assert!(detector.detect(&[2], style).is_ok());
    }
}

#[test]
fn test_closed_session_skips_engine() {
    let (engine, counters) = FakeEngine::new(Duration::ZERO);
    let detector = detector(&engine, "aa").unwrap();
    detector.release().unwrap();

    assert!(matches!(
        detector.detect(&[1], NameStyle::Default),
        Err(ApiError::SessionClosed)
    ));
    assert_eq!(counters.analysed.load(Ordering::SeqCst), 0);
}

#[test]
fn test_same_session_is_serialized() {
    let (engine, counters) = FakeEngine::new(Duration::from_millis(5));
    let detector = Arc::new(detector(&engine, "aa").unwrap());
    let barrier = Arc::new(Barrier::new(4));

    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let detector = detector.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..10 {
                    detector.detect(&[i + 1], NameStyle::Default).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(counters.analysed.load(Ordering::SeqCst), 40);
    assert_eq!(counters.max_inside.load(Ordering::SeqCst), 1);
}

#[test]
fn test_distinct_sessions_do_not_block_each_other() {
    let (engine, counters) = FakeEngine::new(Duration::from_millis(200));
    let first = detector(&engine, "aa").unwrap();
    let second = detector(&engine, "bb").unwrap();
    let barrier = Barrier::new(2);

    thread::scope(|scope| {
        for detector in [&first, &second] {
            let barrier = &barrier;
            scope.spawn(move || {
                barrier.wait();
                detector.detect(&[1], NameStyle::Default).unwrap();
            });
        }
    });

    assert_eq!(counters.max_inside.load(Ordering::SeqCst), 2);
}

#[test]
fn test_release_waits_for_in_flight_detection() {
    let (engine, counters) = FakeEngine::new(Duration::from_millis(100));
    let detector = Arc::new(detector(&engine, "aa").unwrap());

    let worker = {
        let detector = detector.clone();
        thread::spawn(move || detector.detect(&[1], NameStyle::Default))
    };
    while counters.analysed.load(Ordering::SeqCst) == 0 {
        thread::yield_now();
    }
    detector.release().unwrap();

    assert_eq!(worker.join().unwrap().unwrap(), "one");
    assert!(detector.is_closed());
}

#[test]
fn test_drop_releases_analyser() {
    let (engine, counters) = FakeEngine::new(Duration::ZERO);
    {
        let detector = detector(&engine, "aa").unwrap();
        assert_eq!(detector.detect(&[1], NameStyle::Default).unwrap(), "one");
        assert_eq!(counters.released.load(Ordering::SeqCst), 0);
    }
    assert_eq!(counters.released.load(Ordering::SeqCst), 1);
    // Dropping the only session leaves the engine as the sole counter owner.
    assert_eq!(Arc::strong_count(&counters), 2);
}

#[test]
fn test_drop_after_release_releases_once() {
    let (engine, counters) = FakeEngine::new(Duration::ZERO);
    let detector = detector(&engine, "aa").unwrap();

    detector.release().unwrap();
    assert_eq!(counters.released.load(Ordering::SeqCst), 1);
    drop(detector);
    assert_eq!(counters.released.load(Ordering::SeqCst), 1);
}

#[test]
fn test_builder_checks_registry_before_policy() {
    let (engine, counters) = FakeEngine::new(Duration::ZERO);

    let result = Detector::builder()
        .language("")
        .threshold(0.5)
        .engine(engine.clone())
        .build();
    assert!(matches!(
        result,
        Err(ApiError::InvalidLanguage { language, .. }) if language.is_empty()
    ));

    let result = Detector::builder()
        .language("aa")
        .threshold(0.5)
        .engine(engine)
        .build();
    assert!(matches!(result, Err(ApiError::Config(_))));
    assert_eq!(counters.allocated.load(Ordering::SeqCst), 0);
}
