//! Parallel batch detection
//!
//! Samples are spread over the rayon pool. Every job rayon splits off builds
//! its own detector, so no session is ever shared between threads.

use crate::{
    config::DetectorConfig,
    detector::Detector,
    error::{ApiError, Result},
    registry::LanguageRegistry,
};
use charprobe_engine::NameStyle;
use rayon::prelude::*;

/// Detect many samples in parallel
///
/// The configuration is validated once up front; per-sample failures are
/// returned in place, in input order.
pub fn detect_batch<S>(
    config: &DetectorConfig,
    samples: &[S],
    style: NameStyle,
) -> Result<Vec<Result<String>>>
where
    S: AsRef<[u8]> + Sync,
{
    let registry = LanguageRegistry::global();
    if !registry.contains(&config.language) {
        return Err(ApiError::InvalidLanguage {
            language: config.language.clone(),
            available: registry.list().to_vec(),
        });
    }
    config.validate()?;

    Ok(run_batch(|| Detector::with_config(config.clone()), samples, style))
}

fn run_batch<S, F>(make_detector: F, samples: &[S], style: NameStyle) -> Vec<Result<String>>
where
    S: AsRef<[u8]> + Sync,
    F: Fn() -> Result<Detector> + Sync + Send,
{
    samples
        .par_iter()
        .map_init(&make_detector, |detector, sample| match detector {
            Ok(detector) => detector.detect(sample.as_ref(), style),
            // The error is not Clone; building again reports it with its type.
            Err(_) => make_detector().and_then(|detector| detector.detect(sample.as_ref(), style)),
        })
        .collect()
}
