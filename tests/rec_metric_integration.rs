//! End-to-end tests for recognition metric evaluation.

use oar_ocr_eval::prelude::*;
use serde_json::json;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

#[test]
fn test_padded_ground_truth_scenario() {
    let mut metric = RecMetric::new(&RecMetricConfig::default()).unwrap();
    metric
        .update_batch(
            &RecPredictions::new(["balala", "ba"]),
            &GroundTruth::padded(["ba xla la!    ", "ba       "], vec![10, 2]),
        )
        .unwrap();

    let scores = metric.eval().unwrap();
    assert!((scores.acc - 0.5).abs() < 1e-12);
    assert!((scores.norm_edit_distance - 0.928_571_428_571).abs() < 1e-9);
}

#[test]
fn test_multiple_batches_accumulate() {
    let mut metric = RecMetric::new(&RecMetricConfig::default()).unwrap();
    metric
        .update_batch(&RecPredictions::new(["abc"]), &GroundTruth::texts(["a b c"]))
        .unwrap();
    metric
        .update_batch(
            &RecPredictions::new(["xy", "12"]),
            &GroundTruth::texts(["x y", "1 3"]),
        )
        .unwrap();

    let state = metric.accumulator();
    assert_eq!(state.correct_num(), 2);
    assert_eq!(state.total_num(), 3);

    let scores = metric.eval().unwrap();
    assert!((scores.acc - 2.0 / 3.0).abs() < 1e-12);
    assert!((scores.norm_edit_distance - (1.0 - 0.5 / 3.0)).abs() < 1e-12);
}

#[test]
fn test_uppercase_labels_with_lowercase_dictionary() {
    let preds = RecPredictions::new(["hello", "world"]);
    let gt = GroundTruth::texts(["Hello", "w0rld"]);

    // The default dictionary is lowercase, so 'H' is dropped before lowering
    let mut filtered = RecMetric::new(&RecMetricConfig::default()).unwrap();
    filtered.update_batch(&preds, &gt).unwrap();
    assert_eq!(filtered.eval().unwrap().acc, 0.0);

    let mut unfiltered = RecMetric::new(&RecMetricConfig::new().with_filter_ood(false)).unwrap();
    unfiltered.update_batch(&preds, &gt).unwrap();
    assert_eq!(unfiltered.eval().unwrap().acc, 0.5);
}

#[test]
fn test_dictionary_file_controls_filtering() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "a").unwrap();
    writeln!(file, "b").unwrap();
    writeln!(file, "!").unwrap();

    let config = RecMetricConfig::new().with_character_dict(file.path());
    let mut metric = RecMetric::new(&config).unwrap();
    metric
        .update_batch(&RecPredictions::new(["ab!"]), &GroundTruth::texts(["a c b !"]))
        .unwrap();

    assert_eq!(metric.eval().unwrap().acc, 1.0);
}

#[test]
fn test_json_config_and_batches() {
    let config = RecMetricConfig::from_json_str(
        r#"{ "ignore_space": true, "filter_ood": false, "lower": false }"#,
    )
    .unwrap();
    let mut metric = RecMetric::new(&config).unwrap();

    metric
        .update_json(&json!(["Hi!", "ok"]), &json!(["H i!", "OK"]))
        .unwrap();
    let scores = metric.eval().unwrap();
    assert_eq!(scores.acc, 0.5);
    assert_eq!(scores.norm_edit_distance, 0.5);
}

#[test]
fn test_invalid_batches_are_atomic() {
    let mut metric = RecMetric::new(&RecMetricConfig::default()).unwrap();
    metric
        .update_batch(&RecPredictions::new(["a"]), &GroundTruth::texts(["a"]))
        .unwrap();

    let bad_inputs = [
        (json!(["a", "b"]), json!(["a"])),
        (json!(["a", "b"]), json!([["a", "b"], [1]])),
        (json!(["a"]), json!([["a"], [1], [1]])),
        (json!(["a"]), json!({ "texts": ["a"] })),
        (json!(42), json!(["a"])),
    ];
    for (preds, gt) in &bad_inputs {
        let err = metric.update_json(preds, gt).unwrap_err();
        assert!(err.is_invalid_argument(), "unexpected error: {}", err);
    }

    assert_eq!(metric.accumulator().total_num(), 1);
    assert_eq!(metric.eval().unwrap().acc, 1.0);
}

#[test]
fn test_sharded_evaluation_matches_single_owner() {
    let preds: Vec<String> = (0..40).map(|i| format!("w{}", i % 9)).collect();
    let labels: Vec<String> = (0..40).map(|i| format!("W {}", i % 7)).collect();

    let dict = Arc::new(CharacterDictionary::default());
    let config = RecMetricConfig::default();

    let mut single = RecMetric::with_dictionary(&config, Arc::clone(&dict)).unwrap();
    single
        .update_batch(
            &RecPredictions::new(preds.clone()),
            &GroundTruth::texts(labels.clone()),
        )
        .unwrap();

    let shards: Vec<RecAccumulator> = preds
        .chunks(13)
        .zip(labels.chunks(13))
        .map(|(p, l)| {
            let mut shard = RecMetric::with_dictionary(&config, Arc::clone(&dict)).unwrap();
            shard
                .update_batch(
                    &RecPredictions::new(p.to_vec()),
                    &GroundTruth::texts(l.to_vec()),
                )
                .unwrap();
            shard.accumulator().clone()
        })
        .collect();

    let mut merged = RecMetric::with_dictionary(&config, dict).unwrap();
    for shard in shards.iter().rev() {
        merged.merge_state(shard).unwrap();
    }

    assert_eq!(
        merged.accumulator().correct_num(),
        single.accumulator().correct_num()
    );
    assert_eq!(merged.accumulator().total_num(), 40);
    let (m, s) = (merged.eval().unwrap(), single.eval().unwrap());
    assert!((m.acc - s.acc).abs() < 1e-12);
    assert!((m.norm_edit_distance - s.norm_edit_distance).abs() < 1e-12);
}

#[test]
fn test_scores_stay_in_unit_range() {
    let mut metric = RecMetric::new(&RecMetricConfig::default()).unwrap();
    metric
        .update_batch(
            &RecPredictions::new(["", "completely different", "same", "x"]),
            &GroundTruth::texts(["abc", "", "same", "!!!"]),
        )
        .unwrap();

    let scores = metric.eval().unwrap();
    assert!((0.0..=1.0).contains(&scores.acc));
    assert!((0.0..=1.0).contains(&scores.norm_edit_distance));
}

#[test]
fn test_eval_without_samples() {
    let metric = RecMetric::new(&RecMetricConfig::default()).unwrap();
    let err = metric.eval().unwrap_err();
    assert!(matches!(err, EvalError::EmptyEvaluation));
}

#[test]
fn test_pair_logging_with_installed_subscriber() {
    oar_ocr_eval::core::init_tracing();
    // A second install is refused instead of panicking.
    assert!(!oar_ocr_eval::core::init_tracing());

    let config = RecMetricConfig::new().with_print_flag(true);
    let mut metric = RecMetric::new(&config).unwrap();
    metric
        .update_batch(&RecPredictions::new(["ab", "cd"]), &GroundTruth::texts(["ab", "ce"]))
        .unwrap();

    let scores = metric.eval().unwrap();
    assert_eq!(scores.acc, 0.5);
    assert_eq!(scores.norm_edit_distance, 0.75);
}
