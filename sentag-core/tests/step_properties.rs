//! Property tests for step purity, idempotence and batch/single equivalence

use proptest::prelude::*;
use sentag_core::pipeline::lowercase;
use sentag_core::{NormalizationPipeline, PipelineConfig, ResourceCatalog, ResourceStore, Step};
use std::sync::{Arc, OnceLock};

fn store() -> Arc<ResourceStore> {
    static STORE: OnceLock<Arc<ResourceStore>> = OnceLock::new();
    STORE
        .get_or_init(|| Arc::new(ResourceStore::load(ResourceCatalog::bundled()).unwrap()))
        .clone()
}

fn pipeline_with(flags: &[bool]) -> NormalizationPipeline {
    let mut pipeline = NormalizationPipeline::new(store(), PipelineConfig::default()).unwrap();
    for (step, enabled) in Step::ALL.iter().zip(flags) {
        if *enabled {
            pipeline.activate(*step);
        } else {
            pipeline.deactivate(*step);
        }
    }
    pipeline
}

/// Social-media-like text: mixed case, digits, symbols, mentions, emoji
fn noisy_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ñÑ!?#@_'’.,:/~😢😂-]{0,40}"
}

proptest! {
    #[test]
    fn lowercase_is_idempotent(text in noisy_text()) {
        let once = lowercase(&text);
        prop_assert_eq!(lowercase(&once), once);
    }

    #[test]
    fn remove_punctuations_is_idempotent(text in noisy_text()) {
        let pipeline = pipeline_with(&[true; 12]);
        let once = pipeline.apply_step(Step::RemovePunctuations, &text);
        let twice = pipeline.apply_step(Step::RemovePunctuations, &once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn bulk_matches_single(
        text in noisy_text(),
        flags in proptest::collection::vec(any::<bool>(), 12),
    ) {
        let pipeline = pipeline_with(&flags);
        let single = pipeline.preprocess(&text);
        let batch = pipeline.bulk_preprocess(&[text.as_str()]);
        prop_assert_eq!(&batch[0], &single);
    }

    #[test]
    fn bulk_is_independent_of_neighbours(
        texts in proptest::collection::vec(noisy_text(), 1..8),
    ) {
        let pipeline = pipeline_with(&[true; 12]);
        let batch = pipeline.bulk_preprocess(texts.as_slice());
        prop_assert_eq!(batch.len(), texts.len());
        for (text, normalized) in texts.iter().zip(&batch) {
            prop_assert_eq!(normalized, &pipeline.preprocess(text));
        }
    }

    #[test]
    fn output_whitespace_is_collapsed(
        text in "[a-z \t\n]{0,40}",
        flags in proptest::collection::vec(any::<bool>(), 12),
    ) {
        let pipeline = pipeline_with(&flags);
        let out = pipeline.preprocess(&text);
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.contains('\t') && !out.contains('\n'));
        prop_assert_eq!(out.trim(), out.as_str());
    }

    #[test]
    fn steps_never_fail_on_arbitrary_text(text in "\\PC{0,60}") {
        let pipeline = pipeline_with(&[true; 12]);
        for step in Step::ALL {
            let _ = pipeline.apply_step(step, &text);
        }
        let _ = pipeline.preprocess(&text);
    }
}
