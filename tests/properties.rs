use proptest::prelude::*;
use rapid_summarizer::nlp::splitter::split_sentences;
use rapid_summarizer::{summarize, summarize_with, SummaryOptions};

fn sentence() -> impl Strategy<Value = String> {
    (
        prop::collection::vec("[a-z]{1,8}", 1..10),
        prop_oneof![Just("."), Just("!"), Just("?")],
    )
        .prop_map(|(words, end)| {
            let mut text = words.join(" ");
            if let Some(first) = text.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            text.push_str(end);
            text
        })
}

fn paragraph() -> impl Strategy<Value = String> {
    prop::collection::vec(sentence(), 1..12).prop_map(|sentences| sentences.join(" "))
}

proptest! {
    #[test]
    fn non_empty_text_gives_non_empty_summary(text in paragraph(), ratio in 0.01f64..=1.0) {
        prop_assert!(!summarize(&text, Some(ratio), None, None).is_empty());
    }

    #[test]
    fn non_empty_with_budget(text in paragraph(), max_chars in 1usize..200) {
        prop_assert!(!summarize(&text, None, None, Some(max_chars)).is_empty());
    }

    #[test]
    fn summarize_is_idempotent(text in paragraph(), count in 1usize..6) {
        let first = summarize(&text, None, Some(count), None);
        let second = summarize(&text, None, Some(count), None);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn output_keeps_reading_order(text in paragraph(), ratio in 0.01f64..=1.0) {
        let sentences = split_sentences(&text);
        let result = summarize_with(&text, &SummaryOptions::new().with_ratio(ratio));

        let indices: Vec<_> = result.sentences.iter().map(|s| s.sentence.index).collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        for selected in &result.sentences {
            prop_assert_eq!(&sentences[selected.sentence.index], &selected.sentence);
        }
    }

    #[test]
    fn larger_ratio_never_selects_fewer(text in paragraph(), a in 0.01f64..=1.0, b in 0.01f64..=1.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let fewer = summarize_with(&text, &SummaryOptions::new().with_ratio(low));
        let more = summarize_with(&text, &SummaryOptions::new().with_ratio(high));
        prop_assert!(fewer.len() <= more.len());
    }

    #[test]
    fn budget_is_respected(text in paragraph(), max_chars in 1usize..200, count in 1usize..8) {
        let options = SummaryOptions::new().with_sentence_count(count).with_max_chars(max_chars);
        let result = summarize_with(&text, &options);
        let len = result.text().chars().count();
        if result.truncated {
            prop_assert_eq!(len, max_chars);
            prop_assert_eq!(result.len(), 1);
        } else {
            prop_assert!(len <= max_chars);
        }
    }

    #[test]
    fn whitespace_only_gives_empty(text in "[ \t\n]{0,20}") {
        prop_assert_eq!(summarize(&text, None, None, None), "");
    }
}

#[test]
fn example_cat_sentences() {
    assert_eq!(
        summarize("The cat sat. The cat played. Dogs bark loudly.", Some(0.34), None, None),
        "The cat sat."
    );
}

#[test]
fn example_hard_cut() {
    assert_eq!(summarize("Dogs bark loudly.", None, None, Some(5)), "Dogs ");
}
