use rand::{SeedableRng, rngs::StdRng};

use super::*;

#[test]
fn every_category_has_fifteen_distinct_captions() {
    for category in Category::CYCLE {
        let list = captions(category);
        assert_eq!(list.len(), 15, "{category}");
        let mut sorted = list.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 15, "{category} has duplicates");
    }
}

#[test]
fn picks_come_from_the_requested_list() {
    let mut rng = StdRng::seed_from_u64(3);
    for category in Category::CYCLE {
        for _ in 0..20 {
            let text = caption_for(category, &mut rng);
            assert!(captions(category).contains(&text));
        }
    }
}

#[test]
fn picks_cover_the_whole_list_eventually() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..2000 {
        seen.insert(caption_for(Category::Food, &mut rng));
    }
    assert_eq!(seen.len(), 15);
}

#[test]
fn fallback_caption_is_a_general_caption() {
    assert!(captions(Category::General).contains(&FALLBACK_CAPTION));
    let d = CaptionSuggestion::default();
    assert_eq!(d.category, Category::General);
    assert_eq!(d.text, FALLBACK_CAPTION);
}

#[test]
fn undecodable_bytes_suggest_a_general_caption() {
    let mut rng = StdRng::seed_from_u64(5);
    let s = suggest_caption(b"not an image", &mut rng);
    assert_eq!(s.category, Category::General);
    assert!(captions(Category::General).contains(&s.text.as_str()));
}
