//! Follow-up suggestions over a conversation.

use folio::{
    candidate_suggestions, classify_intent, suggest, suggest_with_rng, ConversationMessage,
    Intent, IntentType, SuggestionSet, MAX_SUGGESTIONS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const REACT_PAIR: [&str; 2] = [
    "What React patterns do you use?",
    "Show me your React components library",
];

#[test]
fn test_empty_history_for_every_intent() {
    for kind in [
        IntentType::Project,
        IntentType::Blog,
        IntentType::Tech,
        IntentType::Experience,
        IntentType::General,
    ] {
        assert!(suggest(&[], &Intent::new(kind, vec![])).is_empty());
    }
}

#[test]
fn test_react_history_with_tech_intent() {
    let history = vec![ConversationMessage::user("Do you know react?")];
    let intent = Intent::new(IntentType::Tech, vec![]);

    let allowed: Vec<&str> = REACT_PAIR
        .iter()
        .chain(SuggestionSet::TechStack.questions().iter())
        .copied()
        .collect();

    for seed in 0..32 {
        let picked = suggest_with_rng(&history, &intent, &mut StdRng::seed_from_u64(seed));
        assert!(picked.len() <= MAX_SUGGESTIONS);
        for question in &picked {
            assert!(allowed.contains(&question.as_str()), "{}", question);
        }
    }

    // Unseeded path obeys the same bounds
    let picked = suggest(&history, &intent);
    assert_eq!(picked.len(), MAX_SUGGESTIONS);
    assert!(picked.iter().all(|q| allowed.contains(&q.as_str())));
}

#[test]
fn test_no_duplicates_in_output() {
    let history = vec![ConversationMessage::user(
        "react typescript nx monorepo architecture blog article",
    )];
    let intent = classify_intent("react typescript nx monorepo architecture blog article");

    for seed in 0..16 {
        let mut picked = suggest_with_rng(&history, &intent, &mut StdRng::seed_from_u64(seed));
        let before = picked.len();
        picked.sort();
        picked.dedup();
        assert_eq!(picked.len(), before);
    }
}

#[test]
fn test_seed_controls_order() {
    let history = vec![ConversationMessage::user("typescript and react")];
    let intent = Intent::new(IntentType::Project, vec![]);

    let runs: Vec<Vec<String>> = (0..2)
        .map(|_| suggest_with_rng(&history, &intent, &mut StdRng::seed_from_u64(99)))
        .collect();
    assert_eq!(runs[0], runs[1]);
}

#[test]
fn test_follows_the_conversation() {
    let mut history = vec![
        ConversationMessage::user("tell me about your blog"),
        ConversationMessage::assistant("I write about monorepos."),
    ];
    let intent = Intent::new(IntentType::General, vec![]);
    let before = candidate_suggestions(&history, &intent);
    assert!(before.contains(&"What topics do you write about?"));

    history.push(ConversationMessage::user("what about typescript?"));
    let after = candidate_suggestions(&history, &intent);
    assert!(after.contains(&"How do you structure TypeScript projects?"));
    assert!(!after.contains(&"What topics do you write about?"));
}

#[test]
fn test_history_round_trips_through_json() {
    let history: Vec<ConversationMessage> = serde_json::from_str(
        r#"[{"role": "user", "content": "React?"}, {"role": "assistant", "content": "Yes"}]"#,
    )
    .unwrap();
    let candidates = candidate_suggestions(&history, &Intent::new(IntentType::Tech, vec![]));
    assert_eq!(&candidates[..2], &REACT_PAIR[..]);
}
