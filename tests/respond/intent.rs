//! Intent classification as seen from a chat front end.

use folio::{classify_intent, tokenize, IntentType, INTENT_RULES};

#[test]
fn test_typical_questions() {
    let cases = [
        ("What projects have you built?", IntentType::Project),
        ("Show me your latest blog posts", IntentType::Blog),
        ("What technologies do you use?", IntentType::Tech),
        ("How many years of experience do you have?", IntentType::Experience),
        ("Hi there!", IntentType::General),
    ];
    for (query, expected) in cases {
        assert_eq!(classify_intent(query).kind, expected, "{}", query);
    }
}

#[test]
fn test_first_declared_rule_wins() {
    // Mentions an article and a project; project is declared first
    assert_eq!(
        classify_intent("Did you write an article about that project?").kind,
        IntentType::Project
    );
    // Mentions a tool and a blog; blog is declared before tech
    assert_eq!(
        classify_intent("Which tool did the blog cover?").kind,
        IntentType::Blog
    );
}

#[test]
fn test_keywords_are_query_tokens() {
    for query in ["What's your tech stack?", "", "Nx monorepo architecture"] {
        assert_eq!(classify_intent(query).keywords, tokenize(query));
    }
}

#[test]
fn test_every_rule_has_triggers() {
    for rule in INTENT_RULES {
        assert!(!rule.triggers.is_empty());
        for trigger in rule.triggers {
            assert_eq!(*trigger, trigger.to_lowercase());
        }
    }
}
