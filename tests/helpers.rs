// Shared test helpers: the analysis vector set.
//
// The engine has two call sites (the authoritative batch analysis and the
// live editor session). Both are exercised against this one vector set so
// the two surfaces cannot drift apart.

use seo_audit::PostSnapshot;

/// A named snapshot plus, where calibrated, its expected aggregate score.
#[allow(dead_code)] // Used by other test files
pub struct AnalysisVector {
    pub name: &'static str,
    pub snapshot: PostSnapshot,
    pub expected_score: Option<u32>,
}

/// 320 words containing "transformers" exactly four times (1.25% density).
#[allow(dead_code)] // Used by other test files
pub fn dense_transformer_content() -> String {
    let filler = vec!["alpha"; 316].join(" ");
    format!(
        "<p>{} transformers transformers transformers transformers</p>",
        filler
    )
}

/// The shared vector set.
#[allow(dead_code)] // Used by other test files
pub fn analysis_vectors() -> Vec<AnalysisVector> {
    vec![
        AnalysisVector {
            name: "empty snapshot",
            snapshot: PostSnapshot::default(),
            expected_score: Some(0),
        },
        AnalysisVector {
            name: "bare post",
            snapshot: PostSnapshot {
                title: "AI".to_string(),
                meta_description: Some(String::new()),
                excerpt: Some(String::new()),
                content: "<p>short</p>".to_string(),
                focus_keyword: Some(String::new()),
                has_featured_image: false,
                slug: "ai".to_string(),
                ..Default::default()
            },
            expected_score: Some(0),
        },
        AnalysisVector {
            name: "well optimized post",
            snapshot: PostSnapshot {
                title: "Understanding transformers in modern NLP work".to_string(),
                meta_description: Some("d".repeat(140)),
                content: dense_transformer_content(),
                focus_keyword: Some("transformers".to_string()),
                has_featured_image: true,
                slug: "understanding-transformers".to_string(),
                ..Default::default()
            },
            expected_score: Some(90),
        },
        AnalysisVector {
            name: "good title only",
            snapshot: PostSnapshot {
                title: "a".repeat(45),
                content: "<p>a few words</p>".to_string(),
                slug: "good-title".to_string(),
                ..Default::default()
            },
            expected_score: Some(20),
        },
        AnalysisVector {
            name: "keyword stuffed",
            snapshot: PostSnapshot {
                title: "cats cats cats and more cats everywhere you look".to_string(),
                content: "<p>cats cats cats cats cats and a word</p>".to_string(),
                focus_keyword: Some("cats".to_string()),
                slug: "cats".to_string(),
                ..Default::default()
            },
            expected_score: None,
        },
        AnalysisVector {
            name: "malformed markup",
            snapshot: PostSnapshot {
                title: "A post whose body arrives with broken markup".to_string(),
                content: "<div><p>open <b>bold<i>deep</div> tail <br att=".to_string(),
                slug: "broken".to_string(),
                ..Default::default()
            },
            expected_score: None,
        },
        AnalysisVector {
            name: "unicode content",
            snapshot: PostSnapshot {
                title: "Ünïcödé titles are counted by characters, naturally".to_string(),
                content: "<p>Résumé naïveté café. Füße größer!</p>".to_string(),
                focus_keyword: Some("café".to_string()),
                slug: "unicode".to_string(),
                ..Default::default()
            },
            expected_score: None,
        },
    ]
}
