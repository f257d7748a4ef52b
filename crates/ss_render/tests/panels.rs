//! Rendered panel contents for the canonical service replies.

use ss_core::{Alternative, AnalysisResult, Confidence, Language};
use ss_render::{
    progress_label, render_connection_error_panel, render_rejection_panel, render_result_panel,
    submit_label, validation_notice,
};

fn pct(v: f64) -> Confidence {
    Confidence::new(v).unwrap()
}

fn swimming() -> AnalysisResult {
    AnalysisResult {
        sport: "Swimming".into(),
        confidence: pct(87.0),
        reason: Some("Calm and enduring".into()),
        alternatives: vec![
            Alternative { sport: "Running".into(), confidence: pct(62.0) },
            Alternative { sport: "Cycling".into(), confidence: pct(55.0) },
        ],
    }
}

#[test]
fn primary_then_numbered_alternatives_in_response_order() {
    let html = render_result_panel(Language::En, &swimming());

    let header = html.find("Recommendation ready!").unwrap();
    let primary = html.find("<div class=\"sport-name\">Swimming</div>").unwrap();
    let first = html.find("1. Running").unwrap();
    let second = html.find("2. Cycling").unwrap();
    assert!(header < primary && primary < first && first < second);

    assert!(html.contains("Confidence: 87%"));
    assert!(html.contains("<span class=\"alt-confidence\">62%</span>"));
    assert!(html.contains("<span class=\"alt-confidence\">55%</span>"));
    assert!(html.contains("Calm and enduring"));
    assert_eq!(html.matches("class=\"alternative-item\"").count(), 2);
}

#[test]
fn alternatives_are_not_resorted() {
    let mut r = swimming();
    r.alternatives.reverse(); // 55 before 62
    let html = render_result_panel(Language::En, &r);
    assert!(html.find("1. Cycling").unwrap() < html.find("2. Running").unwrap());
}

#[test]
fn no_alternatives_section_without_alternatives() {
    let r = AnalysisResult {
        sport: "Chess".into(),
        confidence: pct(91.0),
        reason: None,
        alternatives: vec![],
    };
    let html = render_result_panel(Language::Ru, &r);
    assert!(html.contains("Chess"));
    assert!(html.contains("Уверенность: 91%"));
    assert!(!html.contains("alternative-recommendations"));
    assert!(!html.contains("class=\"reason\""));
}

#[test]
fn rejection_panel_shows_message_and_no_result_fields() {
    let html = render_rejection_panel(Language::En, "Text too short");
    assert!(html.contains("Text too short"));
    assert!(!html.contains("sport-name"));
    assert!(!html.contains("confidence"));
}

#[test]
fn connection_panel_is_distinct_from_rejection() {
    let conn = render_connection_error_panel(Language::Ru);
    assert!(conn.contains("Ошибка подключения"));
    assert!(conn.contains("Не удалось подключиться к серверу"));
    let rejection = render_rejection_panel(Language::Ru, "Не удалось подключиться к серверу");
    assert_ne!(conn, rejection);
}

#[test]
fn server_strings_are_escaped() {
    let mut r = swimming();
    r.sport = "<script>alert(1)</script>".into();
    let html = render_result_panel(Language::En, &r);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn labels_follow_language() {
    assert_eq!(submit_label(Language::Ru), "Анализировать");
    assert_eq!(progress_label(Language::En), "Analyzing...");
    assert_eq!(validation_notice(Language::Ru), "Пожалуйста, введите описание характера");
}
