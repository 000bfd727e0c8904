//! Placement tests through the public engine API.

use keylens::{DecorationEngine, LineCol};
use rstest::rstest;

use crate::helpers::editor::RecordingEditor;
use crate::helpers::project_fixtures::TempProject;

const CONFIG: &str = r#"{"paths": ["locales/*.json"]}"#;
const EN: &str = r#"{"greeting": "hello", "nav": {"home": "Home", "menu": {"open": "Open menu"}}}"#;

fn engine_for(project: &TempProject, editor: &mut RecordingEditor) -> DecorationEngine {
    let mut engine = DecorationEngine::new(project.root(), editor);
    engine.load(editor);
    engine
}

// ============================================================================
// QUOTE MATCHING
// ============================================================================

#[rstest]
#[case(r#"const x = "greeting";"#, r#""greeting""#)]
#[case("const x = 'greeting';", "'greeting'")]
#[case("const x = `greeting`;", "`greeting`")]
#[case(r#"t("nav.home")"#, r#""nav.home""#)]
#[case("t('nav.menu.open')", "'nav.menu.open'")]
fn test_matching_quotes_produce_a_hint(#[case] text: &str, #[case] literal: &str) {
    let project = TempProject::with(CONFIG, &[("locales/en.json", EN)]);
    let mut editor = RecordingEditor::with_document("app.ts", text);
    let engine = engine_for(&project, &mut editor);

    assert_eq!(editor.shown_literals(), vec![literal.to_string()]);
    let start = text.find(literal).unwrap() as u32;
    assert_eq!(u32::from(engine.placements()[0].range.start()), start);
}

#[rstest]
#[case(r#"const x = 'greeting";"#)]
#[case(r#"const x = "greeting`;"#)]
#[case("const x = greeting;")]
#[case(r#"const x = "greeting.extra";"#)]
#[case(r#"const x = "nav";"#)]
fn test_no_hint_without_exact_quoted_key(#[case] text: &str) {
    let project = TempProject::with(CONFIG, &[("locales/en.json", EN)]);
    let mut editor = RecordingEditor::with_document("app.ts", text);
    let engine = engine_for(&project, &mut editor);

    assert!(engine.placements().is_empty());
    assert!(editor.shown.is_empty());
}

#[test]
fn test_greeting_end_to_end() {
    let project = TempProject::with(
        r#"{"paths": ["strings.json"]}"#,
        &[("strings.json", r#"{"greeting":"hello"}"#)],
    );
    let mut editor = RecordingEditor::with_document("main.js", r#"const x = "greeting";"#);
    let engine = engine_for(&project, &mut editor);

    assert_eq!(engine.placements().len(), 1);
    let placement = &engine.placements()[0];
    assert_eq!(u32::from(placement.range.start()), 10);
    assert_eq!(u32::from(placement.range.end()), 20);
    assert_eq!(placement.line(), 0);
    assert_eq!(editor.shown_labels(), vec!["➜ hello"]);
}

#[test]
fn test_every_occurrence_is_annotated() {
    let project = TempProject::with(CONFIG, &[("locales/en.json", EN)]);
    let text = "a('greeting')\nb(\"nav.home\") c(`greeting`)\n";
    let mut editor = RecordingEditor::with_document("app.ts", text);
    engine_for(&project, &mut editor);

    assert_eq!(
        editor.shown_labels(),
        vec!["➜ hello", "➜ hello", "➜ Home"]
    );
    assert_eq!(
        editor.shown_literals(),
        vec!["'greeting'", "`greeting`", "\"nav.home\""]
    );
}

// ============================================================================
// FILE FILTERS
// ============================================================================

#[rstest]
#[case(r#""extensions": ["json"]"#, "a.ts", false)]
#[case(r#""extensions": ["json"]"#, "a.json", true)]
#[case(r#""extensions": ["ts", "tsx"]"#, "/src/view.tsx", true)]
#[case(r#""filePatterns": ["*.vue"]"#, "App.vue", true)]
#[case(r#""filePatterns": ["*.vue"]"#, "App.vue.ts", false)]
#[case(r#""filePatterns": ["*.spec.*"]"#, "login.spec.ts", true)]
fn test_file_filters(#[case] filter: &str, #[case] file_name: &str, #[case] decorated: bool) {
    let config = format!(r#"{{"paths": ["locales/*.json"], {filter}}}"#);
    let project = TempProject::with(&config, &[("locales/en.json", EN)]);
    let mut editor = RecordingEditor::with_document(file_name, r#"{"title": "greeting"}"#);
    let engine = engine_for(&project, &mut editor);

    assert_eq!(!engine.placements().is_empty(), decorated);
    assert_eq!(engine.should_apply_to_file(file_name), decorated);
}

// ============================================================================
// CLICK TO HIDE
// ============================================================================

#[test]
fn test_click_hides_line_and_click_away_restores() {
    let project = TempProject::with(CONFIG, &[("locales/en.json", EN)]);
    let text = "t('greeting')\nt('nav.home')";
    let mut editor = RecordingEditor::with_document("app.ts", text);
    let mut engine = engine_for(&project, &mut editor);
    assert_eq!(editor.shown.len(), 2);

    engine.handle_selection_change(LineCol::new(1, 4), &mut editor);
    assert_eq!(editor.shown_labels(), vec!["➜ hello"]);

    engine.handle_selection_change(LineCol::new(0, 5), &mut editor);
    assert!(editor.shown.is_empty());
    assert_eq!(engine.hidden_lines(), vec![0, 1]);

    // Nothing on line 1 is clickable any more, so this is "elsewhere"
    engine.handle_selection_change(LineCol::new(1, 4), &mut editor);
    assert!(engine.hidden_lines().is_empty());
    assert_eq!(editor.shown.len(), 2);
}
