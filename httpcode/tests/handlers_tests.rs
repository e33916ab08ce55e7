use httpcode::handlers::*;
use httpcode_core::{BaselineSource, Descriptions, StatusError, Store};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

const SMALL_HTML: &str = r#"<dl>
  <dt>200 OK</dt><dd>The request succeeded.</dd>
  <dt>301 Moved Permanently</dt><dd>The resource moved.</dd>
  <dt>404 Not Found</dt><dd>The server cannot find the requested resource.</dd>
</dl>"#;

fn setup() -> (TempDir, Descriptions) {
    colored::control::set_override(false);
    let temp_dir = TempDir::new().unwrap();
    let html = temp_dir.path().join("status codes.html");
    fs::write(&html, SMALL_HTML).unwrap();
    let store = Store::new(temp_dir.path().join("config"));
    let descriptions = Descriptions::open(store, &BaselineSource::File(html)).unwrap();
    (temp_dir, descriptions)
}

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_handle_get_prints_code_and_description() {
    let (_temp_dir, descriptions) = setup();
    let mut out = Vec::new();

    handle_get(&descriptions, "404", &mut out).unwrap();

    assert_eq!(
        output(out),
        "404: The server cannot find the requested resource.\n"
    );
}

#[test]
fn test_handle_get_unknown_code_fails() {
    let (_temp_dir, descriptions) = setup();
    let mut out = Vec::new();

    let err = handle_get(&descriptions, "418", &mut out).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<StatusError>(),
        Some(StatusError::CodeNotFound(_))
    ));
    assert!(out.is_empty());
}

#[test]
fn test_handle_edit_then_get_shows_override() {
    let (_temp_dir, mut descriptions) = setup();
    let mut out = Vec::new();

    handle_edit(&mut descriptions, "404", "Custom Not Found", &mut out).unwrap();
    assert!(output(out).contains("Description for HTTP code '404' has been updated."));

    let mut out = Vec::new();
    handle_get(&descriptions, "404", &mut out).unwrap();
    assert_eq!(output(out), "404: Custom Not Found\n");
}

#[test]
fn test_handle_reset_code_without_override() {
    let (_temp_dir, mut descriptions) = setup();
    let mut out = Vec::new();

    handle_reset(
        &mut descriptions,
        &ResetTarget::Code("404".to_string()),
        &mut Cursor::new(""),
        &mut out,
    )
    .unwrap();

    assert!(output(out).contains("has no custom description to reset"));
}

#[test]
fn test_handle_reset_code_with_override() {
    let (_temp_dir, mut descriptions) = setup();
    descriptions.set("404", "Custom").unwrap();
    let mut out = Vec::new();

    handle_reset(
        &mut descriptions,
        &ResetTarget::Code("404".to_string()),
        &mut Cursor::new(""),
        &mut out,
    )
    .unwrap();

    assert!(output(out).contains("has been reset to its original value"));
    assert!(!descriptions.has_override("404"));
}

#[test]
fn test_handle_reset_all_with_nothing_to_reset() {
    let (_temp_dir, mut descriptions) = setup();
    let mut out = Vec::new();

    handle_reset(
        &mut descriptions,
        &ResetTarget::All { yes: false },
        &mut Cursor::new(""),
        &mut out,
    )
    .unwrap();

    let text = output(out);
    assert!(text.contains("No custom descriptions to reset."));
    assert!(!text.contains("[y/N]"));
}

#[test]
fn test_handle_reset_all_declined_keeps_overrides() {
    let (_temp_dir, mut descriptions) = setup();
    descriptions.set("200", "fine").unwrap();
    descriptions.set("404", "gone").unwrap();
    let mut out = Vec::new();

    handle_reset(
        &mut descriptions,
        &ResetTarget::All { yes: false },
        &mut Cursor::new("no\n"),
        &mut out,
    )
    .unwrap();

    assert!(output(out).contains("Operation cancelled."));
    assert_eq!(descriptions.override_count(), 2);
}

#[test]
fn test_handle_reset_all_confirmed() {
    let (_temp_dir, mut descriptions) = setup();
    descriptions.set("200", "fine").unwrap();
    let mut out = Vec::new();

    handle_reset(
        &mut descriptions,
        &ResetTarget::All { yes: false },
        &mut Cursor::new("YES\n"),
        &mut out,
    )
    .unwrap();

    assert!(output(out).contains("have been reset"));
    assert_eq!(descriptions.override_count(), 0);
}

#[test]
fn test_handle_reset_all_yes_skips_prompt() {
    let (_temp_dir, mut descriptions) = setup();
    descriptions.set("200", "fine").unwrap();
    let mut out = Vec::new();

    // Empty input: a prompt would read EOF and cancel.
    handle_reset(
        &mut descriptions,
        &ResetTarget::All { yes: true },
        &mut Cursor::new(""),
        &mut out,
    )
    .unwrap();

    assert!(!output(out).contains("[y/N]"));
    assert_eq!(descriptions.override_count(), 0);
}

#[test]
fn test_generate_listing_groups_by_class() {
    let (_temp_dir, mut descriptions) = setup();
    descriptions.set("404", "Custom Not Found").unwrap();

    let listing = generate_listing(&descriptions, false);

    assert!(listing.contains("## success"));
    assert!(listing.contains("## redirection"));
    assert!(listing.contains("## client error"));
    assert!(listing.contains("200  The request succeeded."));
    assert!(listing.contains("404* Custom Not Found"));
    assert!(listing.contains("3 codes, 1 custom"));

    let success = listing.find("## success").unwrap();
    let client = listing.find("## client error").unwrap();
    assert!(success < client);
}

#[test]
fn test_generate_listing_custom_only() {
    let (_temp_dir, mut descriptions) = setup();

    assert!(generate_listing(&descriptions, true).contains("No custom descriptions."));

    descriptions.set("301", "Gone elsewhere").unwrap();
    let listing = generate_listing(&descriptions, true);

    assert!(listing.contains("301* Gone elsewhere"));
    assert!(!listing.contains("200"));
}

#[test]
fn test_handle_rebuild_declined() {
    let (temp_dir, mut descriptions) = setup();
    let source = BaselineSource::File(temp_dir.path().join("status codes.html"));
    let mut out = Vec::new();

    handle_rebuild(&mut descriptions, &source, false, &mut Cursor::new("\n"), &mut out).unwrap();

    assert!(output(out).contains("Operation cancelled."));
}

#[test]
fn test_handle_rebuild_with_yes() {
    let (temp_dir, mut descriptions) = setup();
    let html = temp_dir.path().join("more.html");
    fs::write(
        &html,
        "<dl><dt>200 OK</dt><dd>Fine.</dd><dt>500 Internal Server Error</dt><dd>Broken.</dd></dl>",
    )
    .unwrap();
    let mut out = Vec::new();

    handle_rebuild(
        &mut descriptions,
        &BaselineSource::File(html),
        true,
        &mut Cursor::new(""),
        &mut out,
    )
    .unwrap();

    assert!(output(out).contains("2 codes saved"));
    assert_eq!(descriptions.get("500").unwrap().description, "Broken.");
}

#[test]
fn test_handle_help_general_and_topic() {
    colored::control::set_override(false);

    let mut out = Vec::new();
    handle_help(None, &mut out).unwrap();
    let general = output(out);
    assert!(general.contains("edit"));
    assert!(general.contains("reset"));

    let mut out = Vec::new();
    handle_help(Some("reset"), &mut out).unwrap();
    let reset = output(out);
    assert!(reset.contains("--all"));
    assert!(reset.contains("--yes"));
    assert!(reset.contains("httpcode reset --all --yes"));
}

#[test]
fn test_handle_help_unknown_topic_fails() {
    let mut out = Vec::new();
    assert!(handle_help(Some("frobnicate"), &mut out).is_err());
}

#[test]
fn test_print_prompt_normalizes_answer() {
    colored::control::set_override(false);
    let mut out = Vec::new();

    let answer = print_prompt("Continue?", &mut Cursor::new("  Yes \n"), &mut out).unwrap();

    assert_eq!(answer, "yes");
    assert_eq!(output(out), "Continue? ");
}
