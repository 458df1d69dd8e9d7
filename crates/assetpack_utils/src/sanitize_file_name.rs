/// Replaces everything outside `[A-Za-z0-9_-]` with `_`, so a derived bundle name is always safe to
/// substitute into a filename template.
pub fn sanitize_file_name(str: &str) -> String {
  str
    .chars()
    .map(|char| if char.is_ascii_alphanumeric() || matches!(char, '-' | '_') { char } else { '_' })
    .collect()
}

#[test]
fn test_sanitize_file_name() {
  assert_eq!(sanitize_file_name("\0+a=Z_0-"), "__a_Z_0-");
  assert_eq!(sanitize_file_name("adaptivecards-hc-editor"), "adaptivecards-hc-editor");
  assert_eq!(sanitize_file_name("card editor.v2"), "card_editor_v2");
}
