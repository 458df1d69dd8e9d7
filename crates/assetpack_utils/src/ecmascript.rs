use std::sync::LazyLock;

use regex::Regex;

static GLOBAL_NAME_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// ASCII subset of JS identifier names. Enough for a global a bundle is exposed under when loaded
/// through a plain `<script>` tag.
pub fn is_valid_global_name(name: &str) -> bool {
  GLOBAL_NAME_RE.is_match(name)
}

#[test]
fn test_is_valid_global_name() {
  assert!(is_valid_global_name("ACHCEditor"));
  assert!(is_valid_global_name("$card_1"));
  assert!(!is_valid_global_name("1aaaa"));
  assert!(!is_valid_global_name("card-editor"));
  assert!(!is_valid_global_name(""));
}
