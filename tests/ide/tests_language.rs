//! Language assembly tests, including the end-to-end editing scenario.

use scalet::ide::{Extension, IndentContext, Tag, scalet};
use scalet::syntax::{SyntaxElement, SyntaxKind};

use crate::helpers::tree_fixtures::*;

// =============================================================================
// ASSEMBLY
// =============================================================================

#[test]
fn test_single_shared_unit() {
    let a: *const _ = scalet();
    let b: *const _ = scalet();
    assert_eq!(a, b, "every consumer sees the same language unit");
}

#[test]
fn test_language_metadata() {
    let language = scalet().language();
    assert_eq!(language.name(), "scalet");
    assert_eq!(language.comment_tokens().line, Some("//"));
}

#[test]
fn test_completion_is_a_named_extension() {
    let support = scalet();

    assert!(matches!(
        support.extension("completion"),
        Some(Extension::Completion(_))
    ));
    assert!(support.extension("hover").is_none());
    assert!(support.completion().is_some());
}

// =============================================================================
// END TO END: `val x = add(1, add(2, 3))`
// =============================================================================

#[test]
fn test_end_to_end_editing_scenario() {
    let fx = val_binding_with_nested_calls();
    assert_eq!(fx.text, "val x = add(1, add(2, 3))");

    let lang = scalet().language();

    // Both calls are structurally application nodes with no semantic tag.
    let apps = find_nodes(&fx.root, SyntaxKind::Application);
    assert_eq!(apps.len(), 2);
    for app in &apps {
        let element = SyntaxElement::from(app.clone());
        assert_eq!(lang.tag_of(&element), None);
    }

    // `val` is tagged as a keyword.
    let val_tok = find_token(&fx.root, SyntaxKind::ValKw).unwrap();
    assert_eq!(
        lang.tag_of(&SyntaxElement::from(val_tok)),
        Some(Tag::Keyword)
    );

    // A new line typed right after the outer `(` lands one unit past the
    // paren's column.
    let unit = 4;
    let cx = IndentContext::new(&fx.line_index, unit);
    let outer = &apps[0];
    let open_col = cx.column(outer.text_range().start());
    assert_eq!(open_col, 11);
    assert_eq!(lang.indent_for(outer, &cx), Some(open_col + unit));
}
