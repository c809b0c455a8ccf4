use slipslope::{to_html, to_html_into, translate, translate_to_writer, HtmlWriter};

// Bold toggle

#[test]
fn bold_pair() {
    assert_eq!(to_html("**bold**"), "<b>bold</b>");
}

#[test]
fn bold_three_toggles_leave_span_open() {
    let result = to_html("x **a** y **b");
    assert_eq!(result, "x <b>a</b> y <b>b");
    let tags: Vec<_> = result.match_indices("b>").map(|(i, _)| &result[i - 1..i]).collect();
    assert_eq!(tags, ["<", "/", "<"]);
}

#[test]
fn documented_toggle_sentence() {
    let result = to_html("Toggling bold text **on and** off and** on again and then **off again.");
    assert_eq!(
        result,
        "Toggling bold text <b>on and</b> off and<b> on again and then </b>off again."
    );
}

#[test]
fn single_star_is_text() {
    assert_eq!(to_html("a*b*c"), "a*b*c");
}

#[test]
fn trailing_single_star() {
    assert_eq!(to_html("end*"), "end*");
}

// Unordered lists

#[test]
fn unordered_closed_by_blank_line() {
    assert_eq!(to_html("- a\n- b\n\nc"), "<ul><li>a</li><li>b</li></ul>\nc");
}

#[test]
fn unordered_closed_at_end_of_input() {
    assert_eq!(to_html("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn unordered_multi_line_item() {
    assert_eq!(
        to_html("- Item 2\nwhich has another line below it\n- Item 3"),
        "<ul><li>Item 2 which has another line below it</li><li>Item 3</li></ul>"
    );
}

#[test]
fn marker_right_after_blank_line_is_text() {
    assert_eq!(to_html("- a\n\n- b"), "<ul><li>a</li></ul>\n- b");
    assert_eq!(to_html("x\n\n1. y"), "x\n1. y");
}

#[test]
fn two_lists_separated_by_two_blank_lines() {
    assert_eq!(
        to_html("- a\n\n\n- b"),
        "<ul><li>a</li></ul>\n<ul><li>b</li></ul>"
    );
}

// Ordered lists

#[test]
fn ordered_with_trailing_newline() {
    assert_eq!(to_html("1. x\n2. y\n"), "<ol><li>x</li><li>y</li></ol>\n");
}

#[test]
fn ordered_numbering_is_ignored() {
    assert_eq!(to_html("1. x\n4. y\n"), "<ol><li>x</li><li>y</li></ol>\n");
    assert_eq!(to_html("9. x\n3. y\n"), "<ol><li>x</li><li>y</li></ol>\n");
}

#[test]
fn ordered_long_number() {
    assert_eq!(
        to_html("123456789012345678901234567890. big"),
        "<ol><li>big</li></ol>"
    );
}

// Mixed and edge cases

#[test]
fn marker_kind_change_closes_previous_list() {
    assert_eq!(
        to_html("- a\n1. b\n"),
        "<ul><li>a</li></ul><ol><li>b</li></ol>\n"
    );
}

#[test]
fn passthrough_html_closes_list() {
    assert_eq!(
        to_html("- a\n<hr>\n- b"),
        "<ul><li>a</li></ul><hr><ul><li>b</li></ul>"
    );
}

#[test]
fn html_is_not_escaped() {
    assert_eq!(to_html("a < b & c > d"), "a < b & c > d");
}

#[test]
fn empty_input() {
    assert_eq!(to_html(""), "");
}

#[test]
fn only_newlines() {
    assert_eq!(to_html("\n"), "\n");
    assert_eq!(to_html("\n\n"), "\n\n");
}

#[test]
fn not_idempotent() {
    let once = to_html("a\n\n\n- b");
    assert_eq!(once, "a\n\n- b");
    // Each pass folds one blank line into the text around it.
    assert_eq!(to_html(&once), "a\n- b");
}

// Entry points agree

#[test]
fn entry_points_agree() {
    let input = "- a\n- **b**\n\n1. c\n";
    let expected = to_html(input);

    let mut buf: Vec<u8> = Vec::new();
    to_html_into(input, &mut buf);
    assert_eq!(buf, expected.as_bytes());

    let mut writer = HtmlWriter::new();
    translate(&mut writer, input.as_bytes()).unwrap();
    assert_eq!(writer.as_bytes(), expected.as_bytes());

    let mut streamed: Vec<u8> = Vec::new();
    let written = translate_to_writer(&mut streamed, input.as_bytes()).unwrap();
    assert_eq!(streamed, expected.as_bytes());
    assert_eq!(written, expected.len() as u64);
}

#[test]
fn concurrent_translations_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let input = if i % 2 == 0 { "**a\n- b" } else { "1. x" };
                to_html(input)
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let out = h.join().unwrap();
        if i % 2 == 0 {
            assert_eq!(out, "<b>a<ul><li>b</li></ul>");
        } else {
            assert_eq!(out, "<ol><li>x</li></ol>");
        }
    }
}
