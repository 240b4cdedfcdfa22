use asciitable::{
    HorizontalAlign, justify, max_line_length, paragraphs, split_text_into_lines_of_max_length,
};

#[test]
fn trailing_empty_paragraph_is_returned() {
    assert_eq!(paragraphs("").collect::<Vec<_>>(), vec![""]);
    assert_eq!(paragraphs("\n").collect::<Vec<_>>(), vec!["", ""]);
}

#[test]
fn paragraph_iterator_handles_mixed_breaks() {
    assert_eq!(
        paragraphs("\n\nSome text\r\n\rmore text\rtext\nend").collect::<Vec<_>>(),
        vec!["", "", "Some text", "", "more text", "text", "end"]
    );
}

#[test]
fn max_line_length_spans_paragraphs() {
    assert_eq!(max_line_length(""), 0);
    assert_eq!(max_line_length("ab\r\nlongest one\nx"), 11);
}

#[test]
fn text_splitting() {
    let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nam pretium eu \
                dolor sodales rutrum. Also here is a very long link: \
                http://www.example.tld/some/resource/file.ext a few final words";
    let expected = vec![
        "Lorem ipsum",
        "dolor sit",
        "amet,",
        "consectetur",
        "adipiscing",
        "elit. Nam",
        "pretium eu",
        "dolor",
        "sodales",
        "rutrum. Also",
        "here is a",
        "very long",
        "link:",
        "http://www.e",
        "xample.tld/s",
        "ome/resource",
        "/file.ext a",
        "few final",
        "words",
    ];
    assert_eq!(split_text_into_lines_of_max_length(text, 12), expected);
}

#[test]
fn text_splitting_keeps_runs_of_spaces() {
    assert_eq!(
        split_text_into_lines_of_max_length("here is    a  strange string", 8),
        vec!["here is ", "  a ", "strange", "string"]
    );
}

#[test]
fn justify_pads_to_exact_width() {
    let aligns = [
        HorizontalAlign::Left,
        HorizontalAlign::Center,
        HorizontalAlign::Right,
    ];
    let expected = ["test          ", "     test     ", "          test"];
    let expected_with_padding = ["   test       ", "     test     ", "       test   "];
    for (idx, align) in aligns.into_iter().enumerate() {
        assert_eq!(justify("test", align, 14, 0), expected[idx]);
        assert_eq!(justify("test", align, 14, 3), expected_with_padding[idx]);
    }

    // Centering an odd surplus leaves the extra space on the right.
    assert_eq!(justify("test", HorizontalAlign::Center, 9, 0), "  test   ");

    // Justifying to the current width or less is a no-op, even with padding.
    assert_eq!(justify("test", HorizontalAlign::Center, 4, 0), "test");
    assert_eq!(justify("test", HorizontalAlign::Center, 3, 0), "test");
    assert_eq!(justify("test", HorizontalAlign::Center, 4, 3), "test");
}
