//! Tests for the processing API: tokenize then serialize in a named format

use doc_tokens::doc::processor::{available_formats, process, ProcessingError};

const SAMPLE: &str = "Returns the {@code value}.\n\
                      See {@link Other#thing(int) the other}\r\n\
                      done";

#[test]
fn test_simple_format() {
    let output = process(SAMPLE, "simple").unwrap();
    insta::assert_snapshot!(output, @r###"
    <text:Returns the ><inline-tag:code| value><text:.><line-break:\n>
    <text:See ><inline-tag:link| Other#thing(int) the other><line-break:\r\n>
    <text:done>
    "###);
}

#[test]
fn test_json_format() {
    let output = process("a {@b c}\nd", "json").unwrap();
    insta::assert_snapshot!(output, @r###"
    [
      {
        "Text": "a "
      },
      {
        "InlineTag": {
          "value": "{@b c}",
          "tag": {
            "name": "b",
            "content": " c"
          }
        }
      },
      {
        "LineBreak": "\n"
      },
      {
        "Text": "d"
      }
    ]
    "###);
}

#[test]
fn test_raw_format() {
    assert_eq!(process(SAMPLE, "raw").unwrap(), SAMPLE);
}

#[test]
fn test_empty_source() {
    assert_eq!(process("", "simple").unwrap(), "");
    assert_eq!(process("", "json").unwrap(), "[]");
    assert_eq!(process("", "raw").unwrap(), "");
}

#[test]
fn test_unknown_format() {
    match process(SAMPLE, "html") {
        Err(ProcessingError::UnknownFormat { name, available }) => {
            assert_eq!(name, "html");
            assert_eq!(available, available_formats());
        }
        other => panic!("Expected UnknownFormat error, got {other:?}"),
    }
}

#[test]
fn test_every_listed_format_processes() {
    for format in available_formats() {
        assert!(process(SAMPLE, &format).is_ok(), "format {format} failed");
    }
}
