//! Decoder integration tests: line classification, nesting, tabular rows,
//! strict/permissive divergence and resource limits.

use toonkit::{
    decode, decode_streaming, decode_with_config, toon, Error, ToonConfig, Value,
};

#[test]
fn test_simple_object() {
    assert_eq!(
        decode("age: 30\nname: Alice").unwrap(),
        toon!({ "age": 30, "name": "Alice" })
    );
}

#[test]
fn test_special_roots() {
    assert_eq!(decode("").unwrap(), Value::Null);
    assert_eq!(decode("   \n  ").unwrap(), Value::Null);
    assert_eq!(decode("{}").unwrap(), toon!({}));
    assert_eq!(decode("[]").unwrap(), toon!([]));
}

#[test]
fn test_inline_values() {
    let value = decode(
        "a: null\nb: true\nc: false\nd: []\ne: {}\nf: 42\ng: -3.5\nh: 1e6\ni: plain text",
    )
    .unwrap();
    assert_eq!(
        value,
        toon!({
            "a": null,
            "b": true,
            "c": false,
            "d": [],
            "e": {},
            "f": 42,
            "g": (-3.5),
            "h": 1e6,
            "i": "plain text"
        })
    );
}

#[test]
fn test_quoted_values_and_escapes() {
    assert_eq!(
        decode("v: \"42\"").unwrap(),
        toon!({ "v": "42" })
    );
    assert_eq!(
        decode("v: \"line1\\nline2\\t\\\"q\\\"\"").unwrap(),
        toon!({ "v": "line1\nline2\t\"q\"" })
    );
    assert_eq!(
        decode("v: \"caf\\u00e9\"").unwrap(),
        toon!({ "v": "caf\u{e9}" })
    );
    assert_eq!(decode("v: \"\"").unwrap(), toon!({ "v": "" }));
}

#[test]
fn test_integer_overflowing_i64_decodes_as_string() {
    let value = decode("a: 99999999999999999999").unwrap();
    assert_eq!(
        value,
        toon!({ "a": "99999999999999999999" })
    );
    // Within range still parses numerically.
    assert_eq!(
        decode("a: 9223372036854775807").unwrap(),
        toon!({ "a": 9223372036854775807i64 })
    );
}

#[test]
fn test_quoted_keys() {
    assert_eq!(
        decode("\"order:id\": 1").unwrap(),
        toon!({ "order:id": 1 })
    );
}

#[test]
fn test_key_without_value_is_null() {
    assert_eq!(decode("k:").unwrap(), toon!({ "k": null }));
}

#[test]
fn test_nested_blocks() {
    let text = "ok: true\nuser:\n  age: 30\n  name: Alice";
    assert_eq!(
        decode(text).unwrap(),
        toon!({ "ok": true, "user": { "age": 30, "name": "Alice" } })
    );
}

#[test]
fn test_custom_indent_size() {
    let text = "user:\n    name: Alice";
    let config = ToonConfig::new().with_indent_size(4);
    assert_eq!(
        decode_with_config(text, &config).unwrap(),
        toon!({ "user": { "name": "Alice" } })
    );
    // With the default width the nested line is over-indented.
    assert!(decode(text).is_err());
}

#[test]
fn test_root_list() {
    assert_eq!(decode("- 1\n- 2").unwrap(), toon!([1, 2]));
}

#[test]
fn test_list_array() {
    let text = "xs:\n  - 1\n  - two\n  - null\n  - true";
    assert_eq!(
        decode(text).unwrap(),
        toon!({ "xs": [1, "two", null, true] })
    );
}

#[test]
fn test_bare_dash_nested_items() {
    let text = "m:\n  -\n    - 1\n    - 2\n  -\n    - 3";
    assert_eq!(decode(text).unwrap(), toon!({ "m": [[1, 2], [3]] }));

    let text = "xs:\n  -\n    a: 1\n  -\n    b: 2";
    assert_eq!(
        decode(text).unwrap(),
        toon!({ "xs": [{ "a": 1 }, { "b": 2 }] })
    );
}

#[test]
fn test_double_dash_inline_nesting() {
    let text = "xs:\n  - - 1\n  - - 2";
    assert_eq!(decode(text).unwrap(), toon!({ "xs": [[1, 2]] }));
}

#[test]
fn test_tabular_basic() {
    let text = "users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user";
    assert_eq!(
        decode(text).unwrap(),
        toon!({
            "users": [
                { "id": 1, "name": "Alice", "role": "admin" },
                { "id": 2, "name": "Bob", "role": "user" }
            ]
        })
    );
}

#[test]
fn test_tabular_at_root() {
    let text = "[2]{id}:\n  1\n  2";
    assert_eq!(decode(text).unwrap(), toon!([{ "id": 1 }, { "id": 2 }]));
}

#[test]
fn test_tabular_quoted_cells() {
    let text = "rows[2]{a}:\n  \"x,y\"\n  z";
    assert_eq!(
        decode(text).unwrap(),
        toon!({ "rows": [{ "a": "x,y" }, { "a": "z" }] })
    );
}

#[test]
fn test_tabular_pipe_delimiter() {
    let text = "rows[2]{a,b}|:\n  x,y|1\n  z|2";
    assert_eq!(
        decode(text).unwrap(),
        toon!({ "rows": [{ "a": "x,y", "b": 1 }, { "a": "z", "b": 2 }] })
    );
}

#[test]
fn test_tabular_tab_delimiter() {
    let text = "rows[2]{a,b}\t:\n  x\t1\n  y\t2";
    assert_eq!(
        decode(text).unwrap(),
        toon!({ "rows": [{ "a": "x", "b": 1 }, { "a": "y", "b": 2 }] })
    );
}

#[test]
fn test_tabular_fewer_rows_than_declared() {
    // The count is an upper bound on rows consumed, not a promise.
    let text = "items[3]{id}:\n  1\n  2";
    assert_eq!(
        decode(text).unwrap(),
        toon!({ "items": [{ "id": 1 }, { "id": 2 }] })
    );
}

#[test]
fn test_tabular_rows_beyond_count_not_consumed() {
    let text = "items[1]{id}:\n  1\n  2";
    // Strict: the leftover line is over-indented relative to the object.
    let err = decode(text).unwrap_err();
    assert_eq!(err, Error::decoding(3, "unexpected indentation"));
    // Permissive: the leftover line is skipped.
    let value = decode_with_config(text, &ToonConfig::permissive()).unwrap();
    assert_eq!(value, toon!({ "items": [{ "id": 1 }] }));
}

#[test]
fn test_strict_row_width_mismatch() {
    let text = "items[2]{id,name}:\n  1,Alice\n  2,Bob,extra";
    let err = decode(text).unwrap_err();
    assert_eq!(err, Error::decoding(3, "row has 3 values, expected 2"));
}

#[test]
fn test_permissive_pads_and_truncates_rows() {
    let text = "items[2]{id,name}:\n  1\n  2,Bob,extra";
    let value = decode_with_config(text, &ToonConfig::permissive()).unwrap();
    assert_eq!(
        value,
        toon!({
            "items": [
                { "id": 1, "name": null },
                { "id": 2, "name": "Bob" }
            ]
        })
    );
}

#[test]
fn test_strict_rejects_overindent() {
    let err = decode("a: 1\n    b: 2").unwrap_err();
    assert_eq!(err, Error::decoding(2, "unexpected indentation"));
}

#[test]
fn test_permissive_skips_overindent() {
    let value =
        decode_with_config("a: 1\n    b: 2\nc: 3", &ToonConfig::permissive()).unwrap();
    assert_eq!(value, toon!({ "a": 1, "c": 3 }));
}

#[test]
fn test_strict_rejects_unrecognized_line() {
    let err = decode("a: 1\njust some text").unwrap_err();
    assert_eq!(err, Error::decoding(2, "invalid syntax: just some text"));
}

#[test]
fn test_permissive_skips_unrecognized_line() {
    let value =
        decode_with_config("a: 1\njust some text\nb: 2", &ToonConfig::permissive()).unwrap();
    assert_eq!(value, toon!({ "a": 1, "b": 2 }));
}

#[test]
fn test_blank_lines_ignored() {
    assert_eq!(
        decode("a: 1\n\n\nb: 2").unwrap(),
        toon!({ "a": 1, "b": 2 })
    );
}

#[test]
fn test_header_like_strings_fall_through() {
    // Not a valid header (no colon): treated as a key-value pair would be,
    // and since there is none, strict mode rejects it.
    assert!(decode("users[2]{id,name}").is_err());
    // Key with non-word characters is not a tabular header either.
    let err = decode("us ers[2]{id}:\n  1").unwrap_err();
    assert!(matches!(err, Error::Decoding { .. }));
}

#[test]
fn test_size_limit() {
    let config = ToonConfig::new().with_max_size_mb(0.0);
    let err = decode_with_config("a: 1", &config).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn test_streaming_lines() {
    let value = decode_streaming(["users[1]{id}:", "  7"]).unwrap();
    assert_eq!(value, toon!({ "users": [{ "id": 7 }] }));
}
