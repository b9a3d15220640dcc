use proptest::prelude::*;

use super::{SubError, Validator};

fn with(errors: &[(&str, &str)]) -> Validator {
    let mut v = Validator::new();
    for (key, message) in errors {
        v.append(*key, *message);
    }
    v
}

#[test]
fn empty_has_no_errors() {
    let v = Validator::new();
    assert!(!v.has_errors());
    assert_eq!(v.render(), "<no errors>");
    assert_eq!(v.to_string(), "<no errors>");
    assert_eq!(v.into_result(), Ok(()));
}

#[test]
fn append_keeps_order_and_duplicates() {
    let v = with(&[("x", "a"), ("x", "b"), ("x", "a")]);
    assert_eq!(v.get("x"), Some(&["a".to_string(), "b".to_string(), "a".to_string()][..]));
}

#[test]
fn render_single_key() {
    let v = with(&[("x", "a"), ("x", "b")]);
    assert_eq!(v.render(), "x: a, b.\n");
}

#[test]
fn render_sorts_keys() {
    let v = with(&[
        ("name", "must be set"),
        ("email", "must be set"),
        ("addresses[1].city", "must be set"),
        ("email", "must be a valid email address"),
    ]);
    insta::assert_snapshot!(v.render(), @r"
    addresses[1].city: must be set.
    email: must be set, must be a valid email address.
    name: must be set.
    ");
}

#[test]
fn into_result_and_status() {
    let v = with(&[("x", "a")]);
    assert_eq!(v.status_code(), 400);
    let err = v.clone().into_result().unwrap_err();
    assert_eq!(err, v);

    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(boxed.to_string(), "x: a.\n");
}

#[test]
fn merge_appends_per_key() {
    let mut v = with(&[("x", "a"), ("y", "b")]);
    v.merge(with(&[("x", "c"), ("z", "d")]));
    assert_eq!(v.get("x"), Some(&["a".to_string(), "c".to_string()][..]));
    assert_eq!(v.get("y"), Some(&["b".to_string()][..]));
    assert_eq!(v.get("z"), Some(&["d".to_string()][..]));
}

#[test]
fn merge_empty_is_noop() {
    let mut v = with(&[("x", "a")]);
    v.merge(Validator::new());
    assert_eq!(v.errors().len(), 1);
}

#[test]
fn sub_with_index() {
    let mut v = Validator::new();
    v.sub("addr", "1", with(&[("city", "must be set")]).into_result());
    assert_eq!(v.get("addr[1].city"), Some(&["must be set".to_string()][..]));
    assert_eq!(v.errors().len(), 1);
}

#[test]
fn sub_without_index() {
    let mut v = Validator::new();
    v.sub("settings", "", with(&[("domain", "must be a valid domain")]).into_result());
    assert_eq!(
        v.get("settings.domain"),
        Some(&["must be a valid domain".to_string()][..])
    );
}

#[test]
fn sub_with_numeric_index_in_loop() {
    let children = [
        with(&[]),
        with(&[("city", "must be set"), ("zip", "must be set")]),
    ];
    let mut v = Validator::new();
    for (i, child) in children.into_iter().enumerate() {
        v.sub("addresses", i, child.into_result());
    }
    insta::assert_snapshot!(v.render(), @r"
    addresses[1].city: must be set.
    addresses[1].zip: must be set.
    ");
}

#[test]
fn sub_ok_is_noop() {
    let mut v = Validator::new();
    v.sub("addr", "1", Ok::<(), Validator>(()));
    v.sub_error("addr", "2", Validator::new());
    assert!(!v.has_errors());
}

#[test]
fn sub_plain_error_lands_on_prefix() {
    let mut v = Validator::new();
    v.sub("settings", "", Err("could not load"));
    v.sub("addr", 3, Err(SubError::plain(std::fmt::Error)));
    assert_eq!(v.get("settings"), Some(&["could not load".to_string()][..]));
    assert_eq!(
        v.get("addr[3]"),
        Some(&["an error occurred when formatting an argument".to_string()][..])
    );
}

#[test]
fn sub_collides_with_existing_keys() {
    let mut v = with(&[("addr.city", "first")]);
    v.sub("addr", "", with(&[("city", "second")]).into_result());
    assert_eq!(
        v.get("addr.city"),
        Some(&["first".to_string(), "second".to_string()][..])
    );
}

#[test]
fn nested_subs_compose() {
    let mut street = Validator::new();
    street.append("number", "must be set");
    let mut addr = Validator::new();
    addr.sub("street", "", street.into_result());
    let mut v = Validator::new();
    v.sub("addresses", 0, addr.into_result());
    assert!(v.get("addresses[0].street.number").is_some());
}

#[cfg(feature = "with-serde")]
#[test]
fn json_shape() {
    let v = with(&[("x", "a"), ("x", "b")]);
    assert_eq!(v.to_json().unwrap(), r#"{"errors":{"x":["a","b"]}}"#);
    assert_eq!(Validator::new().to_json().unwrap(), r#"{"errors":{}}"#);

    let multi = with(&[("b", "2"), ("a", "1"), ("b", "3")]);
    let back: Validator = serde_json::from_str(&multi.to_json().unwrap()).unwrap();
    assert_eq!(back, multi);
}

#[cfg(feature = "with-serde")]
#[test]
fn json_empty_lists_are_dropped() {
    let v: Validator = serde_json::from_str(r#"{"errors":{"x":[]}}"#).unwrap();
    assert!(!v.has_errors());
    assert_eq!(v.render(), "<no errors>");

    let v: Validator = serde_json::from_str(r#"{"errors":{"x":[],"y":["a"]}}"#).unwrap();
    assert_eq!(v.errors().len(), 1);
    assert_eq!(v.render(), "y: a.\n");
}

fn entries() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-c]{1,2}", "[a-z ]{0,6}"), 0..20)
}

proptest! {
    #[test]
    fn merge_keeps_every_message(left in entries(), right in entries()) {
        let mut a = Validator::new();
        for (k, m) in &left {
            a.append(k.as_str(), m.as_str());
        }
        let mut b = Validator::new();
        for (k, m) in &right {
            b.append(k.as_str(), m.as_str());
        }
        let expected_x = a.get("a").map_or(0, <[String]>::len) + b.get("a").map_or(0, <[String]>::len);
        a.merge(b);
        let total: usize = a.errors().values().map(Vec::len).sum();
        prop_assert_eq!(total, left.len() + right.len());
        prop_assert_eq!(a.get("a").map_or(0, <[String]>::len), expected_x);
        prop_assert!(a.errors().values().all(|m| !m.is_empty()));
    }

    #[test]
    fn render_lines_are_sorted(list in entries()) {
        let mut v = Validator::new();
        for (k, m) in &list {
            v.append(k.as_str(), m.as_str());
        }
        prop_assume!(v.has_errors());
        let rendered = v.render();
        let keys: Vec<&str> = rendered
            .lines()
            .map(|l| l.split_once(": ").map_or(l, |(k, _)| k))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys.len(), v.errors().len());
        prop_assert_eq!(keys, sorted);
        prop_assert!(rendered.ends_with(".\n"));
    }

    #[test]
    fn sub_prefixes_every_key(list in entries(), index in "[0-9]{0,2}") {
        let mut child = Validator::new();
        for (k, m) in &list {
            child.append(k.as_str(), m.as_str());
        }
        let child_keys = child.errors().len();
        let mut v = Validator::new();
        v.sub("p", &index, child.into_result());
        let prefix = if index.is_empty() { "p.".to_string() } else { format!("p[{index}].") };
        prop_assert_eq!(v.errors().len(), child_keys);
        prop_assert!(v.errors().keys().all(|k| k.starts_with(&prefix)));
    }
}
