use bespec::{Error, Matcher, Object, ScalarMatcher, StringPresenter, TaggedPresenter, Value};
use pretty_assertions::assert_eq;

fn matcher() -> ScalarMatcher<StringPresenter> {
    ScalarMatcher::new(StringPresenter::new())
}

fn failure_message(err: Error) -> String {
    match err {
        Error::Failure(failure) => failure.message().to_owned(),
        err => panic!("Expected a failure, got {err:?}"),
    }
}

#[test]
fn supports_known_types() {
    let m = matcher();
    let suffixes = [
        "Int", "Integer", "Float", "Double", "String", "Array", "Object", "Bool", "Boolean",
        "Null", "Callable", "Numeric", "Scalar",
    ];

    for suffix in suffixes {
        let name = format!("be{suffix}");

        assert!(m.supports(&name, &Value::Null, &[]), "{name}");
        assert!(m.supports(&name, &Value::from(5), &[Value::from("ignored")]), "{name}");
    }
}

#[test]
fn does_not_support_other_names() {
    let m = matcher();

    for name in ["be", "return", "haveCount", "equal", "beUnknownType", "BeInteger"] {
        assert!(!m.supports(name, &Value::Null, &[]), "{name}");
        assert!(!m.supports(name, &Value::from(1), &[Value::Null]), "{name}");
    }
}

#[test]
fn positive_match_success() {
    let m = matcher();

    m.positive_match("beInteger", &Value::from(5), &[]).unwrap();
    m.positive_match("beString", &Value::from("5"), &[]).unwrap();
    m.positive_match("beBoolean", &Value::from(false), &[]).unwrap();
    m.positive_match("beNumeric", &Value::from(" 1.5e3"), &[]).unwrap();
    m.positive_match("beCallable", &Object::closure().into(), &[]).unwrap();
    m.positive_match("beObject", &Object::closure().into(), &[]).unwrap();
    m.positive_match("beNull", &Value::Null, &[]).unwrap();
}

#[test]
fn positive_match_failure() {
    let err = matcher()
        .positive_match("beInteger", &Value::from("5"), &[])
        .unwrap_err();

    assert_eq!(
        failure_message(err),
        "is_integer(\"5\") expected to return true, but it did not."
    );
}

#[test]
fn negative_match_success() {
    let m = matcher();

    m.negative_match("beArray", &Value::from(5), &[]).unwrap();
    m.negative_match("beScalar", &Value::list([1]), &[]).unwrap();
}

#[test]
fn maps_with_string_keys_are_arrays() {
    let m = matcher();
    let subject = Value::map([("id", Value::from(1)), ("name", Value::from("Ada"))]);

    m.positive_match("beArray", &subject, &[]).unwrap();
    m.positive_match("beIterable", &subject, &[]).unwrap();

    let err = m.positive_match("beScalar", &subject, &[]).unwrap_err();
    assert_eq!(
        failure_message(err),
        "is_scalar([array:2]) expected to return true, but it did not."
    );
}

#[test]
fn negative_match_failure() {
    let err = matcher()
        .negative_match("beArray", &Value::list([1, 2]), &[])
        .unwrap_err();

    assert_eq!(
        failure_message(err),
        "is_array([array:2]) not expected to return true, but it did."
    );
}

#[test]
fn boolean_alias_uses_bool_checker() {
    let err = matcher()
        .positive_match("beBoolean", &Value::from(1), &[])
        .unwrap_err();

    assert_eq!(
        failure_message(err),
        "is_bool([integer:1]) expected to return true, but it did not."
    );
}

#[test]
fn tagged_failure_message() {
    let m = ScalarMatcher::new(TaggedPresenter::new(StringPresenter::new()));
    let err = m
        .positive_match("beInteger", &Value::from("5"), &[])
        .unwrap_err();

    assert_eq!(
        failure_message(err),
        "<code>is_integer(<value>\"5\"</value>)</code> expected to return <value>true</value>, but it did not."
    );
}

#[test]
fn repeated_calls_are_deterministic() {
    let m = matcher();
    let subject = Value::from(1.5);

    for _ in 0..3 {
        assert!(m.supports("beFloat", &subject, &[]));
        assert!(m.positive_match("beFloat", &subject, &[]).is_ok());

        let err = m.negative_match("beFloat", &subject, &[]).unwrap_err();
        assert_eq!(
            failure_message(err),
            "is_float([double:1.5]) not expected to return true, but it did."
        );
    }
}

#[test]
fn priority_is_constant() {
    let a = matcher();
    let b = ScalarMatcher::new(TaggedPresenter::<StringPresenter>::default());

    assert_eq!(a.priority(), 100);
    assert_eq!(a.priority(), a.priority());
    assert_eq!(b.priority(), 100);
}

#[test]
fn shared_between_threads() {
    let m = matcher();

    std::thread::scope(|s| {
        for i in 0..4 {
            let m = &m;

            s.spawn(move || {
                m.positive_match("beInt", &Value::from(i), &[]).unwrap();
                m.negative_match("beInt", &Value::from("i"), &[]).unwrap();
            });
        }
    });
}
