//! Built-in reference suite.
//!
//! Twenty-five cases covering every divergence kind: strings, arrays vs
//! objects, array lengths, nested objects with missing and extra keys,
//! null vs object, dates, numbers, booleans, undefined, BigInt, NaN vs
//! Infinity, function references and class instances.

use crate::harness::TestCase;
use crate::model::{Date, Value};

fn s(v: &str) -> Value {
    Value::from(v)
}

fn n(v: i32) -> Value {
    Value::from(v)
}

/// `{propA: 'a', propB: <prop_b>}`
fn leaf(prop_b: Value) -> Value {
    Value::object([("propA", s("a")), ("propB", prop_b)])
}

fn complex_object_1() -> Value {
    Value::object([
        ("propA", n(1)),
        (
            "propB",
            Value::object([
                ("propA", Value::array([n(1), leaf(s("b")), n(3)])),
                ("propB", n(1)),
                ("propC", n(2)),
            ]),
        ),
    ])
}

/// Same as `complex_object_1` with reordered keys and `'c'` deep inside.
fn complex_object_2() -> Value {
    Value::object([
        ("propA", n(1)),
        (
            "propB",
            Value::object([
                ("propB", n(1)),
                ("propA", Value::array([n(1), leaf(s("c")), n(3)])),
                ("propC", n(2)),
            ]),
        ),
    ])
}

/// `complex_object_1` without `propB.propC`.
fn complex_object_3() -> Value {
    Value::object([
        ("propA", n(1)),
        (
            "propB",
            Value::object([
                ("propA", Value::array([n(1), leaf(s("b")), n(3)])),
                ("propB", n(1)),
            ]),
        ),
    ])
}

/// `{propA: 1, propB: {propA: [1, [<inner>, "nested"], 3], propB: 1}}`
fn custom_object(inner: Value) -> Value {
    Value::object([
        ("propA", n(1)),
        (
            "propB",
            Value::object([
                (
                    "propA",
                    Value::array([n(1), Value::array([inner, s("nested")]), n(3)]),
                ),
                ("propB", n(1)),
            ]),
        ),
    ])
}

/// Instance of a two-field class; a missing constructor argument is undefined.
fn custom_instance(attr_a: Option<&str>) -> Value {
    Value::object([
        ("attrA", attr_a.map(s).unwrap_or(Value::Undefined)),
        ("attrB", Value::Undefined),
    ])
}

fn date(year: i32, month: u32, day: u32) -> Value {
    Date::from_ymd(year, month, day)
        .map(Value::Date)
        .unwrap_or(Value::Undefined)
}

/// The reference suite, in order.
pub fn demo_cases() -> Vec<TestCase> {
    let custom_1 = custom_object(leaf(s("b")));
    let custom_2 = custom_object(leaf(s("c")));
    let custom_3 = custom_object(leaf(Value::array([s("a"), s("b")])));
    let custom_4 = custom_object(leaf(Value::array([s("a"), s("b"), s("c")])));
    let custom_5 = custom_object(leaf(Value::array([
        s("a"),
        s("b"),
        Value::object([("propA", n(1))]),
    ])));

    let case = TestCase::new;
    vec![
        case("Test 01", s("abc"), s("abc")),
        case("Test 02", s("abcdef"), s("abc")),
        case(
            "Test 03",
            Value::array([s("a")]),
            Value::object([("0", s("a"))]),
        ),
        case(
            "Test 04",
            Value::array([s("a"), s("b")]),
            Value::array([s("a"), s("b"), s("c")]),
        ),
        case(
            "Test 05",
            Value::array([s("a"), s("b"), s("c")]),
            Value::array([s("a"), s("b"), s("c")]),
        ),
        case("Test 06", complex_object_1(), complex_object_1()),
        case("Test 07", complex_object_1(), complex_object_2()),
        case("Test 08", complex_object_1(), complex_object_3()),
        case("Test 09", Value::Null, Value::object::<&str, _>([])),
        case("Test 10", custom_1, custom_2),
        case("Test 11", custom_3, custom_4.clone()),
        case("Test 12", custom_4, custom_5),
        case("Test 13", date(2020, 2, 1), date(2021, 3, 1)),
        case("Test 14", complex_object_3(), complex_object_1()),
        case("Test 15", n(12), n(23)),
        case("Test 16", Value::from(false), Value::from(true)),
        case("Test 17", Value::Undefined, Value::Undefined),
        case("Test 18", Value::BigInt(54740992), Value::BigInt(90071992)),
        case("Test 19", n(10), Value::BigInt(10)),
        case(
            "Test 20",
            Value::from(f64::NAN),
            Value::from(f64::INFINITY),
        ),
        case(
            "Test 21",
            Value::function("CustomClass"),
            Value::function("CustomClass"),
        ),
        case(
            "Test 22",
            custom_instance(Some("test")),
            custom_instance(Some("test")),
        ),
        case(
            "Test 23",
            Value::function("CustomClass"),
            Value::function("Error"),
        ),
        case(
            "Test 24",
            custom_instance(Some("a")),
            custom_instance(Some("b")),
        ),
        case(
            "Test 25",
            Value::array([complex_object_1()]),
            Value::array([complex_object_2()]),
        ),
    ]
}
