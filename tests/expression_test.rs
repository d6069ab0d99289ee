use clean_test::expression::{Clause, Compose, Expression, Lift, Observation, Operand, Truthy, lift};
use std::cell::Cell;
use std::fmt;

/// 记录自己是否在布尔上下文中被转换过
struct ConversionTracker {
    value: bool,
    was_converted: Cell<bool>,
}

impl ConversionTracker {
    fn new(value: bool) -> Self {
        Self {
            value,
            was_converted: Cell::new(false),
        }
    }

    fn was_converted(&self) -> bool {
        self.was_converted.get()
    }
}

impl Truthy for ConversionTracker {
    fn truthy(&self) -> bool {
        self.was_converted.set(true);
        self.value
    }
}

impl fmt::Display for ConversionTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(self.value))
    }
}

impl<'a> Lift for &'a ConversionTracker {
    type Node = Clause<&'a ConversionTracker>;

    fn lift(self) -> Self::Node {
        Clause::new(self)
    }
}

/// 只能打印、不能转换为布尔值的类型
#[derive(Debug, PartialEq)]
struct Label(&'static str);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[test]
fn test_truth() {
    assert!(lift(true).evaluate());
    assert!(!lift(false).evaluate());
}

#[test]
fn test_equality_comparison() {
    assert!(lift(17_i32).equals(lift(17_i32)).evaluate());
    assert!(!lift(17_i32).equals(lift(42_i32)).evaluate());
    assert!(lift(true).equals(lift(true).equals(lift(true))).evaluate());
    assert!(lift("asdf").equals("asdf").evaluate());
    assert!(!lift("asdf").equals("not asdf").evaluate());
    assert!(lift(String::from("asdf")).equals("asdf").evaluate());
}

#[test]
fn test_binary_and() {
    assert!(lift(true).and(lift(true)).evaluate());
    assert!(!lift(true).and(false).evaluate());
    assert!(!lift(false).and(true).evaluate());
    assert!(!lift(false).and(lift(false)).evaluate());
}

#[test]
fn test_binary_or() {
    assert!(lift(true).or(false).evaluate());
    assert!(lift(false).or(true).evaluate());
    assert!(!lift(false).or(lift(false)).evaluate());
}

#[test]
fn test_conjunction_short_circuits_and_tracks_conversion() {
    let t0 = ConversionTracker::new(true);
    let t1 = ConversionTracker::new(false);
    let mut c0 = lift(&t0);
    let mut c1 = lift(&t1);

    let rendered = {
        let mut conjunction = (&mut c1).and(&mut c0);
        assert!(!conjunction.evaluate());
        conjunction.to_string()
    };

    assert!(t1.was_converted());
    assert!(!t0.was_converted()); // due to short circuiting
    assert!(c1.was_converted());
    assert!(!c0.was_converted());
    assert_eq!(c0.observation(), Observation::Unreached);
    assert_eq!(rendered, "( 0 and <unknown> )");
}

#[test]
fn test_disjunction_short_circuits_on_true() {
    let t0 = ConversionTracker::new(true);
    let t1 = ConversionTracker::new(false);

    let mut disjunction = lift(&t0).or(&t1);
    assert!(disjunction.evaluate());
    assert!(t0.was_converted());
    assert!(!t1.was_converted());
    assert_eq!(disjunction.to_string(), "( 1 or <unknown> )");
}

#[test]
fn test_equality_evaluates_both_sides_without_conversion() {
    let mut left = lift(false);
    let mut right = lift(true);
    {
        let mut equality = (&mut left).equals(&mut right);
        assert!(!equality.evaluate());
        assert_eq!(equality.to_string(), "( false == true )");
    }
    assert!(left.is_reached() && right.is_reached());
    assert!(!left.was_converted() && !right.was_converted());
}

#[test]
fn test_evaluation_happens_once() {
    let tracker = ConversionTracker::new(true);
    let mut expression = lift(&tracker).and(true);
    assert!(expression.evaluate());

    tracker.was_converted.set(false);
    assert!(expression.evaluate());
    assert!(!tracker.was_converted());
}

/// 可以在两次断言之间改变的布尔值，并统计被转换的次数
#[derive(Default)]
struct Switch {
    on: Cell<bool>,
    conversions: Cell<usize>,
}

impl Truthy for Switch {
    fn truthy(&self) -> bool {
        self.conversions.set(self.conversions.get() + 1);
        self.on.get()
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.on.get())
    }
}

#[test]
fn test_leaf_reused_across_expressions_is_converted_again() {
    let switch = Switch::default();
    let mut leaf = Clause::new(&switch);

    let first = (&mut leaf).and(true).evaluate();
    switch.on.set(true);
    let second = (&mut leaf).and(true).evaluate();

    assert!(!first);
    assert!(second);
    assert_eq!(switch.conversions.get(), 2);
    assert_eq!(leaf.observation(), Observation::Converted(true));
}

#[test]
fn test_conversion_is_independent_of_rendering() {
    let tracker = ConversionTracker::new(true);
    let mut clause = lift(&tracker);
    assert!(clause.evaluate());
    assert!(clause.was_converted());
    assert!(tracker.was_converted());
}

#[test]
fn test_lift_is_idempotent() {
    let mut once = lift(17_i32).equals(17);
    let mut twice = lift(lift(17_i32).equals(17));
    assert_eq!(once.evaluate(), twice.evaluate());
    assert_eq!(once.to_string(), twice.to_string());

    let mut leaf = lift(lift(lift(false)));
    assert!(!leaf.evaluate());
    assert_eq!(leaf.to_string(), "false");
}

#[test]
fn test_printable_only_values_compare_by_equality() {
    let mut equality = Clause::new(Label("left")).not_equals(Clause::new(Label("right")));
    assert!(equality.evaluate());
    assert_eq!(equality.to_string(), "( left != right )");
}

#[test]
fn test_ordering_comparisons() {
    assert!(lift(1_i32).less(2).evaluate());
    assert!(lift(2_i32).less_or_equal(2).evaluate());
    assert!(!lift(1.5_f64).greater(2.5).evaluate());
    assert!(lift('b').greater_or_equal('a').evaluate());

    let mut range = lift(3_i32).greater(1).and(lift(3_i32).less(2));
    assert!(!range.evaluate());
    assert_eq!(range.to_string(), "( ( 3 > 1 ) and ( 3 < 2 ) )");
}

#[test]
fn test_nested_short_circuit_leaves_whole_subtree_unknown() {
    let mut expression = lift(false).and(lift(1_i32).equals(1).or(true));
    assert!(!expression.evaluate());
    assert_eq!(
        expression.to_string(),
        "( false and ( ( <unknown> == <unknown> ) or <unknown> ) )"
    );
}

#[test]
fn test_negation() {
    let mut negation = lift(17_i32).equals(42).not();
    assert!(negation.evaluate());
    assert_eq!(negation.to_string(), "( not ( 17 == 42 ) )");
}
