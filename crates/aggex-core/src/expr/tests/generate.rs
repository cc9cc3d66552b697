use crate::{
    expr::{AggregateExpr, AggregateFn},
    model::Field,
    test_support::{amount, created, schema, status},
};

fn shorthands(exprs: &[AggregateExpr]) -> Vec<String> {
    exprs.iter().map(ToString::to_string).collect()
}

#[test]
fn of_restricted_to_sum_and_count() {
    let exprs = AggregateExpr::of_with(&[amount()], &[AggregateFn::Sum, AggregateFn::Count]);

    assert_eq!(exprs, vec![AggregateExpr::count(), AggregateExpr::sum(amount())]);
}

#[test]
fn of_defaults_to_every_function() {
    let exprs = AggregateExpr::of(&[amount()]);

    assert_eq!(
        exprs,
        vec![
            AggregateExpr::count(),
            AggregateExpr::sum(amount()),
            AggregateExpr::avg(amount()),
            AggregateExpr::max(amount()),
            AggregateExpr::min(amount()),
        ]
    );
}

#[test]
fn of_places_date_blocks_after_number_blocks() {
    assert_eq!(
        shorthands(&AggregateExpr::of(&schema())),
        vec![
            "count",
            "sum:amt",
            "avg:amt",
            "max:amt",
            "min:amt",
            "sum:qty",
            "avg:qty",
            "max:qty",
            "min:qty",
            "max:created",
            "min:created",
        ]
    );
}

#[test]
fn of_ignores_allow_list_order_and_duplicates() {
    let exprs = AggregateExpr::of_with(
        &[amount()],
        &[AggregateFn::Min, AggregateFn::Sum, AggregateFn::Min],
    );

    assert_eq!(shorthands(&exprs), vec!["sum:amt", "min:amt"]);
}

#[test]
fn of_without_count_emits_no_count() {
    let exprs = AggregateExpr::of_with(&[created()], &[AggregateFn::Max]);

    assert_eq!(exprs, vec![AggregateExpr::max(created())]);
}

#[test]
fn of_date_fields_never_get_sum_or_avg() {
    let exprs = AggregateExpr::of_with(&[created()], &[AggregateFn::Sum, AggregateFn::Avg]);

    assert!(exprs.is_empty());
}

#[test]
fn of_skips_other_data_types() {
    assert_eq!(AggregateExpr::of(&[status()]), vec![AggregateExpr::count()]);
    assert!(AggregateExpr::of_with(&[status()], &[]).is_empty());
}

#[test]
fn of_output_is_subset_of_valid_shorthands() {
    let fields = vec![
        Field::date("at", "At"),
        Field::number("n", "N"),
        Field::number("m", "M"),
    ];
    let valid = AggregateExpr::valid_shorthands(&fields);

    let generated = shorthands(&AggregateExpr::of(&fields));

    assert_eq!(generated.len(), valid.len());
    for shorthand in &generated {
        assert!(valid.contains(shorthand), "{shorthand} not in valid set");
    }
}

#[test]
fn duplicate_names_generate_per_field_but_parse_binds_first() {
    let fields = vec![Field::date("x", "X date"), Field::number("x", "X number")];

    let generated = AggregateExpr::of(&fields);
    let sum = generated
        .iter()
        .find(|expr| expr.to_string() == "sum:x")
        .unwrap();
    assert_eq!(sum.field_label(), Some("X number"));

    // Lookup is first-match, so the shorthand no longer identifies the
    // number field once it is parsed back.
    let parsed = AggregateExpr::parse(&fields, "sum:x").unwrap();
    assert_eq!(parsed.func(), AggregateFn::Sum);
    assert_eq!(parsed.field_label(), Some("X date"));
    assert_ne!(&parsed, sum);

    let max = AggregateExpr::parse(&fields, "max:x").unwrap();
    assert_eq!(max.field_label(), Some("X date"));
}
