use crate::{
    expr::{AggregateExpr, AggregateFn},
    model::{DataType, Field},
};

impl AggregateExpr {
    /// Every expression over `fields` using all five functions.
    #[must_use]
    pub fn of(fields: &[Field]) -> Vec<Self> {
        Self::of_with(fields, &AggregateFn::ALL)
    }

    /// Every expression over `fields` restricted to the `fns` allow-list.
    ///
    /// Output is `count` (when allowed), then one block per numeric field in
    /// input order, then one block per date field. Within a block functions
    /// follow canonical order regardless of the order of `fns`.
    #[must_use]
    pub fn of_with(fields: &[Field], fns: &[AggregateFn]) -> Vec<Self> {
        let allowed = |func: &AggregateFn| fns.contains(func);

        let numeric: Vec<AggregateFn> = AggregateFn::ALL
            .into_iter()
            .filter(|func| func.targets_field() && allowed(func))
            .collect();
        let dated: Vec<AggregateFn> = numeric
            .iter()
            .copied()
            .filter(|func| func.is_extrema())
            .collect();

        let mut out = Vec::new();
        if allowed(&AggregateFn::Count) {
            out.push(Self::count());
        }

        out.extend(block(fields, &DataType::Number, &numeric));
        out.extend(block(fields, &DataType::Date, &dated));

        out
    }
}

fn block<'a>(
    fields: &'a [Field],
    data_type: &'a DataType,
    funcs: &'a [AggregateFn],
) -> impl Iterator<Item = AggregateExpr> + 'a {
    fields
        .iter()
        .filter(move |field| field.data_type == *data_type)
        .flat_map(move |field| {
            funcs
                .iter()
                .map(move |func| AggregateExpr::targeting(*func, field))
        })
}
