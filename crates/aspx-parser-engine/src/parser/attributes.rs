use crate::{
    error::FragmentError,
    lexer::{AttributeCapture, kinds::QUOTES, patterns},
    source::{Source, Span},
    tree::attribute::AttributeData,
};

/// Turns scanner captures into attribute records, in source order.
pub(super) fn collect(
    source: &Source,
    captures: &[AttributeCapture],
) -> Result<Vec<AttributeData>, FragmentError> {
    captures
        .iter()
        .map(|capture| attribute(source, capture))
        .collect()
}

fn attribute(source: &Source, capture: &AttributeCapture) -> Result<AttributeData, FragmentError> {
    let key = source.check(capture.name)?;
    let value = source.check(capture.value)?;

    // The value span stops inside the quotes; the body includes the closing one.
    let mut body = Span::new(key.start, value.end);
    let closing_quote = source
        .as_str()
        .get(body.end..)
        .is_some_and(|rest| rest.starts_with(QUOTES));
    if closing_quote {
        body.end += 1;
    }
    let body = source.check(body)?;
    let text = source.slice(value);

    Ok(AttributeData {
        body,
        key,
        value,
        data_bound: patterns::data_bound_value().is_match(text),
        expression_builder: patterns::expression_builder_value().is_match(text),
    })
}
