use super::descriptor::FilterDescriptor;
use super::error::FlagParseError;
use super::expression::split_filter_expression;
use super::operator::{extract_operator_and_values, find_operator};
use super::validate::is_valid_token;

/// Parse one `--events` flag into its descriptors.
///
/// A flag without operator and without `.` is a comma separated list of
/// event names (each optionally prefixed with `-` to exclude it) and yields
/// one descriptor per name. Any other flag yields exactly one descriptor.
pub fn parse_event_flag(flag: &str) -> Result<Vec<FilterDescriptor>, FlagParseError> {
    if flag.is_empty() {
        return Err(FlagParseError::EmptyFlag);
    }

    let Some(op_idx) = find_operator(flag) else {
        if flag.contains('.') {
            // e.g. "security_file_open.scope.container"
            let parts = split_filter_expression(flag, flag)?;
            return Ok(vec![FilterDescriptor::filter(flag, flag, parts, None)]);
        }

        return parse_event_names(flag);
    };

    let expression = &flag[..op_idx];
    let parts = split_filter_expression(expression, flag)?;
    let op = extract_operator_and_values(flag, op_idx)?;

    Ok(vec![FilterDescriptor::filter(
        flag,
        expression,
        parts,
        Some(op),
    )])
}

fn parse_event_names(flag: &str) -> Result<Vec<FilterDescriptor>, FlagParseError> {
    let names: Vec<&str> = flag.split(',').collect();
    let mut descriptors = Vec::with_capacity(names.len());

    for name in names {
        if !is_valid_token(name) {
            return Err(FlagParseError::invalid_format(flag));
        }

        if let Some(unset) = name.strip_prefix('-') {
            if !is_valid_token(unset) {
                return Err(FlagParseError::invalid_format(flag));
            }
            descriptors.push(FilterDescriptor::unset(name, unset));
            continue;
        }

        descriptors.push(FilterDescriptor::event(name, name));
    }

    Ok(descriptors)
}
