use event_flags::{
    FlagParseError, Operator, OptionCategory, PolicyFilterMap, prepare_event_map_from_flags,
};
use pretty_assertions::assert_eq;

fn names(map: &PolicyFilterMap) -> Vec<(String, Operator)> {
    map.default_policy()
        .expect("default policy")
        .descriptors
        .iter()
        .map(|d| (d.event_name.clone(), d.operator))
        .collect()
}

#[test]
fn test_individual_events_with_wildcard() {
    let map = prepare_event_map_from_flags(&["execve", "open*"]).expect("valid flags");
    assert_eq!(
        names(&map),
        vec![
            ("execve".to_string(), Operator::None),
            ("open*".to_string(), Operator::None),
        ]
    );
}

#[test]
fn test_set_with_exclusions() {
    let map = prepare_event_map_from_flags(&["fs", "-open,-openat"]).expect("valid flags");
    assert_eq!(
        names(&map),
        vec![
            ("fs".to_string(), Operator::None),
            ("open".to_string(), Operator::Unset),
            ("openat".to_string(), Operator::Unset),
        ]
    );
}

#[test]
fn test_data_filter_with_single_value() {
    let map = prepare_event_map_from_flags(&["close.data.fd=5"]).expect("valid flags");
    let policy = map.default_policy().expect("default policy");
    assert_eq!(policy.descriptors.len(), 1);

    let d = &policy.descriptors[0];
    assert_eq!(d.full, "close.data.fd=5");
    assert_eq!(d.filter_expression, "close.data.fd");
    assert_eq!(d.event_name, "close");
    assert_eq!(d.option_category, Some(OptionCategory::Data));
    assert_eq!(d.option_field, "fd");
    assert_eq!(d.operator, Operator::Equal);
    assert_eq!(d.values, "5");
    assert_eq!(d.operator_and_values, "=5");
    assert_eq!(d.residual_filter, "data.fd=5");
}

#[test]
fn test_data_filter_with_value_list() {
    let map = prepare_event_map_from_flags(&["openat.data.pathname!=/tmp/1,/bin/ls"])
        .expect("valid flags");
    let d = &map.default_policy().expect("default policy").descriptors[0];
    assert_eq!(d.operator, Operator::NotEqual);
    assert_eq!(d.values, "/tmp/1,/bin/ls");
}

#[test]
fn test_scope_filter_without_operator() {
    let map = prepare_event_map_from_flags(&["security_file_open.scope.container"])
        .expect("valid flags");
    let d = &map.default_policy().expect("default policy").descriptors[0];
    assert_eq!(d.operator, Operator::None);
    assert_eq!(d.option_category, Some(OptionCategory::Scope));
    assert_eq!(d.option_field, "container");
    assert!(d.values.is_empty());
    assert!(d.operator_and_values.is_empty());
}

#[test]
fn test_empty_flag_aborts_map_construction() {
    let result = prepare_event_map_from_flags(&[""]);
    assert_eq!(result, Err(FlagParseError::EmptyFlag));
}

#[test]
fn test_arity_boundaries() {
    assert!(prepare_event_map_from_flags(&["a.b"]).is_ok());
    assert!(prepare_event_map_from_flags(&["a.b.c"]).is_ok());
    assert_eq!(
        prepare_event_map_from_flags(&["a.b.c.d"]),
        Err(FlagParseError::InvalidFilterFlagFormat("a.b.c.d".to_string()))
    );
    assert_eq!(
        prepare_event_map_from_flags(&["a=1"]),
        Err(FlagParseError::InvalidFilterFlagFormat("a=1".to_string()))
    );
}

#[test]
fn test_whitespace_is_rejected_not_trimmed() {
    for flag in [" open", "open ,close", "open.data. fd=1", "open .retval=0"] {
        assert_eq!(
            prepare_event_map_from_flags(&[flag]),
            Err(FlagParseError::InvalidFilterFlagFormat(flag.to_string())),
            "flag {:?}",
            flag
        );
    }
}

#[test]
fn test_padded_values_are_rejected() {
    for flag in [
        "close.data.fd= 5",
        "close.data.fd=5 ",
        "openat.scope.processName=ls\t",
    ] {
        assert_eq!(
            prepare_event_map_from_flags(&[flag]),
            Err(FlagParseError::InvalidFilterFlagFormat(flag.to_string())),
            "flag {:?}",
            flag
        );
    }
}

#[test]
fn test_residual_filter_only_with_operator() {
    let map = prepare_event_map_from_flags(&[
        "security_file_open.scope.container",
        "openat.scope.processName=ls",
    ])
    .expect("valid flags");
    let policy = map.default_policy().expect("default policy");
    assert_eq!(policy.descriptors[0].residual_filter, "");
    assert_eq!(policy.descriptors[1].residual_filter, "scope.processName=ls");
}

#[test]
fn test_retval_comparisons() {
    let flags = [
        "open.retval<0",
        "open.retval>0",
        "open.retval<=0",
        "open.retval>=0",
        "open.retval!=0",
    ];
    let map = prepare_event_map_from_flags(&flags).expect("valid flags");
    let ops: Vec<Operator> = map
        .default_policy()
        .expect("default policy")
        .descriptors
        .iter()
        .map(|d| d.operator)
        .collect();
    assert_eq!(
        ops,
        vec![
            Operator::Less,
            Operator::Greater,
            Operator::LessEqual,
            Operator::GreaterEqual,
            Operator::NotEqual,
        ]
    );
}

#[test]
fn test_unknown_category_is_kept_verbatim() {
    let map = prepare_event_map_from_flags(&["open.context.uid=0"]).expect("valid flags");
    let d = &map.default_policy().expect("default policy").descriptors[0];
    assert_eq!(
        d.option_category,
        Some(OptionCategory::Other("context".to_string()))
    );
}

#[test]
fn test_error_message_names_the_flag() {
    let err = prepare_event_map_from_flags(&["open ,close"]).unwrap_err();
    assert_eq!(err.to_string(), "invalid filter flag format: open ,close");
    assert_eq!(
        FlagParseError::EmptyFlag.to_string(),
        "event flag cannot be empty"
    );
}
