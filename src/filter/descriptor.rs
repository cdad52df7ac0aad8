use super::expression::FilterParts;
use super::operator::{Operator, OperatorParts};
use serde::{Serialize, Serializer};
use std::fmt;

/// Second segment of a dotted filter expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionCategory {
    /// Event metadata, e.g. `openat.scope.processName`
    Scope,
    /// Event payload field, e.g. `close.data.fd`
    Data,
    /// Event return value, e.g. `open.retval`
    Retval,
    /// Any other category, kept verbatim for the policy engine to judge
    Other(String),
}

impl OptionCategory {
    pub fn as_str(&self) -> &str {
        match self {
            OptionCategory::Scope => "scope",
            OptionCategory::Data => "data",
            OptionCategory::Retval => "retval",
            OptionCategory::Other(s) => s,
        }
    }
}

impl From<&str> for OptionCategory {
    fn from(s: &str) -> Self {
        match s {
            "scope" => OptionCategory::Scope,
            "data" => OptionCategory::Data,
            "retval" => OptionCategory::Retval,
            other => OptionCategory::Other(other.to_string()),
        }
    }
}

impl fmt::Display for OptionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OptionCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single pre-parsed event flag
///
/// Examples of the fields for `openat.data.pathname=/etc/*`:
///
/// ```text
/// full                 openat.data.pathname=/etc/*
/// filter_expression    openat.data.pathname
/// event_name           openat
/// option_category      data
/// option_field         pathname
/// operator             =
/// values               /etc/*
/// operator_and_values  =/etc/*
/// residual_filter      data.pathname=/etc/*
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterDescriptor {
    pub full: String,
    pub filter_expression: String,
    pub event_name: String,
    pub option_category: Option<OptionCategory>,
    pub option_field: String,
    pub operator: Operator,
    pub values: String,
    pub operator_and_values: String,
    pub residual_filter: String,
}

impl FilterDescriptor {
    /// Select an event or set by name
    pub fn event(full: &str, name: &str) -> Self {
        Self::bare(full, name, Operator::None)
    }

    /// Exclude an event or set by name
    pub fn unset(full: &str, name: &str) -> Self {
        Self::bare(full, name, Operator::Unset)
    }

    fn bare(full: &str, name: &str, operator: Operator) -> Self {
        FilterDescriptor {
            full: full.to_string(),
            filter_expression: String::new(),
            event_name: name.to_string(),
            option_category: None,
            option_field: String::new(),
            operator,
            values: String::new(),
            operator_and_values: String::new(),
            residual_filter: String::new(),
        }
    }

    /// Build a descriptor for a dotted filter flag.
    ///
    /// `expression` is the part of `flag` before the operator (the whole
    /// flag when there is none). The residual filter is only kept for flags
    /// with an operator.
    pub fn filter(
        flag: &str,
        expression: &str,
        parts: FilterParts<'_>,
        op: Option<OperatorParts<'_>>,
    ) -> Self {
        let (operator, values, operator_and_values, residual_filter) = match op {
            Some(op) => (
                op.operator,
                op.values,
                op.operator_and_values,
                &flag[parts.name.len() + 1..],
            ),
            None => (Operator::None, "", "", ""),
        };

        FilterDescriptor {
            full: flag.to_string(),
            filter_expression: expression.to_string(),
            event_name: parts.name.to_string(),
            option_category: Some(OptionCategory::from(parts.category)),
            option_field: parts.field.to_string(),
            operator,
            values: values.to_string(),
            operator_and_values: operator_and_values.to_string(),
            residual_filter: residual_filter.to_string(),
        }
    }

    /// Whether this descriptor excludes its event
    pub fn is_unset(&self) -> bool {
        self.operator == Operator::Unset
    }

    /// Whether this descriptor refines an event with a filter
    pub fn is_filter(&self) -> bool {
        self.option_category.is_some()
    }
}
