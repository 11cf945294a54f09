//! Aspect filters: named facets (`Size`, `Color`, ...) with accepted values.

use super::filter_values;
use crate::error::Result;
use crate::raw::{RawParams, Syntax};
use serde::Serialize;

/// One facet constraint with one or more accepted values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AspectFilter {
    pub aspect_name: String,
    /// Never empty.
    pub aspect_value_names: Vec<String>,
}

/// Extracts aspect filters from `aspectFilter.*` / `aspectFilter(n).*` keys.
///
/// Value fragments with no `aspectName` at the same position are ignored.
pub fn parse_aspect_filters(raw: &RawParams) -> Result<Vec<AspectFilter>> {
    match raw.syntax("aspectFilter", ".aspectName")? {
        Syntax::Absent => Ok(Vec::new()),
        Syntax::Bare => {
            let aspect_name = raw.get("aspectFilter.aspectName").unwrap_or_default();
            let aspect_value_names = filter_values(raw, "aspectFilter.aspectValueName")?;
            Ok(vec![AspectFilter {
                aspect_name: aspect_name.to_owned(),
                aspect_value_names,
            }])
        }
        Syntax::Numbered => raw
            .scan_indexed("aspectFilter", ".aspectName")
            .map(|(i, name)| {
                let aspect_value_names =
                    filter_values(raw, &format!("aspectFilter({i}).aspectValueName"))?;
                Ok(AspectFilter {
                    aspect_name: name.to_owned(),
                    aspect_value_names,
                })
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn absent_when_no_aspect_keys() {
        let raw = RawParams::from([("keywords", "phone")]);
        assert_eq!(parse_aspect_filters(&raw), Ok(vec![]));
    }

    #[test]
    fn bare_filter_with_single_value() {
        let raw = RawParams::from([
            ("aspectFilter.aspectName", "Size"),
            ("aspectFilter.aspectValueName", "10"),
        ]);
        assert_eq!(
            parse_aspect_filters(&raw),
            Ok(vec![AspectFilter {
                aspect_name: "Size".into(),
                aspect_value_names: vec!["10".into()],
            }])
        );
    }

    #[test]
    fn bare_filter_with_numbered_values() {
        let raw = RawParams::from([
            ("aspectFilter.aspectName", "Color"),
            ("aspectFilter.aspectValueName(0)", "Red"),
            ("aspectFilter.aspectValueName(1)", "Blue"),
        ]);
        let filters = parse_aspect_filters(&raw).expect("valid");
        assert_eq!(filters[0].aspect_value_names, vec!["Red", "Blue"]);
    }

    #[test]
    fn numbered_filters_stop_at_gap() {
        let raw = RawParams::from([
            ("aspectFilter(0).aspectName", "Size"),
            ("aspectFilter(0).aspectValueName", "10"),
            ("aspectFilter(1).aspectName", "Color"),
            ("aspectFilter(1).aspectValueName(0)", "Red"),
            ("aspectFilter(3).aspectName", "Brand"),
        ]);
        let filters = parse_aspect_filters(&raw).expect("valid");
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[1].aspect_name, "Color");
    }

    #[test]
    fn name_without_value_fails() {
        let raw = RawParams::from([("aspectFilter(0).aspectName", "Size")]);
        assert_eq!(
            parse_aspect_filters(&raw),
            Err(ValidationError::IncompleteFilter {
                attribute: "aspectFilter(0).aspectValueName".into()
            })
        );
    }

    #[test]
    fn value_without_name_is_ignored() {
        let raw = RawParams::from([("aspectFilter.aspectValueName", "10")]);
        assert_eq!(parse_aspect_filters(&raw), Ok(vec![]));
    }

    #[test]
    fn mixed_name_syntax_fails() {
        let raw = RawParams::from([
            ("aspectFilter.aspectName", "Size"),
            ("aspectFilter.aspectValueName", "10"),
            ("aspectFilter(0).aspectName", "Color"),
            ("aspectFilter(0).aspectValueName", "Red"),
        ]);
        assert!(matches!(
            parse_aspect_filters(&raw),
            Err(ValidationError::IndexSyntax { .. })
        ));
    }
}
