//! Single-feature rewrites of part-of-speech tag strings.
//!
//! A correction pass yields, per token, a set of touched features together
//! with their previous and new values. Each feature change is folded over the
//! token's current tag by [`update_pos_tag`], producing the tag the
//! synthesizer is asked to realize.

use crate::TAG_SEPARATOR;
use crate::expr::Value;

/// Apply one feature change to `current` and return the rewritten tag.
///
/// The change is described by the feature's value before the correction ran
/// (`previous`, from the token's own inflection) and after (`new`, from the
/// evaluation context). The policy:
///
/// - no new value: the correction never actually bound the variable, keep
///   the tag unchanged;
/// - previously absent, new is `true`: append the feature name as a flag
///   component;
/// - previously absent, new is a string: append that string as a component;
/// - previously absent, new is `false`: nothing to remove, unchanged;
/// - previously present, new is `false`: remove the component equal to the
///   feature name;
/// - previously a string, new a string: substitute the old component text
///   with the new;
/// - previously present, new is `true`: the flag already holds, unchanged.
///
/// The result is normalized by dropping empty components, so removals and
/// substitutions never leave `::` runs behind.
pub(crate) fn update_pos_tag(
    current: &str,
    feature: &str,
    previous: Option<&Value>,
    new: Option<&Value>,
) -> String {
    let Some(new) = new else {
        return current.to_string();
    };

    let rewritten = match (previous, new) {
        (None, Value::Bool(true)) => format!("{current}{TAG_SEPARATOR}{feature}"),
        (None, Value::Str(text)) => format!("{current}{TAG_SEPARATOR}{text}"),
        (None, Value::Bool(false)) => current.to_string(),
        (Some(_), Value::Bool(false)) => replace_component(current, feature, None),
        (Some(Value::Str(old)), Value::Str(text)) => replace_component(current, old, Some(text)),
        (Some(_), _) => current.to_string(),
    };

    normalize(&rewritten)
}

/// Replace the component equal to `target` with `replacement`, or drop it
/// when `replacement` is `None`. Only whole components match, never text
/// inside a longer component.
fn replace_component(tag: &str, target: &str, replacement: Option<&str>) -> String {
    tag.split(TAG_SEPARATOR)
        .map(|component| {
            if component == target {
                replacement.unwrap_or("")
            } else {
                component
            }
        })
        .collect::<Vec<_>>()
        .join(&TAG_SEPARATOR.to_string())
}

fn normalize(tag: &str) -> String {
    tag.split(TAG_SEPARATOR)
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(&TAG_SEPARATOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::InflectionParser;

    fn str_value(s: &str) -> Value {
        Value::from(s)
    }

    #[test]
    fn substitutes_a_string_feature_in_place() {
        let rewritten = update_pos_tag(
            "noun:v_naz:s:m",
            "case",
            Some(&str_value("v_naz")),
            Some(&str_value("v_zna")),
        );
        assert_eq!(rewritten, "noun:v_zna:s:m");
    }

    #[test]
    fn appends_a_new_flag_component() {
        let rewritten = update_pos_tag("noun:m", "anim", None, Some(&Value::Bool(true)));
        assert_eq!(rewritten, "noun:m:anim");
    }

    #[test]
    fn appends_a_new_string_feature_value() {
        let rewritten = update_pos_tag("noun:m", "case", None, Some(&str_value("v_rod")));
        assert_eq!(rewritten, "noun:m:v_rod");
    }

    #[test]
    fn removes_a_flag_without_leaving_separator_runs() {
        let rewritten = update_pos_tag(
            "noun:anim:v_naz",
            "anim",
            Some(&Value::Bool(true)),
            Some(&Value::Bool(false)),
        );
        assert_eq!(rewritten, "noun:v_naz");
    }

    #[test]
    fn missing_new_value_is_a_no_op() {
        assert_eq!(update_pos_tag("noun:v_naz:s", "case", Some(&str_value("v_naz")), None), "noun:v_naz:s");
    }

    #[test]
    fn clearing_an_absent_feature_is_a_no_op() {
        assert_eq!(update_pos_tag("noun:s", "anim", None, Some(&Value::Bool(false))), "noun:s");
    }

    #[test]
    fn setting_an_already_present_flag_is_a_no_op() {
        let rewritten = update_pos_tag(
            "noun:anim:s",
            "anim",
            Some(&Value::Bool(true)),
            Some(&Value::Bool(true)),
        );
        assert_eq!(rewritten, "noun:anim:s");
    }

    #[test]
    fn only_whole_components_are_substituted() {
        // "s" is both a number value and a letter inside "subst"; the
        // rewrite must leave "subst" alone.
        let rewritten = update_pos_tag("adj:subst:s", "number", Some(&str_value("s")), Some(&str_value("p")));
        assert_eq!(rewritten, "adj:subst:p");
    }

    #[test]
    fn rewritten_tag_extracts_to_the_corrected_feature() {
        let parser = InflectionParser::new(features![
            "case" => r"(^|:)(?<case>v_naz|v_rod|v_dav|v_zna|v_oru|v_mis|v_kly)($|:)",
        ]);
        let before = parser.extract("adj:v_naz:s");
        assert_eq!(before.get("case"), Some(&str_value("v_naz")));

        let rewritten = update_pos_tag("adj:v_naz:s", "case", before.get("case"), Some(&str_value("v_zna")));
        let after = parser.extract(&rewritten);
        assert_eq!(after.get("case"), Some(&str_value("v_zna")));
    }
}
