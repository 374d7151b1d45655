//! Variable substitution engine for templates

use std::collections::HashMap;

/// Placeholder name to substitution value.
pub type Variables = HashMap<String, String>;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

enum Segment<'a> {
    Literal(&'a str),
    Placeholder { key: &'a str, raw: &'a str },
}

/// Split a template into literal text and `{{key}}` tokens, left to right.
fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            break;
        };

        // "{{a {{b}}": only the innermost opener starts a token
        let inner = &after_open[..end];
        if let Some(nested) = inner.rfind(OPEN) {
            let skip = start + OPEN.len() + nested;
            out.push(Segment::Literal(&rest[..skip]));
            rest = &rest[skip..];
            continue;
        }

        if start > 0 {
            out.push(Segment::Literal(&rest[..start]));
        }
        let token_end = start + OPEN.len() + end + CLOSE.len();
        out.push(Segment::Placeholder {
            key: inner.trim(),
            raw: &rest[start..token_end],
        });
        rest = &rest[token_end..];
    }

    if !rest.is_empty() {
        out.push(Segment::Literal(rest));
    }
    out
}

/// Substitute `{{variable}}` placeholders in a template string.
///
/// Unknown placeholders are copied through unchanged. Substituted values are
/// not scanned again, so the result does not depend on map iteration order.
pub fn substitute(template: &str, variables: &Variables) -> String {
    let mut result = String::with_capacity(template.len());

    for segment in segments(template) {
        match segment {
            Segment::Literal(text) => result.push_str(text),
            Segment::Placeholder { key, raw } => match variables.get(key) {
                Some(value) => result.push_str(value),
                None => result.push_str(raw),
            },
        }
    }

    result
}

/// Distinct placeholder keys in order of first appearance.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for segment in segments(template) {
        if let Segment::Placeholder { key, .. } = segment {
            if !key.is_empty() && !keys.iter().any(|k| k == key) {
                keys.push(key.to_string());
            }
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Variables {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitute_simple() {
        let result = substitute("Hello {{name}}", &vars(&[("name", "Ana")]));
        assert_eq!(result, "Hello Ana");
    }

    #[test]
    fn test_missing_key_left_intact() {
        let result = substitute("Hello {{name}}", &Variables::new());
        assert_eq!(result, "Hello {{name}}");
    }

    #[test]
    fn test_empty_mapping_is_identity() {
        let templates = [
            "",
            "plain text",
            "{{a}} and {{b}}",
            "{{ spaced }}",
            "unterminated {{open",
            "}} stray closer {{",
            "{{{{double}}}}",
        ];
        for template in templates {
            assert_eq!(substitute(template, &Variables::new()), template);
        }
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(substitute("", &vars(&[("name", "Ana")])), "");
    }

    #[test]
    fn test_substitute_multiple() {
        let template = "Your order {{order_id}} is being delivered by {{carrier}}";
        let result = substitute(
            template,
            &vars(&[("order_id", "ORD-123"), ("carrier", "FedEx")]),
        );
        assert_eq!(result, "Your order ORD-123 is being delivered by FedEx");
    }

    #[test]
    fn test_repeated_key_replaced_everywhere() {
        let result = substitute("{{x}}-{{x}}-{{x}}", &vars(&[("x", "7")]));
        assert_eq!(result, "7-7-7");
    }

    #[test]
    fn test_single_occurrence_changes_nothing_else() {
        let template = "Dear {{who}}, see {{other}} {not a token}";
        let result = substitute(template, &vars(&[("who", "Sam")]));
        assert_eq!(result, "Dear Sam, see {{other}} {not a token}");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let result = substitute(
            "{{a}} {{b}}",
            &vars(&[("a", "{{b}}"), ("b", "second")]),
        );
        assert_eq!(result, "{{b}} second");
    }

    #[test]
    fn test_whitespace_inside_braces() {
        let result = substitute("Hi {{ name }}!", &vars(&[("name", "Lee")]));
        assert_eq!(result, "Hi Lee!");
    }

    #[test]
    fn test_nested_opener_uses_innermost() {
        let result = substitute("{{a {{b}}", &vars(&[("b", "B")]));
        assert_eq!(result, "{{a B");
    }

    #[test]
    fn test_unicode_text_preserved() {
        let result = substitute("Olá {{name}} — ✓", &vars(&[("name", "João")]));
        assert_eq!(result, "Olá João — ✓");
    }

    #[test]
    fn test_placeholders_in_order() {
        let keys = placeholders("{{b}} {{a}} {{b}} {{ c }} {{}}");
        assert_eq!(keys, vec!["b", "a", "c"]);
    }
}
