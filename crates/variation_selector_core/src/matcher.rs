//! Resolving the variant a shopper lands on when choosing an option

use variation_selector_types::{AttributeCode, OptionState, RawValue, Variant};

use crate::extract::has_value;

/// The variant an option points to, and how it relates to the active variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMatch<'a> {
    pub variant: &'a Variant,
    pub state: OptionState,
}

/// The first variant whose values equal every `(code, value)` pair of
/// `desired`.
pub fn find_variant<'a>(variants: &[&'a Variant], desired: &[(&str, &RawValue)]) -> Option<&'a Variant> {
    variants
        .iter()
        .copied()
        .find(|variant| desired.iter().all(|(code, value)| has_value(variant, code, value)))
}

/// Resolve the option `code = value` against `variants`.
///
/// Without an active variant the first variant carrying the value is a
/// [`OptionState::Match`]. With an active variant the value replaces the
/// active variant's value for `code`; an exact match on all `codes` is either
/// the active variant itself ([`OptionState::Active`]) or another variant
/// ([`OptionState::Match`]). If no variant has that combination, any variant
/// carrying the value is returned as [`OptionState::NoMatch`].
///
/// Returns `None` only if no variant carries the value at all.
pub fn resolve_match<'a>(
    code: &str,
    value: &RawValue,
    variants: &[&'a Variant],
    codes: &[AttributeCode],
    active: Option<&'a Variant>,
) -> Option<ResolvedMatch<'a>> {
    let fallback = || find_variant(variants, &[(code, value)]);

    let Some(active) = active else {
        return fallback().map(|variant| ResolvedMatch {
            variant,
            state: OptionState::Match,
        });
    };

    let desired: Option<Vec<(&str, &RawValue)>> = codes
        .iter()
        .map(|c| {
            if c.as_str() == code {
                Some((c.as_str(), value))
            } else {
                active.value(c.as_str()).map(|v| (c.as_str(), v))
            }
        })
        .collect();

    if let Some(desired) = desired {
        // Variants may share all variation values; the active one wins
        if desired.iter().all(|(c, v)| has_value(active, c, v)) {
            return Some(ResolvedMatch {
                variant: active,
                state: OptionState::Active,
            });
        }
        if let Some(variant) = find_variant(variants, &desired) {
            return Some(ResolvedMatch {
                variant,
                state: OptionState::Match,
            });
        }
    }

    tracing::trace!(
        "No variant combines {}={} with the choices of {}, falling back",
        code,
        value,
        active.marketplace_code
    );

    fallback().map(|variant| ResolvedMatch {
        variant,
        state: OptionState::NoMatch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use variation_selector_types::Attribute;

    fn variants() -> Vec<Variant> {
        [("red-S", "red", "S"), ("red-L", "red", "L"), ("blue-S", "blue", "S"), ("blue-M", "blue", "M")]
            .into_iter()
            .map(|(code, color, size)| {
                Variant::new(code)
                    .with_attribute(Attribute::new("color", color))
                    .with_attribute(Attribute::new("size", size))
            })
            .collect()
    }

    fn codes() -> Vec<AttributeCode> {
        vec!["color".into(), "size".into()]
    }

    fn resolved(
        code: &str,
        value: &str,
        variants: &[&Variant],
        active: Option<&str>,
    ) -> Option<(String, OptionState)> {
        let active = active.and_then(|a| variants.iter().copied().find(|v| v.marketplace_code.as_str() == a));
        resolve_match(code, &value.into(), variants, &codes(), active)
            .map(|m| (m.variant.marketplace_code.to_string(), m.state))
    }

    #[test]
    fn test_without_active_variant() {
        let variants = variants();
        let refs: Vec<&Variant> = variants.iter().collect();
        assert_eq!(
            resolved("color", "blue", &refs, None),
            Some(("blue-S".to_string(), OptionState::Match))
        );
        assert_eq!(
            resolved("size", "L", &refs, None),
            Some(("red-L".to_string(), OptionState::Match))
        );
        assert_eq!(resolved("color", "green", &refs, None), None);
    }

    #[test]
    fn test_with_active_variant() {
        let variants = variants();
        let refs: Vec<&Variant> = variants.iter().collect();
        let active = Some("red-L");

        assert_eq!(
            resolved("color", "red", &refs, active),
            Some(("red-L".to_string(), OptionState::Active))
        );
        assert_eq!(
            resolved("size", "S", &refs, active),
            Some(("red-S".to_string(), OptionState::Match))
        );
        // blue-L does not exist
        assert_eq!(
            resolved("color", "blue", &refs, active),
            Some(("blue-S".to_string(), OptionState::NoMatch))
        );
        // neither does red-M
        assert_eq!(
            resolved("size", "M", &refs, active),
            Some(("blue-M".to_string(), OptionState::NoMatch))
        );
        assert_eq!(resolved("size", "XL", &refs, active), None);
    }

    #[test]
    fn test_find_variant() {
        let variants = variants();
        let refs: Vec<&Variant> = variants.iter().collect();
        let blue = RawValue::from("blue");
        let medium = RawValue::from("M");
        let large = RawValue::from("L");

        let found = find_variant(&refs, &[("color", &blue), ("size", &medium)]);
        assert_eq!(found.map(|v| v.marketplace_code.as_str()), Some("blue-M"));
        assert!(find_variant(&refs, &[("color", &blue), ("size", &large)]).is_none());
    }
}
