//! Coercion of raw environment values into typed values

use crate::error::EnvError;
use crate::source::EnvSource;

const TRUE_VALUES: [&str; 2] = ["1", "true"];
const FALSE_VALUES: [&str; 2] = ["0", "false"];

/// Load a required value, coercing it with `parse`
pub(crate) fn deserialize_required<S, T, F>(
    source: &S,
    env_name: &str,
    parse: F,
) -> Result<T, EnvError>
where
    S: EnvSource + ?Sized,
    F: FnOnce(&str, &str) -> Result<T, EnvError>,
{
    let value = get_env_value(source, env_name)?;
    parse(env_name, &value)
}

/// Load a value with a default, coercing it with `parse` when present
///
/// The default is returned as-is and is never passed through `parse`.
pub(crate) fn deserialize_with_default<S, T, F>(
    source: &S,
    env_name: &str,
    default: T,
    parse: F,
) -> Result<T, EnvError>
where
    S: EnvSource + ?Sized,
    F: FnOnce(&str, &str) -> Result<T, EnvError>,
{
    match get_env_value(source, env_name) {
        Ok(value) => parse(env_name, &value),
        Err(EnvError::MissingRequired { .. }) => Ok(default),
        Err(e) => Err(e),
    }
}

/// Get the raw value of `env_name`, or `MissingRequired` if it is not set
pub(crate) fn get_env_value<S>(source: &S, env_name: &str) -> Result<String, EnvError>
where
    S: EnvSource + ?Sized,
{
    source
        .get(env_name)
        .ok_or_else(|| EnvError::missing(env_name))
}

/// Accepts exactly `1`, `true`, `0` and `false`.
pub(crate) fn parse_bool(env_name: &str, value: &str) -> Result<bool, EnvError> {
    if TRUE_VALUES.contains(&value) {
        Ok(true)
    } else if FALSE_VALUES.contains(&value) {
        Ok(false)
    } else {
        Err(EnvError::invalid_boolean(env_name, value))
    }
}

/// Parses the leading base-10 integer of `value`, ignoring anything after it.
pub(crate) fn parse_int(env_name: &str, value: &str) -> Result<i64, EnvError> {
    leading_integer(value).ok_or_else(|| EnvError::invalid_integer(env_name, value))
}

pub(crate) fn parse_member(
    env_name: &str,
    value: &str,
    valid: &[&str],
) -> Result<String, EnvError> {
    if valid.contains(&value) {
        Ok(value.to_string())
    } else {
        Err(EnvError::invalid_enum_value(env_name, value, valid))
    }
}

/// `"  -42abc"` gives `Some(-42)`, `"abc"` gives `None`.
///
/// Digit runs that overflow `i64` give `None`.
fn leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let sign_len = match trimmed.as_bytes().first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let digits = &trimmed[sign_len..];
    let digits_len = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if digits_len == 0 {
        return None;
    }
    trimmed[..sign_len + digits_len].parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_bool_tokens() {
        assert!(parse_bool("K", "1").unwrap());
        assert!(parse_bool("K", "true").unwrap());
        assert!(!parse_bool("K", "0").unwrap());
        assert!(!parse_bool("K", "false").unwrap());
    }

    #[test]
    fn test_parse_bool_rejects_other_spellings() {
        for raw in ["TRUE", "yes", "on", "", " true", "2"] {
            let result = parse_bool("K", raw);
            assert!(
                matches!(result, Err(EnvError::InvalidBoolean { .. })),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_int_whole_values() {
        assert_eq!(parse_int("K", "7").unwrap(), 7);
        assert_eq!(parse_int("K", "-15").unwrap(), -15);
        assert_eq!(parse_int("K", "+3").unwrap(), 3);
        assert_eq!(parse_int("K", "007").unwrap(), 7);
    }

    #[test]
    fn test_parse_int_uses_leading_prefix() {
        assert_eq!(parse_int("K", "42abc").unwrap(), 42);
        assert_eq!(parse_int("K", "-3x").unwrap(), -3);
        assert_eq!(parse_int("K", "  \t12 34").unwrap(), 12);
        assert_eq!(parse_int("K", "1.9").unwrap(), 1);
        assert_eq!(parse_int("K", "0x10").unwrap(), 0);
    }

    #[test]
    fn test_parse_int_without_digits() {
        for raw in ["abc", "", "   ", "-", "+x", "- 1"] {
            let result = parse_int("K", raw);
            assert!(
                matches!(result, Err(EnvError::InvalidInteger { .. })),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_int_bounds() {
        assert_eq!(parse_int("K", "9223372036854775807").unwrap(), i64::MAX);
        assert_eq!(parse_int("K", "-9223372036854775808").unwrap(), i64::MIN);
        assert!(matches!(
            parse_int("K", "9223372036854775808"),
            Err(EnvError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn test_parse_member() {
        assert_eq!(parse_member("K", "b", &["a", "b"]).unwrap(), "b");

        match parse_member("K", "c", &["a", "b"]) {
            Err(EnvError::InvalidEnumValue { value, allowed, .. }) => {
                assert_eq!(value, "c");
                assert_eq!(allowed, vec!["a", "b"]);
            }
            other => panic!("Expected InvalidEnumValue, got {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_required_missing() {
        let env = source(&[]);
        let result = deserialize_required(&env, "MISSING", parse_int);
        assert_eq!(result, Err(EnvError::missing("MISSING")));
    }

    #[test]
    fn test_deserialize_with_default_use_default() {
        let env = source(&[]);
        let result = deserialize_with_default(&env, "MISSING", 50, parse_int).unwrap();
        assert_eq!(result, 50);
    }

    #[test]
    fn test_deserialize_with_default_env_set() {
        let env = source(&[("PORT", "100")]);
        let result = deserialize_with_default(&env, "PORT", 50, parse_int).unwrap();
        assert_eq!(result, 100);
    }

    #[test]
    fn test_deserialize_with_default_does_not_hide_bad_value() {
        let env = source(&[("PORT", "eighty")]);
        let result = deserialize_with_default(&env, "PORT", 50, parse_int);
        assert!(matches!(result, Err(EnvError::InvalidInteger { .. })));
    }
}
