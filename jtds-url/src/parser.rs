//! Connection locator parser.
//!
//! ```text
//! jdbc:jtds:<family>://[host][:port][/database][;key=value]*
//! ```

use tracing::debug;

use crate::defaults::fill_defaults;
use crate::error::{LocatorError, LocatorResult};
use crate::properties::{ConnectionProperties, PropertyKey, ServerFamily};
use crate::tokenizer::{Delimiter, Tokenizer};

/// Locator prefix, compared case-insensitively.
pub const LOCATOR_PREFIX: &str = "jdbc:jtds:";

/// Check whether `candidate` is a jTDS locator.
///
/// Only the prefix is inspected; the rest of the locator may still be invalid.
pub fn accepts_locator(candidate: &str) -> bool {
    candidate
        .get(..LOCATOR_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(LOCATOR_PREFIX))
}

/// Parse a locator into connection properties.
///
/// `overrides` seed the result (keys upper-cased); values from the locator
/// replace them, then unset keys receive their defaults. Any error aborts the
/// whole parse.
///
/// # Examples
///
/// ```rust
/// use jtds_url::{ConnectionProperties, PropertyKey, parse_locator};
///
/// let props = parse_locator(
///     "jdbc:jtds:sqlserver://localhost:1433/mydb;ENCRYPT",
///     &ConnectionProperties::new(),
/// )
/// .unwrap();
/// assert_eq!(props.get_key(PropertyKey::ServerName), Some("localhost"));
/// assert_eq!(props.get_key(PropertyKey::DatabaseName), Some("mydb"));
/// assert_eq!(props.get("ENCRYPT"), Some(""));
/// ```
pub fn parse_locator(
    locator: &str,
    overrides: &ConnectionProperties,
) -> LocatorResult<ConnectionProperties> {
    debug!(
        locator_len = locator.len(),
        overrides = overrides.len(),
        "parse_locator()"
    );

    let props = parse_components(locator, overrides.clone())?;
    let props = fill_defaults(props);

    debug!(
        family = ?props.server_family(),
        properties = props.len(),
        "Locator parsed"
    );
    Ok(props)
}

/// Apply the locator grammar on top of `props`, without defaults.
fn parse_components(
    locator: &str,
    mut props: ConnectionProperties,
) -> LocatorResult<ConnectionProperties> {
    let mut tokens = Tokenizer::new(locator);

    let scheme = tokens.next_token();
    if !scheme.text.eq_ignore_ascii_case("jdbc") {
        return Err(LocatorError::MissingScheme {
            found: scheme.text.to_string(),
            offset: scheme.start,
        });
    }

    let subscheme = tokens.next_token();
    if !subscheme.text.eq_ignore_ascii_case("jtds") {
        return Err(LocatorError::MissingSubscheme {
            found: subscheme.text.to_string(),
            offset: subscheme.start,
        });
    }

    let family_token = tokens.next_token();
    let family = ServerFamily::from_scheme(family_token.text).ok_or_else(|| {
        LocatorError::UnknownServerType {
            found: family_token.text.to_string(),
            offset: family_token.start,
        }
    })?;
    props.set_key(PropertyKey::ServerType, family.as_str());

    // The empty segment between `:` and `//`.
    let separator = tokens.next_token();
    if !separator.text.is_empty() {
        return Err(LocatorError::UnexpectedSeparator {
            found: separator.text.to_string(),
            offset: separator.start,
        });
    }

    let host = tokens.next_token();
    if !host.text.is_empty() {
        props.set_key(PropertyKey::ServerName, host.text);
    } else if !props.contains_key(PropertyKey::ServerName) {
        return Err(LocatorError::MissingServerName { offset: host.start });
    }

    if tokens.continues_with(Delimiter::Colon) {
        let port = tokens.next_token();
        let number: i32 = port
            .text
            .parse()
            .map_err(|source| LocatorError::InvalidPort {
                value: port.text.to_string(),
                offset: port.start,
                source,
            })?;
        props.set_key(PropertyKey::PortNumber, number.to_string());
    }

    if tokens.continues_with(Delimiter::Slash) {
        let database = tokens.next_token();
        props.set_key(PropertyKey::DatabaseName, database.text);
    }

    while tokens.continues_with(Delimiter::Semicolon) {
        let segment = tokens.next_token().text;
        match segment.split_once('=') {
            Some((key, value)) if !key.is_empty() && !value.is_empty() => {
                props.set(key, value);
            }
            _ => {
                props.set(segment, "");
            }
        }
    }

    if tokens.has_remaining() {
        debug!(
            ignored_len = tokens.remaining().len(),
            "Ignoring locator input after unexpected delimiter"
        );
    }

    Ok(props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LocatorErrorKind;
    use pretty_assertions::assert_eq;

    fn parse(locator: &str) -> LocatorResult<ConnectionProperties> {
        parse_locator(locator, &ConnectionProperties::new())
    }

    fn kind(locator: &str) -> LocatorErrorKind {
        parse(locator).unwrap_err().kind()
    }

    #[test]
    fn test_accepts_locator() {
        assert!(accepts_locator("jdbc:jtds:sqlserver://host"));
        assert!(accepts_locator("JDBC:JTDS:"));
        assert!(!accepts_locator("jdbc:jtds"));
        assert!(!accepts_locator("jdbc:postgresql://host"));
        assert!(!accepts_locator(""));
    }

    #[test]
    fn test_parse_full_locator() {
        let props = parse("jdbc:jtds:sqlserver://localhost:1433/mydb;ENCRYPT").unwrap();
        assert_eq!(props.get_key(PropertyKey::ServerType), Some("SQLSERVER"));
        assert_eq!(props.get_key(PropertyKey::ServerName), Some("localhost"));
        assert_eq!(props.get_key(PropertyKey::PortNumber), Some("1433"));
        assert_eq!(props.get_key(PropertyKey::DatabaseName), Some("mydb"));
        assert_eq!(props.get("ENCRYPT"), Some(""));
    }

    #[test]
    fn test_parse_sybase_case_insensitive() {
        let props = parse("JDBC:JTDS:Sybase://dbhost").unwrap();
        assert_eq!(props.server_family(), Some(ServerFamily::Sybase));
        assert_eq!(props.get_key(PropertyKey::PortNumber), Some("7100"));
    }

    #[test]
    fn test_parse_database_without_port() {
        let props = parse("jdbc:jtds:sqlserver://host/sales").unwrap();
        assert_eq!(props.get_key(PropertyKey::DatabaseName), Some("sales"));
        assert_eq!(props.get_key(PropertyKey::PortNumber), Some("1433"));
    }

    #[test]
    fn test_parse_properties() {
        let props =
            parse("jdbc:jtds:sqlserver://host;user=sa;Password=secret;TDS=7.0").unwrap();
        assert_eq!(props.get_key(PropertyKey::User), Some("sa"));
        assert_eq!(props.get_key(PropertyKey::Password), Some("secret"));
        assert_eq!(props.get_key(PropertyKey::Tds), Some("7.0"));
    }

    #[test]
    fn test_value_split_on_first_equals() {
        let props = parse("jdbc:jtds:sqlserver://host;APPNAME=a=b").unwrap();
        assert_eq!(props.get_key(PropertyKey::AppName), Some("a=b"));
    }

    #[test]
    fn test_flag_conventions() {
        let props = parse("jdbc:jtds:sqlserver://host;=x;y=;;z").unwrap();
        assert_eq!(props.get("=X"), Some(""));
        assert_eq!(props.get("Y="), Some(""));
        assert_eq!(props.get("Z"), Some(""));
        assert_eq!(props.get(""), Some(""));
    }

    #[test]
    fn test_empty_segment_stored_as_empty_key() {
        let props = parse("jdbc:jtds:sqlserver://host;;A=1").unwrap();
        assert!(props.contains(""));
        assert_eq!(props.get(""), Some(""));
        assert_eq!(props.get("A"), Some("1"));
    }

    #[test]
    fn test_last_write_wins() {
        let props = parse("jdbc:jtds:sqlserver://host;A=1;A=2").unwrap();
        assert_eq!(props.get("A"), Some("2"));
    }

    #[test]
    fn test_locator_overrides_overrides() {
        let overrides = ConnectionProperties::new()
            .with("databasename", "old")
            .with("user", "app");
        let props = parse_locator("jdbc:jtds:sqlserver://host/new", &overrides).unwrap();
        assert_eq!(props.get_key(PropertyKey::DatabaseName), Some("new"));
        assert_eq!(props.get_key(PropertyKey::User), Some("app"));
    }

    #[test]
    fn test_empty_host_keeps_override() {
        let overrides = ConnectionProperties::new().with("SERVERNAME", "preset");
        let props = parse_locator("jdbc:jtds:sqlserver://", &overrides).unwrap();
        assert_eq!(props.get_key(PropertyKey::ServerName), Some("preset"));
    }

    #[test]
    fn test_port_is_normalised() {
        let props = parse("jdbc:jtds:sqlserver://host:01433").unwrap();
        assert_eq!(props.get_key(PropertyKey::PortNumber), Some("1433"));
    }

    #[test]
    fn test_trailing_colon_is_ignored() {
        let props = parse("jdbc:jtds:sqlserver://host:").unwrap();
        assert_eq!(props.get_key(PropertyKey::ServerName), Some("host"));
        assert_eq!(props.get_key(PropertyKey::PortNumber), Some("1433"));
    }

    #[test]
    fn test_errors() {
        assert_eq!(kind("odbc:jtds:sqlserver://host"), LocatorErrorKind::MissingScheme);
        assert_eq!(kind(""), LocatorErrorKind::MissingScheme);
        assert_eq!(kind("jdbc:other:sqlserver://host"), LocatorErrorKind::MissingSubscheme);
        assert_eq!(kind("jdbc:jtds:oracle://host"), LocatorErrorKind::UnknownServerType);
        assert_eq!(kind("jdbc:jtds:sqlserver:x//host"), LocatorErrorKind::UnexpectedSeparator);
        assert_eq!(kind("jdbc:jtds:sqlserver://"), LocatorErrorKind::MissingServerName);
        assert_eq!(kind("jdbc:jtds:sqlserver://host:notanumber"), LocatorErrorKind::InvalidPort);
    }

    #[test]
    fn test_error_offsets() {
        let err = parse("jdbc:jtds:sqlserver://host:12x4").unwrap_err();
        assert_eq!(err.offset(), 27);
        match err {
            LocatorError::InvalidPort { value, .. } => assert_eq!(value, "12x4"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
