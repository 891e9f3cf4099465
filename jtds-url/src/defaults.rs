//! Fallback values for unset connection properties.
//!
//! Defaults depend on the resolved [`ServerFamily`] and, for the packet size,
//! on the [`ProtocolVersion`]. Values already present are never replaced.

use tracing::trace;

use crate::properties::{ConnectionProperties, PropertyKey, ProtocolVersion, ServerFamily};

/// Application and program name reported when none is configured.
pub const DEFAULT_APP_NAME: &str = "jTDS";

/// LOB buffer size in bytes.
pub const DEFAULT_LOB_BUFFER: &str = "32768";

/// MAC address reported when none is configured.
pub const DEFAULT_MAC_ADDRESS: &str = "000000000000";

/// Smallest packet size accepted by TDS 4.2 servers.
pub const MIN_PACKET_SIZE: &str = "512";

/// Default value of `key` for the given family and protocol version.
///
/// Returns `None` for keys without a default: `SERVERNAME`, and
/// `LOGINTIMEOUT`, which the driver fills from its own configuration when a
/// connection is resolved.
pub fn default_value(
    key: PropertyKey,
    family: ServerFamily,
    version: ProtocolVersion,
) -> Option<String> {
    let value = match key {
        PropertyKey::ServerName | PropertyKey::LoginTimeout => return None,
        PropertyKey::ServerType => family.as_str().to_string(),
        PropertyKey::Tds => family.default_protocol().as_str().to_string(),
        PropertyKey::PortNumber => family.default_port().to_string(),
        PropertyKey::PacketSize => match version {
            ProtocolVersion::Tds42 => MIN_PACKET_SIZE.to_string(),
            // Negotiated by the server.
            ProtocolVersion::Tds50 | ProtocolVersion::Tds70 | ProtocolVersion::Tds80 => {
                "0".to_string()
            }
        },
        PropertyKey::AppName | PropertyKey::ProgName => DEFAULT_APP_NAME.to_string(),
        PropertyKey::LastUpdateCount | PropertyKey::NamedPipe => "false".to_string(),
        PropertyKey::PrepareSql
        | PropertyKey::SendStringParametersAsUnicode
        | PropertyKey::TcpNoDelay => "true".to_string(),
        PropertyKey::MacAddress => DEFAULT_MAC_ADDRESS.to_string(),
        PropertyKey::LobBuffer => DEFAULT_LOB_BUFFER.to_string(),
        PropertyKey::DatabaseName
        | PropertyKey::Charset
        | PropertyKey::Domain
        | PropertyKey::Instance
        | PropertyKey::Language
        | PropertyKey::User
        | PropertyKey::Password
        | PropertyKey::Wsid => String::new(),
    };
    Some(value)
}

/// Fill every absent key that has a default.
///
/// The family comes from `SERVERTYPE` (defaulting to SQL Server) and the
/// version from `TDS`; an unrecognised `TDS` value selects the family's
/// default version for version-dependent entries but is itself kept.
pub fn fill_defaults(mut config: ConnectionProperties) -> ConnectionProperties {
    let family = config.server_family().unwrap_or(ServerFamily::SqlServer);
    let version = config
        .protocol_version()
        .unwrap_or_else(|| family.default_protocol());

    let mut filled = 0usize;
    for key in PropertyKey::ALL {
        if config.contains_key(key) {
            continue;
        }
        if let Some(value) = default_value(key, family, version) {
            config.set_key(key, value);
            filled += 1;
        }
    }

    trace!(family = %family, tds = %version, filled, "Applied default properties");
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base(family: ServerFamily) -> ConnectionProperties {
        ConnectionProperties::new()
            .with("SERVERTYPE", family.as_str())
            .with("SERVERNAME", "localhost")
    }

    #[test]
    fn test_sqlserver_defaults() {
        let config = fill_defaults(base(ServerFamily::SqlServer));
        assert_eq!(config.get_key(PropertyKey::PortNumber), Some("1433"));
        assert_eq!(config.get_key(PropertyKey::Tds), Some("8.0"));
        assert_eq!(config.get_key(PropertyKey::PacketSize), Some("0"));
        assert_eq!(config.get_key(PropertyKey::AppName), Some("jTDS"));
        assert_eq!(config.get_key(PropertyKey::SendStringParametersAsUnicode), Some("true"));
        assert_eq!(config.get_key(PropertyKey::NamedPipe), Some("false"));
        assert_eq!(config.get_key(PropertyKey::DatabaseName), Some(""));
    }

    #[test]
    fn test_sybase_defaults() {
        let config = fill_defaults(base(ServerFamily::Sybase));
        assert_eq!(config.get_key(PropertyKey::PortNumber), Some("7100"));
        assert_eq!(config.get_key(PropertyKey::Tds), Some("5.0"));
    }

    #[test]
    fn test_packet_size_follows_version() {
        let config = fill_defaults(base(ServerFamily::Sybase).with("TDS", "4.2"));
        assert_eq!(config.get_key(PropertyKey::PacketSize), Some("512"));
    }

    #[test]
    fn test_unknown_version_is_kept() {
        let config = fill_defaults(base(ServerFamily::SqlServer).with("TDS", "9.9"));
        assert_eq!(config.get_key(PropertyKey::Tds), Some("9.9"));
        assert_eq!(config.get_key(PropertyKey::PacketSize), Some("0"));
    }

    #[test]
    fn test_never_overwrites() {
        let config = fill_defaults(
            base(ServerFamily::SqlServer)
                .with("PORTNUMBER", "1500")
                .with("APPNAME", "reporting"),
        );
        assert_eq!(config.get_key(PropertyKey::PortNumber), Some("1500"));
        assert_eq!(config.get_key(PropertyKey::AppName), Some("reporting"));
    }

    #[test]
    fn test_missing_family_defaults_to_sqlserver() {
        let config = fill_defaults(ConnectionProperties::new());
        assert_eq!(config.get_key(PropertyKey::ServerType), Some("SQLSERVER"));
        assert!(!config.contains_key(PropertyKey::ServerName));
        assert!(!config.contains_key(PropertyKey::LoginTimeout));
    }

    #[test]
    fn test_fill_is_deterministic() {
        let input = base(ServerFamily::Sybase).with("FLAG", "");
        assert_eq!(fill_defaults(input.clone()), fill_defaults(input.clone()));
        let once = fill_defaults(input);
        assert_eq!(fill_defaults(once.clone()), once);
    }
}
