//! Connection property keys, server families, protocol versions and the
//! property map produced by locator parsing.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical keys recognised by the driver.
///
/// The string form of each key is the upper-case identifier stored in
/// [`ConnectionProperties`]. Any other upper-case key in a property map is a
/// user-supplied free-form flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PropertyKey {
    /// Application name reported to the server.
    AppName,
    /// Client character set.
    Charset,
    /// Initial database.
    DatabaseName,
    /// Windows domain for NTLM authentication.
    Domain,
    /// Named instance to connect to.
    Instance,
    /// Session language.
    Language,
    /// Only report the last update count of a batch.
    LastUpdateCount,
    /// Size of the in-memory LOB buffer.
    LobBuffer,
    /// Login timeout in seconds.
    LoginTimeout,
    /// Network interface MAC address reported to the server.
    MacAddress,
    /// Use named pipes instead of TCP.
    NamedPipe,
    /// Network packet size.
    PacketSize,
    /// Login password.
    Password,
    /// Server port.
    PortNumber,
    /// Use server-side prepared statements.
    PrepareSql,
    /// Client program name.
    ProgName,
    /// Send string parameters as unicode.
    SendStringParametersAsUnicode,
    /// Server host name or address.
    ServerName,
    /// Server family, see [`ServerFamily`].
    ServerType,
    /// Set `TCP_NODELAY` on the socket.
    TcpNoDelay,
    /// TDS protocol version, see [`ProtocolVersion`].
    Tds,
    /// Login user.
    User,
    /// Workstation id.
    Wsid,
}

impl PropertyKey {
    /// Every recognised key, in canonical (sorted) order.
    pub const ALL: [PropertyKey; 23] = [
        Self::AppName,
        Self::Charset,
        Self::DatabaseName,
        Self::Domain,
        Self::Instance,
        Self::Language,
        Self::LastUpdateCount,
        Self::LobBuffer,
        Self::LoginTimeout,
        Self::MacAddress,
        Self::NamedPipe,
        Self::PacketSize,
        Self::Password,
        Self::PortNumber,
        Self::PrepareSql,
        Self::ProgName,
        Self::SendStringParametersAsUnicode,
        Self::ServerName,
        Self::ServerType,
        Self::TcpNoDelay,
        Self::Tds,
        Self::User,
        Self::Wsid,
    ];

    /// Get the canonical key string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AppName => "APPNAME",
            Self::Charset => "CHARSET",
            Self::DatabaseName => "DATABASENAME",
            Self::Domain => "DOMAIN",
            Self::Instance => "INSTANCE",
            Self::Language => "LANGUAGE",
            Self::LastUpdateCount => "LASTUPDATECOUNT",
            Self::LobBuffer => "LOBBUFFER",
            Self::LoginTimeout => "LOGINTIMEOUT",
            Self::MacAddress => "MACADDRESS",
            Self::NamedPipe => "NAMEDPIPE",
            Self::PacketSize => "PACKETSIZE",
            Self::Password => "PASSWORD",
            Self::PortNumber => "PORTNUMBER",
            Self::PrepareSql => "PREPARESQL",
            Self::ProgName => "PROGNAME",
            Self::SendStringParametersAsUnicode => "SENDSTRINGPARAMETERSASUNICODE",
            Self::ServerName => "SERVERNAME",
            Self::ServerType => "SERVERTYPE",
            Self::TcpNoDelay => "TCPNODELAY",
            Self::Tds => "TDS",
            Self::User => "USER",
            Self::Wsid => "WSID",
        }
    }

    /// Look up a key by its canonical string, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(name))
    }

    /// Whether the property holds a `true`/`false` flag.
    pub fn is_boolean(&self) -> bool {
        matches!(
            self,
            Self::LastUpdateCount
                | Self::NamedPipe
                | Self::PrepareSql
                | Self::SendStringParametersAsUnicode
                | Self::TcpNoDelay
        )
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database server product family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerFamily {
    /// Microsoft SQL Server.
    SqlServer,
    /// Sybase Adaptive Server Enterprise.
    Sybase,
}

impl ServerFamily {
    /// Both families, in choice-list order.
    pub const ALL: [ServerFamily; 2] = [Self::SqlServer, Self::Sybase];

    /// Get the tag stored under `SERVERTYPE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SqlServer => "SQLSERVER",
            Self::Sybase => "SYBASE",
        }
    }

    /// Parse the family segment of a locator (`sqlserver` or `sybase`, any case).
    pub fn from_scheme(segment: &str) -> Option<Self> {
        if segment.eq_ignore_ascii_case("sqlserver") {
            Some(Self::SqlServer)
        } else if segment.eq_ignore_ascii_case("sybase") {
            Some(Self::Sybase)
        } else {
            None
        }
    }

    /// Parse a stored `SERVERTYPE` value: a tag or a legacy numeric code.
    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim() {
            "1" => Some(Self::SqlServer),
            "2" => Some(Self::Sybase),
            other => Self::from_scheme(other),
        }
    }

    /// Protocol version negotiated when none is configured.
    pub fn default_protocol(&self) -> ProtocolVersion {
        match self {
            Self::SqlServer => ProtocolVersion::Tds80,
            Self::Sybase => ProtocolVersion::Tds50,
        }
    }

    /// Port the server listens on by default.
    pub fn default_port(&self) -> u16 {
        match self {
            Self::SqlServer => 1433,
            Self::Sybase => 7100,
        }
    }
}

impl fmt::Display for ServerFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// TDS protocol dialect, ordered by capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProtocolVersion {
    /// TDS 4.2 (SQL Server 6.5, Sybase 10).
    Tds42,
    /// TDS 5.0 (Sybase 11+).
    Tds50,
    /// TDS 7.0 (SQL Server 7.0).
    Tds70,
    /// TDS 8.0 (SQL Server 2000+).
    Tds80,
}

impl ProtocolVersion {
    /// Every version, in choice-list order.
    pub const ALL: [ProtocolVersion; 4] = [Self::Tds42, Self::Tds50, Self::Tds70, Self::Tds80];

    /// Get the version tag stored under `TDS`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tds42 => "4.2",
            Self::Tds50 => "5.0",
            Self::Tds70 => "7.0",
            Self::Tds80 => "8.0",
        }
    }

    /// Parse a version tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == tag.trim())
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved connection configuration.
///
/// Keys are upper-cased on insertion; values are kept verbatim. Typed
/// interpretation of values (port numbers, flags) is left to the consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionProperties {
    entries: BTreeMap<String, String>,
}

impl ConnectionProperties {
    /// Create an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by key (any case).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_uppercase())
            .map(String::as_str)
    }

    /// Get a value for a canonical key.
    pub fn get_key(&self, key: PropertyKey) -> Option<&str> {
        self.entries.get(key.as_str()).map(String::as_str)
    }

    /// Set a value, upper-casing the key. Returns the previous value.
    pub fn set(&mut self, key: impl AsRef<str>, value: impl Into<String>) -> Option<String> {
        self.entries
            .insert(key.as_ref().to_uppercase(), value.into())
    }

    /// Set a value for a canonical key. Returns the previous value.
    pub fn set_key(&mut self, key: PropertyKey, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.as_str().to_string(), value.into())
    }

    /// Set a canonical key only if it has no value yet.
    ///
    /// Returns `true` if the value was inserted.
    pub fn set_if_absent(&mut self, key: PropertyKey, value: impl Into<String>) -> bool {
        if self.contains_key(key) {
            return false;
        }
        self.set_key(key, value);
        true
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Whether a canonical key has a value.
    pub fn contains_key(&self, key: PropertyKey) -> bool {
        self.entries.contains_key(key.as_str())
    }

    /// Whether a key (any case) has a value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_uppercase())
    }

    /// Remove a key (any case).
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(&key.to_uppercase())
    }

    /// The resolved server family, if `SERVERTYPE` holds a recognised value.
    pub fn server_family(&self) -> Option<ServerFamily> {
        self.get_key(PropertyKey::ServerType)
            .and_then(ServerFamily::from_value)
    }

    /// The configured protocol version, if `TDS` holds a recognised tag.
    pub fn protocol_version(&self) -> Option<ProtocolVersion> {
        self.get_key(PropertyKey::Tds)
            .and_then(ProtocolVersion::from_tag)
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ConnectionProperties
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        props.extend(iter);
        props
    }
}

impl<K, V> Extend<(K, V)> for ConnectionProperties
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl IntoIterator for ConnectionProperties {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
