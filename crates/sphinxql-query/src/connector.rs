//! Driver profiles for the MySQL wire transports.
//!
//! Sphinx and Manticore speak the MySQL protocol, so connections ride on
//! ordinary MySQL client drivers. The drivers agree on reserved-character
//! escaping (a doubled backslash, see [`crate::escape`]) but disagree on one
//! surface detail: whether an escaped string literal comes back already
//! wrapped in single quotes. The profile records that convention explicitly
//! so the clause renderer never has to guess.

/// Escaping/quoting convention in effect for the active connection.
///
/// Read-only; configured once per connection and shared freely across
/// renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorProfile {
    name: &'static str,
    quotes_literal: bool,
}

impl ConnectorProfile {
    /// The `mysql` crate's synchronous driver. Default profile.
    pub const MYSQL: Self = Self {
        name: "mysql",
        quotes_literal: false,
    };

    /// The `mysql_async` driver; same literal convention as `mysql`.
    pub const MYSQL_ASYNC: Self = Self {
        name: "mysql-async",
        quotes_literal: false,
    };

    /// Bindings over the C client library, which hand literals back
    /// pre-wrapped in single quotes.
    pub const LIBMYSQLCLIENT: Self = Self {
        name: "libmysqlclient",
        quotes_literal: true,
    };

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether [`Self::quote_literal`] output includes the surrounding quotes.
    pub fn quotes_literal(&self) -> bool {
        self.quotes_literal
    }

    /// Finish an escaped phrase as a string literal for this driver.
    ///
    /// Backslash-escapes single quotes; adds the surrounding quotes only when
    /// this profile declares that behavior.
    pub fn quote_literal(&self, body: &str) -> String {
        let escaped = body.replace('\'', "\\'");
        if self.quotes_literal {
            format!("'{}'", escaped)
        } else {
            escaped
        }
    }
}

impl Default for ConnectorProfile {
    fn default() -> Self {
        Self::MYSQL
    }
}
