use core::fmt::{self, Write};

use heapless::String;

use crate::config::{set_or_unset, Config};
use crate::constants::{HTTPS_PORT, URL_MAX_LEN};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    HostMissing,
    UrlTooLong,
}

/// Metrics push destination and credentials, as configured.
///
/// Nothing here checks URL syntax or credential format; that is left to
/// the HTTP client that consumes it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PushEndpoint<'a> {
    pub host: &'a str,
    pub path: &'a str,
    pub port: u16,
    pub user: &'a str,
    pub pass: &'a str,
}

impl<'a> PushEndpoint<'a> {
    pub fn from_config(config: &'a Config) -> Self {
        Self {
            host: config.gc_url,
            path: config.gc_path,
            port: config.gc_port,
            user: config.gc_user,
            pass: config.gc_pass,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.host.is_empty()
    }

    pub fn has_credentials(&self) -> bool {
        !self.user.is_empty() && !self.pass.is_empty()
    }

    /// Renders `https://host[:port]/path`. The port is left out when it is 443.
    pub fn url(&self) -> Result<String<URL_MAX_LEN>, Error> {
        if !self.is_configured() {
            return Err(Error::HostMissing);
        }

        let mut url: String<URL_MAX_LEN> = String::new();
        write!(url, "https://{}", self.host).map_err(|_| Error::UrlTooLong)?;
        if self.port != HTTPS_PORT {
            write!(url, ":{}", self.port).map_err(|_| Error::UrlTooLong)?;
        }
        if !self.path.starts_with('/') {
            url.push('/').map_err(|_| Error::UrlTooLong)?;
        }
        url.push_str(self.path).map_err(|_| Error::UrlTooLong)?;

        Ok(url)
    }
}

impl fmt::Debug for PushEndpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushEndpoint")
            .field("host", &self.host)
            .field("path", &self.path)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("pass", &set_or_unset(self.pass))
            .finish()
    }
}
