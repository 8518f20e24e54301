use core::fmt;

use crate::config::{set_or_unset, Config};
use crate::constants::{WIFI_PASSWORD_MAX_LEN, WIFI_PASSWORD_MIN_LEN, WIFI_SSID_MAX_LEN};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    SsidMissing,
    SsidTooLong,
    PasswordTooShort,
    PasswordTooLong,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct WifiCredentials<'a> {
    pub ssid: &'a str,
    pub password: &'a str,
}

impl<'a> WifiCredentials<'a> {
    pub fn from_config(config: &'a Config) -> Self {
        Self {
            ssid: config.wifi_ssid,
            password: config.wifi_password,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.ssid.is_empty()
    }

    // An empty password is fine, it means an open network.
    pub fn check(&self) -> Result<(), Error> {
        if self.ssid.is_empty() {
            return Err(Error::SsidMissing);
        }
        if self.ssid.len() > WIFI_SSID_MAX_LEN {
            return Err(Error::SsidTooLong);
        }
        if !self.password.is_empty() && self.password.len() < WIFI_PASSWORD_MIN_LEN {
            return Err(Error::PasswordTooShort);
        }
        if self.password.len() > WIFI_PASSWORD_MAX_LEN {
            return Err(Error::PasswordTooLong);
        }
        Ok(())
    }
}

impl fmt::Debug for WifiCredentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiCredentials")
            .field("ssid", &self.ssid)
            .field("password", &set_or_unset(self.password))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_credentials_are_missing() {
        let config = Config::DEFAULT;
        let wifi = config.wifi();
        assert!(!wifi.is_configured());
        assert_eq!(wifi.check(), Err(Error::SsidMissing));
    }

    #[test]
    fn open_network_is_accepted() {
        let wifi = WifiCredentials {
            ssid: "garden",
            password: "",
        };
        assert!(wifi.is_configured());
        assert_eq!(wifi.check(), Ok(()));
    }

    #[test]
    fn short_password_is_rejected() {
        let wifi = WifiCredentials {
            ssid: "garden",
            password: "1234567",
        };
        assert_eq!(wifi.check(), Err(Error::PasswordTooShort));

        let wifi = WifiCredentials {
            ssid: "garden",
            password: "12345678",
        };
        assert_eq!(wifi.check(), Ok(()));
    }

    #[test]
    fn debug_hides_password() {
        let wifi = WifiCredentials {
            ssid: "garden",
            password: "wpa_passphrase",
        };
        let shown = format!("{:?}", wifi);
        assert!(!shown.contains("wpa_passphrase"));
        assert!(shown.contains("garden"));
        assert!(shown.contains("<set>"));
    }

    #[test]
    fn length_limits() {
        let long_ssid = "s".repeat(WIFI_SSID_MAX_LEN + 1);
        let wifi = WifiCredentials {
            ssid: &long_ssid,
            password: "secret",
        };
        assert_eq!(wifi.check(), Err(Error::SsidTooLong));

        let max_ssid = "s".repeat(WIFI_SSID_MAX_LEN);
        let long_password = "p".repeat(WIFI_PASSWORD_MAX_LEN + 1);
        let wifi = WifiCredentials {
            ssid: &max_ssid,
            password: &long_password,
        };
        assert_eq!(wifi.check(), Err(Error::PasswordTooLong));
    }
}
