use std::env;
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;
use tracing::debug;

const CONNECTIVITY_ADDR: ([u8; 4], u16) = ([8, 8, 8, 8], 53);
const CONNECTIVITY_TIMEOUT: Duration = Duration::from_millis(800);
const PROXY_VARS: [&str; 4] = ["http_proxy", "HTTP_PROXY", "https_proxy", "HTTPS_PROXY"];

/// Live system state the menu summaries depend on.
pub trait SystemProbe {
    fn has_internet(&self) -> bool;
    fn proxy_enabled(&self) -> bool;
    fn current_user(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LiveProbe;

impl SystemProbe for LiveProbe {
    fn has_internet(&self) -> bool {
        let (ip, port) = CONNECTIVITY_ADDR;
        let addr = SocketAddr::from((ip, port));
        let connected = TcpStream::connect_timeout(&addr, CONNECTIVITY_TIMEOUT).is_ok();
        debug!(connected, "connectivity probe");
        connected
    }

    fn proxy_enabled(&self) -> bool {
        proxy_from_env(|key| env::var(key).ok())
    }

    fn current_user(&self) -> String {
        user_from_env(|key| env::var(key).ok())
    }
}

pub(crate) fn proxy_from_env(lookup: impl Fn(&str) -> Option<String>) -> bool {
    PROXY_VARS
        .iter()
        .any(|key| lookup(*key).is_some_and(|value| !value.trim().is_empty()))
}

/// The invoking user, looking through `sudo`.
pub(crate) fn user_from_env(lookup: impl Fn(&str) -> Option<String>) -> String {
    ["SUDO_USER", "USER", "LOGNAME"]
        .iter()
        .filter_map(|key| lookup(*key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
