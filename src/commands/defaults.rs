//! Predefined flags shared by many commands.

use std::sync::LazyLock;

use regex::Regex;

use super::flag::{Flag, Prefix};

const IPV4_PATTERN: &str =
    r"^(25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(\.(25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)){3}$";
const PORT_PATTERN: &str = r"^\d{1,5}$";

static IPV4_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IPV4_PATTERN).expect("IPv4 pattern is valid"));
static PORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PORT_PATTERN).expect("port pattern is valid"));

/// `--help`
pub fn help() -> Flag {
    Flag::new("help").toggle()
}

/// `-h`
pub fn short_help() -> Flag {
    Flag::new("h").with_prefix(Prefix::Single).toggle()
}

/// `--info`
pub fn info() -> Flag {
    Flag::new("info").toggle()
}

/// `-i`
pub fn short_info() -> Flag {
    Flag::new("i").with_prefix(Prefix::Single).toggle()
}

/// `--all`
pub fn all() -> Flag {
    Flag::new("all").toggle()
}

/// `-a`
pub fn short_all() -> Flag {
    Flag::new("a").with_prefix(Prefix::Single).toggle()
}

/// `--host <ipv4>`
pub fn host() -> Flag {
    Flag::new("host").with_pattern(ipv4())
}

/// `-H <ipv4>`
pub fn short_host() -> Flag {
    Flag::new("H").with_prefix(Prefix::Single).with_pattern(ipv4())
}

/// `--port <digits>`
pub fn port() -> Flag {
    Flag::new("port").with_pattern(port_number())
}

/// `-P <digits>`
pub fn short_port() -> Flag {
    Flag::new("P").with_prefix(Prefix::Single).with_pattern(port_number())
}

fn ipv4() -> Regex {
    IPV4_REGEX.clone()
}

fn port_number() -> Regex {
    PORT_REGEX.clone()
}
