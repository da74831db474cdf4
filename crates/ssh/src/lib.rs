//! Renders OpenSSH client configuration from host records.

use hosts::HostRecord;
use std::fmt::Write as _;

/// Directives of the `Host *` block written ahead of every host stanza.
pub const DEFAULT_DIRECTIVES: &[(&str, &str)] = &[
    ("ForwardAgent", "no"),
    ("ForwardX11", "no"),
    ("ForwardX11Trusted", "yes"),
    ("Protocol", "2"),
    ("ServerAliveInterval", "60"),
    ("ServerAliveCountMax", "30"),
    ("IdentitiesOnly", "yes"),
    (
        "Ciphers",
        "chacha20-poly1305@openssh.com,aes128-ctr,aes192-ctr,aes256-ctr",
    ),
    ("Compression", "no"),
];

/// Returns the fixed `Host *` preamble, headed by a `# defaults` comment.
pub fn render_defaults() -> String {
    let mut out = String::from("# defaults\nHost *\n");
    for (keyword, value) in DEFAULT_DIRECTIVES {
        directive(&mut out, keyword, value);
    }
    out
}

/// Returns the `Host` stanza for one record.
///
/// `HostName` and `Port` are always written, `HostName` even when empty.
/// `User` and `IdentityFile` are left out when their field is empty.
pub fn render_host(record: &HostRecord) -> String {
    let mut out = String::new();
    write_host(&mut out, record);
    out
}

/// Renders the defaults block followed by one stanza per record, in the
/// order given.
pub fn render_config(records: &[HostRecord]) -> String {
    let mut out = render_defaults();
    for record in records {
        write_host(&mut out, record);
    }
    out
}

fn write_host(out: &mut String, record: &HostRecord) {
    let _ = writeln!(out, "Host {}", record.host);
    directive(out, "HostName", &record.hostname);
    if !record.user.is_empty() {
        directive(out, "User", &record.user);
    }
    if !record.identity_file.is_empty() {
        directive(out, "IdentityFile", &record.identity_file);
    }
    directive(out, "Port", &record.port.to_string());
}

fn directive(out: &mut String, keyword: &str, value: &str) {
    let _ = writeln!(out, "\t{keyword} {value}");
}
