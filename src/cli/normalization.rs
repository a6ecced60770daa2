//! Argument rewriting that has to happen before clap sees the command line

use std::ffi::OsString;

const LEGACY_SOURCE: &str = "-so";

/// Rewrite the legacy `-so VALUE` / `-so=VALUE` spelling to `--source`.
///
/// Everything after `--` is left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    let mut out = Vec::new();

    for (i, arg) in args.into_iter().enumerate() {
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(LEGACY_SOURCE) => Some(OsString::from("--source")),
            Some(s) => s
                .strip_prefix(LEGACY_SOURCE)
                .and_then(|rest| rest.strip_prefix('='))
                .map(|value| OsString::from(format!("--source={}", value))),
            None => None,
        };

        out.push(rewritten.unwrap_or(arg));
    }

    out
}
