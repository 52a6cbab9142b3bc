use anyhow::Context;
use dnsdump_domain::LookupReport;
use std::io::Write;

pub fn render_report(report: &LookupReport) -> anyhow::Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize lookup report")
}

pub fn render_hostnames(ip: &str, names: &[String]) -> String {
    let mut out = format!("\nhostnames for {}:\n", ip);
    for name in names {
        out.push_str("   ");
        out.push_str(name);
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Writes rendered output; a closed pipe is an error, not a panic.
pub fn write_to(out: &mut impl Write, text: &str) -> anyhow::Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .context("Failed to write output")
}
