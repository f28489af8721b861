//! Shell and system commands.
//!
//! - `help`, `man`: registry introspection
//! - `echo`, `whoami`, `hostname`, `date`, `uptime`, `uname`, `history`, `sudo`
//! - `ping`: simulated, output spread over deferred batches
//! - `curl`: simulated transfer
//! - `open`, `exit`: page navigation effects

use chrono::Timelike;
use sha2::{Digest, Sha256};

use crate::config::{
    EXIT_URL, NAME_COLUMN_WIDTH, OS_NAME, PAGES, curl as curl_config, ping as ping_config,
    uptime as uptime_config,
};
use crate::error::CommandError;
use crate::format::long_date;
use crate::models::OutputLine;

use super::{CommandResult, Effect, ExecContext};

// =============================================================================
// Introspection
// =============================================================================

/// Execute `help` command.
///
/// The optional argument must name a command exactly, case included.
pub(super) fn help(args: &[String], ctx: &ExecContext<'_>) -> CommandResult {
    if let Some(name) = args.first() {
        return match ctx.registry.lookup_exact(name) {
            Some(cmd) => CommandResult::output(vec![
                OutputLine::info(format!("{} - {}", name, cmd.description())),
                OutputLine::neutral(format!("Usage: {}", cmd.usage())),
            ]),
            None => no_manual_entry(name),
        };
    }

    let mut lines = vec![OutputLine::info("Available commands:")];
    lines.extend(ctx.registry.iter().map(|cmd| {
        OutputLine::neutral(format!(
            "  <span class=\"highlight\">{:<width$}</span> {}",
            cmd.name(),
            cmd.description(),
            width = NAME_COLUMN_WIDTH
        ))
    }));
    CommandResult::output(lines)
}

/// Execute `man` command.
pub(super) fn man(args: &[String], ctx: &ExecContext<'_>) -> CommandResult {
    let Some(name) = args.first() else {
        return CommandResult::line(OutputLine::error("What manual page do you want?"));
    };
    let Some(cmd) = ctx.registry.lookup_exact(name) else {
        return no_manual_entry(name);
    };

    CommandResult::output(vec![
        OutputLine::info("NAME"),
        OutputLine::neutral(format!("  {} - {}", name, cmd.description())),
        OutputLine::empty(),
        OutputLine::info("SYNOPSIS"),
        OutputLine::neutral(format!("  {}", cmd.usage())),
    ])
}

fn no_manual_entry(name: &str) -> CommandResult {
    CommandResult::line(OutputLine::error(format!("No manual entry for {}", name)))
}

// =============================================================================
// Shell
// =============================================================================

pub(super) fn echo(args: &[String]) -> CommandResult {
    CommandResult::line(OutputLine::neutral(args.join(" ")))
}

pub(super) fn whoami(ctx: &ExecContext<'_>) -> CommandResult {
    CommandResult::line(OutputLine::neutral(format!(
        "{}@{}_web_client",
        ctx.user(),
        ctx.hostname()
    )))
}

pub(super) fn hostname(ctx: &ExecContext<'_>) -> CommandResult {
    CommandResult::line(OutputLine::neutral(ctx.hostname()))
}

pub(super) fn date(ctx: &ExecContext<'_>) -> CommandResult {
    CommandResult::line(OutputLine::neutral(long_date(ctx.host.now())))
}

/// Execute `uptime` command.
///
/// The boot time is derived from the current date, so within a day the
/// uptime advances with the clock and the load figures stay fixed.
pub(super) fn uptime(ctx: &ExecContext<'_>) -> CommandResult {
    use crate::config::uptime::SECS_PER_DAY;

    let now = ctx.host.now();
    let digest = Sha256::digest(now.date().to_string().as_bytes());
    let boot_offset = u64::from(u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]))
        % (uptime_config::MAX_DAYS * SECS_PER_DAY);
    let up = boot_offset + u64::from(now.num_seconds_from_midnight());
    let load = |i: usize| digest[4 + i] % 100;

    CommandResult::line(OutputLine::neutral(format!(
        " {} up {} days, {}:{:02},  1 user,  load average: 0.{:02}, 0.{:02}, 0.{:02}",
        now.format("%H:%M:%S"),
        up / SECS_PER_DAY,
        up % SECS_PER_DAY / 3600,
        up % 3600 / 60,
        load(0),
        load(1),
        load(2)
    )))
}

/// Execute `uname` command.
pub(super) fn uname(args: &[String], ctx: &ExecContext<'_>) -> CommandResult {
    let text = if args.iter().any(|a| a == "-a") {
        format!(
            "{} 2.0.0 {} 5.4.0-generic #1 SMP Web x86_64 GNU/Linux",
            OS_NAME,
            ctx.hostname()
        )
    } else {
        OS_NAME.to_string()
    };
    CommandResult::line(OutputLine::neutral(text))
}

/// Execute `history` command.
///
/// The running `history` invocation is already recorded, so it lists itself.
pub(super) fn history(ctx: &ExecContext<'_>) -> CommandResult {
    let entries = ctx.session.history();
    if entries.is_empty() {
        return CommandResult::line(OutputLine::neutral("No commands in history"));
    }
    CommandResult::output(
        entries
            .iter()
            .enumerate()
            .map(|(i, cmd)| OutputLine::neutral(format!("  {:>4}  {}", i + 1, cmd)))
            .collect(),
    )
}

pub(super) fn sudo() -> CommandResult {
    CommandResult::output(vec![
        OutputLine::error("guest is not in the sudoers file."),
        OutputLine::error("This incident will be reported."),
    ])
}

// =============================================================================
// Network
// =============================================================================

/// Execute `ping` command.
///
/// The address and reply times are derived from a digest of the host name,
/// so the same host always answers the same way.
pub(super) fn ping(args: &[String]) -> CommandResult {
    let host = args
        .first()
        .map(String::as_str)
        .unwrap_or(ping_config::DEFAULT_HOST);
    let digest = Sha256::digest(host.as_bytes());

    let address = digest[..4]
        .iter()
        .map(|b| (b % 255).to_string())
        .collect::<Vec<_>>()
        .join(".");

    let mut result = CommandResult::line(OutputLine::neutral(format!(
        "PING {} ({}): 56 data bytes",
        host, address
    )));

    for seq in 0..ping_config::COUNT {
        let offset = 4 + seq * 2;
        let sample = u16::from_be_bytes([digest[offset], digest[offset + 1]]);
        let time = ping_config::MIN_TIME_MS
            + f64::from(sample) / f64::from(u16::MAX) * ping_config::TIME_SPREAD_MS;

        let mut lines = vec![OutputLine::success(format!(
            "64 bytes from {}: icmp_seq={} ttl=64 time={:.3} ms",
            host, seq, time
        ))];
        if seq + 1 == ping_config::COUNT {
            lines.push(OutputLine::info(format!("--- {} ping statistics ---", host)));
            lines.push(OutputLine::info(format!(
                "{0} packets transmitted, {0} received, 0% packet loss",
                ping_config::COUNT
            )));
        }
        result = result.then_after(ping_config::INTERVAL_MS, lines);
    }
    result
}

/// Execute `curl` command.
///
/// A missing URL is an error line. A URL with an unknown scheme or no host
/// fails the handler, as curl itself exits non-zero.
pub(super) fn curl(args: &[String]) -> Result<CommandResult, CommandError> {
    let Some(url) = args.first() else {
        return Ok(CommandResult::line(OutputLine::error("curl: no URL specified")));
    };
    let rest = match url.split_once("://") {
        Some((scheme, rest)) => {
            if !curl_config::SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme)) {
                return Err(CommandError::UnsupportedProtocol {
                    scheme: scheme.to_string(),
                });
            }
            rest
        }
        None => url.as_str(),
    };
    if rest.split(['/', '?', '#']).next().unwrap_or_default().is_empty() {
        return Err(CommandError::MalformedUrl { url: url.clone() });
    }

    Ok(CommandResult::output(vec![
        OutputLine::neutral("  % Total    % Received % Xferd  Speed   Time"),
        OutputLine::neutral(
            "100  1024  100  1024    0     0   512k      0 --:--:-- --:--:-- --:--:-- 512k",
        ),
        OutputLine::success(format!(
            "<html><body>Simulated response from {}</body></html>",
            url
        )),
    ]))
}

// =============================================================================
// Navigation
// =============================================================================

/// Execute `open` command.
///
/// Page keys match case-insensitively; anything starting with `http` opens
/// in a new tab as typed.
pub(super) fn open(args: &[String]) -> CommandResult {
    let Some(target) = args.first() else {
        return CommandResult::line(OutputLine::error(format!(
            "Usage: open [target]. Try: {}",
            page_keys()
        )));
    };
    let key = target.to_lowercase();

    if let Some((name, url)) = PAGES.iter().find(|(name, _)| *name == key) {
        return CommandResult::line(OutputLine::success(format!("Opening {}...", name)))
            .with_effect(Effect::Navigate((*url).to_string()));
    }

    if key.starts_with("http") {
        return CommandResult::line(OutputLine::success(format!(
            "Opening {} in new tab...",
            target
        )))
        .with_effect(Effect::OpenTab(target.clone()));
    }

    CommandResult::line(OutputLine::error(format!(
        "Unknown target: {}. Try: {}",
        target,
        page_keys()
    )))
}

fn page_keys() -> String {
    PAGES
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

pub(super) fn exit() -> CommandResult {
    CommandResult::line(OutputLine::success("Goodbye!"))
        .with_effect(Effect::Navigate(EXIT_URL.to_string()))
}

#[cfg(test)]
mod tests {
    use super::super::testing::{Fixture, texts};
    use super::super::{Builtin, CommandRegistry};
    use super::*;
    use crate::models::LineKind;

    #[test]
    fn test_help_lists_registry_in_order() {
        let mut fx = Fixture::new();
        let result = fx.run(Builtin::Help, &[]);
        assert_eq!(result.output.len(), Builtin::ALL.len() + 1);
        assert_eq!(result.output[0].text, "Available commands:");
        assert_eq!(result.output[0].kind, LineKind::Info);
        assert_eq!(
            result.output[2].text,
            "  <span class=\"highlight\">ls          </span> List directory contents"
        );
    }

    #[test]
    fn test_help_follows_subset_registry() {
        let mut fx = Fixture::new();
        fx.registry = CommandRegistry::with_commands(vec![Builtin::Pwd, Builtin::Help]);
        let result = fx.run(Builtin::Help, &[]);
        assert_eq!(result.output.len(), 3);
        assert!(result.output[1].text.contains("pwd"));
    }

    #[test]
    fn test_help_single_command() {
        let mut fx = Fixture::new();
        assert_eq!(
            texts(&fx.run(Builtin::Help, &["ls"])),
            ["ls - List directory contents", "Usage: ls [-la] [path]"]
        );
        let result = fx.run(Builtin::Help, &["frobnicate"]);
        assert_eq!(texts(&result), ["No manual entry for frobnicate"]);
        assert_eq!(result.output[0].kind, LineKind::Error);
    }

    #[test]
    fn test_help_argument_is_case_sensitive() {
        let mut fx = Fixture::new();
        assert_eq!(
            texts(&fx.run(Builtin::Help, &["LS"])),
            ["No manual entry for LS"]
        );
        assert_eq!(
            texts(&fx.run(Builtin::Man, &["Cat"])),
            ["No manual entry for Cat"]
        );
    }

    #[test]
    fn test_man() {
        let mut fx = Fixture::new();
        assert_eq!(
            texts(&fx.run(Builtin::Man, &["cat"])),
            ["NAME", "  cat - Display file contents", "", "SYNOPSIS", "  cat [file]"]
        );
        assert_eq!(
            texts(&fx.run(Builtin::Man, &[])),
            ["What manual page do you want?"]
        );
        assert_eq!(
            texts(&fx.run(Builtin::Man, &["nope"])),
            ["No manual entry for nope"]
        );
    }

    #[test]
    fn test_echo() {
        let mut fx = Fixture::new();
        assert_eq!(texts(&fx.run(Builtin::Echo, &["hello", "world"])), ["hello world"]);
        assert_eq!(texts(&fx.run(Builtin::Echo, &[])), [""]);
    }

    #[test]
    fn test_identity() {
        let mut fx = Fixture::new();
        assert_eq!(
            texts(&fx.run(Builtin::Whoami, &[])),
            ["guest@nguyenpanda_web_client"]
        );
        assert_eq!(texts(&fx.run(Builtin::Hostname, &[])), ["nguyenpanda"]);
    }

    #[test]
    fn test_date() {
        let mut fx = Fixture::new();
        assert_eq!(
            texts(&fx.run(Builtin::Date, &[])),
            ["Sun Oct 18 2026 15:04:05"]
        );
    }

    #[test]
    fn test_uname() {
        let mut fx = Fixture::new();
        assert_eq!(texts(&fx.run(Builtin::Uname, &[])), ["NguyenPandaOS"]);
        assert_eq!(
            texts(&fx.run(Builtin::Uname, &["-a"])),
            ["NguyenPandaOS 2.0.0 nguyenpanda 5.4.0-generic #1 SMP Web x86_64 GNU/Linux"]
        );
    }

    #[test]
    fn test_history() {
        let mut fx = Fixture::new();
        assert_eq!(
            texts(&fx.run(Builtin::History, &[])),
            ["No commands in history"]
        );
        fx.session.record("ls");
        fx.session.record("history");
        assert_eq!(
            texts(&fx.run(Builtin::History, &[])),
            ["     1  ls", "     2  history"]
        );
    }

    #[test]
    fn test_sudo() {
        let mut fx = Fixture::new();
        let result = fx.run(Builtin::Sudo, &["rm", "-rf", "/"]);
        assert_eq!(result.output.len(), 2);
        assert!(result.output.iter().all(|l| l.kind == LineKind::Error));
    }

    #[test]
    fn test_ping_defers_replies() {
        let mut fx = Fixture::new();
        let result = fx.run(Builtin::Ping, &["example.org"]);

        assert_eq!(result.output.len(), 1);
        assert!(result.output[0].text.starts_with("PING example.org ("));
        assert!(result.output[0].text.ends_with("): 56 data bytes"));

        assert_eq!(result.deferred.len(), 3);
        assert!(result.deferred.iter().all(|d| d.delay_ms == 500));
        assert_eq!(result.total_delay_ms(), 1500);

        let first = &result.deferred[0].lines[0];
        assert_eq!(first.kind, LineKind::Success);
        assert!(first.text.starts_with("64 bytes from example.org: icmp_seq=0 ttl=64 time="));

        let last = &result.deferred[2].lines;
        assert_eq!(last.len(), 3);
        assert_eq!(last[1].text, "--- example.org ping statistics ---");
        assert_eq!(
            last[2].text,
            "3 packets transmitted, 3 received, 0% packet loss"
        );
    }

    fn uptime_minutes(line: &str) -> u64 {
        let (_, rest) = line.split_once(" up ").unwrap();
        let (days, rest) = rest.split_once(" days, ").unwrap();
        let (clock, _) = rest.split_once(',').unwrap();
        let (hours, minutes) = clock.split_once(':').unwrap();
        days.parse::<u64>().unwrap() * 1440
            + hours.parse::<u64>().unwrap() * 60
            + minutes.parse::<u64>().unwrap()
    }

    #[test]
    fn test_uptime_line() {
        let mut fx = Fixture::new();
        let result = fx.run(Builtin::Uptime, &[]);
        assert_eq!(result.output.len(), 1);
        let line = &result.output[0];
        assert_eq!(line.kind, LineKind::Neutral);
        assert!(line.text.starts_with(" 15:04:05 up "));
        assert!(line.text.contains(",  1 user,  load average: 0."));
        assert!(uptime_minutes(&line.text) < 31 * 1440);
    }

    #[test]
    fn test_uptime_advances_with_clock() {
        let mut fx = Fixture::new();
        let before = fx.run(Builtin::Uptime, &[]).output[0].text.clone();
        assert_eq!(fx.run(Builtin::Uptime, &[]).output[0].text, before);

        fx.host.now += chrono::TimeDelta::minutes(90);
        let after = fx.run(Builtin::Uptime, &[]).output[0].text.clone();
        assert!(after.starts_with(" 16:34:05 up "));
        assert_eq!(uptime_minutes(&after) - uptime_minutes(&before), 90);

        let load = |s: &str| s.rsplit_once("load average: ").unwrap().1.to_string();
        assert_eq!(load(&after), load(&before));
    }

    #[test]
    fn test_curl() {
        let mut fx = Fixture::new();
        let result = fx.run(Builtin::Curl, &["https://example.com/index.html"]);
        assert_eq!(result.output.len(), 3);
        assert_eq!(
            result.output[2].text,
            "<html><body>Simulated response from https://example.com/index.html</body></html>"
        );
        assert_eq!(result.output[2].kind, LineKind::Success);

        let bare = fx.run(Builtin::Curl, &["example.com"]);
        assert_eq!(bare.output.len(), 3);

        let missing = fx.run(Builtin::Curl, &[]);
        assert_eq!(texts(&missing), ["curl: no URL specified"]);
        assert_eq!(missing.output[0].kind, LineKind::Error);
    }

    #[test]
    fn test_curl_rejects_bad_urls() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.try_run(Builtin::Curl, &["gopher://example.com"]),
            Err(CommandError::UnsupportedProtocol {
                scheme: "gopher".into()
            })
        );
        assert_eq!(
            fx.try_run(Builtin::Curl, &["http:///path"]),
            Err(CommandError::MalformedUrl {
                url: "http:///path".into()
            })
        );
        assert!(fx.try_run(Builtin::Curl, &["HTTPS://example.com"]).is_ok());
    }

    #[test]
    fn test_ping_is_deterministic() {
        let a = ping(&[]);
        let b = ping(&["google.com".to_string()]);
        assert_eq!(a, b);
        assert!(a.output[0].text.starts_with("PING google.com ("));
    }

    #[test]
    fn test_ping_times_in_range() {
        let result = ping(&["localhost".to_string()]);
        for batch in &result.deferred {
            let text = &batch.lines[0].text;
            let time: f64 = text
                .rsplit("time=")
                .next()
                .and_then(|t| t.strip_suffix(" ms"))
                .and_then(|t| t.parse().ok())
                .unwrap();
            assert!((10.0..=60.0).contains(&time), "{}", time);
        }
    }

    #[test]
    fn test_open_page() {
        let mut fx = Fixture::new();
        let result = fx.run(Builtin::Open, &["Projects"]);
        assert_eq!(texts(&result), ["Opening projects..."]);
        assert_eq!(result.effect, Some(Effect::Navigate("/projects".into())));
    }

    #[test]
    fn test_open_url_verbatim() {
        let mut fx = Fixture::new();
        let result = fx.run(Builtin::Open, &["HTTPS://Example.com/Path"]);
        assert_eq!(
            texts(&result),
            ["Opening HTTPS://Example.com/Path in new tab..."]
        );
        assert_eq!(
            result.effect,
            Some(Effect::OpenTab("HTTPS://Example.com/Path".into()))
        );
    }

    #[test]
    fn test_open_unknown() {
        let mut fx = Fixture::new();
        let result = fx.run(Builtin::Open, &["mars"]);
        assert_eq!(
            texts(&result),
            ["Unknown target: mars. Try: home, projects, research, hpc, archive"]
        );
        assert!(result.effect.is_none());

        let result = fx.run(Builtin::Open, &[]);
        assert_eq!(result.output[0].kind, LineKind::Error);
        assert!(result.output[0].text.contains("home, projects"));
    }

    #[test]
    fn test_exit() {
        let mut fx = Fixture::new();
        let result = fx.run(Builtin::Exit, &[]);
        assert_eq!(texts(&result), ["Goodbye!"]);
        assert_eq!(result.effect, Some(Effect::Navigate("/".into())));
    }
}
