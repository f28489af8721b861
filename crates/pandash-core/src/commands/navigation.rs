//! Filesystem commands: `ls`, `cd`, `pwd`, `cat`, `tree`.

use crate::config::{SCROLL_ANCHORS, listing};
use crate::filesystem::VirtualFs;
use crate::format::{listing_timestamp, strip_tags};
use crate::models::OutputLine;

use super::{CommandResult, Effect, ExecContext};

/// Execute `ls` command.
pub(super) fn ls(args: &[String], ctx: &ExecContext<'_>) -> CommandResult {
    let long = args.iter().any(|a| a == "-l" || a == "-la");
    let target = args.iter().find(|a| !a.starts_with('-')).map(String::as_str);
    let current = ctx.session.current_path();

    let cannot_access = |shown: &str| {
        CommandResult::line(OutputLine::error(format!(
            "ls: cannot access '{}': No such file or directory",
            shown
        )))
    };

    let path = match target {
        None => current.to_string(),
        Some(t) => match ctx.resolver().resolve(current, Some(t)) {
            Ok(path) => path,
            Err(_) => return cannot_access(t),
        },
    };

    let Some(children) = ctx.fs.list_children(&path) else {
        return cannot_access(target.unwrap_or(&path));
    };

    if !long {
        return CommandResult::line(OutputLine::success(children.join("  ")));
    }

    let stamp = listing_timestamp(ctx.host.now());
    let lines = children
        .iter()
        .map(|name| {
            let (kind, size) = if VirtualFs::is_file_name(name) {
                ('-', listing::FILE_SIZE)
            } else {
                ('d', listing::DIR_SIZE)
            };
            OutputLine::neutral(format!(
                "{}{}  {}  {}  {}  {}  {}",
                kind,
                listing::PERMISSIONS,
                listing::OWNER,
                listing::GROUP,
                size,
                stamp,
                name
            ))
        })
        .collect();
    CommandResult::output(lines)
}

/// Execute `cd` command.
///
/// The target is lowercased before resolution. When no directory matches,
/// a known page section is scrolled to instead.
pub(super) fn cd(args: &[String], ctx: &mut ExecContext<'_>) -> CommandResult {
    let Some(raw) = args.first().filter(|a| a.as_str() != "~") else {
        let home = ctx.home().to_string();
        ctx.session.set_current_path(home.clone());
        return CommandResult::line(OutputLine::success(format!("Changed to {}", home)));
    };
    let target = raw.to_lowercase();

    if target == ".." {
        let parent = VirtualFs::parent(ctx.session.current_path());
        ctx.session.set_current_path(parent.clone());
        return CommandResult::line(OutputLine::neutral(format!("Changed to {}", parent)));
    }

    let resolved = ctx
        .resolver()
        .resolve(ctx.session.current_path(), Some(&target));

    match resolved {
        Ok(path) => {
            let line = OutputLine::success(format!("Changed to {}", path));
            ctx.session.set_current_path(path);
            CommandResult::line(line)
        }
        Err(_) if SCROLL_ANCHORS.contains(&target.as_str()) && ctx.host.has_anchor(&target) => {
            CommandResult::line(OutputLine::success(format!("Navigating to /{}...", target)))
                .with_effect(Effect::ScrollTo(target))
        }
        Err(_) => CommandResult::line(OutputLine::error(format!(
            "bash: cd: {}: No such file or directory",
            target
        ))),
    }
}

/// Execute `pwd` command.
pub(super) fn pwd(ctx: &ExecContext<'_>) -> CommandResult {
    CommandResult::line(OutputLine::neutral(ctx.session.current_path()))
}

/// Execute `cat` command.
///
/// Only a few well-known files have content; they are readable from any
/// directory.
pub(super) fn cat(args: &[String], ctx: &ExecContext<'_>) -> CommandResult {
    let Some(file) = args.first() else {
        return CommandResult::line(OutputLine::error("Usage: cat [filename]"));
    };

    match file.as_str() {
        "about.txt" => CommandResult::output(
            ctx.content
                .about
                .iter()
                .map(|para| OutputLine::neutral(strip_tags(para)))
                .collect(),
        ),
        "contact.md" => {
            let email = ctx
                .content
                .social("Email")
                .map(|s| s.url.trim_start_matches("mailto:"))
                .unwrap_or("N/A");
            let github = ctx
                .content
                .social("GitHub")
                .map(|s| s.url.as_str())
                .unwrap_or("N/A");
            CommandResult::output(vec![
                OutputLine::neutral(format!("Email: {}", email)),
                OutputLine::neutral(format!("GitHub: {}", github)),
            ])
        }
        ".bashrc" => CommandResult::output(vec![
            OutputLine::neutral(format!("# .bashrc - {} configuration", ctx.hostname())),
            OutputLine::neutral(r#"export PS1="\u@\h:\w\$ ""#),
            OutputLine::neutral(r#"alias ll="ls -la""#),
            OutputLine::neutral(r#"alias projects="cd /var/www/projects""#),
        ]),
        name if !VirtualFs::is_file_name(name)
            && ctx.fs.contains_entry(ctx.session.current_path(), name) =>
        {
            CommandResult::line(OutputLine::error(format!("cat: {}: Is a directory", name)))
        }
        name => CommandResult::line(OutputLine::error(format!(
            "cat: {}: No such file or directory",
            name
        ))),
    }
}

/// Execute `tree` command.
pub(super) fn tree(args: &[String], ctx: &ExecContext<'_>) -> CommandResult {
    let current = ctx.session.current_path();
    let (shown, path) = match args.first() {
        None => (current.to_string(), current.to_string()),
        Some(t) => match ctx.resolver().resolve(current, Some(t)) {
            Ok(path) => (t.clone(), path),
            // Unknown paths print the header alone
            Err(_) => return CommandResult::line(OutputLine::info(t.clone())),
        },
    };

    let mut lines = vec![OutputLine::info(shown)];
    lines.extend(ctx.fs.tree_lines(&path).into_iter().map(OutputLine::neutral));
    CommandResult::output(lines)
}
