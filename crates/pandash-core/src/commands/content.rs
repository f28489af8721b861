//! Commands that render the site content: `projects`, `research`,
//! `skills`, `contact`, plus the ascii-art `neofetch`, `cowsay` and `matrix`.

use sha2::{Digest, Sha256};

use crate::config::{NAME_COLUMN_WIDTH, NEOFETCH_LOGO, NEOFETCH_OS, matrix as matrix_config};
use crate::format::format_date;
use crate::models::OutputLine;

use super::{CommandResult, ExecContext};

/// Execute `projects` command.
///
/// Each date is formatted on its own; one that does not parse shows as
/// `Invalid Date` without hiding the rest of the listing.
pub(super) fn projects(ctx: &ExecContext<'_>) -> CommandResult {
    let mut lines = vec![OutputLine::info("=== Projects ===")];
    for project in &ctx.content.projects {
        let start = format_date(project.start_date.as_deref());
        let end = format_date(project.end_date.as_deref());
        lines.push(OutputLine::neutral(format!(
            "{} | {} - {}",
            project.title, start, end
        )));
        lines.push(OutputLine::neutral(format!("  {}", project.description)));
        lines.push(OutputLine::empty());
    }
    CommandResult::output(lines)
}

/// Execute `research` command.
pub(super) fn research(ctx: &ExecContext<'_>) -> CommandResult {
    let mut lines = vec![OutputLine::info("=== Research ===")];
    for paper in &ctx.content.research {
        lines.push(OutputLine::neutral(format!("  {}", paper.title)));
        lines.push(OutputLine::neutral(format!("    {}", paper.venue)));
    }
    CommandResult::output(lines)
}

/// Execute `skills` command.
pub(super) fn skills(ctx: &ExecContext<'_>) -> CommandResult {
    let lines = ctx
        .content
        .skills
        .groups()
        .into_iter()
        .flat_map(|(label, items)| {
            [
                OutputLine::neutral(format!("{}:", label)),
                OutputLine::success(format!("  {}", items.join(", "))),
            ]
        })
        .collect();
    CommandResult::output(lines)
}

/// Execute `contact` command.
pub(super) fn contact(ctx: &ExecContext<'_>) -> CommandResult {
    let mut lines = vec![OutputLine::info("=== Contact Information ===")];
    lines.extend(ctx.content.social.iter().map(|s| {
        OutputLine::neutral(format!(
            "  {:<width$}: {}",
            s.platform,
            s.url,
            width = NAME_COLUMN_WIDTH
        ))
    }));
    CommandResult::output(lines)
}

/// Execute `neofetch` command.
pub(super) fn neofetch(ctx: &ExecContext<'_>) -> CommandResult {
    let viewport = ctx.host.viewport();
    let facts = [
        ("OS", NEOFETCH_OS.to_string()),
        ("Host", ctx.hostname().to_string()),
        ("Kernel", "PandaHttpd 1.0.0".to_string()),
        ("Shell", "bash 2.0.0 (simulated)".to_string()),
        (
            "Resolution",
            format!("{}x{}", viewport.width, viewport.height),
        ),
        ("Theme", "Cyberpunk Terminal".to_string()),
        ("CPU", format!("Web Worker @ {} cores", viewport.cores)),
        ("Memory", "Unlimited (Browser)".to_string()),
    ];

    let mut lines: Vec<OutputLine> = NEOFETCH_LOGO.lines().map(OutputLine::ascii).collect();
    lines.push(OutputLine::empty());
    lines.extend(
        facts
            .into_iter()
            .map(|(key, value)| OutputLine::ascii(format!("    {}: {}", key, value))),
    );
    CommandResult::output(lines)
}

/// Execute `cowsay` command.
pub(super) fn cowsay(args: &[String]) -> CommandResult {
    let message = if args.is_empty() {
        "Moo!".to_string()
    } else {
        args.join(" ")
    };
    let width = message.chars().count() + 2;

    let lines = [
        format!(" {}", "_".repeat(width)),
        format!("< {} >", message),
        format!(" {}", "-".repeat(width)),
        r"        \   ^__^".to_string(),
        r"         \  (oo)\_______".to_string(),
        r"            (__)\       )\/\".to_string(),
        "                ||----w |".to_string(),
        "                ||     ||".to_string(),
    ];
    CommandResult::output(lines.into_iter().map(OutputLine::ascii).collect())
}

/// Execute `matrix` command.
///
/// The first row prints at once and each further row one tick later. Glyphs
/// are drawn from a hash of the clock.
pub(super) fn matrix(ctx: &ExecContext<'_>) -> CommandResult {
    let glyphs: Vec<char> = matrix_config::GLYPHS.chars().collect();
    let seed = ctx.host.now().to_string();
    let mut rows = (0..matrix_config::ROWS).map(|row| {
        let rain: String = glyph_bytes(&seed, row)
            .take(matrix_config::COLUMNS)
            .map(|b| glyphs[usize::from(b) % glyphs.len()])
            .collect();
        OutputLine::ascii(format!("<span style=\"color: #00ff00\">{}</span>", rain))
    });

    let mut result = CommandResult::output(rows.next().into_iter().collect());
    for line in rows {
        result = result.then_after(matrix_config::INTERVAL_MS, vec![line]);
    }
    result.then_after(
        matrix_config::INTERVAL_MS,
        vec![OutputLine::empty(), OutputLine::success("Wake up, Neo...")],
    )
}

fn glyph_bytes(seed: &str, row: usize) -> impl Iterator<Item = u8> {
    (0u32..).flat_map(move |block| Sha256::digest(format!("{seed}:{row}:{block}")).to_vec())
}
