//! octoscope - GitHub activity profile CLI
//!
//! Fetch the public activity feed and repository list for one or more
//! accounts and print a derived behavioral profile.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use octoscope_core::analytics::ActivityProfile;
use octoscope_core::format::{format_relative_time, format_size};
use octoscope_core::{build_profile, ActivityEvent, Config, GithubClient, UtcOffset};

/// Bar width of the daily volume chart, in cells
const CHART_WIDTH: usize = 30;

#[derive(Parser, Debug)]
#[command(name = "octoscope")]
#[command(about = "GitHub activity profile analyzer")]
#[command(version)]
struct Args {
    /// Accounts to analyze (default: the configured watchlist)
    logins: Vec<String>,

    /// Timezone offset in whole hours, -12 to +14 (default: from config)
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<i8>,

    /// Export format (md = markdown, json = JSON)
    #[arg(long)]
    export: Option<String>,

    /// Number of recent events to list
    #[arg(long, default_value_t = 10)]
    events: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    let _log_guard = octoscope_core::logging::init(&config.logging).ok();

    let offset = match args.offset {
        Some(hours) => UtcOffset::new(hours).context("invalid --offset")?,
        None => config.profile.offset()?,
    };

    let logins = if args.logins.is_empty() {
        config.profile.watchlist.clone()
    } else {
        args.logins.clone()
    };
    if logins.is_empty() {
        anyhow::bail!("no accounts given; pass a login or configure a [profile] watchlist");
    }

    let client = Arc::new(GithubClient::new(config.github.clone())?);

    // Each account is an independent fetch-then-analyze pipeline; run them
    // concurrently and print results in the order requested.
    let mut handles = Vec::with_capacity(logins.len());
    for login in logins {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            let result = client.fetch_account(&login).await;
            (login, result)
        }));
    }

    let mut failures = 0usize;
    for handle in handles {
        let (login, result) = handle.await.context("fetch task panicked")?;
        match result {
            Ok((events, repos)) => {
                let profile = build_profile(&events, &repos, offset);
                match args.export.as_deref() {
                    Some("json") => print_json(&login, &profile, &events, args.events)?,
                    Some("md") => print_markdown(&login, &profile, &events, args.events),
                    Some(other) => {
                        anyhow::bail!("Unknown export format: {}. Use 'md' or 'json'", other)
                    }
                    None => print_terminal(&login, &profile, &events, args.events),
                }
            }
            Err(e) => {
                tracing::error!(login, error = %e, "Account fetch failed");
                eprintln!("{}: {}", login, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} account(s) could not be analyzed", failures);
    }
    Ok(())
}

fn print_terminal(login: &str, profile: &ActivityProfile, events: &[ActivityEvent], max_events: usize) {
    // Header
    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", format!("ACTIVITY PROFILE: {}", login));
    println!("╰{}╯", "─".repeat(60));
    println!();

    // Synopsis
    println!("SYNOPSIS");
    match &profile.synopsis.frequency {
        Some(frequency) => println!("   Frequency:   {} events/week", frequency.events_per_week),
        None => println!("   Frequency:   not available"),
    }
    match &profile.synopsis.consistency {
        Some(consistency) => println!(
            "   Consistency: {}% ({} of {} days)",
            consistency.percent, consistency.active_days, consistency.total_days
        ),
        None => println!("   Consistency: not available"),
    }
    match &profile.synopsis.peak_hour {
        Some(peak) => println!("   Peak hour:   {} ({})", peak.label(), peak.offset),
        None => println!("   Peak hour:   not available"),
    }
    println!();

    // Languages
    println!("LANGUAGES");
    match profile.languages.primary() {
        Some(primary) => println!("   Primary: {}", primary),
        None => println!("   Primary: not found"),
    }
    for (i, share) in profile.languages.top(5).iter().enumerate() {
        println!(
            "   {}. {:<14} {:>5.1}%  ({})",
            i + 1,
            share.language,
            share.percent,
            format_size(share.size)
        );
    }
    println!();

    // Daily volume: skipped entirely when the feed is empty
    if !profile.volume.is_empty() {
        println!("DAILY VOLUME");
        let max_count = profile.volume.max_count();
        for day in profile.volume.days() {
            println!(
                "   {}  {} {}",
                day.date.format("%b %d"),
                bar(day.count, max_count, CHART_WIDTH),
                day.count
            );
        }
        println!();
    }

    // Recent activity
    if !events.is_empty() {
        println!("RECENT ACTIVITY");
        for event in events.iter().take(max_events) {
            println!(
                "   {:>10}  {}",
                format_relative_time(event.created_at),
                event.describe()
            );
        }
        println!();
    }
}

fn print_markdown(login: &str, profile: &ActivityProfile, events: &[ActivityEvent], max_events: usize) {
    println!("# Activity Profile: {}", login);
    println!();

    println!("## Synopsis");
    println!();
    println!("| Metric | Value |");
    println!("|--------|-------|");
    match &profile.synopsis.frequency {
        Some(frequency) => println!("| Frequency | {} events/week |", frequency.events_per_week),
        None => println!("| Frequency | not available |"),
    }
    match &profile.synopsis.consistency {
        Some(consistency) => println!(
            "| Consistency | {}% ({} of {} days) |",
            consistency.percent, consistency.active_days, consistency.total_days
        ),
        None => println!("| Consistency | not available |"),
    }
    match &profile.synopsis.peak_hour {
        Some(peak) => println!("| Peak hour | {} ({}) |", peak.label(), peak.offset),
        None => println!("| Peak hour | not available |"),
    }
    println!();

    println!("## Languages");
    println!();
    match profile.languages.primary() {
        Some(primary) => println!("Primary language: **{}**", primary),
        None => println!("Primary language: *not found*"),
    }
    println!();
    for (i, share) in profile.languages.top(5).iter().enumerate() {
        println!(
            "{}. **{}** - {:.1}% ({})",
            i + 1,
            share.language,
            share.percent,
            format_size(share.size)
        );
    }
    println!();

    if !profile.volume.is_empty() {
        println!("## Daily Volume");
        println!();
        println!("| Date | Events |");
        println!("|------|--------|");
        for day in profile.volume.days() {
            println!("| {} | {} |", day.date, day.count);
        }
        println!();
    }

    if !events.is_empty() {
        println!("## Recent Activity");
        println!();
        for event in events.iter().take(max_events) {
            println!("- {}", event.describe());
        }
        println!();
    }
}

fn print_json(
    login: &str,
    profile: &ActivityProfile,
    events: &[ActivityEvent],
    max_events: usize,
) -> Result<()> {
    let json = serde_json::json!({
        "login": login,
        "synopsis": {
            "frequency": profile.synopsis.frequency.map(|f| serde_json::json!({
                "events_per_week": f.events_per_week,
                "event_count": f.event_count,
                "span_days": f.span_days,
            })),
            "consistency": profile.synopsis.consistency.map(|c| serde_json::json!({
                "percent": c.percent,
                "active_days": c.active_days,
                "total_days": c.total_days,
            })),
            "peak_hour": profile.synopsis.peak_hour.map(|p| serde_json::json!({
                "hour": p.hour,
                "event_count": p.event_count,
                "label": p.label(),
                "timezone": p.offset.to_string(),
            })),
        },
        "languages": {
            "primary": profile.languages.primary(),
            "total_size": profile.languages.total(),
            "top": profile.languages.top(5),
        },
        "daily_volume": profile.volume.days(),
        "recent_activity": events.iter().take(max_events).map(|event| serde_json::json!({
            "kind": event.kind.as_str(),
            "repo": event.repo,
            "created_at": event.created_at,
            "description": event.describe(),
        })).collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

/// Scale a count against the day with the most events.
fn bar(count: u64, max_count: u64, width: usize) -> String {
    let cells = ((count as f64 / max_count as f64) * width as f64).round() as usize;
    "▇".repeat(cells.max(1))
}
