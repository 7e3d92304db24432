//! Terminal output for the summary command
//!
//! Formats a computed dashboard as tables (human) or JSON.

use chanboard_core::{ChannelView, Dashboard, LoadLevel, SummaryStats};
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};

// ============================================================================
// Formatters
// ============================================================================

/// Format a full dashboard as tables (human) or JSON
pub fn format_dashboard(dashboard: &Dashboard, json: bool, no_color: bool) -> String {
    if json {
        return serde_json::to_string_pretty(dashboard).unwrap_or_else(|_| "{}".to_string());
    }

    let mut out = format_summary(&dashboard.summary);
    out.push_str("\n\n");
    out.push_str(&format_channel_table(&dashboard.channels, no_color));
    out
}

/// Pool-wide summary lines
pub fn format_summary(summary: &SummaryStats) -> String {
    let lines = [
        format!(
            "Minute usage:     {} / {} ({})",
            summary.total_minute_usage,
            summary.total_minute_limit,
            format_pct(summary.minute_pct)
        ),
        format!(
            "Day usage:        {} / {} ({})",
            summary.total_day_usage,
            summary.total_day_limit,
            format_pct(summary.day_pct)
        ),
        format!(
            "Disabled normal:  {} / {} ({})",
            summary.disabled_normal,
            summary.total_normal,
            format_pct(summary.disabled_pct)
        ),
    ];
    lines.join("\n")
}

/// Ranked channels as a table
pub fn format_channel_table(channels: &[ChannelView], no_color: bool) -> String {
    if channels.is_empty() {
        return "No channels found.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let headers = ["ID", "Tier", "Status", "Minute", "Minute %", "Day", "Day %"];
    if no_color {
        table.set_header(headers.to_vec());
    } else {
        table.set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }

    for channel in channels {
        let minute = format!("{}/{}", channel.minute_usage, channel.minute_limit);
        let day = format!("{}/{}", channel.day_usage, channel.day_limit);

        table.add_row(Row::from(vec![
            Cell::new(channel.id),
            Cell::new(channel.tier().label()),
            status_cell(channel, no_color),
            Cell::new(minute),
            pct_cell(channel.minute_pct, no_color),
            Cell::new(day),
            pct_cell(channel.day_pct, no_color),
        ]));
    }

    table.to_string()
}

// ============================================================================
// Utilities
// ============================================================================

fn format_pct(pct: f64) -> String {
    format!("{:.1}%", pct)
}

fn pct_cell(pct: f64, no_color: bool) -> Cell {
    let cell = Cell::new(format_pct(pct));
    if no_color {
        return cell;
    }
    match LoadLevel::from_pct(pct) {
        LoadLevel::Low => cell.fg(Color::Green),
        LoadLevel::Elevated => cell.fg(Color::Yellow),
        LoadLevel::High => cell.fg(Color::Red),
    }
}

fn status_cell(channel: &ChannelView, no_color: bool) -> Cell {
    let availability = channel.availability();
    let cell = Cell::new(availability.label());
    if no_color {
        cell
    } else if availability.is_available() {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Red)
    }
}

// ============================================================================
// Tests
// ============================================================================
