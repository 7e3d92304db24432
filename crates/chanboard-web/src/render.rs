//! Server-side HTML rendering of a dashboard
//!
//! Presentation only: percentages arrive at full precision and are shown
//! with one decimal here.

use chanboard_core::{ChannelFilter, ChannelView, Dashboard, LoadLevel, SummaryStats, ViewQuery};
use std::fmt::{self, Write};

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; margin: 20px; background-color: #f5f7fa; }
    h1 { text-align: center; margin-bottom: 30px; color: #333; }
    .container { max-width: 1400px; margin: 0 auto; }
    .summary-card { border-radius: 10px; padding: 20px; margin-bottom: 30px; background: white;
        box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
    .summary-title { font-size: 22px; font-weight: bold; margin-bottom: 20px; text-align: center; }
    .progress-container { width: 100%; background-color: #e0e0e0; border-radius: 4px; margin: 10px 0;
        height: 20px; overflow: hidden; }
    .progress-bar { height: 100%; border-radius: 4px; display: flex; align-items: center;
        justify-content: center; color: white; font-size: 12px; font-weight: bold; min-width: 2%;
        white-space: nowrap; text-shadow: 0 0 3px rgba(0,0,0,0.5); }
    .control-panel { display: flex; gap: 10px; flex-wrap: wrap; margin-bottom: 20px; }
    .search-box { padding: 8px 15px; border: 1px solid #ddd; border-radius: 20px; width: 250px; }
    .filter-btn { padding: 8px 15px; background: white; border: 1px solid #ddd; border-radius: 20px;
        cursor: pointer; }
    .filter-btn.active { background: #4285f4; color: white; border-color: #4285f4; }
    .cards-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(250px, 1fr)); gap: 20px; }
    .channel-card { background: white; border-radius: 10px; box-shadow: 0 2px 8px rgba(0,0,0,0.08); }
    .channel-header { padding: 10px 15px; border-bottom: 1px solid #eee; display: flex; gap: 8px;
        align-items: center; }
    .channel-id { font-weight: bold; font-size: 16px; }
    .badge { padding: 3px 7px; border-radius: 10px; font-size: 13px; font-weight: bold; }
    .tier-badge { margin-left: auto; margin-right: auto; }
    .channel-body { padding: 15px; }
    .usage-label { display: flex; justify-content: space-between; font-size: 13px; color: #666; }
    .status-available { background-color: #e6f4ea; color: #137333; }
    .status-disabled { background-color: #fce8e6; color: #c5221f; }
    .tier-paid { background-color: #e8f0fe; color: #1a73e8; }
    .tier-normal { background-color: #f1f3f4; color: #5f6368; }
    .empty { text-align: center; color: #666; }
    @media (max-width: 480px) { .cards-grid { grid-template-columns: 1fr; } .search-box { width: 100%; } }
"#;

/// Render the full dashboard page into `html`
///
/// Stops at the first writer error; the caller must not serve what was written.
pub fn render_dashboard<W: Write>(
    html: &mut W,
    dashboard: &Dashboard,
    query: &ViewQuery,
    refresh_secs: u64,
) -> fmt::Result {
    write!(
        html,
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta http-equiv="refresh" content="{refresh}">
    <title>Channel Pool Monitor</title>
    <style>{style}</style>
</head>
<body>
<div class="container">
    <h1>Channel Pool Monitor</h1>
"#,
        refresh = refresh_secs,
        style = STYLE,
    )?;

    render_summary(html, &dashboard.summary)?;
    render_controls(html, query)?;

    html.write_str("    <div class=\"cards-grid\">\n")?;
    if dashboard.channels.is_empty() {
        html.write_str("        <p class=\"empty\">No channels match.</p>\n")?;
    }
    for channel in &dashboard.channels {
        render_card(html, channel)?;
    }
    html.write_str("    </div>\n")?;

    write!(
        html,
        "    <p class=\"empty\">Generated {}</p>\n</div>\n</body>\n</html>\n",
        dashboard.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

/// Minimal page shown when a pass fails; never contains partial data
pub fn render_error(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="UTF-8"><title>Channel Pool Monitor</title></head>
<body>
    <h1>Channel data unavailable</h1>
    <p>{}</p>
</body>
</html>
"#,
        escape_html(message)
    )
}

fn render_summary<W: Write>(html: &mut W, summary: &SummaryStats) -> fmt::Result {
    html.write_str("    <div class=\"summary-card\">\n")?;
    html.write_str("        <div class=\"summary-title\">Pool usage</div>\n")?;
    progress(
        html,
        "Requests in the last minute",
        summary.total_minute_usage,
        summary.total_minute_limit,
        summary.minute_pct,
    )?;
    progress(
        html,
        "Requests today (daily reset)",
        summary.total_day_usage,
        summary.total_day_limit,
        summary.day_pct,
    )?;
    progress(
        html,
        "Auto-disabled normal channels",
        summary.disabled_normal,
        summary.total_normal,
        summary.disabled_pct,
    )?;
    html.write_str("    </div>\n")
}

fn render_controls<W: Write>(html: &mut W, query: &ViewQuery) -> fmt::Result {
    let search = query.search.as_deref().unwrap_or("");

    writeln!(
        html,
        r#"    <form class="control-panel" method="get" action="/">
        <input type="text" class="search-box" name="q" placeholder="Search ID..." value="{}">"#,
        escape_html(search)
    )?;
    for filter in ChannelFilter::ALL {
        let class = if filter == query.filter {
            "filter-btn active"
        } else {
            "filter-btn"
        };
        writeln!(
            html,
            r#"        <button class="{}" type="submit" name="filter" value="{}">{}</button>"#,
            class,
            filter.as_str(),
            filter.label()
        )?;
    }
    html.write_str("    </form>\n")
}

fn render_card<W: Write>(html: &mut W, channel: &ChannelView) -> fmt::Result {
    let tier = channel.tier();
    let availability = channel.availability();
    let tier_class = if tier.is_paid() {
        "tier-paid"
    } else {
        "tier-normal"
    };
    let status_class = if availability.is_available() {
        "status-available"
    } else {
        "status-disabled"
    };

    writeln!(
        html,
        r#"        <div class="channel-card" data-id="{id}">
            <div class="channel-header">
                <div class="channel-id">ID: {id}</div>
                <span class="badge tier-badge {tier_class}">{tier}</span>
                <span class="badge {status_class}">{status}</span>
            </div>
            <div class="channel-body">"#,
        id = channel.id,
        tier_class = tier_class,
        tier = tier.label(),
        status_class = status_class,
        status = availability.label(),
    )?;
    progress(
        html,
        "Last minute",
        channel.minute_usage,
        channel.minute_limit,
        channel.minute_pct,
    )?;
    progress(
        html,
        "Today",
        channel.day_usage,
        channel.day_limit,
        channel.day_pct,
    )?;
    html.write_str("            </div>\n        </div>\n")
}

fn progress<W: Write>(
    html: &mut W,
    label: &str,
    used: u64,
    limit: u64,
    pct: f64,
) -> fmt::Result {
    let color = LoadLevel::from_pct(pct).color();
    writeln!(
        html,
        r#"        <div class="usage-label"><span>{label}</span><span>{used} / {limit}</span></div>
        <div class="progress-container">
            <div class="progress-bar" style="width: {pct:.1}%; background-color: {color};">{pct:.1}%</div>
        </div>"#,
        label = label,
        used = used,
        limit = limit,
        pct = pct,
        color = color,
    )
}

/// Escape text for HTML element and attribute content
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
