//! Plain-text rendering of pages and summaries. Rendering stays out of the
//! engine; this module only reads derived views.

use loadview::prelude::*;

/// Print the visible page as a fixed-width table with a page footer.
pub fn page(session: &ViewSession) {
    let view = session.visible_page();

    println!(
        "{:<28} {:<18} {:<10} {:<16} {:<14} {:>9}",
        "NAME", "TYPE", "HUB", "CITY", "COUNTY", "MW"
    );
    for row in &view.items {
        println!(
            "{:<28} {:<18} {:<10} {:<16} {:<14} {:>9.1}",
            clip(&row.name, 28),
            clip(&row.sector, 18),
            clip(&row.hub, 10),
            clip(&row.city, 16),
            clip(&row.county, 14),
            row.mw
        );
    }

    println!(
        "page {}/{}  (sort: {} {})",
        view.page,
        view.total_pages.max(1),
        session.state().sort_key(),
        session.state().direction()
    );
}

/// Print aggregate statistics and the per-hub rollup for the filtered set.
pub fn summary(session: &ViewSession) {
    let summary = session.summary();

    println!(
        "facilities: {}  total: {:.1} MW  avg: {:.1} MW  est annual: {:.0} MWh",
        summary.count, summary.total_mw, summary.avg_mw, summary.est_annual_mwh
    );

    for (hub, mw) in session.hub_totals() {
        println!("  {hub:<12} {mw:>9.1} MW");
    }
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
        clipped.push('…');
        clipped
    }
}
