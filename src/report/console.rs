use crate::scanner::RankedListing;

const MAX_ROWS: usize = 20;

/// Ranked results as a console table, BUYs first. Empty input renders a
/// neutral no-deals message instead of an empty frame.
pub fn format_ranked_table(ranked: &[RankedListing]) -> String {
    if ranked.is_empty() {
        return "No promising items found right now.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("\n╔══════════════════════════════════════════════════════════════════════╗\n");
    output.push_str("║             COMIC DEAL HUNTER — SCAN RESULTS                         ║\n");
    output.push_str("╚══════════════════════════════════════════════════════════════════════╝\n\n");

    for r in ranked.iter().take(MAX_ROWS) {
        let fmv = r
            .fmv
            .map(|v| format!("${:.0}", v))
            .unwrap_or_else(|| "n/a".to_string());
        output.push_str(&format!(
            "[{}] {} — ${:.0} (FMV: {})  score={}\n",
            r.verdict, r.listing.title, r.listing.price, fmv, r.score
        ));
        output.push_str(&format!("  {}\n", r.listing.url));
    }

    if ranked.len() > MAX_ROWS {
        output.push_str(&format!("\n... and {} more candidates\n", ranked.len() - MAX_ROWS));
    }

    output.push_str(&format!("\nFound {} candidates. BUYs shown first.\n", ranked.len()));
    output
}
