//! Plain-text and JSON rendering of a profile report.

use crate::model::structures::profile::ProfileReport;

const HEADERS: [&str; 5] = ["beatmap", "live pp", "local pp", "pp change", "position change"];

enum Align {
    Left,
    Right,
    Center
}

const ALIGNMENT: [Align; 5] = [Align::Left, Align::Right, Align::Right, Align::Right, Align::Center];

/// Formats `value` with an explicit sign, or `-` when it rounds to zero.
pub fn signed(value: f64, decimals: usize) -> String {
    let magnitude = format!("{:.*}", decimals, value.abs());

    if magnitude.chars().all(|c| c == '0' || c == '.') {
        return "-".to_string();
    }

    let sign = if value < 0.0 { '-' } else { '+' };
    format!("{}{}", sign, magnitude)
}

fn pad(cell: &str, width: usize, align: &Align) -> String {
    match align {
        Align::Left => format!("{:<width$}", cell, width = width),
        Align::Right => format!("{:>width$}", cell, width = width),
        Align::Center => format!("{:^width$}", cell, width = width)
    }
}

pub fn render_text(report: &ProfileReport) -> String {
    let totals = &report.evaluation.totals;

    let mut lines = vec![
        format!("User:     {}", report.profile.username),
        format!(
            "Live PP:  {:.1} (including {:.1}pp from playcount)",
            totals.reference_total, totals.bonus
        ),
        format!("Local PP: {:.1} ({})", totals.adjusted_local_total, signed(totals.delta, 1))
    ];

    let rows = report
        .evaluation
        .plays
        .iter()
        .map(|p| {
            [
                format!("{} [{}]", p.beatmap_title, p.mods),
                format!("{:.1}", p.live_performance),
                format!("{:.1}", p.local_performance),
                format!("{:.1}", p.performance_delta),
                signed(p.rank_shift as f64, 0)
            ]
        })
        .collect::<Vec<_>>();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<String>| {
        cells
            .iter()
            .zip(widths.iter())
            .zip(ALIGNMENT.iter())
            .map(|((cell, width), align)| pad(cell, *width, align))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    lines.push(line(HEADERS.iter().map(|h| h.to_string()).collect()));
    lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-"));
    lines.extend(rows.into_iter().map(|row| line(row.to_vec())));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_json(report: &ProfileReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{
            evaluate_profile,
            structures::{profile::Profile, ruleset::Ruleset}
        },
        utils::test_utils::play
    };

    fn report() -> ProfileReport {
        let plays = vec![play(1, 200.0, 90.0), play(2, 100.0, 150.0)];

        ProfileReport {
            profile: Profile {
                user_id: 2,
                username: "peppy".to_string(),
                reference_total: 300.0
            },
            ruleset: Ruleset::Osu,
            evaluation: evaluate_profile(300.0, &plays)
        }
    }

    #[test]
    fn test_signed() {
        assert_eq!(signed(12.34, 1), "+12.3");
        assert_eq!(signed(-0.06, 1), "-0.1");
        assert_eq!(signed(0.0, 1), "-");
        assert_eq!(signed(-0.04, 1), "-");
        assert_eq!(signed(3.0, 0), "+3");
        assert_eq!(signed(-1.0, 0), "-1");
    }

    #[test]
    fn test_render_text_summary() {
        let text = render_text(&report());
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "User:     peppy");
        // live: 200 + 95 = 295, bonus 5; local: 150 + 85.5 + 5 = 240.5
        assert_eq!(lines[1], "Live PP:  300.0 (including 5.0pp from playcount)");
        assert_eq!(lines[2], "Local PP: 240.5 (-59.5)");
    }

    #[test]
    fn test_render_text_table_order() {
        let text = render_text(&report());
        let lines = text.lines().collect::<Vec<_>>();

        assert!(lines[3].starts_with("beatmap"));
        assert!(lines[5].starts_with("2 [None]"));
        assert!(lines[5].contains("+1"));
        assert!(lines[6].starts_with("1 [None]"));
        assert!(lines[6].contains("-110.0"));
    }

    #[test]
    fn test_render_text_line_per_row() {
        let text = render_text(&report());

        // summary, header, separator, one row per play
        assert_eq!(text.lines().count(), 3 + 2 + 2);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["profile"]["username"], "peppy");
        assert_eq!(value["ruleset"], 0);
        assert_eq!(value["evaluation"]["plays"][0]["rank_shift"], 1);
    }
}
