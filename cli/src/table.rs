use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use weekspend_core::{format_amount, WeeklyReport};

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Spent")]
    spent: String,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Statistic")]
    name: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    table.to_string()
}

pub fn render_table(report: &WeeklyReport) -> String {
    let summary = vec![
        SummaryRow { name: "Total Spent", amount: dollars(report.total) },
        SummaryRow { name: "Daily Average", amount: dollars(report.average) },
        SummaryRow { name: "Highest Day", amount: dollars(report.max) },
        SummaryRow { name: "Lowest Day", amount: dollars(report.min) },
        SummaryRow { name: "Weekly Limit", amount: dollars(report.limit) },
    ];

    let days: Vec<DayRow> = report
        .days
        .iter()
        .map(|entry| DayRow {
            day: match &entry.weekday {
                Some(name) => format!("{} ({})", entry.day, name),
                None => entry.day.to_string(),
            },
            spent: dollars(entry.amount),
        })
        .collect();

    let mut out = String::new();
    out.push_str(&styled(Table::new(summary)));
    out.push('\n');
    if days.is_empty() {
        out.push_str("No daily spending recorded.\n");
    } else {
        out.push_str(&styled(Table::new(days)));
        out.push('\n');
    }
    for line in report.insight_lines() {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn dollars(value: f64) -> String {
    format!("${}", format_amount(value))
}
