use payroll_logging::payroll_debug;

use crate::attribution::Ledger;
use crate::money::Cents;
use crate::pay::PayRecord;
use crate::period::PayPeriod;

pub const COLUMN_WIDTHS: [f64; 4] = [15.0, 70.0, 15.0, 15.0];
pub const COLUMN_HEADERS: [&str; 4] = ["Date", "Headline", "Characters", "Pay"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub date: String,
    pub headline: String,
    pub characters: u64,
    pub pay: Cents,
}

/// Contents of one writer's sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterSheet {
    pub writer: String,
    /// Identification line printed above the column headers.
    pub title: String,
    pub rows: Vec<SheetRow>,
    pub total: Cents,
}

/// Everything that goes into one desk's workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskReport {
    pub desk: String,
    pub period: PayPeriod,
    pub sheets: Vec<WriterSheet>,
}

impl DeskReport {
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn total(&self) -> Cents {
        self.sheets.iter().map(|sheet| sheet.total).sum()
    }
}

/// Lays out one sheet per writer who earned anything this period.
pub fn build_desk_report(desk: &str, period: PayPeriod, ledger: &Ledger<PayRecord>) -> DeskReport {
    let mut sheets = Vec::new();

    for entry in ledger.entries() {
        let total = entry.total_pay();
        if total.is_zero() {
            payroll_debug!("Skipping {} on {} desk: nothing owed", entry.writer, desk);
            continue;
        }

        let rows = entry
            .records
            .iter()
            .map(|record| SheetRow {
                date: record.article.date.clone(),
                headline: record.article.headline.clone(),
                characters: record.article.characters,
                pay: record.pay,
            })
            .collect();

        sheets.push(WriterSheet {
            writer: entry.writer.clone(),
            title: format!(
                "{} desk, {} {}: {}",
                desk,
                period.month_name(),
                period.year(),
                entry.writer
            ),
            rows,
            total,
        });
    }

    DeskReport {
        desk: desk.to_string(),
        period,
        sheets,
    }
}
