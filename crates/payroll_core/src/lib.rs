//! Payroll core: pure pay rules, attribution and report layout.
mod attribution;
mod config;
mod layout;
mod money;
mod pay;
mod period;
mod post;
mod rates;

pub use attribution::{
    attribute_posts, character_count, AttributionRecord, Ledger, TextExtractor, WriterEntry,
};
pub use config::{Desk, PayrollConfig, RateTier, UnknownTitlePolicy, DEFAULT_API_BASE};
pub use layout::{build_desk_report, DeskReport, SheetRow, WriterSheet, COLUMN_HEADERS, COLUMN_WIDTHS};
pub use money::{Cents, Rate};
pub use pay::{calculate_pays, PayRecord};
pub use period::{PayPeriod, PayWindow, PeriodError};
pub use post::{CustomFields, Post, Rendered};
pub use rates::{PayError, RateResolver, MAX_DIRECTORY_DEPTH};
