//! Payroll engine: fetching, text extraction, workbook output and the desk pipeline.
mod extract;
mod fetch;
mod filename;
mod persist;
mod pipeline;
mod report;
mod types;

pub use extract::HtmlTextExtractor;
pub use fetch::{posts_url, FetchSettings, PostFetcher, ReqwestPostFetcher, POSTS_PER_PAGE};
pub use filename::{report_filename, sheet_names, MAX_SHEET_NAME_CHARS};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use pipeline::{run_blocking, PayrollRun};
pub use report::{render_workbook, write_report, ReportError};
pub use types::{DeskError, DeskSummary, EngineError, FailureKind, FetchError};
