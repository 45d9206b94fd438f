use std::path::PathBuf;

use futures_util::future::join_all;
use payroll_core::{
    attribute_posts, build_desk_report, calculate_pays, Desk, PayPeriod, PayWindow, PayrollConfig,
    Post, RateResolver, TextExtractor,
};
use payroll_logging::{payroll_debug, payroll_info, payroll_warn};

use crate::extract::HtmlTextExtractor;
use crate::fetch::{FetchSettings, PostFetcher, ReqwestPostFetcher};
use crate::report::write_report;
use crate::types::{DeskError, DeskSummary, EngineError};

/// One payroll run: a period, the rules, and where fetched posts come from.
pub struct PayrollRun<'a> {
    config: &'a PayrollConfig,
    period: PayPeriod,
    window: PayWindow,
    output_dir: PathBuf,
    fetcher: &'a dyn PostFetcher,
    extractor: &'a dyn TextExtractor,
}

impl<'a> PayrollRun<'a> {
    pub fn new(
        config: &'a PayrollConfig,
        period: PayPeriod,
        output_dir: PathBuf,
        fetcher: &'a dyn PostFetcher,
        extractor: &'a dyn TextExtractor,
    ) -> Result<Self, EngineError> {
        let window = period.window(config.window_start_day)?;
        Ok(Self {
            config,
            period,
            window,
            output_dir,
            fetcher,
            extractor,
        })
    }

    pub fn window(&self) -> PayWindow {
        self.window
    }

    /// Runs every enabled desk concurrently and waits for all of them.
    ///
    /// A failing desk does not stop the others; results come back in desk order.
    pub async fn run_all(&self) -> Vec<Result<DeskSummary, DeskError>> {
        join_all(self.config.enabled_desks().map(|desk| self.run_desk(desk))).await
    }

    /// fetch -> attribute -> price -> write, for one desk.
    pub async fn run_desk(&self, desk: &Desk) -> Result<DeskSummary, DeskError> {
        payroll_info!(
            "Processing {} desk (category {}) for {}",
            desk.name,
            desk.category_id,
            self.period
        );

        let posts = self.fetch_in_window(desk).await?;

        let attributed = attribute_posts(&posts, self.config, self.extractor);
        let priced = calculate_pays(attributed, &RateResolver::new(self.config)).map_err(
            |source| DeskError::Pay {
                desk: desk.name.clone(),
                source,
            },
        )?;
        let report = build_desk_report(&desk.name, self.period, &priced);

        let output_path = if report.is_empty() {
            payroll_warn!(
                "No writer on the {} desk is owed anything for {}; no workbook written",
                desk.name,
                self.period
            );
            None
        } else {
            let path = write_report(&report, &self.output_dir).map_err(|source| {
                DeskError::Report {
                    desk: desk.name.clone(),
                    source,
                }
            })?;
            Some(path)
        };

        Ok(DeskSummary {
            desk: desk.name.clone(),
            posts: posts.len(),
            sheets: report.sheets.len(),
            total: report.total(),
            output_path,
        })
    }

    async fn fetch_in_window(&self, desk: &Desk) -> Result<Vec<Post>, DeskError> {
        let fetched = self
            .fetcher
            .fetch_posts(desk.category_id)
            .await
            .map_err(|source| DeskError::Fetch {
                desk: desk.name.clone(),
                source,
            })?;
        let total = fetched.len();
        let posts: Vec<Post> = fetched
            .into_iter()
            .filter(|post| self.window.contains(post.date))
            .collect();
        payroll_debug!(
            "{} desk: {} of {} fetched posts fall in {} .. {}",
            desk.name,
            posts.len(),
            total,
            self.window.start,
            self.window.end
        );
        Ok(posts)
    }
}

/// Builds the HTTP client and a runtime, then runs every enabled desk to completion.
pub fn run_blocking(
    config: &PayrollConfig,
    period: PayPeriod,
    output_dir: PathBuf,
    settings: FetchSettings,
) -> Result<Vec<Result<DeskSummary, DeskError>>, EngineError> {
    let runtime = tokio::runtime::Runtime::new().map_err(EngineError::Runtime)?;
    let extractor = HtmlTextExtractor;

    runtime.block_on(async {
        let fetcher = ReqwestPostFetcher::new(settings).map_err(EngineError::Client)?;
        let run = PayrollRun::new(config, period, output_dir, &fetcher, &extractor)?;
        Ok::<_, EngineError>(run.run_all().await)
    })
}
