use std::path::PathBuf;

use clap::Parser;
use payroll_core::PayPeriod;

#[derive(Parser, Debug)]
#[command(
    name = "desk-payroll",
    version,
    about = "Compute writer pay from a month of published desk articles"
)]
pub struct Cli {
    #[arg(
        value_name = "MONTH-YEAR",
        help = "Pay month such as 3-2023; defaults to last month"
    )]
    pub period: Option<PayPeriod>,
    #[arg(long, value_name = "FILE", help = "RON file with desks, rates and the writer directory")]
    pub config: Option<PathBuf>,
    #[arg(long, value_name = "DIR", default_value = ".", help = "Where workbooks are written")]
    pub output_dir: PathBuf,
    #[arg(long = "desk", value_name = "NAME", help = "Only run this desk (repeatable)")]
    pub desks: Vec<String>,
    #[arg(long, help = "Fail on job titles that match no pay rate")]
    pub strict: bool,
    #[arg(long, value_name = "URL", help = "Override the site the posts feed is read from")]
    pub api_base: Option<String>,
    #[arg(short, long, help = "Debug logging")]
    pub verbose: bool,
    #[arg(long, help = "Also log to ./payroll.log")]
    pub log_file: bool,
    #[arg(long, help = "Print the effective configuration as RON and exit")]
    pub print_config: bool,
}
