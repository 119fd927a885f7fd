/// Network adapters for the scanning server's REST API
mod xc_report_client;

pub use xc_report_client::{Credentials, ReportLocation, XcReportClient};
