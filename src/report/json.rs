use serde::Serialize;

use crate::model::metrics::AnalysisReport;
use crate::report::ReportMeta;

#[derive(Serialize)]
struct ToolInfo<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Serialize)]
struct SummaryDocument<'a> {
    tool: ToolInfo<'a>,
    input: &'a str,
    #[serde(flatten)]
    report: &'a AnalysisReport,
}

pub fn render_summary_json(
    report: &AnalysisReport,
    meta: &ReportMeta,
) -> Result<String, serde_json::Error> {
    let doc = SummaryDocument {
        tool: ToolInfo {
            name: &meta.tool_name,
            version: &meta.tool_version,
        },
        input: &meta.input,
        report,
    };
    serde_json::to_string_pretty(&doc)
}
