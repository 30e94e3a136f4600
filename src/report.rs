//! Static HTML report emission.
//!
//! The report is one self-contained page: a styled shell, the display
//! payload embedded as a JSON literal, and a script that hands the payload
//! to a cloud layout library loaded from a CDN. Runs that produced no
//! ranked terms get a minimal fallback document instead.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::config::RunConfig;
use crate::terms::DisplayItem;

/// Errors while producing or persisting the report document.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The display payload could not be serialized for embedding.
    #[error("cloud payload could not be serialized: {source}")]
    Payload {
        /// Underlying serializer error.
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be written to disk.
    #[error("could not write report to {path}: {source}")]
    Io {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    fn payload(source: serde_json::Error) -> Self {
        Self::Payload { source }
    }

    fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }
}

/// Page styling. Kept out of the template so the template carries only
/// interpolation points.
const PAGE_STYLE: &str = "\
body { font-family: 'Segoe UI', Roboto, Helvetica, Arial, sans-serif; margin: 0; padding: 20px; background-color: #f8f9fa; text-align: center; }
#container { max-width: 1000px; margin: 0 auto; background: white; border-radius: 15px; box-shadow: 0 5px 15px rgba(0,0,0,0.1); padding: 20px; }
h2 { color: #2c3e50; margin: 10px 0; font-weight: 700; }
.footer { font-size: 13px; color: #7f8c8d; margin-bottom: 30px; }
.word-link { cursor: pointer; transition: all 0.3s ease; }
.word-link:hover { opacity: 0.8 !important; text-shadow: 2px 2px 4px rgba(0,0,0,0.2); }";

/// Cloud layout script. Runs against the `words` payload declared just
/// above it and maps payload fields onto the names the layout library
/// expects.
const CLOUD_SCRIPT: &str = r##"var myColor = d3.scaleOrdinal().range(["#2c3e50", "#c0392b", "#2980b9", "#8e44ad", "#27ae60", "#d35400", "#006064", "#16a085"]);

var layout = d3.layout.cloud()
    .size([document.getElementById('container').offsetWidth * 0.95, 600])
    .words(words.map(function(d) { return {text: d.label, size: d.weight, url: d.link, count: d.count}; }))
    .padding(2)
    .rotate(function() { return (~~(Math.random() * 2) * 90); })
    .font("Impact")
    .fontSize(function(d) { return d.size; })
    .on("end", draw);

layout.start();

function draw(words) {
  d3.select("#cloud-area").append("svg")
      .attr("width", layout.size()[0])
      .attr("height", layout.size()[1])
    .append("g")
      .attr("transform", "translate(" + layout.size()[0] / 2 + "," + layout.size()[1] / 2 + ")")
    .selectAll("text")
      .data(words)
    .enter().append("text")
      .attr("class", "word-link")
      .style("font-size", function(d) { return d.size + "px"; })
      .style("font-family", "Impact, Arial Black, sans-serif")
      .style("fill", function(d, i) { return myColor(i); })
      .attr("text-anchor", "middle")
      .attr("transform", function(d) {
        return "translate(" + [d.x, d.y] + ")rotate(" + d.rotate + ")";
      })
      .text(function(d) { return d.text; })
      .on("click", function(d) { window.open(d.url, '_blank'); })
      .append("title")
      .text(function(d) { return d.text + " (" + d.count + " papers)"; });
}"##;

/// Renders the full cloud page around the display payload.
///
/// The page title and heading carry the configured topic, and the footer
/// states the journal count, the lookback window, and `generated_on`.
///
/// # Errors
///
/// Returns [`ReportError::Payload`] if the payload cannot be serialized.
pub fn render(
    items: &[DisplayItem],
    config: &RunConfig,
    generated_on: NaiveDate,
) -> Result<String, ReportError> {
    let payload = serde_json::to_string(items).map_err(ReportError::payload)?;
    let topic = &config.topic;
    let journal_count = config.journals.len();
    let window_days = config.window_days;
    let generated = generated_on.format("%Y-%m-%d");
    let style = PAGE_STYLE;
    let script = CLOUD_SCRIPT;

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{topic} Trends Cloud</title>
    <script src="https://d3js.org/d3.v5.min.js"></script>
    <script src="https://cdn.jsdelivr.net/gh/holtzy/D3-graph-gallery@master/LIB/d3.layout.cloud.js"></script>
    <style>
{style}
    </style>
</head>
<body>
    <div id="container">
        <h2>☁️ {topic} Live Trends</h2>
        <p class="footer">Top {journal_count} Journals • Last {window_days} Days • Updated: {generated}</p>
        <div id="cloud-area"></div>
    </div>

    <script>
var words = {payload};
{script}
    </script>
</body>
</html>
"#
    ))
}

/// Minimal document emitted when the run produced no ranked terms.
#[must_use]
pub fn render_empty() -> String {
    "<h2>No data found.</h2>".to_string()
}

/// Writes `document` to `path`, replacing any previous report.
///
/// # Errors
///
/// Returns [`ReportError::Io`] when the file cannot be written.
pub fn write(path: &Path, document: &str) -> Result<(), ReportError> {
    fs::write(path, document).map_err(|e| ReportError::io(path.to_path_buf(), e))?;
    info!(path = %path.display(), bytes = document.len(), "report written");
    Ok(())
}
