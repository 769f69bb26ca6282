//! HTML chart surface.
//!
//! Writes one standalone page per target into an output directory. The page
//! loads ApexCharts and installs currency formatters for tooltips and the
//! y-axis. The directory plays the role of the display tree: a target is
//! mounted while the directory exists.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::options::ChartOptions;
use super::surface::{ChartSurface, RenderError};

/// Default ApexCharts bundle
pub const DEFAULT_LIBRARY_URL: &str = "https://cdn.jsdelivr.net/npm/apexcharts";

pub struct HtmlSurface {
    root: PathBuf,
    library_url: String,
}

impl HtmlSurface {
    pub fn new(root: impl Into<PathBuf>, library_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            library_url: library_url.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the page for `target`
    pub fn page_path(&self, target: &str) -> PathBuf {
        self.root.join(format!("{}.html", target))
    }

    fn checked_page_path(&self, target: &str) -> Result<PathBuf, RenderError> {
        if !is_valid_target(target) {
            return Err(RenderError::TargetMissing(target.to_string()));
        }
        Ok(self.page_path(target))
    }
}

/// Whether `target` can name an element and a page file: ASCII letters,
/// digits, `_` and `-` only.
pub fn is_valid_target(target: &str) -> bool {
    !target.is_empty()
        && target
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl ChartSurface for HtmlSurface {
    fn library_available(&self) -> bool {
        !self.library_url.trim().is_empty()
    }

    fn has_target(&self, target: &str) -> bool {
        is_valid_target(target) && self.root.is_dir()
    }

    fn clear(&mut self, target: &str) -> Result<(), RenderError> {
        match fs::remove_file(self.checked_page_path(target)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn draw(&mut self, target: &str, options: &ChartOptions) -> Result<(), RenderError> {
        let path = self.checked_page_path(target)?;
        let page = render_page(target, options, &self.library_url)?;
        fs::write(path, page)?;
        Ok(())
    }
}

/// Build the page markup for one chart
pub fn render_page(
    target: &str,
    options: &ChartOptions,
    library_url: &str,
) -> Result<String, RenderError> {
    let currency = &options.currency;

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="id">
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{library_url}"></script>
</head>
<body>
<div id="{element_id}"></div>
<script>
const numberFormat = new Intl.NumberFormat({locale}, {{ minimumFractionDigits: {digits}, maximumFractionDigits: {digits} }});
const formatAmount = (value) => {symbol} + " " + numberFormat.format(value);
const options = {options_json};
options.yaxis = {{ labels: {{ formatter: formatAmount }} }};
options.tooltip = {{ y: {{ formatter: formatAmount }} }};
new ApexCharts(document.getElementById({target_literal}), options).render();
</script>
</body>
</html>
"#,
        title = escape_html(target),
        library_url = escape_html(library_url),
        element_id = escape_html(target),
        locale = script_value(&currency.locale)?,
        digits = currency.fraction_digits,
        symbol = script_value(&currency.symbol)?,
        options_json = script_value(options)?,
        target_literal = script_value(target)?,
    ))
}

/// JSON encoding safe to embed in a `<script>` block
fn script_value<T: Serialize + ?Sized>(value: &T) -> Result<String, RenderError> {
    // "</" inside a script block would end it early.
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
