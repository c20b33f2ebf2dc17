use crate::common::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Render a single-series line chart as an inline SVG document
        # Arguments
        * `title` - Chart title
        * `x_labels` - Labels for X-axis (e.g., years)
        * `y_data` - Data points for Y-axis
        * `x_label` - Label for X-axis
        * `y_label` - Label for Y-axis
    "]
    async fn render_line_chart(
        &self,
        title: &str,
        x_labels: Vec<String>,
        y_data: Vec<f64>,
        x_label: &str,
        y_label: &str,
    ) -> anyhow::Result<String>;

    #[doc = "
        Render one line series per product over a shared X-axis as an inline SVG document
        # Arguments
        * `series` - (series name, per-period values) pairs; each value vector
          must have the same length as `x_labels`
    "]
    async fn render_multi_line_chart(
        &self,
        title: &str,
        x_labels: Vec<String>,
        series: Vec<(String, Vec<f64>)>,
        x_label: &str,
        y_label: &str,
    ) -> anyhow::Result<String>;

    #[doc = "Render a vertical bar chart as an inline SVG document"]
    async fn render_bar_chart(
        &self,
        title: &str,
        x_labels: Vec<String>,
        y_data: Vec<f64>,
        x_label: &str,
        y_label: &str,
    ) -> anyhow::Result<String>;

    #[doc = "
        Render a histogram of raw values as an inline SVG document.
        Bins are computed locally: `bin_count` equal-width bins over [min, max].
    "]
    async fn render_histogram_chart(
        &self,
        title: &str,
        values: Vec<f64>,
        bin_count: usize,
        x_label: &str,
        y_label: &str,
    ) -> anyhow::Result<String>;
}
