use crate::common::*;
use crate::traits::service_traits::chart_service::*;
use plotters::prelude::*;

const BACKGROUND_COLOR: RGBColor = RGBColor(20, 20, 20);
const CAPTION_COLOR: RGBColor = RGBColor(240, 240, 240);
const GRID_COLOR: RGBColor = RGBColor(60, 60, 60);
const AXIS_COLOR: RGBColor = RGBColor(120, 120, 120);
const TEXT_COLOR: RGBColor = RGBColor(200, 200, 200);
const SERIES_COLOR: RGBColor = RGBColor(0, 191, 255);

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    chart_width: u32,
    chart_height: u32,
}

#[doc = "Inline thousands-separator formatting for Y-axis tick labels"]
fn format_thousands(value: f64) -> String {
    let s: String = format!("{:.0}", value.abs());
    let mut result: String = String::new();
    let mut count: i32 = 0;
    for c in s.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    let grouped: String = result.chars().rev().collect();
    if value < 0.0 { format!("-{}", grouped) } else { grouped }
}

impl ChartServiceImpl {
    #[doc = "Helper function to determine Y-axis range with padding"]
    fn calculate_y_range(values: &[f64]) -> (f64, f64) {
        if values.is_empty() {
            return (0.0, 100.0);
        }

        let min_val: f64 = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_val: f64 = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let padding: f64 = ((max_val - min_val) * 0.1).max(1.0);

        let y_min: f64 = (min_val - padding).max(0.0);
        let y_max: f64 = max_val + padding;

        (y_min, y_max)
    }

    #[doc = r#"
        등폭 구간 히스토그램을 계산하는 함수.

        1. `[min, max]` 구간을 `bin_count` 개의 등폭 구간으로 분할
        2. 각 값은 정확히 하나의 구간에 배정되며, 최대값은 마지막 구간에 포함
        3. 동일한 입력과 구간 수에 대해 항상 동일한 경계/카운트를 반환 (결정적)
        4. 모든 값이 동일하면 폭 1의 단일 구간으로 축퇴

        # Arguments
        * `values` - 구간화할 원시 값들
        * `bin_count` - 구간 수 (0이면 1로 보정)

        # Returns
        * `(Vec<f64>, Vec<usize>)` - (구간 경계 `bin_count + 1` 개, 구간별 카운트)
    "#]
    fn compute_histogram_bins(values: &[f64], bin_count: usize) -> (Vec<f64>, Vec<usize>) {
        let bin_count: usize = bin_count.max(1);

        if values.is_empty() {
            return (Vec::new(), Vec::new());
        }

        let min_val: f64 = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_val: f64 = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let span: f64 = max_val - min_val;
        if span <= 0.0 {
            return (vec![min_val, min_val + 1.0], vec![values.len()]);
        }

        let bin_width: f64 = span / bin_count as f64;

        let edges: Vec<f64> = (0..=bin_count)
            .map(|i| min_val + bin_width * i as f64)
            .collect();

        let mut counts: Vec<usize> = vec![0; bin_count];
        for value in values {
            let index: usize = (((value - min_val) / bin_width) as usize).min(bin_count - 1);
            counts[index] += 1;
        }

        (edges, counts)
    }

    #[doc = "데이터가 없을 때의 자리표시 차트. 축/시리즈 없이 제목과 안내 문구만 그린다"]
    fn render_empty_blocking(title: &str, width: u32, height: u32) -> anyhow::Result<String> {
        let mut svg_buf: String = String::new();
        {
            let root = SVGBackend::with_string(&mut svg_buf, (width, height)).into_drawing_area();
            root.fill(&BACKGROUND_COLOR)?;

            root.draw(&Text::new(
                title.to_string(),
                (20, 20),
                ("sans-serif", 24).into_font().color(&CAPTION_COLOR),
            ))?;

            root.draw(&Text::new(
                "No data for the current selection",
                (width as i32 / 2 - 140, height as i32 / 2),
                ("sans-serif", 18).into_font().color(&TEXT_COLOR),
            ))?;

            root.present()?;
        }

        Ok(svg_buf)
    }

    #[doc = "라인 차트 공통 그리기. 시리즈가 둘 이상이면 범례를 함께 그린다"]
    fn render_lines_blocking(
        title: &str,
        x_labels: &[String],
        series: &[(String, Vec<f64>)],
        x_label: &str,
        y_label: &str,
        width: u32,
        height: u32,
    ) -> anyhow::Result<String> {
        let mut svg_buf: String = String::new();
        {
            let root = SVGBackend::with_string(&mut svg_buf, (width, height)).into_drawing_area();
            root.fill(&BACKGROUND_COLOR)?;

            let y_values: Vec<f64> = series
                .iter()
                .flat_map(|(_, values)| values.iter().copied())
                .collect();
            let (y_min, y_max) = Self::calculate_y_range(&y_values);
            let x_max: usize = x_labels.len().saturating_sub(1).max(1);

            let mut chart = ChartBuilder::on(&root)
                .caption(title, ("sans-serif", 28).into_font().color(&CAPTION_COLOR))
                .margin(20)
                .x_label_area_size(50)
                .y_label_area_size(80)
                .build_cartesian_2d(0..x_max, y_min..y_max)?;

            chart
                .configure_mesh()
                .x_desc(x_label)
                .y_desc(y_label)
                .x_labels(x_labels.len().min(12))
                .y_labels(10)
                .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(2))
                .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
                .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(2))
                .x_label_style(("sans-serif", 14).into_font().color(&TEXT_COLOR))
                .y_label_style(("sans-serif", 14).into_font().color(&TEXT_COLOR))
                .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
                .y_label_formatter(&|y| format_thousands(*y))
                .draw()?;

            for (series_index, (series_name, values)) in series.iter().enumerate() {
                let color: RGBAColor = Palette99::pick(series_index).to_rgba();

                chart
                    .draw_series(LineSeries::new(
                        values.iter().enumerate().map(|(i, &v)| (i, v)),
                        ShapeStyle::from(&color).stroke_width(3),
                    ))?
                    .label(series_name.clone())
                    .legend(move |(x, y)| {
                        PathElement::new(
                            vec![(x, y), (x + 20, y)],
                            ShapeStyle::from(&color).stroke_width(3),
                        )
                    });
            }

            if series.len() > 1 {
                chart
                    .configure_series_labels()
                    .background_style(RGBColor(35, 35, 35).filled())
                    .border_style(&AXIS_COLOR)
                    .label_font(("sans-serif", 14).into_font().color(&TEXT_COLOR))
                    .draw()?;
            }

            root.present()?;
        }

        Ok(svg_buf)
    }

    #[doc = "세로 막대 차트 공통 그리기. 막대 차트와 히스토그램이 함께 사용한다"]
    fn render_bars_blocking(
        title: &str,
        x_labels: &[String],
        y_data: &[f64],
        x_label: &str,
        y_label: &str,
        width: u32,
        height: u32,
    ) -> anyhow::Result<String> {
        let mut svg_buf: String = String::new();
        {
            let root = SVGBackend::with_string(&mut svg_buf, (width, height)).into_drawing_area();
            root.fill(&BACKGROUND_COLOR)?;

            let (_, y_max) = Self::calculate_y_range(y_data);
            let x_max: usize = x_labels.len().saturating_sub(1);

            let mut chart = ChartBuilder::on(&root)
                .caption(title, ("sans-serif", 28).into_font().color(&CAPTION_COLOR))
                .margin(20)
                .x_label_area_size(50)
                .y_label_area_size(80)
                .build_cartesian_2d((0..x_max).into_segmented(), 0f64..y_max)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_desc(x_label)
                .y_desc(y_label)
                .y_labels(10)
                .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(2))
                .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
                .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(2))
                .x_label_style(("sans-serif", 14).into_font().color(&TEXT_COLOR))
                .y_label_style(("sans-serif", 14).into_font().color(&TEXT_COLOR))
                .x_label_formatter(&|x| match x {
                    SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                        x_labels.get(*i).cloned().unwrap_or_default()
                    }
                    _ => String::new(),
                })
                .y_label_formatter(&|y| format_thousands(*y))
                .draw()?;

            chart.draw_series(
                Histogram::vertical(&chart)
                    .style(SERIES_COLOR.filled())
                    .margin(6)
                    .data(y_data.iter().enumerate().map(|(i, &v)| (i, v))),
            )?;

            root.present()?;
        }

        Ok(svg_buf)
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn render_line_chart(
        &self,
        title: &str,
        x_labels: Vec<String>,
        y_data: Vec<f64>,
        x_label: &str,
        y_label: &str,
    ) -> anyhow::Result<String> {
        let series: Vec<(String, Vec<f64>)> = vec![(title.to_string(), y_data)];
        self.render_multi_line_chart(title, x_labels, series, x_label, y_label)
            .await
    }

    async fn render_multi_line_chart(
        &self,
        title: &str,
        x_labels: Vec<String>,
        series: Vec<(String, Vec<f64>)>,
        x_label: &str,
        y_label: &str,
    ) -> anyhow::Result<String> {
        for (series_name, values) in &series {
            if values.len() != x_labels.len() {
                return Err(anyhow!(
                    "[ChartServiceImpl->render_multi_line_chart] Series '{}' has {} points but there are {} x labels",
                    series_name,
                    values.len(),
                    x_labels.len()
                ));
            }
        }

        let title: String = title.to_string();
        let x_label: String = x_label.to_string();
        let y_label: String = y_label.to_string();
        let width: u32 = self.chart_width;
        let height: u32 = self.chart_height;

        let handle: tokio::task::JoinHandle<Result<String, anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                /* ---- 여기부터는 동기 코드 (plotters) ---- */
                if x_labels.is_empty() || series.is_empty() {
                    return Self::render_empty_blocking(&title, width, height);
                }

                Self::render_lines_blocking(
                    &title, &x_labels, &series, &x_label, &y_label, width, height,
                )
            });

        let drawing_result: Result<String, anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->render_multi_line_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result
            .context("[ChartServiceImpl->render_multi_line_chart] drawing/present failed")
    }

    async fn render_bar_chart(
        &self,
        title: &str,
        x_labels: Vec<String>,
        y_data: Vec<f64>,
        x_label: &str,
        y_label: &str,
    ) -> anyhow::Result<String> {
        if x_labels.len() != y_data.len() {
            return Err(anyhow!(
                "[ChartServiceImpl->render_bar_chart] X labels and Y data must have the same length: {} vs {}",
                x_labels.len(),
                y_data.len()
            ));
        }

        let title: String = title.to_string();
        let x_label: String = x_label.to_string();
        let y_label: String = y_label.to_string();
        let width: u32 = self.chart_width;
        let height: u32 = self.chart_height;

        let handle: tokio::task::JoinHandle<Result<String, anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                if x_labels.is_empty() {
                    return Self::render_empty_blocking(&title, width, height);
                }

                Self::render_bars_blocking(
                    &title, &x_labels, &y_data, &x_label, &y_label, width, height,
                )
            });

        let drawing_result: Result<String, anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->render_bar_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result.context("[ChartServiceImpl->render_bar_chart] drawing/present failed")
    }

    async fn render_histogram_chart(
        &self,
        title: &str,
        values: Vec<f64>,
        bin_count: usize,
        x_label: &str,
        y_label: &str,
    ) -> anyhow::Result<String> {
        let title: String = title.to_string();
        let x_label: String = x_label.to_string();
        let y_label: String = y_label.to_string();
        let width: u32 = self.chart_width;
        let height: u32 = self.chart_height;

        let handle: tokio::task::JoinHandle<Result<String, anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                if values.is_empty() {
                    return Self::render_empty_blocking(&title, width, height);
                }

                let (edges, counts) = Self::compute_histogram_bins(&values, bin_count);

                let bin_labels: Vec<String> = counts
                    .iter()
                    .enumerate()
                    .map(|(i, _)| format!("{:.0}-{:.0}", edges[i], edges[i + 1]))
                    .collect();
                let bin_counts: Vec<f64> = counts.iter().map(|&c| c as f64).collect();

                Self::render_bars_blocking(
                    &title,
                    &bin_labels,
                    &bin_counts,
                    &x_label,
                    &y_label,
                    width,
                    height,
                )
            });

        let drawing_result: Result<String, anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->render_histogram_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result.context("[ChartServiceImpl->render_histogram_chart] drawing/present failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart_service() -> ChartServiceImpl {
        ChartServiceImpl::new(800, 480)
    }

    #[test]
    fn histogram_bins_are_deterministic() {
        let values: Vec<f64> = vec![1.0, 2.5, 3.0, 7.5, 9.9, 10.0, 4.2];

        let first = ChartServiceImpl::compute_histogram_bins(&values, 5);
        let second = ChartServiceImpl::compute_histogram_bins(&values, 5);

        assert_eq!(first, second);
        assert_eq!(first.0.len(), 6);
        assert_eq!(first.1.len(), 5);
    }

    #[test]
    fn histogram_counts_cover_every_value_exactly_once() {
        let values: Vec<f64> = (0..100).map(|i| i as f64 * 1.7).collect();

        let (_, counts) = ChartServiceImpl::compute_histogram_bins(&values, 8);

        assert_eq!(counts.iter().sum::<usize>(), values.len());
    }

    #[test]
    fn histogram_maximum_value_lands_in_last_bin() {
        let values: Vec<f64> = vec![0.0, 5.0, 10.0];

        let (edges, counts) = ChartServiceImpl::compute_histogram_bins(&values, 2);

        assert_eq!(edges, vec![0.0, 5.0, 10.0]);
        assert_eq!(counts, vec![1, 2]);
    }

    #[test]
    fn histogram_of_identical_values_degenerates_to_single_bin() {
        let values: Vec<f64> = vec![42.0; 10];

        let (edges, counts) = ChartServiceImpl::compute_histogram_bins(&values, 6);

        assert_eq!(edges, vec![42.0, 43.0]);
        assert_eq!(counts, vec![10]);
    }

    #[test]
    fn histogram_of_empty_input_is_empty() {
        let (edges, counts) = ChartServiceImpl::compute_histogram_bins(&[], 5);

        assert!(edges.is_empty());
        assert!(counts.is_empty());
    }

    #[test]
    fn zero_bin_count_is_clamped_to_one() {
        let values: Vec<f64> = vec![1.0, 2.0, 3.0];

        let (edges, counts) = ChartServiceImpl::compute_histogram_bins(&values, 0);

        assert_eq!(edges.len(), 2);
        assert_eq!(counts, vec![3]);
    }

    #[test]
    fn y_range_of_empty_values_has_defaults() {
        assert_eq!(ChartServiceImpl::calculate_y_range(&[]), (0.0, 100.0));
    }

    #[test]
    fn y_range_never_goes_below_zero() {
        let (y_min, y_max) = ChartServiceImpl::calculate_y_range(&[0.5, 2.0]);

        assert!(y_min >= 0.0);
        assert!(y_max > 2.0);
    }

    #[test]
    fn thousands_formatting_groups_digits() {
        assert_eq!(format_thousands(1234567.0), "1,234,567");
        assert_eq!(format_thousands(999.0), "999");
    }

    #[tokio::test]
    async fn empty_series_renders_placeholder_not_error() {
        let svg: String = chart_service()
            .render_multi_line_chart("Monthly Sales by Product", Vec::new(), Vec::new(), "Month", "Sales Amount")
            .await
            .unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("No data for the current selection"));
    }

    #[tokio::test]
    async fn mismatched_series_length_is_rejected() {
        let result = chart_service()
            .render_multi_line_chart(
                "Monthly Sales by Product",
                vec![String::from("2024-01"), String::from("2024-02")],
                vec![(String::from("Aspirin"), vec![1.0])],
                "Month",
                "Sales Amount",
            )
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn bar_chart_renders_svg_document() {
        let svg: String = chart_service()
            .render_bar_chart(
                "Total Sales by Product",
                vec![String::from("Aspirin"), String::from("Ibuprofen")],
                vec![300.0, 120.5],
                "Product",
                "Sales Amount",
            )
            .await
            .unwrap();

        assert!(svg.contains("<svg"));
    }

    #[tokio::test]
    async fn histogram_rendering_is_deterministic() {
        let values: Vec<f64> = vec![10.0, 20.0, 35.0, 35.5, 80.0, 95.0];

        let first: String = chart_service()
            .render_histogram_chart("Sales Amount Distribution", values.clone(), 4, "Sales Amount", "Count")
            .await
            .unwrap();
        let second: String = chart_service()
            .render_histogram_chart("Sales Amount Distribution", values, 4, "Sales Amount", "Count")
            .await
            .unwrap();

        assert_eq!(first, second);
    }
}
