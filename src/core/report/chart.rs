//! 실제 밀도 vs 재구성 밀도 비교 차트
//!
//! 차트는 순수 데이터 값으로 만들고, 표시 방식은 `ChartPresenter` 가 정한다.

use anyhow::{anyhow, ensure, Result};
use eframe::egui;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints};

/// 한 계열의 선
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub values: Vec<f64>,
    pub dashed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub xs: Vec<f64>,
    pub series: Vec<ChartSeries>,
}

impl ComparisonChart {
    /// π(x)/x 와 ρ(x) 두 계열 차트
    pub fn density_comparison(xs: &[f64], truth: &[f64], reconstruction: &[f64]) -> Result<Self> {
        ensure!(
            xs.len() == truth.len() && xs.len() == reconstruction.len(),
            "차트 계열 길이가 다릅니다: x {}, 실제 {}, 재구성 {}",
            xs.len(),
            truth.len(),
            reconstruction.len()
        );

        Ok(Self {
            title: "ζ-Based Modal Projection Reconstructing π(x)/x".to_string(),
            x_label: "x".to_string(),
            y_label: "Density".to_string(),
            xs: xs.to_vec(),
            series: vec![
                ChartSeries {
                    label: "π(x)/x (True)".to_string(),
                    values: truth.to_vec(),
                    dashed: false,
                },
                ChartSeries {
                    label: "ρ(x) (Zeta-based projection)".to_string(),
                    values: reconstruction.to_vec(),
                    dashed: true,
                },
            ],
        })
    }

    /// 계열의 (x, y) 점 목록
    pub fn points(&self, series: &ChartSeries) -> Vec<[f64; 2]> {
        self.xs
            .iter()
            .zip(&series.values)
            .map(|(&x, &y)| [x, y])
            .collect()
    }
}

/// 차트를 사용자에게 보여주는 방식
pub trait ChartPresenter {
    fn present(&self, chart: &ComparisonChart) -> Result<()>;
}

/// 네이티브 eframe 창. 사용자가 닫을 때까지 블록한다.
#[derive(Debug, Clone)]
pub struct NativeWindow {
    pub width: f32,
    pub height: f32,
}

impl Default for NativeWindow {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 400.0,
        }
    }
}

impl ChartPresenter for NativeWindow {
    fn present(&self, chart: &ComparisonChart) -> Result<()> {
        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([self.width, self.height])
                .with_title(chart.title.clone()),
            ..Default::default()
        };

        let app = ChartApp {
            chart: chart.clone(),
        };
        eframe::run_native(
            &chart.title,
            native_options,
            Box::new(move |_cc| Ok(Box::new(app))),
        )
        .map_err(|e| anyhow!("차트 창을 열 수 없습니다: {}", e))
    }
}

struct ChartApp {
    chart: ComparisonChart,
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.heading(self.chart.title.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("density_comparison")
                .legend(Legend::default())
                .x_axis_label(self.chart.x_label.clone())
                .y_axis_label(self.chart.y_label.clone())
                .show_grid(true)
                .show(ui, |plot_ui| {
                    for series in &self.chart.series {
                        let points: PlotPoints = self.chart.points(series).into_iter().collect();
                        let mut line = Line::new(series.label.clone(), points).width(2.0);
                        if series.dashed {
                            line = line.style(LineStyle::dashed_loose());
                        }
                        plot_ui.line(line);
                    }
                });
        });
    }
}
