//! Horizontal bar charts of message counts.
//!
//! A [`BarChart`] holds one bar per sender, in the order of the
//! [`SenderDistribution`] it was built from, and renders either as text for
//! a terminal or as a standalone SVG document.
//!
//! # Example
//!
//! ```
//! use chatlens::chart::BarChart;
//! use chatlens::config::ChartConfig;
//! use chatlens::core::sender_distribution;
//!
//! let table = chatlens::load_str("[d, 1] Alice: a\n[d, 2] Alice: b\n[d, 3] Bob: c", true)?;
//! let chart = BarChart::from_distribution(&sender_distribution(&table), &ChartConfig::new().with_width(10));
//!
//! let text = chart.render_text();
//! assert!(text.contains("Alice │██████████ 2"));
//! assert!(text.contains("Bob   │█████ 1"));
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::Path;

use log::debug;

use crate::config::{ChartConfig, MAX_BAR_WIDTH};
use crate::core::distribution::SenderDistribution;
use crate::error::Result;

// SVG canvas, 10x6 inches at 100 dpi
const SVG_WIDTH: f64 = 1000.0;
const SVG_HEIGHT: f64 = 600.0;
const MARGIN_TOP: f64 = 70.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 70.0;
const LABEL_CHAR_WIDTH: f64 = 7.5;
const BAR_FILL_RATIO: f64 = 0.8;
const ANNOTATION_OFFSET: f64 = 5.0;

/// A single bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    /// Sender name shown on the category axis.
    pub label: String,
    /// Message count, shown as bar length and annotation.
    pub value: usize,
}

/// A labelled horizontal bar chart.
#[derive(Debug, Clone)]
pub struct BarChart {
    bars: Vec<Bar>,
    config: ChartConfig,
}

impl BarChart {
    /// Builds a chart with one bar per sender.
    pub fn from_distribution(distribution: &SenderDistribution, config: &ChartConfig) -> Self {
        let bars = distribution
            .iter()
            .map(|(sender, count)| Bar {
                label: sender.to_string(),
                value: count,
            })
            .collect();
        Self {
            bars,
            config: config.clone(),
        }
    }

    /// Returns the bars in distribution order.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Returns the chart configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    fn max_value(&self) -> usize {
        self.bars.iter().map(|b| b.value).max().unwrap_or(0)
    }

    /// Length of a text bar in characters, at least one for non-zero values.
    fn text_len(&self, value: usize) -> usize {
        let max = self.max_value();
        if max == 0 || value == 0 {
            return 0;
        }
        // the field is public, so clamp again
        let width = self.config.width.clamp(1, MAX_BAR_WIDTH);
        (value.saturating_mul(width).saturating_add(max / 2) / max).clamp(1, width)
    }

    /// Renders the chart as text, one line per bar, first bar on top.
    ///
    /// # Format
    /// ```text
    /// Distribution of Messages by Sender
    ///
    /// Senders
    /// Alice │████████████████████████████████████████ 2
    /// Bob   │████████████████████ 1
    ///       └─ Number of Messages
    /// ```
    pub fn render_text(&self) -> String {
        let label_width = self
            .bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str(&self.config.title);
        out.push_str("\n\n");
        out.push_str(&self.config.y_label);
        out.push('\n');

        for bar in &self.bars {
            let pad = label_width - bar.label.chars().count();
            let body: String = std::iter::repeat_n(self.config.bar_char, self.text_len(bar.value))
                .collect();
            out.push_str(&format!(
                "{}{} │{} {}\n",
                bar.label,
                " ".repeat(pad),
                body,
                bar.value
            ));
        }

        out.push_str(&format!(
            "{} └─ {}\n",
            " ".repeat(label_width),
            self.config.x_label
        ));
        out
    }

    /// Renders the chart as a standalone SVG document.
    ///
    /// The first bar is drawn at the bottom of the category axis. Each bar
    /// carries `class="bar"` and is followed by its count in a rounded box
    /// just right of the bar end.
    pub fn render_svg(&self) -> String {
        let cfg = &self.config;
        let label_chars = self
            .bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0);
        let margin_left = 60.0 + label_chars as f64 * LABEL_CHAR_WIDTH;

        let plot_w = SVG_WIDTH - margin_left - MARGIN_RIGHT;
        let plot_h = SVG_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let plot_bottom = MARGIN_TOP + plot_h;

        // leave headroom right of the longest bar for its annotation
        let axis_max = (self.max_value().max(1) as f64) * 1.1;
        let x_of = |value: f64| margin_left + value / axis_max * plot_w;

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{SVG_WIDTH}\" height=\"{SVG_HEIGHT}\" \
             viewBox=\"0 0 {SVG_WIDTH} {SVG_HEIGHT}\" font-family=\"sans-serif\">\n"
        ));
        svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
        svg.push_str(&format!(
            "<text class=\"title\" x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"20\" font-weight=\"500\">{}</text>\n",
            margin_left + plot_w / 2.0,
            MARGIN_TOP / 2.0,
            escape_xml(&cfg.title)
        ));

        // axes
        svg.push_str(&format!(
            "<line x1=\"{margin_left:.1}\" y1=\"{MARGIN_TOP:.1}\" x2=\"{margin_left:.1}\" y2=\"{plot_bottom:.1}\" stroke=\"black\"/>\n"
        ));
        svg.push_str(&format!(
            "<line x1=\"{margin_left:.1}\" y1=\"{plot_bottom:.1}\" x2=\"{:.1}\" y2=\"{plot_bottom:.1}\" stroke=\"black\"/>\n",
            margin_left + plot_w
        ));

        for tick in ticks(self.max_value()) {
            let x = x_of(tick as f64);
            svg.push_str(&format!(
                "<line x1=\"{x:.1}\" y1=\"{plot_bottom:.1}\" x2=\"{x:.1}\" y2=\"{:.1}\" stroke=\"black\"/>\n\
                 <text x=\"{x:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\">{tick}</text>\n",
                plot_bottom + 5.0,
                plot_bottom + 20.0
            ));
        }

        if !self.bars.is_empty() {
            let slot = plot_h / self.bars.len() as f64;
            let bar_h = slot * BAR_FILL_RATIO;

            for (i, bar) in self.bars.iter().enumerate() {
                let slot_center = plot_bottom - slot * (i as f64 + 0.5);
                let y = slot_center - bar_h / 2.0;
                let end = x_of(bar.value as f64);
                svg.push_str(&format!(
                    "<rect class=\"bar\" x=\"{margin_left:.1}\" y=\"{y:.1}\" width=\"{:.1}\" height=\"{bar_h:.1}\" fill=\"{}\" stroke=\"{}\"/>\n",
                    end - margin_left,
                    escape_xml(&cfg.fill),
                    escape_xml(&cfg.edge)
                ));
                svg.push_str(&format!(
                    "<text x=\"{:.1}\" y=\"{slot_center:.1}\" text-anchor=\"end\" dominant-baseline=\"middle\" font-size=\"12\">{}</text>\n",
                    margin_left - 8.0,
                    escape_xml(&bar.label)
                ));

                let label = bar.value.to_string();
                let box_w = label.len() as f64 * 8.0 + 8.0;
                let box_x = end + ANNOTATION_OFFSET;
                svg.push_str(&format!(
                    "<rect class=\"annotation\" x=\"{box_x:.1}\" y=\"{:.1}\" width=\"{box_w:.1}\" height=\"18\" rx=\"5\" fill=\"{}\" stroke=\"{}\"/>\n\
                     <text x=\"{:.1}\" y=\"{slot_center:.1}\" dominant-baseline=\"middle\" font-size=\"12\">{label}</text>\n",
                    slot_center - 9.0,
                    escape_xml(&cfg.annotation_fill),
                    escape_xml(&cfg.edge),
                    box_x + 4.0
                ));
            }
        }

        svg.push_str(&format!(
            "<text class=\"x-label\" x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"14\">{}</text>\n",
            margin_left + plot_w / 2.0,
            SVG_HEIGHT - 20.0,
            escape_xml(&cfg.x_label)
        ));
        svg.push_str(&format!(
            "<text class=\"y-label\" x=\"20\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"14\" transform=\"rotate(-90 20 {:.1})\">{}</text>\n",
            MARGIN_TOP + plot_h / 2.0,
            MARGIN_TOP + plot_h / 2.0,
            escape_xml(&cfg.y_label)
        ));
        svg.push_str("</svg>\n");
        svg
    }

    /// Renders the chart as SVG and writes it to `path`.
    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render_svg())?;
        debug!("Wrote {} bar chart to {}", self.bars.len(), path.display());
        Ok(())
    }
}

/// Tick values for the count axis: 0 up to `max` in at most ~6 even steps.
fn ticks(max: usize) -> Vec<usize> {
    let step = max.div_ceil(5).max(1);
    (0..=max).step_by(step).collect()
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
