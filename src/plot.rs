//! Figures with up to six labelled curves and an optional reference curve.
//!
//! Building a [`Figure`] has no effect on any numerical result. Rendering to
//! SVG or PNG requires the `plot` feature.

use bon::Builder;

use crate::{Error, Float, Result, core::trajectory::Trajectory};

/// Maximum number of labelled curves on one figure.
pub const MAX_CURVES: usize = 6;

/// Line colors, cycled in curve order. The reference curve is black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Blue,
    Green,
    Red,
    Yellow,
    Cyan,
    Magenta,
    Black,
}

pub const PALETTE: [Color; MAX_CURVES] = [
    Color::Blue,
    Color::Green,
    Color::Red,
    Color::Yellow,
    Color::Cyan,
    Color::Magenta,
];

impl Color {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Blue => (0, 0, 255),
            Color::Green => (0, 128, 0),
            Color::Red => (255, 0, 0),
            Color::Yellow => (191, 191, 0),
            Color::Cyan => (0, 191, 191),
            Color::Magenta => (191, 0, 191),
            Color::Black => (0, 0, 0),
        }
    }
}

/// One labelled `(x, y)` polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub x: Vec<Float>,
    pub y: Vec<Float>,
    pub label: String,
}

impl Curve {
    pub fn new(x: Vec<Float>, y: Vec<Float>, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }

    pub fn from_trajectory(traj: &Trajectory, label: impl Into<String>) -> Self {
        Self::new(traj.t.clone(), traj.y.clone(), label)
    }

    /// Points `(x_i, y_i)`; extra samples on the longer side are ignored.
    pub fn points(&self) -> impl Iterator<Item = (Float, Float)> + Clone + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

#[derive(Builder, Clone, Debug)]
/// Layout of a rendered figure.
pub struct PlotOptions {
    /// Caption drawn above the chart.
    #[builder(into)]
    pub title: Option<String>,
    #[builder(default = String::from("time"), into)]
    pub x_label: String,
    #[builder(default = String::from("value"), into)]
    pub y_label: String,
    /// Output size in pixels.
    #[builder(default = (1024, 768))]
    pub size: (u32, u32),
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions::builder().build()
    }
}

/// Curves sharing one time-vs-value axis.
#[derive(Debug, Clone, Default)]
pub struct Figure {
    curves: Vec<Curve>,
    reference: Option<Curve>,
    options: PlotOptions,
}

impl Figure {
    pub fn new(options: PlotOptions) -> Self {
        Self {
            curves: Vec::new(),
            reference: None,
            options,
        }
    }

    /// Build a figure in one go. More than [`MAX_CURVES`] curves is a usage
    /// error.
    pub fn with_curves(curves: Vec<Curve>, reference: Option<(Vec<Float>, Vec<Float>)>) -> Result<Self> {
        if curves.len() > MAX_CURVES {
            return Err(Error::TooManyCurves(curves.len()));
        }
        let mut figure = Figure {
            curves,
            reference: None,
            options: PlotOptions::default(),
        };
        if let Some((x, y)) = reference {
            figure.set_reference(x, y);
        }
        Ok(figure)
    }

    /// Add a labelled curve.
    pub fn add_curve(&mut self, curve: Curve) -> Result<&mut Self> {
        if self.curves.len() == MAX_CURVES {
            return Err(Error::TooManyCurves(MAX_CURVES + 1));
        }
        self.curves.push(curve);
        Ok(self)
    }

    /// Set the reference solution, drawn black and dashed.
    pub fn set_reference(&mut self, x: Vec<Float>, y: Vec<Float>) -> &mut Self {
        self.reference = Some(Curve::new(x, y, "reference solution"));
        self
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn reference(&self) -> Option<&Curve> {
        self.reference.as_ref()
    }

    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: PlotOptions) -> &mut Self {
        self.options = options;
        self
    }

    /// Curves paired with the color they are drawn in.
    pub fn styled_curves(&self) -> impl Iterator<Item = (&Curve, Color)> {
        self.curves.iter().zip(PALETTE)
    }

    /// Axis ranges covering every finite point, padded when degenerate.
    pub fn bounds(&self) -> ((Float, Float), (Float, Float)) {
        let mut x = (Float::INFINITY, Float::NEG_INFINITY);
        let mut y = (Float::INFINITY, Float::NEG_INFINITY);
        for (xi, yi) in self
            .curves
            .iter()
            .chain(self.reference.as_ref())
            .flat_map(Curve::points)
            .filter(|(xi, yi)| xi.is_finite() && yi.is_finite())
        {
            x = (x.0.min(xi), x.1.max(xi));
            y = (y.0.min(yi), y.1.max(yi));
        }
        (pad(x), pad(y))
    }
}

fn pad((lo, hi): (Float, Float)) -> (Float, Float) {
    if lo > hi {
        (0.0, 1.0)
    } else if lo == hi {
        (lo - 0.5, hi + 0.5)
    } else {
        let margin = 0.05 * (hi - lo);
        (lo - margin, hi + margin)
    }
}

#[cfg(feature = "plot")]
mod render {
    use std::path::Path;

    use plotters::{coord::Shift, prelude::*};

    use super::Figure;
    use crate::{Error, Result};

    fn plot_err<E: std::fmt::Display>(err: E) -> Error {
        Error::Plot(err.to_string())
    }

    fn rgb(color: super::Color) -> RGBColor {
        let (r, g, b) = color.rgb();
        RGBColor(r, g, b)
    }

    impl Figure {
        /// Render the figure to an SVG file.
        pub fn render_svg(&self, path: impl AsRef<Path>) -> Result<()> {
            let root = SVGBackend::new(path.as_ref(), self.options.size).into_drawing_area();
            self.draw(&root)
        }

        /// Render the figure to a PNG file.
        pub fn render_png(&self, path: impl AsRef<Path>) -> Result<()> {
            let root = BitMapBackend::new(path.as_ref(), self.options.size).into_drawing_area();
            self.draw(&root)
        }

        fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
            root.fill(&WHITE).map_err(plot_err)?;
            let ((x0, x1), (y0, y1)) = self.bounds();

            let mut builder = ChartBuilder::on(root);
            builder.margin(12).x_label_area_size(40).y_label_area_size(60);
            if let Some(title) = &self.options.title {
                builder.caption(title, ("sans-serif", 24));
            }
            let mut chart = builder.build_cartesian_2d(x0..x1, y0..y1).map_err(plot_err)?;

            chart
                .configure_mesh()
                .x_desc(self.options.x_label.as_str())
                .y_desc(self.options.y_label.as_str())
                .draw()
                .map_err(plot_err)?;

            for (curve, color) in self.styled_curves() {
                let style = rgb(color);
                chart
                    .draw_series(LineSeries::new(curve.points(), style.stroke_width(2)))
                    .map_err(plot_err)?
                    .label(curve.label.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
            }

            if let Some(reference) = &self.reference {
                let style = rgb(super::Color::Black);
                chart
                    .draw_series(DashedLineSeries::new(
                        reference.points(),
                        8,
                        5,
                        style.stroke_width(2),
                    ))
                    .map_err(plot_err)?
                    .label(reference.label.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
            }

            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(plot_err)?;

            root.present().map_err(plot_err)
        }
    }
}
