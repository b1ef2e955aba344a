use clap::Parser;
use houghcircle::grid::io::load_edge_map;
use houghcircle::{Circle, Detector, DetectorConfig, SearchRegion};
use image::{Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const CIRCLE_SEGMENTS: usize = 400;
const CIRCLE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const CIRCLE_LINE_WIDTH: i32 = 2;

#[derive(Parser, Debug)]
#[command(author, version, about = "Hough circle detection on a binary edge image")]
struct Cli {
    /// Path to the edge image; pixels above the threshold are edge points.
    edges: PathBuf,
    /// Minimum circle radius.
    #[arg(long, default_value_t = 10)]
    radius_min: u32,
    /// Maximum circle radius (exclusive).
    #[arg(long, default_value_t = 20)]
    radius_max: u32,
    /// Number of circles to report.
    #[arg(long, default_value_t = 2)]
    max_circles: usize,
    /// Luma threshold separating edges from background.
    #[arg(long, default_value_t = 0)]
    threshold: u8,
    /// Image to draw the found circles onto (defaults to the edge image).
    #[arg(long, value_name = "FILE")]
    overlay: Option<PathBuf>,
    /// Where to write the overlay PNG; skipped when absent.
    #[arg(long, value_name = "FILE")]
    overlay_out: Option<PathBuf>,
    /// Where to write the results as JSON; skipped when absent.
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
    /// Use the row-parallel voting pass.
    #[arg(long)]
    parallel: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Serialize)]
struct CircleRecord {
    x: i32,
    y: i32,
    radius: u32,
    votes: u32,
}

impl From<Circle> for CircleRecord {
    fn from(value: Circle) -> Self {
        Self {
            x: value.x,
            y: value.y,
            radius: value.radius,
            votes: value.votes,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    circles: Vec<CircleRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("houghcircle=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    let edges = load_edge_map(&cli.edges, cli.threshold)?;
    let region = SearchRegion::full(edges.width(), edges.height())?;

    let detector = Detector::new(DetectorConfig {
        radius_min: cli.radius_min,
        radius_max: cli.radius_max,
        max_circles: cli.max_circles,
        parallel: cli.parallel,
        ..DetectorConfig::default()
    });
    let circles = detector.detect(&edges, region)?;

    for circle in &circles {
        println!("{}", circle.report_line());
    }

    if let Some(path) = &cli.json {
        let output = Output {
            circles: circles.iter().copied().map(CircleRecord::from).collect(),
        };
        fs::write(path, serde_json::to_string_pretty(&output)?)?;
    }

    if let Some(path) = &cli.overlay_out {
        let source = cli.overlay.as_ref().unwrap_or(&cli.edges);
        let mut canvas = image::open(source)?.to_rgb8();
        for circle in &circles {
            draw_circle(&mut canvas, circle);
        }
        canvas.save(path)?;
    }

    Ok(())
}

fn draw_circle(canvas: &mut RgbImage, circle: &Circle) {
    let polyline = circle.polyline(CIRCLE_SEGMENTS);
    for pair in polyline.windows(2) {
        draw_segment(canvas, pair[0], pair[1]);
    }
}

fn draw_segment(canvas: &mut RgbImage, from: (i32, i32), to: (i32, i32)) {
    let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs()).max(1);
    for i in 0..=steps {
        let t = f64::from(i) / f64::from(steps);
        let x = f64::from(from.0) + t * f64::from(to.0 - from.0);
        let y = f64::from(from.1) + t * f64::from(to.1 - from.1);
        put_thick_pixel(canvas, x.round() as i32, y.round() as i32);
    }
}

fn put_thick_pixel(canvas: &mut RgbImage, x: i32, y: i32) {
    for dy in 0..CIRCLE_LINE_WIDTH {
        for dx in 0..CIRCLE_LINE_WIDTH {
            let (px, py) = (x + dx, y + dy);
            if px >= 0 && py >= 0 && (px as u32) < canvas.width() && (py as u32) < canvas.height() {
                canvas.put_pixel(px as u32, py as u32, CIRCLE_COLOR);
            }
        }
    }
}
