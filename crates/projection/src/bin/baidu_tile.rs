//! CLI for inspecting Baidu tile coordinates.
//!
//! Usage:
//!   cargo run --bin baidu-tile -- forward --lat 39.915 --lng 116.404 --zoom 18
//!   cargo run --bin baidu-tile -- inverse --x 46512466 --y 28720834
//!   cargo run --bin baidu-tile -- area --rect 116.35,39.95,116.45,39.88 --zoom 12
//!
//! The default zoom can be set with BAIDU_TILE_ZOOM (also read from `.env`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use baidu_projection::{
    BaiduProjection, GeoPoint, PixelPoint, RectLatLng, TileCoord, TileProjection, TileSize,
    TileXY, BAIDU,
};

#[derive(Parser, Debug)]
#[command(name = "baidu-tile")]
#[command(about = "Convert between lat/lng and Baidu tile pixels")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Zoom level
    #[arg(
        long,
        short,
        global = true,
        env = "BAIDU_TILE_ZOOM",
        default_value = "18",
        allow_negative_numbers = true
    )]
    zoom: i32,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Log level
    #[arg(long, global = true, env = "BAIDU_TILE_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Geographic point to pixel and tile
    Forward {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },

    /// Pixel to geographic point (clamped to the projection bounds)
    Inverse {
        #[arg(long, allow_negative_numbers = true)]
        x: i64,
        #[arg(long, allow_negative_numbers = true)]
        y: i64,
    },

    /// Tile matrix extent and resolution at the zoom level
    Matrix,

    /// Tiles covering a rectangle
    Area {
        /// left,top,right,bottom in degrees
        #[arg(long, allow_hyphen_values = true)]
        rect: String,

        /// Extra tiles on each side
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        padding: i64,

        /// Refuse areas covering more tiles than this
        #[arg(long, env = "BAIDU_TILE_MAX_TILES", default_value = "10000")]
        max_tiles: usize,
    },

    /// Fixed projection properties
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Serialize)]
struct ForwardReport {
    input: GeoPoint,
    zoom: i32,
    pixel: PixelPoint,
    tile: TileCoord,
}

#[derive(Serialize)]
struct InverseReport {
    input: PixelPoint,
    zoom: i32,
    point: GeoPoint,
}

#[derive(Serialize)]
struct MatrixReport {
    zoom: i32,
    resolution: f64,
    min: TileXY,
    max: TileXY,
    size: TileXY,
    size_pixel: PixelPoint,
}

#[derive(Serialize)]
struct AreaReport {
    zoom: i32,
    rect: RectLatLng,
    padding: i64,
    tiles: Vec<TileCoord>,
}

#[derive(Serialize)]
struct InfoReport {
    bounds: RectLatLng,
    axis: f64,
    flattening: f64,
    tile_size: TileSize,
    tile_origin: GeoPoint,
    projected_origin: (f64, f64),
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.json_logs)?;

    let proj: &BaiduProjection = &BAIDU;
    let zoom = args.zoom;
    debug!(command = ?args.command, zoom, "running command");

    match args.command {
        Command::Forward { lat, lng } => {
            let pixel = proj
                .try_forward_transform(lat, lng, zoom)
                .with_context(|| format!("cannot project {},{} at zoom {}", lat, lng, zoom))?;
            let tile = TileCoord::from_xy(zoom, proj.from_pixel_to_tile_xy(pixel));
            info!(%pixel, %tile, "forward transform");
            emit(
                args.format,
                &ForwardReport {
                    input: GeoPoint::new(lat, lng),
                    zoom,
                    pixel,
                    tile,
                },
                || format!("pixel {}\ntile  {}", pixel, tile),
            )
        }
        Command::Inverse { x, y } => {
            let point = proj
                .try_inverse_transform(x, y, zoom)
                .with_context(|| format!("cannot unproject {},{} at zoom {}", x, y, zoom))?;
            emit(
                args.format,
                &InverseReport {
                    input: PixelPoint::new(x, y),
                    zoom,
                    point,
                },
                || format!("lat,lng {}", point),
            )
        }
        Command::Matrix => {
            let report = MatrixReport {
                zoom,
                resolution: proj.level_resolution(zoom),
                min: proj.tile_matrix_min_xy(zoom),
                max: proj.tile_matrix_max_xy(zoom),
                size: proj.tile_matrix_size_xy(zoom),
                size_pixel: proj.tile_matrix_size_pixel(zoom),
            };
            emit(args.format, &report, || {
                format!(
                    "resolution {} m/px\nmin        {}\nmax        {}\nsize       {}",
                    report.resolution, report.min, report.max, report.size
                )
            })
        }
        Command::Area {
            rect,
            padding,
            max_tiles,
        } => {
            let rect = RectLatLng::from_string(&rect).context("invalid --rect")?;
            let tiles: Vec<TileCoord> = proj
                .try_area_tile_list(&rect, zoom, padding, max_tiles)
                .context("cannot list tiles for --rect")?
                .into_iter()
                .map(|t| TileCoord::from_xy(zoom, t))
                .collect();
            info!(count = tiles.len(), "area tile list");
            let text = tiles
                .iter()
                .map(TileCoord::cache_key)
                .collect::<Vec<_>>()
                .join("\n");
            emit(
                args.format,
                &AreaReport {
                    zoom,
                    rect,
                    padding,
                    tiles,
                },
                || text,
            )
        }
        Command::Info => {
            let report = InfoReport {
                bounds: proj.bounds(),
                axis: proj.axis(),
                flattening: proj.flattening(),
                tile_size: proj.tile_size(),
                tile_origin: proj.tile_origin(),
                projected_origin: proj.projected_origin(),
            };
            emit(args.format, &report, || {
                format!(
                    "axis        {}\nflattening  {}\ntile size   {}x{}\ntile origin {}",
                    report.axis,
                    report.flattening,
                    report.tile_size.width,
                    report.tile_size.height,
                    report.tile_origin
                )
            })
        }
    }
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

fn emit<T: Serialize>(
    format: OutputFormat,
    report: &T,
    text: impl FnOnce() -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => println!("{}", text()),
    }
    Ok(())
}
