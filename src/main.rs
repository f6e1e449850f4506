use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use mandelbrot_explorer::{
    CliController, ColourScheme, FilePresenterPort, PngFilePresenter, PpmFilePresenter,
    RenderRequest, Viewport, DEFAULT_ITERATIONS, DEFAULT_RESOLUTION, MAX_ITERATIONS,
    MAX_RESOLUTION, MIN_ITERATIONS, MIN_RESOLUTION,
};

/// Renders the Mandelbrot set to a PNG or PPM image.
///
/// Example:
///   mandelbrot_explorer --resolution 800 --iterations 80 --colormap viridis --output out/set.png
#[derive(Parser, Debug)]
#[command(name = "mandelbrot_explorer", version, about)]
struct Cli {
    /// Image width and height in pixels
    #[arg(
        long,
        default_value_t = DEFAULT_RESOLUTION,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_RESOLUTION)..=i64::from(MAX_RESOLUTION))
    )]
    resolution: u32,

    /// Maximum number of iterations per point
    #[arg(
        long,
        default_value_t = DEFAULT_ITERATIONS,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_ITERATIONS)..=i64::from(MAX_ITERATIONS))
    )]
    iterations: u32,

    /// Colour scheme: magma, viridis, plasma, inferno or cividis
    #[arg(long, default_value = "magma")]
    colormap: String,

    /// Output file; a .ppm extension writes PPM, anything else PNG
    #[arg(long, short, default_value = "output/mandelbrot.png")]
    output: PathBuf,

    /// Left edge of the viewport on the real axis
    #[arg(long, default_value_t = -2.0, allow_negative_numbers = true)]
    real_min: f64,

    /// Right edge of the viewport on the real axis
    #[arg(long, default_value_t = 0.8, allow_negative_numbers = true)]
    real_max: f64,

    /// Imaginary value of the top image row
    #[arg(long, default_value_t = -1.4, allow_negative_numbers = true)]
    imag_min: f64,

    /// Imaginary value of the bottom image row
    #[arg(long, default_value_t = 1.4, allow_negative_numbers = true)]
    imag_max: f64,

    /// Leave out the colourbar legend
    #[arg(long)]
    no_colorbar: bool,

    /// Worker threads for the render pool (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,
}

impl Cli {
    fn render_request(&self) -> Result<RenderRequest, Box<dyn Error>> {
        Ok(RenderRequest {
            resolution: self.resolution,
            max_iterations: self.iterations,
            scheme: self.colormap.parse::<ColourScheme>()?,
            viewport: Viewport::new(self.real_min, self.real_max, self.imag_min, self.imag_max)?,
            colourbar: !self.no_colorbar,
        })
    }
}

fn is_ppm(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"))
}

fn run<P: FilePresenterPort>(
    presenter: P,
    request: &RenderRequest,
    output: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut controller = CliController::new(presenter);

    controller.generate(request)?;
    controller.write(output)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let request = cli.render_request()?;

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }
    info!("Threads: {}", rayon::current_num_threads());

    if is_ppm(&cli.output) {
        run(PpmFilePresenter::new(), &request, &cli.output)
    } else {
        run(PngFilePresenter::new(), &request, &cli.output)
    }
}
