use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use katas_core::shapes::{generate, ShapeError, ShapeRequest, ShapesOutput};

#[derive(Debug, clap::Parser)]
#[command(name = "shapes")]
#[command(about = "Generate random circles, squares and triangles")]
#[command(after_help = "EXAMPLES:
  # Two circles and a triangle:
  katas shapes --circles 2 --triangles 1

  # Reproducible output:
  katas shapes --squares 3 --seed 42 --json")]
pub struct App {
    /// Number of circles
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    circles: i32,

    /// Number of squares
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    squares: i32,

    /// Number of triangles
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    triangles: i32,

    /// Seed for the random generator
    #[arg(long)]
    seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Public data function - used by both CLI and HTTP server
///
/// Without a seed the generator is initialized from OS entropy.
pub fn generate_data(
    request: &ShapeRequest,
    seed: Option<u64>,
) -> Result<ShapesOutput, ShapeError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate(request, &mut rng)
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let request = ShapeRequest {
        circles: app.circles,
        squares: app.squares,
        triangles: app.triangles,
    };

    if global.verbose {
        eprintln!(
            "Generating {} circles, {} squares and {} triangles",
            request.circles, request.squares, request.triangles
        );
        if let Some(seed) = app.seed {
            eprintln!("Seed: {}", seed);
        }
        eprintln!();
    }

    let out = generate_data(&request, app.seed).map_err(|e| eyre!("{}", e))?;

    if app.json {
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Type".bold(),
        "Color".bold(),
        "Center".bold(),
        "Area".bold(),
        "Properties".bold()
    ]);
    for shape in &out.shapes {
        table.add_row(prettytable::row![
            shape.kind,
            shape.color,
            format!("({}, {})", shape.center.x, shape.center.y),
            format!("{:.2}", shape.area),
            shape.properties
        ]);
    }
    table.printstd();

    Ok(())
}
