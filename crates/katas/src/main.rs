use crate::prelude::*;
use clap::Parser;

mod calc;
mod date;
mod error;
mod item;
mod kaprekar;
mod prelude;
mod server;
mod shapes;
mod text;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Small programming exercises: item records, calculators, dates, text, Kaprekar numbers and shapes"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "KATAS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Decode a 'name$$##price$$##quantity' item record
    Item(crate::item::App),

    /// Floating-point and fixed-point calculator
    Calc(crate::calc::App),

    /// Date arithmetic on yyyy/MM/dd dates
    Date(crate::date::App),

    /// Text processing exercises
    Text(crate::text::App),

    /// Check whether a number is a Kaprekar number
    Kaprekar(crate::kaprekar::App),

    /// Generate random circles, squares and triangles
    Shapes(crate::shapes::App),

    /// Serve every exercise over HTTP
    Serve(crate::server::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Item(sub_app) => crate::item::run(sub_app, app.global).await,
        SubCommands::Calc(sub_app) => crate::calc::run(sub_app, app.global).await,
        SubCommands::Date(sub_app) => crate::date::run(sub_app, app.global).await,
        SubCommands::Text(sub_app) => crate::text::run(sub_app, app.global).await,
        SubCommands::Kaprekar(sub_app) => crate::kaprekar::run(sub_app, app.global).await,
        SubCommands::Shapes(sub_app) => crate::shapes::run(sub_app, app.global).await,
        SubCommands::Serve(sub_app) => crate::server::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
