use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct PalettePreviewArgs {
    #[command(subcommand)]
    pub command: Option<CommandsEnum>,
}

#[derive(Debug, Subcommand)]
pub enum CommandsEnum {
    /// Preview palettes from the built-in registry by name.
    Preview(PaletteNames),
    /// Preview a palette defined in a JSON parameter file.
    Custom(ParameterFilePath),
    /// Print the names of the built-in palettes.
    List,
}

#[derive(Debug, Args)]
pub struct PaletteNames {
    #[clap(required = true)]
    pub names: Vec<String>,

    #[clap(long, short)]
    pub date_time_out: bool,
}

#[derive(Debug, Args)]
pub struct ParameterFilePath {
    pub params_path: String,

    #[clap(long, short)]
    pub date_time_out: bool,
}
