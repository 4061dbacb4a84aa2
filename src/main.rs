use clap::{Parser, Subcommand};
use pixelstash::cli::{
    decode_files, encode_file, show_info, DecodeOptions, EncodeOptions, DEFAULT_SECRET_FILE,
};
use pixelstash::{Perturbation, Placement};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("PIXELSTASH_VERSION");
const BUILD: &str = env!("PIXELSTASH_BUILD");
const PROFILE: &str = env!("PIXELSTASH_PROFILE");
const GIT_HASH: &str = env!("PIXELSTASH_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "pixelstash")]
#[command(author, about = "Hide text in an image by perturbing pixel channels", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a secret into an image
    #[command(alias = "e")]
    Encode {
        /// Path of the cover image
        image: PathBuf,

        /// Path of the secret text file
        secret: PathBuf,

        /// seq: consecutive pixels. spread: spread data throughout the image
        #[arg(value_parser = parse_placement)]
        placement: Placement,

        /// simple: one colour channel per pixel. split: all three channels
        #[arg(value_parser = parse_perturbation)]
        perturbation: Perturbation,

        /// Output directory
        #[arg(long, default_value = "./outputs")]
        output: PathBuf,
    },

    /// Retrieve a secret by comparing the original image to the altered image
    #[command(alias = "d")]
    Decode {
        /// Path of the original image
        original: PathBuf,

        /// Path of the altered image
        altered: PathBuf,

        /// Perturbation used when encoding (split also reads simple)
        #[arg(value_parser = parse_perturbation)]
        perturbation: Perturbation,

        /// Also write the secret to output-secret.txt
        #[arg(short, long)]
        save: bool,

        /// Write the secret here instead of output-secret.txt (implies --save)
        #[arg(long)]
        save_path: Option<PathBuf>,
    },

    /// Show dimensions and capacity of an image
    #[command(alias = "i")]
    Info {
        /// Image to inspect
        image: PathBuf,

        /// Altered image to diff against
        #[arg(long)]
        altered: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_placement(s: &str) -> Result<Placement, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_perturbation(s: &str) -> Result<Perturbation, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("pixelstash {}", get_version());
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose);

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            let _ = Cli::command().print_help();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encode {
            image,
            secret,
            placement,
            perturbation,
            output,
        } => {
            let options = EncodeOptions {
                placement,
                perturbation,
                output_dir: output,
            };

            encode_file(&image, &secret, &options).map(|outcome| {
                println!(
                    "Stored {} characters in {}",
                    outcome.chars,
                    outcome.output_path.display()
                );
            })
        }

        Commands::Decode {
            original,
            altered,
            perturbation,
            save,
            save_path,
        } => {
            let save = match save_path {
                Some(path) => Some(path),
                None if save => Some(PathBuf::from(DEFAULT_SECRET_FILE)),
                None => None,
            };
            let options = DecodeOptions { perturbation, save };

            decode_files(&original, &altered, &options).map(|secret| {
                println!("The secret is:\n\n{}\n", secret);
                if let Some(path) = &options.save {
                    println!("Saved to {}", path.display());
                }
            })
        }

        Commands::Info {
            image,
            altered,
            json,
        } => show_info(&image, altered.as_deref()).and_then(|report| {
            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", report);
            }
            Ok(())
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
