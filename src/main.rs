//! foamcase - main entry point

use anyhow::{Context, Result};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use foamcase::cli::{Cli, Commands, OutputArgs, ShowFormat};
use foamcase::{
    apply_permissions, collect_run_dirs, find_cases, read_dictionary, removal_script,
    run_clean_scripts, write_remove, write_run_clean, Artifact, CaseStudyConfig, Script,
    ScriptKind,
};

/// Initialize logging to stderr; RUST_LOG overrides the default level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);
    let dry_run = cli.dry_run;
    debug!("CLI arguments parsed");

    match cli.command {
        Commands::Cases { root } => {
            for case in find_cases(&root)? {
                println!("{}", case.display());
            }
        }
        Commands::Allrun { base, output } => {
            if dry_run {
                let dirs = collect_run_dirs(&base)?;
                let (allrun, allclean) = run_clean_scripts(&dirs);
                print_script(ScriptKind::Allrun, &allrun);
                print_script(ScriptKind::Allclean, &allclean);
            } else {
                let artifacts = write_run_clean(&base, &output.out)?;
                finish(&artifacts, &output)?;
            }
        }
        Commands::Rmcases {
            base,
            cases,
            write_dir,
            study,
            output,
        } => {
            let study = match study {
                Some(path) => {
                    info!("Loading case study from {:?}", path);
                    CaseStudyConfig::load_from_file(&path)?
                }
                None => CaseStudyConfig::new(
                    base.context("a study directory or --study file is required")?,
                    vec![cases],
                    write_dir,
                ),
            };
            study.validate()?;

            if dry_run {
                let script = removal_script(&study.base_case, &study.cases, study.write_dir);
                print_script(ScriptKind::RmCases, &script);
            } else {
                let artifact = write_remove(
                    &study.base_case,
                    &study.cases,
                    study.write_dir,
                    &output.out,
                )?;
                finish(std::slice::from_ref(&artifact), &output)?;
            }
        }
        Commands::Show {
            file,
            format,
            header,
        } => {
            let mut dict = read_dictionary(&file)?;
            if !header {
                dict.header = None;
            }
            match format {
                ShowFormat::Json if header => {
                    println!("{}", serde_json::to_string_pretty(&dict)?);
                }
                ShowFormat::Json => println!("{}", serde_json::to_string_pretty(&dict.body)?),
                ShowFormat::Foam => print!("{}", dict),
            }
        }
        Commands::Validate { file } => match read_dictionary(&file) {
            Ok(dict) => {
                println!(
                    "✓ {} is a valid dictionary ({} top-level entries)",
                    file.display(),
                    dict.body.len()
                );
            }
            Err(e) => {
                error!("Dictionary validation failed: {}", e);
                eprintln!("✗ {}: {}", file.display(), e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

fn print_script(kind: ScriptKind, script: &Script) {
    println!("==> {} <==", kind);
    print!("{}", script);
}

/// Make artifacts executable unless asked not to, then report them.
fn finish(artifacts: &[Artifact], output: &OutputArgs) -> Result<()> {
    if output.no_chmod {
        debug!("--no-chmod given, leaving permissions as created");
    } else {
        apply_permissions(artifacts)?;
    }
    for artifact in artifacts {
        println!("{}", artifact.path.display());
    }
    Ok(())
}
