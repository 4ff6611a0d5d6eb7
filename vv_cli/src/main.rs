use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use vv_config::VendorConfigSet;
use vv_expand::Syntax;
use vv_generator::{BuildContext, ExpansionChain, ModuleContext};

const MODULE_NAME: &str = "vendorvars";

/// Expands vendor variables in build description text.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Vendor configuration (soong.variables, json, yaml or toml). Later files override earlier ones.
    #[arg(short, long = "config", required = true)]
    configs: Vec<PathBuf>,
    /// Namespaces to expand, one pass each, in order [default: kospVarsPlugin,kryptonVarsPlugin]
    #[arg(short, long, value_delimiter = ',')]
    namespace: Option<Vec<String>>,
    /// Read `$` exactly like the build host: `$$` is a literal dollar, any other bare `$` is an error
    #[arg(long)]
    host_syntax: bool,
    /// Fail if any $(name) is left after the last pass
    #[arg(long)]
    strict: bool,
    /// Expand the contents of a file (`-` for stdin) instead of TEXT. Without either, stdin is read
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,
    /// Print the merged vendor configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    text: Vec<String>,
}

impl Cli {
    fn chain(&self) -> ExpansionChain {
        match &self.namespace {
            Some(namespaces) => namespaces
                .iter()
                .fold(ExpansionChain::new(), |chain, ns| chain.then(ns.as_str())),
            None => ExpansionChain::host(),
        }
    }

    fn syntax(&self) -> Syntax {
        if self.host_syntax {
            Syntax::Host
        } else {
            Syntax::Passthrough
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(paths: &[PathBuf]) -> Result<VendorConfigSet> {
    let mut config = VendorConfigSet::new();
    for path in paths {
        let set = vv_config::load_file(path)
            .with_context(|| format!("Failed to load vendor configuration: {:?}", path))?;
        info!("Loaded {:?} ({} namespace(s))", path, set.namespaces().count());
        config.merge(set);
    }
    Ok(config)
}

fn read_file_input(path: &Path, stdin: &mut impl Read) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        stdin
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        Ok(content)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))
    }
}

/// Expands every input through `chain`. The flag is false when an input
/// failed or, with `strict`, still holds an unresolved `$(name)`.
fn expand_all<C: ModuleContext>(ctx: &C, chain: &ExpansionChain, inputs: &[String], strict: bool) -> (Vec<String>, bool) {
    let mut ok = true;
    let outputs = inputs
        .iter()
        .map(|input| {
            let output = chain.expand(ctx, input);
            if strict {
                // A failed input was already reported by `expand`
                if let Ok(names) = chain.unresolved(ctx, input) {
                    if !names.is_empty() {
                        error!("Unresolved variables in {:?}: {}", input, names.join(", "));
                        ok = false;
                    }
                }
            }
            output
        })
        .collect();
    (outputs, ok)
}

fn run(cli: &Cli, stdin: &mut impl Read, out: &mut impl Write) -> Result<bool> {
    let config = load_config(&cli.configs)?;
    if cli.print_config {
        writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
        return Ok(true);
    }

    let chain = cli.chain();
    debug!("Expansion passes: {:?}", chain.namespaces());
    let ctx = BuildContext::new(MODULE_NAME, &config).with_syntax(cli.syntax());

    let ok = if cli.text.is_empty() {
        let path = cli.file.as_deref().unwrap_or(Path::new("-"));
        let content = read_file_input(path, stdin)?;
        let (outputs, ok) = expand_all(&ctx, &chain, &[content], cli.strict);
        for output in outputs {
            write!(out, "{}", output)?;
        }
        ok
    } else {
        let (outputs, ok) = expand_all(&ctx, &chain, &cli.text, cli.strict);
        for output in outputs {
            writeln!(out, "{}", output)?;
        }
        ok
    };
    out.flush()?;

    Ok(ok && !ctx.failed())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    debug!("CLI arguments: {:?}", cli);

    match run(&cli, &mut io::stdin().lock(), &mut io::stdout().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
